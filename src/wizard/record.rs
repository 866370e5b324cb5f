//! The merged, display-only view of all three drafts.

use crate::wizard::storage::Record;
use std::collections::btree_map;

/// Field-union of step records. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergedRecord {
    fields: Record,
}

impl MergedRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unions `records` in order. When two records share a field name the
    /// first one to supply it wins; later records only fill gaps.
    #[must_use]
    pub fn union_first_wins<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut merged = Self::new();
        for record in records {
            merged.absorb(record);
        }
        merged
    }

    /// Adds every field of `record` not already present.
    pub fn absorb(&mut self, record: Record) {
        for (name, value) in record {
            self.fields.entry(name).or_insert(value);
        }
    }

    /// Raw value, possibly empty.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value if present and non-empty.
    #[must_use]
    pub fn filled(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// True when no field names are present at all. A record of empty
    /// strings is not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.fields.iter()
    }

    #[must_use]
    pub fn into_record(self) -> Record {
        self.fields
    }
}

impl From<Record> for MergedRecord {
    fn from(fields: Record) -> Self {
        Self { fields }
    }
}
