//! Shared frontend utilities for configuration, browser storage, errors, and
//! build metadata.
//!
//! Drafts live in browser storage under the keys the core wizard defines,
//! optionally namespaced by a configured prefix. Payment details are stored
//! unencrypted, so deployments that care should pick `session` storage.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod storage;

pub(crate) use errors::AppError;
