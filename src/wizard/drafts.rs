//! Per-step draft records and their field vocabularies.
//!
//! Drafts serialize with the camelCase wire names used as store keys inside
//! each JSON blob. Missing fields rehydrate as empty strings.

use crate::wizard::storage::Record;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt;

/// A named field of one step's draft.
pub trait DraftField: Copy + Eq + fmt::Debug + 'static {
    /// Every field in display order.
    const ALL: &'static [Self];

    /// Wire name, also the key of the error map.
    fn name(self) -> &'static str;

    /// Human label used in forms and messages.
    fn label(self) -> &'static str;

    /// Looks a field up by its wire name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// A step draft: a flat record of string fields.
pub trait Draft: Default + Serialize + DeserializeOwned {
    type Field: DraftField;

    fn value(&self, field: Self::Field) -> &str;

    fn value_mut(&mut self, field: Self::Field) -> &mut String;

    /// Flattens the draft into a wire-named record.
    fn to_record(&self) -> Record {
        Self::Field::ALL
            .iter()
            .map(|field| (field.name().to_string(), self.value(*field).to_string()))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccountField {
    Username,
    Password,
    ConfirmPassword,
    Email,
}

impl DraftField for AccountField {
    const ALL: &'static [Self] = &[
        Self::Username,
        Self::Password,
        Self::ConfirmPassword,
        Self::Email,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Email => "email",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Email => "Email",
        }
    }
}

/// Account credentials. The password is stored as typed.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDraft {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
}

impl fmt::Debug for AccountDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountDraft")
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("confirm_password", &redacted(&self.confirm_password))
            .field("email", &self.email)
            .finish()
    }
}

impl Draft for AccountDraft {
    type Field = AccountField;

    fn value(&self, field: AccountField) -> &str {
        match field {
            AccountField::Username => &self.username,
            AccountField::Password => &self.password,
            AccountField::ConfirmPassword => &self.confirm_password,
            AccountField::Email => &self.email,
        }
    }

    fn value_mut(&mut self, field: AccountField) -> &mut String {
        match field {
            AccountField::Username => &mut self.username,
            AccountField::Password => &mut self.password,
            AccountField::ConfirmPassword => &mut self.confirm_password,
            AccountField::Email => &mut self.email,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PersonalField {
    Salutation,
    Gender,
    FirstName,
    LastName,
    Email,
    Phone,
    ZipCode,
    State,
    HomeAddress,
    Country,
}

impl DraftField for PersonalField {
    const ALL: &'static [Self] = &[
        Self::Salutation,
        Self::Gender,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::ZipCode,
        Self::State,
        Self::HomeAddress,
        Self::Country,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Salutation => "salutation",
            Self::Gender => "gender",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ZipCode => "zipCode",
            Self::State => "state",
            Self::HomeAddress => "homeAddress",
            Self::Country => "country",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Salutation => "Salutation",
            Self::Gender => "Gender",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::ZipCode => "Zip Code",
            Self::State => "State",
            Self::HomeAddress => "Home Address",
            Self::Country => "Country",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDraft {
    pub salutation: String,
    pub gender: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub zip_code: String,
    pub state: String,
    pub home_address: String,
    pub country: String,
}

impl Draft for PersonalDraft {
    type Field = PersonalField;

    fn value(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Salutation => &self.salutation,
            PersonalField::Gender => &self.gender,
            PersonalField::FirstName => &self.first_name,
            PersonalField::LastName => &self.last_name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::ZipCode => &self.zip_code,
            PersonalField::State => &self.state,
            PersonalField::HomeAddress => &self.home_address,
            PersonalField::Country => &self.country,
        }
    }

    fn value_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::Salutation => &mut self.salutation,
            PersonalField::Gender => &mut self.gender,
            PersonalField::FirstName => &mut self.first_name,
            PersonalField::LastName => &mut self.last_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::ZipCode => &mut self.zip_code,
            PersonalField::State => &mut self.state,
            PersonalField::HomeAddress => &mut self.home_address,
            PersonalField::Country => &mut self.country,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaymentField {
    CardType,
    CardNumber,
    Cvc,
    CardHolder,
    ExpiryMonth,
    ExpiryYear,
}

impl DraftField for PaymentField {
    const ALL: &'static [Self] = &[
        Self::CardType,
        Self::CardNumber,
        Self::Cvc,
        Self::CardHolder,
        Self::ExpiryMonth,
        Self::ExpiryYear,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::CardType => "cardType",
            Self::CardNumber => "cardNumber",
            Self::Cvc => "cvc",
            Self::CardHolder => "cardHolder",
            Self::ExpiryMonth => "expiryMonth",
            Self::ExpiryYear => "expiryYear",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::CardType => "Card Type",
            Self::CardNumber => "Card Number",
            Self::Cvc => "CVC",
            Self::CardHolder => "Card Holder Name",
            Self::ExpiryMonth => "Expiry Month",
            Self::ExpiryYear => "Expiry Year",
        }
    }
}

/// Card details. Card number and CVC only ever hold digits.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentDraft {
    pub card_type: String,
    pub card_number: String,
    pub cvc: String,
    pub card_holder: String,
    pub expiry_month: String,
    pub expiry_year: String,
}

impl fmt::Debug for PaymentDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentDraft")
            .field("card_type", &self.card_type)
            .field(
                "card_number",
                &crate::wizard::confirmation::mask_card_number(&self.card_number),
            )
            .field("cvc", &redacted(&self.cvc))
            .field("card_holder", &self.card_holder)
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .finish()
    }
}

impl Draft for PaymentDraft {
    type Field = PaymentField;

    fn value(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::CardType => &self.card_type,
            PaymentField::CardNumber => &self.card_number,
            PaymentField::Cvc => &self.cvc,
            PaymentField::CardHolder => &self.card_holder,
            PaymentField::ExpiryMonth => &self.expiry_month,
            PaymentField::ExpiryYear => &self.expiry_year,
        }
    }

    fn value_mut(&mut self, field: PaymentField) -> &mut String {
        match field {
            PaymentField::CardType => &mut self.card_type,
            PaymentField::CardNumber => &mut self.card_number,
            PaymentField::Cvc => &mut self.cvc,
            PaymentField::CardHolder => &mut self.card_holder,
            PaymentField::ExpiryMonth => &mut self.expiry_month,
            PaymentField::ExpiryYear => &mut self.expiry_year,
        }
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "<redacted>" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_draft_uses_camel_case_wire_names() {
        let draft = AccountDraft {
            username: "bob".to_string(),
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            email: "bob@example.com".to_string(),
        };
        let json = serde_json::to_value(&draft).expect("serialize draft");
        assert_eq!(json["confirmPassword"], "hunter2");
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn partial_blob_rehydrates_with_empty_defaults() {
        let draft: PersonalDraft =
            serde_json::from_str(r#"{"firstName":"Jane","zipCode":"110001"}"#)
                .expect("partial draft");
        assert_eq!(draft.first_name, "Jane");
        assert_eq!(draft.zip_code, "110001");
        assert!(draft.phone.is_empty());
        assert!(draft.country.is_empty());
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let account = AccountDraft {
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            ..AccountDraft::default()
        };
        let rendered = format!("{account:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));

        let payment = PaymentDraft {
            card_number: "4111111111111111".to_string(),
            cvc: "123".to_string(),
            ..PaymentDraft::default()
        };
        let rendered = format!("{payment:?}");
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("\"123\""));
        assert!(rendered.contains("**** **** **** 1111"));
    }

    #[test]
    fn to_record_lists_every_field() {
        let record = PaymentDraft {
            card_type: "Visa".to_string(),
            ..PaymentDraft::default()
        }
        .to_record();
        assert_eq!(record.len(), PaymentField::ALL.len());
        assert_eq!(record.get("cardType").map(String::as_str), Some("Visa"));
        assert_eq!(record.get("expiryYear").map(String::as_str), Some(""));
    }

    #[test]
    fn fields_parse_from_wire_names() {
        assert_eq!(
            PersonalField::from_name("homeAddress"),
            Some(PersonalField::HomeAddress)
        );
        assert_eq!(
            AccountField::from_name("confirmPassword"),
            Some(AccountField::ConfirmPassword)
        );
        assert_eq!(PaymentField::from_name("card_number"), None);
    }
}
