//! Choices offered by the select inputs.

pub const SALUTATIONS: [&str; 3] = ["Mr.", "Miss.", "Mrs."];
pub const GENDERS: [&str; 2] = ["Male", "Female"];
pub const STATES: [&str; 5] = ["Haryana", "UP", "MP", "Raj", "AP"];
pub const COUNTRIES: [&str; 5] = ["India", "UK", "USA", "Australia", "Japan"];
pub const CARD_TYPES: [&str; 3] = ["Visa", "MasterCard", "American Express"];

/// Number of selectable expiry years, starting with the current one.
pub const EXPIRY_YEAR_SPAN: i32 = 10;

/// `1` through `12`, unpadded.
#[must_use]
pub fn expiry_months() -> Vec<String> {
    (1..=12).map(|month: u8| month.to_string()).collect()
}

/// `current_year` and the nine years after it.
#[must_use]
pub fn expiry_years(current_year: i32) -> Vec<String> {
    (current_year..current_year + EXPIRY_YEAR_SPAN)
        .map(|year| year.to_string())
        .collect()
}
