use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::iso4217::CURRENCIES;
use crate::ValidationError;

/// Registry codes that are not tradable currencies: bond market units,
/// precious metals, SDR, testing and "no currency".
const NON_TRADABLE: [&str; 11] = [
    "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XDR", "XPD", "XPT", "XTS", "XXX",
];

/// ISO 4217 alphabetic currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(&'static str);

impl CurrencyCode {
    /// Validate and normalize a currency to its uppercase ISO 4217 code.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        if NON_TRADABLE.contains(&normalized.as_str()) {
            return Err(ValidationError::InvalidCurrencyCode {
                value: input.to_owned(),
            });
        }

        CURRENCIES
            .binary_search_by(|(code, _)| (*code).cmp(normalized.as_str()))
            .map(|index| Self(CURRENCIES[index].0))
            .map_err(|_| ValidationError::InvalidCurrencyCode {
                value: input.to_owned(),
            })
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Registry name, e.g. "US Dollar".
    pub fn name(self) -> &'static str {
        CURRENCIES
            .binary_search_by(|(code, _)| (*code).cmp(self.0))
            .map(|index| CURRENCIES[index].1)
            .unwrap_or(self.0)
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CurrencyCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0.to_owned()
    }
}

impl PartialEq<str> for CurrencyCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CurrencyCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
