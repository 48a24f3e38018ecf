use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Two-letter country prefix, nine alphanumerics, one ASCII check digit.
static ISIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[A-Z0-9]{9}[0-9]$").expect("ISIN pattern is a valid regex")
});

/// Placeholders some feeds emit instead of an empty ISIN.
const PLACEHOLDERS: [&str; 2] = ["-", "NONE"];

/// Checksum-verified International Securities Identification Number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isin(String);

impl Isin {
    /// Parse a required ISIN. Blank input and placeholders are rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        validate_isin(Some(input))?.ok_or_else(|| ValidationError::InvalidIsinFormat {
            value: input.to_owned(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ISO 3166-1 alpha-2 prefix of the issuing country.
    pub fn country_prefix(&self) -> &str {
        &self.0[..2]
    }

    pub fn value(&self) -> &str {
        self.as_str()
    }
}

/// Clean and verify an optional ISIN.
///
/// `None`, blank input, `-` and `NONE` normalize to `Ok(None)`. Anything else
/// is trimmed, uppercased and checked against the ISIN layout and the Luhn
/// checksum over its letter-expanded digits.
pub fn validate_isin(input: Option<&str>) -> Result<Option<Isin>, ValidationError> {
    let Some(raw) = input else {
        return Ok(None);
    };

    let cleaned = raw.trim().to_ascii_uppercase();
    if cleaned.is_empty() || PLACEHOLDERS.contains(&cleaned.as_str()) {
        return Ok(None);
    }

    if !ISIN_PATTERN.is_match(&cleaned) {
        return Err(ValidationError::InvalidIsinFormat { value: cleaned });
    }

    if !luhn_valid(&cleaned) {
        return Err(ValidationError::InvalidIsinChecksum { value: cleaned });
    }

    Ok(Some(Isin(cleaned)))
}

/// Luhn check over the digit expansion of `code` (`A`=10 .. `Z`=35).
fn luhn_valid(code: &str) -> bool {
    let mut digits = Vec::with_capacity(code.len() * 2);
    for ch in code.chars() {
        match ch {
            '0'..='9' => digits.push(ch as u32 - '0' as u32),
            'A'..='Z' => {
                let value = ch as u32 - 'A' as u32 + 10;
                digits.push(value / 10);
                digits.push(value % 10);
            }
            _ => return false,
        }
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(index, &digit)| {
            if index % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

impl Display for Isin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Isin {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Isin {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Isin> for String {
    fn from(value: Isin) -> Self {
        value.0
    }
}

impl PartialEq<str> for Isin {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Isin {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
