use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::iso3166::{CountryRecord, COUNTRIES};
use crate::ValidationError;

/// Colloquial names that are not part of the registry itself.
const ALIASES: [(&str, &str); 15] = [
    ("u.k.", "GB"),
    ("great britain", "GB"),
    ("britain", "GB"),
    ("england", "GB"),
    ("u.s.", "US"),
    ("u.s.a.", "US"),
    ("america", "US"),
    ("korea", "KR"),
    ("russia", "RU"),
    ("holland", "NL"),
    ("ivory coast", "CI"),
    ("turkey", "TR"),
    ("dr congo", "CD"),
    ("democratic republic of the congo", "CD"),
    ("vatican", "VA"),
];

/// Lowercased alpha-3, numeric, name variants and aliases -> alpha-2.
static NAME_INDEX: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(COUNTRIES.len() * 4 + ALIASES.len());
    for record in &COUNTRIES {
        index.insert(record.alpha_3.to_lowercase(), record.alpha_2);
        index.insert(record.numeric.to_owned(), record.alpha_2);
        for name in names(record) {
            index.insert(fold(name), record.alpha_2);
        }
    }
    for (alias, alpha_2) in ALIASES {
        index.entry(alias.to_owned()).or_insert(alpha_2);
    }
    index
});

fn names(record: &CountryRecord) -> impl Iterator<Item = &'static str> {
    [Some(record.name), record.official_name, record.common_name]
        .into_iter()
        .flatten()
}

/// Lowercase, collapse inner whitespace and drop a leading "the ".
fn fold(input: &str) -> String {
    let collapsed = input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    match collapsed.strip_prefix("the ") {
        Some(rest) => rest.to_owned(),
        None => collapsed,
    }
}

/// ISO 3166-1 alpha-2 country code.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(&'static CountryRecord);

impl CountryCode {
    /// Normalize a country code or name. See [`normalize_country`].
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        normalize_country(input)
    }

    /// Strict alpha-2 lookup (case-insensitive).
    pub fn from_alpha2(input: &str) -> Result<Self, ValidationError> {
        let upper = input.trim().to_ascii_uppercase();
        COUNTRIES
            .binary_search_by(|record| record.alpha_2.cmp(upper.as_str()))
            .map(|index| Self(&COUNTRIES[index]))
            .map_err(|_| ValidationError::InvalidCountryCode {
                value: input.to_owned(),
            })
    }

    pub const fn as_str(self) -> &'static str {
        self.0.alpha_2
    }

    /// Registry entry of this code.
    pub const fn record(self) -> &'static CountryRecord {
        self.0
    }

    pub fn name(self) -> &'static str {
        self.0.common_name.unwrap_or(self.0.name)
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CountryCode").field(&self.as_str()).finish()
    }
}

impl PartialEq for CountryCode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for CountryCode {}

impl Hash for CountryCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for CountryCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CountryCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

/// Map a 2-letter code or a country name to its alpha-2 code.
///
/// Two-character input is checked strictly against the alpha-2 registry and
/// fails with `InvalidCountryCode`. Longer input is looked up by alpha-3 code,
/// numeric code, short/official/common name or a colloquial alias, ignoring
/// case, and fails with `UnknownCountry`.
pub fn normalize_country(input: &str) -> Result<CountryCode, ValidationError> {
    let trimmed = input.trim();
    if trimmed.chars().count() == 2 {
        return CountryCode::from_alpha2(trimmed);
    }

    NAME_INDEX
        .get(&fold(trimmed))
        .and_then(|alpha_2| CountryCode::from_alpha2(alpha_2).ok())
        .ok_or_else(|| ValidationError::UnknownCountry {
            value: input.to_owned(),
        })
}

impl Display for CountryCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.as_str().to_owned()
    }
}

impl PartialEq<str> for CountryCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CountryCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
