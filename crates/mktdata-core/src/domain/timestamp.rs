use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::ValidationError;

type Layout = &'static [BorrowedFormatItem<'static>];

const DATE_LAYOUTS: [Layout; 3] = [
    format_description!("[year]-[month padding:none]-[day padding:none]"),
    format_description!("[year][month][day]"),
    format_description!("[year]/[month padding:none]/[day padding:none]"),
];

const DATETIME_LAYOUTS: [Layout; 9] = [
    format_description!(
        "[year]-[month padding:none]-[day padding:none] [hour padding:none]:[minute]:[second]"
    ),
    format_description!(
        "[year]-[month padding:none]-[day padding:none] [hour padding:none]:[minute]:[second].[subsecond]"
    ),
    format_description!("[year]-[month padding:none]-[day padding:none] [hour padding:none]:[minute]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!(
        "[year]/[month padding:none]/[day padding:none] [hour padding:none]:[minute]:[second]"
    ),
    format_description!("[year]/[month padding:none]/[day padding:none] [hour padding:none]:[minute]"),
    format_description!("[year][month][day] [hour]:[minute]:[second]"),
];

const CANONICAL_DATETIME: Layout = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const CANONICAL_DATETIME_SUBSECOND: Layout =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

/// Parse a calendar date from any supported layout.
///
/// Datetime strings are accepted too; only their calendar date is kept.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    parse_datetime(input).map(PrimitiveDateTime::date)
}

/// Parse a naive datetime from any supported layout.
///
/// Supported: `YYYY-MM-DD`, `YYYYMMDD`, `YYYY/MM/DD`, each optionally followed
/// by `HH:MM` or `HH:MM:SS` (ISO layouts also take a `T` separator and
/// fractional seconds), and RFC 3339 with an offset, which is converted to UTC.
/// A missing time of day means midnight.
pub fn parse_datetime(input: &str) -> Result<PrimitiveDateTime, ValidationError> {
    let trimmed = input.trim();

    for layout in DATE_LAYOUTS {
        if let Ok(date) = Date::parse(trimmed, layout) {
            return Ok(date.midnight());
        }
    }

    for layout in DATETIME_LAYOUTS {
        if let Ok(datetime) = PrimitiveDateTime::parse(trimmed, layout) {
            return Ok(datetime);
        }
    }

    if let Ok(datetime) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(to_naive_utc(datetime));
    }

    Err(ValidationError::InvalidDateFormat {
        value: input.to_owned(),
    })
}

/// Canonical text form: `YYYY-MM-DDTHH:MM:SS`, with fractional seconds only
/// when they are non-zero.
pub fn format_datetime(value: PrimitiveDateTime) -> Result<String, time::error::Format> {
    if value.nanosecond() == 0 {
        value.format(CANONICAL_DATETIME)
    } else {
        value.format(CANONICAL_DATETIME_SUBSECOND)
    }
}

fn to_naive_utc(value: OffsetDateTime) -> PrimitiveDateTime {
    let utc = value.to_offset(UtcOffset::UTC);
    PrimitiveDateTime::new(utc.date(), utc.time())
}

/// Raw date or datetime input: text in any supported layout, or a value that
/// is already native and passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Text(String),
    Date(Date),
    DateTime(PrimitiveDateTime),
}

/// Same input shapes as [`DateInput`], named for datetime-valued fields.
pub type DateTimeInput = DateInput;

impl DateInput {
    pub fn to_date(&self) -> Result<Date, ValidationError> {
        match self {
            Self::Text(raw) => parse_date(raw),
            Self::Date(date) => Ok(*date),
            Self::DateTime(datetime) => Ok(datetime.date()),
        }
    }

    pub fn to_datetime(&self) -> Result<PrimitiveDateTime, ValidationError> {
        match self {
            Self::Text(raw) => parse_datetime(raw),
            Self::Date(date) => Ok(date.midnight()),
            Self::DateTime(datetime) => Ok(*datetime),
        }
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for DateInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Date> for DateInput {
    fn from(value: Date) -> Self {
        Self::Date(value)
    }
}

impl From<PrimitiveDateTime> for DateInput {
    fn from(value: PrimitiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<OffsetDateTime> for DateInput {
    fn from(value: OffsetDateTime) -> Self {
        Self::DateTime(to_naive_utc(value))
    }
}

impl<'de> Deserialize<'de> for DateInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::Text)
    }
}

/// Calendar date value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StrictDate(Date);

impl StrictDate {
    pub fn new(value: Date) -> Self {
        Self(value)
    }

    pub fn parse(input: impl Into<DateInput>) -> Result<Self, ValidationError> {
        input.into().to_date().map(Self)
    }

    pub const fn value(self) -> Date {
        self.0
    }
}

impl From<Date> for StrictDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl From<StrictDate> for Date {
    fn from(value: StrictDate) -> Self {
        value.0
    }
}

impl Display for StrictDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for StrictDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StrictDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(value).map_err(D::Error::custom)
    }
}

/// Serializes `PrimitiveDateTime` fields in canonical text form.
///
/// Entities read dates back through their builders, so there is no
/// matching deserializer.
pub(crate) mod datetime_serde {
    use super::*;

    pub fn serialize<S>(value: &PrimitiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = format_datetime(*value).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}
