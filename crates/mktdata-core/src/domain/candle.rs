use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use super::timestamp::datetime_serde;
use super::DateInput;
use crate::error::Violations;
use crate::{ModelError, ValidationError};

/// Single price candle.
///
/// Price and volume fields are optional, finite and non-negative. No relation
/// between them is enforced. Setters re-validate and leave the candle
/// untouched when the new value is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OhlcvBuilder")]
pub struct Ohlcv {
    #[serde(serialize_with = "datetime_serde::serialize")]
    date: PrimitiveDateTime,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<f64>,
}

impl Ohlcv {
    pub fn builder(date: impl Into<DateInput>) -> OhlcvBuilder {
        OhlcvBuilder {
            date: Some(date.into()),
            ..OhlcvBuilder::default()
        }
    }

    pub fn date(&self) -> PrimitiveDateTime {
        self.date
    }

    pub fn open(&self) -> Option<f64> {
        self.open
    }

    pub fn high(&self) -> Option<f64> {
        self.high
    }

    pub fn low(&self) -> Option<f64> {
        self.low
    }

    pub fn close(&self) -> Option<f64> {
        self.close
    }

    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    pub fn set_date(&mut self, date: impl Into<DateInput>) -> Result<(), ValidationError> {
        self.date = date.into().to_datetime()?;
        Ok(())
    }

    pub fn set_open(&mut self, value: Option<f64>) -> Result<(), ValidationError> {
        self.open = validate_optional_non_negative("open", value)?;
        Ok(())
    }

    pub fn set_high(&mut self, value: Option<f64>) -> Result<(), ValidationError> {
        self.high = validate_optional_non_negative("high", value)?;
        Ok(())
    }

    pub fn set_low(&mut self, value: Option<f64>) -> Result<(), ValidationError> {
        self.low = validate_optional_non_negative("low", value)?;
        Ok(())
    }

    pub fn set_close(&mut self, value: Option<f64>) -> Result<(), ValidationError> {
        self.close = validate_optional_non_negative("close", value)?;
        Ok(())
    }

    pub fn set_volume(&mut self, value: Option<f64>) -> Result<(), ValidationError> {
        self.volume = validate_optional_non_negative("volume", value)?;
        Ok(())
    }

    /// Whether `price` lies within the candle's traded range.
    ///
    /// A candle without low/high only matches its close exactly. Returns
    /// `None` when the candle has no price information at all.
    pub fn contains_price(&self, price: f64) -> Option<bool> {
        match (self.low, self.high, self.close) {
            (Some(low), Some(high), _) => Some(low <= price && price <= high),
            (_, _, Some(close)) => Some(close == price),
            _ => None,
        }
    }
}

/// Raw candle fields, validated together by [`OhlcvBuilder::build`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OhlcvBuilder {
    date: Option<DateInput>,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
    volume: Option<f64>,
}

impl OhlcvBuilder {
    pub fn open(mut self, value: f64) -> Self {
        self.open = Some(value);
        self
    }

    pub fn high(mut self, value: f64) -> Self {
        self.high = Some(value);
        self
    }

    pub fn low(mut self, value: f64) -> Self {
        self.low = Some(value);
        self
    }

    pub fn close(mut self, value: f64) -> Self {
        self.close = Some(value);
        self
    }

    pub fn volume(mut self, value: f64) -> Self {
        self.volume = Some(value);
        self
    }

    pub fn build(self) -> Result<Ohlcv, ModelError> {
        let mut violations = Violations::new("Ohlcv");

        let date = violations.check(
            "date",
            self.date
                .ok_or_else(|| ValidationError::invalid_value("date", "field required"))
                .and_then(|date| date.to_datetime()),
        );
        let open = violations.check("open", validate_optional_non_negative("open", self.open));
        let high = violations.check("high", validate_optional_non_negative("high", self.high));
        let low = violations.check("low", validate_optional_non_negative("low", self.low));
        let close = violations.check("close", validate_optional_non_negative("close", self.close));
        let volume = violations.check(
            "volume",
            validate_optional_non_negative("volume", self.volume),
        );

        let (Some(date), Some(open), Some(high), Some(low), Some(close), Some(volume)) =
            (date, open, high, low, close, volume)
        else {
            return Err(violations.into_error());
        };

        Ok(Ohlcv {
            date,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

impl TryFrom<OhlcvBuilder> for Ohlcv {
    type Error = ModelError;

    fn try_from(value: OhlcvBuilder) -> Result<Self, Self::Error> {
        value.build()
    }
}

fn validate_optional_non_negative(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<f64>, ValidationError> {
    match value {
        Some(value) if !value.is_finite() => Err(ValidationError::invalid_value(
            field,
            "must be finite",
        )),
        Some(value) if value < 0.0 => Err(ValidationError::invalid_value(
            field,
            "must be non-negative",
        )),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn builds_candle_from_text_date() {
        let candle = Ohlcv::builder("2023/01/01 10:30")
            .close(100.0)
            .volume(500.0)
            .build()
            .expect("valid candle");
        assert_eq!(candle.date(), datetime!(2023-01-01 10:30:00));
        assert_eq!(candle.close(), Some(100.0));
        assert_eq!(candle.open(), None);
    }

    #[test]
    fn native_date_becomes_midnight() {
        let candle = Ohlcv::builder(date!(2023 - 01 - 02))
            .build()
            .expect("valid candle");
        assert_eq!(candle.date(), datetime!(2023-01-02 00:00:00));
    }

    #[test]
    fn reports_all_bad_fields() {
        let err = Ohlcv::builder("yesterday-ish")
            .open(-1.0)
            .close(f64::NAN)
            .build()
            .expect_err("must fail");
        assert_eq!(err.violations().len(), 3);
        assert!(matches!(
            err.field("date"),
            Some(ValidationError::InvalidDateFormat { .. })
        ));
        assert!(err.field("open").is_some());
        assert!(err.field("close").is_some());
    }

    #[test]
    fn setter_revalidates_and_keeps_previous_value() {
        let mut candle = Ohlcv::builder("2023-01-01")
            .close(10.0)
            .build()
            .expect("valid candle");

        candle.set_close(Some(11.0)).expect("valid update");
        assert_eq!(candle.close(), Some(11.0));

        assert!(candle.set_close(Some(-3.0)).is_err());
        assert_eq!(candle.close(), Some(11.0));

        assert!(candle.set_date("garbage").is_err());
        assert_eq!(candle.date(), datetime!(2023-01-01 00:00:00));

        candle.set_date("2023-01-05 16:00:00").expect("valid date");
        assert_eq!(candle.date(), datetime!(2023-01-05 16:00:00));
    }

    #[test]
    fn checks_price_against_range() {
        let candle = Ohlcv::builder("2023-01-01")
            .low(9.5)
            .high(10.5)
            .close(10.0)
            .build()
            .expect("valid candle");
        assert_eq!(candle.contains_price(10.2), Some(true));
        assert_eq!(candle.contains_price(11.0), Some(false));

        let close_only = Ohlcv::builder("2023-01-01").close(10.0).build().expect("valid");
        assert_eq!(close_only.contains_price(10.0), Some(true));
        assert_eq!(close_only.contains_price(10.1), Some(false));

        let empty = Ohlcv::builder("2023-01-01").build().expect("valid");
        assert_eq!(empty.contains_price(10.0), None);
    }

    #[test]
    fn serializes_canonical_date() {
        let candle: Ohlcv =
            serde_json::from_str(r#"{"date":"20230101","close":1.5}"#).expect("valid json");
        let json = serde_json::to_value(&candle).expect("serialize");
        assert_eq!(json["date"], "2023-01-01T00:00:00");
        assert_eq!(json["close"], 1.5);
        assert!(json["open"].is_null());
    }
}
