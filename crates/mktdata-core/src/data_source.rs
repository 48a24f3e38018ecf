use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{History, HistoryPeriod, Price, SecurityCriteria, Symbol, Ticker};

/// Classification of a [`SourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceErrorKind {
    NotFound,
    InvalidRequest,
    PriceMismatch,
    Unavailable,
    Internal,
}

/// Structured error returned by data sources.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
    mismatch: Option<PriceVerificationError>,
}

impl SourceError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::NotFound,
            message: message.into(),
            mismatch: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
            mismatch: None,
        }
    }

    pub fn price_mismatch(detail: PriceVerificationError) -> Self {
        Self {
            kind: SourceErrorKind::PriceMismatch,
            message: detail.to_string(),
            mismatch: Some(detail),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
            mismatch: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Internal,
            message: message.into(),
            mismatch: None,
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Observed prices when the error is a [`SourceErrorKind::PriceMismatch`].
    pub fn mismatch(&self) -> Option<&PriceVerificationError> {
        self.mismatch.as_ref()
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::NotFound => "source.not_found",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
            SourceErrorKind::PriceMismatch => "source.price_mismatch",
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::Internal => "source.internal",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// A price that did not fall within what the market actually traded.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceVerificationError {
    pub message: String,
    pub ticker: Ticker,
    pub actual_date: Option<Date>,
    pub expected_price: Option<f64>,
    pub actual_low: Option<f64>,
    pub actual_high: Option<f64>,
    pub actual_close: Option<f64>,
}

impl PriceVerificationError {
    pub fn new(message: impl Into<String>, ticker: Ticker) -> Self {
        Self {
            message: message.into(),
            ticker,
            actual_date: None,
            expected_price: None,
            actual_low: None,
            actual_high: None,
            actual_close: None,
        }
    }
}

impl Display for PriceVerificationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)?;

        let range = match (self.actual_low, self.actual_high) {
            (Some(low), Some(high)) => Some(format!("Actual Range: {low:.2} - {high:.2}")),
            _ => None,
        };
        let close = self.actual_close.map(|close| format!("Close: {close:.2}"));
        let details: Vec<String> = range.into_iter().chain(close).collect();

        if !details.is_empty() {
            write!(f, " ({})", details.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for PriceVerificationError {}

/// Source of security metadata and price history.
///
/// Implementations are shared behind `&dyn DataSource` and must be
/// `Send + Sync`.
pub trait DataSource: Send + Sync {
    /// Symbols matching a free-text query.
    fn search(&self, query: &str) -> Result<Vec<Symbol>, SourceError>;

    /// Best symbol for the criteria, or `None` when nothing matches.
    fn resolve(&self, criteria: &SecurityCriteria) -> Result<Option<Symbol>, SourceError>;

    /// Price history of `ticker` over `period`.
    fn history(&self, ticker: &Ticker, period: HistoryPeriod) -> Result<History, SourceError>;

    /// Whether `price` was traded for `ticker` on `date`.
    fn validate(&self, ticker: &Ticker, date: Date, price: Price) -> Result<bool, SourceError>;
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn ticker() -> Ticker {
        Ticker::parse("AAPL").expect("valid ticker")
    }

    #[test]
    fn price_mismatch_display_includes_range_and_close() {
        let mut detail = PriceVerificationError::new("price 200.00 not traded on 2023-01-03", ticker());
        detail.actual_date = Some(date!(2023 - 01 - 03));
        detail.expected_price = Some(200.0);
        detail.actual_low = Some(124.17);
        detail.actual_high = Some(130.9);
        detail.actual_close = Some(125.07);

        assert_eq!(
            detail.to_string(),
            "price 200.00 not traded on 2023-01-03 (Actual Range: 124.17 - 130.90, Close: 125.07)"
        );

        let error = SourceError::price_mismatch(detail);
        assert_eq!(error.kind(), SourceErrorKind::PriceMismatch);
        assert_eq!(error.code(), "source.price_mismatch");
        assert_eq!(error.mismatch().and_then(|m| m.actual_close), Some(125.07));
    }

    #[test]
    fn price_mismatch_display_omits_missing_parts() {
        let mut detail = PriceVerificationError::new("no match", ticker());
        assert_eq!(detail.to_string(), "no match");

        detail.actual_close = Some(10.0);
        assert_eq!(detail.to_string(), "no match (Close: 10.00)");
    }

    #[test]
    fn display_appends_stable_code() {
        let error = SourceError::not_found("unknown ticker 'ZZZ'");
        assert_eq!(error.to_string(), "unknown ticker 'ZZZ' (source.not_found)");
        assert!(error.mismatch().is_none());
    }
}
