use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::SourceError;

/// Field-level validation errors exposed by `mktdata-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid ISIN format: '{value}'")]
    InvalidIsinFormat { value: String },
    #[error("invalid ISIN checksum: '{value}'")]
    InvalidIsinChecksum { value: String },

    #[error("unrecognized date/time format: '{value}'")]
    InvalidDateFormat { value: String },

    #[error("unknown country name: '{value}'")]
    UnknownCountry { value: String },
    #[error("invalid ISO 3166-1 alpha-2 country code: '{value}'")]
    InvalidCountryCode { value: String },

    #[error("invalid ISO 4217 currency code: '{value}'")]
    InvalidCurrencyCode { value: String },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("invalid period '{value}', expected one of 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max")]
    InvalidPeriod { value: String },
    #[error("invalid interval '{value}', expected one of 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo")]
    InvalidInterval { value: String },
}

impl ValidationError {
    pub(crate) fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for the error category.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidIsinFormat { .. } => "invalid_format",
            Self::InvalidIsinChecksum { .. } => "invalid_checksum",
            Self::InvalidDateFormat { .. } => "invalid_date_format",
            Self::UnknownCountry { .. } => "unknown_country",
            Self::InvalidCountryCode { .. } => "invalid_country_code",
            Self::InvalidCurrencyCode { .. } => "invalid_currency_code",
            Self::InvalidValue { .. } => "invalid_value",
            Self::InvalidPeriod { .. } => "invalid_period",
            Self::InvalidInterval { .. } => "invalid_interval",
        }
    }
}

/// One rejected field of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub error: ValidationError,
}

/// Aggregate construction failure listing every rejected field of an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelError {
    model: &'static str,
    violations: Vec<FieldViolation>,
}

impl ModelError {
    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Error reported for `field`, if that field was rejected.
    pub fn field(&self, field: &str) -> Option<&ValidationError> {
        self.violations
            .iter()
            .find(|violation| violation.field == field)
            .map(|violation| &violation.error)
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} validation error{} for {}",
            self.violations.len(),
            if self.violations.len() == 1 { "" } else { "s" },
            self.model
        )?;
        for violation in &self.violations {
            write!(f, "\n  {}: {}", violation.field, violation.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ModelError {}

/// Collects field results while an entity is being built.
#[derive(Debug)]
pub(crate) struct Violations {
    model: &'static str,
    violations: Vec<FieldViolation>,
}

impl Violations {
    pub(crate) fn new(model: &'static str) -> Self {
        Self {
            model,
            violations: Vec::new(),
        }
    }

    /// Records the error of a failed field and yields its value otherwise.
    pub(crate) fn check<T>(
        &mut self,
        field: &'static str,
        result: Result<T, ValidationError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.violations.push(FieldViolation { field, error });
                None
            }
        }
    }

    /// Consumes the collector into the aggregate error.
    pub(crate) fn into_error(self) -> ModelError {
        tracing::debug!(
            model = self.model,
            count = self.violations.len(),
            "rejected {} input",
            self.model
        );
        ModelError {
            model: self.model,
            violations: self.violations,
        }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
