//! # mktdata Core
//!
//! Validated market-data types and the data source contract.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Identifier validation**: ISIN format and Luhn check digit
//! - **Flexible date parsing** into canonical `time` values
//! - **Country and currency normalization** against ISO 3166-1 / ISO 4217
//! - **Entities** (`Symbol`, `Ohlcv`, `History`, `SecurityCriteria`) that
//!   validate on construction and on deserialization
//! - **Data source trait** with an in-memory catalog implementation
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | In-memory data source loaded from JSON |
//! | [`data_source`] | Data source trait and structured source errors |
//! | [`domain`] | Value objects and entities |
//! | [`error`] | Core error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use mktdata_core::{validate_isin, normalize_country, parse_date};
//!
//! let isin = validate_isin(Some(" us0378331005 ")).unwrap().unwrap();
//! assert_eq!(isin.as_str(), "US0378331005");
//!
//! assert_eq!(validate_isin(Some("-")).unwrap(), None);
//! assert_eq!(normalize_country("United Kingdom").unwrap().as_str(), "GB");
//! assert_eq!(parse_date("20230101").unwrap().to_string(), "2023-01-01");
//! ```

pub mod catalog;
pub mod data_source;
pub mod domain;
pub mod error;

pub use catalog::{CatalogDocument, CatalogSource};
pub use data_source::{DataSource, PriceVerificationError, SourceError, SourceErrorKind};
pub use domain::{
    format_datetime, normalize_country, parse_date, parse_datetime, validate_isin, CountryCode,
    CountryRecord, CurrencyCode, DateInput, DateTimeInput, FrameRow, History, HistoryInterval,
    HistoryPeriod, Isin, Ohlcv, OhlcvBuilder, Price, SearchResult, SecurityCriteria,
    SecurityCriteriaBuilder, StrictDate, Symbol, SymbolBuilder, Ticker, FRAME_COLUMNS,
    FRAME_INDEX,
};
pub use error::{CoreError, FieldViolation, ModelError, ValidationError};
