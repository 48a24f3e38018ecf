//! # Domain Models
//!
//! Validated market-data types.
//!
//! ## Overview
//!
//! Every type here is checked when it is built. Raw inputs go through
//! `parse` constructors or builders; entities also validate when they are
//! deserialized, so a value that exists is a value that passed validation.
//!
//! ## Value objects
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Isin`] | 12-character ISIN with verified check digit |
//! | [`Ticker`] | Non-empty trading symbol |
//! | [`Price`] | Finite price |
//! | [`StrictDate`] | Calendar date parsed from any supported layout |
//! | [`CountryCode`] | ISO 3166-1 alpha-2 code |
//! | [`CurrencyCode`] | ISO 4217 currency code |
//! | [`HistoryPeriod`] | History window (`1d` .. `max`) |
//! | [`HistoryInterval`] | Candle spacing (`1m` .. `3mo`) |
//!
//! ## Entities
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Resolved security with optional identifiers |
//! | [`Ohlcv`] | Price candle with optional values |
//! | [`History`] | Candles of one symbol |
//! | [`SecurityCriteria`] | Optional-field resolution query |
//!
//! Builders report every rejected field at once:
//!
//! ```rust
//! use mktdata_core::{Symbol, ValidationError};
//!
//! let err = Symbol::builder("AAPL", "Apple Inc.")
//!     .country("ZZ")
//!     .isin("US0378331006")
//!     .build()
//!     .unwrap_err();
//!
//! assert_eq!(err.violations().len(), 2);
//! assert!(matches!(
//!     err.field("isin"),
//!     Some(ValidationError::InvalidIsinChecksum { .. })
//! ));
//! ```

mod candle;
mod country;
mod criteria;
mod currency;
mod history;
mod interval;
mod isin;
mod iso3166;
mod iso4217;
mod price;
mod symbol;
mod ticker;
mod timestamp;

pub use candle::{Ohlcv, OhlcvBuilder};
pub use country::{normalize_country, CountryCode};
pub use criteria::{SecurityCriteria, SecurityCriteriaBuilder};
pub use currency::CurrencyCode;
pub use history::{FrameRow, History, FRAME_COLUMNS, FRAME_INDEX};
pub use interval::{HistoryInterval, HistoryPeriod};
pub use isin::{validate_isin, Isin};
pub use iso3166::CountryRecord;
pub use price::Price;
pub use symbol::{SearchResult, Symbol, SymbolBuilder};
pub use ticker::Ticker;
pub use timestamp::{
    format_datetime, parse_date, parse_datetime, DateInput, DateTimeInput, StrictDate,
};
