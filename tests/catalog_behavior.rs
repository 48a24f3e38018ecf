//! Behavior-driven tests for the catalog data source
//!
//! These tests verify how securities are resolved from partial criteria,
//! how history windows are cut and how price checks report what actually
//! traded.

use std::io::Write;

use mktdata_tests::{
    sample_source, ticker, CatalogSource, CoreError, HistoryPeriod, Price, SecurityCriteria,
    SourceErrorKind,
};
use time::macros::date;

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn when_isin_and_ticker_disagree_isin_wins() {
    // Given: Criteria naming Microsoft's ISIN but Apple's ticker
    let source = sample_source();
    let criteria = SecurityCriteria::builder()
        .isin("US5949181045")
        .symbol("AAPL")
        .build()
        .expect("valid criteria");

    // When: Resolved
    let symbol = source.resolve(&criteria).expect("resolve");

    // Then: The ISIN decides
    assert_eq!(symbol.expect("match").ticker().as_str(), "MSFT");
}

#[test]
fn when_isin_is_unknown_resolution_falls_back_to_ticker() {
    let source = sample_source();
    let criteria = SecurityCriteria::builder()
        .isin("GB0002634946")
        .symbol("spy")
        .build()
        .expect("valid criteria");

    let symbol = source.resolve(&criteria).expect("resolve").expect("match");
    assert_eq!(symbol.ticker().as_str(), "SPY");
}

#[test]
fn when_exchange_does_not_match_nothing_resolves() {
    let source = sample_source();
    let criteria = SecurityCriteria::builder()
        .symbol("AAPL")
        .exchange("LSE")
        .build()
        .expect("valid criteria");

    assert!(source.resolve(&criteria).expect("resolve").is_none());
}

#[test]
fn when_criteria_are_empty_nothing_resolves() {
    let source = sample_source();
    let criteria = SecurityCriteria::default();
    assert!(source.resolve(&criteria).expect("resolve").is_none());
}

// =============================================================================
// History windows
// =============================================================================

#[test]
fn when_period_is_ytd_window_starts_on_january_first() {
    // Given: Sample candles spanning the 2022/2023 year boundary
    let source = sample_source();

    // When: Year-to-date and max histories are requested
    let ytd = source
        .history(&ticker("SPY"), HistoryPeriod::YearToDate)
        .expect("ytd");
    let max = source.history(&ticker("SPY"), HistoryPeriod::Max).expect("max");

    // Then: Only 2023 candles remain in the ytd window
    assert_eq!(max.len(), ytd.len() + 1);
    assert!(ytd
        .candles
        .iter()
        .all(|candle| candle.date().date() >= date!(2023 - 01 - 01)));
}

#[test]
fn when_period_is_one_day_only_latest_candle_remains() {
    let source = sample_source();
    let history = source
        .history(&ticker("AAPL"), HistoryPeriod::OneDay)
        .expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history.candles[0].date().date(), date!(2023 - 01 - 09));
}

// =============================================================================
// Price validation
// =============================================================================

#[test]
fn when_price_is_within_day_range_validation_passes() {
    let source = sample_source();
    let traded = source
        .validate(
            &ticker("SPY"),
            date!(2023 - 01 - 06),
            Price::new(385.0).expect("price"),
        )
        .expect("validate");
    assert!(traded);
}

#[test]
fn when_price_is_outside_day_range_error_carries_actual_range() {
    // Given: A price far above anything Microsoft traded that day
    let source = sample_source();

    // When: Validated
    let err = source
        .validate(
            &ticker("MSFT"),
            date!(2023 - 01 - 04),
            Price::new(300.0).expect("price"),
        )
        .expect_err("mismatch");

    // Then: The error reports the range and close that actually traded
    assert_eq!(err.kind(), SourceErrorKind::PriceMismatch);
    let detail = err.mismatch().expect("detail");
    assert_eq!(detail.expected_price, Some(300.0));
    assert_eq!(detail.actual_date, Some(date!(2023 - 01 - 04)));
    assert!(err
        .message()
        .ends_with("(Actual Range: 225.96 - 232.87, Close: 229.10)"));
}

#[test]
fn when_no_candle_exists_on_date_validation_reports_not_found() {
    let source = sample_source();
    let err = source
        .validate(
            &ticker("AAPL"),
            date!(2023 - 01 - 07),
            Price::new(130.0).expect("price"),
        )
        .expect_err("weekend");
    assert_eq!(err.kind(), SourceErrorKind::NotFound);
}

// =============================================================================
// Catalog files
// =============================================================================

#[test]
fn when_catalog_file_is_loaded_names_are_normalized() {
    // Given: A catalog file with a country name and a compact date
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "symbols": [
                {{"ticker": "7203", "name": "Toyota Motor Corp", "country": "Japan", "currency": "jpy"}}
            ],
            "histories": [
                {{"symbol": {{"ticker": "7203", "name": "Toyota Motor Corp"}},
                  "candles": [{{"date": "20240105", "low": 2600.0, "high": 2700.0, "close": 2650.0}}]}}
            ]
        }}"#
    )
    .expect("write catalog");

    // When: Loaded
    let catalog = CatalogSource::load(file.path()).expect("valid catalog");

    // Then: The first listing wins and carries canonical codes
    assert_eq!(catalog.symbols().len(), 1);
    let symbol = &catalog.symbols()[0];
    assert_eq!(symbol.country().expect("country").as_str(), "JP");
    assert_eq!(symbol.currency().expect("currency").as_str(), "JPY");
}

#[test]
fn when_catalog_file_has_invalid_entities_loading_fails() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"histories": [{{"symbol": {{"ticker": "X", "name": "X"}}, "candles": [{{"date": "someday"}}]}}]}}"#
    )
    .expect("write catalog");

    let result = CatalogSource::load(file.path());
    assert!(matches!(result, Err(CoreError::Serialization(_))));
}
