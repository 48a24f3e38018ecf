use std::sync::Arc;

use mktdata_core::{
    CatalogSource, DataSource, HistoryPeriod, Price, SecurityCriteria, SourceErrorKind, Ticker,
};
use time::macros::date;

struct SourceCase {
    name: &'static str,
    source: Arc<dyn DataSource>,
}

fn source_cases() -> Vec<SourceCase> {
    let sample = CatalogSource::sample().expect("sample catalog");
    let json = serde_json::to_string(&sample.to_document()).expect("serialize catalog");
    let reloaded = CatalogSource::from_json(&json).expect("reload catalog");

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, &json).expect("write catalog");
    let from_file = CatalogSource::load(&path).expect("load catalog");

    vec![
        SourceCase {
            name: "sample",
            source: Arc::new(sample),
        },
        SourceCase {
            name: "reloaded",
            source: Arc::new(reloaded),
        },
        SourceCase {
            name: "file",
            source: Arc::new(from_file),
        },
    ]
}

fn aapl() -> Ticker {
    Ticker::parse("AAPL").expect("valid ticker")
}

#[test]
fn search_contract_holds_for_all_sources() {
    for case in source_cases() {
        let results = case.source.search("AAPL").expect("search succeeds");
        assert!(
            results.iter().any(|symbol| symbol.ticker() == "AAPL"),
            "{} must find AAPL",
            case.name
        );

        let err = case.source.search("").expect_err("empty query fails");
        assert_eq!(err.kind(), SourceErrorKind::InvalidRequest, "{}", case.name);
    }
}

#[test]
fn resolve_contract_holds_for_all_sources() {
    let criteria = SecurityCriteria::builder()
        .isin("US0378331005")
        .build()
        .expect("valid criteria");

    for case in source_cases() {
        let symbol = case
            .source
            .resolve(&criteria)
            .expect("resolve succeeds")
            .unwrap_or_else(|| panic!("{} must resolve the ISIN", case.name));
        assert_eq!(symbol.ticker(), &aapl(), "{}", case.name);
    }
}

#[test]
fn history_contract_holds_for_all_sources() {
    for case in source_cases() {
        let history = case
            .source
            .history(&aapl(), HistoryPeriod::Max)
            .expect("history succeeds");
        assert!(!history.is_empty(), "{}", case.name);
        assert!(
            history
                .candles
                .windows(2)
                .all(|pair| pair[0].date() <= pair[1].date()),
            "{} must return chronological candles",
            case.name
        );

        let err = case
            .source
            .history(&Ticker::parse("NOPE").expect("ticker"), HistoryPeriod::Max)
            .expect_err("unknown ticker");
        assert_eq!(err.kind(), SourceErrorKind::NotFound, "{}", case.name);
    }
}

#[test]
fn validate_contract_holds_for_all_sources() {
    for case in source_cases() {
        let day = date!(2023 - 01 - 05);
        let inside = case
            .source
            .validate(&aapl(), day, Price::new(125.0).expect("price"))
            .expect("inside range");
        assert!(inside, "{}", case.name);

        let err = case
            .source
            .validate(&aapl(), day, Price::new(1.0).expect("price"))
            .expect_err("outside range");
        assert_eq!(err.kind(), SourceErrorKind::PriceMismatch, "{}", case.name);
        assert!(err.mismatch().is_some(), "{}", case.name);
    }
}
