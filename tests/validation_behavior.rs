//! Behavior-driven tests for identifier, date and code validation
//!
//! These tests verify how raw user input is accepted, normalized or rejected
//! before it reaches any entity.

use mktdata_tests::{
    normalize_country, parse_date, parse_datetime, validate_isin, CurrencyCode, Isin, Price,
    StrictDate, Ticker, ValidationError,
};
use time::macros::{date, datetime};

// =============================================================================
// ISIN: format and check digit
// =============================================================================

#[test]
fn when_isin_has_valid_check_digit_it_is_returned_in_canonical_form() {
    // Given: A real ISIN written in lowercase with surrounding spaces
    let raw = " us0378331005 ";

    // When: It is validated
    let isin = validate_isin(Some(raw)).expect("valid isin");

    // Then: The cleaned 12-character code comes back
    assert_eq!(isin.expect("present").as_str(), "US0378331005");
}

#[test]
fn when_isin_placeholder_is_given_it_means_absent() {
    // Given: Every placeholder form an upstream feed may use
    for raw in [None, Some("-"), Some("NONE"), Some("none"), Some("   "), Some("")] {
        // When: Validated
        let result = validate_isin(raw);

        // Then: No ISIN and no error
        assert_eq!(result, Ok(None), "input {raw:?}");
    }
}

#[test]
fn when_isin_check_digit_is_wrong_system_reports_checksum_error() {
    // Given: A well-formed code with the last digit changed
    let result = validate_isin(Some("US0378331006"));

    // Then: The failure is a checksum failure, not a format failure
    assert!(matches!(
        result,
        Err(ValidationError::InvalidIsinChecksum { .. })
    ));
}

#[test]
fn when_isin_shape_is_wrong_system_reports_format_error() {
    // Given: Too short, a symbol in the prefix, digits in the prefix
    for raw in ["US037833100", "U$0378331005", "120378331005", "US0378331005X"] {
        // When / Then: Each is a format error
        assert!(
            matches!(
                validate_isin(Some(raw)),
                Err(ValidationError::InvalidIsinFormat { .. })
            ),
            "input {raw}"
        );
    }
}

#[test]
fn when_isins_contain_letters_checksum_expands_them() {
    // Given: Real ISINs with letters in the national part
    for raw in ["US78462F1030", "US02079K3059", "IE00B4L5Y983", "US88160R1014"] {
        // Then: All of them pass
        assert!(Isin::parse(raw).is_ok(), "input {raw}");
    }
}

#[test]
fn when_strict_isin_is_required_placeholder_is_rejected() {
    // Given: A placeholder where a value was required
    let result = Isin::parse("-");

    // Then: It is a format error
    assert!(matches!(result, Err(ValidationError::InvalidIsinFormat { .. })));
}

// =============================================================================
// Dates
// =============================================================================

#[test]
fn when_date_uses_any_supported_layout_it_parses_to_same_day() {
    for raw in ["2023-01-01", "20230101", "2023/01/01"] {
        assert_eq!(parse_date(raw).expect(raw), date!(2023 - 01 - 01));
    }
}

#[test]
fn when_datetime_has_no_time_it_defaults_to_midnight() {
    assert_eq!(
        parse_datetime("2023-01-01").expect("date only"),
        datetime!(2023-01-01 00:00:00)
    );
    assert_eq!(
        parse_datetime("2023-01-01 12:00:00").expect("with seconds"),
        datetime!(2023-01-01 12:00:00)
    );
    assert_eq!(
        parse_datetime("2023/01/01 10:30").expect("slash layout"),
        datetime!(2023-01-01 10:30:00)
    );
}

#[test]
fn when_date_is_unparseable_both_parsers_fail_loudly() {
    // Given: Text that is not a date
    let raw = "last tuesday";

    // Then: Date and datetime parsing agree on the error
    assert!(matches!(
        parse_date(raw),
        Err(ValidationError::InvalidDateFormat { .. })
    ));
    assert!(matches!(
        parse_datetime(raw),
        Err(ValidationError::InvalidDateFormat { .. })
    ));
}

#[test]
fn when_native_date_is_given_it_passes_through() {
    let day = date!(2024 - 02 - 29);
    assert_eq!(StrictDate::parse(day).expect("native").value(), day);
}

// =============================================================================
// Countries and currencies
// =============================================================================

#[test]
fn when_country_is_given_by_code_or_name_it_normalizes_to_alpha2() {
    let cases = [
        ("US", "US"),
        ("us", "US"),
        ("United States", "US"),
        ("United States of America", "US"),
        ("USA", "US"),
        ("UNITED KINGDOM", "GB"),
        ("Britain", "GB"),
        ("South Korea", "KR"),
        ("Russia", "RU"),
        ("DEU", "DE"),
    ];
    for (raw, expected) in cases {
        let code = normalize_country(raw).unwrap_or_else(|err| panic!("{raw}: {err}"));
        assert_eq!(code.as_str(), expected, "input {raw}");
    }
}

#[test]
fn when_country_is_unknown_system_distinguishes_names_from_codes() {
    // Given: An unknown name and an unassigned two-letter code
    let name = normalize_country("Narnia");
    let code = normalize_country("ZZ");

    // Then: Each gets its own error
    assert_eq!(
        name,
        Err(ValidationError::UnknownCountry {
            value: "Narnia".to_owned()
        })
    );
    assert!(matches!(code, Err(ValidationError::InvalidCountryCode { .. })));
}

#[test]
fn when_currency_is_valid_it_is_uppercased() {
    assert_eq!(CurrencyCode::parse(" eur ").expect("valid").as_str(), "EUR");
    assert!(matches!(
        CurrencyCode::parse("ABC"),
        Err(ValidationError::InvalidCurrencyCode { .. })
    ));
}

// =============================================================================
// Simple wrappers
// =============================================================================

#[test]
fn when_wrappers_are_built_they_compare_by_value() {
    assert_eq!(Ticker::parse(" BRK.B ").expect("ticker").as_str(), "BRK.B");
    assert!(Ticker::parse("   ").is_err());

    assert_eq!(Price::new(101.25).expect("price"), Price::new(101.25).expect("price"));
    assert!(Price::new(f64::NAN).is_err());
    assert_eq!(Price::new(0.5).expect("price").to_string(), "0.5");
}
