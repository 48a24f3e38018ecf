use serde::{Deserialize, Serialize};
use time::Date;

use super::symbol::non_blank;
use super::{validate_isin, CurrencyCode, DateInput, Isin, Price, StrictDate, Ticker};
use crate::error::Violations;
use crate::{ModelError, ValidationError};

/// Query used to resolve a security. Every field is optional.
///
/// Setters re-validate and leave the criteria untouched on failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SecurityCriteriaBuilder")]
pub struct SecurityCriteria {
    isin: Option<Isin>,
    symbol: Option<Ticker>,
    description: Option<String>,
    target_price: Option<Price>,
    target_date: Option<StrictDate>,
    currency: Option<CurrencyCode>,
    exchange: Option<String>,
}

impl SecurityCriteria {
    pub fn builder() -> SecurityCriteriaBuilder {
        SecurityCriteriaBuilder::default()
    }

    pub fn isin(&self) -> Option<&Isin> {
        self.isin.as_ref()
    }

    pub fn symbol(&self) -> Option<&Ticker> {
        self.symbol.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn target_price(&self) -> Option<Price> {
        self.target_price
    }

    pub fn target_date(&self) -> Option<Date> {
        self.target_date.map(StrictDate::value)
    }

    pub fn currency(&self) -> Option<CurrencyCode> {
        self.currency
    }

    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    /// True when no field constrains the query.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn set_isin(&mut self, value: Option<&str>) -> Result<(), ValidationError> {
        self.isin = validate_isin(value)?;
        Ok(())
    }

    pub fn set_symbol(&mut self, value: Option<&str>) -> Result<(), ValidationError> {
        self.symbol = value.map(Ticker::parse).transpose()?;
        Ok(())
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = non_blank(value);
    }

    pub fn set_target_price(&mut self, value: Option<f64>) -> Result<(), ValidationError> {
        self.target_price = value.map(Price::new).transpose()?;
        Ok(())
    }

    pub fn set_target_date(&mut self, value: Option<DateInput>) -> Result<(), ValidationError> {
        self.target_date = value.map(StrictDate::parse).transpose()?;
        Ok(())
    }

    pub fn set_currency(&mut self, value: Option<&str>) -> Result<(), ValidationError> {
        self.currency = value.map(CurrencyCode::parse).transpose()?;
        Ok(())
    }

    pub fn set_exchange(&mut self, value: Option<String>) {
        self.exchange = non_blank(value);
    }
}

/// Raw criteria fields, validated together by [`SecurityCriteriaBuilder::build`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecurityCriteriaBuilder {
    isin: Option<String>,
    symbol: Option<String>,
    description: Option<String>,
    target_price: Option<f64>,
    target_date: Option<DateInput>,
    currency: Option<String>,
    exchange: Option<String>,
}

impl SecurityCriteriaBuilder {
    pub fn isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn target_price(mut self, price: f64) -> Self {
        self.target_price = Some(price);
        self
    }

    pub fn target_date(mut self, date: impl Into<DateInput>) -> Self {
        self.target_date = Some(date.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    pub fn build(self) -> Result<SecurityCriteria, ModelError> {
        let mut violations = Violations::new("SecurityCriteria");

        let isin = violations.check("isin", validate_isin(self.isin.as_deref()));
        let symbol = violations.check(
            "symbol",
            self.symbol.as_deref().map(Ticker::parse).transpose(),
        );
        let target_price = violations.check(
            "target_price",
            self.target_price.map(Price::new).transpose(),
        );
        let target_date = violations.check(
            "target_date",
            self.target_date.map(StrictDate::parse).transpose(),
        );
        let currency = violations.check(
            "currency",
            self.currency.as_deref().map(CurrencyCode::parse).transpose(),
        );

        let (Some(isin), Some(symbol), Some(target_price), Some(target_date), Some(currency)) =
            (isin, symbol, target_price, target_date, currency)
        else {
            return Err(violations.into_error());
        };

        Ok(SecurityCriteria {
            isin,
            symbol,
            description: non_blank(self.description),
            target_price,
            target_date,
            currency,
            exchange: non_blank(self.exchange),
        })
    }
}

impl TryFrom<SecurityCriteriaBuilder> for SecurityCriteria {
    type Error = ModelError;

    fn try_from(value: SecurityCriteriaBuilder) -> Result<Self, Self::Error> {
        value.build()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn all_fields_are_optional() {
        let criteria = SecurityCriteria::builder().build().expect("empty criteria");
        assert!(criteria.is_empty());
        assert!(criteria.isin().is_none());
        assert!(criteria.target_date().is_none());
    }

    #[test]
    fn normalizes_populated_fields() {
        let criteria = SecurityCriteria::builder()
            .isin("us0378331005")
            .symbol("AAPL")
            .description("Apple")
            .target_price(150.0)
            .target_date("2023/01/03")
            .currency("usd")
            .exchange("NASDAQ")
            .build()
            .expect("valid criteria");

        assert!(!criteria.is_empty());
        assert_eq!(criteria.isin().expect("isin"), "US0378331005");
        assert_eq!(criteria.symbol().expect("symbol"), "AAPL");
        assert_eq!(criteria.target_price().expect("price"), 150.0);
        assert_eq!(criteria.target_date(), Some(date!(2023 - 01 - 03)));
        assert_eq!(criteria.currency().expect("currency"), "USD");
    }

    #[test]
    fn reports_every_invalid_field() {
        let err = SecurityCriteria::builder()
            .isin("US037833100")
            .target_date("next week")
            .currency("ZZZ")
            .build()
            .expect_err("must fail");
        assert_eq!(err.violations().len(), 3);
        assert!(matches!(
            err.field("isin"),
            Some(ValidationError::InvalidIsinFormat { .. })
        ));
        assert!(matches!(
            err.field("target_date"),
            Some(ValidationError::InvalidDateFormat { .. })
        ));
    }

    #[test]
    fn setters_keep_previous_value_on_error() {
        let mut criteria = SecurityCriteria::builder()
            .isin("US0378331005")
            .build()
            .expect("valid criteria");

        assert!(criteria.set_isin(Some("US0378331006")).is_err());
        assert_eq!(criteria.isin().expect("isin"), "US0378331005");

        criteria.set_isin(Some("NONE")).expect("placeholder clears");
        assert!(criteria.isin().is_none());

        assert!(criteria.set_target_price(Some(f64::INFINITY)).is_err());
        assert!(criteria.target_price().is_none());

        criteria
            .set_target_date(Some("20230105".into()))
            .expect("valid date");
        assert_eq!(criteria.target_date(), Some(date!(2023 - 01 - 05)));
    }

    #[test]
    fn deserializes_through_validation() {
        let criteria: SecurityCriteria =
            serde_json::from_str(r#"{"symbol":"MSFT","target_date":"2023-01-03"}"#)
                .expect("valid json");
        assert_eq!(criteria.symbol().expect("symbol"), "MSFT");

        let json = serde_json::to_value(&criteria).expect("serialize");
        assert_eq!(json["target_date"], "2023-01-03");

        assert!(serde_json::from_str::<SecurityCriteria>(r#"{"currency":"XYZ"}"#).is_err());
    }
}
