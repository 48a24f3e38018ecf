use serde::{Deserialize, Serialize};

use super::{validate_isin, CountryCode, CurrencyCode, Isin, Ticker};
use crate::error::Violations;
use crate::{ModelError, ValidationError};

/// Resolved security symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SymbolBuilder")]
pub struct Symbol {
    ticker: Ticker,
    name: String,
    exchange: Option<String>,
    country: Option<CountryCode>,
    currency: Option<CurrencyCode>,
    asset_class: Option<String>,
    isin: Option<Isin>,
}

/// Symbol returned by search endpoints.
pub type SearchResult = Symbol;

impl Symbol {
    /// Start building a symbol from raw field values.
    pub fn builder(ticker: impl Into<String>, name: impl Into<String>) -> SymbolBuilder {
        SymbolBuilder {
            ticker: Some(ticker.into()),
            name: Some(name.into()),
            ..SymbolBuilder::default()
        }
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exchange(&self) -> Option<&str> {
        self.exchange.as_deref()
    }

    pub fn country(&self) -> Option<CountryCode> {
        self.country
    }

    pub fn currency(&self) -> Option<CurrencyCode> {
        self.currency
    }

    pub fn asset_class(&self) -> Option<&str> {
        self.asset_class.as_deref()
    }

    pub fn isin(&self) -> Option<&Isin> {
        self.isin.as_ref()
    }
}

/// Raw symbol fields, validated together by [`SymbolBuilder::build`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SymbolBuilder {
    ticker: Option<String>,
    name: Option<String>,
    exchange: Option<String>,
    country: Option<String>,
    currency: Option<String>,
    asset_class: Option<String>,
    isin: Option<String>,
}

impl SymbolBuilder {
    pub fn exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Alpha-2 code or country name.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = Some(asset_class.into());
        self
    }

    pub fn isin(mut self, isin: impl Into<String>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Validate every field, reporting all failures at once.
    pub fn build(self) -> Result<Symbol, ModelError> {
        let mut violations = Violations::new("Symbol");

        let ticker = violations.check(
            "ticker",
            required("ticker", self.ticker.as_deref()).and_then(Ticker::parse),
        );
        let name = violations.check(
            "name",
            required("name", self.name.as_deref()).map(str::to_owned),
        );
        let country = violations.check(
            "country",
            self.country.as_deref().map(CountryCode::parse).transpose(),
        );
        let currency = violations.check(
            "currency",
            self.currency.as_deref().map(CurrencyCode::parse).transpose(),
        );
        let isin = violations.check("isin", validate_isin(self.isin.as_deref()));

        let (Some(ticker), Some(name), Some(country), Some(currency), Some(isin)) =
            (ticker, name, country, currency, isin)
        else {
            return Err(violations.into_error());
        };

        Ok(Symbol {
            ticker,
            name,
            exchange: non_blank(self.exchange),
            country,
            currency,
            asset_class: non_blank(self.asset_class),
            isin,
        })
    }
}

impl TryFrom<SymbolBuilder> for Symbol {
    type Error = ModelError;

    fn try_from(value: SymbolBuilder) -> Result<Self, Self::Error> {
        value.build()
    }
}

pub(crate) fn required<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    value.ok_or_else(|| ValidationError::invalid_value(field, "field required"))
}

/// Trimmed text, with blank text treated as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
