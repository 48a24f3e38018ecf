use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    CoreError, DataSource, History, HistoryPeriod, Ohlcv, Price, PriceVerificationError,
    SecurityCriteria, SourceError, Symbol, Ticker,
};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// JSON layout of a catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    pub symbols: Vec<Symbol>,
    pub histories: Vec<History>,
}

/// In-memory [`DataSource`] backed by a fixed set of symbols and candles.
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    symbols: Vec<Symbol>,
    candles: BTreeMap<String, Vec<Ohlcv>>,
}

impl CatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Small built-in catalog of US listings with early January 2023 candles.
    pub fn sample() -> Result<Self, CoreError> {
        Self::from_json(SAMPLE_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            symbols = catalog.symbols.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_document(document: CatalogDocument) -> Self {
        let mut catalog = Self::new();
        for symbol in document.symbols {
            catalog.insert_symbol(symbol);
        }
        for history in document.histories {
            catalog.insert_history(history);
        }
        catalog
    }

    /// Adds `symbol`, replacing an entry with the same ticker.
    pub fn insert_symbol(&mut self, symbol: Symbol) {
        match self
            .symbols
            .iter_mut()
            .find(|known| known.ticker().matches(symbol.ticker().as_str()))
        {
            Some(known) => *known = symbol,
            None => self.symbols.push(symbol),
        }
    }

    /// Adds the candles of `history`, registering its symbol if unknown.
    pub fn insert_history(&mut self, history: History) {
        let key = catalog_key(history.symbol.ticker());
        if self.find_symbol(history.symbol.ticker()).is_none() {
            self.symbols.push(history.symbol);
        }
        self.candles.entry(key).or_default().extend(history.candles);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn to_document(&self) -> CatalogDocument {
        let histories = self
            .symbols
            .iter()
            .filter_map(|symbol| {
                self.candles
                    .get(&catalog_key(symbol.ticker()))
                    .map(|candles| History::new(symbol.clone(), candles.clone()))
            })
            .collect();
        CatalogDocument {
            symbols: self.symbols.clone(),
            histories,
        }
    }

    fn find_symbol(&self, ticker: &Ticker) -> Option<&Symbol> {
        self.symbols
            .iter()
            .find(|symbol| symbol.ticker().matches(ticker.as_str()))
    }

    fn full_history(&self, ticker: &Ticker) -> Result<History, SourceError> {
        let symbol = self
            .find_symbol(ticker)
            .ok_or_else(|| SourceError::not_found(format!("unknown ticker '{ticker}'")))?;
        let candles = self
            .candles
            .get(&catalog_key(ticker))
            .cloned()
            .unwrap_or_default();
        Ok(History::new(symbol.clone(), candles))
    }

    fn accepts(&self, symbol: &Symbol, criteria: &SecurityCriteria) -> bool {
        if let Some(currency) = criteria.currency() {
            if symbol.currency() != Some(currency) {
                return false;
            }
        }
        if let Some(exchange) = criteria.exchange() {
            let listed = symbol
                .exchange()
                .is_some_and(|listed| listed.eq_ignore_ascii_case(exchange));
            if !listed {
                return false;
            }
        }
        if let (Some(date), Some(price)) = (criteria.target_date(), criteria.target_price()) {
            let Ok(history) = self.full_history(symbol.ticker()) else {
                return false;
            };
            return history
                .candles_on(date)
                .any(|candle| candle.contains_price(price.value()) == Some(true));
        }
        true
    }
}

impl DataSource for CatalogSource {
    fn search(&self, query: &str) -> Result<Vec<Symbol>, SourceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SourceError::invalid_request("search query must not be empty"));
        }

        let needle = query.to_lowercase();
        let matches: Vec<Symbol> = self
            .symbols
            .iter()
            .filter(|symbol| {
                symbol.ticker().as_str().to_lowercase().contains(&needle)
                    || symbol.name().to_lowercase().contains(&needle)
                    || symbol
                        .isin()
                        .is_some_and(|isin| isin.as_str().eq_ignore_ascii_case(query))
            })
            .cloned()
            .collect();

        tracing::debug!(query, matches = matches.len(), "catalog search");
        Ok(matches)
    }

    fn resolve(&self, criteria: &SecurityCriteria) -> Result<Option<Symbol>, SourceError> {
        let by_isin = |symbol: &&Symbol| match (criteria.isin(), symbol.isin()) {
            (Some(wanted), Some(isin)) => wanted == isin,
            _ => false,
        };
        let by_ticker = |symbol: &&Symbol| {
            criteria
                .symbol()
                .is_some_and(|wanted| symbol.ticker().matches(wanted.as_str()))
        };
        let by_description = |symbol: &&Symbol| {
            criteria.description().is_some_and(|wanted| {
                symbol
                    .name()
                    .to_lowercase()
                    .contains(&wanted.to_lowercase())
            })
        };

        let stages: [&dyn Fn(&&Symbol) -> bool; 3] = [&by_isin, &by_ticker, &by_description];
        let resolved = stages.iter().find_map(|stage| {
            self.symbols
                .iter()
                .filter(|symbol| stage(symbol))
                .find(|symbol| self.accepts(symbol, criteria))
        });

        tracing::debug!(
            resolved = resolved.map(|symbol| symbol.ticker().as_str()),
            "catalog resolve"
        );
        Ok(resolved.cloned())
    }

    fn history(&self, ticker: &Ticker, period: HistoryPeriod) -> Result<History, SourceError> {
        let history = self.full_history(ticker)?.within(period);
        tracing::debug!(
            ticker = ticker.as_str(),
            period = period.as_str(),
            candles = history.len(),
            "catalog history"
        );
        Ok(history)
    }

    fn validate(&self, ticker: &Ticker, date: Date, price: Price) -> Result<bool, SourceError> {
        let history = self.full_history(ticker)?.sorted();
        let day: Vec<&Ohlcv> = history.candles_on(date).collect();
        if day.is_empty() {
            return Err(SourceError::not_found(format!(
                "no candle for '{ticker}' on {date}"
            )));
        }

        if day
            .iter()
            .any(|candle| candle.contains_price(price.value()) == Some(true))
        {
            tracing::debug!(ticker = ticker.as_str(), %date, price = price.value(), "price verified");
            return Ok(true);
        }

        let mut detail = PriceVerificationError::new(
            format!(
                "price {:.2} was not traded for '{ticker}' on {date}",
                price.value()
            ),
            ticker.clone(),
        );
        detail.actual_date = Some(date);
        detail.expected_price = Some(price.value());
        detail.actual_low = day.iter().filter_map(|candle| candle.low()).reduce(f64::min);
        detail.actual_high = day.iter().filter_map(|candle| candle.high()).reduce(f64::max);
        detail.actual_close = day.iter().rev().find_map(|candle| candle.close());

        tracing::debug!(ticker = ticker.as_str(), %date, price = price.value(), "price mismatch");
        Err(SourceError::price_mismatch(detail))
    }
}

fn catalog_key(ticker: &Ticker) -> String {
    ticker.as_str().to_uppercase()
}
