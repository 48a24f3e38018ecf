use mktdata_core::{normalize_country, DataSource, SearchResult, SecurityCriteria, SourceErrorKind};
use serde::Serialize;

use crate::cli::SearchArgs;
use crate::error::CliError;
use crate::output::{cell, Table};

use super::{identity_criteria, price_check, require_identity, CommandResult};

#[derive(Debug, Serialize)]
struct SearchResponseData {
    query: String,
    results: Vec<SearchResult>,
}

pub fn run(args: &SearchArgs, source: &dyn DataSource) -> Result<CommandResult, CliError> {
    if args.limit == 0 {
        return Err(CliError::Usage(String::from(
            "--limit must be greater than zero",
        )));
    }

    let mut builder = identity_criteria(&args.security);
    if let Some(currency) = &args.currency {
        builder = builder.currency(currency);
    }
    let criteria = builder.build()?;
    require_identity(&criteria)?;

    let country = args.country.as_deref().map(normalize_country).transpose()?;
    let traded = price_check(&args.security)?;
    let query = search_query(&criteria);

    let mut results = Vec::new();
    for symbol in source.search(&query)? {
        let wrong_country = country.is_some_and(|country| symbol.country() != Some(country));
        if wrong_country || !matches_filters(&symbol, &criteria, args) {
            continue;
        }
        if let Some((date, price)) = traded {
            match source.validate(symbol.ticker(), date, price) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(error)
                    if matches!(
                        error.kind(),
                        SourceErrorKind::PriceMismatch | SourceErrorKind::NotFound
                    ) =>
                {
                    tracing::info!(ticker = symbol.ticker().as_str(), "{error}");
                    continue;
                }
                Err(error) => return Err(error.into()),
            }
        }
        results.push(symbol);
    }

    let total = results.len();
    results.truncate(args.limit);
    tracing::info!(query = query.as_str(), total, shown = results.len(), "search finished");

    let table = Table {
        title: None,
        headers: vec!["Ticker", "Name", "Exchange", "Country", "Currency", "Class", "ISIN"],
        rows: results
            .iter()
            .map(|symbol| {
                vec![
                    symbol.ticker().to_string(),
                    symbol.name().to_owned(),
                    cell(symbol.exchange()),
                    cell(symbol.country()),
                    cell(symbol.currency()),
                    cell(symbol.asset_class()),
                    cell(symbol.isin()),
                ]
            })
            .collect(),
    };
    let data = serde_json::to_value(SearchResponseData { query, results })?;

    let result = CommandResult::ok(data, table);
    if total > args.limit {
        return Ok(result.with_warning(format!(
            "showing {} of {total} results, raise --limit to see more",
            args.limit
        )));
    }
    Ok(result)
}

/// Most specific identity field wins.
fn search_query(criteria: &SecurityCriteria) -> String {
    criteria
        .isin()
        .map(|isin| isin.as_str())
        .or_else(|| criteria.symbol().map(|ticker| ticker.as_str()))
        .or(criteria.description())
        .unwrap_or_default()
        .to_owned()
}

fn matches_filters(symbol: &SearchResult, criteria: &SecurityCriteria, args: &SearchArgs) -> bool {
    criteria.isin().is_none_or(|isin| symbol.isin() == Some(isin))
        && criteria
            .description()
            .is_none_or(|text| symbol.name().to_lowercase().contains(&text.to_lowercase()))
        && criteria
            .currency()
            .is_none_or(|currency| symbol.currency() == Some(currency))
        && same_text(criteria.exchange(), symbol.exchange())
        && same_text(args.asset_class.as_deref(), symbol.asset_class())
}

fn same_text(wanted: Option<&str>, actual: Option<&str>) -> bool {
    wanted.is_none_or(|wanted| actual.is_some_and(|actual| actual.eq_ignore_ascii_case(wanted)))
}
