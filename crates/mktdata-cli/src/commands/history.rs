use mktdata_core::{
    format_datetime, DataSource, FrameRow, HistoryPeriod, PriceVerificationError, SourceError,
    Symbol, FRAME_COLUMNS, FRAME_INDEX,
};
use serde::Serialize;
use time::Date;

use crate::cli::HistoryArgs;
use crate::error::CliError;
use crate::output::{price_cell, Table};

use super::{identity_criteria, price_check, require_identity, CommandResult};

#[derive(Debug, Serialize)]
struct HistoryResponseData {
    symbol: Symbol,
    period: HistoryPeriod,
    verified: Option<VerifiedPrice>,
    candles: Vec<FrameRow>,
}

#[derive(Debug, Serialize)]
struct VerifiedPrice {
    date: String,
    price: f64,
}

pub fn run(args: &HistoryArgs, source: &dyn DataSource) -> Result<CommandResult, CliError> {
    let criteria = identity_criteria(&args.security).build()?;
    require_identity(&criteria)?;
    let traded = price_check(&args.security)?;

    let symbol = source
        .resolve(&criteria)?
        .ok_or_else(|| CliError::NotFound(String::from("no security matches the given criteria")))?;
    tracing::info!(ticker = symbol.ticker().as_str(), "resolved security");

    let verified = match traded {
        Some((date, price)) => {
            if !source.validate(symbol.ticker(), date, price)? {
                return Err(mismatch(&symbol, date, price.value()).into());
            }
            Some(VerifiedPrice {
                date: date.to_string(),
                price: price.value(),
            })
        }
        None => None,
    };

    let history = source.history(symbol.ticker(), args.period)?;
    let candles = history.to_frame();

    let mut headers = vec![FRAME_INDEX];
    headers.extend(FRAME_COLUMNS);
    let rows = candles
        .iter()
        .map(frame_cells)
        .collect::<Result<Vec<_>, _>>()?;
    let table = Table {
        title: Some(format!(
            "{} {} ({}, {} candles)",
            symbol.ticker(),
            symbol.name(),
            args.period,
            candles.len()
        )),
        headers,
        rows,
    };

    let data = serde_json::to_value(HistoryResponseData {
        symbol,
        period: args.period,
        verified,
        candles,
    })?;
    Ok(CommandResult::ok(data, table))
}

fn frame_cells(row: &FrameRow) -> Result<Vec<String>, CliError> {
    let date = format_datetime(row.date).map_err(|error| CliError::Command(error.to_string()))?;
    let [open, high, low, close, volume] = row.values();
    Ok(vec![
        date,
        price_cell(open),
        price_cell(high),
        price_cell(low),
        price_cell(close),
        volume.map_or_else(|| "-".to_owned(), |volume| format!("{volume:.0}")),
    ])
}

fn mismatch(symbol: &Symbol, date: Date, price: f64) -> SourceError {
    let mut detail = PriceVerificationError::new(
        format!("price {price:.2} was not traded for '{}' on {date}", symbol.ticker()),
        symbol.ticker().clone(),
    );
    detail.actual_date = Some(date);
    detail.expected_price = Some(price);
    SourceError::price_mismatch(detail)
}
