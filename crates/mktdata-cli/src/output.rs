use std::io::{self, Write};

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

/// Rows rendered by the text format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub title: Option<String>,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(&mut out, result, format, pretty)?;
    out.flush()?;
    Ok(())
}

pub fn render_to(
    out: &mut impl Write,
    result: &CommandResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&result.data)?
            } else {
                serde_json::to_string(&result.data)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Text => render_table(out, &result.table)?,
    }

    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }
    Ok(())
}

fn render_table(out: &mut impl Write, table: &Table) -> Result<(), CliError> {
    if let Some(title) = &table.title {
        writeln!(out, "{title}")?;
    }
    if table.rows.is_empty() {
        writeln!(out, "(no results)")?;
        return Ok(());
    }

    let mut widths: Vec<usize> = table.headers.iter().map(|header| header.len()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers: Vec<String> = table.headers.iter().map(|h| (*h).to_owned()).collect();
    write_row(out, &headers, &widths)?;
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_row(out, &rule, &widths)?;
    for row in &table.rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, cells: &[String], widths: &[usize]) -> Result<(), CliError> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Cell text for an optional value.
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |value| value.to_string())
}

/// Cell text for an optional price with two decimals.
pub fn price_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), |value| format!("{value:.2}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn result() -> CommandResult {
        CommandResult {
            data: json!({ "results": [{ "ticker": "AAPL" }] }),
            table: Table {
                title: Some("1 result".to_owned()),
                headers: vec!["Ticker", "Name"],
                rows: vec![vec!["AAPL".to_owned(), "Apple Inc.".to_owned()]],
            },
            warnings: Vec::new(),
        }
    }

    #[test]
    fn renders_aligned_text_table() {
        let mut buffer = Vec::new();
        render_to(&mut buffer, &result(), OutputFormat::Text, false).expect("render");
        let text = String::from_utf8(buffer).expect("utf8");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1 result");
        assert_eq!(lines[1], "Ticker  Name");
        assert_eq!(lines[2], "------  ----------");
        assert_eq!(lines[3], "AAPL    Apple Inc.");
    }

    #[test]
    fn renders_compact_json() {
        let mut buffer = Vec::new();
        render_to(&mut buffer, &result(), OutputFormat::Json, false).expect("render");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text.trim_end(), r#"{"results":[{"ticker":"AAPL"}]}"#);
    }

    #[test]
    fn empty_table_says_so() {
        let mut buffer = Vec::new();
        let empty = CommandResult {
            table: Table::default(),
            ..result()
        };
        render_to(&mut buffer, &empty, OutputFormat::Text, false).expect("render");
        assert_eq!(String::from_utf8(buffer).expect("utf8"), "(no results)\n");
    }

    #[test]
    fn formats_optional_cells() {
        assert_eq!(cell(None::<&str>), "-");
        assert_eq!(cell(Some("NASDAQ")), "NASDAQ");
        assert_eq!(price_cell(Some(130.9)), "130.90");
    }
}
