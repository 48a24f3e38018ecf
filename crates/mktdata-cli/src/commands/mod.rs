mod history;
mod schema;
mod search;

use std::path::Path;

use mktdata_core::{
    parse_date, CatalogSource, DataSource, Price, SecurityCriteria, SecurityCriteriaBuilder,
};
use serde_json::Value;
use time::Date;

use crate::cli::{Cli, Command, SecurityArgs};
use crate::error::CliError;
use crate::output::Table;

#[derive(Debug)]
pub struct CommandResult {
    pub data: Value,
    pub table: Table,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value, table: Table) -> Self {
        Self {
            data,
            table,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    if cli.schema {
        return schema::run(&cli.command);
    }

    let source = load_source(cli.catalog.as_deref())?;

    match &cli.command {
        Command::Search(args) => search::run(args, source.as_ref()),
        Command::History(args) => history::run(args, source.as_ref()),
    }
}

fn load_source(path: Option<&Path>) -> Result<Box<dyn DataSource>, CliError> {
    let catalog = match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog");
            CatalogSource::load(path)?
        }
        None => CatalogSource::sample()?,
    };
    Ok(Box::new(catalog))
}

/// Date and price that must both be given, or neither.
fn price_check(args: &SecurityArgs) -> Result<Option<(Date, Price)>, CliError> {
    match (&args.date, args.price) {
        (Some(date), Some(price)) => Ok(Some((parse_date(date)?, Price::new(price)?))),
        (None, None) => Ok(None),
        _ => Err(CliError::Usage(String::from(
            "--date and --price must be given together",
        ))),
    }
}

/// Criteria builder seeded with the identity flags.
fn identity_criteria(args: &SecurityArgs) -> SecurityCriteriaBuilder {
    let mut builder = SecurityCriteria::builder();
    if let Some(isin) = &args.isin {
        builder = builder.isin(isin);
    }
    if let Some(ticker) = &args.ticker {
        builder = builder.symbol(ticker);
    }
    if let Some(description) = &args.description {
        builder = builder.description(description);
    }
    if let Some(exchange) = &args.exchange {
        builder = builder.exchange(exchange);
    }
    builder
}

fn require_identity(criteria: &SecurityCriteria) -> Result<(), CliError> {
    if criteria.isin().is_none() && criteria.symbol().is_none() && criteria.description().is_none()
    {
        return Err(CliError::Usage(String::from(
            "one of --ticker, --isin or --desc is required",
        )));
    }
    Ok(())
}
