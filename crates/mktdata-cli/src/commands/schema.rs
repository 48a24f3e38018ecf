use clap::{Arg, ArgAction, CommandFactory};
use serde_json::{json, Map, Value};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Table;

use super::CommandResult;

/// JSON schema of the arguments accepted by `command`, global options included.
pub fn run(command: &Command) -> Result<CommandResult, CliError> {
    let schema = command_schema(command.name())?;
    Ok(CommandResult::ok(schema, Table::default()))
}

fn command_schema(name: &str) -> Result<Value, CliError> {
    let root = Cli::command();
    let subcommand = root
        .find_subcommand(name)
        .ok_or_else(|| CliError::Command(format!("unknown command '{name}'")))?;

    let mut properties = Map::new();
    let mut required = Vec::new();
    for arg in root.get_arguments().chain(subcommand.get_arguments()) {
        if is_builtin(arg) {
            continue;
        }
        let key = arg.get_long().unwrap_or_else(|| arg.get_id().as_str());
        if arg.is_required_set() {
            required.push(Value::from(key));
        }
        properties.insert(key.to_owned(), property(arg));
    }

    Ok(json!({
        "title": format!("mktdata {name}"),
        "description": subcommand.get_about().map(ToString::to_string),
        "type": "object",
        "properties": properties,
        "required": required,
    }))
}

fn is_builtin(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}

fn property(arg: &Arg) -> Value {
    let kind = json_type(arg);
    let mut property = Map::new();
    property.insert("type".to_owned(), Value::from(kind));

    if let Some(help) = arg.get_help() {
        property.insert("description".to_owned(), Value::from(help.to_string()));
    }

    if arg.get_action().takes_values() {
        let choices: Vec<Value> = arg
            .get_possible_values()
            .iter()
            .filter(|value| !value.is_hide_set())
            .map(|value| Value::from(value.get_name()))
            .collect();
        if !choices.is_empty() {
            property.insert("enum".to_owned(), Value::Array(choices));
        }
    }

    if let Some(default) = arg
        .get_default_values()
        .first()
        .and_then(|value| value.to_str())
    {
        property.insert("default".to_owned(), typed_default(kind, default));
    }

    Value::Object(property)
}

fn json_type(arg: &Arg) -> &'static str {
    match arg.get_action() {
        ArgAction::SetTrue | ArgAction::SetFalse => "boolean",
        ArgAction::Count => "integer",
        _ => match arg.get_id().as_str() {
            "price" => "number",
            "limit" => "integer",
            _ => "string",
        },
    }
}

fn typed_default(kind: &str, raw: &str) -> Value {
    let typed = match kind {
        "boolean" => raw.parse::<bool>().ok().map(Value::from),
        "integer" => raw.parse::<u64>().ok().map(Value::from),
        "number" => raw.parse::<f64>().ok().map(Value::from),
        _ => None,
    };
    typed.unwrap_or_else(|| Value::from(raw))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn schema_for(args: &[&str]) -> Value {
        let cli = Cli::try_parse_from(args.iter().copied()).expect("valid args");
        run(&cli.command).expect("schema").data
    }

    #[test]
    fn search_schema_types_every_option() {
        let schema = schema_for(&["mktdata", "search", "--schema"]);

        assert_eq!(schema["title"], "mktdata search");
        assert_eq!(schema["type"], "object");
        let properties = &schema["properties"];
        assert_eq!(properties["ticker"]["type"], "string");
        assert_eq!(properties["desc"]["type"], "string");
        assert_eq!(properties["price"]["type"], "number");
        assert_eq!(properties["limit"]["type"], "integer");
        assert_eq!(properties["limit"]["default"], 100);
        assert_eq!(properties["schema"]["type"], "boolean");
        assert_eq!(properties["schema"]["default"], false);
        assert_eq!(properties["verbose"]["type"], "integer");
        assert!(properties.get("period").is_none());
        assert!(properties.get("help").is_none());
    }

    #[test]
    fn history_schema_lists_period_and_format_choices() {
        let schema = schema_for(&["mktdata", "history", "--schema"]);

        let properties = &schema["properties"];
        assert_eq!(properties["period"]["default"], "1mo");
        assert_eq!(properties["format"]["enum"], json!(["text", "json"]));
        assert_eq!(properties["format"]["default"], "text");
        assert!(properties.get("limit").is_none());
        assert_eq!(schema["required"], json!([]));
    }
}
