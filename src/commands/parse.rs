use clap::Args;
use serde::Serialize;
use serde_json::Value;
use strkit::utils::coerce;
use strkit::Error;

use super::{flag_or_default, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct ParseArgs {
    /// Value to coerce
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Return the value untouched
    #[arg(long, overrides_with = "no_raw")]
    pub raw: bool,

    /// Coerce the value even when strkit.json sets `parse.raw`
    #[arg(long = "no-raw", overrides_with = "raw")]
    pub no_raw: bool,

    /// Treat the value as a JSON document instead of plain text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ParseOutput {
    command: String,
    input: String,
    kind: String,
    result: Value,
}

pub fn run(args: ParseArgs, global: &GlobalArgs) -> CmdResult<ParseOutput> {
    let raw = flag_or_default(args.raw, args.no_raw, global.defaults.parse.raw);

    let value = if args.json {
        serde_json::from_str::<Value>(&args.value)
            .map_err(|e| Error::validation_invalid_json(e, Some("parse value".to_string())))?
    } else {
        Value::String(args.value.clone())
    };

    let result = coerce::parse_string(Some(value), raw).unwrap_or(Value::Null);

    Ok((
        ParseOutput {
            command: "parse".to_string(),
            input: args.value,
            kind: kind_of(&result).to_string(),
            result,
        },
        0,
    ))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
