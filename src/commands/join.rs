use clap::Args;
use serde::Serialize;
use strkit::utils::join;

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct JoinArgs {
    /// Items to join
    #[arg(allow_hyphen_values = true)]
    pub items: Vec<String>,

    /// Delimiter placed between items (default from strkit.json)
    #[arg(long, allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// Index of the first item to include
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Quote wrapped around each item (default from strkit.json)
    #[arg(long)]
    pub quote: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JoinOutput {
    command: String,
    result: String,
    count: usize,
}

pub fn run(args: JoinArgs, global: &GlobalArgs) -> CmdResult<JoinOutput> {
    let config = &global.defaults.join;
    let delimiter = args.delimiter.as_deref().unwrap_or(&config.delimiter);
    let quote = args.quote.as_deref().unwrap_or(&config.quote);

    let result = join::join_quoted(args.items.as_slice(), delimiter, args.start, quote);
    let count = args.items.len().saturating_sub(args.start);

    Ok((
        JoinOutput {
            command: "join".to_string(),
            result,
            count,
        },
        0,
    ))
}
