use serde::Serialize;
use strkit::defaults::Defaults;

pub type CmdResult<T> = strkit::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Defaults from strkit.json, used where a flag is omitted.
    pub defaults: Defaults,
}

/// Output shared by the text-in, text-out commands.
#[derive(Debug, Serialize)]
pub struct TextOutput {
    pub command: String,
    pub input: String,
    pub result: String,
}

impl TextOutput {
    pub fn new(command: &str, input: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            command: command.to_string(),
            input: input.into(),
            result: result.into(),
        }
    }
}

/// Resolve an on/off flag pair against the configured default.
/// clap's `overrides_with` guarantees at most one of the pair is set.
pub(crate) fn flag_or_default(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

pub mod color;
pub mod config;
pub mod distance;
pub mod join;
pub mod lookup;
pub mod node;
pub mod parse;
pub mod path;
pub mod text;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (strkit::Result<serde_json::Value>, i32) {
    match command {
        // Commands without global context
        crate::Commands::Path(args) => dispatch!(args, path),
        crate::Commands::Node(args) => dispatch!(args, node),
        crate::Commands::Distance(args) => dispatch!(args, distance),
        crate::Commands::Text(args) => dispatch!(args, text),
        crate::Commands::Config(args) => dispatch!(args, config),

        // Commands that fall back to configured defaults
        crate::Commands::Color(args) => dispatch!(args, global, color),
        crate::Commands::Parse(args) => dispatch!(args, global, parse),
        crate::Commands::Join(args) => dispatch!(args, global, join),
        crate::Commands::Lookup(args) => dispatch!(args, global, lookup),
    }
}
