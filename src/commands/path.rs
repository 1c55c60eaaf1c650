use clap::{Args, Subcommand};
use strkit::utils::path;

use super::{CmdResult, TextOutput};

#[derive(Args)]
pub struct PathArgs {
    #[command(subcommand)]
    command: PathCommand,
}

#[derive(Subcommand)]
enum PathCommand {
    /// Replace each tab with four spaces
    Tabs {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Replace `/` with the host separator
    Normalize {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Append a separator unless one is already trailing
    Trailing {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Drop a trailing separator (and the character before the last host separator)
    StripTrailing {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Everything before the last host separator
    Parent {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Prefix with the working directory's root unless already rooted
    Root {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Remove the last extension
    StripExt {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

pub fn run(args: PathArgs) -> CmdResult<TextOutput> {
    let output = match args.command {
        PathCommand::Tabs { text } => {
            let result = path::replace_tabs(&text).into_owned();
            TextOutput::new("path.tabs", text, result)
        }
        PathCommand::Normalize { text } => {
            let result = path::normalize_separator(&text).into_owned();
            TextOutput::new("path.normalize", text, result)
        }
        PathCommand::Trailing { text } => {
            let result = path::ensure_trailing_separator(&text).into_owned();
            TextOutput::new("path.trailing", text, result)
        }
        PathCommand::StripTrailing { text } => {
            let result = path::strip_trailing_separator(&text).to_string();
            TextOutput::new("path.strip_trailing", text, result)
        }
        PathCommand::Parent { text } => {
            let result = path::strip_after_last_separator(&text).to_string();
            TextOutput::new("path.parent", text, result)
        }
        PathCommand::Root { text } => {
            let result = path::ensure_root_prefix(&text);
            TextOutput::new("path.root", text, result)
        }
        PathCommand::StripExt { text } => {
            let result = path::strip_extension(&text).to_string();
            TextOutput::new("path.strip_ext", text, result)
        }
    };

    Ok((output, 0))
}
