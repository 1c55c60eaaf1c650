use clap::{Args, Subcommand};
use strkit::utils::text;

use super::{CmdResult, TextOutput};

#[derive(Args)]
pub struct TextArgs {
    #[command(subcommand)]
    command: TextCommand,
}

#[derive(Subcommand)]
enum TextCommand {
    /// Remove a prefix (and every later occurrence of it)
    RemoveFirst {
        #[arg(allow_hyphen_values = true)]
        remove: String,
        #[arg(allow_hyphen_values = true)]
        from: String,
    },
    /// Keep at most LEN characters
    Trim {
        #[arg(allow_hyphen_values = true)]
        text: String,
        len: usize,
    },
}

pub fn run(args: TextArgs) -> CmdResult<TextOutput> {
    let output = match args.command {
        TextCommand::RemoveFirst { remove, from } => {
            let result = text::remove_first(&remove, &from).into_owned();
            TextOutput::new("text.remove_first", from, result)
        }
        TextCommand::Trim { text, len } => {
            let result = text::trim_length(&text, len).to_string();
            TextOutput::new("text.trim", text, result)
        }
    };

    Ok((output, 0))
}
