use clap::{Args, Subcommand};
use serde::Serialize;
use strkit::utils::color::{self, ColorCode};
use strkit::utils::fuzzy::{self, NamedVariant};
use strkit::Error;

use super::{flag_or_default, CmdResult, GlobalArgs, TextOutput};

#[derive(Args)]
pub struct ColorArgs {
    #[command(subcommand)]
    command: ColorCommand,
}

#[derive(Subcommand)]
enum ColorCommand {
    /// Rewrite `§x` color codes as `&x`
    Translate {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Resolve a color or format name to its code
    Name {
        name: String,
        /// Disable the fuzzy fallback
        #[arg(long, overrides_with = "fuzzy")]
        exact: bool,
        /// Enable the fuzzy fallback even when strkit.json turns it off
        #[arg(long, overrides_with = "exact")]
        fuzzy: bool,
    },
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ColorOutput {
    Translate(TextOutput),
    Name(ColorNameOutput),
}

#[derive(Debug, Serialize)]
pub struct ColorNameOutput {
    command: String,
    name: String,
    label: String,
    code: String,
}

pub fn run(args: ColorArgs, global: &GlobalArgs) -> CmdResult<ColorOutput> {
    match args.command {
        ColorCommand::Translate { text } => {
            let result = color::translate_color_codes(&text);
            Ok((
                ColorOutput::Translate(TextOutput::new("color.translate", text, result)),
                0,
            ))
        }
        ColorCommand::Name { name, exact, fuzzy } => {
            let fuzzy = flag_or_default(fuzzy, exact, global.defaults.lookup.fuzzy);
            let code = resolve_name(&name, fuzzy)?;
            Ok((
                ColorOutput::Name(ColorNameOutput {
                    command: "color.name".to_string(),
                    name,
                    label: code.label().to_string(),
                    code: code.to_ampersand(),
                }),
                0,
            ))
        }
    }
}

fn resolve_name(name: &str, fuzzy: bool) -> strkit::Result<ColorCode> {
    fuzzy::lookup_variant::<ColorCode>(name, fuzzy).ok_or_else(|| {
        let known: Vec<&str> = ColorCode::variants().iter().map(|c| c.label()).collect();
        Error::validation_invalid_argument(
            "name",
            format!("Unknown color or format name '{}'", name),
            Some(name.to_string()),
            None,
        )
        .with_hint(format!("Known names: {}", known.join(", ")))
    })
}
