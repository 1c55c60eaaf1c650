use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;

use commands::{color, config, distance, join, lookup, node, parse, path, text};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "strkit")]
#[command(version = VERSION)]
#[command(about = "String shaping helpers for paths, nodes, color codes and fuzzy lookup")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shape path strings (separators, roots, extensions)
    Path(path::PathArgs),
    /// Shape dotted node keys
    Node(node::NodeArgs),
    /// Translate legacy color codes
    Color(color::ColorArgs),
    /// Coerce a value to boolean, integer, float or text
    Parse(parse::ParseArgs),
    /// Join items with a delimiter
    Join(join::JoinArgs),
    /// Levenshtein distance between two strings
    Distance(distance::DistanceArgs),
    /// Resolve a name against candidates, exactly or by edit distance
    Lookup(lookup::LookupArgs),
    /// Prefix removal and length trimming
    Text(text::TextArgs),
    /// Manage strkit configuration
    Config(config::ConfigArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs {
        defaults: strkit::defaults::load_defaults(),
    };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
