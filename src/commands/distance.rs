use clap::Args;
use serde::Serialize;
use strkit::utils::fuzzy;

use super::CmdResult;

#[derive(Args)]
pub struct DistanceArgs {
    /// First string
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Second string
    #[arg(allow_hyphen_values = true)]
    pub b: String,
}

#[derive(Debug, Serialize)]
pub struct DistanceOutput {
    command: String,
    a: String,
    b: String,
    distance: usize,
}

pub fn run(args: DistanceArgs) -> CmdResult<DistanceOutput> {
    let distance = fuzzy::levenshtein(&args.a, &args.b);

    Ok((
        DistanceOutput {
            command: "distance".to_string(),
            a: args.a,
            b: args.b,
            distance,
        },
        0,
    ))
}
