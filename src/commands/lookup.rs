use std::collections::BTreeMap;

use clap::Args;
use serde::Serialize;
use strkit::log_status;
use strkit::utils::{fuzzy, validation};

use super::{flag_or_default, CmdResult, GlobalArgs};

#[derive(Args)]
pub struct LookupArgs {
    /// Name to resolve
    pub name: String,

    /// Candidate name (repeatable)
    #[arg(long = "candidate", short = 'c')]
    pub candidates: Vec<String>,

    /// Disable the fuzzy fallback
    #[arg(long, overrides_with = "fuzzy")]
    pub exact: bool,

    /// Enable the fuzzy fallback even when strkit.json turns it off
    #[arg(long, overrides_with = "exact")]
    pub fuzzy: bool,
}

#[derive(Debug, Serialize)]
pub struct LookupOutput {
    command: String,
    name: String,
    key: String,
    matched: Option<String>,
}

pub fn run(args: LookupArgs, global: &GlobalArgs) -> CmdResult<LookupOutput> {
    validation::require_non_empty_vec(
        args.candidates.as_slice(),
        "candidate",
        "At least one --candidate is required",
    )?;

    let fuzzy = flag_or_default(args.fuzzy, args.exact, global.defaults.lookup.fuzzy);
    let key = fuzzy::canonical_name(&args.name);

    // later candidates with the same canonical name replace earlier ones
    let table: BTreeMap<String, String> = args
        .candidates
        .iter()
        .map(|candidate| (fuzzy::canonical_name(candidate), candidate.clone()))
        .collect();

    let matched = fuzzy::fuzzy_lookup(&table, &args.name, fuzzy);

    if let Some(candidate) = &matched {
        if !table.contains_key(&key) {
            log_status!("lookup", "'{}' resolved to '{}' by edit distance", args.name, candidate);
        }
    }

    let exit_code = if matched.is_some() { 0 } else { 1 };

    Ok((
        LookupOutput {
            command: "lookup".to_string(),
            name: args.name,
            key,
            matched,
        },
        exit_code,
    ))
}
