//! Levenshtein distance and fuzzy name lookup.
//!
//! Lookup tables map canonical names (spaces and underscores removed,
//! lowercased) to values. A name that does not hit a key exactly can still
//! resolve to the closest key sharing its first character, as long as the
//! edit distance stays under [`FUZZY_MAX_DISTANCE`].

use std::collections::BTreeMap;

use crate::error::Result;
use crate::utils::validation;

/// Exclusive upper bound on the edit distance of a fuzzy match.
pub const FUZZY_MAX_DISTANCE: usize = 2;

/// A closed set of named values, such as a fieldless enum.
pub trait NamedVariant: Copy + 'static {
    /// Every variant, in declaration order.
    fn variants() -> &'static [Self];

    /// Display name of this variant. Canonicalized before use as a key.
    fn name(&self) -> &'static str;
}

/// Edit distance between `s` and `t` counting single-character insertions,
/// deletions and substitutions.
///
/// Keeps two rows of `|s| + 1` cells, so memory is `O(|s|)`.
pub fn levenshtein(s: &str, t: &str) -> usize {
    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();
    let n = s.len();
    let m = t.len();

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut cur: Vec<usize> = vec![0; n + 1];

    for j in 1..=m {
        let tj = t[j - 1];
        cur[0] = j;

        for i in 1..=n {
            let cost = if s[i - 1] == tj { 0 } else { 1 };
            cur[i] = (cur[i - 1] + 1)
                .min(prev[i] + 1)
                .min(prev[i - 1] + cost);
        }

        std::mem::swap(&mut prev, &mut cur);
    }

    // after the final swap `prev` holds the last computed row
    prev[n]
}

/// [`levenshtein`] for inputs that may be absent.
pub fn try_levenshtein(s: Option<&str>, t: Option<&str>) -> Result<usize> {
    let s = validation::require(s, "s", "Strings must not be absent")?;
    let t = validation::require(t, "t", "Strings must not be absent")?;
    Ok(levenshtein(s, t))
}

/// Lookup key for `name`: spaces and underscores removed, lowercased.
pub fn canonical_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ' && *c != '_')
        .collect::<String>()
        .to_lowercase()
}

/// Resolve `name` against `table`.
///
/// The canonical form of `name` is probed first. With `fuzzy` set, the table
/// is then scanned in key order for the entry with the smallest distance below
/// [`FUZZY_MAX_DISTANCE`] whose key starts with the same character; the first
/// entry at that distance wins.
pub fn fuzzy_lookup<T: Clone>(table: &BTreeMap<String, T>, name: &str, fuzzy: bool) -> Option<T> {
    let test_name = canonical_name(name);

    if let Some(value) = table.get(&test_name) {
        return Some(value.clone());
    }

    if !fuzzy {
        return None;
    }

    let first = test_name.chars().next()?;
    let mut best: Option<(usize, &T)> = None;

    for (key, value) in table {
        if key.chars().next() != Some(first) {
            continue;
        }

        let dist = levenshtein(key, &test_name);
        if dist >= FUZZY_MAX_DISTANCE {
            continue;
        }
        if best.map_or(true, |(min, _)| dist < min) {
            best = Some((dist, value));
        }
    }

    best.map(|(_, value)| value.clone())
}

/// Canonical-name table over every variant of `T`.
pub fn variant_table<T: NamedVariant>() -> BTreeMap<String, T> {
    T::variants()
        .iter()
        .map(|variant| (canonical_name(variant.name()), *variant))
        .collect()
}

/// Resolve `name` to a variant of `T`.
pub fn lookup_variant<T: NamedVariant>(name: &str, fuzzy: bool) -> Option<T> {
    fuzzy_lookup(&variant_table::<T>(), name, fuzzy)
}
