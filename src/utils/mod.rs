//! Generic string primitives with zero domain knowledge.
//!
//! - `color` - Legacy `§` color-code translation
//! - `coerce` - Scalar coercion of textual values
//! - `fuzzy` - Levenshtein distance and fuzzy name lookup
//! - `join` - Delimited joining of sequences
//! - `node` - Dotted node (`a.b.c`) shaping
//! - `path` - Path-string shaping
//! - `text` - Prefix removal and length trimming
//! - `validation` - Input validation helpers

pub mod coerce;
pub mod color;
pub mod fuzzy;
pub mod join;
pub mod node;
pub mod path;
pub mod text;
pub mod validation;
