//! Scalar coercion of textual values.
//!
//! Values read from config files arrive as text. Unless the caller asks for
//! the raw value, text is color-translated and then classified as a boolean,
//! an integer, a float, or left as text, in that order.

use crate::utils::color::translate_color_codes;
use regex::Regex;
use serde::Serialize;
use serde_json::{Number, Value};
use std::sync::LazyLock;

static BOOLEAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:true|false|yes|no|on|off)$").unwrap());

static TRUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:true|yes|on)$").unwrap());

// ASCII digits only; `\d` would also accept other Unicode decimal digits
static INTEGER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

static FLOAT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+\.[0-9]+$").unwrap());

/// A classified scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Int(n) => Value::Number(n.into()),
            Scalar::Float(f) => Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(f.to_string())),
            Scalar::Text(s) => Value::String(s),
        }
    }
}

/// Translate color codes in `text`, then classify it.
///
/// An integer literal outside the `i64` range stays text, as does a float
/// literal too large for `f64`.
pub fn coerce_text(text: &str) -> Scalar {
    let s = translate_color_codes(text);

    if BOOLEAN_PATTERN.is_match(&s) {
        return Scalar::Bool(TRUE_PATTERN.is_match(&s));
    }

    if INTEGER_PATTERN.is_match(&s) {
        return match s.parse::<i64>() {
            Ok(n) => Scalar::Int(n),
            Err(_) => Scalar::Text(s),
        };
    }

    if FLOAT_PATTERN.is_match(&s) {
        if let Ok(f) = s.parse::<f64>() {
            if f.is_finite() {
                return Scalar::Float(f);
            }
        }
    }

    Scalar::Text(s)
}

/// Coerce a loosely typed value.
///
/// Absent stays absent. When `raw` is set, or the value is not a string, it is
/// returned untouched. Strings go through [`coerce_text`].
pub fn parse_string(value: Option<Value>, raw: bool) -> Option<Value> {
    match value? {
        Value::String(text) if !raw => Some(coerce_text(&text).into()),
        other => Some(other),
    }
}
