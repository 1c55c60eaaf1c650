//! Input validation primitives.
//!
//! Turn absent or empty inputs into `validation.invalid_argument` errors
//! instead of repeating `ok_or_else` chains at each call site.

use crate::error::{Error, Result};

/// Require an Option to contain a value.
pub fn require<T>(opt: Option<T>, field: &str, message: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_invalid_argument(field, message, None, None))
}

/// Require a collection to be non-empty.
pub fn require_non_empty_vec<'a, T>(vec: &'a [T], field: &str, message: &str) -> Result<&'a [T]> {
    if vec.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_returns_value_when_some() {
        let result = require(Some("value"), "field", "msg");
        assert_eq!(result.unwrap(), "value");
    }

    #[test]
    fn require_returns_error_when_none() {
        let result: Result<&str> = require(None, "field", "Missing field");
        let err = result.unwrap_err();
        assert_eq!(err.details["problem"], "Missing field");
    }

    #[test]
    fn require_non_empty_vec_passes_for_non_empty() {
        let vec = vec![1, 2, 3];
        let result = require_non_empty_vec(&vec, "field", "msg");
        assert_eq!(result.unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn require_non_empty_vec_fails_for_empty() {
        let vec: Vec<i32> = vec![];
        assert!(require_non_empty_vec(&vec, "field", "Cannot be empty").is_err());
    }
}
