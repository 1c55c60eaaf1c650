use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

/// Root configuration structure for strkit.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StrkitConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via strkit.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_join")]
    pub join: JoinConfig,

    #[serde(default = "default_lookup")]
    pub lookup: LookupConfig,

    #[serde(default = "default_parse")]
    pub parse: ParseConfig,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            join: default_join(),
            lookup: default_lookup(),
            parse: default_parse(),
        }
    }
}

/// Defaults for `strkit join` when flags are omitted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinConfig {
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default)]
    pub quote: String,
}

/// Defaults for `strkit lookup` and `strkit color name`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LookupConfig {
    #[serde(default = "default_fuzzy")]
    pub fuzzy: bool,
}

/// Defaults for `strkit parse`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ParseConfig {
    #[serde(default)]
    pub raw: bool,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_join() -> JoinConfig {
    JoinConfig {
        delimiter: default_delimiter(),
        quote: String::new(),
    }
}

fn default_delimiter() -> String {
    " ".to_string()
}

fn default_lookup() -> LookupConfig {
    LookupConfig {
        fuzzy: default_fuzzy(),
    }
}

fn default_fuzzy() -> bool {
    true
}

fn default_parse() -> ParseConfig {
    ParseConfig::default()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full strkit.json config, falling back to defaults on any error.
pub fn load_config() -> StrkitConfig {
    match paths::strkit_json() {
        Ok(path) => load_config_or_default(&path),
        Err(_) => StrkitConfig::default(),
    }
}

/// Load the config at `path`. A missing file gives the built-in config; an
/// unreadable or invalid one is logged and also gives the built-in config.
pub fn load_config_or_default(path: &Path) -> StrkitConfig {
    if !path.exists() {
        return StrkitConfig::default();
    }

    match load_config_from(path) {
        Ok(config) => config,
        Err(err) => {
            log_status!(
                "config",
                "Ignoring {} ({}); using built-in defaults",
                path.display(),
                err.details["error"].as_str().unwrap_or(&err.message)
            );
            StrkitConfig::default()
        }
    }
}

/// Read and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> crate::Result<StrkitConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        crate::Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Check if strkit.json file exists
pub fn config_exists() -> bool {
    paths::strkit_json().map(|p| p.exists()).unwrap_or(false)
}

/// Delete strkit.json file (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    let path = paths::strkit_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to strkit.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::strkit_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn builtin_defaults_match_documented_values() {
        let defaults = builtin_defaults();
        assert_eq!(defaults.join.delimiter, " ");
        assert_eq!(defaults.join.quote, "");
        assert!(defaults.lookup.fuzzy);
        assert!(!defaults.parse.raw);
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strkit.json");
        fs::write(&path, r#"{"defaults": {"join": {"delimiter": ", "}}}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.defaults.join.delimiter, ", ");
        assert_eq!(config.defaults.join.quote, "");
        assert!(config.defaults.lookup.fuzzy);
    }

    #[test]
    fn empty_object_is_builtin_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strkit.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(load_config_from(&path).unwrap(), StrkitConfig::default());
    }

    #[test]
    fn invalid_json_reports_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strkit.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidJson);
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config_from(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
    }

    #[test]
    fn written_overrides_are_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strkit.json");
        let mut config = StrkitConfig::default();
        config.defaults.lookup.fuzzy = false;
        config.defaults.join.quote = "'".to_string();

        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(load_config_or_default(&path), config);
    }

    #[test]
    fn invalid_file_falls_back_to_builtin_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strkit.json");
        fs::write(&path, r#"{"defaults": {"lookup": {"fuzzy": "maybe"}}}"#).unwrap();

        assert_eq!(load_config_or_default(&path), StrkitConfig::default());
    }

    #[test]
    fn missing_file_falls_back_to_builtin_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");

        assert_eq!(load_config_or_default(&path), StrkitConfig::default());
    }
}
