use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base strkit config directory (universal ~/.config/strkit/ on all platforms)
pub fn strkit() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("strkit"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("strkit"))
    }
}

/// Global strkit.json config file path
pub fn strkit_json() -> Result<PathBuf> {
    Ok(strkit()?.join("strkit.json"))
}
