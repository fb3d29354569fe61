use crate::error::{AppError, AppResult};
use std::path::PathBuf;

/// Environment variable to override the default Ramwise data directory.
const ENV_DATA_DIR: &str = "RAMWISE_HOME";

/// Returns the base directory for Ramwise data.
///
/// Checks for `RAMWISE_HOME` environment variable first.
/// If not set, falls back to `~/.ramwise` (or equivalent on Windows).
///
/// # Returns
/// * `Ok(PathBuf)` - The base directory path
/// * `Err(AppError)` - If home directory cannot be determined
///
/// This function avoids panicking in environments where the home
/// directory is not available (e.g., Docker containers, CI runners).
pub fn get_base_dir() -> AppResult<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        let path = PathBuf::from(env_path);
        if !path.is_absolute() {
            return Err(AppError::Config(format!(
                "Environment variable {} must be an absolute path, got: {:?}",
                ENV_DATA_DIR, path
            )));
        }
        return Ok(path);
    }

    match dirs::home_dir() {
        Some(home) => Ok(home.join(".ramwise")),
        None => Err(AppError::Config(
            "Cannot determine home directory. Please set RAMWISE_HOME environment variable."
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_get_base_dir_env_override() {
        let test_path = if cfg!(windows) {
            r"C:\temp\ramwise_test"
        } else {
            "/tmp/ramwise_test"
        };
        unsafe {
            env::set_var(ENV_DATA_DIR, test_path);
        }

        let result = get_base_dir();
        assert!(result.is_ok(), "get_base_dir() failed: {:?}", result);
        assert_eq!(result.unwrap(), PathBuf::from(test_path));

        unsafe {
            env::remove_var(ENV_DATA_DIR);
        }
    }

    #[test]
    fn test_get_base_dir_relative_path_rejected() {
        unsafe {
            env::set_var(ENV_DATA_DIR, "relative/path");
        }

        let result = get_base_dir();
        assert!(result.is_err());

        unsafe {
            env::remove_var(ENV_DATA_DIR);
        }
    }
}
