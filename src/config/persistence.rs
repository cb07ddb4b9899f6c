//! Configuration file persistence for viewline
//!
//! This module handles loading and saving configuration files to
//! platform-specific directories with robust error handling and
//! graceful fallback to defaults.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "viewline";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Extension of the temporary file written before the atomic rename
const BACKUP_EXTENSION: &str = "json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for viewline.
///
/// - **Windows**: `%APPDATA%\viewline\`
/// - **macOS**: `~/Library/Application Support/viewline/`
/// - **Linux**: `~/.config/viewline/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be determined
/// (e.g., if the HOME environment variable is not set).
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the configuration file.
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Ensure the parent directory of `path` exists, creating it if necessary.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            debug!("Creating config directory: {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| Error::ConfigSave {
                path: dir.to_path_buf(),
                source: Box::new(e),
            })?;
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load configuration from the default config file location.
///
/// # Behavior
///
/// 1. If the config file exists and is valid JSON, load and sanitize it
/// 2. If the config file doesn't exist, return default settings
/// 3. If the config file is corrupted/invalid, log a warning and return defaults
pub fn load_config() -> Settings {
    get_config_file_path()
        .and_then(|path| load_config_from(&path))
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Load configuration from an explicit path.
///
/// A missing or empty file yields the defaults.
///
/// # Errors
///
/// - `Error::ConfigLoad`: the file exists but cannot be read
/// - `Error::ConfigParse`: the file is not valid settings JSON
pub fn load_config_from(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        return Ok(Settings::default());
    }

    debug!("Loading config from: {}", config_path.display());

    let contents = fs::read_to_string(config_path).map_err(|e| Error::ConfigLoad {
        path: config_path.to_path_buf(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            config_path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!(
        "Configuration loaded successfully from {}",
        config_path.display()
    );
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save configuration to `config_path`, creating its directory if needed.
///
/// Writes a sibling backup file first and renames it over the target, so a
/// crash mid-write never leaves a half-written config behind.
///
/// # Errors
///
/// Returns `Error::ConfigSave` if the directory, backup file or final file
/// cannot be written.
pub fn save_config_to(settings: &Settings, config_path: &Path) -> Result<()> {
    ensure_parent_dir(config_path)?;
    let backup_path = config_path.with_extension(BACKUP_EXTENSION);

    debug!("Saving config to: {}", config_path.display());

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: config_path.to_path_buf(),
        source: Box::new(e),
    })?;

    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    fs::rename(&backup_path, config_path).map_err(|e| Error::ConfigSave {
        path: config_path.to_path_buf(),
        source: Box::new(e),
    })?;

    info!(
        "Configuration saved successfully to {}",
        config_path.display()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Helper to create a test environment with a temporary config directory.
    struct TestEnv {
        _temp_dir: TempDir,
        config_file: PathBuf,
    }

    impl TestEnv {
        fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let config_file = temp_dir.path().join(APP_NAME).join(CONFIG_FILE_NAME);
            Self {
                _temp_dir: temp_dir,
                config_file,
            }
        }

        fn write_config(&self, content: &str) {
            ensure_parent_dir(&self.config_file).expect("Failed to create config dir");
            fs::write(&self.config_file, content).expect("Failed to write config");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Platform directory tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_get_config_file_path() {
        if let Ok(path) = get_config_file_path() {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let env = TestEnv::new();
        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let env = TestEnv::new();
        env.write_config("  \n");
        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_partial_config() {
        let env = TestEnv::new();
        env.write_config(r#"{"render_whitespace": true}"#);

        let settings = load_config_from(&env.config_file).unwrap();
        assert!(settings.render_whitespace);
        assert_eq!(settings.tab_size, 4);
    }

    #[test]
    fn test_load_config_sanitizes_values() {
        let env = TestEnv::new();
        env.write_config(r#"{"tab_size": 100}"#);

        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings.tab_size, Settings::MAX_TAB_SIZE);
    }

    #[test]
    fn test_load_corrupted_config_returns_error() {
        let env = TestEnv::new();
        env.write_config("{ invalid json }");

        let err = load_config_from(&env.config_file).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_config_with_unknown_fields_ignored() {
        let env = TestEnv::new();
        env.write_config(r#"{"tab_size": 2, "future_feature": true}"#);

        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings.tab_size, 2);
    }

    #[test]
    fn test_config_with_wrong_types() {
        let env = TestEnv::new();
        env.write_config(r#"{"tab_size": "wide"}"#);
        assert!(load_config_from(&env.config_file).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_creates_directory_and_file() {
        let env = TestEnv::new();
        save_config_to(&Settings::default(), &env.config_file).unwrap();

        assert!(env.config_file.exists());
        assert!(!env.config_file.with_extension(BACKUP_EXTENSION).exists());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let env = TestEnv::new();
        let original = Settings {
            tab_size: 8,
            render_whitespace: true,
            stop_rendering_line_after: None,
            ..Settings::default()
        };

        save_config_to(&original, &env.config_file).unwrap();
        let loaded = load_config_from(&env.config_file).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_config_graceful_fallback() {
        // Always yields usable settings, whatever is on disk.
        let settings = load_config();
        assert!(settings.tab_size >= Settings::MIN_TAB_SIZE);
    }
}
