//! TOML-based configuration for the generator.
//!
//! Reads `GenConfig` from an explicit path or from the platform-appropriate
//! config file:
//! - Linux:    `$XDG_CONFIG_HOME/hyper-gen/config.toml` or `~/.config/hyper-gen/config.toml`
//! - macOS:    `~/Library/Application Support/hyper-gen/config.toml`
//! - Windows:  `%APPDATA%\hyper-gen\config.toml`
//!
//! A missing file is not an error: the generator runs with built-in defaults,
//! which reproduce the stock rule file.  Example:
//!
//! ```toml
//! log_level = "info"
//! relacon_map = "relacon-map.json"
//!
//! [output]
//! paths = ["~/.config/karabiner/karabiner.json"]
//!
//! [profile]
//! name = "Default"
//! show_in_menu_bar = false
//!
//! [devices.mouse]
//! vendor_id = 5426
//! product_id = 103
//!
//! [timing]
//! double_tap_delay_ms = 300
//! ```
//!
//! # Serde default values
//!
//! Every field has a `#[serde(default = ...)]`, so a config file only needs to
//! mention what it changes.

use std::path::{Path, PathBuf};

use hyper_core::layers::Timing;
use hyper_core::DeviceIdentifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::RuleSetOptions;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenConfig {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where to also write the trackball button map, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relacon_map: Option<PathBuf>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub devices: DevicesConfig,
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Destination files for the rendered document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Every path receives the same bytes.  A leading `~/` is expanded.
    #[serde(default = "default_output_paths")]
    pub paths: Vec<PathBuf>,
}

/// The single profile written to the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    #[serde(default = "default_profile_name")]
    pub name: String,
    #[serde(default)]
    pub show_in_menu_bar: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DevicesConfig {
    /// Multi-button mouse whose side buttons send number keys.
    #[serde(default = "default_mouse")]
    pub mouse: DeviceConfig,
    /// Handheld trackball remote.
    #[serde(default = "default_relacon")]
    pub relacon: DeviceConfig,
}

/// USB identifiers of one device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceConfig {
    pub vendor_id: u32,
    pub product_id: u32,
    /// Set to `false` to leave the device's rules out entirely.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl DeviceConfig {
    pub fn identifier(&self) -> DeviceIdentifier {
        DeviceIdentifier::new(self.vendor_id, self.product_id)
    }
}

/// Gesture timing handed to the daemon, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimingConfig {
    #[serde(default = "default_tap_timeout")]
    pub tap_timeout_ms: u32,
    #[serde(default = "default_hold_threshold")]
    pub hold_threshold_ms: u32,
    #[serde(default = "default_double_tap_delay")]
    pub double_tap_delay_ms: u32,
    #[serde(default = "default_simultaneous_threshold")]
    pub simultaneous_threshold_ms: u32,
}

impl From<TimingConfig> for Timing {
    fn from(cfg: TimingConfig) -> Self {
        Timing {
            tap_timeout_ms: cfg.tap_timeout_ms,
            hold_threshold_ms: cfg.hold_threshold_ms,
            double_tap_delay_ms: cfg.double_tap_delay_ms,
            simultaneous_threshold_ms: cfg.simultaneous_threshold_ms,
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_output_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("karabiner.json")]
}
fn default_profile_name() -> String {
    "Default".to_string()
}
fn default_true() -> bool {
    true
}
fn default_mouse() -> DeviceConfig {
    DeviceConfig {
        vendor_id: 5426,
        product_id: 103,
        enabled: true,
    }
}
fn default_relacon() -> DeviceConfig {
    DeviceConfig {
        vendor_id: 1390,
        product_id: 306,
        enabled: true,
    }
}
fn default_tap_timeout() -> u32 {
    Timing::default().tap_timeout_ms
}
fn default_hold_threshold() -> u32 {
    Timing::default().hold_threshold_ms
}
fn default_double_tap_delay() -> u32 {
    Timing::default().double_tap_delay_ms
}
fn default_simultaneous_threshold() -> u32 {
    Timing::default().simultaneous_threshold_ms
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            relacon_map: None,
            output: OutputConfig::default(),
            profile: ProfileConfig::default(),
            devices: DevicesConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            paths: default_output_paths(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            show_in_menu_bar: false,
        }
    }
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            mouse: default_mouse(),
            relacon: default_relacon(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tap_timeout_ms: default_tap_timeout(),
            hold_threshold_ms: default_hold_threshold(),
            double_tap_delay_ms: default_double_tap_delay(),
            simultaneous_threshold_ms: default_simultaneous_threshold(),
        }
    }
}

impl GenConfig {
    /// Translates the file-level settings into generator options.
    ///
    /// Disabled devices become `None` so their rules are left out.
    pub fn rule_set_options(&self) -> RuleSetOptions {
        let enabled = |d: &DeviceConfig| d.enabled.then(|| d.identifier());
        RuleSetOptions {
            profile_name: self.profile.name.clone(),
            show_in_menu_bar: self.profile.show_in_menu_bar,
            mouse: enabled(&self.devices.mouse),
            relacon: enabled(&self.devices.relacon),
            timing: self.timing.into(),
        }
    }

    /// Output paths with `~/` expanded.
    pub fn output_paths(&self) -> Vec<PathBuf> {
        self.output.paths.iter().map(|p| expand_home(p)).collect()
    }
}

// ── Config loading ────────────────────────────────────────────────────────────

/// Resolves the default config file path.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads `GenConfig` from `path`, or from [`config_file_path`] when `path` is
/// `None`.
///
/// A missing default file yields `GenConfig::default()`.  A missing file that
/// was named explicitly is an error.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors and
/// [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<GenConfig, ConfigError> {
    match path {
        Some(p) => load_config_from(p, true),
        None => match config_file_path() {
            Ok(p) => load_config_from(&p, false),
            Err(_) => {
                tracing::debug!("no platform config directory; using defaults");
                Ok(GenConfig::default())
            }
        },
    }
}

/// Loads `GenConfig` from `path`.
///
/// A missing file yields `GenConfig::default()` unless `explicit` is set.
///
/// # Errors
///
/// Same as [`load_config`].
pub fn load_config_from(path: &Path, explicit: bool) -> Result<GenConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: GenConfig = toml::from_str(&content)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
            tracing::debug!(path = %path.display(), "config file absent; using defaults");
            Ok(GenConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Expands a leading `~/` to the user's home directory.
///
/// Paths without the prefix, or with no `HOME` set, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}

/// Resolves the platform config base directory for `hyper-gen`.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("hyper-gen"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("hyper-gen"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("hyper-gen")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_config_writes_karabiner_json_in_cwd() {
        // Arrange / Act
        let cfg = GenConfig::default();

        // Assert
        assert_eq!(cfg.output.paths, vec![PathBuf::from("karabiner.json")]);
        assert_eq!(cfg.profile.name, "Default");
        assert!(!cfg.profile.show_in_menu_bar);
        assert_eq!(cfg.relacon_map, None);
    }

    #[test]
    fn test_default_mouse_identifier() {
        let cfg = GenConfig::default();
        assert_eq!(
            cfg.devices.mouse.identifier(),
            DeviceIdentifier::new(5426, 103)
        );
    }

    #[test]
    fn test_default_timing_matches_core_defaults() {
        let timing: Timing = TimingConfig::default().into();
        assert_eq!(timing, Timing::default());
    }

    // ── TOML parsing ──────────────────────────────────────────────────────────

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: GenConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, GenConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        // Arrange
        let toml_str = r#"
log_level = "debug"

[output]
paths = ["~/.config/karabiner/karabiner.json", "karabiner.json"]

[devices.relacon]
vendor_id = 1
product_id = 2
enabled = false

[timing]
double_tap_delay_ms = 300
"#;

        // Act
        let cfg: GenConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.output.paths.len(), 2);
        assert!(!cfg.devices.relacon.enabled);
        assert_eq!(cfg.devices.mouse, default_mouse());
        assert_eq!(cfg.timing.double_tap_delay_ms, 300);
        assert_eq!(cfg.timing.tap_timeout_ms, 250);
    }

    #[test]
    fn test_device_without_enabled_defaults_to_enabled() {
        let cfg: GenConfig = toml::from_str(
            "[devices.mouse]\nvendor_id = 10\nproduct_id = 20\n",
        )
        .expect("deserialize");
        assert!(cfg.devices.mouse.enabled);
        assert_eq!(cfg.devices.mouse.vendor_id, 10);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut cfg = GenConfig::default();
        cfg.relacon_map = Some(PathBuf::from("relacon-map.json"));
        cfg.timing.hold_threshold_ms = 400;

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: GenConfig = toml::from_str(&text).expect("deserialize");

        assert_eq!(cfg, restored);
    }

    // ── Conversion ────────────────────────────────────────────────────────────

    #[test]
    fn test_default_config_matches_default_options() {
        assert_eq!(
            GenConfig::default().rule_set_options(),
            RuleSetOptions::default()
        );
    }

    #[test]
    fn test_disabled_device_is_dropped_from_options() {
        // Arrange
        let mut cfg = GenConfig::default();
        cfg.devices.relacon.enabled = false;
        cfg.profile.name = "Work".to_string();

        // Act
        let options = cfg.rule_set_options();

        // Assert
        assert_eq!(options.relacon, None);
        assert_eq!(options.mouse, Some(DeviceIdentifier::new(5426, 103)));
        assert_eq!(options.profile_name, "Work");
    }

    // ── load_config ───────────────────────────────────────────────────────────

    #[test]
    fn test_load_config_reads_explicit_file() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[profile]\nname = \"Work\"\n").unwrap();

        // Act
        let cfg = load_config(Some(&path)).unwrap();

        // Assert
        assert_eq!(cfg.profile.name, "Work");
    }

    #[test]
    fn test_load_config_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = load_config(Some(&path));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_absent_default_file_yields_defaults() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        // Act
        let cfg = load_config_from(&path, false).unwrap();

        // Assert
        assert_eq!(cfg, GenConfig::default());
    }

    #[test]
    fn test_absent_explicit_file_is_io_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let result = load_config_from(&path, true);

        match result {
            Err(ConfigError::Io { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_existing_default_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"warn\"\n").unwrap();

        let cfg = load_config_from(&path, false).unwrap();

        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn test_load_config_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();

        let result = load_config(Some(&path));

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    // ── Path helpers ──────────────────────────────────────────────────────────

    #[test]
    fn test_expand_home_leaves_plain_paths_alone() {
        let path = Path::new("out/karabiner.json");
        assert_eq!(expand_home(path), PathBuf::from("out/karabiner.json"));
    }

    #[test]
    fn test_expand_home_replaces_tilde_prefix() {
        let expanded = expand_home(Path::new("~/.config/karabiner/karabiner.json"));
        if std::env::var_os("HOME").is_some() || std::env::var_os("USERPROFILE").is_some() {
            assert!(!expanded.starts_with("~"));
            assert!(expanded.ends_with(".config/karabiner/karabiner.json"));
        }
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
    }
}
