//! Configuration for the SpaceEye favorites engine.
//!
//! A TOML file merged with `SPACEEYE_`-prefixed environment variables,
//! validated and translated to `spaceeye_core::FavoritesConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use spaceeye_core::{FavoritesConfig, TlsVerification};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        field: field.into(),
        reason: reason.into(),
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Site origin, e.g. "https://spaceeye.example".
    pub base_url: String,

    #[serde(default)]
    pub endpoints: EndpointsSection,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Toast lifetime in milliseconds.
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Accept self-signed certificates (local development).
    #[serde(default)]
    pub insecure: bool,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoints: EndpointsSection::default(),
            timeout: default_timeout(),
            toast_duration_ms: default_toast_duration_ms(),
            insecure: false,
            ca_cert: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointsSection {
    #[serde(default = "default_add_path")]
    pub add: String,

    #[serde(default = "default_remove_path")]
    pub remove: String,

    /// Header carrying the anti-forgery token.
    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,
}

impl Default for EndpointsSection {
    fn default() -> Self {
        Self {
            add: default_add_path(),
            remove: default_remove_path(),
            csrf_header: default_csrf_header(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".into()
}
fn default_timeout() -> u64 {
    10
}
fn default_toast_duration_ms() -> u64 {
    3000
}
fn default_add_path() -> String {
    "/favorites/add/".into()
}
fn default_remove_path() -> String {
    "/favorites/remove/".into()
}
fn default_csrf_header() -> String {
    "X-CSRFToken".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "spaceeye", "spaceeye").map_or_else(
        || PathBuf::from(".spaceeye").join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` (missing file is fine) layered under the environment.
///
/// Nested keys use a double underscore: `SPACEEYE_ENDPOINTS__ADD`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading favorites config");

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SPACEEYE_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

/// Validate `cfg` and build the engine's `FavoritesConfig`.
pub fn to_favorites_config(cfg: &Config) -> Result<FavoritesConfig, ConfigError> {
    let base_url: Url = cfg
        .base_url
        .parse()
        .map_err(|_| invalid("base_url", format!("invalid URL: {}", cfg.base_url)))?;
    if base_url.cannot_be_a_base() {
        return Err(invalid("base_url", "must be an http(s) origin"));
    }

    for (field, value) in [
        ("endpoints.add", &cfg.endpoints.add),
        ("endpoints.remove", &cfg.endpoints.remove),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(field, "must not be empty"));
        }
    }

    let header = &cfg.endpoints.csrf_header;
    if header.is_empty() || !header.bytes().all(|b| b.is_ascii_graphic() && b != b':') {
        return Err(invalid(
            "endpoints.csrf_header",
            format!("not a valid header name: '{header}'"),
        ));
    }

    if cfg.timeout == 0 {
        return Err(invalid("timeout", "must be at least 1 second"));
    }

    let tls = if cfg.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = cfg.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let mut favorites = FavoritesConfig::new(base_url);
    favorites.add_path.clone_from(&cfg.endpoints.add);
    favorites.remove_path.clone_from(&cfg.endpoints.remove);
    favorites.csrf_header.clone_from(header);
    favorites.timeout = Duration::from_secs(cfg.timeout);
    favorites.toast_duration = Duration::from_millis(cfg.toast_duration_ms);
    favorites.tls = tls;
    Ok(favorites)
}

/// Load from the canonical location and translate in one step.
pub fn load_favorites_config() -> Result<FavoritesConfig, ConfigError> {
    to_favorites_config(&load_config()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_translate_cleanly() {
        let favorites = to_favorites_config(&Config::default()).unwrap();
        assert_eq!(favorites.base_url.as_str(), "http://localhost:8000/");
        assert_eq!(favorites.add_path, "/favorites/add/");
        assert_eq!(favorites.timeout, Duration::from_secs(10));
        assert_eq!(favorites.toast_duration, Duration::from_secs(3));
        assert_eq!(favorites.tls, TlsVerification::SystemDefaults);
    }

    #[test]
    fn file_values_and_env_overrides_merge() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "spaceeye.toml",
                r#"
                    base_url = "https://spaceeye.test"
                    timeout = 20

                    [endpoints]
                    add = "/api/favorites/add/"
                "#,
            )?;
            jail.set_env("SPACEEYE_TIMEOUT", "5");
            jail.set_env("SPACEEYE_ENDPOINTS__CSRF_HEADER", "X-XSRF-TOKEN");

            let cfg = load_config_from(Path::new("spaceeye.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.base_url, "https://spaceeye.test");
            assert_eq!(cfg.timeout, 5);
            assert_eq!(cfg.endpoints.add, "/api/favorites/add/");
            assert_eq!(cfg.endpoints.remove, "/favorites/remove/");
            assert_eq!(cfg.endpoints.csrf_header, "X-XSRF-TOKEN");
            Ok(())
        });
    }

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|_| {
            let cfg = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg, Config::default());
            Ok(())
        });
    }

    #[test]
    fn saved_config_loads_back() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("nested").join("config.toml");
            let cfg = Config {
                base_url: "https://spaceeye.test".into(),
                insecure: true,
                toast_duration_ms: 5000,
                ..Config::default()
            };

            save_config_to(&cfg, &path).map_err(|e| e.to_string())?;
            let loaded = load_config_from(&path).map_err(|e| e.to_string())?;
            assert_eq!(loaded, cfg);
            Ok(())
        });
    }

    #[test]
    fn insecure_wins_over_ca_cert() {
        let cfg = Config {
            insecure: true,
            ca_cert: Some(PathBuf::from("/etc/ca.pem")),
            ..Config::default()
        };
        let favorites = to_favorites_config(&cfg).unwrap();
        assert_eq!(favorites.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn rejects_bad_base_url() {
        let cfg = Config {
            base_url: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(
            to_favorites_config(&cfg),
            Err(ConfigError::Validation { ref field, .. }) if field == "base_url"
        ));
    }

    #[test]
    fn rejects_bad_header_name() {
        let mut cfg = Config::default();
        cfg.endpoints.csrf_header = "X CSRF".into();
        assert!(to_favorites_config(&cfg).is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let cfg = Config {
            timeout: 0,
            ..Config::default()
        };
        assert!(to_favorites_config(&cfg).is_err());
    }
}
