// ── Runtime favorites configuration ──
//
// Describes *where* the favorites endpoints live and how long to wait for
// them. Never touches disk: `spaceeye-config` builds a `FavoritesConfig`
// and hands it in.

use std::time::Duration;

use spaceeye_api::transport::{TlsMode, TransportConfig};
use spaceeye_api::Endpoints;
use url::Url;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (local development servers).
    DangerAcceptInvalid,
}

/// Configuration for the toggle engine.
#[derive(Debug, Clone)]
pub struct FavoritesConfig {
    /// Site origin the endpoint paths are resolved against.
    pub base_url: Url,
    /// Path of the add-favorite endpoint.
    pub add_path: String,
    /// Path of the remove-favorite endpoint.
    pub remove_path: String,
    /// Header carrying the anti-forgery token.
    pub csrf_header: String,
    /// Request timeout; expiry resolves the click as a network failure.
    pub timeout: Duration,
    /// How long the presentation layer should keep a toast visible.
    pub toast_duration: Duration,
    /// TLS verification strategy.
    pub tls: TlsVerification,
}

impl FavoritesConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

    /// Defaults for everything except the site origin.
    pub fn new(base_url: Url) -> Self {
        let endpoints = Endpoints::default();
        Self {
            base_url,
            add_path: endpoints.add,
            remove_path: endpoints.remove,
            csrf_header: endpoints.csrf_header,
            timeout: Self::DEFAULT_TIMEOUT,
            toast_duration: Self::DEFAULT_TOAST_DURATION,
            tls: TlsVerification::default(),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            add: self.add_path.clone(),
            remove: self.remove_path.clone(),
            csrf_header: self.csrf_header.clone(),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
            ..TransportConfig::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_contract() {
        let config = FavoritesConfig::new(Url::parse("http://localhost:8000").unwrap());
        assert_eq!(config.add_path, "/favorites/add/");
        assert_eq!(config.remove_path, "/favorites/remove/");
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.toast_duration, Duration::from_secs(3));
    }

    #[test]
    fn transport_carries_timeout_and_tls() {
        let mut config = FavoritesConfig::new(Url::parse("https://spaceeye.test").unwrap());
        config.timeout = Duration::from_secs(4);
        config.tls = TlsVerification::DangerAcceptInvalid;

        let transport = config.transport();
        assert_eq!(transport.timeout, Duration::from_secs(4));
        assert!(matches!(transport.tls, TlsMode::DangerAcceptInvalid));
    }
}
