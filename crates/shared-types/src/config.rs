use serde::{Deserialize, Serialize};

/// Session persistence and simulated sign-in latency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Storage key holding the serialized session record.
    pub storage_key: String,
    /// Artificial delay before login/register resolve.
    pub login_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "workdeck.session".to_string(),
            login_delay_ms: 600,
        }
    }
}

/// Presentation timers and preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// How long the route-transition placeholder stays up.
    pub route_transition_ms: u64,
    pub dark_mode_key: String,
    pub default_dark: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            route_transition_ms: 800,
            dark_mode_key: "workdeck.dark_mode".to_string(),
            default_dark: true,
        }
    }
}

/// Native storage location. Ignored in the browser.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for the file-backed store. Empty means the platform temp
    /// dir plus `workdeck`.
    pub data_dir: String,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub ui: UiConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.storage_key, "workdeck.session");
        assert_eq!(config.ui.route_transition_ms, 800);
        assert!(config.ui.default_dark);
    }

    #[test]
    fn partial_toml_keeps_missing_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [ui]
            route_transition_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.route_transition_ms, 250);
        assert_eq!(config.ui.dark_mode_key, "workdeck.dark_mode");
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn full_toml() {
        let config = AppConfig::from_toml(
            r#"
            [session]
            storage_key = "dash.user"
            login_delay_ms = 0

            [ui]
            route_transition_ms = 0
            dark_mode_key = "dash.dark"
            default_dark = false

            [storage]
            data_dir = "/var/lib/dash"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.storage_key, "dash.user");
        assert_eq!(config.session.login_delay_ms, 0);
        assert!(!config.ui.default_dark);
        assert_eq!(config.storage.data_dir, "/var/lib/dash");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::from_toml("[session\nstorage_key = 1").is_err());
    }

    #[test]
    fn json_with_missing_fields_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
