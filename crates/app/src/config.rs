use shared_types::AppConfig;

const EMBEDDED: &str = include_str!("../config.toml");

/// Parse the config embedded at build time, falling back to defaults.
pub fn load() -> AppConfig {
    parse_or_default(EMBEDDED)
}

fn parse_or_default(source: &str) -> AppConfig {
    AppConfig::from_toml(source).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid config.toml, using defaults");
        AppConfig::default()
    })
}
