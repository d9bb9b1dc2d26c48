use dioxus::prelude::*;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Value written to the document's `data-theme` attribute.
    pub fn as_attr(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted preference flag. Anything other than `true` or
    /// `false` is treated as absent.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "true" => Some(ThemeMode::Dark),
            "false" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// Flag persisted for this mode.
    pub fn as_stored(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }
}

/// Shared theme state provided as context by the app root.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    /// Mirror the current mode onto the document.
    pub fn apply(&self) {
        apply_theme(*self.mode.read());
    }
}

/// Set `data-theme` on the document root.
pub fn apply_theme(mode: ThemeMode) {
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        mode.as_attr()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn stored_flag_roundtrip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_stored(mode.as_stored()), Some(mode));
        }
    }

    #[test]
    fn unknown_stored_flag_is_absent() {
        assert_eq!(ThemeMode::from_stored("dark"), None);
        assert_eq!(ThemeMode::from_stored(""), None);
    }

    #[test]
    fn attr_values() {
        assert_eq!(ThemeMode::Light.as_attr(), "light");
        assert_eq!(ThemeMode::from_dark(true).as_attr(), "dark");
    }
}
