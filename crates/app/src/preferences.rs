//! Dark-mode preference, stored independently of the session.

use crate::storage::KeyValueStore;
use crate::DeviceStorage;
use shared_ui::theme::{ThemeMode, ThemeState};

/// Read the stored preference, or `default_dark` when it is missing or
/// unreadable.
pub fn load_theme(store: &dyn KeyValueStore, key: &str, default_dark: bool) -> ThemeMode {
    match store.get(key) {
        Ok(Some(raw)) => ThemeMode::from_stored(&raw).unwrap_or(ThemeMode::from_dark(default_dark)),
        Ok(None) => ThemeMode::from_dark(default_dark),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read theme preference");
            ThemeMode::from_dark(default_dark)
        }
    }
}

pub fn save_theme(store: &dyn KeyValueStore, key: &str, mode: ThemeMode) {
    if let Err(e) = store.set(key, mode.as_stored()) {
        tracing::warn!(error = %e, "Failed to save theme preference");
    }
}

/// Switch the mode and persist it. The root effect mirrors it onto the
/// document.
pub fn set_theme_mode(theme: &mut ThemeState, storage: &DeviceStorage, key: &str, mode: ThemeMode) {
    theme.mode.set(mode);
    save_theme(storage.0.as_ref(), key, mode);
}
