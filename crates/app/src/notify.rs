//! Toast helpers. Every toast is also logged.

use shared_types::AppError;
use shared_ui::{ToastOptions, Toasts};

pub fn success(toasts: &Toasts, message: impl Into<String>) {
    let message = message.into();
    tracing::debug!(%message, "toast");
    toasts.success(message, ToastOptions::new());
}

/// Surface a failed user action.
pub fn error(toasts: &Toasts, err: &AppError) {
    tracing::info!(error = %err, "Action failed");
    toasts.error(err.friendly_message(), ToastOptions::new());
}
