use dioxus::prelude::*;
use shared_types::AppConfig;
use shared_ui::theme::ThemeState;
use shared_ui::use_toast;
use std::rc::Rc;

mod auth;
mod config;
mod guard;
mod notify;
mod preferences;
mod routes;
mod session;
mod storage;
mod timer;
mod transition;

use auth::{use_session, SessionService};
use routes::Route;
use storage::KeyValueStore;
use transition::HydrationGate;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Device storage shared by the session store and the preferences.
#[derive(Clone)]
pub struct DeviceStorage(pub Rc<dyn KeyValueStore>);

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(config::load);
    let storage = use_context_provider(|| DeviceStorage(storage::platform_store(&config.storage)));

    use_hook(|| tracing::info!(platform = client_platform(), "Starting dashboard"));

    let theme = use_context_provider(|| ThemeState {
        mode: Signal::new(preferences::load_theme(
            storage.0.as_ref(),
            &config.ui.dark_mode_key,
            config.ui.default_dark,
        )),
    });

    // Mirror the preference onto the document whenever it changes
    use_effect(move || theme.apply());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            SessionRoot {}
        }
    }
}

/// Owns the session service. Lives under the toast provider so session
/// operations can raise toasts.
#[component]
fn SessionRoot() -> Element {
    let config: AppConfig = use_context();
    let storage: DeviceStorage = use_context();
    let toasts = use_toast();

    use_context_provider(|| {
        SessionService::new(
            storage.0.clone(),
            &config.session.storage_key,
            toasts,
            config.session.login_delay_ms,
        )
    });

    let session = use_session();

    rsx! {
        HydrationGate { loading: session.loading(),
            Router::<Route> {}
        }
    }
}
