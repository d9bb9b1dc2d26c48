use crate::timer;
use dioxus::prelude::*;
use shared_ui::PageLoader;

/// Shows a placeholder for a fixed delay, then reveals the children.
///
/// Render it keyed by the current path: each navigation remounts it, which
/// drops the previous instance's timer along with it.
#[component]
pub fn RouteTransition(delay_ms: u64, children: Element) -> Element {
    let mut settled = use_signal(|| delay_ms == 0);

    use_hook(move || {
        if delay_ms > 0 {
            spawn(async move {
                timer::sleep(delay_ms).await;
                settled.set(true);
            });
        }
    });

    if settled() {
        rsx! { {children} }
    } else {
        rsx! { PageLoader {} }
    }
}

/// Holds the children behind a full-page loader until `loading` clears.
///
/// The flag is released by an effect, so the first render always shows the
/// loader and the router only mounts once hydration has been observed.
#[component]
pub fn HydrationGate(loading: Signal<bool>, children: Element) -> Element {
    let mut release = loading;
    use_effect(move || release.set(false));

    if loading() {
        return rsx! {
            div { class: "app-boot",
                PageLoader { message: "Loading...".to_string() }
            }
        };
    }

    rsx! { {children} }
}
