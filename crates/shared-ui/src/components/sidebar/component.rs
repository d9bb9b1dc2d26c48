use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Open/closed state of the dashboard sidebar.
///
/// On wide viewports a closed sidebar collapses to an icon rail; on narrow
/// ones it is an overlay with a backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarHandle {
    open: Signal<bool>,
}

impl SidebarHandle {
    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn toggle(&mut self) {
        let current = (self.open)();
        self.open.set(!current);
    }

    pub fn close(&mut self) {
        self.open.set(false);
    }
}

/// Provides the sidebar handle to the shell below it.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let open = use_signal(|| default_open);
    let handle = use_context_provider(|| SidebarHandle { open });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "wd-shell",
            "data-sidebar-open": if handle.is_open() { "true" } else { "false" },
            {children}
        }
    }
}

/// Access the sidebar handle from any descendant of [`SidebarProvider`].
pub fn use_sidebar() -> SidebarHandle {
    use_context::<SidebarHandle>()
}

// ─── Layout ────────────────────────────────────────────────────────────

#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut sidebar = use_sidebar();
    let is_open = sidebar.is_open();

    let base = vec![
        Attribute::new("class", "wd-sidebar", None, false),
        Attribute::new("data-state", if is_open { "open" } else { "closed" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "wd-sidebar-backdrop",
                onclick: move |_| sidebar.close(),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Brand row at the top of the sidebar.
#[component]
pub fn SidebarHeader(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "wd-sidebar-header",
            span { class: "wd-sidebar-brand", "{title}" }
            if let Some(sub) = subtitle {
                span { class: "wd-sidebar-subtitle", "{sub}" }
            }
        }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "wd-sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "wd-sidebar-footer", {children} }
    }
}

// ─── Menu ──────────────────────────────────────────────────────────────

/// Optional label shown above a menu.
#[component]
pub fn SidebarMenu(#[props(default)] label: Option<String>, children: Element) -> Element {
    rsx! {
        if let Some(label) = label {
            div { class: "wd-sidebar-menu-label", "{label}" }
        }
        ul { class: "wd-sidebar-menu", {children} }
    }
}

/// One link row. Picking an item closes the overlay on narrow screens.
#[component]
pub fn SidebarMenuItem(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut sidebar = use_sidebar();

    let base = vec![
        Attribute::new("class", "wd-sidebar-item", None, false),
        Attribute::new("data-active", if active { "true" } else { "false" }, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            onclick: move |_| sidebar.close(),
            ..merged,
            {children}
        }
    }
}

// ─── Utilities ─────────────────────────────────────────────────────────

/// Hamburger button for the top bar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut sidebar = use_sidebar();

    rsx! {
        button {
            class: "wd-sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            "aria-expanded": if sidebar.is_open() { "true" } else { "false" },
            onclick: move |_| sidebar.toggle(),
            {children}
        }
    }
}

#[component]
pub fn SidebarSeparator() -> Element {
    rsx! {
        hr { class: "wd-sidebar-separator" }
    }
}

/// Main column beside the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "wd-sidebar-inset", {children} }
    }
}
