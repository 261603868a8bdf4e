//! Theme management module for the site.
//!
//! Provides a context-based light/dark theme. Components observe
//! `ThemeContext::theme` reactively instead of inspecting DOM classes; the
//! subscription ends with the owning component. The preference is persisted
//! in localStorage.

use crate::config::use_site_config;
use crate::shared::icons::icon;
use crate::shared::storage;
use contracts::enums::Theme;
use leptos::prelude::*;
use web_sys::window;

/// Load theme from localStorage, falling back to `default`.
fn load_theme_from_storage(key: &str, default: Theme) -> Theme {
    storage::read(key)
        .and_then(|code| Theme::from_code(&code))
        .unwrap_or(default)
}

/// Set `data-theme` on body; stylesheets key off this attribute.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.code());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    storage_key: StoredValue<String>,
}

impl ThemeContext {
    /// Set the theme and persist to storage.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.storage_key
            .with_value(|key| storage::write(key, theme.code()));
        apply_theme(theme);
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let config = use_site_config();
    let initial_theme = load_theme_from_storage(&config.theme_storage_key, config.default_theme);

    // Apply initial theme before the first paint of children
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
        storage_key: StoredValue::new(config.theme_storage_key),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark switch for the header.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="header__icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || format!("Switch to {} theme", ctx.get_theme().toggled().display_name())
        >
            {move || match ctx.get_theme() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}
