use leptos::prelude::*;
use leptos_use::use_preferred_dark;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "console-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Dark,
    Light,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
        }
    }

    pub fn next(&self) -> ThemeMode {
        match self {
            ThemeMode::System => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::System,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub mode: RwSignal<ThemeMode>,
    prefers_dark: Signal<bool>,
}

impl ThemeContext {
    /// Whether the sidebar should render dark, resolving `System` through the OS preference.
    pub fn is_dark(&self) -> bool {
        match self.mode.get() {
            ThemeMode::System => self.prefers_dark.get(),
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
        }
    }
}

pub fn provide_theme_context() {
    let storage = window().local_storage().ok().flatten();

    // Load initial theme from localStorage
    let initial_mode: ThemeMode = storage
        .as_ref()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .and_then(|t| serde_json::from_str::<ThemeMode>(&format!("\"{}\"", t)).ok())
        .unwrap_or_default();

    let ctx = ThemeContext {
        mode: RwSignal::new(initial_mode),
        prefers_dark: use_preferred_dark(),
    };

    // Effect to persist the mode and toggle the body's dark class
    Effect::new(move |_| {
        let dark = ctx.is_dark();

        if let Some(body) = document().body() {
            let classes = body.class_list();
            let result = if dark { classes.add_1("dark") } else { classes.remove_1("dark") };
            if result.is_err() {
                log::warn!("Failed to update the body theme class");
            }
        }

        if let Some(s) = &storage {
            let serialized = serde_json::to_string(&ctx.mode.get()).unwrap_or_default();
            if s.set_item(STORAGE_KEY, serialized.trim_matches('"')).is_err() {
                log::warn!("Failed to persist theme");
            }
        }
    });

    provide_context(ctx);
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided")
}
