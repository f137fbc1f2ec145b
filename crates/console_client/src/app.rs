//! Application root component.

use console_nav::ConsoleConfig;
use leptos::prelude::*;
use leptos_router::components::Router;

use crate::components::ToastProvider;
use crate::layout::ConsoleLayout;
use crate::profile::{ProfileProvider, ProfileSnapshot};
use crate::session::SessionProvider;
use crate::theme::provide_theme_context;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let config = ConsoleConfig::from_build_env();
    log::info!(
        "Console starting ({} build, demo mode {})",
        config.feature_flag,
        if config.demo_mode() { "on" } else { "off" }
    );
    provide_context(config);
    provide_theme_context();

    let snapshot = ProfileSnapshot::load();
    let has_user = snapshot.user.is_some();

    view! {
        <ToastProvider>
            <SessionProvider active=has_user>
                <ProfileProvider snapshot=snapshot>
                    <Router>
                        <ConsoleLayout/>
                    </Router>
                </ProfileProvider>
            </SessionProvider>
        </ToastProvider>
    }
}
