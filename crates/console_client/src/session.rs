//! Session state shared with the sidebar.

use console_nav::SessionHandle;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub exists: RwSignal<bool>,
}

impl SessionContext {
    pub fn new(exists: bool) -> Self {
        Self {
            exists: RwSignal::new(exists),
        }
    }
}

impl SessionHandle for SessionContext {
    fn session_exists(&self) -> bool {
        self.exists.get_untracked()
    }

    fn logout(&self) {
        log::info!("Ending session");
        self.exists.set(false);
    }
}

/// Hook to get the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found. Wrap your app in SessionProvider.")
}

#[component]
pub fn SessionProvider(
    /// Whether a session is already established.
    active: bool,
    children: Children,
) -> impl IntoView {
    provide_context(SessionContext::new(active));
    children()
}
