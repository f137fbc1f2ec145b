//! Console layout components.

mod sidebar;

pub use sidebar::Sidebar;

use leptos::prelude::*;

use crate::pages::MainWorkspace;

/// Layout context - shared state across layout components.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    /// Whether the sidebar is collapsed to icons and descriptive labels.
    pub collapsed: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            collapsed: RwSignal::new(false),
        }
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext required")
}

/// Root console layout: sidebar on the left, routed pages on the right.
#[component]
pub fn ConsoleLayout() -> impl IntoView {
    provide_context(LayoutContext::new());

    view! {
        <div class="h-screen w-screen flex overflow-hidden bg-neutral-50 dark:bg-neutral-950 text-neutral-900 dark:text-neutral-100">
            <Sidebar/>
            <MainWorkspace/>
        </div>
    }
}
