//! Console pages (routes).
//!
//! The pages themselves live elsewhere in the product; these placeholders
//! give every sidebar target something to land on.

mod section;

pub use section::SectionPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;

/// Main workspace with route definitions.
#[component]
pub fn MainWorkspace() -> impl IntoView {
    view! {
        <main class="flex-1 overflow-auto">
            <Routes fallback=|| view! { <SectionPage title="Not Found"/> }>
                <Route path=path!("/apps") view=|| view! { <SectionPage title="App Management"/> } />
                <Route path=path!("/apps/:app_id/playground") view=|| view! { <SectionPage title="Playground"/> } />
                <Route path=path!("/apps/:app_id/testsets") view=|| view! { <SectionPage title="Test Sets"/> } />
                <Route path=path!("/apps/:app_id/evaluations") view=|| view! { <SectionPage title="Evaluate"/> } />
                <Route path=path!("/apps/:app_id/endpoints") view=|| view! { <SectionPage title="Endpoints"/> } />
                <Route path=path!("/settings") view=|| view! { <SectionPage title="Settings"/> } />
                <Route path=path!("/") view=|| view! { <Redirect path="/apps" /> } />
            </Routes>
        </main>
    }
}
