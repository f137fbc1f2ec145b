use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    let params = use_params_map();
    let app_id = move || params.with(|p| p.get("app_id"));

    view! {
        <div class="p-6">
            <h1 class="text-xl font-semibold mb-1">{title}</h1>
            {move || app_id().map(|id| view! {
                <p class="text-xs text-neutral-500">"App " <code>{id}</code></p>
            })}
        </div>
    }
}
