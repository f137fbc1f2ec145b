//! Collapsible application sidebar.

use console_nav::{
    APPS_PATH, Activation, ConsoleConfig, LOGOUT_MESSAGE, LOGOUT_TITLE, LogoutFlow, MenuEntry,
    NavInputs, NavigationContext, NavigationModelBuilder, activate,
};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::{ConfirmModal, NavMenu, use_toast};
use crate::layout::use_layout;
use crate::profile::use_profile;
use crate::session::use_session;
use crate::theme::use_theme;

/// Left sidebar with the logo, app navigation and account menu.
#[component]
pub fn Sidebar() -> impl IntoView {
    let config = use_context::<ConsoleConfig>().unwrap_or_default();
    let session = use_session();
    let profile = use_profile();
    let theme = use_theme();
    let toast = use_toast();
    let layout = use_layout();
    let location = use_location();

    let logout_flow = RwSignal::new(LogoutFlow::new());

    let collapsed = layout.collapsed;

    // Rebuilt whenever the path, profile or collapsed state changes
    let model = Memo::new(move |_| {
        let inputs = NavInputs {
            context: NavigationContext::from_path(&location.pathname.get()).with_collapsed(collapsed.get()),
            session_exists: session.exists.get(),
            organizations: profile.orgs.get(),
            selected_org: profile.selected_org.get(),
            user: profile.user.get(),
        };
        NavigationModelBuilder::new(&config).build(&inputs)
    });

    let on_activate = Callback::new(move |entry: MenuEntry| {
        let mut flow = logout_flow.get_untracked();
        let result = activate(&entry, &profile, &mut flow);
        logout_flow.set(flow);

        match result {
            Ok(Activation::OrganizationSwitched(_)) => {
                if let Some(org) = profile.selected_org.get_untracked() {
                    toast.info(format!("Switched to {}", org.name));
                }
            }
            Ok(other) => log::debug!("Menu entry '{}' activated: {:?}", entry.key, other),
            Err(err) => {
                log::warn!("Menu entry '{}' failed: {}", entry.key, err);
                toast.error(err.to_string());
            }
        }
    });

    let on_confirm_logout = Callback::new(move |()| {
        let mut flow = logout_flow.get_untracked();
        match flow.confirm(&session) {
            Ok(()) => profile.reset(),
            Err(err) => log::warn!("{}", err),
        }
        logout_flow.set(flow);
    });

    let on_cancel_logout = Callback::new(move |()| {
        let mut flow = logout_flow.get_untracked();
        if let Err(err) = flow.cancel() {
            log::warn!("{}", err);
        }
        logout_flow.set(flow);
    });

    let sider_class = move || {
        format!(
            "h-screen sticky top-0 shrink-0 flex flex-col px-2.5 border-r transition-all {} {}",
            if collapsed.get() { "w-20" } else { "w-[225px]" },
            if theme.is_dark() {
                "bg-neutral-900 border-neutral-800"
            } else {
                "bg-white border-neutral-200"
            }
        )
    };

    view! {
        <aside class=sider_class>
            <div class="my-5 flex justify-center">
                <A href=APPS_PATH attr:class="no-underline">
                    <Logo collapsed=collapsed/>
                </A>
            </div>

            <ErrorBoundary fallback=|_| view! { <div/> }>
                {move || {
                    let model = model.get();
                    let collapsed = model.collapsed;
                    model.validate().map(|()| {
                        let selected_key = model.selected_key.clone();
                        view! {
                            <div class="flex-1 flex flex-col justify-between overflow-y-auto">
                                <NavMenu
                                    entries=model.primary
                                    selected_key=selected_key.clone()
                                    collapsed=collapsed
                                    on_activate=on_activate
                                />
                                <NavMenu
                                    entries=model.secondary
                                    selected_key=selected_key
                                    collapsed=collapsed
                                    on_activate=on_activate
                                />
                            </div>
                        }
                    })
                }}
            </ErrorBoundary>

            <div class="my-3 flex items-center justify-between text-xs text-neutral-500">
                <button
                    class="px-2 py-1 hover:text-neutral-800 dark:hover:text-neutral-200"
                    title=move || format!("Theme: {}", theme.mode.get().name())
                    on:click=move |_| theme.mode.update(|mode| *mode = mode.next())
                >
                    "◐"
                </button>
                <button
                    class="px-2 py-1 hover:text-neutral-800 dark:hover:text-neutral-200"
                    title=move || if collapsed.get() { "Expand" } else { "Collapse" }
                    on:click=move |_| collapsed.update(|c| *c = !*c)
                >
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>

            <Show when=move || logout_flow.with(LogoutFlow::is_prompt_open)>
                <ConfirmModal
                    title=LOGOUT_TITLE
                    message=LOGOUT_MESSAGE
                    on_confirm=on_confirm_logout
                    on_cancel=on_cancel_logout
                />
            </Show>
        </aside>
    }
}

#[component]
fn Logo(collapsed: RwSignal<bool>) -> impl IntoView {
    view! {
        <span class="flex items-center gap-2 font-semibold text-lg text-sky-600">
            <span class="w-8 h-8 rounded bg-sky-600 text-white flex items-center justify-center">"A"</span>
            <Show when=move || !collapsed.get()>
                <span>"agenta"</span>
            </Show>
        </span>
    }
}
