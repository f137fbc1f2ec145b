//! Renders a list of [`MenuEntry`] values.
//!
//! Routes become router links and external targets plain anchors opening a
//! new tab. Everything else is handed back through `on_activate`.

use console_nav::{IconId, MenuEntry, MenuTarget};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavMenu(
    entries: Vec<MenuEntry>,
    #[prop(into)] selected_key: String,
    collapsed: bool,
    on_activate: Callback<MenuEntry>,
) -> impl IntoView {
    view! {
        <ul class="flex flex-col gap-0.5 list-none p-0 m-0">
            {entries
                .into_iter()
                .map(|entry| {
                    let selected = entry.key == selected_key;
                    view! {
                        <NavMenuItem entry=entry selected=selected collapsed=collapsed on_activate=on_activate/>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn item_class(selected: bool) -> &'static str {
    if selected {
        "w-full flex items-center gap-2 px-3 py-2 rounded text-sm text-left no-underline bg-sky-100 text-sky-700 dark:bg-sky-900/40 dark:text-sky-300"
    } else {
        "w-full flex items-center gap-2 px-3 py-2 rounded text-sm text-left no-underline text-neutral-700 hover:bg-neutral-100 dark:text-neutral-300 dark:hover:bg-neutral-800"
    }
}

#[component]
fn NavMenuItem(
    entry: MenuEntry,
    selected: bool,
    collapsed: bool,
    on_activate: Callback<MenuEntry>,
) -> impl IntoView {
    let class = item_class(selected);
    let label = entry.display_label(collapsed).to_string();
    let tooltip = entry.tooltip(collapsed).map(str::to_string);
    let icon = entry.icon.clone();

    match entry.target.clone() {
        MenuTarget::Route { path } => view! {
            <li>
                <A href=path attr:class=class attr:title=tooltip>
                    <MenuIcon icon=icon/>
                    <span class="truncate">{label}</span>
                </A>
            </li>
        }
        .into_any(),
        MenuTarget::External { url } => view! {
            <li>
                <a href=url target="_blank" rel="noopener noreferrer" class=class title=tooltip>
                    <MenuIcon icon=icon/>
                    <span class="truncate">{label}</span>
                </a>
            </li>
        }
        .into_any(),
        MenuTarget::Action(_) => view! {
            <li>
                <button class=class title=tooltip on:click=move |_| on_activate.run(entry.clone())>
                    <MenuIcon icon=icon/>
                    <span class="truncate">{label}</span>
                </button>
            </li>
        }
        .into_any(),
        MenuTarget::Submenu { children } => view! {
            <SubmenuItem label=label icon=icon items=children class=class on_activate=on_activate/>
        }
        .into_any(),
    }
}

/// Expandable group, used for the organization switcher.
#[component]
fn SubmenuItem(
    label: String,
    icon: IconId,
    items: Vec<MenuEntry>,
    class: &'static str,
    on_activate: Callback<MenuEntry>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <li>
            <button class=class on:click=move |_| open.update(|o| *o = !*o)>
                <MenuIcon icon=icon/>
                <span class="truncate flex-1">{label}</span>
                <span class="text-xs opacity-60">{move || if open.get() { "▾" } else { "▸" }}</span>
            </button>
            {move || open.get().then(|| view! {
                <ul class="flex flex-col gap-0.5 list-none pl-4 m-0">
                    {items
                        .iter()
                        .cloned()
                        .map(|item| {
                            let label = item.label_text.clone();
                            let icon = item.icon.clone();
                            view! {
                                <li>
                                    <button
                                        class=item_class(false)
                                        on:click=move |_| {
                                            open.set(false);
                                            on_activate.run(item.clone());
                                        }
                                    >
                                        <MenuIcon icon=icon/>
                                        <span class="truncate">{label}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            })}
        </li>
    }
}

#[component]
fn MenuIcon(icon: IconId) -> impl IntoView {
    match icon {
        IconId::Avatar(avatar) => view! {
            <span
                class="w-[18px] h-[18px] rounded-full text-[9px] text-white flex items-center justify-center shrink-0"
                style=format!("background-color: {}", avatar.color)
            >
                {avatar.initials}
            </span>
        }
        .into_any(),
        other => view! { <span class="w-[18px] text-center shrink-0">{icon_glyph(&other)}</span> }.into_any(),
    }
}

fn icon_glyph(icon: &IconId) -> &'static str {
    match icon {
        IconId::Apps => "▦",
        IconId::Playground => "🚀",
        IconId::TestSets => "🗄️",
        IconId::Evaluations => "📈",
        IconId::Endpoints => "☁️",
        IconId::Settings => "⚙️",
        IconId::Help => "❓",
        IconId::Expert => "📞",
        IconId::Workspaces => "🏢",
        IconId::Logout => "⏻",
        IconId::Avatar(_) => "",
    }
}
