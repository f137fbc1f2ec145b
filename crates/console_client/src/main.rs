//! Console Client
//!
//! Browser client hosting the console sidebar. The navigation logic lives in
//! `console_nav`; this crate provides the session, profile and theme contexts
//! it reads and renders the result with Leptos.

mod app;
mod components;
mod layout;
mod pages;
mod profile;
mod session;
mod theme;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(|| leptos::view! { <app::App/> });
}
