//! Reusable UI components.

mod confirm_modal;
mod nav_menu;
mod toast;

pub use confirm_modal::ConfirmModal;
pub use nav_menu::NavMenu;
pub use toast::{ToastProvider, use_toast};
