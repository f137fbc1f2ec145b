//! # Console Nav
//!
//! Navigation view model for the console sidebar.
//!
//! Everything here is a pure function of its inputs: the current path, the
//! session and profile state, and the deployment [`ConsoleConfig`]. The
//! Leptos client turns the resulting [`NavigationModel`] into markup and
//! plugs its contexts in through [`SessionHandle`] and [`ProfileHandle`].
//!
//! ## Quick Start
//!
//! ```rust
//! use console_nav::{ConsoleConfig, NavInputs, NavigationContext, NavigationModelBuilder};
//!
//! let config = ConsoleConfig::default();
//! let inputs = NavInputs {
//!     context: NavigationContext::from_path("/apps/a1/playground"),
//!     ..NavInputs::default()
//! };
//!
//! let model = NavigationModelBuilder::new(&config).build(&inputs);
//! assert_eq!(model.selected_key, "playground");
//! assert_eq!(model.primary_keys(), ["playground", "testsets", "evaluations", "endpoints", "apps"]);
//! assert_eq!(model.secondary_keys(), ["help"]);
//! ```

mod activation;
mod builder;
mod config;
mod error;
mod logout;
mod menu;
mod org;
mod route;
mod traits;

pub use activation::{Activation, activate};
pub use builder::{APPS_PATH, NavInputs, NavigationModelBuilder, ORG_KEY_PREFIX, SETTINGS_PATH, app_path};
pub use config::{ConsoleConfig, DEFAULT_DOCS_URL, DEFAULT_EXPERT_URL, FeatureFlag};
pub use error::NavError;
pub use logout::{LOGOUT_MESSAGE, LOGOUT_TITLE, LogoutFlow, LogoutStage};
pub use menu::{IconId, MenuAction, MenuEntry, MenuTarget, NavigationModel};
pub use org::{OrgAvatar, OrganizationSummary, UserProfile, color_from_str, initials};
pub use route::{APPS_KEY, NavigationContext, RouteState};
pub use traits::{ProfileHandle, SessionHandle};
