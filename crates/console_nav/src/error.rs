use thiserror::Error;

use crate::logout::LogoutStage;

/// Errors that can occur while building or driving the sidebar navigation.
///
/// Building the menu never fails on its own; absent inputs simply omit
/// entries. These errors come from validation, the logout flow and the
/// collaborator handles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Two entries in the same list (or submenu) share a key.
    #[error("duplicate menu key '{key}' in the {list} list")]
    DuplicateKey {
        /// Which list the duplicate was found in
        list: String,
        /// The offending key
        key: String,
    },

    /// A logout flow action was attempted from a stage that does not allow it.
    #[error("cannot {action} logout while {from}")]
    InvalidLogoutTransition {
        /// Stage the flow was in
        from: LogoutStage,
        /// Action that was rejected
        action: &'static str,
    },

    /// An organization switch named an id the profile does not know.
    #[error("organization '{id}' is not available for this user")]
    UnknownOrganization {
        /// Requested organization id
        id: String,
    },

    /// Console configuration could not be parsed.
    #[error("invalid console configuration: {message}")]
    InvalidConfig {
        /// Error message from the parser
        message: String,
    },
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::InvalidConfig {
            message: err.to_string(),
        }
    }
}
