use crate::error::NavError;

/// Session collaborator.
///
/// Implemented by the client's session context; tests use call-counting doubles.
pub trait SessionHandle {
    fn session_exists(&self) -> bool;

    /// End the session. Called once per confirmed logout.
    fn logout(&self);
}

/// Profile collaborator that owns the selected organization.
pub trait ProfileHandle {
    /// Make `org_id` the selected organization.
    fn change_selected_org(&self, org_id: &str) -> Result<(), NavError>;
}
