//! What selecting a menu entry does.

use crate::error::NavError;
use crate::logout::LogoutFlow;
use crate::menu::{MenuAction, MenuEntry, MenuTarget};
use crate::traits::ProfileHandle;

/// Effect of selecting an entry, for the client to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Navigate(String),
    OpenExternal(String),
    OrganizationSwitched(String),
    /// The logout prompt is now open.
    ConfirmLogout,
    /// Nothing to do (submenu headers).
    None,
}

/// Run the entry's action against the collaborators and report what the client must do next.
///
/// Organization switches go straight to `profile`; logout only opens the
/// confirmation prompt on `logout`.
pub fn activate(
    entry: &MenuEntry,
    profile: &dyn ProfileHandle,
    logout: &mut LogoutFlow,
) -> Result<Activation, NavError> {
    log::debug!("Activating menu entry '{}'", entry.key);

    let activation = match &entry.target {
        MenuTarget::Route { path } => Activation::Navigate(path.clone()),
        MenuTarget::External { url } => Activation::OpenExternal(url.clone()),
        MenuTarget::Submenu { .. } => Activation::None,
        MenuTarget::Action(MenuAction::SwitchOrganization { org_id }) => {
            profile.change_selected_org(org_id)?;
            log::info!("Switched organization to {}", org_id);
            Activation::OrganizationSwitched(org_id.clone())
        }
        MenuTarget::Action(MenuAction::Logout) => {
            logout.request();
            Activation::ConfirmLogout
        }
    };
    Ok(activation)
}
