//! Profile state: the signed-in user, their organizations and the selected one.
//!
//! Fetching this data belongs to the backend integration; the client starts
//! from a [`ProfileSnapshot`] the host page leaves in `localStorage` and keeps
//! the selected organization in sync with it.

use console_nav::{NavError, OrganizationSummary, ProfileHandle, UserProfile};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "console-profile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileSnapshot {
    pub user: Option<UserProfile>,
    pub orgs: Vec<OrganizationSummary>,
    pub selected_org_id: Option<String>,
}

impl ProfileSnapshot {
    /// Read the stored snapshot. A missing or unreadable entry yields an empty profile.
    pub fn load() -> Self {
        let Some(raw) = window()
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        else {
            return Self::default();
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("Ignoring stored profile: {}", err);
                Self::default()
            }
        }
    }

    fn selected_org(&self) -> Option<OrganizationSummary> {
        let id = self.selected_org_id.as_ref()?;
        self.orgs.iter().find(|org| &org.id == id).cloned()
    }
}

#[derive(Clone, Copy)]
pub struct ProfileContext {
    pub user: RwSignal<Option<UserProfile>>,
    pub orgs: RwSignal<Vec<OrganizationSummary>>,
    pub selected_org: RwSignal<Option<OrganizationSummary>>,
}

impl ProfileContext {
    pub fn new(snapshot: ProfileSnapshot) -> Self {
        let selected = snapshot.selected_org();
        Self {
            user: RwSignal::new(snapshot.user),
            orgs: RwSignal::new(snapshot.orgs),
            selected_org: RwSignal::new(selected),
        }
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            user: self.user.get(),
            orgs: self.orgs.get(),
            selected_org_id: self.selected_org.with(|org| org.as_ref().map(|o| o.id.clone())),
        }
    }

    /// Forget the user and their organizations.
    pub fn reset(&self) {
        self.user.set(None);
        self.orgs.set(Vec::new());
        self.selected_org.set(None);
    }
}

impl ProfileHandle for ProfileContext {
    fn change_selected_org(&self, org_id: &str) -> Result<(), NavError> {
        let org = self
            .orgs
            .with_untracked(|orgs| orgs.iter().find(|org| org.id == org_id).cloned())
            .ok_or_else(|| NavError::UnknownOrganization { id: org_id.to_string() })?;
        self.selected_org.set(Some(org));
        Ok(())
    }
}

/// Hook to get the profile context.
pub fn use_profile() -> ProfileContext {
    use_context::<ProfileContext>().expect("ProfileContext not found. Wrap your app in ProfileProvider.")
}

#[component]
pub fn ProfileProvider(snapshot: ProfileSnapshot, children: Children) -> impl IntoView {
    let ctx = ProfileContext::new(snapshot);
    provide_context(ctx);

    // Persist profile changes so the selected organization survives reloads
    Effect::new(move |_| {
        let snapshot = ctx.snapshot();
        let Some(storage) = window().local_storage().ok().flatten() else {
            return;
        };
        let result = if snapshot == ProfileSnapshot::default() {
            storage.remove_item(STORAGE_KEY)
        } else {
            match serde_json::to_string(&snapshot) {
                Ok(json) => storage.set_item(STORAGE_KEY, &json),
                Err(err) => {
                    log::warn!("Failed to serialize profile: {}", err);
                    return;
                }
            }
        };
        if result.is_err() {
            log::warn!("Failed to persist profile");
        }
    });

    children()
}
