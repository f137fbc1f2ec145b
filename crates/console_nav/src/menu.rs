//! Menu entries produced by the navigation builder.

use std::collections::HashSet;

use crate::error::NavError;
use crate::org::OrgAvatar;

/// Icon shown next to an entry. Rendering the artwork is up to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconId {
    Apps,
    Playground,
    TestSets,
    Evaluations,
    Endpoints,
    Settings,
    Help,
    Expert,
    Workspaces,
    Logout,
    Avatar(OrgAvatar),
}

/// Actions that do not navigate anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    SwitchOrganization { org_id: String },
    Logout,
}

/// What happens when an entry is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    /// Navigate within the console.
    Route { path: String },
    /// Open in a new tab.
    External { url: String },
    Submenu { children: Vec<MenuEntry> },
    Action(MenuAction),
}

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: String,
    pub label_text: String,
    /// Shown in place of the label when collapsed, and as a tooltip otherwise.
    /// Equal to `label_text` for entries without a description.
    pub collapsed_label_text: String,
    pub icon: IconId,
    pub target: MenuTarget,
}

impl MenuEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>, icon: IconId, target: MenuTarget) -> Self {
        let label_text = label.into();
        Self {
            key: key.into(),
            collapsed_label_text: label_text.clone(),
            label_text,
            icon,
            target,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.collapsed_label_text = description.into();
        self
    }

    pub fn display_label(&self, collapsed: bool) -> &str {
        if collapsed {
            &self.collapsed_label_text
        } else {
            &self.label_text
        }
    }

    /// Tooltip for the entry. Only described entries get one, and only when expanded.
    pub fn tooltip(&self, collapsed: bool) -> Option<&str> {
        if collapsed || self.collapsed_label_text == self.label_text {
            None
        } else {
            Some(&self.collapsed_label_text)
        }
    }

    pub fn route_path(&self) -> Option<&str> {
        match &self.target {
            MenuTarget::Route { path } => Some(path),
            _ => None,
        }
    }

    pub fn children(&self) -> &[MenuEntry] {
        match &self.target {
            MenuTarget::Submenu { children } => children,
            _ => &[],
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self.target, MenuTarget::External { .. })
    }
}

/// The complete view model for one render of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationModel {
    pub selected_key: String,
    /// Copied from the [`NavigationContext`](crate::NavigationContext); selects which label renders.
    pub collapsed: bool,
    pub primary: Vec<MenuEntry>,
    pub secondary: Vec<MenuEntry>,
}

impl NavigationModel {
    pub fn primary_keys(&self) -> Vec<&str> {
        self.primary.iter().map(|entry| entry.key.as_str()).collect()
    }

    pub fn secondary_keys(&self) -> Vec<&str> {
        self.secondary.iter().map(|entry| entry.key.as_str()).collect()
    }

    /// Find an entry by key in either list, including submenu children.
    pub fn find(&self, key: &str) -> Option<&MenuEntry> {
        fn search<'a>(entries: &'a [MenuEntry], key: &str) -> Option<&'a MenuEntry> {
            entries.iter().find_map(|entry| {
                if entry.key == key {
                    Some(entry)
                } else {
                    search(entry.children(), key)
                }
            })
        }

        search(&self.primary, key).or_else(|| search(&self.secondary, key))
    }

    /// Check that keys are unique within every list and submenu.
    pub fn validate(&self) -> Result<(), NavError> {
        check_unique("primary", &self.primary)?;
        check_unique("secondary", &self.secondary)
    }
}

fn check_unique(list: &str, entries: &[MenuEntry]) -> Result<(), NavError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.key.as_str()) {
            return Err(NavError::DuplicateKey {
                list: list.to_string(),
                key: entry.key.clone(),
            });
        }
        if !entry.children().is_empty() {
            check_unique(&entry.key, entry.children())?;
        }
    }
    Ok(())
}
