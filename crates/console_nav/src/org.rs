//! Organizations and the avatars shown next to them.

use serde::{Deserialize, Serialize};

/// Palette avatars are drawn from.
const AVATAR_COLORS: [&str; 12] = [
    "#1677ff", "#13c2c2", "#52c41a", "#faad14", "#fa541c", "#eb2f96",
    "#722ed1", "#2f54eb", "#a0d911", "#fa8c16", "#08979c", "#c41d7f",
];

/// Organization as supplied by the profile provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub id: String,
    pub name: String,
}

impl OrganizationSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn avatar(&self) -> OrgAvatar {
        OrgAvatar {
            color: color_from_str(&self.id).to_string(),
            initials: initials(&self.name),
        }
    }
}

/// Signed-in user as supplied by the profile provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    /// Username, if set and not blank.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgAvatar {
    pub color: String,
    pub initials: String,
}

/// Pick a palette color for a string. The same string always gets the same color.
pub fn color_from_str(s: &str) -> &'static str {
    let hash = s
        .encode_utf16()
        .fold(0i32, |hash, c| (c as i32).wrapping_add((hash << 5).wrapping_sub(hash)));
    AVATAR_COLORS[(hash.unsigned_abs() as usize) % AVATAR_COLORS.len()]
}

/// Up to two uppercase initials from the first words of a name.
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}
