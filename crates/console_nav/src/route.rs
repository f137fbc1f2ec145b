//! Path parsing for the sidebar.
//!
//! Console routes look like `/apps/{app_id}/{section}/...`. Splitting on `/`
//! puts the app id at index 2 and the section at index 3.

/// Key selected when no section is active.
pub const APPS_KEY: &str = "apps";

const APP_ID_INDEX: usize = 2;
const SECTION_INDEX: usize = 3;

/// What the sidebar needs to know about the current location.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationContext {
    pub path_segments: Vec<String>,
    /// App id supplied by the router, if it resolved one.
    pub app_id: Option<String>,
    /// Carried into [`NavigationModel::collapsed`](crate::NavigationModel); never affects targets.
    pub collapsed: bool,
}

impl NavigationContext {
    pub fn from_path(path: &str) -> Self {
        let path_segments = split_path(path);
        let app_id = segment_at(&path_segments, APP_ID_INDEX);
        Self {
            path_segments,
            app_id,
            collapsed: false,
        }
    }

    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn route(&self) -> RouteState {
        RouteState {
            app_id: self
                .app_id
                .clone()
                .or_else(|| segment_at(&self.path_segments, APP_ID_INDEX)),
            section: segment_at(&self.path_segments, SECTION_INDEX),
        }
    }
}

/// Result of parsing a path: an optional app id and an optional section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteState {
    pub app_id: Option<String>,
    pub section: Option<String>,
}

impl RouteState {
    pub fn parse(path: &str) -> Self {
        NavigationContext::from_path(path).route()
    }

    pub fn has_section(&self) -> bool {
        self.section.is_some()
    }

    /// The menu key to highlight: the section, or [`APPS_KEY`] without one.
    pub fn selected_key(&self) -> &str {
        self.section.as_deref().unwrap_or(APPS_KEY)
    }
}

/// Split a path into its raw segments, dropping any query string or fragment.
fn split_path(path: &str) -> Vec<String> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').map(str::to_string).collect()
}

/// Empty segments (`/apps//x`, trailing slashes) count as absent.
fn segment_at(segments: &[String], index: usize) -> Option<String> {
    segments
        .get(index)
        .filter(|segment| !segment.is_empty())
        .cloned()
}
