//! Builds the sidebar's [`NavigationModel`] from the current route and profile state.

use crate::config::ConsoleConfig;
use crate::menu::{IconId, MenuAction, MenuEntry, MenuTarget, NavigationModel};
use crate::org::{OrganizationSummary, UserProfile};
use crate::route::{APPS_KEY, NavigationContext};

/// App-scoped pages: (key, label, description, icon).
const APP_SECTIONS: [(&str, &str, &str, IconId); 4] = [
    (
        "playground",
        "Playground",
        "Experiment with real data and optimize your parameters including prompts, methods, and configuration settings.",
        IconId::Playground,
    ),
    (
        "testsets",
        "Test Sets",
        "Create and manage testsets for evaluation purposes.",
        IconId::TestSets,
    ),
    (
        "evaluations",
        "Evaluate",
        "Perform 1-to-1 variant comparisons on testsets to identify superior options.",
        IconId::Evaluations,
    ),
    (
        "endpoints",
        "Endpoints",
        "Monitor production logs to ensure seamless operations.",
        IconId::Endpoints,
    ),
];

const APPS_LABEL: &str = "App Management";
const APPS_DESCRIPTION: &str = "Create new applications or switch between your existing projects.";

pub const APPS_PATH: &str = "/apps";
pub const SETTINGS_PATH: &str = "/settings";
pub const ORG_KEY_PREFIX: &str = "org:";

/// Everything the builder reads besides configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavInputs {
    pub context: NavigationContext,
    pub session_exists: bool,
    pub organizations: Vec<OrganizationSummary>,
    pub selected_org: Option<OrganizationSummary>,
    pub user: Option<UserProfile>,
}

pub struct NavigationModelBuilder<'a> {
    config: &'a ConsoleConfig,
}

impl<'a> NavigationModelBuilder<'a> {
    pub fn new(config: &'a ConsoleConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, inputs: &NavInputs) -> NavigationModel {
        let route = inputs.context.route();
        let primary = if route.has_section() {
            app_entries(route.app_id.as_deref())
        } else {
            vec![apps_entry()]
        };

        let model = NavigationModel {
            selected_key: route.selected_key().to_string(),
            collapsed: inputs.context.collapsed,
            primary,
            secondary: self.secondary_entries(inputs),
        };
        log::debug!(
            "Built sidebar model: selected={} primary={:?} secondary={:?}",
            model.selected_key,
            model.primary_keys(),
            model.secondary_keys()
        );
        model
    }

    fn secondary_entries(&self, inputs: &NavInputs) -> Vec<MenuEntry> {
        let demo = self.config.demo_mode();
        let selected_org = inputs.selected_org.as_ref().filter(|_| demo);
        let has_username = inputs
            .user
            .as_ref()
            .and_then(UserProfile::username)
            .is_some();

        let settings = inputs.session_exists.then(|| {
            MenuEntry::new(
                "settings",
                "Settings",
                IconId::Settings,
                MenuTarget::Route { path: SETTINGS_PATH.to_string() },
            )
        });
        let help = MenuEntry::new(
            "help",
            "Help",
            IconId::Help,
            MenuTarget::External { url: self.config.docs_url.clone() },
        );
        let expert = demo.then(|| {
            MenuEntry::new(
                "expert",
                "Talk to an Expert",
                IconId::Expert,
                MenuTarget::External { url: self.config.expert_url.clone() },
            )
        });
        let workspaces = selected_org.map(|org| workspaces_entry(org, &inputs.organizations));
        let logout = selected_org
            .filter(|_| has_username)
            .map(|_| MenuEntry::new("logout", "Logout", IconId::Logout, MenuTarget::Action(MenuAction::Logout)));

        settings
            .into_iter()
            .chain(Some(help))
            .chain(expert)
            .chain(workspaces)
            .chain(logout)
            .collect()
    }
}

fn apps_entry() -> MenuEntry {
    MenuEntry::new(
        APPS_KEY,
        APPS_LABEL,
        IconId::Apps,
        MenuTarget::Route { path: APPS_PATH.to_string() },
    )
    .with_description(APPS_DESCRIPTION)
}

/// Without an app id the app-scoped entries fall back to the app list.
fn app_entries(app_id: Option<&str>) -> Vec<MenuEntry> {
    APP_SECTIONS
        .iter()
        .map(|(key, label, description, icon)| {
            MenuEntry::new(
                *key,
                *label,
                icon.clone(),
                MenuTarget::Route {
                    path: app_id.map_or_else(|| APPS_PATH.to_string(), |id| app_path(id, key)),
                },
            )
            .with_description(*description)
        })
        .chain(std::iter::once(apps_entry()))
        .collect()
}

pub fn app_path(app_id: &str, section: &str) -> String {
    format!("{}/{}/{}", APPS_PATH, app_id, section)
}

fn workspaces_entry(selected: &OrganizationSummary, organizations: &[OrganizationSummary]) -> MenuEntry {
    let children = organizations
        .iter()
        .map(|org| {
            MenuEntry::new(
                format!("{}{}", ORG_KEY_PREFIX, org.id),
                org.name.clone(),
                IconId::Avatar(org.avatar()),
                MenuTarget::Action(MenuAction::SwitchOrganization { org_id: org.id.clone() }),
            )
        })
        .collect();

    MenuEntry::new(
        "workspaces",
        selected.name.clone(),
        IconId::Workspaces,
        MenuTarget::Submenu { children },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeatureFlag;

    fn demo_config() -> ConsoleConfig {
        ConsoleConfig {
            feature_flag: FeatureFlag::Cloud,
            ..ConsoleConfig::default()
        }
    }

    fn inputs(path: &str) -> NavInputs {
        NavInputs {
            context: NavigationContext::from_path(path),
            ..NavInputs::default()
        }
    }

    #[test]
    fn test_app_paths_use_app_id() {
        let config = ConsoleConfig::default();
        let model = NavigationModelBuilder::new(&config).build(&inputs("/apps/a1/testsets"));
        let paths: Vec<_> = model.primary.iter().filter_map(MenuEntry::route_path).collect();
        assert_eq!(
            paths,
            vec![
                "/apps/a1/playground",
                "/apps/a1/testsets",
                "/apps/a1/evaluations",
                "/apps/a1/endpoints",
                "/apps",
            ]
        );
    }

    #[test]
    fn test_selected_key_matches_one_primary_entry() {
        let config = ConsoleConfig::default();
        for path in ["/apps", "/apps/a1/playground", "/apps/a1/endpoints"] {
            let model = NavigationModelBuilder::new(&config).build(&inputs(path));
            let selected = model.primary.iter().filter(|e| e.key == model.selected_key).count();
            assert_eq!(selected, 1, "{path}");
        }
    }

    #[test]
    fn test_section_without_app_id_routes_to_apps() {
        let config = ConsoleConfig::default();
        let model = NavigationModelBuilder::new(&config).build(&inputs("/apps//endpoints"));
        assert_eq!(model.selected_key, "endpoints");
        assert_eq!(model.primary.len(), 5);
        assert!(model.primary.iter().all(|e| e.route_path() == Some(APPS_PATH)));
    }

    #[test]
    fn test_collapse_changes_labels_not_targets() {
        let config = ConsoleConfig::default();
        let builder = NavigationModelBuilder::new(&config);
        let expanded = builder.build(&inputs("/apps/a1/playground"));
        let collapsed = builder.build(&NavInputs {
            context: NavigationContext::from_path("/apps/a1/playground").with_collapsed(true),
            ..NavInputs::default()
        });

        // Only the flag differs; entries and targets are identical
        assert!(!expanded.collapsed);
        assert!(collapsed.collapsed);
        assert_eq!(expanded.primary, collapsed.primary);
        assert_eq!(expanded.secondary, collapsed.secondary);
        let entry = &collapsed.primary[0];
        assert_eq!(entry.display_label(false), "Playground");
        assert!(entry.display_label(true).starts_with("Experiment with real data"));
    }

    #[test]
    fn test_demo_without_selected_org_has_no_workspaces() {
        let config = demo_config();
        let mut input = inputs("/apps");
        input.organizations = vec![OrganizationSummary::new("o1", "Acme")];
        input.user = Some(UserProfile { id: "u1".into(), username: Some("ada".into()), email: None });

        let model = NavigationModelBuilder::new(&config).build(&input);
        assert_eq!(model.secondary_keys(), vec!["help", "expert"]);
    }

    #[test]
    fn test_logout_needs_username() {
        let config = demo_config();
        let mut input = inputs("/apps");
        input.organizations = vec![OrganizationSummary::new("o1", "Acme")];
        input.selected_org = Some(OrganizationSummary::new("o1", "Acme"));
        input.user = Some(UserProfile { id: "u1".into(), username: None, email: None });

        let model = NavigationModelBuilder::new(&config).build(&input);
        assert_eq!(model.secondary_keys(), vec!["help", "expert", "workspaces"]);
    }

    #[test]
    fn test_selected_org_ignored_outside_demo() {
        let config = ConsoleConfig::default();
        let mut input = inputs("/apps");
        input.session_exists = true;
        input.selected_org = Some(OrganizationSummary::new("o1", "Acme"));
        input.user = Some(UserProfile { id: "u1".into(), username: Some("ada".into()), email: None });

        let model = NavigationModelBuilder::new(&config).build(&input);
        assert_eq!(model.secondary_keys(), vec!["settings", "help"]);
    }

    #[test]
    fn test_workspaces_label_is_selected_org() {
        let config = demo_config();
        let mut input = inputs("/apps");
        input.organizations = vec![
            OrganizationSummary::new("o1", "Acme"),
            OrganizationSummary::new("o2", "Globex Corp"),
        ];
        input.selected_org = Some(OrganizationSummary::new("o2", "Globex Corp"));

        let model = NavigationModelBuilder::new(&config).build(&input);
        let workspaces = model.find("workspaces").unwrap();
        assert_eq!(workspaces.label_text, "Globex Corp");

        let child_keys: Vec<_> = workspaces.children().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(child_keys, vec!["org:o1", "org:o2"]);
        assert!(matches!(
            &workspaces.children()[1].icon,
            IconId::Avatar(avatar) if avatar.initials == "GC"
        ));
    }

    #[test]
    fn test_external_links_come_from_config() {
        let config = ConsoleConfig {
            feature_flag: FeatureFlag::Enterprise,
            docs_url: "https://docs.example.com".into(),
            expert_url: "https://example.com/book".into(),
        };
        let model = NavigationModelBuilder::new(&config).build(&inputs("/apps"));
        assert_eq!(
            model.find("help").map(|e| e.target.clone()),
            Some(MenuTarget::External { url: "https://docs.example.com".into() })
        );
        assert_eq!(
            model.find("expert").map(|e| e.target.clone()),
            Some(MenuTarget::External { url: "https://example.com/book".into() })
        );
    }
}
