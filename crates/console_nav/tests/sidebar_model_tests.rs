use std::cell::{Cell, RefCell};

use console_nav::{
    Activation, ConsoleConfig, FeatureFlag, LogoutFlow, MenuAction, MenuTarget, NavError, NavInputs,
    NavigationContext, NavigationModel, NavigationModelBuilder, OrganizationSummary, ProfileHandle,
    SessionHandle, UserProfile, activate,
};

// Session double that counts logouts
#[derive(Default)]
struct TestSession {
    exists: bool,
    logouts: Cell<u32>,
}

impl SessionHandle for TestSession {
    fn session_exists(&self) -> bool {
        self.exists
    }

    fn logout(&self) {
        self.logouts.set(self.logouts.get() + 1);
    }
}

// Profile double that records organization switches
#[derive(Default)]
struct TestProfile {
    switches: RefCell<Vec<String>>,
}

impl ProfileHandle for TestProfile {
    fn change_selected_org(&self, org_id: &str) -> Result<(), NavError> {
        self.switches.borrow_mut().push(org_id.to_string());
        Ok(())
    }
}

fn build(config: &ConsoleConfig, inputs: &NavInputs) -> NavigationModel {
    NavigationModelBuilder::new(config).build(inputs)
}

fn path_inputs(path: &str) -> NavInputs {
    NavInputs {
        context: NavigationContext::from_path(path),
        ..NavInputs::default()
    }
}

// Session present, demo mode, selected org, username, one organization
fn full_demo(session: &TestSession) -> (ConsoleConfig, NavInputs) {
    let config = ConsoleConfig {
        feature_flag: FeatureFlag::Cloud,
        ..ConsoleConfig::default()
    };
    let acme = OrganizationSummary::new("o1", "Acme");
    let inputs = NavInputs {
        context: NavigationContext::from_path("/apps"),
        session_exists: session.session_exists(),
        organizations: vec![acme.clone()],
        selected_org: Some(acme),
        user: Some(UserProfile {
            id: "u1".into(),
            username: Some("ada".into()),
            email: Some("ada@example.com".into()),
        }),
    };
    (config, inputs)
}

#[test]
fn test_paths_without_section_select_apps() {
    let config = ConsoleConfig::default();
    for path in ["/", "/apps", "/apps/", "/apps/a1", "/settings", "/settings/profile"] {
        let model = build(&config, &path_inputs(path));
        assert_eq!(model.selected_key, "apps", "{path}");
        assert_eq!(model.primary_keys(), vec!["apps"], "{path}");
        assert_eq!(model.primary[0].route_path(), Some("/apps"));
    }
}

#[test]
fn test_paths_with_section_select_it() {
    let config = ConsoleConfig::default();
    for section in ["playground", "testsets", "evaluations", "endpoints", "unknown-page"] {
        let path = format!("/apps/a1/{section}");
        let model = build(&config, &path_inputs(&path));
        assert_eq!(model.selected_key, section);
        assert_eq!(
            model.primary_keys(),
            vec!["playground", "testsets", "evaluations", "endpoints", "apps"]
        );
    }
}

#[test]
fn test_no_session_no_demo_has_only_help() {
    let config = ConsoleConfig::default();
    let model = build(&config, &path_inputs("/apps"));
    assert_eq!(model.secondary_keys(), vec!["help"]);
    assert!(model.secondary[0].is_external());
}

#[test]
fn test_full_demo_secondary_list() {
    let session = TestSession { exists: true, ..TestSession::default() };
    let (config, inputs) = full_demo(&session);
    let model = build(&config, &inputs);

    assert_eq!(
        model.secondary_keys(),
        vec!["settings", "help", "expert", "workspaces", "logout"]
    );
    let workspaces = model.find("workspaces").unwrap();
    let children: Vec<_> = workspaces.children().iter().map(|c| c.label_text.as_str()).collect();
    assert_eq!(children, vec!["Acme"]);
    assert!(model.validate().is_ok());
}

#[test]
fn test_switching_org_calls_profile_once_without_navigation() {
    let session = TestSession { exists: true, ..TestSession::default() };
    let (config, inputs) = full_demo(&session);
    let model = build(&config, &inputs);
    let profile = TestProfile::default();
    let mut flow = LogoutFlow::new();

    let child = &model.find("workspaces").unwrap().children()[0];
    assert_eq!(
        child.target,
        MenuTarget::Action(MenuAction::SwitchOrganization { org_id: "o1".into() })
    );

    let activation = activate(child, &profile, &mut flow).unwrap();
    assert_eq!(activation, Activation::OrganizationSwitched("o1".into()));
    assert!(!matches!(activation, Activation::Navigate(_)));
    assert_eq!(*profile.switches.borrow(), vec!["o1".to_string()]);
    assert_eq!(session.logouts.get(), 0);
}

#[test]
fn test_confirmed_logout_calls_session_once() {
    let session = TestSession { exists: true, ..TestSession::default() };
    let (config, inputs) = full_demo(&session);
    let model = build(&config, &inputs);
    let profile = TestProfile::default();
    let mut flow = LogoutFlow::new();

    let logout = model.find("logout").unwrap();
    assert_eq!(activate(logout, &profile, &mut flow), Ok(Activation::ConfirmLogout));
    assert_eq!(session.logouts.get(), 0);

    flow.confirm(&session).unwrap();
    assert_eq!(session.logouts.get(), 1);
}

#[test]
fn test_dismissed_logout_never_calls_session() {
    let session = TestSession { exists: true, ..TestSession::default() };
    let (config, inputs) = full_demo(&session);
    let model = build(&config, &inputs);
    let profile = TestProfile::default();
    let mut flow = LogoutFlow::new();

    activate(model.find("logout").unwrap(), &profile, &mut flow).unwrap();
    flow.cancel().unwrap();

    assert_eq!(session.logouts.get(), 0);
    assert!(!flow.is_prompt_open());
}

#[test]
fn test_collapsed_keeps_targets() {
    let config = ConsoleConfig::default();
    let model = build(
        &config,
        &NavInputs {
            context: NavigationContext::from_path("/apps/a1/evaluations").with_collapsed(true),
            ..NavInputs::default()
        },
    );
    assert!(model.collapsed);
    let evaluations = model.find("evaluations").unwrap();
    assert_eq!(evaluations.route_path(), Some("/apps/a1/evaluations"));
    assert_eq!(evaluations.display_label(false), "Evaluate");
    assert_eq!(evaluations.tooltip(true), None);
}

#[test]
fn test_duplicate_organizations_fail_validation() {
    let session = TestSession { exists: true, ..TestSession::default() };
    let (config, mut inputs) = full_demo(&session);
    inputs.organizations.push(OrganizationSummary::new("o1", "Acme again"));

    let model = build(&config, &inputs);
    assert!(matches!(model.validate(), Err(NavError::DuplicateKey { key, .. }) if key == "org:o1"));
}
