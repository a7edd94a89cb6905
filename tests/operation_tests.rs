use script_generator::{
    error::GenerationError,
    operation::{
        element::{Element, ElementKind, classify_element},
        normalize::{normalize_operation, validate_runs},
        operation_model::{ElementInfo, OperationType, RecordedRun},
    },
    sequence::sequence_builder::{build_sequence_path, build_sequence_paths},
};

use crate::common::{
    checkbox, element_info, link, radio, recorded, run, submit_button, text_field,
};

mod common;

// =========================================================================
// Locator resolution
// =========================================================================

#[test]
fn id_wins_over_name() {
    let info = element_info("input", &[("id", "q"), ("name", "query")]);
    let element = Element::resolve(Some(&info), None);

    assert_eq!(element.identifier, "q");
    assert_eq!(element.locator, "#q");
}

#[test]
fn id_that_is_not_a_plain_css_ident_uses_attribute_selector() {
    let info = element_info("input", &[("id", "form:user")]);
    let element = Element::resolve(Some(&info), None);

    assert_eq!(element.identifier, "form:user");
    assert_eq!(element.locator, "[id=\"form:user\"]");
}

#[test]
fn name_is_used_when_id_missing_or_empty() {
    let info = element_info("input", &[("id", ""), ("name", "query")]);
    let element = Element::resolve(Some(&info), None);

    assert_eq!(element.identifier, "query");
    assert_eq!(element.locator, "[name=\"query\"]");
}

#[test]
fn anchor_text_uses_partial_link_text() {
    let element = Element::resolve(Some(&link("Sign in")), None);

    assert_eq!(element.identifier, "Sign in");
    assert_eq!(element.locator, "*=Sign in");
}

#[test]
fn other_text_is_prefixed_with_tag_and_whitespace_collapsed() {
    let info = ElementInfo {
        text: Some("  Save \n now ".into()),
        ..element_info("button", &[])
    };
    let element = Element::resolve(Some(&info), None);

    assert_eq!(element.identifier, "Save now");
    assert_eq!(element.locator, "button*=Save now");
    assert_eq!(element.kind, ElementKind::Button);
}

#[test]
fn xpath_only_element_gets_stable_fingerprint() {
    let info = ElementInfo {
        tagname: "span".into(),
        text: None,
        xpath: "/html/body/div[2]/span".into(),
        attributes: Default::default(),
    };
    let first = Element::resolve(Some(&info), None);
    let second = Element::resolve(Some(&info.clone()), None);

    assert_eq!(first.identifier, "span_4de9ef04");
    assert_eq!(first.locator, "/html/body/div[2]/span");
    assert_eq!(first, second);
}

#[test]
fn missing_element_info_resolves_to_empty_target() {
    let element = Element::resolve(None, Some("shot.png"));

    assert!(!element.is_resolved());
    assert_eq!(element, Element::empty());
}

#[test]
fn radio_buttons_of_one_group_share_an_identifier() {
    let dark = Element::resolve(Some(&radio("theme", "dark")), None);
    let light = Element::resolve(Some(&radio("theme", "light")), None);

    assert_eq!(dark.kind, ElementKind::RadioButton);
    assert_eq!(dark.identifier, "theme");
    assert_eq!(dark.identifier, light.identifier);
    assert_eq!(dark.locator, "[name=\"theme\"]");
    assert_eq!(dark.value.as_deref(), Some("dark"));
}

#[test]
fn classification_follows_tag_and_type() {
    assert_eq!(classify_element(&checkbox("notify")), ElementKind::CheckBox);
    assert_eq!(classify_element(&element_info("SELECT", &[])), ElementKind::SelectBox);
    assert_eq!(classify_element(&submit_button("go")), ElementKind::Button);
    assert_eq!(
        classify_element(&element_info("input", &[("type", "submit")])),
        ElementKind::Button
    );
    assert_eq!(classify_element(&text_field("user")), ElementKind::Other);
}

// =========================================================================
// Normalization
// =========================================================================

#[test]
fn unknown_operation_type_becomes_other() {
    let op = normalize_operation(&recorded("Login", "hover", Some(text_field("user")), ""));
    assert_eq!(op.operation_type, OperationType::Other);
}

#[test]
fn switch_window_input_is_destination_url() {
    let mut raw = recorded("Login", "switch_window", None, "ignored");
    raw.url = "https://example.com/popup".into();

    let op = normalize_operation(&raw);

    assert_eq!(op.operation_type, OperationType::SwitchWindow);
    assert_eq!(op.input, "https://example.com/popup");
}

#[test]
fn radio_click_without_input_records_its_value() {
    let op = normalize_operation(&recorded("Settings", "click", Some(radio("theme", "dark")), ""));
    assert_eq!(op.input, "dark");
}

#[test]
fn operation_types_round_trip_through_their_names() {
    for name in [
        "click",
        "change",
        "switch_window",
        "accept_alert",
        "dismiss_alert",
        "browser_back",
        "browser_forward",
        "skipped_operations",
    ] {
        assert_eq!(OperationType::parse(name).as_str(), name);
    }
}

#[test]
fn recorded_run_deserializes_from_capture_json() {
    let json = r#"{
        "name": "login",
        "operations": [
            {
                "input": "alice",
                "type": "change",
                "elementInfo": {
                    "tagname": "input",
                    "xpath": "/html/body/form/input[1]",
                    "attributes": { "id": "user", "type": "text" }
                },
                "url": "https://example.com/login",
                "screenDef": "Login",
                "imageFilePath": "login.png"
            },
            { "type": "accept_alert", "screenDef": "Login" }
        ]
    }"#;

    let run: RecordedRun = serde_json::from_str(json).unwrap();

    assert_eq!(run.operations.len(), 2);
    assert_eq!(run.operations[0].screen_def, "Login");
    assert_eq!(
        run.operations[0].element_info.as_ref().unwrap().attribute("id"),
        Some("user")
    );
    assert!(run.operations[1].element_info.is_none());
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn validation_rejects_operation_without_screen() {
    let runs = vec![run(
        "broken",
        vec![
            recorded("Login", "click", None, ""),
            recorded("  ", "click", None, ""),
        ],
    )];

    let err = validate_runs(&runs).unwrap_err();
    match err {
        GenerationError::InvalidOperation { run, index, .. } => {
            assert_eq!(run, "broken");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validation_names_unnamed_runs_by_position() {
    let runs = vec![
        run("", vec![recorded("Login", "click", None, "")]),
        run("", vec![recorded("Login", "click", Some(element_info("", &[])), "")]),
    ];

    let err = validate_runs(&runs).unwrap_err();
    assert!(err.to_string().contains("'#2'"), "{err}");
}

#[test]
fn validation_accepts_well_formed_runs() {
    assert!(validate_runs(&common::login_runs()).is_ok());
    assert!(validate_runs(&[]).is_ok());
}

// =========================================================================
// Sequence building
// =========================================================================

#[test]
fn consecutive_operations_on_one_screen_form_a_sequence() {
    let path = build_sequence_path(&run(
        "r",
        vec![
            recorded("A", "click", Some(link("x")), ""),
            recorded("A", "click", Some(link("y")), ""),
            recorded("B", "click", Some(link("z")), ""),
            recorded("A", "click", Some(link("x")), ""),
        ],
    ));

    assert_eq!(path.screen_names(), vec!["A", "B", "A"]);
    assert_eq!(path.sequences[0].operations.len(), 2);

    let destinations: Vec<&str> = path.sequences.iter().map(|s| s.destination.as_str()).collect();
    assert_eq!(destinations, vec!["B", "A", "A"]);
    assert!(path.sequences[2].is_self_transition());
    assert!(!path.sequences[0].is_self_transition());
}

#[test]
fn sequence_keeps_url_and_image_of_first_operation() {
    let mut first = recorded("A", "click", Some(link("x")), "");
    first.image_file_path = Some("a.png".into());
    let path = build_sequence_path(&run("r", vec![first, recorded("A", "click", None, "")]));

    assert_eq!(path.sequences[0].url, "https://example.com/a");
    assert_eq!(path.sequences[0].image_url.as_deref(), Some("a.png"));
}

#[test]
fn empty_runs_produce_no_sequence_path() {
    let paths = build_sequence_paths(&[run("empty", vec![]), common::login_runs()[1].clone()]);

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].name, "login-logout");
    assert_eq!(paths[0].screen_names(), vec!["Login", "Home"]);
}
