use script_generator::{
    operation::operation_model::OperationType,
    page_object::{
        method_factory::MethodFactory,
        method_filter::{IncludedMethodFilter, MethodFilter},
        model_builder::PageObjectModelBuilder,
        operation_filter::{DuplicateElementOperationFilter, ExecutableOperationFilter, OperationFilter},
        page_object_model::{PageObject, PageObjectModel, PageObjectOperation},
    },
    sequence::sequence_builder::build_sequence_paths,
    sequence::sequence_model::{Sequence, SequencePath},
};

use crate::common::{
    change, click, link, login_runs, method, operation, recorded, run, submit_button, text_field,
};

mod common;

fn sequence(screen: &str, destination: &str, operations: Vec<PageObjectOperation>) -> Sequence {
    Sequence {
        screen: screen.into(),
        url: format!("https://example.com/{}", screen),
        image_url: None,
        operations,
        destination: destination.into(),
    }
}

// =========================================================================
// includes
// =========================================================================

#[test]
fn includes_ignores_position() {
    let bigger = method("P", "Q", vec![change("a", "1"), click("b"), change("c", "2")]);
    let smaller = method("P", "Q", vec![change("c", "2"), change("a", "1")]);

    assert!(bigger.includes(&smaller));
    assert!(!smaller.includes(&bigger));
}

#[test]
fn includes_requires_same_destination() {
    let to_q = method("P", "Q", vec![click("b")]);
    let to_r = method("P", "R", vec![click("b")]);

    assert!(!to_q.includes(&to_r));
}

#[test]
fn includes_compares_inputs() {
    let alice = method("P", "Q", vec![change("user", "alice")]);
    let bob = method("P", "Q", vec![change("user", "bob")]);

    assert!(!alice.includes(&bob));
    assert!(alice.accepts_inputs_of(&bob));
}

#[test]
fn identical_methods_include_each_other() {
    let a = method("P", "Q", vec![click("b")]);
    let b = a.clone();

    assert!(a.includes(&a));
    assert!(a.includes(&b) && b.includes(&a));
}

// =========================================================================
// Operation filters
// =========================================================================

#[test]
fn consecutive_changes_on_one_element_collapse_to_the_last() {
    let ops = vec![change("x", "a"), change("x", "b"), click("y"), change("x", "c")];

    let filtered = DuplicateElementOperationFilter.filter(ops);

    assert_eq!(filtered, vec![change("x", "b"), click("y"), change("x", "c")]);
}

#[test]
fn switch_window_and_unresolved_targets_never_collapse() {
    let ops = vec![
        operation(OperationType::SwitchWindow, "", "https://a"),
        operation(OperationType::SwitchWindow, "", "https://b"),
        operation(OperationType::AcceptAlert, "", ""),
        operation(OperationType::AcceptAlert, "", ""),
    ];

    let filtered = DuplicateElementOperationFilter.filter(ops.clone());

    assert_eq!(filtered, ops);
}

#[test]
fn executable_filter_drops_other_operations() {
    let ops = vec![operation(OperationType::Other, "x", ""), click("y")];

    assert_eq!(ExecutableOperationFilter.filter(ops), vec![click("y")]);
}

#[test]
fn factory_applies_filters_before_building_method() {
    let seq = sequence(
        "P",
        "Q",
        vec![
            change("x", "a"),
            operation(OperationType::Other, "x", ""),
            change("x", "b"),
        ],
    );

    let created = MethodFactory::default().create(&seq);

    assert_eq!(created.page_object_id, "P");
    assert_eq!(created.return_page_object_id, "Q");
    assert!(created.id.is_empty());
    // `other` goes first, which lets the two changes collapse
    assert_eq!(created.operations, vec![change("x", "b")]);
}

// =========================================================================
// IncludedMethodFilter
// =========================================================================

#[test]
fn strictly_included_method_is_dropped() {
    let small = method("P", "Q", vec![click("b")]);
    let big = method("P", "Q", vec![change("a", "1"), click("b")]);

    let kept = IncludedMethodFilter.filter(vec![small, big.clone()]);

    assert_eq!(kept, vec![big]);
}

#[test]
fn mutual_inclusion_keeps_first_seen() {
    let first = method("P", "Q", vec![change("a", "1"), click("b")]);
    let second = method("P", "Q", vec![click("b"), change("a", "1")]);

    let kept = IncludedMethodFilter.filter(vec![first.clone(), second]);

    assert_eq!(kept, vec![first]);
}

#[test]
fn unrelated_methods_survive_in_original_order() {
    let to_r = method("P", "R", vec![click("r")]);
    let alice = method("P", "Q", vec![change("user", "alice")]);
    let bob = method("P", "Q", vec![change("user", "bob")]);

    let kept = IncludedMethodFilter.filter(vec![to_r.clone(), alice.clone(), bob.clone()]);

    assert_eq!(kept, vec![to_r, alice, bob]);
}

// =========================================================================
// Model builder
// =========================================================================

#[test]
fn builder_creates_one_page_object_per_screen_in_first_seen_order() {
    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&login_runs()));

    let ids: Vec<&str> = model.page_objects().iter().map(|po| po.id.as_str()).collect();
    assert_eq!(ids, vec!["Login", "Home", "Settings"]);
    assert_eq!(model.get("Login").unwrap().url, "https://example.com/login");
}

#[test]
fn builder_numbers_methods_per_destination() {
    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&login_runs()));

    let login: Vec<&str> = model.get("Login").unwrap().methods.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(login, vec!["go_Home", "go_Home_2"]);

    let home: Vec<(&str, &str)> = model
        .get("Home")
        .unwrap()
        .methods
        .iter()
        .map(|m| (m.id.as_str(), m.return_page_object_id.as_str()))
        .collect();
    assert_eq!(home, vec![("go_Settings", "Settings"), ("go_Home", "Home")]);
}

#[test]
fn last_visit_becomes_self_transition() {
    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&login_runs()));

    let settings = model.get("Settings").unwrap();
    assert_eq!(settings.methods.len(), 1);
    assert!(settings.methods[0].is_self_transition());
}

#[test]
fn repeated_recording_is_deduplicated() {
    let recording = vec![
        recorded("A", "click", Some(link("next")), ""),
        recorded("B", "click", Some(link("back")), ""),
    ];
    let runs = vec![run("one", recording.clone()), run("two", recording)];

    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&runs));

    assert_eq!(model.get("A").unwrap().methods.len(), 1);
    assert_eq!(model.recorded_methods().len(), 4);
}

#[test]
fn screenshots_do_not_split_identical_recordings() {
    let recording = |folder: &str| {
        let mut ops = vec![
            recorded("Login", "change", Some(text_field("user")), "alice"),
            recorded("Login", "click", Some(submit_button("submit")), ""),
            recorded("Home", "click", Some(link("Logout")), ""),
        ];
        for (i, op) in ops.iter_mut().enumerate() {
            op.image_file_path = Some(format!("{}/{}.png", folder, i));
        }
        ops
    };
    let runs = vec![run("one", recording("run1")), run("two", recording("run2"))];

    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&runs));

    let login: Vec<&str> = model.get("Login").unwrap().methods.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(login, vec!["go_Home"]);
    assert_eq!(model.get("Home").unwrap().methods.len(), 1);
}

#[test]
fn unknown_destination_is_treated_as_self_transition() {
    let paths = vec![SequencePath {
        name: "r".into(),
        sequences: vec![sequence("A", "Nowhere", vec![click("x")])],
    }];

    let model = PageObjectModelBuilder::default().build(&paths);

    let m = &model.get("A").unwrap().methods[0];
    assert_eq!(m.return_page_object_id, "A");
    assert_eq!(m.id, "go_A");
}

#[test]
fn every_destination_is_a_known_page_object() {
    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&login_runs()));

    for po in model.page_objects() {
        for m in &po.methods {
            assert!(model.contains(&m.return_page_object_id), "{}", m.id);
        }
    }
}

#[test]
fn no_surviving_method_is_included_by_another() {
    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&login_runs()));

    for po in model.page_objects() {
        for (i, a) in po.methods.iter().enumerate() {
            for (j, b) in po.methods.iter().enumerate() {
                if i != j {
                    assert!(!a.includes(b), "{} includes {}", a.id, b.id);
                }
            }
        }
    }
}

// =========================================================================
// PageObjectModel
// =========================================================================

#[test]
fn model_insert_replaces_in_place() {
    let mut model = PageObjectModel::new();
    model.insert(PageObject::new("A", "https://a", None));
    model.insert(PageObject::new("B", "https://b", None));
    model.insert(PageObject::new("A", "https://a2", None));

    assert_eq!(model.len(), 2);
    assert_eq!(model.page_objects()[0].url, "https://a2");
    assert!(model.get("C").is_none());
}

#[test]
fn page_object_elements_are_distinct_and_resolved() {
    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&login_runs()));

    let elements: Vec<&str> = model
        .get("Login")
        .unwrap()
        .elements()
        .iter()
        .map(|e| e.identifier.as_str())
        .collect();
    assert_eq!(elements, vec!["user", "password", "submit"]);
}

#[test]
fn recorded_variants_share_fields_and_destination() {
    let model = PageObjectModelBuilder::default().build(&build_sequence_paths(&login_runs()));
    let go_home = model.method("Login", "go_Home").unwrap();

    let inputs: Vec<&str> = model
        .recorded_variants(go_home)
        .map(|m| m.operations[0].input.as_str())
        .collect();
    assert_eq!(inputs, vec!["alice", "bob"]);
}
