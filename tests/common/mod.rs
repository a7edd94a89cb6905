#![allow(dead_code)]

use std::collections::BTreeMap;

use script_generator::operation::element::{Element, ElementKind};
use script_generator::operation::operation_model::{
    ElementInfo, OperationType, RecordedOperation, RecordedRun,
};
use script_generator::page_object::page_object_model::{PageObjectMethod, PageObjectOperation};

// =========================================================================
// Recorded input builders
// =========================================================================

pub fn element_info(tag: &str, attributes: &[(&str, &str)]) -> ElementInfo {
    ElementInfo {
        tagname: tag.into(),
        text: None,
        xpath: format!("/html/body/{}", tag),
        attributes: attributes
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub fn text_field(id: &str) -> ElementInfo {
    element_info("input", &[("type", "text"), ("id", id)])
}

pub fn submit_button(id: &str) -> ElementInfo {
    element_info("button", &[("type", "submit"), ("id", id)])
}

pub fn link(text: &str) -> ElementInfo {
    ElementInfo {
        text: Some(text.into()),
        ..element_info("a", &[])
    }
}

pub fn radio(name: &str, value: &str) -> ElementInfo {
    element_info("input", &[("type", "radio"), ("name", name), ("value", value)])
}

pub fn checkbox(id: &str) -> ElementInfo {
    element_info("input", &[("type", "checkbox"), ("id", id)])
}

pub fn recorded(
    screen: &str,
    operation_type: &str,
    info: Option<ElementInfo>,
    input: &str,
) -> RecordedOperation {
    RecordedOperation {
        input: input.into(),
        operation_type: operation_type.into(),
        element_info: info,
        url: format!("https://example.com/{}", screen.to_lowercase()),
        screen_def: screen.into(),
        image_file_path: None,
    }
}

pub fn run(name: &str, operations: Vec<RecordedOperation>) -> RecordedRun {
    RecordedRun {
        name: name.into(),
        operations,
    }
}

/// Two logins with different credentials, one continuing to the settings page.
pub fn login_runs() -> Vec<RecordedRun> {
    vec![
        run(
            "login-settings",
            vec![
                recorded("Login", "change", Some(text_field("user")), "alice"),
                recorded("Login", "change", Some(text_field("password")), "secret"),
                recorded("Login", "click", Some(submit_button("submit")), ""),
                recorded("Home", "click", Some(link("Settings")), ""),
                recorded("Settings", "click", Some(radio("theme", "dark")), ""),
                recorded("Settings", "click", Some(checkbox("notify")), "on"),
            ],
        ),
        run(
            "login-logout",
            vec![
                recorded("Login", "change", Some(text_field("user")), "bob"),
                recorded("Login", "change", Some(text_field("password")), "hunter2"),
                recorded("Login", "click", Some(submit_button("submit")), ""),
                recorded("Home", "click", Some(link("Logout")), ""),
            ],
        ),
    ]
}

// =========================================================================
// Model builders
// =========================================================================

pub fn target(identifier: &str) -> Element {
    Element {
        identifier: identifier.into(),
        kind: ElementKind::Other,
        locator: format!("#{}", identifier),
        name: None,
        value: None,
        image_url: None,
    }
}

pub fn operation(operation_type: OperationType, identifier: &str, input: &str) -> PageObjectOperation {
    let target = if identifier.is_empty() {
        Element::empty()
    } else {
        target(identifier)
    };
    PageObjectOperation {
        target,
        operation_type,
        input: input.into(),
    }
}

pub fn change(identifier: &str, input: &str) -> PageObjectOperation {
    operation(OperationType::Change, identifier, input)
}

pub fn click(identifier: &str) -> PageObjectOperation {
    operation(OperationType::Click, identifier, "")
}

pub fn method(page: &str, destination: &str, operations: Vec<PageObjectOperation>) -> PageObjectMethod {
    PageObjectMethod {
        id: String::new(),
        page_object_id: page.into(),
        operations,
        return_page_object_id: destination.into(),
    }
}

pub fn histories(screens: &[&[&str]]) -> Vec<Vec<String>> {
    screens
        .iter()
        .map(|h| h.iter().map(|s| s.to_string()).collect())
        .collect()
}
