use serde::{Deserialize, Serialize};

use crate::operation::element::ElementKind;
use crate::operation::operation_model::OperationType;
use crate::page_object::page_object_model::{PageObjectMethod, PageObjectOperation};

/// A formal parameter of a generated method, named after the element it feeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormalArgument {
    pub name: String,
    pub kind: ElementKind,
}

/// A value entered into one element while recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputValue {
    pub name: String,
    pub value: String,
}

/// The recorded value of an operation, if it carries one.
///
/// `change` operations and radio-button clicks keep their literal input with
/// newlines escaped; checkbox clicks become `"true"` when the recorded input
/// is `"on"` and `"false"` otherwise.
pub fn input_value_of(op: &PageObjectOperation) -> Option<String> {
    if !op.target.is_resolved() {
        return None;
    }

    match (op.operation_type, op.target.kind) {
        (OperationType::Change, _) | (OperationType::Click, ElementKind::RadioButton) => {
            Some(escape_newlines(&op.input))
        }
        (OperationType::Click, ElementKind::CheckBox) => {
            Some(if op.input == "on" { "true" } else { "false" }.to_string())
        }
        _ => None,
    }
}

fn escape_newlines(input: &str) -> String {
    input.replace("\r\n", "\\n").replace('\n', "\\n")
}

/// Extracts the named input values used by a method's operations.
pub struct InputGroupCollector;

impl InputGroupCollector {
    /// One entry per element, in first-use order. A later value for the same
    /// element replaces the earlier one.
    pub fn collect(&self, method: &PageObjectMethod) -> Vec<InputValue> {
        let mut values: Vec<InputValue> = Vec::new();

        for op in &method.operations {
            let Some(value) = input_value_of(op) else {
                continue;
            };
            match values.iter_mut().find(|v| v.name == op.target.identifier) {
                Some(existing) => existing.value = value,
                None => values.push(InputValue {
                    name: op.target.identifier.clone(),
                    value,
                }),
            }
        }

        values
    }
}

/// Determines which elements become parameters of a generated method.
pub struct FormalArgumentCollector;

impl FormalArgumentCollector {
    pub fn collect(&self, method: &PageObjectMethod) -> Vec<FormalArgument> {
        let mut arguments: Vec<FormalArgument> = Vec::new();

        for op in &method.operations {
            if input_value_of(op).is_none() {
                continue;
            }
            if arguments.iter().any(|a| a.name == op.target.identifier) {
                continue;
            }
            arguments.push(FormalArgument {
                name: op.target.identifier.clone(),
                kind: op.target.kind,
            });
        }

        arguments
    }
}
