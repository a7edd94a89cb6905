use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Raw recorded input (produced by the capture client)
// ============================================================================

/// DOM details of the element an operation was performed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    pub tagname: String,

    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub xpath: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ElementInfo {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// A single user action captured in the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedOperation {
    #[serde(default)]
    pub input: String,

    /// Raw operation type as captured (e.g. "click", "change")
    #[serde(rename = "type")]
    pub operation_type: String,

    #[serde(default)]
    pub element_info: Option<ElementInfo>,

    /// URL of the page after the operation
    #[serde(default)]
    pub url: String,

    /// Screen label the operation was recorded on
    #[serde(default)]
    pub screen_def: String,

    #[serde(default)]
    pub image_file_path: Option<String>,
}

/// One recording: the ordered operations of a single capture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedRun {
    #[serde(default)]
    pub name: String,

    pub operations: Vec<RecordedOperation>,
}

// ============================================================================
// Operation type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    Click,
    Change,
    SwitchWindow,
    AcceptAlert,
    DismissAlert,
    BrowserBack,
    BrowserForward,
    SkippedOperations,
    Other,
}

impl OperationType {
    /// Map a raw captured type string. Unrecognized types become `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "click" => OperationType::Click,
            "change" => OperationType::Change,
            "switch_window" => OperationType::SwitchWindow,
            "accept_alert" => OperationType::AcceptAlert,
            "dismiss_alert" => OperationType::DismissAlert,
            "browser_back" => OperationType::BrowserBack,
            "browser_forward" => OperationType::BrowserForward,
            "skipped_operations" => OperationType::SkippedOperations,
            _ => OperationType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Click => "click",
            OperationType::Change => "change",
            OperationType::SwitchWindow => "switch_window",
            OperationType::AcceptAlert => "accept_alert",
            OperationType::DismissAlert => "dismiss_alert",
            OperationType::BrowserBack => "browser_back",
            OperationType::BrowserForward => "browser_forward",
            OperationType::SkippedOperations => "skipped_operations",
            OperationType::Other => "other",
        }
    }
}
