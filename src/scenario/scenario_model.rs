use serde::{Deserialize, Serialize};

use crate::page_object::page_object_model::PageObjectMethod;
use crate::test_data::test_data_model::TestDataSet;

/// A call to one page object method inside a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCall {
    pub page_object_id: String,
    pub method_id: String,
    pub return_page_object_id: String,
}

impl From<&PageObjectMethod> for MethodCall {
    fn from(method: &PageObjectMethod) -> Self {
        Self {
            page_object_id: method.page_object_id.clone(),
            method_id: method.id.clone(),
            return_page_object_id: method.return_page_object_id.clone(),
        }
    }
}

/// Ordered method calls forming one executable test.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub method_calls: Vec<MethodCall>,
}

impl Scenario {
    pub fn is_empty(&self) -> bool {
        self.method_calls.is_empty()
    }

    /// Screens visited by the scenario, starting page included.
    pub fn screen_path(&self) -> Vec<&str> {
        let mut screens: Vec<&str> = Vec::new();
        if let Some(first) = self.method_calls.first() {
            screens.push(&first.page_object_id);
        }
        screens.extend(
            self.method_calls
                .iter()
                .map(|c| c.return_page_object_id.as_str()),
        );
        screens
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: String,
    pub name: String,
    pub scenario: Scenario,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub test_data: Vec<TestDataSet>,
}

/// Test cases sharing a top page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub name: String,
    pub top_page_object_id: String,
    pub top_page_url: String,
    pub test_cases: Vec<TestCase>,
}
