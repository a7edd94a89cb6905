use serde::{Deserialize, Serialize};

use super::input_collector::InputValue;

/// Argument values for one method call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TestDataVariation {
    pub values: Vec<InputValue>,
}

impl TestDataVariation {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }
}

/// Arguments of the call at `call_index` within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallArguments {
    pub call_index: usize,
    pub variation: TestDataVariation,
}

/// One complete set of arguments for running a test case once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestDataSet {
    pub name: String,
    pub arguments: Vec<CallArguments>,
}

impl TestDataSet {
    pub fn arguments_for(&self, call_index: usize) -> Option<&TestDataVariation> {
        self.arguments
            .iter()
            .find(|a| a.call_index == call_index)
            .map(|a| &a.variation)
    }
}
