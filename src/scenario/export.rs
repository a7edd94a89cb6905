use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};

use super::scenario_model::TestSuite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SuiteFormat {
    Json,
    Yaml,
}

impl SuiteFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SuiteFormat::Json => "json",
            SuiteFormat::Yaml => "yaml",
        }
    }
}

/// Serialize test suites for the export layer.
pub fn export_test_suites(suites: &[TestSuite], format: SuiteFormat) -> Result<String> {
    match format {
        SuiteFormat::Json => {
            serde_json::to_string_pretty(suites).map_err(|source| GenerationError::Json {
                context: "test suites".into(),
                source,
            })
        }
        SuiteFormat::Yaml => serde_yaml::to_string(suites).map_err(|source| GenerationError::Yaml {
            context: "test suites".into(),
            source,
        }),
    }
}

/// Read back suites written by `export_test_suites`.
pub fn import_test_suites(content: &str, format: SuiteFormat) -> Result<Vec<TestSuite>> {
    match format {
        SuiteFormat::Json => serde_json::from_str(content).map_err(|source| GenerationError::Json {
            context: "test suites".into(),
            source,
        }),
        SuiteFormat::Yaml => serde_yaml::from_str(content).map_err(|source| GenerationError::Yaml {
            context: "test suites".into(),
            source,
        }),
    }
}
