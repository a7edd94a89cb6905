use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::graph::path_builder::{
    GraphBasedScreenTransitionPathBuilder, ScreenTransitionPathBuilder,
    SimpleScreenTransitionPathBuilder,
};
use crate::page_object::page_object_model::PageObjectModel;
use crate::selector::method_selector::{
    MethodSelector, RepresentativeMethodSelector, UniqueMethodSelector,
};
use crate::test_data::test_data_generator::TestDataGenerator;

use super::scenario_model::{MethodCall, Scenario, TestCase, TestSuite};

/// How screen paths for test cases are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PathStrategy {
    /// One test case per distinct recording
    Simple,
    /// Compact set of paths covering every observed transition
    Graph,
}

/// Which method is used for a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    Representative,
    Unique,
}

/// Turns screen histories into test suites over a page object model.
pub struct TestSuiteGenerator {
    path_builder: Box<dyn ScreenTransitionPathBuilder>,
    selector: Box<dyn MethodSelector>,
    test_data: TestDataGenerator,
}

impl TestSuiteGenerator {
    pub fn new(
        path_builder: Box<dyn ScreenTransitionPathBuilder>,
        selector: Box<dyn MethodSelector>,
        test_data: TestDataGenerator,
    ) -> Self {
        Self {
            path_builder,
            selector,
            test_data,
        }
    }

    pub fn with_policies(
        strategy: PathStrategy,
        selection: SelectionPolicy,
        max_generation: usize,
    ) -> Self {
        let path_builder: Box<dyn ScreenTransitionPathBuilder> = match strategy {
            PathStrategy::Simple => Box::new(SimpleScreenTransitionPathBuilder),
            PathStrategy::Graph => Box::new(GraphBasedScreenTransitionPathBuilder),
        };
        let selector: Box<dyn MethodSelector> = match selection {
            SelectionPolicy::Representative => Box::new(RepresentativeMethodSelector),
            SelectionPolicy::Unique => Box::new(UniqueMethodSelector),
        };
        Self::new(path_builder, selector, TestDataGenerator::new(max_generation))
    }

    /// One suite per top page, in the order top pages are first reached.
    pub fn generate(&self, model: &PageObjectModel, histories: &[Vec<String>]) -> Vec<TestSuite> {
        let paths = self.path_builder.build(histories);
        let mut suites: Vec<TestSuite> = Vec::new();
        let mut by_top: HashMap<String, usize> = HashMap::new();

        for path in &paths {
            let Some(top) = path.first() else {
                continue;
            };

            let slot = *by_top.entry(top.clone()).or_insert_with(|| {
                suites.push(TestSuite {
                    name: format!("{}_test", top),
                    top_page_object_id: top.clone(),
                    top_page_url: model.get(top).map(|po| po.url.clone()).unwrap_or_default(),
                    test_cases: Vec::new(),
                });
                suites.len() - 1
            });

            let number = suites[slot].test_cases.len() + 1;
            let test_case = self.build_test_case(model, path, number);
            suites[slot].test_cases.push(test_case);
        }

        info!(
            paths = paths.len(),
            suites = suites.len(),
            "generated test suites"
        );
        suites
    }

    pub fn build_test_case(&self, model: &PageObjectModel, path: &[String], number: usize) -> TestCase {
        let methods = self.selector.select_methods(model, path);
        if methods.is_empty() {
            debug!(path = %path.join(" -> "), "no method selectable, scenario is empty");
        }

        TestCase {
            id: format!("case_{}", number),
            name: path.join(" -> "),
            scenario: Scenario {
                method_calls: methods.iter().map(|m| MethodCall::from(*m)).collect(),
            },
            test_data: self.test_data.generate(model, &methods),
        }
    }
}
