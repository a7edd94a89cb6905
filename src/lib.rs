use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    codegen::{
        alias::{AliasTable, NameGenerator},
        document::{render_index, render_page_document},
        page_object_code::render_page_object,
        test_suite_code::render_test_suite,
    },
    error::Result,
    graph::transition_graph::ScreenTransitionGraph,
    operation::{normalize::validate_runs, operation_model::RecordedRun},
    page_object::{model_builder::PageObjectModelBuilder, page_object_model::PageObjectModel},
    scenario::{
        scenario_model::TestSuite,
        suite_generator::{PathStrategy, SelectionPolicy, TestSuiteGenerator},
    },
    sequence::sequence_builder::build_sequence_paths,
    trace::{logger::TraceLogger, trace::TraceEvent},
};

pub mod cli;
pub mod codegen;
pub mod error;
pub mod graph;
pub mod operation;
pub mod page_object;
pub mod scenario;
pub mod selector;
pub mod sequence;
pub mod test_data;
pub mod trace;

// ============================================================================
// Generation options
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub path_strategy: PathStrategy,
    pub selection: SelectionPolicy,

    /// Upper bound on generated data variations per method and per test case
    pub max_generation: usize,

    /// Generated names longer than this are cut (0 = no limit)
    pub max_name_length: usize,

    pub generate_docs: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            path_strategy: PathStrategy::Graph,
            selection: SelectionPolicy::Representative,
            max_generation: 1000,
            max_name_length: 40,
            generate_docs: true,
        }
    }
}

// ============================================================================
// Generated output
// ============================================================================

/// A generated text artifact. `name` is the code alias it was rendered for;
/// where it is written is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifacts {
    pub model: PageObjectModel,
    pub test_suites: Vec<TestSuite>,
    pub page_object_sources: Vec<GeneratedSource>,
    pub test_suite_sources: Vec<GeneratedSource>,

    /// `index` first, then one document per page object
    pub documents: Vec<GeneratedSource>,
}

// ============================================================================
// Pipeline
// ============================================================================

/// Recorded runs in, page objects, test suites and docs out.
///
/// Every stage is a pure transformation of the previous stage's output; the
/// only failure is input that does not have the documented shape.
pub struct ScriptGenerator {
    options: GenerationOptions,
}

impl ScriptGenerator {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn generate(&self, runs: &[RecordedRun]) -> Result<GeneratedArtifacts> {
        self.generate_traced(runs, &TraceLogger::disabled())
    }

    pub fn generate_traced(
        &self,
        runs: &[RecordedRun],
        tracer: &TraceLogger,
    ) -> Result<GeneratedArtifacts> {
        validate_runs(runs)?;
        tracer.log(&TraceEvent::now("validate").with_count(runs.len()));

        let paths = build_sequence_paths(runs);
        tracer.log(
            &TraceEvent::now("sequences")
                .with_count(paths.iter().map(|p| p.sequences.len()).sum()),
        );

        let model = PageObjectModelBuilder::default().build(&paths);
        tracer.log(
            &TraceEvent::now("page_objects")
                .with_count(model.len())
                .with_detail(format!("{} recorded methods", model.recorded_methods().len())),
        );

        let histories: Vec<Vec<String>> = paths.iter().map(|p| p.screen_names()).collect();
        let suites = TestSuiteGenerator::with_policies(
            self.options.path_strategy,
            self.options.selection,
            self.options.max_generation,
        )
        .generate(&model, &histories);
        tracer.log(
            &TraceEvent::now("test_suites")
                .with_count(suites.iter().map(|s| s.test_cases.len()).sum())
                .with_detail(format!("{:?}/{:?}", self.options.path_strategy, self.options.selection)),
        );

        let aliases = AliasTable::build(&model, &NameGenerator::new(self.options.max_name_length));

        let page_object_sources: Vec<GeneratedSource> = model
            .page_objects()
            .iter()
            .map(|po| GeneratedSource {
                name: aliases.page_object(&po.id).to_string(),
                content: render_page_object(po, &aliases),
            })
            .collect();

        let test_suite_sources: Vec<GeneratedSource> = suites
            .iter()
            .map(|suite| GeneratedSource {
                name: format!("{}_test", aliases.page_object(&suite.top_page_object_id)),
                content: render_test_suite(suite, &model, &aliases),
            })
            .collect();

        let mut documents = Vec::new();
        if self.options.generate_docs {
            let graph = ScreenTransitionGraph::from_histories(&histories);
            documents.push(GeneratedSource {
                name: "index".to_string(),
                content: render_index(&model, &graph, &suites, &aliases),
            });
            documents.extend(model.page_objects().iter().map(|po| GeneratedSource {
                name: aliases.page_object(&po.id).to_string(),
                content: render_page_document(po, &aliases),
            }));
        }
        tracer.log(
            &TraceEvent::now("render")
                .with_count(page_object_sources.len() + test_suite_sources.len() + documents.len()),
        );

        info!(
            page_objects = page_object_sources.len(),
            test_suites = test_suite_sources.len(),
            documents = documents.len(),
            "generation complete"
        );

        Ok(GeneratedArtifacts {
            model,
            test_suites: suites,
            page_object_sources,
            test_suite_sources,
            documents,
        })
    }
}
