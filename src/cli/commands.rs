use std::path::Path;

use tracing::{debug, info};

use crate::graph::path_builder::{
    GraphBasedScreenTransitionPathBuilder, ScreenTransitionPathBuilder,
    SimpleScreenTransitionPathBuilder,
};
use crate::operation::normalize::validate_runs;
use crate::operation::operation_model::RecordedRun;
use crate::scenario::export::{SuiteFormat, export_test_suites};
use crate::scenario::suite_generator::PathStrategy;
use crate::sequence::sequence_builder::build_sequence_paths;
use crate::trace::logger::TraceLogger;
use crate::{GenerationOptions, GeneratedSource, ScriptGenerator};

// ============================================================================
// generate subcommand
// ============================================================================

/// Generate everything for the runs at `input` and write it under `output_dir`:
///
/// - `pages/<PageObject>.ts`
/// - `tests/<Suite>_test.ts`
/// - `test_suites.<json|yaml>`
/// - `docs/index.md`, `docs/pages/<PageObject>.md`
pub fn cmd_generate(
    input: &str,
    output_dir: &str,
    options: GenerationOptions,
    format: SuiteFormat,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let runs = load_runs(input)?;
    info!("loaded {} recorded runs from {}", runs.len(), input);

    let artifacts = ScriptGenerator::new(options).generate_traced(&runs, tracer)?;
    let root = Path::new(output_dir);

    write_sources(&root.join("pages"), &artifacts.page_object_sources, "ts")?;
    write_sources(&root.join("tests"), &artifacts.test_suite_sources, "ts")?;

    let suites_path = root.join(format!("test_suites.{}", format.extension()));
    std::fs::write(&suites_path, export_test_suites(&artifacts.test_suites, format)?)?;
    debug!("  Wrote: {}", suites_path.display());

    if let Some((index, pages)) = artifacts.documents.split_first() {
        write_sources(&root.join("docs"), std::slice::from_ref(index), "md")?;
        write_sources(&root.join("docs").join("pages"), pages, "md")?;
    }

    println!(
        "Generated {} page objects and {} test suites ({} test cases) in {}/",
        artifacts.page_object_sources.len(),
        artifacts.test_suites.len(),
        artifacts
            .test_suites
            .iter()
            .map(|s| s.test_cases.len())
            .sum::<usize>(),
        output_dir
    );
    Ok(())
}

fn write_sources(
    dir: &Path,
    sources: &[GeneratedSource],
    extension: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    for source in sources {
        let path = dir.join(format!("{}.{}", source.name, extension));
        std::fs::write(&path, &source.content)?;
        debug!("  Wrote: {}", path.display());
    }
    Ok(())
}

// ============================================================================
// paths subcommand
// ============================================================================

/// Print the screen paths test cases would cover, one per line.
pub fn cmd_paths(input: &str, strategy: PathStrategy) -> Result<(), Box<dyn std::error::Error>> {
    for path in screen_paths(&load_runs(input)?, strategy)? {
        println!("{}", path.join(" -> "));
    }
    Ok(())
}

pub fn screen_paths(
    runs: &[RecordedRun],
    strategy: PathStrategy,
) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    validate_runs(runs)?;
    let histories: Vec<Vec<String>> = build_sequence_paths(runs)
        .iter()
        .map(|p| p.screen_names())
        .collect();

    let builder: Box<dyn ScreenTransitionPathBuilder> = match strategy {
        PathStrategy::Simple => Box::new(SimpleScreenTransitionPathBuilder),
        PathStrategy::Graph => Box::new(GraphBasedScreenTransitionPathBuilder),
    };
    Ok(builder.build(&histories))
}

// ============================================================================
// Helpers
// ============================================================================

/// Load recorded runs from a JSON file or a directory of JSON files.
///
/// A file holds either a list of runs or a single run.
pub fn load_runs(path: &str) -> Result<Vec<RecordedRun>, Box<dyn std::error::Error>> {
    let metadata = std::fs::metadata(path)?;
    if metadata.is_dir() {
        let mut files: Vec<_> = std::fs::read_dir(path)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|e| e == "json"))
            .collect();
        // Sort by file name for deterministic order
        files.sort();

        let mut runs = Vec::new();
        for file in files {
            runs.extend(parse_runs(&std::fs::read_to_string(&file)?)?);
        }
        Ok(runs)
    } else {
        parse_runs(&std::fs::read_to_string(path)?)
    }
}

pub fn parse_runs(content: &str) -> Result<Vec<RecordedRun>, Box<dyn std::error::Error>> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
