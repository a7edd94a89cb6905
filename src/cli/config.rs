use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::GenerationOptions;
use crate::scenario::export::SuiteFormat;
use crate::scenario::suite_generator::{PathStrategy, SelectionPolicy};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "script-generator",
    version,
    about = "Generate page objects and test suites from recorded browser operations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: script-generator.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL line per pipeline stage to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate page objects, test suites and docs from recorded runs
    Generate {
        /// Recorded runs: a JSON file or a directory of JSON files
        #[arg(long)]
        input: String,

        /// Output directory for generated files
        #[arg(short, long, default_value = "generated")]
        output_dir: String,

        /// How test case paths are chosen
        #[arg(long, value_enum)]
        strategy: Option<PathStrategy>,

        /// How a method is chosen per transition
        #[arg(long, value_enum)]
        selection: Option<SelectionPolicy>,

        /// Maximum data variations per method and per test case
        #[arg(long)]
        max_generation: Option<usize>,

        /// Maximum length of generated names
        #[arg(long)]
        max_name_length: Option<usize>,

        /// Serialization format of the test suite file
        #[arg(long, value_enum)]
        format: Option<SuiteFormat>,

        /// Skip Markdown documentation
        #[arg(long)]
        no_docs: bool,
    },

    /// Print the screen transition paths test cases would be generated for
    Paths {
        /// Recorded runs: a JSON file or a directory of JSON files
        #[arg(long)]
        input: String,

        #[arg(long, value_enum)]
        strategy: Option<PathStrategy>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `script-generator.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_strategy")]
    pub strategy: PathStrategy,

    #[serde(default = "default_selection")]
    pub selection: SelectionPolicy,

    #[serde(default = "default_max_generation")]
    pub max_generation: usize,

    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    #[serde(default = "default_format")]
    pub format: SuiteFormat,

    #[serde(default = "default_true")]
    pub docs: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            strategy: PathStrategy::Graph,
            selection: SelectionPolicy::Representative,
            max_generation: 1000,
            max_name_length: 40,
            format: SuiteFormat::Json,
            docs: true,
        }
    }
}

// Serde default helpers
fn default_strategy() -> PathStrategy { PathStrategy::Graph }
fn default_selection() -> SelectionPolicy { SelectionPolicy::Representative }
fn default_max_generation() -> usize { 1000 }
fn default_max_name_length() -> usize { 40 }
fn default_format() -> SuiteFormat { SuiteFormat::Json }
fn default_true() -> bool { true }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("script-generator.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Option resolution (CLI > config file > defaults)
// ============================================================================

pub fn build_generation_options(
    config: &GenerateConfig,
    strategy: Option<PathStrategy>,
    selection: Option<SelectionPolicy>,
    max_generation: Option<usize>,
    max_name_length: Option<usize>,
    no_docs: bool,
) -> GenerationOptions {
    GenerationOptions {
        path_strategy: strategy.unwrap_or(config.strategy),
        selection: selection.unwrap_or(config.selection),
        max_generation: max_generation.unwrap_or(config.max_generation),
        max_name_length: max_name_length.unwrap_or(config.max_name_length),
        generate_docs: config.docs && !no_docs,
    }
}
