use clap::Parser;
use script_generator::cli::commands::{cmd_generate, cmd_paths};
use script_generator::cli::config::{Cli, Commands, build_generation_options, load_config};
use script_generator::trace::logger::TraceLogger;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise -v flags pick the level
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());
    let tracer = match cli.trace.as_deref() {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            strategy,
            selection,
            max_generation,
            max_name_length,
            format,
            no_docs,
        } => {
            let options = build_generation_options(
                &config.generate,
                strategy,
                selection,
                max_generation,
                max_name_length,
                no_docs,
            );
            let format = format.unwrap_or(config.generate.format);
            cmd_generate(&input, &output_dir, options, format, &tracer)?;
        }
        Commands::Paths { input, strategy } => {
            cmd_paths(&input, strategy.unwrap_or(config.generate.strategy))?;
        }
    }

    Ok(())
}
