use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use procarch::{ArchitectureRegistry, Processor};
use procarch_metadata::{
    ArchitectureProvider, FixedArchitecture, TargetArchitecture, UnameArchitecture,
};

mod args;

use crate::args::ArchSource;
use crate::args::CliArgs;
use crate::args::Commands;
use crate::args::LoggingLevel;

fn format_line(key: &str, processor: Processor) -> String {
    format!("{}: {}", key, processor)
}

/// Returns the line to print, or the identifier that was not found.
fn render_processor(registry: &ArchitectureRegistry, key: &str) -> Result<String, String> {
    registry
        .processor(key)
        .map(|processor| format_line(key, processor))
        .ok_or_else(|| key.to_string())
}

/// Same as `render_processor` for the identifier `provider` reports. A provider
/// that fails is an unknown architecture with an empty identifier.
fn render_current(
    registry: &ArchitectureRegistry,
    provider: &dyn ArchitectureProvider,
) -> Result<String, String> {
    let processor = registry.current_processor(provider);
    let architecture = provider.architecture().unwrap_or_default();
    debug!("current architecture: {:?}", architecture);
    match processor {
        Some(processor) => Ok(format_line(&architecture, processor)),
        None => Err(architecture),
    }
}

fn render_list(registry: &ArchitectureRegistry) -> String {
    registry
        .entries()
        .map(|(key, processor)| format_line(key, processor))
        .collect::<Vec<_>>()
        .join("\n")
}

fn print_or_exit(rendered: Result<String, String>) {
    match rendered {
        Ok(line) => println!("{}", line),
        Err(key) => {
            eprintln!("unknown architecture: {}", key);
            std::process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let level_filter = match args.logging {
        LoggingLevel::Trace => Level::TRACE,
        LoggingLevel::Debug => Level::DEBUG,
        LoggingLevel::Info => Level::INFO,
        LoggingLevel::Warn => Level::WARN,
        LoggingLevel::Error => Level::ERROR,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = procarch::registry();

    match args.command {
        Commands::Lookup { key } => print_or_exit(render_processor(registry, &key)),
        Commands::Current { source, arch } => {
            let provider: Box<dyn ArchitectureProvider> = match (arch, source) {
                (Some(arch), _) => Box::new(FixedArchitecture::new(arch)),
                (None, ArchSource::Uname) => Box::new(UnameArchitecture {}),
                (None, ArchSource::Target) => Box::new(TargetArchitecture {}),
            };
            print_or_exit(render_current(registry, provider.as_ref()));
        }
        Commands::List => println!("{}", render_list(registry)),
    }

    Ok(())
}
