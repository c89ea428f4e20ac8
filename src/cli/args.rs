use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Default)]
pub(crate) enum LoggingLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(PartialEq, clap::ValueEnum, Debug, Clone, Default)]
pub(crate) enum ArchSource {
    /// Architecture this binary was compiled for
    #[default]
    Target,
    /// Machine reported by uname(2). This is the kernel's view, which can
    /// differ from the process, e.g. a 32-bit build on a 64-bit kernel
    Uname,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Commands {
    /// Show the processor for an architecture identifier
    Lookup {
        /// Matched exactly, e.g. `x86_64` or `ppc64`
        key: String,
    },
    /// Show the processor of the running system
    Current {
        #[arg(long, default_value_t, value_enum)]
        source: ArchSource,
        /// Use this identifier instead of detecting it
        #[arg(long, conflicts_with = "source")]
        arch: Option<String>,
    },
    /// List every known architecture identifier
    List,
}

#[derive(Parser, Debug)]
pub(crate) struct CliArgs {
    /// Set procarch's logging level
    #[arg(long, default_value_t, value_enum)]
    pub(crate) logging: LoggingLevel,
    #[command(subcommand)]
    pub(crate) command: Commands,
}
