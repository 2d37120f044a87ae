use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// pathflip - inspect concolic trace files, tag catalogues and solver responses
#[derive(Debug, Parser)]
#[command(name = "pathflip", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Tag family filter for `tags`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FamilyArg {
    Structural,
    Concurrency,
    Builtin,
}

/// Entry kind for `classify`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    True,
    False,
    Event,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the trace entry tag catalogue with codes and classification.
    Tags {
        /// Show only one family.
        #[arg(short, long)]
        family: Option<FamilyArg>,
    },

    /// Classify a single tag, given by name (guard_true, erlang:hd/1) or code (25, 0x19).
    Classify {
        /// Tag name or numeric code.
        #[arg(value_name = "TAG")]
        tag: String,

        /// Kind of the entry carrying the tag.
        #[arg(short, long, value_enum, default_value_t = KindArg::Event)]
        kind: KindArg,
    },

    /// Decode a trace file and summarise its exploration candidates.
    Trace {
        /// Path to the trace file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Reject opcodes and kinds outside the catalogue.
        #[arg(long)]
        strict: bool,

        /// List every entry, not only the summary.
        #[arg(long)]
        entries: bool,
    },

    /// Extract the model block(s) from a captured solver response.
    Model {
        /// Path to the captured solver output.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
