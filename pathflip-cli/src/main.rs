mod app;
mod commands;
mod output;

use clap::Parser;
use log::LevelFilter;

use crate::app::{Cli, Command, GlobalOptions};

/// Library diagnostics go to stderr so stdout stays clean for tables and JSON.
/// `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(opts: &GlobalOptions) {
    if opts.json {
        return;
    }

    let level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("pathflip", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.global);

    let opts = &cli.global;
    match &cli.command {
        Command::Tags { family } => commands::tags::run(*family, opts),
        Command::Classify { tag, kind } => commands::classify::run(tag, *kind, opts),
        Command::Trace {
            path,
            strict,
            entries,
        } => commands::trace::run(path, *strict, *entries, opts),
        Command::Model { path } => commands::model::run(path, opts),
    }
}
