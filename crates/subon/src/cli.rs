//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `subon validate` | Bootstrap and check that every marker resolves to a scheduler |
//! | `subon list` | Print configured schedulers and all markers |

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use subon_infrastructure::SchedulingContext;
use subon_infrastructure::config::{AppConfig, ConfigLoader};

/// Command line interface for subon
#[derive(Parser, Debug)]
#[command(name = "subon")]
#[command(about = "subon - Scheduler-bound reactive invocation")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Check that every scheduling marker resolves to a scheduler
    Validate,
    /// List configured schedulers and scheduling markers
    List,
}

/// Load configuration from `path`, or from the default locations
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load().context("Failed to load configuration")
}

/// Run `command` against `config`, writing a report to `out`
///
/// Returns `false` when the command found problems.
pub fn execute<W: Write>(command: Command, config: AppConfig, out: &mut W) -> anyhow::Result<bool> {
    let context = SchedulingContext::from_config(config).context("Failed to bootstrap scheduling context")?;
    match command {
        Command::Validate => validate(&context, out),
        Command::List => list(&context, out),
    }
}

fn validate<W: Write>(context: &SchedulingContext, out: &mut W) -> anyhow::Result<bool> {
    let violations = context.violations();
    for violation in &violations {
        writeln!(out, "error: {violation}")?;
    }
    if violations.is_empty() {
        writeln!(
            out,
            "ok: {} marker(s) resolve against {} scheduler(s)",
            context.catalog().len(),
            context.config.schedulers.len()
        )?;
    }
    Ok(violations.is_empty())
}

fn list<W: Write>(context: &SchedulingContext, out: &mut W) -> anyhow::Result<bool> {
    writeln!(out, "Schedulers:")?;
    for (name, scheduler) in &context.config.schedulers {
        match scheduler.worker_threads {
            Some(workers) => writeln!(out, "  {name} ({}, {workers} workers)", scheduler.kind.as_str())?,
            None => writeln!(out, "  {name} ({})", scheduler.kind.as_str())?,
        }
    }

    writeln!(out, "Markers:")?;
    let resolver = context.rewriter().resolver();
    for marked in context.catalog().methods() {
        let status = match resolver.resolve(&marked.marker) {
            Ok(_) => "ok".to_string(),
            Err(err) => err.to_string(),
        };
        writeln!(
            out,
            "  {} -> {} [{}] {status}",
            marked.method,
            marked.marker.key(),
            marked.shape
        )?;
    }
    Ok(true)
}
