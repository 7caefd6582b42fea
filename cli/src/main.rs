//! pathmatch CLI: drive a routing table from the command line.
//!
//! Subcommands:
//! - `match <table> <path>... [--trace]`: resolve paths against a table
//! - `check <table>`: validate a table loads without errors
//! - `list <table>`: print the registered patterns in priority order
//!
//! Tables are [`TableConfig`] files, JSON when the extension is `.json` and
//! YAML otherwise.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use pathmatch::{Matcher, TableConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Resolve paths against a pattern routing table
#[derive(Debug, Parser)]
#[command(name = "pathmatch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve each path to its best pattern and captures
    Match {
        /// Table config file (.json, .yaml, .yml)
        table: PathBuf,
        /// Paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,
        /// Print every step of each lookup
        #[arg(long)]
        trace: bool,
    },
    /// Validate a table config
    Check {
        /// Table config file
        table: PathBuf,
    },
    /// List registered patterns in priority order
    List {
        /// Table config file
        table: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    run(cli.command, &mut stdout.lock())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn run(command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Match {
            table,
            paths,
            trace,
        } => cmd_match(&load_table(&table)?, &paths, trace, out),
        Command::Check { table } => cmd_check(&table, out),
        Command::List { table } => cmd_list(&load_table(&table)?, out),
    }
}

fn cmd_match(
    matcher: &Matcher,
    paths: &[String],
    trace: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for path in paths {
        let lookup = matcher.lookup_with_trace(path);
        if trace {
            for step in &lookup.steps {
                writeln!(out, "  {step}")?;
            }
        }

        match lookup.result {
            Some(found) => {
                let mut captures: Vec<_> = found.captures.into_iter().collect();
                captures.sort();
                write!(out, "{path} -> {}", found.pattern)?;
                for (name, value) in captures {
                    write!(out, " {name}={value}")?;
                }
                writeln!(out)?;
            }
            None => writeln!(out, "{path} -> (no match)")?,
        }
    }
    Ok(())
}

fn cmd_check(table: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let matcher = load_table(table)?;
    writeln!(out, "Table valid: {} patterns", matcher.len())?;
    Ok(())
}

fn cmd_list(matcher: &Matcher, out: &mut impl Write) -> anyhow::Result<()> {
    for pattern in matcher.patterns() {
        writeln!(out, "{pattern}")?;
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Config loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_table(path: &Path) -> anyhow::Result<Matcher> {
    let config = load_config(path)?;
    let matcher = config
        .build()
        .with_context(|| format!("invalid table \"{}\"", path.display()))?;
    tracing::info!(path = %path.display(), patterns = matcher.len(), "table loaded");
    Ok(matcher)
}

fn load_config(path: &Path) -> anyhow::Result<TableConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read \"{}\"", path.display()))?;
    parse_config(&content, is_json(path))
        .with_context(|| format!("failed to parse \"{}\"", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse_config(content: &str, json: bool) -> anyhow::Result<TableConfig> {
    if json {
        Ok(serde_json::from_str(content)?)
    } else {
        // Default to YAML (handles .yaml and .yml)
        Ok(serde_yaml::from_str(content)?)
    }
}
