//! wrapflow CLI - lay out item manifests and preview scenarios.

#![allow(
    clippy::needless_pass_by_value,
    clippy::unwrap_used,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

mod manifest;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;
use wrapflow::preview::{previews, PREVIEW_LENGTH};
use wrapflow::{check_length, Axis, FixedHost, DEFAULT_MAX_PASSES};

use manifest::Manifest;
use report::LayoutReport;

#[derive(Parser)]
#[command(name = "wrapflow")]
#[command(about = "Wrapping row and column layout")]
#[command(version)]
struct Cli {
    /// Log layout passes (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out the items of a YAML or JSON manifest
    Layout {
        /// Manifest file (.yaml, .yml or .json)
        manifest: PathBuf,

        /// Primary-axis length, overriding the manifest
        #[arg(short, long)]
        available: Option<f32>,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Negotiate every stock preview against a fixed host
    Preview {
        /// Flow direction
        #[arg(short, long, value_enum, default_value = "rows")]
        axis: AxisArg,

        /// Length offered by the host
        #[arg(long, default_value_t = PREVIEW_LENGTH)]
        available: f32,

        /// Maximum negotiation passes per preview
        #[arg(long, default_value_t = DEFAULT_MAX_PASSES)]
        max_passes: usize,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AxisArg {
    /// Horizontal flow wrapping into rows
    Rows,
    /// Vertical flow wrapping into columns
    Columns,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Rows => Self::Horizontal,
            AxisArg::Columns => Self::Vertical,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wrapflow::init_logging_with(if cli.verbose { "debug" } else { "warn" });

    match cli.command {
        Commands::Layout {
            manifest,
            available,
            pretty,
        } => layout(&manifest, available, pretty),
        Commands::Preview {
            axis,
            available,
            max_passes,
            pretty,
        } => preview(axis.into(), available, max_passes, pretty),
    }
}

fn layout(path: &Path, available: Option<f32>, pretty: bool) -> Result<()> {
    let manifest =
        Manifest::load(path).with_context(|| format!("loading {}", path.display()))?;
    if let Some(available) = available {
        check_length("available", available)?;
    }

    let available = available.or(manifest.available);
    info!(items = manifest.items.len(), ?available, "laying out manifest");
    let report = LayoutReport::arrange(manifest.params, &manifest.measurements(), available)?;
    print_json(&report, pretty)
}

fn preview(axis: Axis, available: f32, max_passes: usize, pretty: bool) -> Result<()> {
    check_length("available", available)?;

    let mut reports = Vec::new();
    for mut preview in previews(axis)? {
        let mut host = FixedHost::new(available);
        let outcome = preview.view.negotiate(&mut host, max_passes);
        reports.push(LayoutReport::negotiated(preview.name, outcome));
    }
    print_json(&reports, pretty)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
