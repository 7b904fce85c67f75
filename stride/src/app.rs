//! # Stride Application Logic
//!
//! Resolves a preset selected on the command line and writes the resulting
//! configuration tree to stdout, where the external trainer picks it up.
//! Logs go to stderr so the output stays machine-readable.
//!
//! Layers are applied in this order: the preset's chain, the `--patch` file,
//! then each `--set` assignment. Interpolation runs last, with the `--var`
//! values.
//!
//! With `--watch`, the patch file is monitored through [`crate::watcher`]
//! and the configuration is printed again after every change. A change that
//! fails to resolve is logged and the previous output stands until the file
//! is fixed.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use presets::{Catalog, Kind};
use schema::{Patch, Variables};
use tracing::Level;

use crate::cli::{Cli, Command, ShowArgs};
use crate::watcher;

/// Run the command described by `cli`.
///
/// # Errors
///
/// Returns any error produced while reading the patch file or resolving the
/// preset, or while setting up the file watcher.
pub fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::new().context("preset catalog is inconsistent")?;

    match cli.command {
        Command::List => list(&catalog),
        Command::Show(args) => show(&catalog, &args),
    }
}

fn list(catalog: &Catalog) -> Result<()> {
    for kind in Kind::ALL {
        for name in catalog.names(kind) {
            let chain = catalog.chain(kind, name)?;
            println!("{kind:<10} {name:<24} {}", chain.join(" -> "));
        }
    }
    Ok(())
}

fn show(catalog: &Catalog, args: &ShowArgs) -> Result<()> {
    let mut variables = Variables::new();
    for assignment in &args.vars {
        variables.assign(assignment)?;
    }

    emit(catalog, args, &variables)?;

    if !args.watch {
        return Ok(());
    }
    let Some(path) = args.patch.as_deref() else {
        return Ok(());
    };

    let patch_watcher = watcher::start(path)?;
    while patch_watcher.wait_for_change() {
        tracing::info!("Patch file {:?} changed, resolving again...", path);
        if let Err(e) = emit(catalog, args, &variables) {
            tracing::error!("Failed to resolve {} preset '{}': {e:#}", args.kind, args.name);
        }
    }
    Ok(())
}

/// Resolve the requested preset and print it.
fn emit(catalog: &Catalog, args: &ShowArgs, variables: &Variables) -> Result<()> {
    let layers = build_layers(args)?;
    let resolved = catalog
        .resolve_json(args.kind, &args.name, &layers, variables)
        .with_context(|| format!("failed to resolve {} preset '{}'", args.kind, args.name))?;

    let text = if args.compact {
        serde_json::to_string(&resolved)?
    } else {
        serde_json::to_string_pretty(&resolved)?
    };
    println!("{text}");
    Ok(())
}

fn build_layers(args: &ShowArgs) -> Result<Vec<Patch>> {
    let mut layers = Vec::new();

    if let Some(path) = args.patch.as_deref() {
        layers.push(read_patch(path)?);
    }

    if !args.sets.is_empty() {
        let mut assignments = Patch::new();
        for assignment in &args.sets {
            assignments.assign(assignment)?;
        }
        layers.push(assignments);
    }

    Ok(layers)
}

fn read_patch(path: &Path) -> Result<Patch> {
    let json = fs::read_to_string(path).with_context(|| format!("failed to read patch file {path:?}"))?;
    let patch = Patch::parse(&json).with_context(|| format!("failed to parse patch file {path:?}"))?;
    tracing::debug!("Loaded {} override(s) from {:?}", patch.len(), path);
    Ok(patch)
}
