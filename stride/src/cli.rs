use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use presets::Kind;

#[derive(Debug, Parser)]
#[command(name = "stride", version, about = "Resolve legged-locomotion configuration presets")]
pub struct Cli {
    /// Log every preset link as it is applied
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the fully resolved configuration of a preset as JSON
    Show(ShowArgs),
    /// List every registered preset with its chain of parents
    List,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Preset kind: terrain, rewards, task, train or amp-train
    pub kind: Kind,

    /// Preset name, e.g. `locomotion_randomized`
    pub name: String,

    /// JSON object of overrides applied on top of the preset. Nested objects
    /// merge into the field; write the key as `"=field"` to assign it whole,
    /// e.g. to replace a mapping such as `terrain_kwargs`
    #[arg(long, value_name = "FILE")]
    pub patch: Option<PathBuf>,

    /// Override a single field, e.g. `--set terrain.num_rows=4`; applied after `--patch`
    #[arg(long = "set", value_name = "PATH=VALUE")]
    pub sets: Vec<String>,

    /// Interpolation variable, e.g. `--var iterations=2000`
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Print on a single line
    #[arg(long)]
    pub compact: bool,

    /// Re-resolve and print again whenever the patch file changes
    #[arg(long, requires = "patch")]
    pub watch: bool,
}
