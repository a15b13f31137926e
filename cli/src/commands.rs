pub mod book;
pub mod options;
pub mod resync;
pub mod summary;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use fleetsync_common::fleet::TripId;

#[derive(Parser)]
#[command(name = "fleetsync")]
#[command(about = "Keeps driver, truck and cargo statuses in step with trips.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less. Repeat for even less output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Run everything but never write the snapshot back
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show fleet counters
    #[command(alias = "s")]
    Summary { snapshot: PathBuf },
    /// Re-derive every trip status and recompute the whole fleet
    #[command(alias = "r")]
    Resync {
        snapshot: PathBuf,
        /// Write the result here instead of overwriting the snapshot
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Create or edit a trip from a JSON file
    #[command(alias = "b")]
    Book {
        snapshot: PathBuf,
        trip: PathBuf,
        /// Edit the stored trip with this id instead of creating a new one
        #[arg(long, value_name = "ID")]
        edit: Option<TripId>,
    },
    /// List the drivers, trucks, cargos and routes a trip may use
    #[command(alias = "o")]
    Options {
        snapshot: PathBuf,
        /// Options for editing this trip
        #[arg(long, value_name = "ID")]
        trip: Option<TripId>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
