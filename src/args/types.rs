use chrono::NaiveTime;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::{Allowance, HandicapBasis};
use crate::tee_sheet::TeeSheetOptions;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// Output format: text or json
    #[arg(
        short = 'f',
        long,
        value_name = "FORMAT",
        default_value = "text",
        global = true,
        value_enum
    )]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve handicaps for a roster and print the tee sheet
    TeeSheet {
        /// Roster snapshot json: tees plus players
        #[arg(short = 'i', long, value_name = "ROSTER_JSON", value_parser = crate::args::validation::check_readable_file)]
        input: PathBuf,
        /// Competition allowance, as a fraction (0.95) or a percentage (95)
        #[arg(short = 'a', long, value_name = "ALLOWANCE", default_value = "0.95", value_parser = crate::args::validation::check_allowance)]
        allowance: Allowance,
        #[arg(short = 'g', long, value_name = "GROUP_SIZE", default_value = "4", value_parser = crate::args::validation::check_group_size)]
        group_size: usize,
        /// Which handicap orders the groups: course or playing
        #[arg(short = 'b', long, value_name = "BASIS", default_value = "playing", value_parser = crate::args::validation::check_basis)]
        basis: HandicapBasis,
        /// Lowest handicaps out first instead of highest
        #[arg(long)]
        ascending: bool,
        /// First tee time, HH:MM. Without it groups get no tee times.
        #[arg(short = 's', long, value_name = "HH:MM", value_parser = crate::args::validation::check_tee_time)]
        start: Option<NaiveTime>,
        #[arg(long, value_name = "MINUTES", default_value = "10")]
        interval: u32,
        /// Groups per printed page; 0 for a single page
        #[arg(long, value_name = "GROUPS", default_value = "0")]
        per_page: usize,
    },
    /// Compute the Order of Merit from an event result history
    Standings {
        /// Event result history json: an array of events
        #[arg(short = 'i', long, value_name = "HISTORY_JSON", value_parser = crate::args::validation::check_readable_file)]
        input: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub enum Task {
    TeeSheet {
        input: PathBuf,
        options: TeeSheetOptions,
    },
    Standings {
        input: PathBuf,
    },
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub format: OutputFormat,
    pub task: Task,
}
