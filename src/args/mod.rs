pub mod types;
pub mod validation;

use clap::Parser;

use crate::grouping::GroupingOptions;
use crate::tee_sheet::TeeSheetOptions;

pub use types::{Args, CleanArgs, Command, OutputFormat, Task};

#[must_use]
pub fn args_checks() -> CleanArgs {
    Args::parse().into_clean()
}

impl Args {
    /// Turns parsed flags into explicit engine configuration. This is the only
    /// place CLI defaults meet the engine.
    #[must_use]
    pub fn into_clean(self) -> CleanArgs {
        let task = match self.command {
            Command::TeeSheet {
                input,
                allowance,
                group_size,
                basis,
                ascending,
                start,
                interval,
                per_page,
            } => Task::TeeSheet {
                input,
                options: TeeSheetOptions {
                    allowance,
                    grouping: GroupingOptions {
                        basis,
                        descending: !ascending,
                        group_size,
                    },
                    start_time: start,
                    interval_minutes: interval,
                    groups_per_page: per_page,
                },
            },
            Command::Standings { input } => Task::Standings { input },
        };
        CleanArgs {
            format: self.format,
            task,
        }
    }
}
