use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::grouping::{GroupingOptions, assign_tee_times, paginate_groups, plan_groups};
use crate::handicap::{TeeSet, resolve_roster};
use crate::model::{Allowance, GroupWithTime, PlayerHandicapProfile, TeeRatingInput};

/// Roster and tee configuration for one event, as exported by the data layer.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RosterSnapshot {
    #[serde(default)]
    pub men_tee: Option<TeeRatingInput>,
    #[serde(default)]
    pub ladies_tee: Option<TeeRatingInput>,
    #[serde(default)]
    pub players: Vec<RosterPlayer>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RosterPlayer {
    #[serde(flatten)]
    pub profile: PlayerHandicapProfile,
    /// 0-based manual group index; set for every player or for none.
    #[serde(default)]
    pub manual_group: Option<usize>,
}

impl RosterSnapshot {
    #[must_use]
    pub fn tees(&self) -> TeeSet {
        TeeSet::from_inputs(self.men_tee.as_ref(), self.ladies_tee.as_ref())
    }
}

/// Everything a tee sheet depends on besides the roster. There are no
/// engine-side defaults; the caller fills in every field.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TeeSheetOptions {
    pub allowance: Allowance,
    pub grouping: GroupingOptions,
    #[serde(default, with = "crate::model::group::tee_time_hhmm")]
    pub start_time: Option<NaiveTime>,
    pub interval_minutes: u32,
    /// 0 puts every group on one page.
    pub groups_per_page: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TeeSheet {
    pub pages: Vec<Vec<GroupWithTime>>,
}

impl TeeSheet {
    pub fn groups(&self) -> impl Iterator<Item = &GroupWithTime> {
        self.pages.iter().flatten()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }
}

/// Roster → handicaps → groups → tee times → pages.
///
/// # Errors
///
/// Will return `Err` if the roster carries an inconsistent manual grouping.
pub fn build_tee_sheet(
    snapshot: &RosterSnapshot,
    options: &TeeSheetOptions,
) -> Result<TeeSheet, EngineError> {
    let profiles: Vec<PlayerHandicapProfile> =
        snapshot.players.iter().map(|p| p.profile.clone()).collect();
    let manual_groups: Vec<Option<usize>> =
        snapshot.players.iter().map(|p| p.manual_group).collect();

    let players = resolve_roster(&profiles, &snapshot.tees(), options.allowance);
    let groups = plan_groups(&players, &manual_groups, &options.grouping)?;
    let groups = assign_tee_times(groups, options.start_time, options.interval_minutes);

    Ok(TeeSheet {
        pages: paginate_groups(&groups, options.groups_per_page),
    })
}
