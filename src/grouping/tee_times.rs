use chrono::{Duration, NaiveTime};

use crate::error::EngineError;
use crate::model::{Group, GroupWithTime};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Gives group `i` the tee time `start + i × interval_minutes`, wrapping past
/// midnight on a 24-hour clock. Without a start time every tee time is `None`.
#[must_use]
pub fn assign_tee_times(
    groups: Vec<Group>,
    start_time: Option<NaiveTime>,
    interval_minutes: u32,
) -> Vec<GroupWithTime> {
    groups
        .into_iter()
        .enumerate()
        .map(|(i, mut group)| {
            group.tee_time = start_time.map(|start| {
                let offset = (i as i64 * i64::from(interval_minutes)).rem_euclid(MINUTES_PER_DAY);
                start.overflowing_add_signed(Duration::minutes(offset)).0
            });
            group
        })
        .collect()
}

/// Parses `HH:MM` or `HH:MM:SS`.
///
/// # Errors
///
/// Will return `Err` if the string is neither.
pub fn parse_tee_time(value: &str) -> Result<NaiveTime, EngineError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidTeeTime(value.to_string()))
}

/// Splits a tee sheet into pages of `groups_per_page` groups. Zero means a
/// single page holding everything.
#[must_use]
pub fn paginate_groups(groups: &[Group], groups_per_page: usize) -> Vec<Vec<Group>> {
    if groups.is_empty() {
        return Vec::new();
    }
    if groups_per_page == 0 {
        return vec![groups.to_vec()];
    }
    groups.chunks(groups_per_page).map(<[Group]>::to_vec).collect()
}
