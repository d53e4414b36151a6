use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::EngineError;
use crate::model::{Group, HandicapBasis, PlayerWithHandicap};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GroupingOptions {
    pub basis: HandicapBasis,
    pub descending: bool,
    pub group_size: usize,
}

/// Tee-sheet ordering: by handicap (direction per `descending`), unknown
/// handicaps always last, then name case-insensitively, then player id.
#[must_use]
pub fn compare_for_grouping(
    a: &PlayerWithHandicap,
    b: &PlayerWithHandicap,
    basis: HandicapBasis,
    descending: bool,
) -> Ordering {
    let by_handicap = match (a.handicap(basis), b.handicap(basis)) {
        (Some(x), Some(y)) if descending => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_handicap
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.player_id.cmp(&b.player_id))
}

/// Sizes for splitting `total` players into groups of at most `group_size`.
/// The group count is the minimum possible and sizes differ by at most one,
/// larger groups first, so 9 at size 4 is `[3, 3, 3]` and 10 is `[4, 3, 3]`.
#[must_use]
pub fn partition_sizes(total: usize, group_size: usize) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let group_size = group_size.max(1);
    let groups = total.div_ceil(group_size);
    let base = total / groups;
    let extra = total % groups;
    (0..groups)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

#[must_use]
pub fn group_players(
    players: &[PlayerWithHandicap],
    basis: HandicapBasis,
    descending: bool,
    group_size: usize,
) -> Vec<Group> {
    let mut sorted: Vec<PlayerWithHandicap> = players.to_vec();
    sorted.sort_by(|a, b| compare_for_grouping(a, b, basis, descending));

    let mut remaining = sorted.into_iter();
    let groups: Vec<Group> = partition_sizes(players.len(), group_size)
        .into_iter()
        .enumerate()
        .map(|(i, size)| Group::new(i + 1, remaining.by_ref().take(size).collect()))
        .collect();

    tracing::debug!(
        players = players.len(),
        groups = groups.len(),
        group_size,
        ?basis,
        descending,
        "grouped players"
    );
    groups
}

/// Uses a caller-supplied 0-based group index per player verbatim. Group `i`
/// becomes group number `i + 1`; players keep their input order within it.
///
/// # Errors
///
/// Will return `Err` if `assignment` and `players` differ in length, or if
/// some index below the highest one has no players. An index at or past
/// the player count always leaves such a gap and is rejected before any
/// groups are built.
pub fn group_players_manual(
    players: &[PlayerWithHandicap],
    assignment: &[usize],
) -> Result<Vec<Group>, EngineError> {
    if players.len() != assignment.len() {
        return Err(EngineError::ManualAssignmentLength {
            players: players.len(),
            indices: assignment.len(),
        });
    }
    let Some(&max_index) = assignment.iter().max() else {
        return Ok(Vec::new());
    };

    if max_index >= players.len() {
        let mut used = vec![false; players.len()];
        for &index in assignment.iter().filter(|&&i| i < players.len()) {
            used[index] = true;
        }
        let gap = used.iter().position(|u| !u).unwrap_or(players.len());
        return Err(EngineError::ManualAssignmentGap(gap));
    }

    let mut groups: Vec<Group> = (0..=max_index).map(|i| Group::new(i + 1, Vec::new())).collect();
    for (player, &index) in players.iter().zip(assignment) {
        groups[index].players.push(player.clone());
    }

    if let Some(gap) = groups.iter().position(|g| g.players.is_empty()) {
        return Err(EngineError::ManualAssignmentGap(gap));
    }

    tracing::debug!(players = players.len(), groups = groups.len(), "applied manual grouping");
    Ok(groups)
}

/// Groups automatically when no player carries a manual group, verbatim when
/// all of them do. `manual_groups` may be empty to mean "no overrides".
///
/// # Errors
///
/// Will return `Err` for a partial override or an inconsistent manual assignment.
pub fn plan_groups(
    players: &[PlayerWithHandicap],
    manual_groups: &[Option<usize>],
    options: &GroupingOptions,
) -> Result<Vec<Group>, EngineError> {
    let assigned: Vec<usize> = manual_groups.iter().flatten().copied().collect();

    if assigned.is_empty() {
        return Ok(group_players(
            players,
            options.basis,
            options.descending,
            options.group_size,
        ));
    }
    if manual_groups.len() != players.len() {
        return Err(EngineError::ManualAssignmentLength {
            players: players.len(),
            indices: manual_groups.len(),
        });
    }
    if assigned.len() != players.len() {
        return Err(EngineError::PartialManualAssignment {
            assigned: assigned.len(),
            players: players.len(),
        });
    }
    group_players_manual(players, &assigned)
}
