use ahash::RandomState;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{EventResults, OrderOfMeritEntry};
use crate::standings::activity::{ScoringFormatRule, WinnerRule, build_played_map, build_wins_map_with};

/// The Order of Merit ordering, applied everywhere standings are sorted:
/// points descending, then wins descending, then member name ascending
/// ignoring case. Member id breaks any remaining tie so the order is total.
#[must_use]
pub fn order_of_merit_cmp(a: &OrderOfMeritEntry, b: &OrderOfMeritEntry) -> Ordering {
    b.total_points
        .total_cmp(&a.total_points)
        .then_with(|| b.wins.cmp(&a.wins))
        .then_with(|| a.member_name.to_lowercase().cmp(&b.member_name.to_lowercase()))
        .then_with(|| a.member_id.cmp(&b.member_id))
}

fn same_standing(a: &OrderOfMeritEntry, b: &OrderOfMeritEntry) -> bool {
    a.total_points == b.total_points && a.wins == b.wins
}

/// Standard competition ("1224") ranking over entries already sorted with
/// [`order_of_merit_cmp`]. Entries level on points and wins share a rank;
/// the next entry's rank is its 1-based position.
pub fn assign_competition_ranks(entries: &mut [OrderOfMeritEntry]) {
    for i in 0..entries.len() {
        entries[i].rank = if i > 0 && same_standing(&entries[i - 1], &entries[i]) {
            entries[i - 1].rank
        } else {
            i + 1
        };
    }
}

#[must_use]
pub fn compute_order_of_merit(history: &[EventResults]) -> Vec<OrderOfMeritEntry> {
    compute_order_of_merit_with(history, &ScoringFormatRule)
}

/// Builds the ranked Order of Merit from scratch. Members on exactly zero
/// points are left off the board.
#[must_use]
pub fn compute_order_of_merit_with<R: WinnerRule + ?Sized>(
    history: &[EventResults],
    rule: &R,
) -> Vec<OrderOfMeritEntry> {
    let mut totals: HashMap<String, (String, f64), RandomState> = HashMap::default();
    for event in history {
        for result in event.results.iter().filter(|r| r.oom_eligible) {
            if !result.points.is_finite() || result.points < 0.0 {
                tracing::warn!(
                    event_id = %event.event_id,
                    member_id = %result.member_id,
                    points = result.points,
                    "skipping invalid points entry"
                );
                continue;
            }
            let entry = totals
                .entry(result.member_id.clone())
                .or_insert_with(|| (result.member_name.clone(), 0.0));
            entry.0.clone_from(&result.member_name);
            entry.1 += result.points;
        }
    }

    let wins = build_wins_map_with(history, rule);
    let played = build_played_map(history);

    let mut entries: Vec<OrderOfMeritEntry> = totals
        .into_iter()
        .filter(|(_, (_, total))| *total != 0.0)
        .map(|(member_id, (member_name, total_points))| OrderOfMeritEntry {
            wins: wins.get(&member_id).copied().unwrap_or(0),
            played: played.get(&member_id).copied().unwrap_or(0),
            member_id,
            member_name,
            total_points,
            rank: 0,
        })
        .collect();

    entries.sort_by(order_of_merit_cmp);
    assign_competition_ranks(&mut entries);

    tracing::debug!(
        events = history.len(),
        members = entries.len(),
        "computed order of merit"
    );
    entries
}
