use ahash::RandomState;
use std::collections::{HashMap, HashSet};

use crate::model::{EventResults, ScoringFormat};

pub type MemberCounts = HashMap<String, u32, RandomState>;

/// Decides who won a single event. This is where an external scoring module
/// plugs in; the engine only counts what it is told.
pub trait WinnerRule {
    /// Member ids of every entry tied for the best result. Empty when the
    /// event has no winner yet.
    fn winners<'a>(&self, event: &'a EventResults) -> Vec<&'a str>;
}

/// Picks winners from each entry's format-native `score`: highest for
/// Stableford, lowest for strokeplay. Entries without a finite score are
/// not in contention.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringFormatRule;

impl WinnerRule for ScoringFormatRule {
    fn winners<'a>(&self, event: &'a EventResults) -> Vec<&'a str> {
        let scored = event
            .results
            .iter()
            .filter_map(|r| r.score.filter(|s| s.is_finite()).map(|s| (r.member_id.as_str(), s)));

        let best = match event.scoring {
            ScoringFormat::Stableford => scored.clone().map(|(_, s)| s).reduce(f64::max),
            ScoringFormat::Strokeplay => scored.clone().map(|(_, s)| s).reduce(f64::min),
        };
        let Some(best) = best else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        scored
            .filter(|&(_, s)| s == best)
            .map(|(id, _)| id)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[must_use]
pub fn build_wins_map(history: &[EventResults]) -> MemberCounts {
    build_wins_map_with(history, &ScoringFormatRule)
}

/// Wins per member across the whole history; every member tied for an
/// event's best result is credited one win.
#[must_use]
pub fn build_wins_map_with<R: WinnerRule + ?Sized>(history: &[EventResults], rule: &R) -> MemberCounts {
    let mut wins = MemberCounts::default();
    for event in history {
        let winners = rule.winners(event);
        if winners.is_empty() {
            tracing::debug!(event_id = %event.event_id, "event has no winner");
        }
        for member_id in winners {
            *wins.entry(member_id.to_string()).or_insert(0) += 1;
        }
    }
    wins
}

/// Distinct OOM-eligible events per member in which any result was
/// recorded, zero points included.
#[must_use]
pub fn build_played_map(history: &[EventResults]) -> MemberCounts {
    let mut played = MemberCounts::default();
    for event in history {
        let members: HashSet<&str> = event
            .results
            .iter()
            .filter(|r| r.oom_eligible)
            .map(|r| r.member_id.as_str())
            .collect();
        for member_id in members {
            *played.entry(member_id.to_string()).or_insert(0) += 1;
        }
    }
    played
}
