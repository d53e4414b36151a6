use serde::{Deserialize, Serialize};
use std::fmt;

/// How an event's own result is scored. Only consulted to pick the event winner.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScoringFormat {
    #[default]
    Stableford,
    Strokeplay,
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoringFormat::Stableford => "stableford",
            ScoringFormat::Strokeplay => "strokeplay",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventResults {
    pub event_id: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub scoring: ScoringFormat,
    #[serde(default)]
    pub results: Vec<EventResultPointEntry>,
}

/// One record per (event, member).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventResultPointEntry {
    pub member_id: String,
    pub member_name: String,
    pub points: f64,
    #[serde(default = "default_oom_eligible")]
    pub oom_eligible: bool,
    /// Stableford points or net strokes, depending on the event's format.
    #[serde(default)]
    pub score: Option<f64>,
}

fn default_oom_eligible() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderOfMeritEntry {
    pub member_id: String,
    pub member_name: String,
    pub total_points: f64,
    pub wins: u32,
    pub played: u32,
    pub rank: usize,
}
