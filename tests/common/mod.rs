#![allow(dead_code)]

use society_engine::model::{
    EventResultPointEntry, EventResults, Gender, PlayerHandicapProfile, PlayerWithHandicap,
    ScoringFormat,
};

/// A grouped player whose course and playing handicap are both `handicap`.
pub fn player(id: &str, name: &str, handicap: Option<i32>) -> PlayerWithHandicap {
    PlayerWithHandicap {
        player_id: id.to_string(),
        name: name.to_string(),
        gender: Gender::Unspecified,
        handicap_index: handicap.map(f64::from),
        course_handicap: handicap,
        playing_handicap: handicap,
    }
}

pub fn profile(id: &str, name: &str, index: Option<f64>, gender: Gender) -> PlayerHandicapProfile {
    PlayerHandicapProfile {
        player_id: id.to_string(),
        name: name.to_string(),
        handicap_index: index,
        gender,
    }
}

pub fn result(member_id: &str, name: &str, points: f64, score: Option<f64>) -> EventResultPointEntry {
    EventResultPointEntry {
        member_id: member_id.to_string(),
        member_name: name.to_string(),
        points,
        oom_eligible: true,
        score,
    }
}

pub fn friendly_result(member_id: &str, name: &str, points: f64, score: Option<f64>) -> EventResultPointEntry {
    EventResultPointEntry {
        oom_eligible: false,
        ..result(member_id, name, points, score)
    }
}

pub fn event(id: &str, scoring: ScoringFormat, results: Vec<EventResultPointEntry>) -> EventResults {
    EventResults {
        event_id: id.to_string(),
        event_name: format!("Event {id}"),
        scoring,
        results,
    }
}

pub fn group_ids(groups: &[society_engine::model::Group]) -> Vec<Vec<String>> {
    groups
        .iter()
        .map(|g| g.players.iter().map(|p| p.player_id.clone()).collect())
        .collect()
}
