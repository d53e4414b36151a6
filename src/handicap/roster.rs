use crate::handicap::calculator::{calc_course_handicap, calc_playing_handicap};
use crate::handicap::tee::TeeSet;
use crate::model::{Allowance, PlayerHandicapProfile, PlayerWithHandicap};

/// Resolves one player's course and playing handicap from the event's tees.
/// Every "is this configured" decision happens here so callers only ever see
/// one optional value per handicap.
#[must_use]
pub fn resolve_player_handicap(
    profile: &PlayerHandicapProfile,
    tees: &TeeSet,
    allowance: Allowance,
) -> PlayerWithHandicap {
    let tee = tees.for_gender(profile.gender);
    let handicap_index = profile.handicap_index.filter(|hi| hi.is_finite());
    let course_handicap = calc_course_handicap(handicap_index, tee.as_ref());
    let playing_handicap = calc_playing_handicap(course_handicap, allowance);

    PlayerWithHandicap {
        player_id: profile.player_id.clone(),
        name: profile.name.clone(),
        gender: profile.gender,
        handicap_index,
        course_handicap,
        playing_handicap,
    }
}

/// Resolves a whole roster, keeping input order.
#[must_use]
pub fn resolve_roster(
    profiles: &[PlayerHandicapProfile],
    tees: &TeeSet,
    allowance: Allowance,
) -> Vec<PlayerWithHandicap> {
    let resolved: Vec<PlayerWithHandicap> = profiles
        .iter()
        .map(|p| resolve_player_handicap(p, tees, allowance))
        .collect();

    let missing = resolved.iter().filter(|p| p.course_handicap.is_none()).count();
    tracing::debug!(
        players = resolved.len(),
        missing_course_handicap = missing,
        allowance = allowance.fraction(),
        "resolved roster handicaps"
    );
    resolved
}
