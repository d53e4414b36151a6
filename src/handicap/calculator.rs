use crate::model::{Allowance, STANDARD_SLOPE, TeeRating};

pub const MISSING_PLACEHOLDER: &str = "-";

/// Rounds half-way values toward positive infinity (`-2.5` becomes `-2`).
/// Returns `None` for non-finite input or a result outside `i32`.
#[must_use]
pub fn round_half_up(value: f64) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    let rounded = (value + 0.5).floor();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    Some(rounded as i32)
}

/// Course Handicap for `handicap_index` played off `tee`:
/// `HI × slope / 113 + (course rating − par)`, rounded half up.
///
/// A missing index or tee yields `None`, as does any non-finite value.
/// `Some(0)` is a real handicap and is never used to mean "unknown".
#[must_use]
pub fn calc_course_handicap(handicap_index: Option<f64>, tee: Option<&TeeRating>) -> Option<i32> {
    let index = handicap_index.filter(|hi| hi.is_finite())?;
    let tee = tee.filter(|t| t.is_configured())?;

    let slope_factor = f64::from(tee.slope_rating) / STANDARD_SLOPE;
    let rating_adjustment = tee.course_rating - f64::from(tee.par);
    round_half_up(index * slope_factor + rating_adjustment)
}

#[must_use]
pub fn calc_playing_handicap(course_handicap: Option<i32>, allowance: Allowance) -> Option<i32> {
    let course_handicap = course_handicap?;
    round_half_up(f64::from(course_handicap) * allowance.fraction())
}

/// Display helper: `"-"` when the value is unknown, fixed decimals otherwise.
pub fn format_handicap<T: Into<f64>>(value: Option<T>, decimals: usize) -> String {
    match value.map(Into::into) {
        Some(v) if v.is_finite() => format!("{v:.decimals$}"),
        _ => MISSING_PLACEHOLDER.to_string(),
    }
}
