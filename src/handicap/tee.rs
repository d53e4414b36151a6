use serde::{Deserialize, Serialize};

use crate::model::{Gender, TeeRating, TeeRatingInput};

/// Picks the tee block a player plays from.
///
/// Order matters for fairness and is fixed:
/// 1. a female player gets the ladies' tee when it is configured,
/// 2. otherwise the men's tee when configured,
/// 3. otherwise whichever tee is configured,
/// 4. otherwise `None`.
#[must_use]
pub fn select_tee_by_gender(
    gender: Gender,
    men_tee: Option<&TeeRating>,
    ladies_tee: Option<&TeeRating>,
) -> Option<TeeRating> {
    let men_tee = men_tee.filter(|t| t.is_configured()).copied();
    let ladies_tee = ladies_tee.filter(|t| t.is_configured()).copied();

    match gender {
        Gender::Female if ladies_tee.is_some() => ladies_tee,
        _ => men_tee.or(ladies_tee),
    }
}

/// The tees configured for one event.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct TeeSet {
    pub men: Option<TeeRating>,
    pub ladies: Option<TeeRating>,
}

impl TeeSet {
    #[must_use]
    pub fn from_inputs(men: Option<&TeeRatingInput>, ladies: Option<&TeeRatingInput>) -> Self {
        Self {
            men: men.and_then(TeeRatingInput::configured),
            ladies: ladies.and_then(TeeRatingInput::configured),
        }
    }

    #[must_use]
    pub fn for_gender(&self, gender: Gender) -> Option<TeeRating> {
        select_tee_by_gender(gender, self.men.as_ref(), self.ladies.as_ref())
    }
}
