use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

pub const SLOPE_RATING_MIN: i32 = 55;
pub const SLOPE_RATING_MAX: i32 = 155;
pub const STANDARD_SLOPE: f64 = 113.0;

/// Deserializes through [`FromStr`], so roster files may spell it `"F"`,
/// `"Ladies"`, `"Men"` and so on; anything unrecognised or null is `Unspecified`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl From<Option<String>> for Gender {
    fn from(value: Option<String>) -> Self {
        value.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Gender {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let gender = match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" | "man" | "men" | "gents" => Self::Male,
            "f" | "female" | "woman" | "women" | "ladies" | "lady" => Self::Female,
            _ => Self::Unspecified,
        };
        Ok(gender)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unspecified => "unspecified",
        };
        write!(f, "{s}")
    }
}

/// A fully configured tee block. Construct through [`TeeRatingInput::configured`]
/// or [`TeeRating::new`] so an incomplete tee never exists as a value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TeeRating {
    pub par: i32,
    pub course_rating: f64,
    pub slope_rating: i32,
}

impl TeeRating {
    #[must_use]
    pub fn new(par: i32, course_rating: f64, slope_rating: i32) -> Option<Self> {
        TeeRatingInput {
            par: Some(par),
            course_rating: Some(course_rating),
            slope_rating: Some(slope_rating),
        }
        .configured()
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.course_rating.is_finite()
            && self.course_rating > 0.0
            && (SLOPE_RATING_MIN..=SLOPE_RATING_MAX).contains(&self.slope_rating)
    }
}

/// Tee configuration as the data layer hands it over: any field may be absent.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct TeeRatingInput {
    #[serde(default)]
    pub par: Option<i32>,
    #[serde(default)]
    pub course_rating: Option<f64>,
    #[serde(default)]
    pub slope_rating: Option<i32>,
}

impl TeeRatingInput {
    /// Returns the tee only when all three fields are present and in range.
    #[must_use]
    pub fn configured(&self) -> Option<TeeRating> {
        let tee = TeeRating {
            par: self.par?,
            course_rating: self.course_rating?,
            slope_rating: self.slope_rating?,
        };
        tee.is_configured().then_some(tee)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerHandicapProfile {
    pub player_id: String,
    pub name: String,
    /// May be negative for plus-handicap players.
    #[serde(default)]
    pub handicap_index: Option<f64>,
    #[serde(default)]
    pub gender: Gender,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerWithHandicap {
    pub player_id: String,
    pub name: String,
    pub gender: Gender,
    pub handicap_index: Option<f64>,
    pub course_handicap: Option<i32>,
    pub playing_handicap: Option<i32>,
}

impl PlayerWithHandicap {
    #[must_use]
    pub fn handicap(&self, basis: HandicapBasis) -> Option<i32> {
        match basis {
            HandicapBasis::Course => self.course_handicap,
            HandicapBasis::Playing => self.playing_handicap,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HandicapBasis {
    Course,
    Playing,
}

impl FromStr for HandicapBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "course" | "ch" => Ok(Self::Course),
            "playing" | "ph" => Ok(Self::Playing),
            other => Err(format!("unknown handicap basis '{other}', expected course or playing")),
        }
    }
}

/// Competition allowance as a fraction in `(0, 1]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, PartialOrd)]
#[serde(try_from = "f64", into = "f64")]
pub struct Allowance(f64);

impl Allowance {
    /// # Errors
    ///
    /// Will return `Err` if `fraction` is not finite or falls outside `(0, 1]`.
    pub fn new(fraction: f64) -> Result<Self, EngineError> {
        if fraction.is_finite() && fraction > 0.0 && fraction <= 1.0 {
            Ok(Self(fraction))
        } else {
            Err(EngineError::InvalidAllowance(fraction))
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if `percent` is 0 or above 100.
    pub fn from_percent(percent: u32) -> Result<Self, EngineError> {
        Self::new(f64::from(percent) / 100.0)
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Allowance {
    type Error = EngineError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Allowance> for f64 {
    fn from(value: Allowance) -> Self {
        value.0
    }
}

impl fmt::Display for Allowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0 * 100.0)
    }
}
