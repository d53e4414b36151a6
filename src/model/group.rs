use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::model::PlayerWithHandicap;

pub const TEE_TIME_FORMAT: &str = "%H:%M";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Group {
    pub group_number: usize,
    pub players: Vec<PlayerWithHandicap>,
    #[serde(default, with = "tee_time_hhmm")]
    pub tee_time: Option<NaiveTime>,
}

/// A group after [`crate::grouping::assign_tee_times`]; same shape, tee time filled in.
pub type GroupWithTime = Group;

impl Group {
    #[must_use]
    pub fn new(group_number: usize, players: Vec<PlayerWithHandicap>) -> Self {
        Self {
            group_number,
            players,
            tee_time: None,
        }
    }

    #[must_use]
    pub fn tee_time_display(&self) -> String {
        self.tee_time
            .map_or_else(|| "-".to_string(), |t| t.format(TEE_TIME_FORMAT).to_string())
    }
}

pub(crate) mod tee_time_hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TEE_TIME_FORMAT;

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => s.serialize_str(&t.format(TEE_TIME_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| crate::grouping::parse_tee_time(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
