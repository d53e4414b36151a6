use thiserror::Error;

/// Caller-facing failures. Missing data (no handicap index, unconfigured tee,
/// no start time) is never an error; it travels as `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("allowance must be in (0, 1], got {0}")]
    InvalidAllowance(f64),
    #[error("manual assignment has {indices} group indices for {players} players")]
    ManualAssignmentLength { players: usize, indices: usize },
    #[error("manual assignment skips group index {0}")]
    ManualAssignmentGap(usize),
    #[error("manual group given for {assigned} of {players} players; assign all or none")]
    PartialManualAssignment { assigned: usize, players: usize },
    #[error("invalid tee time: {0}")]
    InvalidTeeTime(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
