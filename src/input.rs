use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::EngineError;
use crate::model::EventResults;
use crate::tee_sheet::RosterSnapshot;

/// # Errors
///
/// Will return `Err` if the file cannot be read or is not valid json for `T`
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, EngineError> {
    let contents = tokio::fs::read_to_string(path).await?;
    let value = serde_json::from_str(&contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "loaded json input");
    Ok(value)
}

/// # Errors
///
/// Will return `Err` if the roster file is unreadable or malformed
pub async fn load_roster(path: &Path) -> Result<RosterSnapshot, EngineError> {
    read_json(path).await
}

/// # Errors
///
/// Will return `Err` if the history file is unreadable or malformed
pub async fn load_history(path: &Path) -> Result<Vec<EventResults>, EngineError> {
    read_json(path).await
}
