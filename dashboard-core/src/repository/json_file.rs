use super::Error;
use serde::de::DeserializeOwned;
use std::{collections::HashSet, path::Path};
use uuid::Uuid;

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    tracing::debug!(path = %path.display(), "reading json file");
    let bytes = tokio::fs::read(path).await?;
    let value = serde_json::from_slice(&bytes)?;

    Ok(value)
}

///
/// ### Errors
/// - [Error::DuplicatedId] with the first id that occurs twice
///
pub fn ensure_unique_ids(ids: impl IntoIterator<Item = Uuid>) -> Result<(), Error> {
    let mut seen = HashSet::new();

    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicatedId(id));
        }
    }

    Ok(())
}
