//! JSON codec for whole record collections.
//!
//! # Invariants
//! - Load never fails on bad data: absent or unparseable values become `[]`.
//! - Records are decoded one by one; a bad record is skipped, its siblings load.
//! - Save always writes the full ordered sequence.

use crate::repo::kv_repo::{KeyValueStore, RepoError, RepoResult};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Storage key of the quail collection.
pub const QUAILS_KEY: &str = "quails";
/// Storage key of the egg record collection.
pub const EGGS_KEY: &str = "eggs";
/// Storage key of the task collection.
pub const TASKS_KEY: &str = "tasks";

/// Loads the collection stored under `key`.
///
/// Only transport failures of the store are returned as errors.
pub fn load_collection<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> RepoResult<Vec<T>> {
    let Some(raw) = store.get(key)? else {
        debug!("event=collection_load module=repo status=ok key={key} source=absent count=0");
        return Ok(Vec::new());
    };

    let elements = match serde_json::from_str::<Option<Vec<Value>>>(&raw) {
        Ok(elements) => elements.unwrap_or_default(),
        Err(err) => {
            warn!(
                "event=collection_load module=repo status=fallback key={key} error_code=malformed_collection error={err}"
            );
            return Ok(Vec::new());
        }
    };

    let total = elements.len();
    let items: Vec<T> = elements
        .into_iter()
        .enumerate()
        .filter_map(|(index, element)| match serde_json::from_value(element) {
            Ok(item) => Some(item),
            Err(err) => {
                warn!(
                    "event=collection_load module=repo status=skipped key={key} index={index} error_code=malformed_record error={err}"
                );
                None
            }
        })
        .collect();
    debug!(
        "event=collection_load module=repo status=ok key={key} source=stored count={} skipped={}",
        items.len(),
        total - items.len()
    );
    Ok(items)
}

/// Writes `items` under `key`, replacing the previous value.
pub fn save_collection<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    items: &[T],
) -> RepoResult<()> {
    let encoded = serde_json::to_string(items).map_err(|source| RepoError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &encoded)
}
