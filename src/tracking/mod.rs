//! Tracking services: the aggregation layer over the key-value store.
//!
//! Each service owns its storage keys exclusively and recomputes derived
//! summaries on every read. Mutations follow a read-modify-write cycle
//! over the whole collection, guarded by a per-service async lock so two
//! concurrent saves cannot drop each other's records.

pub mod meals;
pub mod plan;
pub mod progress;
pub mod workouts;

pub use meals::MealTracker;
pub use plan::PlanSelector;
pub use progress::ProgressTracker;
pub use workouts::WorkoutTracker;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::storage::{KvStore, StorageError};

/// Errors surfaced by tracker operations.
///
/// Corrupted stored JSON is deliberately not an error: it is logged and
/// read as an empty collection, so "storage unavailable" and "no data
/// yet" stay distinguishable for callers.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Calendar day of an instant in the local timezone. The single day
/// bucketing rule shared by all trackers.
pub(crate) fn local_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

pub(crate) async fn load_collection<T: DeserializeOwned>(
    store: &dyn KvStore,
    key: &'static str,
) -> Result<Vec<T>, TrackingError> {
    match store.get(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(key, error = %e, "discarding corrupted collection");
                Ok(Vec::new())
            }
        },
        None => Ok(Vec::new()),
    }
}

pub(crate) async fn store_collection<T: Serialize>(
    store: &dyn KvStore,
    key: &'static str,
    items: &[T],
) -> Result<(), TrackingError> {
    let raw = serde_json::to_string(items).map_err(|source| TrackingError::Encode { key, source })?;
    store.set(key, &raw).await?;
    Ok(())
}
