//! Body progress tracking: weight, measurements, photos and trends.

use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::{load_collection, store_collection, MealTracker, TrackingError};
use crate::models::{
    round1, NutritionDataPoint, ProgressEntry, ProgressEntryUpdate, ProgressStats, WeightDataPoint,
};
use crate::storage::KvStore;

const PROGRESS_ENTRIES_KEY: &str = "@progress_entries";

/// Persists progress entries and computes history series and summary
/// deltas.
///
/// The persisted list is ordered newest-first: saves prepend, so index 0
/// is always the latest entry. `latest_entry` and `progress_stats` rely
/// on that invariant.
pub struct ProgressTracker {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl ProgressTracker {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Prepends the entry to the persisted list.
    pub async fn save_progress_entry(
        &self,
        entry: ProgressEntry,
    ) -> Result<ProgressEntry, TrackingError> {
        let _guard = self.write_lock.lock().await;

        let mut entries: Vec<ProgressEntry> =
            load_collection(self.store.as_ref(), PROGRESS_ENTRIES_KEY).await?;
        entries.insert(0, entry.clone());
        store_collection(self.store.as_ref(), PROGRESS_ENTRIES_KEY, &entries).await?;

        debug!(id = %entry.id, weight = entry.weight, "saved progress entry");
        Ok(entry)
    }

    /// All entries, newest first.
    pub async fn all_progress_entries(&self) -> Result<Vec<ProgressEntry>, TrackingError> {
        load_collection(self.store.as_ref(), PROGRESS_ENTRIES_KEY).await
    }

    pub async fn latest_entry(&self) -> Result<Option<ProgressEntry>, TrackingError> {
        let entries = self.all_progress_entries().await?;
        Ok(entries.into_iter().next())
    }

    /// Weight points for the last `days` days, oldest first for
    /// charting.
    pub async fn weight_history(&self, days: u32) -> Result<Vec<WeightDataPoint>, TrackingError> {
        self.weight_history_ending(Local::now().date_naive(), days)
            .await
    }

    pub async fn weight_history_ending(
        &self,
        end: NaiveDate,
        days: u32,
    ) -> Result<Vec<WeightDataPoint>, TrackingError> {
        let cutoff = end - Duration::days(days as i64);
        let entries = self.all_progress_entries().await?;

        let mut points: Vec<WeightDataPoint> = entries
            .into_iter()
            .filter(|e| e.date >= cutoff)
            .map(|e| WeightDataPoint {
                date: e.date,
                weight: e.weight,
            })
            .collect();
        points.reverse();
        Ok(points)
    }

    /// Calories and protein per day for the last `days` days, oldest
    /// first. Reads the meal tracker's daily summaries; the one
    /// cross-service dependency.
    pub async fn nutrition_trends(
        &self,
        meals: &MealTracker,
        days: u32,
    ) -> Result<Vec<NutritionDataPoint>, TrackingError> {
        self.nutrition_trends_ending(meals, Local::now().date_naive(), days)
            .await
    }

    pub async fn nutrition_trends_ending(
        &self,
        meals: &MealTracker,
        end: NaiveDate,
        days: u32,
    ) -> Result<Vec<NutritionDataPoint>, TrackingError> {
        let mut trends = Vec::with_capacity(days as usize);
        for offset in (0..days as i64).rev() {
            let date = end - Duration::days(offset);
            let daily = meals.daily_nutrition(Some(date)).await?;
            trends.push(NutritionDataPoint {
                date,
                calories: daily.total_nutrition.calories,
                protein: daily.total_nutrition.protein,
            });
        }
        Ok(trends)
    }

    pub async fn progress_stats(&self) -> Result<ProgressStats, TrackingError> {
        let entries = self.all_progress_entries().await?;

        let (Some(latest), Some(oldest)) = (entries.first(), entries.last()) else {
            return Ok(ProgressStats::default());
        };

        let unique_days: BTreeSet<NaiveDate> = entries.iter().map(|e| e.date).collect();

        Ok(ProgressStats {
            total_entries: entries.len(),
            weight_gained: round1(latest.weight - oldest.weight),
            days_tracked: unique_days.len(),
            start_weight: oldest.weight,
            current_weight: latest.weight,
        })
    }

    /// Returns `Ok(false)` without touching storage when the id is
    /// unknown.
    pub async fn delete_progress_entry(&self, id: Uuid) -> Result<bool, TrackingError> {
        let _guard = self.write_lock.lock().await;

        let mut entries: Vec<ProgressEntry> =
            load_collection(self.store.as_ref(), PROGRESS_ENTRIES_KEY).await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }

        store_collection(self.store.as_ref(), PROGRESS_ENTRIES_KEY, &entries).await?;
        debug!(%id, "deleted progress entry");
        Ok(true)
    }

    /// Shallow merge: set fields replace, unset fields keep their value.
    pub async fn update_progress_entry(
        &self,
        id: Uuid,
        update: ProgressEntryUpdate,
    ) -> Result<bool, TrackingError> {
        let _guard = self.write_lock.lock().await;

        let mut entries: Vec<ProgressEntry> =
            load_collection(self.store.as_ref(), PROGRESS_ENTRIES_KEY).await?;
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };

        if let Some(date) = update.date {
            entry.date = date;
        }
        if let Some(weight) = update.weight {
            entry.weight = weight;
        }
        if let Some(measurements) = update.measurements {
            entry.measurements = measurements;
        }
        if let Some(photos) = update.photos {
            entry.photos = photos;
        }
        if let Some(notes) = update.notes {
            entry.notes = Some(notes);
        }

        store_collection(self.store.as_ref(), PROGRESS_ENTRIES_KEY, &entries).await?;
        debug!(%id, "updated progress entry");
        Ok(true)
    }

    pub async fn clear_all_progress(&self) -> Result<(), TrackingError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(PROGRESS_ENTRIES_KEY).await?;
        Ok(())
    }
}
