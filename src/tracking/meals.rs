//! Meal logging and nutrition aggregation.

use chrono::{Duration, Local, NaiveDate};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{load_collection, store_collection, TrackingError};
use crate::models::{
    DailyNutrition, LoggedFood, MealLog, MealType, NutritionGoals, NutritionInfo,
};
use crate::storage::KvStore;

const MEAL_LOGS_KEY: &str = "@meal_logs";
const NUTRITION_GOALS_KEY: &str = "@nutrition_goals";

/// Persists meal logs and computes daily/weekly nutrition summaries
/// against goals.
pub struct MealTracker {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl MealTracker {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Logs a meal. The nutrition total is computed from the foods and
    /// the log is stamped with the current local day and instant.
    pub async fn save_meal_log(
        &self,
        meal_type: MealType,
        foods: Vec<LoggedFood>,
        notes: Option<String>,
    ) -> Result<MealLog, TrackingError> {
        let _guard = self.write_lock.lock().await;

        let mut log = MealLog::new(meal_type, foods);
        if let Some(n) = notes {
            log = log.with_notes(n);
        }

        let mut logs: Vec<MealLog> = load_collection(self.store.as_ref(), MEAL_LOGS_KEY).await?;
        logs.push(log.clone());
        store_collection(self.store.as_ref(), MEAL_LOGS_KEY, &logs).await?;

        debug!(id = %log.id, meal_type = %log.meal_type, "saved meal log");
        Ok(log)
    }

    pub async fn all_meal_logs(&self) -> Result<Vec<MealLog>, TrackingError> {
        load_collection(self.store.as_ref(), MEAL_LOGS_KEY).await
    }

    /// Meals whose `date` field exactly matches the given day.
    pub async fn meals_for(&self, date: NaiveDate) -> Result<Vec<MealLog>, TrackingError> {
        let logs = self.all_meal_logs().await?;
        Ok(logs.into_iter().filter(|m| m.date == date).collect())
    }

    pub async fn today_meals(&self) -> Result<Vec<MealLog>, TrackingError> {
        self.meals_for(Local::now().date_naive()).await
    }

    /// Daily nutrition summary: all meals for the day, their summed
    /// total, and the current goals. Defaults to today.
    pub async fn daily_nutrition(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<DailyNutrition, TrackingError> {
        let target = date.unwrap_or_else(|| Local::now().date_naive());
        let meals = self.meals_for(target).await?;
        let goals = self.nutrition_goals().await?;

        let mut total = NutritionInfo::default();
        for meal in &meals {
            total.accumulate(&meal.total_nutrition);
        }

        Ok(DailyNutrition {
            date: target,
            meals,
            total_nutrition: total.rounded(),
            goal_nutrition: goals,
        })
    }

    /// One summary per day for the 7-day window ending today, oldest
    /// first.
    pub async fn weekly_nutrition(&self) -> Result<Vec<DailyNutrition>, TrackingError> {
        self.weekly_nutrition_ending(Local::now().date_naive())
            .await
    }

    pub async fn weekly_nutrition_ending(
        &self,
        end: NaiveDate,
    ) -> Result<Vec<DailyNutrition>, TrackingError> {
        let mut week = Vec::with_capacity(7);
        for offset in (0..7).rev() {
            let day = end - Duration::days(offset);
            week.push(self.daily_nutrition(Some(day)).await?);
        }
        Ok(week)
    }

    /// Replaces a log's foods (recomputing the total) and optionally its
    /// notes. Returns `Ok(false)` without touching storage when the id
    /// is unknown.
    pub async fn update_meal_log(
        &self,
        id: Uuid,
        foods: Vec<LoggedFood>,
        notes: Option<String>,
    ) -> Result<bool, TrackingError> {
        let _guard = self.write_lock.lock().await;

        let mut logs: Vec<MealLog> = load_collection(self.store.as_ref(), MEAL_LOGS_KEY).await?;
        let Some(log) = logs.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };

        log.replace_foods(foods);
        if let Some(n) = notes {
            log.notes = Some(n);
        }

        store_collection(self.store.as_ref(), MEAL_LOGS_KEY, &logs).await?;
        debug!(%id, "updated meal log");
        Ok(true)
    }

    /// Returns `Ok(false)` without touching storage when the id is
    /// unknown.
    pub async fn delete_meal_log(&self, id: Uuid) -> Result<bool, TrackingError> {
        let _guard = self.write_lock.lock().await;

        let mut logs: Vec<MealLog> = load_collection(self.store.as_ref(), MEAL_LOGS_KEY).await?;
        let before = logs.len();
        logs.retain(|m| m.id != id);
        if logs.len() == before {
            return Ok(false);
        }

        store_collection(self.store.as_ref(), MEAL_LOGS_KEY, &logs).await?;
        debug!(%id, "deleted meal log");
        Ok(true)
    }

    pub async fn clear_meal_logs(&self) -> Result<(), TrackingError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(MEAL_LOGS_KEY).await?;
        Ok(())
    }

    /// Persisted goals, or the hardcoded defaults when none were set.
    pub async fn nutrition_goals(&self) -> Result<NutritionGoals, TrackingError> {
        match self.store.get(NUTRITION_GOALS_KEY).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(goals) => Ok(goals),
                Err(e) => {
                    warn!(key = NUTRITION_GOALS_KEY, error = %e, "discarding corrupted goals");
                    Ok(NutritionGoals::default())
                }
            },
            None => Ok(NutritionGoals::default()),
        }
    }

    pub async fn set_nutrition_goals(&self, goals: NutritionGoals) -> Result<(), TrackingError> {
        let raw = serde_json::to_string(&goals).map_err(|source| TrackingError::Encode {
            key: NUTRITION_GOALS_KEY,
            source,
        })?;
        self.store.set(NUTRITION_GOALS_KEY, &raw).await?;
        debug!("updated nutrition goals");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServingSize;
    use crate::storage::MemoryStore;

    fn tracker() -> MealTracker {
        MealTracker::new(Arc::new(MemoryStore::new()))
    }

    fn tracker_with_store() -> (MealTracker, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (MealTracker::new(store.clone()), store)
    }

    fn food(name: &str, calories: f64, protein: f64) -> LoggedFood {
        LoggedFood {
            food_id: name.to_lowercase(),
            food_name: name.to_string(),
            serving_size: ServingSize::new("100g", 100.0),
            quantity: 1.0,
            nutrition: NutritionInfo::new(calories, protein, 0.0, 0.0),
        }
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let tracker = tracker();
        let log = tracker
            .save_meal_log(MealType::Lunch, vec![food("Rice", 130.0, 2.7)], None)
            .await
            .unwrap();

        let all = tracker.all_meal_logs().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, log.id);
        assert_eq!(all[0].total_nutrition.calories, 130.0);
    }

    #[tokio::test]
    async fn test_daily_nutrition_exact_date_match() {
        let (tracker, store) = tracker_with_store();
        tracker
            .save_meal_log(MealType::Breakfast, vec![food("Eggs", 155.0, 13.0)], None)
            .await
            .unwrap();

        // Shift the stored log to a different date; its timestamp still
        // falls on today.
        let raw = store.get(MEAL_LOGS_KEY).await.unwrap().unwrap();
        let mut logs: Vec<MealLog> = serde_json::from_str(&raw).unwrap();
        let other_day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        logs[0].date = other_day;
        store
            .set(MEAL_LOGS_KEY, &serde_json::to_string(&logs).unwrap())
            .await
            .unwrap();

        let today = tracker.daily_nutrition(None).await.unwrap();
        assert!(today.meals.is_empty());
        assert_eq!(today.total_nutrition.calories, 0.0);

        let shifted = tracker.daily_nutrition(Some(other_day)).await.unwrap();
        assert_eq!(shifted.meals.len(), 1);
        assert_eq!(shifted.total_nutrition.calories, 155.0);
    }

    #[tokio::test]
    async fn test_goal_fallback_and_roundtrip() {
        let tracker = tracker();
        assert_eq!(
            tracker.nutrition_goals().await.unwrap(),
            NutritionGoals::default()
        );

        let custom = NutritionGoals {
            calories: 1800.0,
            protein: 120.0,
            carbs: 180.0,
            fat: 60.0,
        };
        tracker.set_nutrition_goals(custom).await.unwrap();
        assert_eq!(tracker.nutrition_goals().await.unwrap(), custom);
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_storage_untouched() {
        let (tracker, store) = tracker_with_store();
        tracker
            .save_meal_log(MealType::Dinner, vec![food("Ugali", 165.0, 3.6)], None)
            .await
            .unwrap();
        let before = store.get(MEAL_LOGS_KEY).await.unwrap().unwrap();

        let deleted = tracker.delete_meal_log(Uuid::new_v4()).await.unwrap();
        assert!(!deleted);

        let after = store.get(MEAL_LOGS_KEY).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let tracker = tracker();
        let log = tracker
            .save_meal_log(MealType::Snacks, vec![food("Banana", 89.0, 1.1)], None)
            .await
            .unwrap();

        assert!(tracker.delete_meal_log(log.id).await.unwrap());
        assert!(tracker.all_meal_logs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_recomputes_total() {
        let tracker = tracker();
        let log = tracker
            .save_meal_log(MealType::Lunch, vec![food("Rice", 130.0, 2.7)], None)
            .await
            .unwrap();

        let updated = tracker
            .update_meal_log(
                log.id,
                vec![food("Chicken", 239.0, 27.0), food("Rice", 130.0, 2.7)],
                Some("added protein".to_string()),
            )
            .await
            .unwrap();
        assert!(updated);

        let all = tracker.all_meal_logs().await.unwrap();
        assert_eq!(all[0].total_nutrition.calories, 369.0);
        assert_eq!(all[0].total_nutrition.protein, 29.7);
        assert_eq!(all[0].notes, Some("added protein".to_string()));
    }

    #[tokio::test]
    async fn test_update_missing_id_returns_false() {
        let tracker = tracker();
        let updated = tracker
            .update_meal_log(Uuid::new_v4(), Vec::new(), None)
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_weekly_nutrition_window() {
        let tracker = tracker();
        let end = Local::now().date_naive();
        let week = tracker.weekly_nutrition_ending(end).await.unwrap();

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, end - Duration::days(6));
        assert_eq!(week[6].date, end);
    }

    #[tokio::test]
    async fn test_corrupted_collection_reads_as_empty() {
        let (tracker, store) = tracker_with_store();
        store.set(MEAL_LOGS_KEY, "{not json").await.unwrap();
        assert!(tracker.all_meal_logs().await.unwrap().is_empty());

        // A save still works afterwards.
        tracker
            .save_meal_log(MealType::Lunch, vec![food("Rice", 130.0, 2.7)], None)
            .await
            .unwrap();
        assert_eq!(tracker.all_meal_logs().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_saves_both_survive() {
        let tracker = Arc::new(tracker());
        let a = {
            let t = tracker.clone();
            tokio::spawn(async move {
                t.save_meal_log(MealType::Breakfast, vec![food("Eggs", 155.0, 13.0)], None)
                    .await
            })
        };
        let b = {
            let t = tracker.clone();
            tokio::spawn(async move {
                t.save_meal_log(MealType::Lunch, vec![food("Rice", 130.0, 2.7)], None)
                    .await
            })
        };

        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();
        assert_eq!(tracker.all_meal_logs().await.unwrap().len(), 2);
    }
}
