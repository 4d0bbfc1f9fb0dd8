//! Exercise completion tracking: history windows, streaks and stats.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Utc};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::{load_collection, local_day, store_collection, TrackingError};
use crate::models::{CompletedWorkout, Reps, WorkoutStats};
use crate::storage::KvStore;

const COMPLETED_WORKOUTS_KEY: &str = "@completed_workouts";

/// Persists exercise completion events and computes day windows,
/// streaks and per-exercise statistics.
pub struct WorkoutTracker {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl WorkoutTracker {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Records a completion stamped with the current instant.
    pub async fn save_completed_workout(
        &self,
        exercise_id: &str,
        exercise_name: &str,
        sets: u32,
        reps: Reps,
        duration: Option<u32>,
        notes: Option<String>,
    ) -> Result<CompletedWorkout, TrackingError> {
        let _guard = self.write_lock.lock().await;

        let mut workout = CompletedWorkout::new(exercise_id, exercise_name, sets, reps);
        if let Some(secs) = duration {
            workout = workout.with_duration(secs);
        }
        if let Some(n) = notes {
            workout = workout.with_notes(n);
        }

        let mut workouts: Vec<CompletedWorkout> =
            load_collection(self.store.as_ref(), COMPLETED_WORKOUTS_KEY).await?;
        workouts.push(workout.clone());
        store_collection(self.store.as_ref(), COMPLETED_WORKOUTS_KEY, &workouts).await?;

        debug!(id = %workout.id, exercise = %workout.exercise_id, "saved completed workout");
        Ok(workout)
    }

    pub async fn all_completed_workouts(&self) -> Result<Vec<CompletedWorkout>, TrackingError> {
        load_collection(self.store.as_ref(), COMPLETED_WORKOUTS_KEY).await
    }

    /// Completions within `[start, end)`. Callers pass the start of the
    /// day after the last wanted day as `end`, so sub-second timestamps
    /// late in that day are never dropped.
    pub async fn workout_history(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CompletedWorkout>, TrackingError> {
        let workouts = self.all_completed_workouts().await?;
        Ok(workouts
            .into_iter()
            .filter(|w| w.date >= start && w.date < end)
            .collect())
    }

    /// Completions on a specific local calendar day.
    pub async fn completed_on(&self, day: NaiveDate) -> Result<Vec<CompletedWorkout>, TrackingError> {
        let workouts = self.all_completed_workouts().await?;
        Ok(workouts
            .into_iter()
            .filter(|w| local_day(w.date) == day)
            .collect())
    }

    pub async fn today_completed_workouts(&self) -> Result<Vec<CompletedWorkout>, TrackingError> {
        self.completed_on(Local::now().date_naive()).await
    }

    /// Completions in the week starting the most recent Sunday.
    pub async fn weekly_workouts(&self) -> Result<Vec<CompletedWorkout>, TrackingError> {
        let today = Local::now().date_naive();
        let week_start =
            today - Duration::days(today.weekday().num_days_from_sunday() as i64);
        let week_end = week_start + Duration::days(7);

        let workouts = self.all_completed_workouts().await?;
        Ok(workouts
            .into_iter()
            .filter(|w| {
                let day = local_day(w.date);
                day >= week_start && day < week_end
            })
            .collect())
    }

    pub async fn is_exercise_completed_today(
        &self,
        exercise_id: &str,
    ) -> Result<bool, TrackingError> {
        let today = self.today_completed_workouts().await?;
        Ok(today.iter().any(|w| w.exercise_id == exercise_id))
    }

    /// Consecutive workout days ending today.
    ///
    /// Today itself is allowed to be workout-less without zeroing the
    /// streak (it still counts backward from yesterday); a gap on any
    /// earlier day halts counting immediately.
    pub async fn workout_streak(&self) -> Result<u32, TrackingError> {
        self.workout_streak_on(Local::now().date_naive()).await
    }

    pub async fn workout_streak_on(&self, today: NaiveDate) -> Result<u32, TrackingError> {
        let workouts = self.all_completed_workouts().await?;
        let days: BTreeSet<NaiveDate> = workouts.iter().map(|w| local_day(w.date)).collect();
        if days.is_empty() {
            return Ok(0);
        }

        let mut streak = 0;
        // At most `days.len()` days can count, plus the one free skip at
        // offset 0, so offsets up to `days.len()` suffice.
        for offset in 0..=days.len() as i64 {
            if days.contains(&(today - Duration::days(offset))) {
                streak += 1;
            } else if offset > 0 {
                break;
            }
        }
        Ok(streak)
    }

    pub async fn workout_stats(&self) -> Result<WorkoutStats, TrackingError> {
        self.workout_stats_on(Local::now().date_naive()).await
    }

    pub async fn workout_stats_on(&self, today: NaiveDate) -> Result<WorkoutStats, TrackingError> {
        let workouts = self.all_completed_workouts().await?;
        let current_streak = self.workout_streak_on(today).await?;

        let unique_days: BTreeSet<NaiveDate> = workouts.iter().map(|w| local_day(w.date)).collect();

        // Completion counts per exercise name, first-logged order. Ties
        // go to the earlier exercise.
        let mut counts: Vec<(&str, u32)> = Vec::new();
        for workout in &workouts {
            match counts
                .iter_mut()
                .find(|(name, _)| *name == workout.exercise_name)
            {
                Some((_, count)) => *count += 1,
                None => counts.push((&workout.exercise_name, 1)),
            }
        }
        let mut favorite: Option<(&str, u32)> = None;
        for &(name, count) in &counts {
            if favorite.map_or(true, |(_, best)| count > best) {
                favorite = Some((name, count));
            }
        }
        let favorite_exercise = favorite.map(|(name, _)| name.to_string());

        let total_seconds: u64 = workouts.iter().filter_map(|w| w.duration).map(u64::from).sum();

        Ok(WorkoutStats {
            total_workouts: unique_days.len(),
            total_exercises: workouts.len(),
            current_streak,
            // No historical maximum is tracked yet; mirrors the current
            // streak.
            longest_streak: current_streak,
            favorite_exercise,
            total_minutes: (total_seconds as f64 / 60.0).round() as u32,
        })
    }

    pub async fn workouts_by_exercise(
        &self,
        exercise_id: &str,
    ) -> Result<Vec<CompletedWorkout>, TrackingError> {
        let workouts = self.all_completed_workouts().await?;
        Ok(workouts
            .into_iter()
            .filter(|w| w.exercise_id == exercise_id)
            .collect())
    }

    /// Returns `Ok(false)` without touching storage when the id is
    /// unknown.
    pub async fn delete_completed_workout(&self, id: Uuid) -> Result<bool, TrackingError> {
        let _guard = self.write_lock.lock().await;

        let mut workouts: Vec<CompletedWorkout> =
            load_collection(self.store.as_ref(), COMPLETED_WORKOUTS_KEY).await?;
        let before = workouts.len();
        workouts.retain(|w| w.id != id);
        if workouts.len() == before {
            return Ok(false);
        }

        store_collection(self.store.as_ref(), COMPLETED_WORKOUTS_KEY, &workouts).await?;
        debug!(%id, "deleted completed workout");
        Ok(true)
    }

    pub async fn clear_all_workouts(&self) -> Result<(), TrackingError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(COMPLETED_WORKOUTS_KEY).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn tracker_with_store() -> (WorkoutTracker, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (WorkoutTracker::new(store.clone()), store)
    }

    /// Noon on a local calendar day, as a UTC instant. Keeps day
    /// bucketing deterministic regardless of the machine's timezone.
    fn noon(date: NaiveDate) -> DateTime<Utc> {
        Local
            .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn workout_on(date: NaiveDate, name: &str) -> CompletedWorkout {
        let mut w = CompletedWorkout::new(
            name.to_lowercase().replace(' ', "-"),
            name,
            3,
            Reps::Count(12),
        );
        w.date = noon(date);
        w
    }

    async fn seed(store: &MemoryStore, workouts: &[CompletedWorkout]) {
        store
            .set(
                COMPLETED_WORKOUTS_KEY,
                &serde_json::to_string(workouts).unwrap(),
            )
            .await
            .unwrap();
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_today() {
        let (tracker, _store) = tracker_with_store();
        tracker
            .save_completed_workout("push-ups", "Push-ups", 3, Reps::Count(15), Some(300), None)
            .await
            .unwrap();

        let today = tracker.today_completed_workouts().await.unwrap();
        assert_eq!(today.len(), 1);
        assert!(tracker
            .is_exercise_completed_today("push-ups")
            .await
            .unwrap());
        assert!(!tracker.is_exercise_completed_today("squats").await.unwrap());
    }

    #[tokio::test]
    async fn test_streak_counts_today_and_backward() {
        let (tracker, store) = tracker_with_store();
        let today = day(2024, 1, 10);
        seed(
            &store,
            &[
                workout_on(day(2024, 1, 10), "Push-ups"),
                workout_on(day(2024, 1, 9), "Squats"),
                workout_on(day(2024, 1, 8), "Plank"),
            ],
        )
        .await;

        assert_eq!(tracker.workout_streak_on(today).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_streak_gap_before_today_stops_counting() {
        let (tracker, store) = tracker_with_store();
        // Workouts on today and two days ago; yesterday missing.
        seed(
            &store,
            &[
                workout_on(day(2024, 1, 10), "Push-ups"),
                workout_on(day(2024, 1, 8), "Squats"),
            ],
        )
        .await;

        assert_eq!(
            tracker.workout_streak_on(day(2024, 1, 10)).await.unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_streak_missing_today_is_allowed() {
        let (tracker, store) = tracker_with_store();
        seed(
            &store,
            &[
                workout_on(day(2024, 1, 9), "Push-ups"),
                workout_on(day(2024, 1, 8), "Squats"),
            ],
        )
        .await;

        // Today has no workout yet; streak still counts from yesterday.
        assert_eq!(
            tracker.workout_streak_on(day(2024, 1, 10)).await.unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn test_streak_zero_when_yesterday_also_missing() {
        let (tracker, store) = tracker_with_store();
        seed(&store, &[workout_on(day(2024, 1, 8), "Push-ups")]).await;

        assert_eq!(
            tracker.workout_streak_on(day(2024, 1, 10)).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_streak_empty_history() {
        let (tracker, _store) = tracker_with_store();
        assert_eq!(
            tracker.workout_streak_on(day(2024, 1, 10)).await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_stats_counts_and_favorite() {
        let (tracker, store) = tracker_with_store();
        let today = day(2024, 1, 10);
        let mut long_session = workout_on(today, "Push-ups");
        long_session.duration = Some(600);
        let mut short_session = workout_on(day(2024, 1, 9), "Squats");
        short_session.duration = Some(90);
        seed(
            &store,
            &[
                long_session,
                short_session,
                workout_on(day(2024, 1, 9), "Push-ups"),
            ],
        )
        .await;

        let stats = tracker.workout_stats_on(today).await.unwrap();
        assert_eq!(stats.total_workouts, 2); // unique days
        assert_eq!(stats.total_exercises, 3); // records
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, stats.current_streak);
        assert_eq!(stats.favorite_exercise, Some("Push-ups".to_string()));
        assert_eq!(stats.total_minutes, 12); // round(690 / 60)
    }

    #[tokio::test]
    async fn test_favorite_tie_goes_to_first_logged() {
        let (tracker, store) = tracker_with_store();
        let today = day(2024, 1, 10);
        seed(
            &store,
            &[workout_on(today, "Squats"), workout_on(today, "Push-ups")],
        )
        .await;

        let stats = tracker.workout_stats_on(today).await.unwrap();
        assert_eq!(stats.favorite_exercise, Some("Squats".to_string()));
    }

    #[tokio::test]
    async fn test_history_range_is_half_open() {
        let (tracker, store) = tracker_with_store();
        seed(
            &store,
            &[
                workout_on(day(2024, 1, 5), "Push-ups"),
                workout_on(day(2024, 1, 7), "Squats"),
                workout_on(day(2024, 1, 9), "Plank"),
            ],
        )
        .await;

        let history = tracker
            .workout_history(noon(day(2024, 1, 5)), noon(day(2024, 1, 9)))
            .await
            .unwrap();
        assert_eq!(history.len(), 2);
    }

    #[tokio::test]
    async fn test_history_keeps_final_subsecond_of_last_day() {
        let (tracker, store) = tracker_with_store();
        let mut late = workout_on(day(2024, 1, 7), "Squats");
        late.date = Local
            .from_local_datetime(
                &day(2024, 1, 7).and_hms_milli_opt(23, 59, 59, 500).unwrap(),
            )
            .single()
            .unwrap()
            .with_timezone(&Utc);
        seed(&store, &[late]).await;

        let start = Local
            .from_local_datetime(&day(2024, 1, 7).and_time(chrono::NaiveTime::MIN))
            .single()
            .unwrap()
            .with_timezone(&Utc);
        let end = Local
            .from_local_datetime(&day(2024, 1, 8).and_time(chrono::NaiveTime::MIN))
            .single()
            .unwrap()
            .with_timezone(&Utc);

        let history = tracker.workout_history(start, end).await.unwrap();
        assert_eq!(history.len(), 1);
    }

    #[tokio::test]
    async fn test_workouts_by_exercise_uses_slug() {
        let (tracker, store) = tracker_with_store();
        seed(
            &store,
            &[
                workout_on(day(2024, 1, 9), "Push-ups"),
                workout_on(day(2024, 1, 8), "Squats"),
                workout_on(day(2024, 1, 7), "Push-ups"),
            ],
        )
        .await;

        let push_ups = tracker.workouts_by_exercise("push-ups").await.unwrap();
        assert_eq!(push_ups.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_storage_untouched() {
        let (tracker, store) = tracker_with_store();
        seed(&store, &[workout_on(day(2024, 1, 9), "Push-ups")]).await;
        let before = store.get(COMPLETED_WORKOUTS_KEY).await.unwrap().unwrap();

        assert!(!tracker
            .delete_completed_workout(Uuid::new_v4())
            .await
            .unwrap());
        let after = store.get(COMPLETED_WORKOUTS_KEY).await.unwrap().unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_clear_all() {
        let (tracker, _store) = tracker_with_store();
        tracker
            .save_completed_workout("squats", "Squats", 3, Reps::Count(20), None, None)
            .await
            .unwrap();
        tracker.clear_all_workouts().await.unwrap();
        assert!(tracker.all_completed_workouts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_weekly_window_starts_sunday() {
        let (tracker, store) = tracker_with_store();
        let today = Local::now().date_naive();
        let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
        seed(
            &store,
            &[
                workout_on(week_start, "Push-ups"),
                workout_on(week_start - Duration::days(1), "Squats"),
            ],
        )
        .await;

        let weekly = tracker.weekly_workouts().await.unwrap();
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].exercise_name, "Push-ups");
    }
}
