//! Fittrack
//!
//! Local-first fitness and nutrition tracking: meal logs, completed
//! workouts, body progress entries and meal plan selection, persisted
//! to a namespaced key-value store with derived summaries computed on
//! read.

pub mod commands;
pub mod config;
pub mod data;
pub mod models;
pub mod storage;
pub mod tracking;

pub use config::{Config, ConfigError};
pub use models::{
    CompletedWorkout, DailyMealPlan, DailyNutrition, LoggedFood, MealLog, MealType, Measurements,
    NutritionGoals, NutritionInfo, PlannedMeal, ProgressEntry, ProgressStats, Reps, ServingSize,
    WeeklyMealPlan, WorkoutStats,
};
pub use storage::{FileStore, KvStore, MemoryStore, StorageError};
pub use tracking::{MealTracker, PlanSelector, ProgressTracker, TrackingError, WorkoutTracker};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
