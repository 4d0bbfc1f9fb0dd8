pub mod meal_log;
pub mod meal_plan;
pub mod meal_type;
pub mod nutrition;
pub mod progress;
pub mod workout;

pub use meal_log::{calculate_total_nutrition, DailyNutrition, MealLog};
pub use meal_plan::{DailyMealPlan, PlannedMeal, WeeklyMealPlan};
pub use meal_type::MealType;
pub use nutrition::{round1, LoggedFood, NutritionGoals, NutritionInfo, ServingSize};
pub use progress::{
    Measurements, NutritionDataPoint, PhotoType, ProgressEntry, ProgressEntryUpdate, ProgressPhoto,
    ProgressStats, WeightDataPoint,
};
pub use workout::{CompletedWorkout, Reps, WorkoutStats};
