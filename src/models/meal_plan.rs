use serde::{Deserialize, Serialize};
use std::fmt;

/// One planned meal slot in a weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub meal: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl PlannedMeal {
    pub fn new(meal: impl Into<String>, calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            meal: meal.into(),
            calories,
            protein,
            carbs,
            fats,
        }
    }
}

impl fmt::Display for PlannedMeal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.0} kcal, P {:.0}g C {:.0}g F {:.0}g)",
            self.meal, self.calories, self.protein, self.carbs, self.fats
        )
    }
}

/// One weekday of a weekly plan. `day` is the full weekday name,
/// matching chrono's `%A` format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMealPlan {
    pub day: String,
    pub breakfast: PlannedMeal,
    pub lunch: PlannedMeal,
    pub snack: PlannedMeal,
    pub dinner: PlannedMeal,
}

impl fmt::Display for DailyMealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.day)?;
        writeln!(f, "  Breakfast: {}", self.breakfast)?;
        writeln!(f, "  Lunch:     {}", self.lunch)?;
        writeln!(f, "  Snack:     {}", self.snack)?;
        write!(f, "  Dinner:    {}", self.dinner)
    }
}

/// A read-only catalog entry: seven days of planned meals. Users select
/// a plan by id; plan bodies are never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMealPlan {
    pub id: String,
    pub name: String,
    pub goal: String,
    pub duration: String,
    pub daily_calories: f64,
    pub meals: Vec<DailyMealPlan>,
}

impl WeeklyMealPlan {
    /// Looks up the plan entry for a weekday by name.
    pub fn day(&self, weekday_name: &str) -> Option<&DailyMealPlan> {
        self.meals.iter().find(|d| d.day == weekday_name)
    }
}
