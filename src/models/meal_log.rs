use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::meal_type::MealType;
use super::nutrition::{LoggedFood, NutritionGoals, NutritionInfo};

/// A logged meal: what was eaten, when, and its computed nutrition total.
///
/// `total_nutrition` is always the component-wise sum of the foods'
/// nutrition with protein/carbs/fat rounded to one decimal place. It is
/// recomputed whenever the food list changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealLog {
    pub id: Uuid,
    pub meal_type: MealType,
    /// Local calendar day the meal was logged on.
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub foods: Vec<LoggedFood>,
    pub total_nutrition: NutritionInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MealLog {
    /// Creates a meal log stamped with the current local day and instant.
    pub fn new(meal_type: MealType, foods: Vec<LoggedFood>) -> Self {
        let total_nutrition = calculate_total_nutrition(&foods);
        Self {
            id: Uuid::new_v4(),
            meal_type,
            date: Local::now().date_naive(),
            timestamp: Utc::now(),
            foods,
            total_nutrition,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Replaces the food list and recomputes the nutrition total.
    pub fn replace_foods(&mut self, foods: Vec<LoggedFood>) {
        self.total_nutrition = calculate_total_nutrition(&foods);
        self.foods = foods;
    }
}

/// Sums the nutrition of the given foods, rounding protein/carbs/fat
/// to one decimal place. Calories sum exactly.
pub fn calculate_total_nutrition(foods: &[LoggedFood]) -> NutritionInfo {
    let mut total = NutritionInfo::default();
    for food in foods {
        total.accumulate(&food.nutrition);
    }
    total.rounded()
}

impl fmt::Display for MealLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - {}", self.date, self.meal_type)?;
        for food in &self.foods {
            writeln!(
                f,
                "  {} x{} ({})",
                food.food_name, food.quantity, food.serving_size.name
            )?;
        }
        writeln!(f, "  Total: {}", self.total_nutrition)?;
        if let Some(notes) = &self.notes {
            writeln!(f, "  Notes: {}", notes)?;
        }
        Ok(())
    }
}

/// Nutrition summary for a single calendar day. Derived on read,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub meals: Vec<MealLog>,
    pub total_nutrition: NutritionInfo,
    pub goal_nutrition: NutritionGoals,
}
