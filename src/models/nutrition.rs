use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Macronutrient breakdown. For a food this is per portion as logged;
/// for a meal or day it is the summed total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutritionInfo {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub fn accumulate(&mut self, other: &NutritionInfo) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
    }

    /// Rounds protein, carbs and fat to one decimal place.
    /// Calories are integer-valued per food and sum exactly, so they
    /// are left untouched.
    pub fn rounded(mut self) -> Self {
        self.protein = round1(self.protein);
        self.carbs = round1(self.carbs);
        self.fat = round1(self.fat);
        self
    }

    /// Scales a per-100g value to `grams` of food.
    pub fn scaled_to(&self, grams: f64) -> Self {
        let factor = grams / 100.0;
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }
}

impl fmt::Display for NutritionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} kcal | P {:.1}g C {:.1}g F {:.1}g",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

/// Daily macro targets. Defaults are the muscle-gain targets the
/// original setup flow seeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2500.0,
            protein: 150.0,
            carbs: 300.0,
            fat: 70.0,
        }
    }
}

impl fmt::Display for NutritionGoals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} kcal | P {:.0}g C {:.0}g F {:.0}g",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

/// A named portion of a food, e.g. "1 cup" at 150 grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    pub name: String,
    pub grams: f64,
}

impl ServingSize {
    pub fn new(name: impl Into<String>, grams: f64) -> Self {
        Self {
            name: name.into(),
            grams,
        }
    }
}

/// A food as it was logged: portion chosen, nutrition computed for that
/// portion at logging time. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedFood {
    pub food_id: String,
    pub food_name: String,
    pub serving_size: ServingSize,
    pub quantity: f64,
    pub nutrition: NutritionInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(1.24), 1.2);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(-4.04), -4.0);
    }

    #[test]
    fn test_accumulate_and_round() {
        let mut total = NutritionInfo::default();
        total.accumulate(&NutritionInfo::new(200.0, 10.15, 20.2, 5.33));
        total.accumulate(&NutritionInfo::new(300.0, 5.01, 10.1, 2.01));
        let total = total.rounded();

        assert_eq!(total.calories, 500.0);
        assert_eq!(total.protein, 15.2);
        assert_eq!(total.carbs, 30.3);
        assert_eq!(total.fat, 7.3);
    }

    #[test]
    fn test_scaled_to() {
        let per_100g = NutritionInfo::new(100.0, 10.0, 20.0, 5.0);
        let portion = per_100g.scaled_to(150.0);
        assert_eq!(portion.calories, 150.0);
        assert_eq!(portion.protein, 15.0);
    }

    #[test]
    fn test_default_goals() {
        let goals = NutritionGoals::default();
        assert_eq!(goals.calories, 2500.0);
        assert_eq!(goals.protein, 150.0);
        assert_eq!(goals.carbs, 300.0);
        assert_eq!(goals.fat, 70.0);
    }

    #[test]
    fn test_logged_food_json_field_names() {
        let food = LoggedFood {
            food_id: "ugali".to_string(),
            food_name: "Ugali".to_string(),
            serving_size: ServingSize::new("1 cup", 150.0),
            quantity: 1.0,
            nutrition: NutritionInfo::new(165.0, 3.6, 36.5, 0.8),
        };

        let json = serde_json::to_string(&food).unwrap();
        assert!(json.contains("\"foodId\""));
        assert!(json.contains("\"servingSize\""));

        let parsed: LoggedFood = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, food);
    }
}
