//! Static catalogs: foods, exercises and weekly meal plans.
//!
//! Catalogs are plain data handed to services and commands at
//! construction, never ambient globals, so tests can substitute
//! synthetic ones.

pub mod exercises;
pub mod foods;
pub mod meal_plans;

pub use exercises::{exercise_catalog, find_exercise, ExerciseEntry};
pub use foods::{find_food, food_catalog, FoodCategory, FoodItem};
pub use meal_plans::meal_plan_catalog;
