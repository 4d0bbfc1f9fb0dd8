//! Static food table. Nutrition values are per 100 g; portions are
//! computed at logging time and stored on the log.

use serde::Serialize;
use std::fmt;

use crate::models::{LoggedFood, NutritionInfo, ServingSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FoodCategory {
    Staples,
    Proteins,
    Vegetables,
    Fruits,
    Snacks,
    Beverages,
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoodCategory::Staples => write!(f, "Staples"),
            FoodCategory::Proteins => write!(f, "Proteins"),
            FoodCategory::Vegetables => write!(f, "Vegetables"),
            FoodCategory::Fruits => write!(f, "Fruits"),
            FoodCategory::Snacks => write!(f, "Snacks"),
            FoodCategory::Beverages => write!(f, "Beverages"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: FoodCategory,
    /// Per 100 g.
    pub nutrition: NutritionInfo,
    pub serving_sizes: Vec<ServingSize>,
    /// Index into `serving_sizes`.
    pub default_serving: usize,
}

impl FoodItem {
    /// Computes a logged portion: per-100g nutrition scaled by serving
    /// grams and quantity, rounded. `None` if the serving index is out
    /// of range.
    pub fn logged_food(&self, serving_index: usize, quantity: f64) -> Option<LoggedFood> {
        let serving = self.serving_sizes.get(serving_index)?;
        let nutrition = self
            .nutrition
            .scaled_to(serving.grams * quantity)
            .rounded();
        Some(LoggedFood {
            food_id: self.id.to_string(),
            food_name: self.name.to_string(),
            serving_size: serving.clone(),
            quantity,
            nutrition,
        })
    }
}

pub fn food_catalog() -> Vec<FoodItem> {
    vec![
        FoodItem {
            id: "ugali",
            name: "Ugali",
            category: FoodCategory::Staples,
            nutrition: NutritionInfo::new(110.0, 2.4, 24.3, 0.5),
            serving_sizes: vec![
                ServingSize::new("1 cup", 150.0),
                ServingSize::new("1 slice", 100.0),
            ],
            default_serving: 0,
        },
        FoodItem {
            id: "white-rice",
            name: "White Rice",
            category: FoodCategory::Staples,
            nutrition: NutritionInfo::new(130.0, 2.7, 28.2, 0.3),
            serving_sizes: vec![
                ServingSize::new("1 cup", 160.0),
                ServingSize::new("1/2 cup", 80.0),
            ],
            default_serving: 0,
        },
        FoodItem {
            id: "beans",
            name: "Beans",
            category: FoodCategory::Proteins,
            nutrition: NutritionInfo::new(127.0, 8.7, 22.8, 0.5),
            serving_sizes: vec![ServingSize::new("1 cup", 170.0)],
            default_serving: 0,
        },
        FoodItem {
            id: "chicken-breast",
            name: "Chicken Breast",
            category: FoodCategory::Proteins,
            nutrition: NutritionInfo::new(165.0, 31.0, 0.0, 3.6),
            serving_sizes: vec![
                ServingSize::new("1 piece", 120.0),
                ServingSize::new("100g", 100.0),
            ],
            default_serving: 0,
        },
        FoodItem {
            id: "eggs",
            name: "Eggs",
            category: FoodCategory::Proteins,
            nutrition: NutritionInfo::new(155.0, 13.0, 1.1, 11.0),
            serving_sizes: vec![
                ServingSize::new("1 egg", 50.0),
                ServingSize::new("2 eggs", 100.0),
            ],
            default_serving: 0,
        },
        FoodItem {
            id: "sukuma-wiki",
            name: "Sukuma Wiki",
            category: FoodCategory::Vegetables,
            nutrition: NutritionInfo::new(35.0, 2.9, 5.6, 0.6),
            serving_sizes: vec![ServingSize::new("1 cup", 130.0)],
            default_serving: 0,
        },
        FoodItem {
            id: "banana",
            name: "Banana",
            category: FoodCategory::Fruits,
            nutrition: NutritionInfo::new(89.0, 1.1, 22.8, 0.3),
            serving_sizes: vec![ServingSize::new("1 medium", 118.0)],
            default_serving: 0,
        },
        FoodItem {
            id: "whole-milk",
            name: "Whole Milk",
            category: FoodCategory::Beverages,
            nutrition: NutritionInfo::new(61.0, 3.2, 4.8, 3.3),
            serving_sizes: vec![ServingSize::new("1 glass", 250.0)],
            default_serving: 0,
        },
        FoodItem {
            id: "groundnuts",
            name: "Groundnuts",
            category: FoodCategory::Snacks,
            nutrition: NutritionInfo::new(567.0, 25.8, 16.1, 49.2),
            serving_sizes: vec![ServingSize::new("1 handful", 30.0)],
            default_serving: 0,
        },
    ]
}

/// Looks up a catalog food by id.
pub fn find_food<'a>(catalog: &'a [FoodItem], id: &str) -> Option<&'a FoodItem> {
    catalog.iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = food_catalog();
        for (i, food) in catalog.iter().enumerate() {
            assert!(
                catalog.iter().skip(i + 1).all(|f| f.id != food.id),
                "duplicate food id {}",
                food.id
            );
            assert!(food.default_serving < food.serving_sizes.len());
        }
    }

    #[test]
    fn test_portion_math() {
        let food = FoodItem {
            id: "test",
            name: "Test Food",
            category: FoodCategory::Staples,
            nutrition: NutritionInfo::new(100.0, 10.0, 20.0, 5.0),
            serving_sizes: vec![ServingSize::new("1 cup", 150.0)],
            default_serving: 0,
        };

        // 150g serving, quantity 2 => 300g => 3x per-100g values.
        let logged = food.logged_food(0, 2.0).unwrap();
        assert_eq!(logged.nutrition.calories, 300.0);
        assert_eq!(logged.nutrition.protein, 30.0);
        assert_eq!(logged.nutrition.carbs, 60.0);
        assert_eq!(logged.nutrition.fat, 15.0);
        assert_eq!(logged.quantity, 2.0);
    }

    #[test]
    fn test_out_of_range_serving() {
        let catalog = food_catalog();
        assert!(catalog[0].logged_food(99, 1.0).is_none());
    }

    #[test]
    fn test_find_food() {
        let catalog = food_catalog();
        assert_eq!(find_food(&catalog, "ugali").unwrap().name, "Ugali");
        assert!(find_food(&catalog, "pizza").is_none());
    }
}
