//! Static weekly meal plan catalog. Plans are selected by id and never
//! edited; each carries one entry per weekday.

use std::sync::Arc;

use crate::models::{DailyMealPlan, PlannedMeal, WeeklyMealPlan};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn meal(name: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> PlannedMeal {
    PlannedMeal::new(name, calories, protein, carbs, fats)
}

fn day(
    name: &str,
    breakfast: PlannedMeal,
    lunch: PlannedMeal,
    snack: PlannedMeal,
    dinner: PlannedMeal,
) -> DailyMealPlan {
    DailyMealPlan {
        day: name.to_string(),
        breakfast,
        lunch,
        snack,
        dinner,
    }
}

fn muscle_gain_plan() -> WeeklyMealPlan {
    let breakfasts = [
        meal("Oats with whole milk and banana", 520.0, 20.0, 80.0, 14.0),
        meal("Eggs with chapati and tea", 560.0, 24.0, 58.0, 24.0),
        meal("Millet porridge with groundnuts", 480.0, 16.0, 70.0, 16.0),
        meal("Eggs with sweet potato", 500.0, 22.0, 56.0, 18.0),
        meal("Oats with whole milk and banana", 520.0, 20.0, 80.0, 14.0),
        meal("Pancakes with honey and milk", 580.0, 18.0, 90.0, 16.0),
        meal("Eggs with chapati and tea", 560.0, 24.0, 58.0, 24.0),
    ];
    let lunches = [
        meal("Ugali with beans and sukuma wiki", 680.0, 28.0, 110.0, 12.0),
        meal("Rice with chicken and vegetables", 720.0, 42.0, 85.0, 18.0),
        meal("Githeri with avocado", 700.0, 26.0, 105.0, 20.0),
        meal("Ugali with beef stew", 740.0, 40.0, 90.0, 22.0),
        meal("Rice with beans and cabbage", 660.0, 24.0, 112.0, 10.0),
        meal("Pilau with chicken", 760.0, 38.0, 95.0, 22.0),
        meal("Ugali with fish and greens", 700.0, 44.0, 82.0, 18.0),
    ];
    let snacks = [
        meal("Groundnuts and banana", 320.0, 10.0, 35.0, 16.0),
        meal("Boiled eggs", 160.0, 13.0, 1.0, 11.0),
        meal("Milk with sweet banana", 280.0, 10.0, 42.0, 8.0),
        meal("Groundnuts and banana", 320.0, 10.0, 35.0, 16.0),
        meal("Yogurt with fruit", 240.0, 11.0, 36.0, 6.0),
        meal("Boiled maize", 220.0, 7.0, 45.0, 3.0),
        meal("Milk with sweet banana", 280.0, 10.0, 42.0, 8.0),
    ];
    let dinners = [
        meal("Rice with beef and carrots", 700.0, 38.0, 88.0, 20.0),
        meal("Ugali with beans and greens", 640.0, 26.0, 104.0, 10.0),
        meal("Chapati with chicken stew", 720.0, 36.0, 84.0, 24.0),
        meal("Rice with fish and vegetables", 680.0, 40.0, 80.0, 18.0),
        meal("Ugali with beef and sukuma wiki", 720.0, 40.0, 86.0, 22.0),
        meal("Rice with beans and avocado", 680.0, 24.0, 108.0, 18.0),
        meal("Chapati with beans and greens", 660.0, 24.0, 102.0, 16.0),
    ];

    let meals = WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            day(
                name,
                breakfasts[i].clone(),
                lunches[i].clone(),
                snacks[i].clone(),
                dinners[i].clone(),
            )
        })
        .collect();

    WeeklyMealPlan {
        id: "muscle-gain".to_string(),
        name: "Muscle Gain".to_string(),
        goal: "Build muscle mass".to_string(),
        duration: "8 weeks".to_string(),
        daily_calories: 2800.0,
        meals,
    }
}

fn lean_plan() -> WeeklyMealPlan {
    let breakfasts = [
        meal("Eggs with vegetables", 320.0, 20.0, 12.0, 20.0),
        meal("Millet porridge", 300.0, 10.0, 54.0, 5.0),
        meal("Eggs with vegetables", 320.0, 20.0, 12.0, 20.0),
        meal("Yogurt with fruit", 260.0, 12.0, 40.0, 5.0),
        meal("Millet porridge", 300.0, 10.0, 54.0, 5.0),
        meal("Eggs with fruit", 300.0, 18.0, 24.0, 14.0),
        meal("Yogurt with fruit", 260.0, 12.0, 40.0, 5.0),
    ];
    let lunches = [
        meal("Chicken with steamed vegetables", 460.0, 40.0, 28.0, 16.0),
        meal("Beans with cabbage and a little rice", 480.0, 22.0, 72.0, 8.0),
        meal("Fish with greens", 440.0, 42.0, 20.0, 18.0),
        meal("Chicken with steamed vegetables", 460.0, 40.0, 28.0, 16.0),
        meal("Lentils with vegetables", 440.0, 24.0, 66.0, 6.0),
        meal("Fish with greens", 440.0, 42.0, 20.0, 18.0),
        meal("Beans with cabbage and a little rice", 480.0, 22.0, 72.0, 8.0),
    ];
    let snacks = [
        meal("Fruit", 120.0, 1.0, 30.0, 0.5),
        meal("Boiled egg", 80.0, 6.5, 0.5, 5.5),
        meal("Groundnuts (small)", 170.0, 7.5, 5.0, 14.0),
        meal("Fruit", 120.0, 1.0, 30.0, 0.5),
        meal("Boiled egg", 80.0, 6.5, 0.5, 5.5),
        meal("Fruit", 120.0, 1.0, 30.0, 0.5),
        meal("Groundnuts (small)", 170.0, 7.5, 5.0, 14.0),
    ];
    let dinners = [
        meal("Vegetable stew with a little ugali", 420.0, 16.0, 64.0, 10.0),
        meal("Chicken with sukuma wiki", 440.0, 38.0, 22.0, 18.0),
        meal("Beans with greens", 420.0, 20.0, 62.0, 8.0),
        meal("Fish with vegetables", 430.0, 40.0, 20.0, 18.0),
        meal("Vegetable stew with a little ugali", 420.0, 16.0, 64.0, 10.0),
        meal("Chicken with sukuma wiki", 440.0, 38.0, 22.0, 18.0),
        meal("Beans with greens", 420.0, 20.0, 62.0, 8.0),
    ];

    let meals = WEEKDAYS
        .iter()
        .enumerate()
        .map(|(i, &name)| {
            day(
                name,
                breakfasts[i].clone(),
                lunches[i].clone(),
                snacks[i].clone(),
                dinners[i].clone(),
            )
        })
        .collect();

    WeeklyMealPlan {
        id: "lean".to_string(),
        name: "Lean & Fit".to_string(),
        goal: "Lose fat, keep muscle".to_string(),
        duration: "8 weeks".to_string(),
        daily_calories: 1900.0,
        meals,
    }
}

pub fn meal_plan_catalog() -> Arc<[WeeklyMealPlan]> {
    Arc::from(vec![muscle_gain_plan(), lean_plan()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = meal_plan_catalog();
        assert_eq!(catalog.len(), 2);

        for plan in catalog.iter() {
            assert_eq!(plan.meals.len(), 7, "plan {} must cover the week", plan.id);
            for (daily, expected) in plan.meals.iter().zip(WEEKDAYS) {
                assert_eq!(daily.day, expected);
            }
        }
    }

    #[test]
    fn test_plan_ids_are_unique() {
        let catalog = meal_plan_catalog();
        assert_ne!(catalog[0].id, catalog[1].id);
    }

    #[test]
    fn test_weekday_names_match_chrono() {
        use chrono::NaiveDate;
        // 2024-01-01 was a Monday.
        for (offset, expected) in WEEKDAYS.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1 + offset as u32).unwrap();
            assert_eq!(date.format("%A").to_string(), *expected);
        }
    }
}
