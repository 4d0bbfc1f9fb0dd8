//! Static exercise catalog. Every entry carries a stable slug id;
//! completion records key on the slug, so display names can change
//! without orphaning history.

use serde::Serialize;

use crate::models::Reps;

#[derive(Debug, Clone, Serialize)]
pub struct ExerciseEntry {
    /// Stable slug, assigned once.
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub default_sets: u32,
    pub default_reps: Reps,
}

pub fn exercise_catalog() -> Vec<ExerciseEntry> {
    vec![
        ExerciseEntry {
            id: "push-ups",
            name: "Push-ups",
            category: "Strength",
            default_sets: 3,
            default_reps: Reps::Count(15),
        },
        ExerciseEntry {
            id: "squats",
            name: "Squats",
            category: "Strength",
            default_sets: 3,
            default_reps: Reps::Count(20),
        },
        ExerciseEntry {
            id: "lunges",
            name: "Lunges",
            category: "Strength",
            default_sets: 3,
            default_reps: Reps::Text("12 each leg".to_string()),
        },
        ExerciseEntry {
            id: "plank",
            name: "Plank",
            category: "Strength",
            default_sets: 3,
            default_reps: Reps::Text("45 seconds".to_string()),
        },
        ExerciseEntry {
            id: "burpees",
            name: "Burpees",
            category: "Cardio",
            default_sets: 3,
            default_reps: Reps::Count(10),
        },
        ExerciseEntry {
            id: "jumping-jacks",
            name: "Jumping Jacks",
            category: "Cardio",
            default_sets: 3,
            default_reps: Reps::Count(30),
        },
        ExerciseEntry {
            id: "glute-bridges",
            name: "Glute Bridges",
            category: "Strength",
            default_sets: 3,
            default_reps: Reps::Count(15),
        },
        ExerciseEntry {
            id: "mountain-climbers",
            name: "Mountain Climbers",
            category: "Cardio",
            default_sets: 3,
            default_reps: Reps::Text("20 each side".to_string()),
        },
    ]
}

pub fn find_exercise<'a>(catalog: &'a [ExerciseEntry], id: &str) -> Option<&'a ExerciseEntry> {
    catalog.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique_and_lowercase() {
        let catalog = exercise_catalog();
        for (i, exercise) in catalog.iter().enumerate() {
            assert!(catalog.iter().skip(i + 1).all(|e| e.id != exercise.id));
            assert_eq!(exercise.id, exercise.id.to_lowercase());
            assert!(!exercise.id.contains(' '));
        }
    }

    #[test]
    fn test_find_exercise() {
        let catalog = exercise_catalog();
        assert_eq!(find_exercise(&catalog, "plank").unwrap().name, "Plank");
        assert!(find_exercise(&catalog, "deadlift").is_none());
    }
}
