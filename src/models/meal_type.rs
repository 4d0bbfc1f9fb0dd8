use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Variant names match the strings in persisted meal logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "Breakfast"),
            MealType::Lunch => write!(f, "Lunch"),
            MealType::Dinner => write!(f, "Dinner"),
            MealType::Snacks => write!(f, "Snacks"),
        }
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" | "snacks" => Ok(MealType::Snacks),
            _ => Err(format!(
                "Invalid meal type '{}'. Valid options: breakfast, lunch, dinner, snacks",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_display() {
        assert_eq!(format!("{}", MealType::Breakfast), "Breakfast");
        assert_eq!(format!("{}", MealType::Snacks), "Snacks");
    }

    #[test]
    fn test_meal_type_from_str() {
        assert_eq!(
            MealType::from_str("breakfast").unwrap(),
            MealType::Breakfast
        );
        assert_eq!(MealType::from_str("LUNCH").unwrap(), MealType::Lunch);
        assert_eq!(MealType::from_str("Dinner").unwrap(), MealType::Dinner);
        assert_eq!(MealType::from_str("snack").unwrap(), MealType::Snacks);
        assert_eq!(MealType::from_str("snacks").unwrap(), MealType::Snacks);
    }

    #[test]
    fn test_meal_type_from_str_invalid() {
        assert!(MealType::from_str("brunch").is_err());
        assert!(MealType::from_str("").is_err());
    }

    #[test]
    fn test_meal_type_json_roundtrip() {
        let json = serde_json::to_string(&MealType::Snacks).unwrap();
        assert_eq!(json, "\"Snacks\"");

        let parsed: MealType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MealType::Snacks);
    }
}
