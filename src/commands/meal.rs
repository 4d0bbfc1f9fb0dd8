use chrono::NaiveDate;
use clap::{Args, Subcommand};
use uuid::Uuid;

use super::OutputFormat;
use crate::data::{find_food, FoodItem};
use crate::models::{LoggedFood, MealType, NutritionGoals};
use crate::tracking::MealTracker;

#[derive(Args)]
pub struct MealCommand {
    #[command(subcommand)]
    pub command: MealSubcommand,
}

#[derive(Subcommand)]
pub enum MealSubcommand {
    /// Log a meal from catalog foods
    Log {
        /// Meal type (breakfast, lunch, dinner, snacks)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        meal_type: String,

        /// Food to log as ID[=QUANTITY], e.g. "ugali" or "eggs=2"
        /// (can be repeated)
        #[arg(long = "food", value_name = "FOOD", required = true)]
        foods: Vec<String>,

        /// Add notes to the log
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show today's meals and nutrition vs goals
    Today {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the last 7 days of nutrition
    Week,

    /// Show nutrition goals
    Goals,

    /// Set nutrition goals
    SetGoals {
        #[arg(long)]
        calories: f64,
        #[arg(long)]
        protein: f64,
        #[arg(long)]
        carbs: f64,
        #[arg(long)]
        fat: f64,
    },

    /// Delete a meal log by ID
    Delete {
        /// Meal log ID (UUID)
        id: String,
    },

    /// List catalog foods
    Foods,
}

impl MealCommand {
    pub async fn run(
        &self,
        tracker: &MealTracker,
        catalog: &[FoodItem],
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            MealSubcommand::Log {
                meal_type,
                foods,
                notes,
            } => {
                let parsed_type: MealType = meal_type.parse().map_err(|e: String| e)?;
                let logged = resolve_foods(catalog, foods)?;

                let log = tracker
                    .save_meal_log(parsed_type, logged, notes.clone())
                    .await?;

                println!("Logged {}:", log.meal_type);
                println!("{}", log);
                println!("Log ID: {}", log.id);
                Ok(())
            }
            MealSubcommand::Today { date, format } => {
                let target = match date {
                    Some(d) => Some(parse_date(d)?),
                    None => None,
                };
                let daily = tracker.daily_nutrition(target).await?;

                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&daily)?),
                    OutputFormat::Text => {
                        println!("{}", daily.date);
                        println!("{}", "-".repeat(10));
                        if daily.meals.is_empty() {
                            println!("No meals logged");
                        }
                        for meal in &daily.meals {
                            print!("{}", meal);
                        }
                        println!("Total: {}", daily.total_nutrition);
                        println!("Goal:  {}", daily.goal_nutrition);
                    }
                }
                Ok(())
            }
            MealSubcommand::Week => {
                let week = tracker.weekly_nutrition().await?;
                for daily in &week {
                    println!(
                        "{}  {:>4.0} kcal  ({} meal(s))",
                        daily.date,
                        daily.total_nutrition.calories,
                        daily.meals.len()
                    );
                }
                Ok(())
            }
            MealSubcommand::Goals => {
                let goals = tracker.nutrition_goals().await?;
                println!("Goals: {}", goals);
                Ok(())
            }
            MealSubcommand::SetGoals {
                calories,
                protein,
                carbs,
                fat,
            } => {
                let goals = NutritionGoals {
                    calories: *calories,
                    protein: *protein,
                    carbs: *carbs,
                    fat: *fat,
                };
                tracker.set_nutrition_goals(goals).await?;
                println!("Goals updated: {}", goals);
                Ok(())
            }
            MealSubcommand::Delete { id } => {
                let uuid =
                    Uuid::parse_str(id).map_err(|_| format!("Invalid meal log ID: {}", id))?;
                if tracker.delete_meal_log(uuid).await? {
                    println!("Deleted meal log {}", id);
                } else {
                    println!("No meal log with ID {}", id);
                }
                Ok(())
            }
            MealSubcommand::Foods => {
                for food in catalog {
                    println!(
                        "{:18} {:10} {} (per 100g)",
                        food.id, food.category, food.nutrition
                    );
                }
                Ok(())
            }
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", s))
}

/// Resolves "id" or "id=quantity" references against the food catalog.
fn resolve_foods(
    catalog: &[FoodItem],
    refs: &[String],
) -> Result<Vec<LoggedFood>, Box<dyn std::error::Error>> {
    let mut logged = Vec::with_capacity(refs.len());
    for food_ref in refs {
        let (id, quantity) = match food_ref.split_once('=') {
            Some((id, qty)) => {
                let quantity: f64 = qty
                    .parse()
                    .map_err(|_| format!("Invalid quantity in '{}'", food_ref))?;
                (id, quantity)
            }
            None => (food_ref.as_str(), 1.0),
        };

        let food = find_food(catalog, id)
            .ok_or_else(|| format!("Food not found: {}. See 'meal foods'.", id))?;
        let item = food
            .logged_food(food.default_serving, quantity)
            .ok_or_else(|| format!("Food {} has no serving sizes", id))?;
        logged.push(item);
    }
    Ok(logged)
}
