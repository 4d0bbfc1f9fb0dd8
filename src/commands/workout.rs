use chrono::{NaiveDate, TimeZone, Utc};
use clap::{Args, Subcommand};
use uuid::Uuid;

use super::OutputFormat;
use crate::data::{find_exercise, ExerciseEntry};
use crate::models::Reps;
use crate::tracking::WorkoutTracker;

#[derive(Args)]
pub struct WorkoutCommand {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

#[derive(Subcommand)]
pub enum WorkoutSubcommand {
    /// Log a completed exercise
    Log {
        /// Exercise ID (slug), see 'workout exercises'
        exercise: String,

        /// Sets completed (defaults to the catalog value)
        #[arg(long)]
        sets: Option<u32>,

        /// Reps completed, a number or free text like "12 each leg"
        #[arg(long)]
        reps: Option<String>,

        /// Duration in seconds
        #[arg(long)]
        duration: Option<u32>,

        /// Add notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show today's completed workouts
    Today,

    /// Show workout statistics
    Stats,

    /// Show the current workout streak
    Streak,

    /// Show workout history for a date range
    History {
        /// Start date (YYYY-MM-DD), defaults to 7 days ago
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        to: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete a completed workout by ID
    Delete {
        /// Workout ID (UUID)
        id: String,
    },

    /// Delete all workout history
    Clear,

    /// List catalog exercises
    Exercises,
}

impl WorkoutCommand {
    pub async fn run(
        &self,
        tracker: &WorkoutTracker,
        catalog: &[ExerciseEntry],
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            WorkoutSubcommand::Log {
                exercise,
                sets,
                reps,
                duration,
                notes,
            } => {
                let entry = find_exercise(catalog, exercise).ok_or_else(|| {
                    format!("Exercise not found: {}. See 'workout exercises'.", exercise)
                })?;

                let sets = sets.unwrap_or(entry.default_sets);
                let reps = match reps {
                    Some(r) => match r.parse::<u32>() {
                        Ok(n) => Reps::Count(n),
                        Err(_) => Reps::Text(r.clone()),
                    },
                    None => entry.default_reps.clone(),
                };

                let workout = tracker
                    .save_completed_workout(
                        entry.id,
                        entry.name,
                        sets,
                        reps,
                        *duration,
                        notes.clone(),
                    )
                    .await?;

                println!("Logged: {}", workout);
                println!("Workout ID: {}", workout.id);
                Ok(())
            }
            WorkoutSubcommand::Today => {
                let today = tracker.today_completed_workouts().await?;
                if today.is_empty() {
                    println!("No workouts completed today");
                } else {
                    for workout in &today {
                        println!("{}", workout);
                    }
                    println!("\nTotal: {} exercise(s)", today.len());
                }
                Ok(())
            }
            WorkoutSubcommand::Stats => {
                let stats = tracker.workout_stats().await?;
                println!("{}", stats);
                Ok(())
            }
            WorkoutSubcommand::Streak => {
                let streak = tracker.workout_streak().await?;
                println!("Current streak: {} day(s)", streak);
                Ok(())
            }
            WorkoutSubcommand::History { from, to, format } => {
                let today = chrono::Local::now().date_naive();
                let to_date = match to {
                    Some(d) => parse_date(d)?,
                    None => today,
                };
                let from_date = match from {
                    Some(d) => parse_date(d)?,
                    None => to_date - chrono::Duration::days(7),
                };

                let history = tracker
                    .workout_history(
                        day_start(from_date),
                        day_start(to_date + chrono::Duration::days(1)),
                    )
                    .await?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&history)?)
                    }
                    OutputFormat::Text => {
                        if history.is_empty() {
                            println!("No workouts found for {} to {}", from_date, to_date);
                            return Ok(());
                        }
                        for workout in &history {
                            println!("{}  {}", workout.date.format("%Y-%m-%d %H:%M"), workout);
                        }
                        println!("\nTotal: {} exercise(s)", history.len());
                    }
                }
                Ok(())
            }
            WorkoutSubcommand::Delete { id } => {
                let uuid =
                    Uuid::parse_str(id).map_err(|_| format!("Invalid workout ID: {}", id))?;
                if tracker.delete_completed_workout(uuid).await? {
                    println!("Deleted workout {}", id);
                } else {
                    println!("No workout with ID {}", id);
                }
                Ok(())
            }
            WorkoutSubcommand::Clear => {
                tracker.clear_all_workouts().await?;
                println!("All workout history deleted");
                Ok(())
            }
            WorkoutSubcommand::Exercises => {
                for entry in catalog {
                    println!(
                        "{:20} {:10} {} sets x {} reps",
                        entry.id, entry.category, entry.default_sets, entry.default_reps
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

fn day_start(date: NaiveDate) -> chrono::DateTime<Utc> {
    let midnight = date.and_time(chrono::NaiveTime::MIN);
    chrono::Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}
