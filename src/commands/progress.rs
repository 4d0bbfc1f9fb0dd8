use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use uuid::Uuid;

use super::OutputFormat;
use crate::models::{Measurements, ProgressEntry};
use crate::tracking::{MealTracker, ProgressTracker};

#[derive(Args)]
pub struct ProgressCommand {
    #[command(subcommand)]
    pub command: ProgressSubcommand,
}

#[derive(Subcommand)]
pub enum ProgressSubcommand {
    /// Add a progress entry
    Add {
        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Waist measurement in cm
        #[arg(long)]
        waist: Option<f64>,

        /// Chest measurement in cm
        #[arg(long)]
        chest: Option<f64>,

        /// Hips measurement in cm
        #[arg(long)]
        hips: Option<f64>,

        /// Add notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show progress statistics
    Stats,

    /// Show weight history
    History {
        /// Number of days to include
        #[arg(long, default_value = "30")]
        days: u32,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show calorie/protein trends from the meal log
    Trends {
        /// Number of days to include
        #[arg(long, default_value = "7")]
        days: u32,
    },

    /// Delete a progress entry by ID
    Delete {
        /// Entry ID (UUID)
        id: String,
    },

    /// Delete all progress data
    Clear,
}

impl ProgressCommand {
    pub async fn run(
        &self,
        tracker: &ProgressTracker,
        meals: &MealTracker,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProgressSubcommand::Add {
                weight,
                date,
                waist,
                chest,
                hips,
                notes,
            } => {
                let entry_date = match date {
                    Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
                        .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", d))?,
                    None => Local::now().date_naive(),
                };

                let mut entry = ProgressEntry::new(entry_date, *weight);
                if waist.is_some() || chest.is_some() || hips.is_some() {
                    entry = entry.with_measurements(Measurements {
                        waist: *waist,
                        chest: *chest,
                        hips: *hips,
                        ..Measurements::default()
                    });
                }
                if let Some(n) = notes {
                    entry = entry.with_notes(n);
                }

                let saved = tracker.save_progress_entry(entry).await?;
                println!("Recorded {:.1} kg on {}", saved.weight, saved.date);
                println!("Entry ID: {}", saved.id);
                Ok(())
            }
            ProgressSubcommand::Stats => {
                let stats = tracker.progress_stats().await?;
                if stats.total_entries == 0 {
                    println!("No progress entries yet");
                } else {
                    println!("{}", stats);
                }
                Ok(())
            }
            ProgressSubcommand::History { days, format } => {
                let history = tracker.weight_history(*days).await?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&history)?)
                    }
                    OutputFormat::Text => {
                        if history.is_empty() {
                            println!("No entries in the last {} days", days);
                            return Ok(());
                        }
                        for point in &history {
                            println!("{}  {:.1} kg", point.date, point.weight);
                        }
                    }
                }
                Ok(())
            }
            ProgressSubcommand::Trends { days } => {
                let trends = tracker.nutrition_trends(meals, *days).await?;
                for point in &trends {
                    println!(
                        "{}  {:>4.0} kcal  P {:.1}g",
                        point.date, point.calories, point.protein
                    );
                }
                Ok(())
            }
            ProgressSubcommand::Delete { id } => {
                let uuid = Uuid::parse_str(id).map_err(|_| format!("Invalid entry ID: {}", id))?;
                if tracker.delete_progress_entry(uuid).await? {
                    println!("Deleted entry {}", id);
                } else {
                    println!("No entry with ID {}", id);
                }
                Ok(())
            }
            ProgressSubcommand::Clear => {
                tracker.clear_all_progress().await?;
                println!("All progress data deleted");
                Ok(())
            }
        }
    }
}
