use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use fittrack::commands::{MealCommand, PlanCommand, ProgressCommand, WorkoutCommand};
use fittrack::config::Config;
use fittrack::data::{exercise_catalog, food_catalog, meal_plan_catalog};
use fittrack::storage::FileStore;
use fittrack::tracking::{MealTracker, PlanSelector, ProgressTracker, WorkoutTracker};

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(version)]
#[command(about = "Local-first fitness and nutrition tracking", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log meals and track nutrition
    Meal(MealCommand),

    /// Log workouts and track streaks
    Workout(WorkoutCommand),

    /// Track weight and body measurements
    Progress(ProgressCommand),

    /// Select and view weekly meal plans
    Plan(PlanCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack=warn".into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    let store = Arc::new(FileStore::new(config.data_dir.value.clone()));

    match cli.command {
        Some(Commands::Meal(cmd)) => {
            let tracker = MealTracker::new(store);
            cmd.run(&tracker, &food_catalog()).await?;
        }
        Some(Commands::Workout(cmd)) => {
            let tracker = WorkoutTracker::new(store);
            cmd.run(&tracker, &exercise_catalog()).await?;
        }
        Some(Commands::Progress(cmd)) => {
            let tracker = ProgressTracker::new(store.clone());
            let meals = MealTracker::new(store);
            cmd.run(&tracker, &meals).await?;
        }
        Some(Commands::Plan(cmd)) => {
            let selector = PlanSelector::new(store, meal_plan_catalog());
            cmd.run(&selector).await?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
