//! CLI subcommand handlers. Thin wrappers that parse arguments, call
//! the tracking services and print results.

pub mod meal;
pub mod plan;
pub mod progress;
pub mod workout;

pub use meal::MealCommand;
pub use plan::PlanCommand;
pub use progress::ProgressCommand;
pub use workout::WorkoutCommand;

use clap::ValueEnum;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
