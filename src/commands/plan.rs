use clap::{Args, Subcommand};

use crate::tracking::PlanSelector;

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// List available meal plans
    List,

    /// Select the active meal plan
    Select {
        /// Plan ID, see 'plan list'
        id: String,
    },

    /// Show today's planned meals
    Today,

    /// Show the active plan and setup status
    Status,

    /// Mark setup as complete
    CompleteSetup,
}

impl PlanCommand {
    pub async fn run(&self, selector: &PlanSelector) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PlanSubcommand::List => {
                for plan in selector.available_plans() {
                    println!(
                        "{:14} {} - {} ({:.0} kcal/day, {})",
                        plan.id, plan.name, plan.goal, plan.daily_calories, plan.duration
                    );
                }
                Ok(())
            }
            PlanSubcommand::Select { id } => {
                selector.save_meal_plan(id).await?;
                match selector.active_meal_plan().await? {
                    Some(plan) => println!("Active plan: {}", plan.name),
                    None => println!(
                        "Saved plan ID '{}', but it matches no catalog plan. See 'plan list'.",
                        id
                    ),
                }
                Ok(())
            }
            PlanSubcommand::Today => {
                match selector.today_planned_meals().await? {
                    Some(daily) => println!("{}", daily),
                    None => println!("No active meal plan. Select one with 'plan select'."),
                }
                Ok(())
            }
            PlanSubcommand::Status => {
                match selector.active_meal_plan().await? {
                    Some(plan) => println!("Active plan: {} ({})", plan.name, plan.id),
                    None => println!("Active plan: none"),
                }
                let setup = selector.is_setup_complete().await?;
                println!("Setup complete: {}", setup);
                Ok(())
            }
            PlanSubcommand::CompleteSetup => {
                selector.complete_setup().await?;
                println!("Setup marked complete");
                Ok(())
            }
        }
    }
}
