//! Meal plan selection and the setup flag.
//!
//! Only the selected plan id and the setup flag are persisted; plan
//! bodies come from the injected read-only catalog.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::debug;

use super::TrackingError;
use crate::models::{DailyMealPlan, WeeklyMealPlan};
use crate::storage::KvStore;

const ACTIVE_MEAL_PLAN_KEY: &str = "@active_meal_plan";
const SETUP_COMPLETE_KEY: &str = "@setup_complete";

pub struct PlanSelector {
    store: Arc<dyn KvStore>,
    catalog: Arc<[WeeklyMealPlan]>,
}

impl PlanSelector {
    pub fn new(store: Arc<dyn KvStore>, catalog: Arc<[WeeklyMealPlan]>) -> Self {
        Self { store, catalog }
    }

    /// The injected plan catalog, read-only.
    pub fn available_plans(&self) -> &[WeeklyMealPlan] {
        &self.catalog
    }

    /// Persists the selected plan id. The id is not validated against
    /// the catalog; an unknown id simply resolves to no active plan.
    pub async fn save_meal_plan(&self, plan_id: &str) -> Result<(), TrackingError> {
        self.store.set(ACTIVE_MEAL_PLAN_KEY, plan_id).await?;
        debug!(plan_id, "selected meal plan");
        Ok(())
    }

    /// Resolves the stored plan id against the catalog. `None` when no
    /// id is stored or the id is unknown.
    pub async fn active_meal_plan(&self) -> Result<Option<WeeklyMealPlan>, TrackingError> {
        let Some(plan_id) = self.store.get(ACTIVE_MEAL_PLAN_KEY).await? else {
            return Ok(None);
        };
        Ok(self.catalog.iter().find(|p| p.id == plan_id).cloned())
    }

    /// The active plan's entry for today's weekday.
    pub async fn today_planned_meals(&self) -> Result<Option<DailyMealPlan>, TrackingError> {
        self.planned_meals_on(Local::now().date_naive()).await
    }

    pub async fn planned_meals_on(
        &self,
        date: NaiveDate,
    ) -> Result<Option<DailyMealPlan>, TrackingError> {
        let Some(plan) = self.active_meal_plan().await? else {
            return Ok(None);
        };
        let weekday = date.format("%A").to_string();
        Ok(plan.day(&weekday).cloned())
    }

    /// True only when the stored flag is the literal string "true".
    pub async fn is_setup_complete(&self) -> Result<bool, TrackingError> {
        Ok(self.store.get(SETUP_COMPLETE_KEY).await?.as_deref() == Some("true"))
    }

    /// Marks setup complete. There is no reverse transition.
    pub async fn complete_setup(&self) -> Result<(), TrackingError> {
        self.store.set(SETUP_COMPLETE_KEY, "true").await?;
        debug!("setup marked complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::meal_plan_catalog;
    use crate::storage::MemoryStore;

    fn selector() -> PlanSelector {
        PlanSelector::new(Arc::new(MemoryStore::new()), meal_plan_catalog())
    }

    #[tokio::test]
    async fn test_no_plan_selected() {
        let selector = selector();
        assert!(selector.active_meal_plan().await.unwrap().is_none());
        assert!(selector.today_planned_meals().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_select_and_resolve() {
        let selector = selector();
        let first_id = selector.available_plans()[0].id.clone();

        selector.save_meal_plan(&first_id).await.unwrap();
        let active = selector.active_meal_plan().await.unwrap().unwrap();
        assert_eq!(active.id, first_id);
    }

    #[tokio::test]
    async fn test_unknown_id_resolves_to_none() {
        let selector = selector();
        // Save does not validate against the catalog.
        selector.save_meal_plan("no-such-plan").await.unwrap();
        assert!(selector.active_meal_plan().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_planned_meals_deterministic_per_weekday() {
        let selector = selector();
        let plan_id = selector.available_plans()[0].id.clone();
        selector.save_meal_plan(&plan_id).await.unwrap();

        // 2024-01-10 was a Wednesday.
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let a = selector.planned_meals_on(wednesday).await.unwrap().unwrap();
        let b = selector.planned_meals_on(wednesday).await.unwrap().unwrap();

        assert_eq!(a.day, "Wednesday");
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_setup_flag_semantics() {
        let selector = selector();
        assert!(!selector.is_setup_complete().await.unwrap());

        selector.complete_setup().await.unwrap();
        assert!(selector.is_setup_complete().await.unwrap());
    }

    #[tokio::test]
    async fn test_setup_flag_other_values_are_false() {
        let store = Arc::new(MemoryStore::new());
        let selector = PlanSelector::new(store.clone(), meal_plan_catalog());

        store.set(SETUP_COMPLETE_KEY, "yes").await.unwrap();
        assert!(!selector.is_setup_complete().await.unwrap());
    }
}
