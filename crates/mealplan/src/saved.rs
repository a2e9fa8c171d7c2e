use serde::{Deserialize, Serialize};

use crate::{MealPlan, MealPlanError, MealPlanResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub name: String,
    pub plan: MealPlan,
}

/// Named snapshots of a planner, kept in save order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedPlans {
    plans: Vec<SavedPlan>,
}

impl SavedPlans {
    pub fn save(&mut self, name: &str, plan: &MealPlan) -> MealPlanResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MealPlanError::EmptyPlanName);
        }

        self.plans.push(SavedPlan {
            name: name.to_owned(),
            plan: plan.clone(),
        });
        tracing::info!(name, "meal plan saved");

        Ok(())
    }

    /// Latest snapshot saved under `name`.
    pub fn load(&self, name: &str) -> MealPlanResult<MealPlan> {
        self.plans
            .iter()
            .rev()
            .find(|saved| saved.name == name)
            .map(|saved| saved.plan.clone())
            .ok_or_else(|| MealPlanError::PlanNotFound(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(|saved| saved.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_shared::MealPlanDay;

    #[test]
    fn test_blank_name_is_rejected() {
        let mut saved = SavedPlans::default();
        assert_eq!(
            saved.save("   ", &MealPlan::default()),
            Err(MealPlanError::EmptyPlanName)
        );
        assert!(saved.is_empty());
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut plan = MealPlan::from(vec![MealPlanDay::new("day1", "Monday", "2025-04-24")]);
        let mut saved = SavedPlans::default();
        saved.save("Week 17", &plan).unwrap();

        plan.days.push(MealPlanDay::new("day2", "Tuesday", "2025-04-25"));

        assert_eq!(saved.load("Week 17").unwrap().days.len(), 1);
        assert_eq!(
            saved.load("Week 18"),
            Err(MealPlanError::PlanNotFound("Week 18".to_string()))
        );
    }

    #[test]
    fn test_names_in_save_order() {
        let mut saved = SavedPlans::default();
        saved.save("cutting", &MealPlan::default()).unwrap();
        saved.save(" bulking ", &MealPlan::default()).unwrap();

        assert_eq!(saved.names().collect::<Vec<_>>(), vec!["cutting", "bulking"]);
        assert_eq!(saved.len(), 2);
    }
}
