use std::path::Path;

use anyhow::{Context, Result};
use mealwise_shared::{MealPlanDay, Recipe, User};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::seed;

/// Everything the CLI works on: who is planning, what they can cook, and the week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[validate(nested)]
    pub user: User,
    #[validate(nested)]
    pub recipes: Vec<Recipe>,
    #[validate(nested)]
    pub meal_plan: Vec<MealPlanDay>,
}

impl Catalog {
    /// Built-in demo data.
    pub fn seed() -> Self {
        let recipes = seed::recipes();
        let meal_plan = seed::meal_plan(&recipes);

        Self {
            user: seed::user(),
            recipes,
            meal_plan,
        }
    }

    /// Read a JSON catalog and validate it before anything else sees it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;

        let catalog = Self::from_json(&raw)
            .with_context(|| format!("invalid catalog {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            recipes = catalog.recipes.len(),
            days = catalog.meal_plan.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(raw).context("failed to parse catalog JSON")?;
        catalog.validate().context("catalog failed validation")?;

        Ok(catalog)
    }

    /// `--catalog` wins over `catalog.path`; with neither, the seed catalog is used.
    pub fn resolve(cli_path: Option<&str>, configured: Option<&str>) -> Result<Self> {
        match cli_path.or(configured) {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("using built-in seed catalog");
                Ok(Self::seed())
            }
        }
    }
}
