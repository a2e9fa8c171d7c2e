mod groceries;
mod nutrition;
mod recipes;
mod slots;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{Catalog, Config};

pub use groceries::groceries;
pub use nutrition::nutrition;
pub use recipes::{RecipesArgs, recipes};
pub use slots::slots;

/// mealwise - plan meals, track nutrition and build grocery lists
#[derive(Parser, Debug)]
#[command(name = "mealwise")]
#[command(about = "Meal planning, nutrition tracking and grocery lists", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// JSON catalog to use instead of the built-in one (overrides config file)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Daily and weekly nutrition with progress against the user's goals
    Nutrition {
        /// Only show this day
        #[arg(long)]
        day: Option<String>,
    },
    /// Browse the recipe catalog
    Recipes(RecipesArgs),
    /// Consolidated grocery list for the whole plan
    Groceries {
        /// Group items by store section
        #[arg(long)]
        by_category: bool,
    },
    /// Color token of every meal slot
    Slots,
}

impl Commands {
    /// Render the command output.
    pub fn run(&self, config: &Config, catalog: &Catalog) -> Result<String> {
        match self {
            Commands::Nutrition { day } => nutrition(catalog, day.as_deref()),
            Commands::Recipes(args) => recipes(catalog, args, config.default_sort()),
            Commands::Groceries { by_category } => groceries(catalog, *by_category),
            Commands::Slots => slots(),
        }
    }
}
