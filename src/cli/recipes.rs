use std::fmt::Write;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::Args;
use mealwise_recipe::{RecipeQuery, RecipeSort};
use strum::VariantArray;

use crate::Catalog;

#[derive(Args, Debug, Default)]
pub struct RecipesArgs {
    /// Keep recipes that carry every given diet
    #[arg(long = "diet")]
    pub diets: Vec<String>,

    /// Keep recipes from any of the given cuisines
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,

    /// breakfast, lunch, dinner or snack
    #[arg(long)]
    pub meal_type: Option<String>,

    /// Case-insensitive title search
    #[arg(long)]
    pub search: Option<String>,

    /// relevance, calories-asc, calories-desc, protein-desc or time-asc (overrides config file)
    #[arg(long)]
    pub sort: Option<String>,
}

impl RecipesArgs {
    pub fn query(&self, default_sort: RecipeSort) -> Result<RecipeQuery> {
        let sort = match &self.sort {
            Some(value) => RecipeSort::from_str(value).map_err(|_| {
                let known: Vec<String> =
                    RecipeSort::VARIANTS.iter().map(ToString::to_string).collect();
                anyhow!("unknown sort '{value}', expected one of {}", known.join(", "))
            })?,
            None => default_sort,
        };

        Ok(RecipeQuery {
            term: self.search.clone().unwrap_or_default(),
            diets: self.diets.clone(),
            cuisines: self.cuisines.clone(),
            meal_type: self.meal_type.clone().unwrap_or_default(),
            sort,
        })
    }
}

pub fn recipes(catalog: &Catalog, args: &RecipesArgs, default_sort: RecipeSort) -> Result<String> {
    let query = args.query(default_sort)?;
    let matched = query.apply(catalog.recipes.clone());

    let mut out = String::new();
    if matched.is_empty() {
        writeln!(out, "No recipes match")?;
        return Ok(out);
    }

    for recipe in matched {
        writeln!(
            out,
            "{}\t{}\t{:.0} kcal\t{} min\t[{}]",
            recipe.id,
            recipe.title,
            recipe.nutrients.calories,
            recipe.ready_in_minutes,
            recipe.diets.join(", ")
        )?;
    }

    Ok(out)
}
