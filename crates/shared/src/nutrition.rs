use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::recipe::Nutrients;

/// Additive calories/protein/carbs/fat record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotal {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl NutrientTotal {
    pub const ZERO: NutrientTotal = NutrientTotal {
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };
}

impl From<&Nutrients> for NutrientTotal {
    fn from(value: &Nutrients) -> Self {
        Self {
            calories: value.calories,
            protein: value.protein,
            carbs: value.carbs,
            fat: value.fat,
        }
    }
}

impl Add for NutrientTotal {
    type Output = NutrientTotal;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for NutrientTotal {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientTotal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a NutrientTotal> for NutrientTotal {
    fn sum<I: Iterator<Item = &'a NutrientTotal>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
