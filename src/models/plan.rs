//! Nutrition plan model
//!
//! The result record produced by the calculator.

use serde::{Deserialize, Serialize};

/// Daily macronutrient split in grams
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl Macros {
    /// Energy represented by the grams, in kcal
    pub fn total_kcal(&self) -> f64 {
        self.protein_kcal() + self.fat_kcal() + self.carbs_kcal()
    }

    pub fn protein_kcal(&self) -> f64 {
        self.protein_g * crate::calculator::KCAL_PER_G_PROTEIN
    }

    pub fn fat_kcal(&self) -> f64 {
        self.fat_g * crate::calculator::KCAL_PER_G_FAT
    }

    pub fn carbs_kcal(&self) -> f64 {
        self.carbs_g * crate::calculator::KCAL_PER_G_CARBS
    }
}

/// Calculated daily plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub bmr_kcal: f64,
    pub tdee_kcal: f64,
    pub target_kcal: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub water_ml: f64,
}

impl NutritionPlan {
    pub fn macros(&self) -> Macros {
        Macros {
            protein_g: self.protein_g,
            fat_g: self.fat_g,
            carbs_g: self.carbs_g,
        }
    }

    /// Water target in litres, one decimal
    pub fn water_liters(&self) -> f64 {
        (self.water_ml / 100.0).round() / 10.0
    }
}
