//! Data models
//!
//! Input and result records for a nutrition calculation.

mod plan;
mod profile;

pub use plan::{Macros, NutritionPlan};
pub use profile::{ActivityLevel, Goal, ProfileInput, Sex};
