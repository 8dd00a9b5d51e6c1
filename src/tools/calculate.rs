//! Calculation Tool
//!
//! Validates raw answers, runs the calculator, and renders the reply.

use serde::Serialize;

use crate::calculator::{calculate, CalcResult};
use crate::models::{NutritionPlan, ProfileInput};
use crate::tools::intake::{build_profile, RawProfile};
use crate::tools::report::format_plan;

/// Response for calculate_nutrition
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub profile: ProfileInput,
    pub plan: NutritionPlan,
    #[serde(skip)]
    pub message: String,
}

pub fn calculate_nutrition(raw: &RawProfile) -> CalcResult<CalculationResponse> {
    let profile = build_profile(raw)?;
    let plan = calculate(&profile)?;
    let message = format_plan(&profile, &plan);

    Ok(CalculationResponse {
        profile,
        plan,
        message,
    })
}
