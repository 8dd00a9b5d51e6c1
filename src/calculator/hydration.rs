//! Daily water intake estimate

use super::energy::require_positive;
use super::error::CalcResult;
use crate::models::ActivityLevel;

/// Base water requirement per kg of body weight
pub const WATER_ML_PER_KG: f64 = 35.0;
/// Extra water for active and very active users
pub const ATHLETE_WATER_BONUS_ML: f64 = 500.0;

/// Water target in ml: 35 ml/kg, +500 ml at `active` and above
pub fn compute_water(weight_kg: f64, activity_level: ActivityLevel) -> CalcResult<f64> {
    require_positive("weight_kg", weight_kg)?;

    let base = weight_kg * WATER_ML_PER_KG;
    let bonus = if activity_level.is_athletic() {
        ATHLETE_WATER_BONUS_ML
    } else {
        0.0
    };

    let water_ml = base + bonus;
    require_positive("water_ml", water_ml)?;
    Ok(water_ml)
}
