//! Energy expenditure formulas
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, and the goal adjustment.

use super::error::{CalcError, CalcResult};
use crate::models::{ActivityLevel, Goal, Sex};

/// kcal per kg of body weight
pub const BMR_WEIGHT_COEFF: f64 = 10.0;
/// kcal per cm of height
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
/// kcal per year of age (subtracted)
pub const BMR_AGE_COEFF: f64 = 5.0;
/// Sex constant added for men
pub const BMR_MALE_OFFSET: f64 = 5.0;
/// Sex constant added for women
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

pub(crate) fn require_positive(field: &'static str, value: f64) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid(field, format!("must be a positive number, got {}", value)))
    }
}

/// Basal Metabolic Rate in kcal/day (Mifflin-St Jeor, 1990)
///
/// `10 x weight_kg + 6.25 x height_cm - 5 x age + s`, where `s` is +5 for men
/// and -161 for women.
///
/// # Errors
///
/// `InvalidInput` if weight, height or age is not positive, or if the
/// combination yields a BMR that is not positive and finite.
pub fn compute_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age_years: u32) -> CalcResult<f64> {
    require_positive("weight_kg", weight_kg)?;
    require_positive("height_cm", height_cm)?;
    if age_years == 0 {
        return Err(CalcError::invalid("age_years", "must be a positive number of years"));
    }

    let offset = match sex {
        Sex::Male => BMR_MALE_OFFSET,
        Sex::Female => BMR_FEMALE_OFFSET,
    };

    let bmr = BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm
        - BMR_AGE_COEFF * f64::from(age_years)
        + offset;

    if !bmr.is_finite() || bmr <= 0.0 {
        return Err(CalcError::invalid(
            "bmr_kcal",
            format!("weight, height and age give an out-of-range BMR ({:.1} kcal)", bmr),
        ));
    }

    Ok(bmr)
}

/// Total Daily Energy Expenditure: BMR scaled by the activity multiplier
pub fn compute_tdee(bmr_kcal: f64, activity_level: ActivityLevel) -> CalcResult<f64> {
    require_positive("bmr_kcal", bmr_kcal)?;
    let tdee = bmr_kcal * activity_level.multiplier();
    require_positive("tdee_kcal", tdee)?;
    Ok(tdee)
}

/// Calorie target for the goal: -20% for a cut, +15% for a bulk
pub fn apply_goal(tdee_kcal: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Maintain => tdee_kcal,
        Goal::Cut | Goal::Bulk => tdee_kcal * goal.calorie_factor(),
    }
}
