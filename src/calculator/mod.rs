//! Nutrition calculator
//!
//! Pure functions from a validated profile to a daily plan. Nothing here
//! logs, blocks, or holds state, so calls can run concurrently without
//! coordination.

mod energy;
mod error;
mod hydration;
mod macros;

pub use energy::{apply_goal, compute_bmr, compute_tdee};
pub use error::{CalcError, CalcResult};
pub use hydration::{compute_water, ATHLETE_WATER_BONUS_ML, WATER_ML_PER_KG};
pub use macros::{
    compute_macros, round_to_tenth, CARBS_SHARE, FAT_SHARE, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN, PROTEIN_SHARE,
};

use crate::models::{NutritionPlan, ProfileInput};

/// Run the full pipeline for one profile
///
/// The first failing step is returned unchanged; no partial plan is built.
pub fn calculate(input: &ProfileInput) -> CalcResult<NutritionPlan> {
    let bmr_kcal = compute_bmr(input.sex, input.weight_kg, input.height_cm, input.age_years)?;
    let tdee_kcal = compute_tdee(bmr_kcal, input.activity_level)?;
    let target_kcal = apply_goal(tdee_kcal, input.goal);
    energy::require_positive("target_kcal", target_kcal)?;
    let macros = compute_macros(target_kcal);
    let water_ml = compute_water(input.weight_kg, input.activity_level)?;

    Ok(NutritionPlan {
        bmr_kcal,
        tdee_kcal,
        target_kcal,
        protein_g: macros.protein_g,
        fat_g: macros.fat_g,
        carbs_g: macros.carbs_g,
        water_ml,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal, Sex};

    fn reference_profile() -> ProfileInput {
        ProfileInput {
            sex: Sex::Male,
            weight_kg: 80.0,
            height_cm: 180.0,
            age_years: 25,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_calculate_reference_scenario() {
        let plan = calculate(&reference_profile()).unwrap();
        assert_eq!(plan.bmr_kcal, 1805.0);
        assert_eq!(plan.tdee_kcal, 2797.75);
        assert_eq!(plan.target_kcal, 2797.75);
        assert_eq!(plan.protein_g, 209.8);
        assert_eq!(plan.fat_g, 77.7);
        assert_eq!(plan.carbs_g, 314.7);
        assert_eq!(plan.water_ml, 2800.0);
    }

    #[test]
    fn test_calculate_is_deterministic() {
        let input = ProfileInput {
            sex: Sex::Female,
            weight_kg: 63.4,
            height_cm: 171.2,
            age_years: 37,
            activity_level: ActivityLevel::VeryActive,
            goal: Goal::Cut,
        };
        let first = calculate(&input).unwrap();
        for _ in 0..10 {
            let again = calculate(&input).unwrap();
            assert_eq!(again.bmr_kcal.to_bits(), first.bmr_kcal.to_bits());
            assert_eq!(again.tdee_kcal.to_bits(), first.tdee_kcal.to_bits());
            assert_eq!(again.target_kcal.to_bits(), first.target_kcal.to_bits());
            assert_eq!(again.protein_g.to_bits(), first.protein_g.to_bits());
            assert_eq!(again.fat_g.to_bits(), first.fat_g.to_bits());
            assert_eq!(again.carbs_g.to_bits(), first.carbs_g.to_bits());
            assert_eq!(again.water_ml.to_bits(), first.water_ml.to_bits());
        }
    }

    #[test]
    fn test_calculate_all_combinations_are_sane() {
        for sex in [Sex::Male, Sex::Female] {
            for level in ActivityLevel::ALL {
                for goal in Goal::ALL {
                    let input = ProfileInput {
                        sex,
                        weight_kg: 55.0,
                        height_cm: 160.0,
                        age_years: 60,
                        activity_level: level,
                        goal,
                    };
                    let plan = calculate(&input).unwrap();
                    assert!(plan.bmr_kcal > 0.0);
                    assert_eq!(plan.tdee_kcal, plan.bmr_kcal * level.multiplier());
                    if goal == Goal::Maintain {
                        assert_eq!(plan.target_kcal, plan.tdee_kcal);
                    }
                    assert!((plan.macros().total_kcal() - plan.target_kcal).abs() <= 1.0);
                    assert!(plan.protein_g >= 0.0 && plan.fat_g >= 0.0 && plan.carbs_g >= 0.0);
                    assert!(plan.water_ml > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_calculate_propagates_invalid_weight() {
        let input = ProfileInput {
            weight_kg: 0.0,
            ..reference_profile()
        };
        assert!(matches!(
            calculate(&input),
            Err(CalcError::InvalidInput { field: "weight_kg", .. })
        ));
    }

    #[test]
    fn test_calculate_rejects_huge_weight() {
        let input = ProfileInput {
            weight_kg: 1.7e307,
            activity_level: ActivityLevel::VeryActive,
            goal: Goal::Bulk,
            ..reference_profile()
        };
        assert!(matches!(
            calculate(&input),
            Err(CalcError::InvalidInput { field: "tdee_kcal", .. })
        ));
    }

    #[test]
    fn test_calculate_rejects_overflowing_target() {
        // TDEE stays finite, the 15% surplus does not
        let input = ProfileInput {
            weight_kg: 1.0e307,
            activity_level: ActivityLevel::Active,
            goal: Goal::Bulk,
            ..reference_profile()
        };
        assert!(matches!(
            calculate(&input),
            Err(CalcError::InvalidInput { field: "target_kcal", .. })
        ));
    }

    #[test]
    fn test_cut_and_bulk_targets() {
        let cut = calculate(&ProfileInput {
            goal: Goal::Cut,
            ..reference_profile()
        })
        .unwrap();
        let bulk = calculate(&ProfileInput {
            goal: Goal::Bulk,
            ..reference_profile()
        })
        .unwrap();
        assert!((cut.target_kcal - 2238.2).abs() < 1e-9);
        assert!((bulk.target_kcal - 3217.4125).abs() < 1e-9);
    }
}
