//! Macronutrient split
//!
//! Protein 30%, fat 25%, carbohydrate 45% of the calorie target.

use crate::models::Macros;

pub const PROTEIN_SHARE: f64 = 0.30;
pub const FAT_SHARE: f64 = 0.25;
pub const CARBS_SHARE: f64 = 0.45;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Round to one decimal place, half away from zero
///
/// Values too large to scale by 10 have no fractional part and are returned as is.
pub fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    if scaled.is_finite() {
        scaled.round() / 10.0
    } else {
        value
    }
}

/// Split a calorie target into grams of protein, fat and carbs
///
/// Each gram value is rounded once, after the division.
pub fn compute_macros(target_kcal: f64) -> Macros {
    Macros {
        protein_g: round_to_tenth(target_kcal * PROTEIN_SHARE / KCAL_PER_G_PROTEIN),
        fat_g: round_to_tenth(target_kcal * FAT_SHARE / KCAL_PER_G_FAT),
        carbs_g: round_to_tenth(target_kcal * CARBS_SHARE / KCAL_PER_G_CARBS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_one() {
        assert!((PROTEIN_SHARE + FAT_SHARE + CARBS_SHARE - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(209.83125), 209.8);
        assert_eq!(round_to_tenth(77.71527), 77.7);
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(-2.25), -2.3);
        assert_eq!(round_to_tenth(0.0), 0.0);
        assert_eq!(round_to_tenth(1.7e308), 1.7e308);
    }

    #[test]
    fn test_macros_stay_finite_for_huge_target() {
        let macros = compute_macros(1.7e308);
        assert!(macros.protein_g.is_finite());
        assert!(macros.fat_g.is_finite());
        assert!(macros.carbs_g.is_finite());
    }

    #[test]
    fn test_macros_reference() {
        let macros = compute_macros(2797.75);
        assert_eq!(macros.protein_g, 209.8);
        assert_eq!(macros.fat_g, 77.7);
        assert_eq!(macros.carbs_g, 314.7);
    }

    #[test]
    fn test_macros_match_target_within_one_kcal() {
        for target in [1200.0, 1587.3, 2000.0, 2797.75, 3333.3, 4512.9] {
            let macros = compute_macros(target);
            assert!(
                (macros.total_kcal() - target).abs() <= 1.0,
                "target {} gave {} kcal",
                target,
                macros.total_kcal()
            );
        }
    }
}
