//! Reply formatting
//!
//! Renders a calculated plan as the Markdown message shown in chat.

use crate::models::{NutritionPlan, ProfileInput};

/// Format the plan for a chat reply
pub fn format_plan(input: &ProfileInput, plan: &NutritionPlan) -> String {
    let macros = plan.macros();

    format!(
        "🏋️ *Your results, {icon}*

📊 *Your stats:*
├ Sex: {sex}
├ Age: {age} years
├ Weight: {weight} kg
├ Height: {height} cm
├ Activity: {activity}
└ Goal: {goal}

🔥 *Calories:*
├ Basal Metabolic Rate (BMR): *{bmr:.0} kcal/day*
├ With activity (TDEE): *{tdee:.0} kcal/day*
└ Your target: *{target:.0} kcal/day* ⬅️

🥩 *Daily macros:*
├ 🥚 Protein: *{protein_g:.1} g* ({protein_kcal:.0} kcal)
├ 🥑 Fat: *{fat_g:.1} g* ({fat_kcal:.0} kcal)
└ 🍚 Carbs: *{carbs_g:.1} g* ({carbs_kcal:.0} kcal)

💧 *Daily water intake: {water:.1} L*

💡 *What this means:*
{explanation}

📌 Send new answers any time to recalculate.",
        icon = input.sex.icon(),
        sex = input.sex.display_name(),
        age = input.age_years,
        weight = input.weight_kg,
        height = input.height_cm,
        activity = input.activity_level.display_name(),
        goal = input.goal.display_name(),
        bmr = plan.bmr_kcal,
        tdee = plan.tdee_kcal,
        target = plan.target_kcal,
        protein_g = macros.protein_g,
        protein_kcal = macros.protein_kcal(),
        fat_g = macros.fat_g,
        fat_kcal = macros.fat_kcal(),
        carbs_g = macros.carbs_g,
        carbs_kcal = macros.carbs_kcal(),
        water = plan.water_liters(),
        explanation = input.goal.description(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate;
    use crate::models::{ActivityLevel, Goal, Sex};

    #[test]
    fn test_format_reference_plan() {
        let input = ProfileInput {
            sex: Sex::Male,
            weight_kg: 80.0,
            height_cm: 180.0,
            age_years: 25,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        };
        let plan = calculate(&input).unwrap();
        let text = format_plan(&input, &plan);

        assert!(text.contains("Your results, 👨"));
        assert!(text.contains("Sex: Male"));
        assert!(text.contains("Age: 25 years"));
        assert!(text.contains("Weight: 80 kg"));
        assert!(text.contains("Activity: Moderately active"));
        assert!(text.contains("(BMR): *1805 kcal/day*"));
        assert!(text.contains("(TDEE): *2798 kcal/day*"));
        assert!(text.contains("Your target: *2798 kcal/day*"));
        assert!(text.contains("Protein: *209.8 g* (839 kcal)"));
        assert!(text.contains("Fat: *77.7 g* (699 kcal)"));
        assert!(text.contains("Carbs: *314.7 g* (1259 kcal)"));
        assert!(text.contains("Daily water intake: 2.8 L"));
        assert!(text.contains(Goal::Maintain.description()));
    }

    #[test]
    fn test_format_layout() {
        let input = ProfileInput {
            sex: Sex::Male,
            weight_kg: 80.0,
            height_cm: 180.0,
            age_years: 25,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        };
        let plan = calculate(&input).unwrap();
        let text = format_plan(&input, &plan);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "🏋️ *Your results, 👨*");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "📊 *Your stats:*");
        assert!(lines.contains(&"🔥 *Calories:*"));
        assert!(lines.contains(&"💧 *Daily water intake: 2.8 L*"));
        assert_eq!(
            lines.last().copied(),
            Some("📌 Send new answers any time to recalculate.")
        );
        assert_eq!(lines.len(), 26);
    }

    #[test]
    fn test_format_uses_goal_explanation() {
        let input = ProfileInput {
            sex: Sex::Female,
            weight_kg: 58.5,
            height_cm: 164.0,
            age_years: 29,
            activity_level: ActivityLevel::VeryActive,
            goal: Goal::Cut,
        };
        let plan = calculate(&input).unwrap();
        let text = format_plan(&input, &plan);

        assert!(text.contains("Your results, 👩"));
        assert!(text.contains("Weight: 58.5 kg"));
        assert!(text.contains("Goal: Lose weight"));
        assert!(text.contains(Goal::Cut.description()));
        assert!(!text.contains(Goal::Bulk.description()));
    }
}
