//! Option catalogs
//!
//! The choices a user can pick from, with labels and descriptions.

use serde::Serialize;

use crate::models::{ActivityLevel, Goal};

#[derive(Debug, Serialize)]
pub struct ActivityLevelOption {
    pub id: ActivityLevel,
    pub label: &'static str,
    pub multiplier: f64,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GoalOption {
    pub id: Goal,
    pub label: &'static str,
    pub calorie_factor: f64,
    pub description: &'static str,
}

pub fn list_activity_levels() -> Vec<ActivityLevelOption> {
    ActivityLevel::ALL
        .iter()
        .map(|level| ActivityLevelOption {
            id: *level,
            label: level.display_name(),
            multiplier: level.multiplier(),
            description: level.description(),
        })
        .collect()
}

pub fn list_goals() -> Vec<GoalOption> {
    Goal::ALL
        .iter()
        .map(|goal| GoalOption {
            id: *goal,
            label: goal.display_name(),
            calorie_factor: goal.calorie_factor(),
            description: goal.description(),
        })
        .collect()
}
