//! Profile model
//!
//! The answers a user gives before a plan can be calculated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::CalcError;

/// Reduce free text to a lowercase snake_case key.
///
/// Keyboard labels like "🏃 Moderately active" become "moderately_active".
fn normalize_key(s: &str) -> String {
    s.chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .to_lowercase()
        .split(|c: char| matches!(c, ' ' | '_' | '-'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Biological sex, selects the Mifflin-St Jeor offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Sex::Male => "👨",
            Sex::Female => "👩",
        }
    }
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "male" | "m" | "man" => Ok(Sex::Male),
            "female" | "f" | "woman" => Ok(Sex::Female),
            _ => Err(CalcError::UnknownSex(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level, scales BMR into TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// TDEE multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::Light => "Lightly active",
            ActivityLevel::Moderate => "Moderately active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Desk job, little to no exercise",
            ActivityLevel::Light => "Light workouts 1-3 days a week",
            ActivityLevel::Moderate => "Workouts 3-5 days a week",
            ActivityLevel::Active => "Intense training 6-7 days a week",
            ActivityLevel::VeryActive => "Pro sports, physical job + training",
        }
    }

    /// Whether the level counts as athletic training load
    pub fn is_athletic(&self) -> bool {
        matches!(self, ActivityLevel::Active | ActivityLevel::VeryActive)
    }
}

impl FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" | "lightly_active" => Ok(ActivityLevel::Light),
            "moderate" | "moderately_active" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" | "extremely_active" | "extra_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(CalcError::UnknownActivityLevel(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body composition goal, adjusts TDEE into the calorie target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Cut, Goal::Maintain, Goal::Bulk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Maintain => "maintain",
            Goal::Bulk => "bulk",
        }
    }

    /// Factor applied to TDEE
    pub fn calorie_factor(&self) -> f64 {
        match self {
            Goal::Cut => 0.8,
            Goal::Maintain => 1.0,
            Goal::Bulk => 1.15,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Goal::Cut => "Lose weight",
            Goal::Maintain => "Maintain weight",
            Goal::Bulk => "Gain muscle",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Cut => {
                "A 20% deficit means steady fat loss while keeping enough energy to train."
            }
            Goal::Maintain => {
                "Eat this amount and your weight stays stable. Perfect for body recomposition."
            }
            Goal::Bulk => "A 15% surplus means steady muscle gain with limited fat.",
        }
    }
}

impl FromStr for Goal {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "cut" | "lose" | "lose_weight" | "weight_loss" | "deficit" => Ok(Goal::Cut),
            "maintain" | "maintenance" | "maintain_weight" => Ok(Goal::Maintain),
            "bulk" | "gain" | "gain_muscle" | "muscle_gain" | "surplus" => Ok(Goal::Bulk),
            _ => Err(CalcError::UnknownGoal(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated input record for a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}
