//! Intake validation
//!
//! Turns the raw answers typed into a chat into a validated `ProfileInput`.

use crate::calculator::{CalcError, CalcResult};
use crate::models::{ActivityLevel, Goal, ProfileInput, Sex};

pub const MIN_AGE_YEARS: u32 = 10;
pub const MAX_AGE_YEARS: u32 = 100;
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;
pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;

/// Answers exactly as the user typed them
#[derive(Debug, Clone, Default)]
pub struct RawProfile {
    pub sex: String,
    pub age: String,
    pub weight: String,
    pub height: String,
    pub activity_level: String,
    pub goal: String,
}

/// Parse a decimal number, accepting a comma as the decimal separator
fn parse_decimal(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn parse_age(text: &str) -> CalcResult<u32> {
    let reason = || {
        format!(
            "enter an age between {} and {}, e.g. 22",
            MIN_AGE_YEARS, MAX_AGE_YEARS
        )
    };
    let age = text
        .trim()
        .parse::<u32>()
        .map_err(|_| CalcError::invalid("age_years", reason()))?;
    if !(MIN_AGE_YEARS..=MAX_AGE_YEARS).contains(&age) {
        return Err(CalcError::invalid("age_years", reason()));
    }
    Ok(age)
}

pub fn parse_weight(text: &str) -> CalcResult<f64> {
    parse_decimal(text)
        .filter(|kg| (MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(kg))
        .ok_or_else(|| {
            CalcError::invalid(
                "weight_kg",
                format!(
                    "enter a weight between {} and {} kg, e.g. 75.5",
                    MIN_WEIGHT_KG, MAX_WEIGHT_KG
                ),
            )
        })
}

pub fn parse_height(text: &str) -> CalcResult<f64> {
    parse_decimal(text)
        .filter(|cm| (MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(cm))
        .ok_or_else(|| {
            CalcError::invalid(
                "height_cm",
                format!(
                    "enter a height between {} and {} cm, e.g. 180",
                    MIN_HEIGHT_CM, MAX_HEIGHT_CM
                ),
            )
        })
}

pub fn parse_sex(text: &str) -> CalcResult<Sex> {
    text.parse()
}

pub fn parse_activity(text: &str) -> CalcResult<ActivityLevel> {
    text.parse()
}

pub fn parse_goal(text: &str) -> CalcResult<Goal> {
    text.parse()
}

/// Validate every answer, stopping at the first bad one
///
/// Fields are checked in the order the questions are asked.
pub fn build_profile(raw: &RawProfile) -> CalcResult<ProfileInput> {
    let sex = parse_sex(&raw.sex)?;
    let age_years = parse_age(&raw.age)?;
    let weight_kg = parse_weight(&raw.weight)?;
    let height_cm = parse_height(&raw.height)?;
    let activity_level = parse_activity(&raw.activity_level)?;
    let goal = parse_goal(&raw.goal)?;

    Ok(ProfileInput {
        sex,
        weight_kg,
        height_cm,
        age_years,
        activity_level,
        goal,
    })
}
