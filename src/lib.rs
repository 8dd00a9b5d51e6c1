//! FitCalc Library
//!
//! Calorie, macronutrient and water calculations for athletes.

pub mod build_info;
pub mod calculator;
pub mod mcp;
pub mod models;
pub mod tools;
