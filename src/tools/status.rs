//! FitCalc Status Tool
//!
//! Runtime status of the service and the usage guide for assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# FitCalc Instructions

FitCalc calculates a daily calorie target, macros and water intake for an athlete.
Every calculation is a single `calculate_nutrition` call. Nothing is stored between calls.

## Collect These Six Answers

Ask the user one question at a time, in this order:

| # | Parameter | Accepted values |
|---|-----------|-----------------|
| 1 | `sex` | male, female |
| 2 | `age` | whole years, 10 to 100 |
| 3 | `weight` | kg, 30 to 300 (decimals fine: 75.5 or 75,5) |
| 4 | `height` | cm, 100 to 250 |
| 5 | `activity_level` | sedentary, light, moderate, active, very_active |
| 6 | `goal` | cut, maintain, bulk |

Call `list_activity_levels` and `list_goals` to show the user the options with descriptions.
Pass the answers through as the user typed them. FitCalc validates them itself.

## When an Answer Is Rejected

`calculate_nutrition` returns an invalid-params error naming the field and what was wrong,
e.g. "Invalid age_years: enter an age between 10 and 100, e.g. 22".
Re-ask only that question, then call the tool again with all six answers.

## Formulas

- **BMR** (Mifflin-St Jeor): 10 x kg + 6.25 x cm - 5 x age, +5 for men, -161 for women
- **TDEE**: BMR x activity multiplier (1.2 / 1.375 / 1.55 / 1.725 / 1.9)
- **Target**: cut = TDEE x 0.8, maintain = TDEE, bulk = TDEE x 1.15
- **Macros**: 30% protein (4 kcal/g), 25% fat (9 kcal/g), 45% carbs (4 kcal/g), grams rounded to 0.1
- **Water**: 35 ml per kg, +500 ml for active and very_active

## Presenting the Result

The tool reply starts with a ready-made Markdown message. Show it to the user as is.
The JSON plan after it is for follow-up questions (e.g. "how much protein per meal?").
"#;

/// Status information for the FitCalc service
#[derive(Debug, Serialize)]
pub struct FitCalcStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for FitCalc service
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FitCalcStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitCalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
