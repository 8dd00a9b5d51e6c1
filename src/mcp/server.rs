//! FitCalc MCP Server Implementation
//!
//! Implements the MCP server with all FitCalc tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::calculator::CalcError;
use crate::tools::calculate;
use crate::tools::catalog;
use crate::tools::intake::RawProfile;
use crate::tools::status::StatusTracker;

/// FitCalc MCP Service
#[derive(Clone)]
pub struct FitCalcService {
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<FitCalcService>,
}

impl Default for FitCalcService {
    fn default() -> Self {
        Self::new()
    }
}

impl FitCalcService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateNutritionParams {
    /// Sex: male or female
    pub sex: String,
    /// Age in whole years as typed by the user (10-100)
    pub age: String,
    /// Weight in kg as typed by the user (30-300, "75.5" or "75,5")
    pub weight: String,
    /// Height in cm as typed by the user (100-250)
    pub height: String,
    /// Activity level: sedentary, light, moderate, active or very_active
    pub activity_level: String,
    /// Goal: cut, maintain or bulk
    pub goal: String,
}

impl From<CalculateNutritionParams> for RawProfile {
    fn from(p: CalculateNutritionParams) -> Self {
        RawProfile {
            sex: p.sex,
            age: p.age,
            weight: p.weight,
            height: p.height,
            activity_level: p.activity_level,
            goal: p.goal,
        }
    }
}

fn invalid_input(err: &CalcError) -> McpError {
    McpError::invalid_params(
        err.to_string(),
        Some(serde_json::json!({ "field": err.field() })),
    )
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl FitCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitCalc service including build info and process information")]
    fn fitcalc_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for running a nutrition calculation. Call this before asking the user for their details.")]
    fn fitcalc_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Catalogs ---

    #[tool(description = "List the activity levels with their TDEE multipliers and descriptions")]
    fn list_activity_levels(&self) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(&catalog::list_activity_levels()).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List the goals (cut, maintain, bulk) with their calorie factors and descriptions")]
    fn list_goals(&self) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(&catalog::list_goals()).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Calculation ---

    #[tool(description = "Calculate BMR, TDEE, goal calorie target, protein/fat/carb grams and daily water intake. Pass the user's answers as typed; invalid answers return an error naming the field to re-ask.")]
    fn calculate_nutrition(&self, Parameters(p): Parameters<CalculateNutritionParams>) -> Result<CallToolResult, McpError> {
        let raw = RawProfile::from(p);
        let resp = match calculate::calculate_nutrition(&raw) {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(field = e.field(), "Rejected calculation input: {}", e);
                return Err(invalid_input(&e));
            }
        };

        tracing::info!(
            sex = %resp.profile.sex,
            activity_level = %resp.profile.activity_level,
            goal = %resp.profile.goal,
            target_kcal = resp.plan.target_kcal,
            "Calculated nutrition plan"
        );

        let json = serde_json::to_string_pretty(&resp).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(resp.message), Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitCalc".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitCalc - calorie, macro and water calculator for athletes. \
                 IMPORTANT: Call fitcalc_instructions before starting a calculation. \
                 Collect sex, age, weight, height, activity_level and goal, then call calculate_nutrition. \
                 Options: list_activity_levels, list_goals. \
                 Status: fitcalc_status. \
                 Nothing is stored; every calculation is independent."
                    .into(),
            ),
        }
    }
}
