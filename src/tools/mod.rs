//! FitCalc Tools module
//!
//! Tool implementations behind the MCP server.

pub mod calculate;
pub mod catalog;
pub mod intake;
pub mod report;
pub mod status;
