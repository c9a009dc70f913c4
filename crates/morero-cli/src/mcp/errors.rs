//! Error handling utilities for MCP server

use morero_core::EstimatorError;
use rmcp::ErrorData;

/// Helper to convert estimator errors to MCP errors. Notices become
/// invalid-params errors carrying the notice text alone.
pub fn to_mcp_error(message: &str, error: &EstimatorError) -> ErrorData {
    if error.is_notice() {
        ErrorData::invalid_params(error.to_string(), None)
    } else {
        ErrorData::internal_error(format!("{message}: {error}"), None)
    }
}
