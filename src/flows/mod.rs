//! AI orchestration flows.
//!
//! Each flow shapes one request to the hosted generation API and parses the
//! structured output back into a domain type. `plan` sequences the others
//! into the comprehensive-plan pipeline; `pricing` is the one fully local
//! step (a deterministic lookup, no model involved).

pub mod blueprint;
pub mod classify;
pub mod design;
pub mod estimate;
pub mod marketing;
pub mod plan;
pub mod pricing;
pub mod quote;
pub mod risks;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Parse a model's structured output into the schema type the prompt asked
/// for. A mismatch is an upstream contract violation, not a local bug.
fn parse_output<T: DeserializeOwned>(output: Value) -> Result<T, ApiError> {
    serde_json::from_value(output).map_err(|e| {
        ApiError::Upstream(format!(
            "model output does not match the expected schema: {e}"
        ))
    })
}
