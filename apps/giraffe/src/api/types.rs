//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use crate::present;
use giraffe_core::{GiraffeError, StageRecord};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STAGE JSON
// =============================================================================

/// Metric and imperial display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementJson {
    pub metric: String,
    pub imperial: String,
}

/// A stage record as sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageJson {
    pub id: String,
    pub name: String,
    pub child_age_range: String,
    pub giraffe_age_range: String,
    pub foot_length_min: f64,
    pub foot_length_max: f64,
    pub height: MeasurementJson,
    pub weight: MeasurementJson,
    pub image_url: String,
    pub fun_facts: Vec<String>,
}

impl From<&StageRecord> for StageJson {
    fn from(record: &StageRecord) -> Self {
        Self {
            id: record.id.key().to_string(),
            name: record.display_name.to_string(),
            child_age_range: record.child_age_range.to_string(),
            giraffe_age_range: record.giraffe_age_range.to_string(),
            foot_length_min: record.foot_length.low,
            foot_length_max: record.foot_length.high,
            height: MeasurementJson {
                metric: record.height.metric.to_string(),
                imperial: record.height.imperial.to_string(),
            },
            weight: MeasurementJson {
                metric: record.weight.metric.to_string(),
                imperial: record.weight.imperial.to_string(),
            },
            image_url: record.image_url.to_string(),
            fun_facts: record.fun_facts.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// Stage listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagesResponse {
    pub stages: Vec<StageJson>,
}

// =============================================================================
// CLASSIFY REQUEST/RESPONSE
// =============================================================================

/// Classification request. The measurement is sent as raw text so the
/// server applies the same validation as every other surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub foot_length: String,
}

/// Classification response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<StageJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifyResponse {
    pub fn success(record: &StageRecord) -> Self {
        Self {
            success: true,
            stage: Some(StageJson::from(record)),
            headline: Some(present::headline(record)),
            error_kind: None,
            error: None,
        }
    }

    pub fn failure(err: &GiraffeError) -> Self {
        Self {
            success: false,
            stage: None,
            headline: None,
            error_kind: Some(err.kind().to_string()),
            error: Some(present::error_message(err)),
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Generic error body for lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_kind: String,
    pub error: String,
}

impl From<&GiraffeError> for ErrorResponse {
    fn from(err: &GiraffeError) -> Self {
        Self {
            error_kind: err.kind().to_string(),
            error: present::error_message(err),
        }
    }
}
