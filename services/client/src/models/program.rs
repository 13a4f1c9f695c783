//! Learning program models
//!
//! Create and update payloads for both program kinds are sent as the JSON
//! part of a multipart body, next to an optional attached file.

use common::datetime::BackendDateTime;
use serde::{Deserialize, Serialize};

use crate::validation::validate_required;

/// Learning program entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgram {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub instructor: Option<String>,
    pub duration: Option<String>,
    pub start_date: Option<BackendDateTime>,
    pub end_date: Option<BackendDateTime>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub created_at: Option<BackendDateTime>,
    pub updated_at: Option<BackendDateTime>,
}

/// Create/update projection of a learning program
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ProgramPayload {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("프로그램명", &self.title)
    }
}

/// Custom (on-demand) program entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomProgram {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub duration: Option<String>,
    pub curriculum: Option<String>,
    pub file_name: Option<String>,
    pub file_path: Option<String>,
    pub created_at: Option<BackendDateTime>,
    pub updated_at: Option<BackendDateTime>,
}

/// Create/update projection of a custom program
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomProgramPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<String>,
}

impl CustomProgramPayload {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("프로그램명", &self.title)
    }
}
