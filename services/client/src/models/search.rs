//! Unified search results

use common::datetime::BackendDateTime;
use serde::{Deserialize, Serialize};

/// One matching document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<BackendDateTime>,
}

/// Matches grouped by content category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<SearchItem>,
    pub total_count: u64,
}
