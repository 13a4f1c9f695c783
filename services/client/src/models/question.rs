//! Q&A board models

use common::datetime::BackendDateTime;
use serde::{Deserialize, Serialize};

use crate::validation::{normalize_tags, validate_required};

/// Question status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionStatus {
    Open,
    Closed,
}

impl QuestionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Open => "OPEN",
            QuestionStatus::Closed => "CLOSED",
        }
    }
}

/// Question entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_email: String,
    pub category1: Option<String>,
    pub category2: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: QuestionStatus,
    pub is_public: bool,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub answer_count: u64,
    pub created_at: BackendDateTime,
    pub updated_at: Option<BackendDateTime>,
}

/// Answer entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub content: String,
    pub author_email: String,
    pub created_at: BackendDateTime,
    pub updated_at: Option<BackendDateTime>,
}

/// Question write/edit form payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFormData {
    pub title: String,
    pub content: String,
    pub category1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category2: Option<String>,
    pub tags: Vec<String>,
    pub is_public: bool,
}

impl QuestionFormData {
    /// Check required fields
    pub fn validate(&self) -> Result<(), String> {
        validate_required("제목", &self.title)?;
        validate_required("내용", &self.content)?;
        validate_required("카테고리", &self.category1)
    }

    /// Trim text fields and clean up tags before submission
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            category1: self.category1.trim().to_string(),
            category2: self
                .category2
                .map(|category| category.trim().to_string())
                .filter(|category| !category.is_empty()),
            tags: normalize_tags(&self.tags),
            is_public: self.is_public,
        }
    }
}

/// Answer write/edit form payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFormData {
    pub content: String,
}

impl AnswerFormData {
    pub fn validate(&self) -> Result<(), String> {
        validate_required("답변 내용", &self.content)
    }
}

/// Filters for the question list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionQuery {
    pub category1: Option<String>,
    pub status: Option<QuestionStatus>,
    pub keyword: Option<String>,
    /// Page number (0-based, as the backend counts)
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl QuestionQuery {
    /// Query-string pairs for the filters that are set
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(category) = self.category1.as_deref().map(str::trim) {
            if !category.is_empty() {
                pairs.push(("category1", category.to_string()));
            }
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(keyword) = self.keyword.as_deref().map(str::trim) {
            if !keyword.is_empty() {
                pairs.push(("keyword", keyword.to_string()));
            }
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }

        pairs
    }
}
