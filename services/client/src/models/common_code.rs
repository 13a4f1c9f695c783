//! Common code taxonomy used to populate select inputs

use serde::{Deserialize, Serialize};

/// One selectable code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommonCode {
    pub id: i64,
    pub menu_name: String,
    pub code_name: String,
    pub code_value: String,
    pub parent_id: Option<i64>,
}

/// Codes of one menu, plus whether a free-text "other" input goes with them
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommonCodeGroup {
    #[serde(default)]
    pub codes: Vec<CommonCode>,
    #[serde(default)]
    pub has_etc: bool,
}

impl CommonCodeGroup {
    /// Top-level codes
    pub fn roots(&self) -> impl Iterator<Item = &CommonCode> {
        self.codes.iter().filter(|code| code.parent_id.is_none())
    }

    /// Codes nested under `parent_id`
    pub fn children_of(&self, parent_id: i64) -> impl Iterator<Item = &CommonCode> {
        self.codes
            .iter()
            .filter(move |code| code.parent_id == Some(parent_id))
    }
}
