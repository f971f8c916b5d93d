use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус отдельного реза плёнки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutStatus {
    #[default]
    Completed,
    Recut,
    Failed,
}

impl CutStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CutStatus::Completed => "completed",
            CutStatus::Recut => "recut",
            CutStatus::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CutStatus::Completed => "Completed",
            CutStatus::Recut => "Needs Recut",
            CutStatus::Failed => "Failed",
        }
    }

    /// Для перереза и брака указывается причина
    pub fn requires_reason(&self) -> bool {
        matches!(self, CutStatus::Recut | CutStatus::Failed)
    }

    pub fn all() -> Vec<CutStatus> {
        vec![CutStatus::Completed, CutStatus::Recut, CutStatus::Failed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(CutStatus::Completed),
            "recut" => Some(CutStatus::Recut),
            "failed" => Some(CutStatus::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for CutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
