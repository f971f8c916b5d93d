use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус установки
///
/// Выставляется пользователем вручную и не выводится из статусов резов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallationStatus {
    Completed,
    #[default]
    InProgress,
    NeedsRecut,
}

impl InstallationStatus {
    /// Код статуса (совпадает с сериализованным значением)
    pub fn code(&self) -> &'static str {
        match self {
            InstallationStatus::Completed => "completed",
            InstallationStatus::InProgress => "in-progress",
            InstallationStatus::NeedsRecut => "needs-recut",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            InstallationStatus::Completed => "Completed",
            InstallationStatus::InProgress => "In Progress",
            InstallationStatus::NeedsRecut => "Needs Recut",
        }
    }

    /// Вариант бейджа для таблицы установок
    pub fn badge(&self) -> StatusBadge {
        match self {
            InstallationStatus::Completed => StatusBadge::Success,
            InstallationStatus::InProgress => StatusBadge::Secondary,
            InstallationStatus::NeedsRecut => StatusBadge::Destructive,
        }
    }

    pub fn all() -> Vec<InstallationStatus> {
        vec![
            InstallationStatus::Completed,
            InstallationStatus::InProgress,
            InstallationStatus::NeedsRecut,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(InstallationStatus::Completed),
            "in-progress" => Some(InstallationStatus::InProgress),
            "needs-recut" => Some(InstallationStatus::NeedsRecut),
            _ => None,
        }
    }
}

impl fmt::Display for InstallationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Варианты бейджа статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBadge {
    Success,
    Secondary,
    Destructive,
}

impl StatusBadge {
    pub fn code(&self) -> &'static str {
        match self {
            StatusBadge::Success => "success",
            StatusBadge::Secondary => "secondary",
            StatusBadge::Destructive => "destructive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde() {
        for status in InstallationStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.code()));
            assert_eq!(InstallationStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_default_is_in_progress() {
        assert_eq!(InstallationStatus::default(), InstallationStatus::InProgress);
    }

    #[test]
    fn test_badges() {
        assert_eq!(InstallationStatus::Completed.badge(), StatusBadge::Success);
        assert_eq!(InstallationStatus::InProgress.badge(), StatusBadge::Secondary);
        assert_eq!(InstallationStatus::NeedsRecut.badge(), StatusBadge::Destructive);
        assert_eq!(InstallationStatus::from_code("all"), None);
    }
}
