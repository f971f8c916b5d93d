use crate::domain::a001_installation::InstallerRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Стандартная длительность установки, минут
pub const STANDARD_INSTALL_MINUTES: u32 = 480;

/// Роль монтажника
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallerRole {
    Lead,
    Installer,
    Training,
}

/// Монтажник (справочные данные, только чтение)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installer {
    pub id: String,

    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub name: String,
    pub email: String,
    pub role: InstallerRole,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(rename = "joinedDate")]
    pub joined_date: NaiveDate,
}

impl Installer {
    /// Ссылка для записи установки
    pub fn to_ref(&self) -> InstallerRef {
        InstallerRef::new(self.id.clone(), self.name.clone())
    }

    /// Инициалы для аватара ("Matt Anderson" -> "MA")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Сводные показатели монтажника
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallerStats {
    #[serde(rename = "totalInstallations")]
    pub total_installations: u32,

    /// Среднее время установки, минут
    #[serde(rename = "averageInstallTime")]
    pub average_install_time: u32,

    /// Израсходовано плёнки, ft²
    #[serde(rename = "filmUsage")]
    pub film_usage: f64,

    #[serde(rename = "revenueGenerated")]
    pub revenue_generated: f64,
}

impl InstallerStats {
    pub fn format_install_time(&self) -> String {
        format_minutes(self.average_install_time)
    }

    /// Эффективность относительно стандартного времени, 0..=100
    pub fn efficiency(&self) -> f64 {
        let standard = STANDARD_INSTALL_MINUTES as f64;
        let avg = self.average_install_time as f64;
        let value = (standard - (avg - standard)) / standard * 100.0;
        value.clamp(0.0, 100.0)
    }
}

/// Запись истории работ монтажника (справочные данные профиля)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationRecord {
    pub id: String,

    #[serde(rename = "installerId")]
    pub installer_id: String,

    pub date: NaiveDate,

    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,

    /// Израсходовано плёнки, ft²
    #[serde(rename = "filmUsed")]
    pub film_used: f64,

    /// Затраченное время, минут
    #[serde(rename = "timeSpent")]
    pub time_spent: u32,

    /// Оценка клиента, 1..=5
    #[serde(rename = "customerSatisfaction")]
    pub customer_satisfaction: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "rollIds", default)]
    pub roll_ids: Vec<String>,
}

impl InstallationRecord {
    pub fn format_time_spent(&self) -> String {
        format_minutes(self.time_spent)
    }

    pub fn satisfaction_band(&self) -> SatisfactionBand {
        SatisfactionBand::from_score(self.customer_satisfaction)
    }
}

/// Уровень оценки клиента для подсветки в таблице истории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SatisfactionBand {
    Good,
    Fair,
    Poor,
}

impl SatisfactionBand {
    /// 4 и выше - good, 3 - fair, ниже - poor
    pub fn from_score(score: u8) -> Self {
        match score {
            4..=u8::MAX => SatisfactionBand::Good,
            3 => SatisfactionBand::Fair,
            _ => SatisfactionBand::Poor,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SatisfactionBand::Good => "good",
            SatisfactionBand::Fair => "fair",
            SatisfactionBand::Poor => "poor",
        }
    }
}

/// "Xh Ym"
pub fn format_minutes(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(avg: u32) -> InstallerStats {
        InstallerStats {
            total_installations: 10,
            average_install_time: avg,
            film_usage: 1250.5,
            revenue_generated: 45000.0,
        }
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0h 0m");
        assert_eq!(format_minutes(245), "4h 5m");
        assert_eq!(stats(480).format_install_time(), "8h 0m");
    }

    #[test]
    fn test_efficiency_is_clamped() {
        assert_eq!(stats(480).efficiency(), 100.0);
        assert_eq!(stats(240).efficiency(), 100.0);
        assert_eq!(stats(600).efficiency(), 75.0);
        assert_eq!(stats(1200).efficiency(), 0.0);
    }

    #[test]
    fn test_satisfaction_bands() {
        assert_eq!(SatisfactionBand::from_score(5), SatisfactionBand::Good);
        assert_eq!(SatisfactionBand::from_score(4), SatisfactionBand::Good);
        assert_eq!(SatisfactionBand::from_score(3), SatisfactionBand::Fair);
        assert_eq!(SatisfactionBand::from_score(2), SatisfactionBand::Poor);
        assert_eq!(SatisfactionBand::from_score(0), SatisfactionBand::Poor);
        assert_eq!(SatisfactionBand::Fair.code(), "fair");
    }

    #[test]
    fn test_installation_record_shape() {
        let record: InstallationRecord = serde_json::from_str(
            r#"{
                "id": "2",
                "installerId": "1",
                "date": "2024-01-14",
                "vehicleType": "2024 Porsche 911",
                "filmUsed": 185.8,
                "timeSpent": 540,
                "customerSatisfaction": 3,
                "rollIds": ["R123458", "R123459"]
            }"#,
        )
        .unwrap();

        assert_eq!(record.installer_id, "1");
        assert_eq!(record.format_time_spent(), "9h 0m");
        assert_eq!(record.satisfaction_band(), SatisfactionBand::Fair);
        assert_eq!(record.notes, None);
        assert_eq!(record.roll_ids.len(), 2);
    }

    #[test]
    fn test_installer_ref_and_initials() {
        let installer = Installer {
            id: "1".into(),
            first_name: "Matt".into(),
            last_name: "Anderson".into(),
            name: "Matt Anderson".into(),
            email: "matt@example.com".into(),
            role: InstallerRole::Lead,
            avatar: None,
            joined_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
        };
        assert_eq!(installer.initials(), "MA");
        assert_eq!(installer.to_ref(), InstallerRef::new("1", "Matt Anderson"));

        let json = serde_json::to_value(&installer).unwrap();
        assert_eq!(json["role"], "Lead");
        assert_eq!(json["joinedDate"], "2022-01-15");
    }
}
