use contracts::domain::a001_installation::InstallerRef;
use contracts::domain::a002_installer::{InstallationRecord, Installer, InstallerStats};
use serde::Deserialize;
use std::collections::HashMap;

/// Справочник монтажников и их показателей (только чтение)
#[derive(Debug, Default, Clone)]
pub struct InstallerDirectory {
    installers: Vec<Installer>,
    stats: HashMap<String, InstallerStats>,
    history: HashMap<String, Vec<InstallationRecord>>,
}

#[derive(Debug, Deserialize)]
struct InstallerEntry {
    #[serde(flatten)]
    installer: Installer,
    stats: InstallerStats,
    #[serde(default)]
    history: Vec<InstallationRecord>,
}

const MOCK_INSTALLERS: &str = r#"[
  {
    "id": "1",
    "firstName": "Matt",
    "lastName": "Anderson",
    "name": "Matt Anderson",
    "email": "matt.anderson@example.com",
    "role": "Lead",
    "joinedDate": "2022-01-15",
    "stats": {
      "totalInstallations": 156,
      "averageInstallTime": 420,
      "filmUsage": 12500,
      "revenueGenerated": 187500
    },
    "history": [
      {
        "id": "1",
        "installerId": "1",
        "date": "2024-01-15",
        "vehicleType": "2023 Tesla Model 3",
        "filmUsed": 125.5,
        "timeSpent": 480,
        "customerSatisfaction": 5,
        "notes": "Perfect installation, customer very happy",
        "rollIds": ["R123456", "R123457"]
      },
      {
        "id": "2",
        "installerId": "1",
        "date": "2024-01-14",
        "vehicleType": "2024 Porsche 911",
        "filmUsed": 185.8,
        "timeSpent": 540,
        "customerSatisfaction": 5,
        "notes": "Complex curves handled well",
        "rollIds": ["R123458", "R123459"]
      }
    ]
  },
  {
    "id": "2",
    "firstName": "Sarah",
    "lastName": "Johnson",
    "name": "Sarah Johnson",
    "email": "sarah.johnson@example.com",
    "role": "Installer",
    "joinedDate": "2023-03-01",
    "stats": {
      "totalInstallations": 89,
      "averageInstallTime": 510,
      "filmUsage": 7800,
      "revenueGenerated": 106800
    }
  }
]"#;

impl InstallerDirectory {
    pub fn new(entries: Vec<(Installer, InstallerStats)>) -> Self {
        let mut directory = Self::default();
        for (installer, stats) in entries {
            directory.stats.insert(installer.id.clone(), stats);
            directory.installers.push(installer);
        }
        directory
    }

    /// Демонстрационные монтажники
    pub fn mock() -> serde_json::Result<Self> {
        let entries: Vec<InstallerEntry> = serde_json::from_str(MOCK_INSTALLERS)?;
        let mut directory = Self::default();
        for entry in entries {
            let id = entry.installer.id.clone();
            directory.stats.insert(id.clone(), entry.stats);
            if !entry.history.is_empty() {
                directory.history.insert(id, entry.history);
            }
            directory.installers.push(entry.installer);
        }
        Ok(directory)
    }

    /// Подключить историю работ монтажника
    pub fn with_history(mut self, installer_id: &str, records: Vec<InstallationRecord>) -> Self {
        self.history.insert(installer_id.to_string(), records);
        self
    }

    pub fn list(&self) -> &[Installer] {
        &self.installers
    }

    pub fn get(&self, id: &str) -> Option<&Installer> {
        self.installers.iter().find(|i| i.id == id)
    }

    pub fn stats_for(&self, id: &str) -> Option<&InstallerStats> {
        self.stats.get(id)
    }

    /// История работ монтажника; для неизвестного id - пустой список
    pub fn history_for(&self, id: &str) -> &[InstallationRecord] {
        self.history.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ссылка для выпадающего списка в форме установки
    pub fn lookup_ref(&self, id: &str) -> Option<InstallerRef> {
        self.get(id).map(Installer::to_ref)
    }
}
