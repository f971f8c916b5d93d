//! Демонстрационные установки

use contracts::domain::a001_installation::Installation;

/// Записи в формате сериализации агрегата; площадь хранится как есть
const MOCK_INSTALLATIONS: &str = r#"[
  {
    "id": "00000000-0000-0000-0000-000000000001",
    "date": "2024-03-15",
    "customerName": "John Doe",
    "vehicleInfo": "2023 Tesla Model 3",
    "installer": { "id": "1", "name": "Matt Anderson" },
    "status": "completed",
    "totalArea": 125.5,
    "cuts": [
      {
        "id": "00000000-0000-0000-0000-0000000000c1",
        "installationId": "00000000-0000-0000-0000-000000000001",
        "panelName": "Hood",
        "squareFeet": 15.5,
        "rollId": "R123456",
        "filmType": "XPEL Ultimate Plus",
        "status": "completed",
        "createdAt": "2024-03-15T09:00:00Z"
      },
      {
        "id": "00000000-0000-0000-0000-0000000000c2",
        "installationId": "00000000-0000-0000-0000-000000000001",
        "panelName": "Front Bumper",
        "squareFeet": 12.0,
        "rollId": "R123457",
        "filmType": "XPEL Ultimate Plus",
        "status": "completed",
        "createdAt": "2024-03-15T09:30:00Z"
      }
    ],
    "notes": "Clean installation, customer very satisfied",
    "createdAt": "2024-03-15T09:00:00Z",
    "updatedAt": "2024-03-15T14:00:00Z"
  },
  {
    "id": "00000000-0000-0000-0000-000000000002",
    "date": "2024-03-14",
    "customerName": "Alice Smith",
    "vehicleInfo": "2024 BMW M4",
    "installer": { "id": "2", "name": "Sarah Johnson" },
    "status": "needs-recut",
    "totalArea": 165.2,
    "cuts": [
      {
        "id": "00000000-0000-0000-0000-0000000000c3",
        "installationId": "00000000-0000-0000-0000-000000000002",
        "panelName": "Hood",
        "squareFeet": 16.0,
        "rollId": "R123458",
        "filmType": "XPEL Ultimate Plus",
        "status": "recut",
        "recutReason": "Debris under film",
        "createdAt": "2024-03-14T10:00:00Z"
      }
    ],
    "notes": "Hood needs recut due to contamination",
    "createdAt": "2024-03-14T10:00:00Z",
    "updatedAt": "2024-03-14T16:00:00Z"
  },
  {
    "id": "00000000-0000-0000-0000-000000000003",
    "date": "2024-03-14",
    "customerName": "Bob Wilson",
    "vehicleInfo": "2023 Porsche 911",
    "installer": { "id": "1", "name": "Matt Anderson" },
    "status": "in-progress",
    "totalArea": 185.8,
    "cuts": [
      {
        "id": "00000000-0000-0000-0000-0000000000c4",
        "installationId": "00000000-0000-0000-0000-000000000003",
        "panelName": "Full Front",
        "squareFeet": 45.0,
        "rollId": "R123459",
        "filmType": "XPEL Ultimate Plus",
        "status": "completed",
        "createdAt": "2024-03-14T13:00:00Z"
      }
    ],
    "notes": "Complex curves, taking extra time for precision",
    "createdAt": "2024-03-14T13:00:00Z",
    "updatedAt": "2024-03-14T17:00:00Z"
  }
]"#;

pub fn mock_installations() -> serde_json::Result<Vec<Installation>> {
    serde_json::from_str(MOCK_INSTALLATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{CutStatus, InstallationStatus};

    #[test]
    fn test_mock_installations_parse() {
        let items = mock_installations().unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].customer_name, "John Doe");
        assert_eq!(items[0].status, InstallationStatus::Completed);
        assert_eq!(items[0].total_area, 125.5);
        assert_eq!(items[0].cuts.len(), 2);

        assert_eq!(items[1].status, InstallationStatus::NeedsRecut);
        assert_eq!(items[1].cuts[0].status, CutStatus::Recut);
        assert_eq!(items[1].cuts[0].recut_reason.as_deref(), Some("Debris under film"));
        assert!(items[1].has_problem_cuts());

        for item in &items {
            assert!(item.cuts.iter().all(|c| c.installation_id == item.id));
            assert!(item.updated_at() > item.created_at());
        }
    }
}
