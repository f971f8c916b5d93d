//! Derived views over installations: panel grouping and list filtering

use super::aggregate::{Cut, Installation};
use super::dto::CutDto;
use crate::enums::{CutStatus, InstallationStatus};
use std::collections::HashMap;

/// Общее для сохранённых резов и строк формы
pub trait PanelCut {
    fn panel_name(&self) -> &str;
    fn square_feet(&self) -> f64;
    fn status(&self) -> CutStatus;
}

impl PanelCut for Cut {
    fn panel_name(&self) -> &str {
        &self.panel_name
    }

    fn square_feet(&self) -> f64 {
        self.square_feet
    }

    fn status(&self) -> CutStatus {
        self.status
    }
}

impl PanelCut for CutDto {
    fn panel_name(&self) -> &str {
        &self.panel_name
    }

    fn square_feet(&self) -> f64 {
        self.square_feet
    }

    fn status(&self) -> CutStatus {
        self.status
    }
}

/// Резы одной детали в исходном порядке
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGroup<'a, C> {
    pub panel_name: &'a str,
    pub cuts: Vec<&'a C>,
}

impl<C: PanelCut> PanelGroup<'_, C> {
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn total_area(&self) -> f64 {
        self.cuts.iter().map(|c| c.square_feet()).sum()
    }

    /// Есть перерез или брак
    pub fn needs_attention(&self) -> bool {
        self.cuts.iter().any(|c| c.status().requires_reason())
    }
}

/// Группировка резов по точному имени детали (с учётом регистра)
///
/// Группы идут в порядке первого появления детали.
pub fn group_by_panel<C: PanelCut>(cuts: &[C]) -> Vec<PanelGroup<'_, C>> {
    let mut groups: Vec<PanelGroup<'_, C>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for cut in cuts {
        let name = cut.panel_name();
        match index.get(name) {
            Some(&pos) => groups[pos].cuts.push(cut),
            None => {
                index.insert(name, groups.len());
                groups.push(PanelGroup {
                    panel_name: name,
                    cuts: vec![cut],
                });
            }
        }
    }

    groups
}

/// Фильтр списка по статусу
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(InstallationStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: InstallationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }

    /// "all" или код статуса
    pub fn from_code(code: &str) -> Option<Self> {
        if code == "all" {
            return Some(StatusFilter::All);
        }
        InstallationStatus::from_code(code).map(StatusFilter::Only)
    }
}

/// Отбор установок по статусу и строке поиска
///
/// Поиск без учёта регистра по клиенту или автомобилю; порядок сохраняется.
pub fn filter<'a>(
    records: &'a [Installation],
    status: StatusFilter,
    search: &str,
) -> Vec<&'a Installation> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|inst| status.matches(inst.status))
        .filter(|inst| {
            needle.is_empty()
                || inst.customer_name.to_lowercase().contains(&needle)
                || inst.vehicle_info.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_installation::aggregate::{CutId, InstallationId, InstallerRef};
    use crate::domain::a001_installation::dto::InstallationDto;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn dto_cut(n: u128, panel: &str, area: f64, status: CutStatus) -> CutDto {
        CutDto {
            id: CutId(Uuid::from_u128(n)),
            installation_id: None,
            panel_name: panel.into(),
            square_feet: area,
            roll_id: String::new(),
            film_type: String::new(),
            status,
            recut_reason: None,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap(),
        }
    }

    fn record(n: u128, customer: &str, vehicle: &str, status: InstallationStatus) -> Installation {
        let mut dto = InstallationDto::new(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        dto.customer_name = customer.into();
        dto.vehicle_info = vehicle.into();
        dto.installer = InstallerRef::new("1", "Matt Anderson");
        dto.status = Some(status);
        dto.cuts = vec![dto_cut(n, "Hood", 10.0, CutStatus::Completed)];
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 10, 0, 0).unwrap();
        let mut inst = Installation::new_for_insert(InstallationId(Uuid::from_u128(n)), &dto, now);
        inst.before_write(now);
        inst
    }

    fn records() -> Vec<Installation> {
        vec![
            record(1, "John Doe", "2023 Tesla Model 3", InstallationStatus::Completed),
            record(2, "Alice Smith", "2024 BMW M4", InstallationStatus::NeedsRecut),
            record(3, "Bob Wilson", "2023 Porsche 911", InstallationStatus::InProgress),
            record(4, "Tess Morgan", "2022 Audi RS6", InstallationStatus::Completed),
        ]
    }

    fn ids(list: &[&Installation]) -> Vec<u128> {
        list.iter().map(|i| i.id.value().as_u128()).collect()
    }

    #[test]
    fn test_group_by_panel_first_seen_order() {
        let cuts = vec![
            dto_cut(1, "Hood", 15.5, CutStatus::Completed),
            dto_cut(2, "Front Bumper", 12.0, CutStatus::Completed),
            dto_cut(3, "Hood", 3.0, CutStatus::Recut),
            dto_cut(4, "", 1.0, CutStatus::Completed),
            dto_cut(5, "hood", 2.0, CutStatus::Completed),
        ];
        let groups = group_by_panel(&cuts);

        let names: Vec<&str> = groups.iter().map(|g| g.panel_name).collect();
        assert_eq!(names, vec!["Hood", "Front Bumper", "", "hood"]);

        let hood: Vec<CutId> = groups[0].cuts.iter().map(|c| c.id).collect();
        assert_eq!(hood, vec![CutId(Uuid::from_u128(1)), CutId(Uuid::from_u128(3))]);
        assert_eq!(groups[0].total_area(), 18.5);
        assert!(groups[0].needs_attention());
        assert!(!groups[1].needs_attention());
    }

    #[test]
    fn test_group_by_panel_is_a_permutation() {
        let cuts: Vec<CutDto> = (0..12u128)
            .map(|n| {
                let panel = ["Doors", "Hood", "Mirrors"][(n % 3) as usize];
                dto_cut(n, panel, n as f64, CutStatus::Completed)
            })
            .collect();
        let groups = group_by_panel(&cuts);

        let flattened: Vec<&CutDto> = groups.iter().flat_map(|g| g.cuts.iter().copied()).collect();
        assert_eq!(flattened.len(), cuts.len());
        for group in &groups {
            let positions: Vec<usize> = group
                .cuts
                .iter()
                .map(|c| cuts.iter().position(|x| x.id == c.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_group_by_panel_empty() {
        let cuts: Vec<CutDto> = Vec::new();
        assert!(group_by_panel(&cuts).is_empty());
    }

    #[test]
    fn test_filter_all_empty_is_identity() {
        let list = records();
        let out = filter(&list, StatusFilter::All, "");
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_by_status() {
        let list = records();
        let out = filter(&list, StatusFilter::Only(InstallationStatus::Completed), "");
        assert_eq!(ids(&out), vec![1, 4]);
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let list = records();
        assert_eq!(ids(&filter(&list, StatusFilter::All, "TESLA")), vec![1]);
        assert_eq!(ids(&filter(&list, StatusFilter::All, "alice")), vec![2]);
        assert_eq!(ids(&filter(&list, StatusFilter::All, "tes")), vec![1, 4]);
        assert!(filter(&list, StatusFilter::All, "ferrari").is_empty());
    }

    #[test]
    fn test_filter_predicates_compose() {
        let list = records();
        for code in ["completed", "in-progress", "needs-recut"] {
            let status = StatusFilter::from_code(code).unwrap();
            for text in ["", "tes", "20", "o"] {
                let both = filter(&list, status, text);
                let by_text = filter(&list, StatusFilter::All, text);
                let by_status = filter(&list, status, "");
                for inst in both {
                    assert!(by_text.iter().any(|x| x.id == inst.id));
                    assert!(by_status.iter().any(|x| x.id == inst.id));
                }
            }
        }
    }

    #[test]
    fn test_status_filter_codes() {
        assert_eq!(StatusFilter::from_code("all"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_code("needs-recut"),
            Some(StatusFilter::Only(InstallationStatus::NeedsRecut))
        );
        assert_eq!(StatusFilter::from_code("unknown"), None);
        assert_eq!(StatusFilter::default().code(), "all");

        let mut filters = vec![StatusFilter::All];
        filters.extend(InstallationStatus::all().into_iter().map(StatusFilter::Only));
        for f in filters {
            assert_eq!(StatusFilter::from_code(f.code()), Some(f));
        }
    }
}
