use serde::Serialize;

/// Типовая деталь кузова с характерной площадью плёнки
///
/// Используется только для быстрого заполнения формы.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelPreset {
    pub name: &'static str,
    #[serde(rename = "avgArea")]
    pub avg_area: f64,
}

pub const COMMON_PANELS: [PanelPreset; 8] = [
    PanelPreset { name: "Hood", avg_area: 15.5 },
    PanelPreset { name: "Front Bumper", avg_area: 12.0 },
    PanelPreset { name: "Rear Bumper", avg_area: 11.5 },
    PanelPreset { name: "Front Fenders", avg_area: 8.0 },
    PanelPreset { name: "Doors", avg_area: 10.0 },
    PanelPreset { name: "Mirrors", avg_area: 2.5 },
    PanelPreset { name: "Rockers", avg_area: 6.0 },
    PanelPreset { name: "Trunk", avg_area: 12.0 },
];

/// Поиск по точному имени детали
pub fn find_panel(name: &str) -> Option<&'static PanelPreset> {
    COMMON_PANELS.iter().find(|p| p.name == name)
}

/// Две колонки кнопок быстрого добавления (первая длиннее при нечётном числе)
pub fn quick_add_columns() -> (&'static [PanelPreset], &'static [PanelPreset]) {
    COMMON_PANELS.split_at(COMMON_PANELS.len().div_ceil(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_panel() {
        assert_eq!(find_panel("Hood").map(|p| p.avg_area), Some(15.5));
        assert!(find_panel("hood").is_none());
        assert!(find_panel("Full Front").is_none());
    }

    #[test]
    fn test_quick_add_columns() {
        let (left, right) = quick_add_columns();
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 4);
        assert_eq!(left[0].name, "Hood");
        assert_eq!(right[3].name, "Trunk");
    }
}
