use super::dto::{CutDto, InstallationDto};
use super::views::{group_by_panel, PanelGroup};
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use crate::enums::{CutStatus, InstallationStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Уникальный идентификатор установки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstallationId(pub Uuid);

impl InstallationId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for InstallationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InstallationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl fmt::Display for InstallationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Уникальный идентификатор реза
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CutId(pub Uuid);

impl CutId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CutId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CutId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl fmt::Display for CutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Installer reference
// ============================================================================

/// Ссылка на монтажника (id + отображаемое имя)
///
/// Целостность не проверяется: монтажник может отсутствовать в справочнике.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerRef {
    pub id: String,
    pub name: String,
}

impl InstallerRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ============================================================================
// Cut (child entity)
// ============================================================================

/// Рез плёнки, наклеенный на одну деталь кузова
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    pub id: CutId,

    /// Обратная ссылка на установку-владельца
    #[serde(rename = "installationId")]
    pub installation_id: InstallationId,

    /// Деталь кузова; пустая строка - произвольный рез
    #[serde(rename = "panelName")]
    pub panel_name: String,

    #[serde(rename = "squareFeet")]
    pub square_feet: f64,

    /// Рулон, из которого сделан рез
    #[serde(rename = "rollId")]
    pub roll_id: String,

    #[serde(rename = "filmType")]
    pub film_type: String,

    pub status: CutStatus,

    #[serde(rename = "recutReason", default, skip_serializing_if = "Option::is_none")]
    pub recut_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Cut {
    /// Рез из строки формы, привязанный к установке
    ///
    /// Причина перереза сохраняется только для статусов recut/failed.
    pub fn from_dto(dto: &CutDto, installation_id: InstallationId) -> Self {
        let recut_reason = if dto.status.requires_reason() {
            non_blank(dto.recut_reason.as_deref())
        } else {
            None
        };

        Self {
            id: dto.id,
            installation_id,
            panel_name: dto.panel_name.clone(),
            square_feet: dto.square_feet,
            roll_id: dto.roll_id.clone(),
            film_type: dto.film_type.clone(),
            status: dto.status,
            recut_reason,
            notes: non_blank(dto.notes.as_deref()),
            created_at: dto.created_at,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Установка защитной плёнки на автомобиль
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installation {
    pub id: InstallationId,

    /// Дата работ
    pub date: NaiveDate,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "vehicleInfo")]
    pub vehicle_info: String,

    pub installer: InstallerRef,

    pub status: InstallationStatus,

    /// Сумма площадей резов, пересчитывается при каждом сохранении
    #[serde(rename = "totalArea")]
    pub total_area: f64,

    pub cuts: Vec<Cut>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Installation {
    /// Создать новую установку из черновика формы
    ///
    /// Статус по умолчанию - "in-progress".
    pub fn new_for_insert(id: InstallationId, dto: &InstallationDto, now: DateTime<Utc>) -> Self {
        let mut aggregate = Self {
            id,
            date: dto.date,
            customer_name: String::new(),
            vehicle_info: String::new(),
            installer: InstallerRef::default(),
            status: dto.status.unwrap_or_default(),
            total_area: 0.0,
            cuts: Vec::new(),
            notes: None,
            metadata: EntityMetadata::new(now),
        };
        aggregate.update(dto);
        aggregate
    }

    /// Обновить данные из черновика. Id и дата создания не меняются;
    /// статус сохраняется, если в черновике он не задан.
    pub fn update(&mut self, dto: &InstallationDto) {
        self.date = dto.date;
        self.customer_name = dto.customer_name.clone();
        self.vehicle_info = dto.vehicle_info.clone();
        self.installer = dto.installer.clone();
        if let Some(status) = dto.status {
            self.status = status;
        }
        self.cuts = dto.cuts.iter().map(|c| Cut::from_dto(c, self.id)).collect();
        self.notes = non_blank(dto.notes.as_deref());
    }

    /// Пересчитать производные поля
    pub fn recompute_total_area(&mut self) {
        self.total_area = total_area(&self.cuts);
    }

    /// Хук перед записью: пересчёт площади, привязка резов, timestamp
    pub fn before_write(&mut self, now: DateTime<Utc>) {
        let id = self.id;
        for cut in &mut self.cuts {
            cut.installation_id = id;
        }
        self.recompute_total_area();
        self.metadata.touch(now);
        self.metadata.increment_version();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.metadata.created_at()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.metadata.updated_at
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Резы, сгруппированные по деталям
    pub fn cuts_by_panel(&self) -> Vec<PanelGroup<'_, Cut>> {
        group_by_panel(&self.cuts)
    }

    /// Есть ли резы, требующие перереза или испорченные
    pub fn has_problem_cuts(&self) -> bool {
        self.cuts.iter().any(|c| c.status.requires_reason())
    }
}

impl AggregateRoot for Installation {
    type Id = InstallationId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "installation"
    }

    fn element_name() -> &'static str {
        "Installation"
    }

    fn list_name() -> &'static str {
        "Installations"
    }
}

/// Сумма площадей резов
pub fn total_area<'a, I>(cuts: I) -> f64
where
    I: IntoIterator<Item = &'a Cut>,
{
    cuts.into_iter().map(|c| c.square_feet).sum()
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, hour, 0, 0).unwrap()
    }

    fn cut_dto(n: u128, panel: &str, area: f64, status: CutStatus) -> CutDto {
        CutDto {
            id: CutId(Uuid::from_u128(n)),
            installation_id: None,
            panel_name: panel.into(),
            square_feet: area,
            roll_id: "R123456".into(),
            film_type: "XPEL Ultimate Plus".into(),
            status,
            recut_reason: Some("Debris under film".into()),
            notes: None,
            created_at: at(9),
        }
    }

    fn draft() -> InstallationDto {
        let mut dto = InstallationDto::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        dto.customer_name = "John Doe".into();
        dto.vehicle_info = "2023 Tesla Model 3".into();
        dto.installer = InstallerRef::new("1", "Matt Anderson");
        dto.cuts = vec![
            cut_dto(1, "Hood", 15.5, CutStatus::Completed),
            cut_dto(2, "Front Bumper", 12.0, CutStatus::Recut),
        ];
        dto
    }

    #[test]
    fn test_new_for_insert() {
        let id = InstallationId(Uuid::from_u128(100));
        let mut inst = Installation::new_for_insert(id, &draft(), at(9));
        inst.before_write(at(9));

        assert_eq!(inst.total_area, 27.5);
        assert_eq!(inst.status, InstallationStatus::InProgress);
        assert_eq!(inst.created_at(), at(9));
        assert_eq!(inst.updated_at(), at(9));
        assert!(inst.cuts.iter().all(|c| c.installation_id == id));
    }

    #[test]
    fn test_recut_reason_only_kept_for_recut_or_failed() {
        let id = InstallationId(Uuid::from_u128(100));
        let inst = Installation::new_for_insert(id, &draft(), at(9));

        assert_eq!(inst.cuts[0].recut_reason, None);
        assert_eq!(inst.cuts[1].recut_reason.as_deref(), Some("Debris under film"));
        assert!(inst.has_problem_cuts());
    }

    #[test]
    fn test_update_keeps_status_when_not_given() {
        let id = InstallationId(Uuid::from_u128(100));
        let mut dto = draft();
        dto.status = Some(InstallationStatus::NeedsRecut);
        let mut inst = Installation::new_for_insert(id, &dto, at(9));

        dto.status = None;
        dto.customer_name = "Jane Doe".into();
        inst.update(&dto);
        inst.before_write(at(12));

        assert_eq!(inst.status, InstallationStatus::NeedsRecut);
        assert_eq!(inst.customer_name, "Jane Doe");
        assert_eq!(inst.created_at(), at(9));
        assert_eq!(inst.updated_at(), at(12));
    }

    #[test]
    fn test_serialized_shape() {
        let id = InstallationId(Uuid::from_u128(100));
        let mut inst = Installation::new_for_insert(id, &draft(), at(9));
        inst.before_write(at(9));
        let json = serde_json::to_value(&inst).unwrap();

        assert_eq!(json["customerName"], "John Doe");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["totalArea"], 27.5);
        assert_eq!(json["cuts"][1]["status"], "recut");
        assert_eq!(json["cuts"][0]["installationId"], id.as_string());
        assert!(json["cuts"][0].get("recutReason").is_none());
        assert!(json.get("createdAt").is_some());

        let back: Installation = serde_json::from_value(json).unwrap();
        assert_eq!(back, inst);
    }

    #[test]
    fn test_aggregate_naming() {
        assert_eq!(Installation::full_name(), "a001_installation");
    }
}
