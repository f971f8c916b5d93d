use super::aggregate::{Cut, CutId, Installation, InstallationId, InstallerRef};
use crate::enums::{CutStatus, InstallationStatus};
use crate::shared::validation::ValidationErrors;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Черновик установки, который редактирует диалог
///
/// Один типизированный объект на всю форму; проверяется целиком при сохранении.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallationDto {
    /// None для новой записи
    pub id: Option<InstallationId>,

    pub date: NaiveDate,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "vehicleInfo")]
    pub vehicle_info: String,

    pub installer: InstallerRef,

    pub cuts: Vec<CutDto>,

    pub notes: Option<String>,

    /// Не задан - при создании "in-progress", при обновлении остаётся прежним
    pub status: Option<InstallationStatus>,
}

impl InstallationDto {
    /// Пустой черновик на указанную дату
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: None,
            date,
            customer_name: String::new(),
            vehicle_info: String::new(),
            installer: InstallerRef::default(),
            cuts: Vec::new(),
            notes: None,
            status: None,
        }
    }

    /// Валидация формы: возвращает все ошибки сразу
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("customerName", &self.customer_name);
        errors.require("vehicleInfo", &self.vehicle_info);
        errors.require("installer", &self.installer.id);

        if self.cuts.is_empty() {
            errors.add("cuts", "At least one cut is required");
        }
        for (index, cut) in self.cuts.iter().enumerate() {
            errors.require_non_negative(format!("cuts[{}].squareFeet", index), cut.square_feet);
        }

        errors.into_result()
    }

    /// Текущая площадь черновика (для подвала формы)
    pub fn total_area(&self) -> f64 {
        self.cuts.iter().map(|c| c.square_feet).sum()
    }

    /// Добавить рез в конец списка
    ///
    /// Площадь установки не пересчитывается до сохранения.
    pub fn push_cut(
        &mut self,
        id: CutId,
        panel_name: Option<&str>,
        default_area: Option<f64>,
        now: DateTime<Utc>,
    ) -> &mut CutDto {
        let cut = CutDto {
            id,
            installation_id: self.id,
            panel_name: panel_name.unwrap_or_default().to_string(),
            square_feet: default_area.unwrap_or(0.0),
            roll_id: String::new(),
            film_type: String::new(),
            status: CutStatus::Completed,
            recut_reason: None,
            notes: None,
            created_at: now,
        };
        self.cuts.push(cut);
        let last = self.cuts.len() - 1;
        &mut self.cuts[last]
    }

    pub fn cut_mut(&mut self, id: CutId) -> Option<&mut CutDto> {
        self.cuts.iter_mut().find(|c| c.id == id)
    }

    /// Удалить рез из черновика
    pub fn remove_cut(&mut self, id: CutId) -> Option<CutDto> {
        let index = self.cuts.iter().position(|c| c.id == id)?;
        Some(self.cuts.remove(index))
    }
}

impl From<&Installation> for InstallationDto {
    fn from(inst: &Installation) -> Self {
        Self {
            id: Some(inst.id),
            date: inst.date,
            customer_name: inst.customer_name.clone(),
            vehicle_info: inst.vehicle_info.clone(),
            installer: inst.installer.clone(),
            cuts: inst.cuts.iter().map(CutDto::from).collect(),
            notes: inst.notes.clone(),
            status: Some(inst.status),
        }
    }
}

/// Строка реза в форме
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutDto {
    pub id: CutId,

    #[serde(rename = "installationId")]
    pub installation_id: Option<InstallationId>,

    #[serde(rename = "panelName")]
    pub panel_name: String,

    #[serde(rename = "squareFeet")]
    pub square_feet: f64,

    #[serde(rename = "rollId")]
    pub roll_id: String,

    #[serde(rename = "filmType")]
    pub film_type: String,

    pub status: CutStatus,

    #[serde(rename = "recutReason")]
    pub recut_reason: Option<String>,

    pub notes: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<&Cut> for CutDto {
    fn from(cut: &Cut) -> Self {
        Self {
            id: cut.id,
            installation_id: Some(cut.installation_id),
            panel_name: cut.panel_name.clone(),
            square_feet: cut.square_feet,
            roll_id: cut.roll_id.clone(),
            film_type: cut.film_type.clone(),
            status: cut.status,
            recut_reason: cut.recut_reason.clone(),
            notes: cut.notes.clone(),
            created_at: cut.created_at,
        }
    }
}
