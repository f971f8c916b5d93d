use super::error::StoreError;
use super::repository::InstallationRepository;
use crate::shared::providers::{
    Clock, IdProvider, RandomRollScanner, RollScanner, SystemClock, UuidV4Provider,
};
use contracts::domain::a001_installation::{
    self, Cut, CutDto, CutId, Installation, InstallationDto, InstallationId, PanelGroup,
    StatusFilter,
};
use contracts::shared::panel_catalog::PanelPreset;
use std::collections::HashSet;

/// Хранилище установок
///
/// Владеет коллекцией записей и источниками id/времени. Все операции
/// синхронные; проверка выполняется до изменения коллекции.
pub struct InstallationStore {
    repository: InstallationRepository,
    ids: Box<dyn IdProvider>,
    clock: Box<dyn Clock>,
    scanner: Box<dyn RollScanner>,
}

impl InstallationStore {
    pub fn new(
        ids: Box<dyn IdProvider>,
        clock: Box<dyn Clock>,
        scanner: Box<dyn RollScanner>,
    ) -> Self {
        Self {
            repository: InstallationRepository::new(),
            ids,
            clock,
            scanner,
        }
    }

    pub fn with_system_providers() -> Self {
        Self::new(
            Box::new(UuidV4Provider),
            Box::new(SystemClock),
            Box::new(RandomRollScanner),
        )
    }

    /// Загрузка готовых записей (seed-данные) без пересчёта
    pub fn load(&mut self, records: Vec<Installation>) {
        tracing::debug!("Loading {} installations", records.len());
        self.repository.extend(records);
    }

    // ========================================================================
    // Drafts
    // ========================================================================

    /// Пустой черновик на сегодняшнюю дату
    pub fn new_draft(&self) -> InstallationDto {
        InstallationDto::new(self.clock.now().date_naive())
    }

    /// Черновик для редактирования существующей записи
    pub fn edit_draft(&self, id: InstallationId) -> Result<InstallationDto, StoreError> {
        self.repository
            .get_by_id(id)
            .map(InstallationDto::from)
            .ok_or(StoreError::NotFound(id))
    }

    /// Добавить рез в черновик
    ///
    /// Без имени детали - произвольный рез, без площади - 0.
    /// Итоговая площадь записи пересчитывается только при сохранении.
    pub fn add_cut<'d>(
        &mut self,
        draft: &'d mut InstallationDto,
        panel_name: Option<&str>,
        default_area: Option<f64>,
    ) -> &'d mut CutDto {
        let id = self.ids.cut_id();
        let now = self.clock.now();
        tracing::debug!(
            "Adding cut {} (panel: {:?}, area: {:?})",
            id,
            panel_name,
            default_area
        );
        draft.push_cut(id, panel_name, default_area, now)
    }

    /// Быстрое добавление типовой детали
    pub fn add_preset_cut<'d>(
        &mut self,
        draft: &'d mut InstallationDto,
        preset: &PanelPreset,
    ) -> &'d mut CutDto {
        self.add_cut(draft, Some(preset.name), Some(preset.avg_area))
    }

    /// Заполнить id рулона реза через сканер
    pub fn scan_roll(
        &mut self,
        draft: &mut InstallationDto,
        cut_id: CutId,
    ) -> Result<String, StoreError> {
        let cut = draft.cut_mut(cut_id).ok_or(StoreError::UnknownCut(cut_id))?;
        let roll_id = self.scanner.scan();
        tracing::debug!("Scanned roll {} for cut {}", roll_id, cut_id);
        cut.roll_id = roll_id.clone();
        Ok(roll_id)
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Создание новой установки
    pub fn create(&mut self, dto: &InstallationDto) -> Result<Installation, StoreError> {
        // Валидация
        if let Err(errors) = dto.validate() {
            tracing::warn!("Rejected new installation: {}", errors);
            return Err(errors.into());
        }

        let id = self.ids.installation_id();
        let now = self.clock.now();
        let mut aggregate = Installation::new_for_insert(id, dto, now);

        // Черновик сохранённой записи или повторно сохраняемый черновик:
        // резы получают новые id, чтобы не делить их с другой записью
        if dto.id.is_some() || self.has_taken_cut_ids(&aggregate.cuts) {
            tracing::debug!("Reassigning cut ids for new installation {}", id);
            for cut in &mut aggregate.cuts {
                cut.id = self.ids.cut_id();
            }
        }

        // Before write
        aggregate.before_write(now);

        self.repository.insert(aggregate.clone());
        tracing::info!(
            "Created installation {} for {} ({} cuts, {:.1} ft²)",
            id,
            aggregate.customer_name,
            aggregate.cuts.len(),
            aggregate.total_area
        );
        Ok(aggregate)
    }

    /// Id реза уже есть в хранилище или повторяется в списке
    fn has_taken_cut_ids(&self, cuts: &[Cut]) -> bool {
        let mut seen: HashSet<CutId> = self
            .list()
            .iter()
            .flat_map(|i| i.cuts.iter().map(|c| c.id))
            .collect();
        cuts.iter().any(|c| !seen.insert(c.id))
    }

    /// Обновление существующей установки (позиция в списке сохраняется)
    pub fn update(
        &mut self,
        id: InstallationId,
        dto: &InstallationDto,
    ) -> Result<Installation, StoreError> {
        if let Err(errors) = dto.validate() {
            tracing::warn!("Rejected update of installation {}: {}", id, errors);
            return Err(errors.into());
        }

        let mut aggregate = match self.repository.get_by_id(id) {
            Some(existing) => existing.clone(),
            None => {
                tracing::warn!("Update of unknown installation {}", id);
                return Err(StoreError::NotFound(id));
            }
        };

        aggregate.update(dto);
        aggregate.before_write(self.clock.now());

        if !self.repository.update(aggregate.clone()) {
            return Err(StoreError::NotFound(id));
        }
        tracing::info!(
            "Updated installation {} ({} cuts, {:.1} ft²)",
            id,
            aggregate.cuts.len(),
            aggregate.total_area
        );
        Ok(aggregate)
    }

    /// Сохранение из диалога: создание или обновление по id черновика
    pub fn save(&mut self, dto: &InstallationDto) -> Result<Installation, StoreError> {
        match dto.id {
            Some(id) => self.update(id, dto),
            None => self.create(dto),
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn get(&self, id: InstallationId) -> Option<&Installation> {
        self.repository.get_by_id(id)
    }

    pub fn list(&self) -> &[Installation] {
        self.repository.list_all()
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    pub fn filter(&self, status: StatusFilter, search: &str) -> Vec<&Installation> {
        let result = a001_installation::filter(self.list(), status, search);
        tracing::debug!(
            "Filter status={} search={:?}: {} of {}",
            status.code(),
            search,
            result.len(),
            self.len()
        );
        result
    }

    /// Резы записи по деталям
    pub fn group_by_panel(&self, id: InstallationId) -> Result<Vec<PanelGroup<'_, Cut>>, StoreError> {
        self.get(id)
            .map(Installation::cuts_by_panel)
            .ok_or(StoreError::NotFound(id))
    }

    /// Записи монтажника в порядке коллекции
    pub fn installer_history(&self, installer_id: &str) -> Vec<&Installation> {
        self.list()
            .iter()
            .filter(|i| i.installer.id == installer_id)
            .collect()
    }

    /// Расход плёнки монтажником, ft²
    pub fn film_usage(&self, installer_id: &str) -> f64 {
        self.installer_history(installer_id)
            .iter()
            .map(|i| i.total_area)
            .sum()
    }
}
