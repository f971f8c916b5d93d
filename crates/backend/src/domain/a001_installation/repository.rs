use contracts::domain::a001_installation::{Installation, InstallationId};

/// Упорядоченная коллекция установок в памяти (новые - первыми)
#[derive(Debug, Default, Clone)]
pub struct InstallationRepository {
    items: Vec<Installation>,
}

impl InstallationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_all(&self) -> &[Installation] {
        &self.items
    }

    pub fn get_by_id(&self, id: InstallationId) -> Option<&Installation> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn position(&self, id: InstallationId) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    /// Вставка в начало коллекции
    pub fn insert(&mut self, aggregate: Installation) -> InstallationId {
        let id = aggregate.id;
        self.items.insert(0, aggregate);
        id
    }

    /// Замена записи на её месте. false, если записи нет.
    pub fn update(&mut self, aggregate: Installation) -> bool {
        match self.position(aggregate.id) {
            Some(pos) => {
                self.items[pos] = aggregate;
                true
            }
            None => false,
        }
    }

    /// Загрузка готовых записей в конец коллекции, в переданном порядке
    pub fn extend(&mut self, records: impl IntoIterator<Item = Installation>) {
        self.items.extend(records);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
