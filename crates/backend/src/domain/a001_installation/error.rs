use contracts::domain::a001_installation::{CutId, InstallationId};
use contracts::shared::validation::ValidationErrors;
use thiserror::Error;

/// Ошибки хранилища установок
///
/// Любая ошибка относится к одной попытке сохранения и не меняет состояние.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Installation not found: {0}")]
    NotFound(InstallationId),

    #[error("Cut not found in draft: {0}")]
    UnknownCut(CutId),
}

impl StoreError {
    /// Ошибки полей для вывода в форме
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            StoreError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
