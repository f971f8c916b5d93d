use crate::domain::a001_installation::{seed, InstallationStore};
use crate::domain::a002_installer::InstallerDirectory;
use crate::shared::config::Config;
use anyhow::{Context, Result};

/// Собрать хранилище установок и справочник монтажников по конфигурации
pub fn build_state(config: &Config) -> Result<(InstallationStore, InstallerDirectory)> {
    let mut store = InstallationStore::with_system_providers();

    if !config.store.seed_mock_data {
        tracing::info!("Mock data disabled, starting with an empty store");
        return Ok((store, InstallerDirectory::default()));
    }

    let installations = seed::mock_installations().context("Failed to parse mock installations")?;
    let directory = InstallerDirectory::mock().context("Failed to parse mock installers")?;

    store.load(installations);
    tracing::info!(
        "Seeded {} installations and {} installers",
        store.len(),
        directory.list().len()
    );

    Ok((store, directory))
}
