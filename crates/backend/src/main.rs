use backend::shared::config;
use backend::system;
use contracts::domain::a001_installation::{group_by_panel, StatusFilter};
use contracts::enums::InstallationStatus;

fn main() -> anyhow::Result<()> {
    let config = config::load_config()?;
    system::tracing::initialize(&config)?;

    let (store, directory) = system::initialization::build_state(&config)?;

    tracing::info!("Installations ({}):", store.len());
    for inst in store.filter(StatusFilter::All, "") {
        tracing::info!(
            "  {} | {:<12} | {:<20} | {:<14} | {:>6.1} ft² | {:<11} | {} cuts",
            inst.date,
            inst.customer_name,
            inst.vehicle_info,
            inst.installer.name,
            inst.total_area,
            inst.status.display_name(),
            inst.cuts.len()
        );
        for group in group_by_panel(&inst.cuts) {
            let panel = if group.panel_name.is_empty() {
                "Custom"
            } else {
                group.panel_name
            };
            tracing::debug!(
                "      {}: {} cut(s), {:.1} ft²{}",
                panel,
                group.len(),
                group.total_area(),
                if group.needs_attention() { " (needs attention)" } else { "" }
            );
        }
    }

    let pending = store.filter(StatusFilter::Only(InstallationStatus::NeedsRecut), "");
    if !pending.is_empty() {
        tracing::warn!("{} installation(s) need a recut", pending.len());
    }

    for installer in directory.list() {
        let usage = store.film_usage(&installer.id);
        match directory.stats_for(&installer.id) {
            Some(stats) => tracing::info!(
                "Installer {} ({:?}): {} installs, avg {}, efficiency {:.0}%, {:.1} ft² in current records",
                installer.name,
                installer.role,
                stats.total_installations,
                stats.format_install_time(),
                stats.efficiency(),
                usage
            ),
            None => tracing::info!(
                "Installer {}: {:.1} ft² in current records",
                installer.name,
                usage
            ),
        }
        for record in directory.history_for(&installer.id) {
            tracing::debug!(
                "      {} | {:<20} | {:>6.1} ft² | {} | {}/5 ({})",
                record.date,
                record.vehicle_type,
                record.film_used,
                record.format_time_spent(),
                record.customer_satisfaction,
                record.satisfaction_band().code()
            );
        }
    }

    Ok(())
}
