pub mod aggregate;

pub use aggregate::{
    InstallationRecord, Installer, InstallerRole, InstallerStats, SatisfactionBand,
};
