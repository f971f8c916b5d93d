pub mod aggregate;
pub mod dto;
pub mod views;

pub use aggregate::{Cut, CutId, Installation, InstallationId, InstallerRef};
pub use dto::{CutDto, InstallationDto};
pub use views::{filter, group_by_panel, PanelCut, PanelGroup, StatusFilter};
