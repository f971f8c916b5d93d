pub mod cut_status;
pub mod installation_status;

pub use cut_status::CutStatus;
pub use installation_status::{InstallationStatus, StatusBadge};
