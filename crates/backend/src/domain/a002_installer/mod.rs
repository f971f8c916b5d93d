pub mod service;

pub use service::InstallerDirectory;
