pub mod error;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::StoreError;
pub use repository::InstallationRepository;
pub use service::InstallationStore;
