pub mod panel_catalog;
pub mod validation;
