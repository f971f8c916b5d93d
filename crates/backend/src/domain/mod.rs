pub mod a001_installation;
pub mod a002_installer;
