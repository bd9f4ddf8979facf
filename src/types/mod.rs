pub mod assessment;
pub mod config;
pub mod mode;
pub mod report;
pub mod settings;
