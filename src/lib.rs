pub mod analytics;
pub mod columns;
pub mod config;
pub mod details;
pub mod errors;
pub mod filters;
pub mod fixtures;
pub mod grid;
pub mod records;
pub mod session;
pub mod ui;
