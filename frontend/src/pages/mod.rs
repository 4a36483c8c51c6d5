pub mod dashboard;
pub mod portfolio;
