pub mod aquarium;
pub mod catalog;
pub mod classifier;
pub mod error;
pub mod evaluation;
pub mod history;
pub mod logger;
pub mod maintenance;
pub mod messages;
pub mod records;
pub mod reminders;
