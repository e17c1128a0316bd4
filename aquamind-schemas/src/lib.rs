pub mod aquarium;
pub mod catalog;
pub mod file_formats;
pub mod maintenance;
pub mod parameter;
pub mod reading;
pub mod reminder;
