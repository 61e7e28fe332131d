pub mod matches;
pub mod profile;
pub mod records;
pub mod settings;
