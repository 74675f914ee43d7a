pub mod collection;
pub mod contact;
pub mod dashboard;
pub mod equipment;
pub mod project;
pub mod settings;
pub mod user;
