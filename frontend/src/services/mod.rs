pub mod auth;
pub mod collections;
pub mod contact;
pub mod http;
pub mod projects;
pub mod settings;
pub mod users;
