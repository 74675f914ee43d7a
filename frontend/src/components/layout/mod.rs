mod admin;
mod public;

pub use admin::AdminLayout;
pub use public::PublicLayout;
