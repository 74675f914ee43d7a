mod about;
mod contact;
mod landing;
mod projects;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use landing::LandingPage;
pub use projects::ProjectsPage;
