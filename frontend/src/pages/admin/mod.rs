//! Back-office pages. Each one receives the session and reports a 401 back
//! to the application root, which ends the session.

use common::error::ApiError;
use common::session::Session;
use yew::{Callback, Properties};

use crate::components::feedback::alert;

mod collections;
mod dashboard;
mod login;
mod messages;
mod projects;
mod settings;
mod users;

pub use collections::CollectionsPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use messages::MessagesPage;
pub use projects::AdminProjectsPage;
pub use settings::SettingsPage;
pub use users::UsersPage;

#[derive(Properties, PartialEq, Clone)]
pub struct AdminProps {
    pub session: Session,
    pub on_unauthorized: Callback<()>,
}

/// Surfaces a failed call: an expired session goes back to the root, anything
/// else is shown in an alert.
pub fn report(err: &ApiError, on_unauthorized: &Callback<()>) {
    if err.is_unauthorized() {
        on_unauthorized.emit(());
    } else {
        alert("Erreur", &err.user_message());
    }
}
