//! Hash-based page selection (`#/admin/collections`, `#/simulation`...).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
    Simulation,
    Login,
    Dashboard,
    Collections,
    /// Wizard opened from the back-office, empty or on a stored record.
    CollectionEditor,
    Messages,
    Users,
    AdminProjects,
    Settings,
}

impl Page {
    pub fn hash(&self) -> &'static str {
        match self {
            Page::Home => "#/",
            Page::About => "#/a-propos",
            Page::Projects => "#/projets",
            Page::Contact => "#/contact",
            Page::Simulation => "#/simulation",
            Page::Login => "#/admin/login",
            Page::Dashboard => "#/admin",
            Page::Collections => "#/admin/collectes",
            Page::CollectionEditor => "#/admin/collectes/edition",
            Page::Messages => "#/admin/messages",
            Page::Users => "#/admin/utilisateurs",
            Page::AdminProjects => "#/admin/projets",
            Page::Settings => "#/admin/parametres",
        }
    }

    /// Unknown hashes fall back to the landing page.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_end_matches('/');
        match path {
            "/a-propos" => Page::About,
            "/projets" => Page::Projects,
            "/contact" => Page::Contact,
            "/simulation" => Page::Simulation,
            "/admin/login" => Page::Login,
            "/admin" => Page::Dashboard,
            "/admin/collectes" => Page::Collections,
            "/admin/collectes/edition" => Page::CollectionEditor,
            "/admin/messages" => Page::Messages,
            "/admin/utilisateurs" => Page::Users,
            "/admin/projets" => Page::AdminProjects,
            "/admin/parametres" => Page::Settings,
            _ => Page::Home,
        }
    }

    /// Pages behind the login.
    pub fn is_admin(&self) -> bool {
        !matches!(
            self,
            Page::Home | Page::About | Page::Projects | Page::Contact | Page::Simulation | Page::Login
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Accueil",
            Page::About => "À propos",
            Page::Projects => "Réalisations",
            Page::Contact => "Contact",
            Page::Simulation => "Demander un devis",
            Page::Login => "Connexion",
            Page::Dashboard => "Tableau de bord",
            Page::Collections => "Collectes",
            Page::CollectionEditor => "Saisie d'une collecte",
            Page::Messages => "Messages",
            Page::Users => "Utilisateurs",
            Page::AdminProjects => "Projets",
            Page::Settings => "Paramètres",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Collections | Page::CollectionEditor => "assignment",
            Page::Messages => "mail",
            Page::Users => "group",
            Page::AdminProjects => "solar_power",
            Page::Settings => "settings",
            _ => "home",
        }
    }
}

pub fn current() -> Page {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Page::from_hash(&hash))
        .unwrap_or(Page::Home)
}

/// Writes the page into the address bar without reloading.
pub fn push(page: Page) {
    if let Some(window) = web_sys::window() {
        window.location().set_hash(page.hash()).ok();
    }
}

/// Calls `on_change` with the new page on every `hashchange`.
pub fn listen(on_change: impl Fn(Page) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn Fn()>::new(move || on_change(current()));
    window
        .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
        .ok();
    closure.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_round_trip() {
        for page in [Page::Home, Page::About, Page::Simulation, Page::Collections, Page::Settings] {
            assert_eq!(Page::from_hash(page.hash()), page);
        }
        assert_eq!(Page::from_hash("#/admin/"), Page::Dashboard);
        assert_eq!(Page::from_hash("#/nowhere"), Page::Home);
        assert!(!Page::Login.is_admin());
        assert!(!Page::About.is_admin());
        assert!(Page::Users.is_admin());
    }
}
