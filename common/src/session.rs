use log::warn;

use crate::model::user::User;
use crate::requests::LoginData;

pub const TOKEN_KEY: &str = "lynays_token";
pub const USER_KEY: &str = "lynays_user";

/// Key/value persistence for the session.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Restores the persisted token and user. A user record that no longer
    /// decodes is dropped; the token is kept so a refresh can recover it.
    pub fn load(store: &impl SessionStore) -> Self {
        let token = store.read(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = store.read(USER_KEY).and_then(|raw| {
            serde_json::from_str::<User>(&raw)
                .map_err(|err| warn!("discarding stored user: {err}"))
                .ok()
        });
        Self { token, user }
    }

    /// Adopts a fresh login and persists it.
    pub fn establish(&mut self, store: &impl SessionStore, login: LoginData) {
        match serde_json::to_string(&login.user) {
            Ok(raw) => store.write(USER_KEY, &raw),
            Err(err) => warn!("user not persisted: {err}"),
        }
        store.write(TOKEN_KEY, &login.access_token);
        self.token = Some(login.access_token);
        self.user = Some(login.user);
    }

    /// Applies a refresh response. Ignored (returns `false`) when the session
    /// was cleared while the refresh was in flight.
    pub fn refresh(&mut self, store: &impl SessionStore, login: LoginData) -> bool {
        if self.token.is_none() {
            return false;
        }
        self.establish(store, login);
        true
    }

    /// Forgets the session in memory and in the store.
    pub fn clear(&mut self, store: &impl SessionStore) {
        store.remove(USER_KEY);
        store.remove(TOKEN_KEY);
        self.token = None;
        self.user = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// A token and a known user: admin pages may render.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Value of the `Authorization` header, if any.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::model::user::UserRole;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl SessionStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn login(token: &str) -> LoginData {
        LoginData {
            access_token: token.into(),
            token_type: Some("bearer".into()),
            expires_in: Some(3600),
            user: User {
                id: "1".into(),
                name: "Awa Koné".into(),
                email: "awa@lynays.ci".into(),
                role: UserRole::Admin,
                avatar_url: None,
                phone: None,
                created_at: "2025-01-01".into(),
                updated_at: None,
            },
        }
    }

    #[test]
    fn establish_persists_and_load_restores() {
        let store = MemoryStore::default();
        let mut session = Session::load(&store);
        assert!(!session.is_authenticated());

        session.establish(&store, login("tok-1"));
        assert_eq!(session.bearer().as_deref(), Some("Bearer tok-1"));

        let restored = Session::load(&store);
        assert_eq!(restored, session);
        assert!(restored.is_authenticated());
    }

    #[test]
    fn corrupt_user_keeps_token_for_refresh() {
        let store = MemoryStore::default();
        store.write(TOKEN_KEY, "tok-1");
        store.write(USER_KEY, "{not json");

        let mut session = Session::load(&store);
        assert!(session.has_token());
        assert!(!session.is_authenticated());

        assert!(session.refresh(&store, login("tok-2")));
        assert_eq!(session.token(), Some("tok-2"));
        assert_eq!(store.read(TOKEN_KEY).as_deref(), Some("tok-2"));
    }

    #[test]
    fn refresh_after_clear_is_ignored() {
        let store = MemoryStore::default();
        let mut session = Session::default();
        session.establish(&store, login("tok-1"));
        session.clear(&store);

        assert!(!session.refresh(&store, login("tok-2")));
        assert!(!session.has_token());
        assert_eq!(store.read(TOKEN_KEY), None);
        assert_eq!(store.read(USER_KEY), None);
    }
}
