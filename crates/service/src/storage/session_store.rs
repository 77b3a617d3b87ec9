use std::sync::Arc;

use models::session::SessionKind;

use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

pub const KEY_TOKEN: &str = "auth_token";
pub const KEY_EMAIL: &str = "user_email";
pub const KEY_SESSION: &str = "session_type";
pub const KEY_NAME: &str = "user_name";

const ALL_KEYS: [&str; 4] = [KEY_TOKEN, KEY_EMAIL, KEY_SESSION, KEY_NAME];

/// The client-local session record: which role is logged in plus display
/// name, email, and token. In-memory and persisted views agree after every
/// operation, and clearing removes all keys in one step so no partial
/// session is ever observable.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<JsonMapStore<String, String>>,
}

impl SessionStore {
    pub async fn new(path: &str) -> Result<Self, ServiceError> {
        Ok(Self { inner: JsonMapStore::new(path).await? })
    }

    /// Record a logged-in session. Opening with `SessionKind::None` is the
    /// same as clearing.
    pub async fn open(
        &self,
        kind: SessionKind,
        name: &str,
        email: &str,
        token: &str,
    ) -> Result<(), ServiceError> {
        if kind == SessionKind::None {
            return self.clear().await;
        }
        self.inner
            .update_map(|m| {
                m.insert(KEY_SESSION.into(), kind.as_str().into());
                m.insert(KEY_NAME.into(), name.into());
                m.insert(KEY_EMAIL.into(), email.into());
                m.insert(KEY_TOKEN.into(), token.into());
                Ok(())
            })
            .await
    }

    pub async fn current(&self) -> SessionKind {
        match self.inner.get(&KEY_SESSION.to_string()).await {
            Some(marker) => SessionKind::parse(&marker),
            None => SessionKind::None,
        }
    }

    pub async fn user_name(&self) -> Option<String> {
        self.inner.get(&KEY_NAME.to_string()).await
    }

    pub async fn user_email(&self) -> Option<String> {
        self.inner.get(&KEY_EMAIL.to_string()).await
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.get(&KEY_TOKEN.to_string()).await
    }

    /// End the session: every session key goes away in a single mutation.
    pub async fn clear(&self) -> Result<(), ServiceError> {
        self.inner
            .update_map(|m| {
                for key in ALL_KEYS {
                    m.remove(key);
                }
                Ok(())
            })
            .await
    }
}
