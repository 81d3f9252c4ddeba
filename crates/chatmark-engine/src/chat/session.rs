use uuid::Uuid;

/// Where a session id survives between page loads.
pub trait SessionStore {
    fn load(&self) -> Option<String>;
    fn store(&mut self, id: &str);
}

/// A [`SessionStore`] that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemorySessionStore {
    id: Option<String>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<String> {
        self.id.clone()
    }

    fn store(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }
}

/// Supplies the session id sent along with every chat query.
pub trait SessionIdProvider {
    fn session_id(&mut self) -> String;
}

/// Resolves a session id from storage, then from a shared link, then by
/// minting a new UUID v4. Whatever is chosen is persisted.
pub struct StoredSessionProvider<S: SessionStore> {
    store: S,
    /// `session` parameter from the page URL, if any.
    link_session: Option<String>,
}

impl<S: SessionStore> StoredSessionProvider<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            link_session: None,
        }
    }

    /// Uses `id` when storage has nothing, e.g. when a shared link was opened.
    pub fn with_link_session(mut self, id: impl Into<String>) -> Self {
        self.link_session = Some(id.into());
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: SessionStore> SessionIdProvider for StoredSessionProvider<S> {
    fn session_id(&mut self) -> String {
        if let Some(id) = self.store.load().filter(|id| !id.is_empty()) {
            return id;
        }

        let id = match self.link_session.take().filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                let id = Uuid::new_v4().to_string();
                log::info!("started new chat session {id}");
                id
            }
        };
        self.store.store(&id);
        id
    }
}
