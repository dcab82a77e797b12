use std::sync::{Arc, Mutex};

use crate::token::TokenStore;

/// In-memory TokenStore for tests and as a fallback when no data dir exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryStore {
    async fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    async fn save(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    async fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}
