//! Registry of active drafting sessions.
//!
//! Keyed by upper-case ticker. Processing a filing again for the same
//! company replaces its session.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tenk_drafter::SessionContext;
use tenk_llm::LlmClient;

/// Session bound to the configured generator
pub type Session = SessionContext<LlmClient>;

/// Sessions held in router state
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Arc<Session>>>,
}

impl SessionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Session>>> {
        self.sessions.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Session>>> {
        self.sessions.write().unwrap_or_else(|p| p.into_inner())
    }

    /// Register a session, returning the one it replaced
    pub fn insert(&self, session: Session) -> Option<Arc<Session>> {
        self.write().insert(session.ticker.clone(), Arc::new(session))
    }

    /// Look up the session for a ticker (case-insensitive)
    pub fn get(&self, ticker: &str) -> Option<Arc<Session>> {
        self.read().get(&ticker.trim().to_uppercase()).cloned()
    }

    /// Drop the session for a ticker
    pub fn remove(&self, ticker: &str) -> Option<Arc<Session>> {
        self.write().remove(&ticker.trim().to_uppercase())
    }

    /// Tickers with an active session, sorted
    pub fn tickers(&self) -> Vec<String> {
        let mut tickers: Vec<String> = self.read().keys().cloned().collect();
        tickers.sort();
        tickers
    }

    /// Number of active sessions
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if no session is active
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
