use crate::domain::event::SessionSnapshot;
use crate::domain::ports::SessionStore;
use crate::domain::state::CalculatorState;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for calculator sessions.
///
/// Uses `Arc<RwLock<HashMap<u16, CalculatorState>>>`; clones share the same
/// map. Sessions only live as long as the process.
#[derive(Default, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<u16, CalculatorState>>>,
}

impl InMemorySessionStore {
    /// Creates a new, empty in-memory session store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn store(&self, session: u16, state: CalculatorState) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session, state);
        Ok(())
    }

    async fn get(&self, session: u16) -> Result<Option<CalculatorState>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&session).cloned())
    }

    async fn all_sessions(&self) -> Result<Vec<SessionSnapshot>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .iter()
            .map(|(&session, state)| SessionSnapshot {
                session,
                state: state.clone(),
            })
            .collect())
    }
}
