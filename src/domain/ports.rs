use super::event::SessionSnapshot;
use super::state::CalculatorState;
use crate::error::Result;
use async_trait::async_trait;

/// Holds the current state of every calculator session.
///
/// Each session's state belongs to exactly one entry; callers apply keys for
/// a session one at a time.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn store(&self, session: u16, state: CalculatorState) -> Result<()>;
    async fn get(&self, session: u16) -> Result<Option<CalculatorState>>;
    async fn all_sessions(&self) -> Result<Vec<SessionSnapshot>>;
}

pub type SessionStoreBox = Box<dyn SessionStore>;
