use crate::domain::calculator::submit;
use crate::domain::event::{KeyEvent, SessionSnapshot};
use crate::domain::ports::SessionStoreBox;
use crate::domain::state::CalculatorState;
use crate::error::Result;
use tracing::debug;

/// Entry point for processing key events across calculator sessions.
///
/// `CalculatorEngine` owns the session store. Every event is applied to a
/// single snapshot of its session's state and written back before the next
/// one is accepted, so two key presses never interleave on the same session.
pub struct CalculatorEngine {
    session_store: SessionStoreBox,
}

impl CalculatorEngine {
    /// Creates a new `CalculatorEngine` backed by `session_store`.
    pub fn new(session_store: SessionStoreBox) -> Self {
        Self { session_store }
    }

    /// Applies one key press to its session and returns the new state.
    ///
    /// Sessions that have not been seen yet start from the initial state.
    pub async fn process_key(&self, event: KeyEvent) -> Result<CalculatorState> {
        let state = self
            .session_store
            .get(event.session)
            .await?
            .unwrap_or_default();

        let next = submit(event.key, &state);
        debug!(
            session = event.session,
            key = %event.key,
            display = %next.display,
            "key applied"
        );

        self.session_store.store(event.session, next.clone()).await?;
        Ok(next)
    }

    /// Consumes the engine and returns the final state of every session,
    /// ordered by session id.
    pub async fn into_results(self) -> Result<Vec<SessionSnapshot>> {
        let mut sessions = self.session_store.all_sessions().await?;
        sessions.sort_by_key(|snapshot| snapshot.session);
        Ok(sessions)
    }
}
