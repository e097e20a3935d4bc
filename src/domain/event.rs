use super::key::KeyToken;
use super::state::CalculatorState;
use serde::{Deserialize, Serialize};

/// A key press addressed to one calculator session.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct KeyEvent {
    pub session: u16,
    pub key: KeyToken,
}

/// The state a session ended up in.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SessionSnapshot {
    pub session: u16,
    #[serde(flatten)]
    pub state: CalculatorState,
}
