//! Domain layer: the calculator state machine and the types it works on.
//!
//! Nothing in here performs I/O. [`calculator::submit`] is the single
//! transition the rest of the crate drives.

pub mod calculator;
pub mod event;
pub mod format;
pub mod key;
pub mod ports;
pub mod state;
