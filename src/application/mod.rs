//! Application layer: drives key events through the calculator.
//!
//! [`engine::CalculatorEngine`] looks up a session's state, applies the key
//! and writes the next state back, one event at a time.

pub mod engine;
