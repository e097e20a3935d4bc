//! CSV input of key events and output of final session displays.

pub mod display_writer;
pub mod key_reader;
