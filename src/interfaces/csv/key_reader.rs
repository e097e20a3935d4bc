use crate::domain::event::KeyEvent;
use crate::error::{CalcError, Result};
use std::io::Read;

/// Reads key events from a CSV source with a `session, key` header.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths.
pub struct KeyEventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> KeyEventReader<R> {
    /// Creates a new `KeyEventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes key events.
    ///
    /// A malformed row yields an `Err` for that row only; iteration carries on
    /// with the next one.
    pub fn events(self) -> impl Iterator<Item = Result<KeyEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CalcError::from))
    }
}
