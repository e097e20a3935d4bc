use crate::domain::event::SessionSnapshot;
use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

/// Output layout for the final session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `session,display` rows with a header.
    #[default]
    Csv,
    /// A JSON array of full session snapshots.
    Json,
}

#[derive(Serialize)]
struct DisplayRecord<'a> {
    session: u16,
    display: &'a str,
}

/// Writes final session states to any `Write` sink.
pub struct DisplayWriter<W: Write> {
    sink: W,
    format: OutputFormat,
}

impl<W: Write> DisplayWriter<W> {
    pub fn new(sink: W, format: OutputFormat) -> Self {
        Self { sink, format }
    }

    pub fn write_sessions(&mut self, sessions: &[SessionSnapshot]) -> Result<()> {
        match self.format {
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.sink);
                for snapshot in sessions {
                    writer.serialize(DisplayRecord {
                        session: snapshot.session,
                        display: &snapshot.state.display,
                    })?;
                }
                // An empty run still gets a header.
                if sessions.is_empty() {
                    writer.write_record(["session", "display"])?;
                }
                writer.flush()?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.sink, sessions)?;
                writeln!(self.sink)?;
            }
        }
        self.sink.flush()?;
        Ok(())
    }
}
