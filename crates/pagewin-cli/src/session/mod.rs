//! Interactive paging session.
//!
//! A [`Session`] owns one [`PageWindow`] over the records of a
//! [`RecordSource`], reads one [`Command`] per input line and writes every
//! event the window emits as a JSON line to the output.

mod command;
mod source;

use std::io::{BufRead, Write};

use anyhow::Context;
use pagewin_core::{PageWindow, PageWindowConfig};
use serde::Serialize;
use serde_json::Value;

pub use self::command::Command;
pub use self::source::RecordSource;
use crate::TRACING_TARGET_SESSION;

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Paging session over a record file.
#[derive(Debug)]
pub struct Session {
    window: PageWindow<Value>,
    source: RecordSource,
}

impl Session {
    /// Creates the window and loads the records once.
    ///
    /// The initial page is emitted on the first call to [`Session::run`].
    pub fn open(config: PageWindowConfig, source: RecordSource) -> anyhow::Result<Self> {
        let mut window =
            PageWindow::recording(config).context("failed to create page window")?;
        let records = source.load()?;
        window.load_records(records);

        tracing::info!(
            target: TRACING_TARGET_SESSION,
            path = %source.path().display(),
            total_records = window.total_records(),
            total_pages = window.total_pages(),
            "session opened"
        );

        Ok(Self { window, source })
    }

    /// Returns the underlying window.
    pub fn window(&self) -> &PageWindow<Value> {
        &self.window
    }

    /// Processes commands until `quit` or the end of input.
    ///
    /// Lines that are not commands are logged and skipped.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and when `reload` cannot read the records file.
    pub fn run<R, W>(&mut self, input: R, output: &mut W) -> anyhow::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        self.flush_events(output)?;

        for line in input.lines() {
            let line = line.context("failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    tracing::warn!(target: TRACING_TARGET_SESSION, %error, "invalid command");
                    continue;
                }
            };

            let flow = self.execute(command, output)?;
            self.flush_events(output)?;
            if flow == Flow::Stop {
                break;
            }
        }

        output.flush().context("failed to flush output")?;
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> anyhow::Result<Flow> {
        tracing::debug!(target: TRACING_TARGET_SESSION, ?command, "executing command");

        match command {
            Command::First => self.window.go_first(),
            Command::Last => self.window.go_last(),
            Command::Next => self.window.go_next(),
            Command::Previous => self.window.go_previous(),
            Command::Page(text) => {
                // Rejections are already emitted as validation events.
                let _ = self.window.submit_page_input(&text);
            }
            Command::Size(size) => self.window.set_page_size(size),
            Command::Reset => self.window.reset_pagination(),
            Command::Reload => {
                let records = self.source.load()?;
                self.window.load_records(records);
            }
            Command::State => write_json(output, &self.window.state())?,
            Command::Options => write_json(output, self.window.page_size_options())?,
            Command::Help => eprintln!("{}", Command::USAGE),
            Command::Quit => return Ok(Flow::Stop),
        }

        Ok(Flow::Continue)
    }

    fn flush_events<W: Write>(&mut self, output: &mut W) -> anyhow::Result<()> {
        for event in self.window.sink_mut().take() {
            write_json(output, &event)?;
        }
        Ok(())
    }
}

fn write_json<W, T>(output: &mut W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer(&mut *output, value).context("failed to serialize output")?;
    writeln!(output).context("failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    fn records_file(count: usize) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        let records: Vec<_> = (0..count).map(|id| json!({ "id": id })).collect();
        serde_json::to_writer(&mut file, &records).unwrap();
        file.flush().unwrap();
        file
    }

    fn run(session: &mut Session, script: &str) -> Vec<Value> {
        let mut output = Vec::new();
        session.run(Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn ids(event: &Value) -> Vec<u64> {
        event["records"]
            .as_array()
            .unwrap()
            .iter()
            .map(|record| record["id"].as_u64().unwrap())
            .collect()
    }

    fn open(file: &NamedTempFile, page_size: usize) -> Session {
        let config = PageWindowConfig::builder()
            .with_page_size(page_size)
            .build()
            .unwrap();
        Session::open(config, RecordSource::new(file.path())).unwrap()
    }

    #[test]
    fn emits_initial_page_then_each_navigation() {
        let file = records_file(12);
        let mut session = open(&file, 5);

        let events = run(&mut session, "next\nnext\nnext\n");
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e["type"] == "page_changed"));
        assert_eq!(ids(&events[0]), vec![0, 1, 2, 3, 4]);
        assert_eq!(ids(&events[1]), vec![5, 6, 7, 8, 9]);
        assert_eq!(ids(&events[2]), vec![10, 11]);
        assert_eq!(ids(&events[3]), vec![10, 11]);
    }

    #[test]
    fn out_of_range_page_emits_validation_failure() {
        let file = records_file(12);
        let mut session = open(&file, 5);

        let events = run(&mut session, "page 4\npage abc\npage 2\n");
        assert_eq!(events.len(), 4);
        assert_eq!(events[1]["type"], "validation_failed");
        assert_eq!(events[1]["kind"], "page_out_of_range");
        assert_eq!(events[2]["kind"], "invalid_page_input");
        assert_eq!(ids(&events[3]), vec![5, 6, 7, 8, 9]);
        assert_eq!(session.window().current_page(), 2);
    }

    #[test]
    fn size_and_state_commands() {
        let file = records_file(12);
        let mut session = open(&file, 5);

        let events = run(&mut session, "size 25\nstate\noptions\n");
        assert_eq!(ids(&events[1]).len(), 12);
        assert_eq!(events[2]["page_size"], 25);
        assert_eq!(events[2]["total_pages"], 1);
        assert_eq!(events[2]["current_page"], 1);
        assert_eq!(events[3], json!([5, 10, 50, 100]));
    }

    #[test]
    fn quit_stops_reading_and_bad_lines_are_skipped() {
        let file = records_file(12);
        let mut session = open(&file, 5);

        let events = run(&mut session, "bogus\n\nlast\nquit\nfirst\n");
        assert_eq!(events.len(), 2);
        assert_eq!(ids(&events[1]), vec![10, 11]);
        assert_eq!(session.window().current_page(), 3);
    }

    #[test]
    fn reload_reads_the_file_again_and_keeps_the_page() {
        let mut file = records_file(12);
        let mut session = open(&file, 5);
        run(&mut session, "last\n");

        file.as_file_mut().set_len(0).unwrap();
        let mut handle = file.reopen().unwrap();
        let records: Vec<_> = (0..4).map(|id| json!({ "id": id })).collect();
        serde_json::to_writer(&mut handle, &records).unwrap();
        handle.flush().unwrap();

        let events = run(&mut session, "reload\nreset\n");
        assert_eq!(events.len(), 2);
        assert!(ids(&events[0]).is_empty());
        assert_eq!(ids(&events[1]), vec![0, 1, 2, 3]);
        assert_eq!(session.window().total_records(), 4);
    }
}
