//! Events emitted by a page window and the sinks that receive them.
//!
//! A window reports everything through a single [`EventSink`]: every change to
//! the visible window as [`PageEvent::PageChanged`] and every rejected page
//! request as [`PageEvent::ValidationFailed`]. How those are rendered (a table
//! refresh, a toast, a log line) is up to the host.

use serde::Serialize;

use crate::error::{Error, ErrorKind};

/// An event emitted by a [`PageWindow`](crate::PageWindow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent<T> {
    /// The visible window was recomputed.
    PageChanged {
        /// Owned copy of the records on the current page.
        records: Vec<T>,
    },
    /// A page request was rejected; window state is unchanged.
    ValidationFailed(ValidationFailure),
}

impl<T> PageEvent<T> {
    /// Returns the slice carried by a [`PageEvent::PageChanged`].
    pub fn records(&self) -> Option<&[T]> {
        match self {
            Self::PageChanged { records } => Some(records),
            Self::ValidationFailed(_) => None,
        }
    }

    /// Returns the failure carried by a [`PageEvent::ValidationFailed`].
    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            Self::PageChanged { .. } => None,
            Self::ValidationFailed(failure) => Some(failure),
        }
    }
}

/// A user-facing description of a rejected page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// What was wrong with the request.
    pub kind: ErrorKind,
    /// Message suitable for showing to the user.
    pub message: String,
}

impl From<&Error> for ValidationFailure {
    fn from(error: &Error) -> Self {
        Self {
            kind: error.kind(),
            message: error.message_or_kind().to_owned(),
        }
    }
}

/// Receiver of [`PageEvent`]s.
///
/// Any `FnMut(PageEvent<T>)` closure is a sink.
pub trait EventSink<T> {
    /// Delivers one event. Called synchronously, in operation order.
    fn emit(&mut self, event: PageEvent<T>);
}

impl<T, F> EventSink<T> for F
where
    F: FnMut(PageEvent<T>),
{
    fn emit(&mut self, event: PageEvent<T>) {
        self(event)
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSink<T> {
    events: Vec<PageEvent<T>>,
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<T> RecordingSink<T> {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every event received so far, oldest first.
    pub fn events(&self) -> &[PageEvent<T>] {
        &self.events
    }

    /// Returns the most recent event.
    pub fn last(&self) -> Option<&PageEvent<T>> {
        self.events.last()
    }

    /// Returns the slice carried by the most recent page change.
    pub fn last_page(&self) -> Option<&[T]> {
        self.events.iter().rev().find_map(PageEvent::records)
    }

    /// Returns the number of page changes received.
    pub fn page_changes(&self) -> usize {
        self.events.iter().filter(|e| e.records().is_some()).count()
    }

    /// Returns every validation failure received, oldest first.
    pub fn failures(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.events.iter().filter_map(PageEvent::failure)
    }

    /// Removes and returns every recorded event.
    pub fn take(&mut self) -> Vec<PageEvent<T>> {
        std::mem::take(&mut self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<T> EventSink<T> for RecordingSink<T> {
    fn emit(&mut self, event: PageEvent<T>) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_changed_serializes_with_tag() {
        let event = PageEvent::PageChanged {
            records: vec!["a", "b"],
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value, json!({"type": "page_changed", "records": ["a", "b"]}));
    }

    #[test]
    fn validation_failed_serializes_flat() {
        let event: PageEvent<u32> = PageEvent::ValidationFailed(ValidationFailure {
            kind: ErrorKind::PageOutOfRange,
            message: "out of range".into(),
        });
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "validation_failed",
                "kind": "page_out_of_range",
                "message": "out of range",
            })
        );
    }

    #[test]
    fn closure_is_a_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: PageEvent<u8>| seen.push(event);
            sink.emit(PageEvent::PageChanged { records: vec![1] });
            sink.emit(PageEvent::PageChanged { records: vec![2] });
        }
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].records(), Some(&[2u8][..]));
    }

    #[test]
    fn recording_sink_tracks_pages_and_failures() {
        let mut sink = RecordingSink::new();
        sink.emit(PageEvent::PageChanged { records: vec![1, 2] });
        sink.emit(PageEvent::ValidationFailed(ValidationFailure::from(
            &Error::page_out_of_range().with_message("nope"),
        )));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.page_changes(), 1);
        assert_eq!(sink.last_page(), Some(&[1, 2][..]));
        assert_eq!(sink.failures().count(), 1);
        assert_eq!(sink.failures().next().unwrap().message, "nope");

        let drained = sink.take();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }
}
