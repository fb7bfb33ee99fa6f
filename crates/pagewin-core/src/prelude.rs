//! Convenient re-exports for common use.

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::event::{EventSink, PageEvent, RecordingSink};
pub use crate::{PageState, PageWindow, PageWindowConfig, parse_page_input};
