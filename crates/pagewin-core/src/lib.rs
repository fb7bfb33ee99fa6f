#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for page window operations.
pub const TRACING_TARGET_WINDOW: &str = "pagewin_core::window";

mod config;
mod error;
mod event;
mod input;
mod options;
mod state;
mod window;

pub mod prelude;

pub use config::{PageWindowBuilder, PageWindowBuilderError, PageWindowConfig};
pub use error::{BoxedError, Error, ErrorKind, Result};
pub use event::{EventSink, PageEvent, RecordingSink, ValidationFailure};
pub use input::parse_page_input;
pub use options::{BASE_PAGE_SIZES, PageSizeOptions};
pub use state::PageState;
pub use window::{PAGE_OUT_OF_RANGE_MESSAGE, PageWindow};
