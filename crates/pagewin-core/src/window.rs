//! The page window controller.
//!
//! A [`PageWindow`] owns a full, already sorted and filtered record set and
//! exposes one page of it at a time. Every operation that can change what is
//! visible recomputes the slice and hands a fresh copy to the window's
//! [`EventSink`] before returning.
//!
//! # Page totals
//!
//! `total_pages` is recomputed against the *initial* page size whenever
//! records are loaded or pagination is reset, and against the *selected*
//! page size when the page size is changed. Loading records never moves the
//! current page, so a window left on page 3 shows an empty slice after a
//! smaller record set is loaded.

use std::num::NonZeroUsize;
use std::ops::Range;

use crate::TRACING_TARGET_WINDOW;
use crate::config::PageWindowConfig;
use crate::error::{Error, Result};
use crate::event::{EventSink, PageEvent, RecordingSink, ValidationFailure};
use crate::input::parse_page_input;
use crate::options::PageSizeOptions;
use crate::state::PageState;

/// Message attached to [`ErrorKind::PageOutOfRange`](crate::ErrorKind::PageOutOfRange) failures.
pub const PAGE_OUT_OF_RANGE_MESSAGE: &str =
    "Page selection is out of range. Please try again with a valid page number.";

/// Client-side pagination over an in-memory record set.
#[derive(Debug)]
pub struct PageWindow<T, S = RecordingSink<T>> {
    records: Vec<T>,
    current_page: usize,
    page_size: usize,
    initial_page_size: usize,
    total_records: usize,
    total_pages: usize,
    page_size_options: PageSizeOptions,
    page_size_hidden: bool,
    sink: S,
}

impl<T: Clone> PageWindow<T, RecordingSink<T>> {
    /// Creates a window that records its events in memory.
    pub fn recording(config: PageWindowConfig) -> Result<Self> {
        Self::new(config, RecordingSink::new())
    }
}

impl<T, S> PageWindow<T, S>
where
    T: Clone,
    S: EventSink<T>,
{
    /// Creates an empty window.
    ///
    /// Nothing is emitted until records are loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfig`](crate::ErrorKind::InvalidConfig)
    /// when the configured page size is zero.
    pub fn new(config: PageWindowConfig, sink: S) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            target: TRACING_TARGET_WINDOW,
            page_size = config.page_size,
            page_size_hidden = config.page_size_hidden,
            "page window created"
        );

        Ok(Self {
            records: Vec::new(),
            current_page: 1,
            page_size: config.page_size,
            initial_page_size: config.page_size,
            total_records: 0,
            total_pages: 0,
            page_size_options: PageSizeOptions::for_selected(config.page_size),
            page_size_hidden: config.page_size_hidden,
            sink,
        })
    }

    /// Replaces the record set and re-emits the current page.
    ///
    /// The current page is kept as is, even when it no longer exists.
    pub fn load_records(&mut self, records: impl IntoIterator<Item = T>) {
        self.records = records.into_iter().collect();
        self.recount(self.initial_page_size);

        tracing::debug!(
            target: TRACING_TARGET_WINDOW,
            total_records = self.total_records,
            total_pages = self.total_pages,
            current_page = self.current_page,
            "records loaded"
        );

        self.emit_page();
    }

    /// Restores the initial page size and the first page.
    ///
    /// Totals are recounted from the loaded records against the initial
    /// page size.
    pub fn reset_pagination(&mut self) {
        self.current_page = 1;
        self.select_page_size(self.initial_page_size);
        self.recount(self.initial_page_size);

        tracing::debug!(
            target: TRACING_TARGET_WINDOW,
            page_size = self.page_size,
            total_pages = self.total_pages,
            "pagination reset"
        );

        self.emit_page();
    }

    /// Moves to the first page.
    pub fn go_first(&mut self) {
        self.navigate(1, "first");
    }

    /// Moves to the last page.
    ///
    /// With no pages the window stays on page 1 and shows an empty slice.
    pub fn go_last(&mut self) {
        self.navigate(self.total_pages.max(1), "last");
    }

    /// Moves forward one page, stopping at the last page.
    pub fn go_next(&mut self) {
        let page = (self.current_page + 1).min(self.total_pages).max(1);
        self.navigate(page, "next");
    }

    /// Moves back one page, stopping at the first page.
    pub fn go_previous(&mut self) {
        let page = self.current_page.saturating_sub(1).max(1);
        self.navigate(page, "previous");
    }

    /// Moves to `requested` if it lies within `1..=total_pages`.
    ///
    /// # Errors
    ///
    /// On a page outside that range nothing changes and nothing is sliced:
    /// a [`PageEvent::ValidationFailed`] is emitted and the same failure is
    /// returned as [`ErrorKind::PageOutOfRange`](crate::ErrorKind::PageOutOfRange).
    pub fn go_to_page(&mut self, requested: i64) -> Result<()> {
        let page = usize::try_from(requested)
            .ok()
            .filter(|page| (1..=self.total_pages).contains(page));

        let Some(page) = page else {
            tracing::warn!(
                target: TRACING_TARGET_WINDOW,
                requested,
                total_pages = self.total_pages,
                "requested page is out of range"
            );
            let error = Error::page_out_of_range().with_message(PAGE_OUT_OF_RANGE_MESSAGE);
            return Err(self.reject(error));
        };

        self.navigate(page, "page");
        Ok(())
    }

    /// Handles text submitted from a page-number input box.
    ///
    /// # Errors
    ///
    /// Unparseable text is reported like an out-of-range page, with
    /// [`ErrorKind::InvalidPageInput`](crate::ErrorKind::InvalidPageInput).
    pub fn submit_page_input(&mut self, text: &str) -> Result<()> {
        match parse_page_input(text) {
            Ok(requested) => self.go_to_page(requested),
            Err(error) => {
                tracing::warn!(
                    target: TRACING_TARGET_WINDOW,
                    input = text,
                    "page input rejected"
                );
                Err(self.reject(error))
            }
        }
    }

    /// Selects a new page size and returns to the first page.
    ///
    /// Sizes outside the offered options are accepted.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        let page_size = page_size.get();

        self.current_page = 1;
        self.select_page_size(page_size);
        self.recount(page_size);

        tracing::debug!(
            target: TRACING_TARGET_WINDOW,
            page_size,
            total_pages = self.total_pages,
            "page size changed"
        );

        self.emit_page();
    }

    /// Returns the records on the current page without emitting.
    pub fn current_slice(&self) -> Vec<T> {
        self.records[self.slice_range()].to_vec()
    }
}

impl<T, S> PageWindow<T, S> {
    /// Returns the current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the selected page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the page size the window was created with.
    pub fn initial_page_size(&self) -> usize {
        self.initial_page_size
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the page sizes offered besides the selected one.
    pub fn page_size_options(&self) -> &PageSizeOptions {
        &self.page_size_options
    }

    pub fn page_size_hidden(&self) -> bool {
        self.page_size_hidden
    }

    /// Returns the full loaded record set.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the window, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns a snapshot of the pagination state.
    pub fn state(&self) -> PageState {
        PageState {
            current_page: self.current_page,
            page_size: self.page_size,
            initial_page_size: self.initial_page_size,
            total_records: self.total_records,
            total_pages: self.total_pages,
            page_size_options: self.page_size_options.clone(),
            page_size_hidden: self.page_size_hidden,
            is_first_page: self.current_page <= 1,
            is_last_page: self.current_page >= self.total_pages,
        }
    }

    /// Index range of the current page within the record set.
    ///
    /// Empty when the current page starts at or past the last record.
    fn slice_range(&self) -> Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let end = start
            .saturating_add(self.page_size)
            .min(self.total_records);
        start.min(end)..end
    }

    fn recount(&mut self, divisor: usize) {
        self.total_records = self.records.len();
        self.total_pages = self.total_records.div_ceil(divisor);
    }

    fn select_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page_size_options = PageSizeOptions::for_selected(page_size);
    }
}

impl<T, S> PageWindow<T, S>
where
    T: Clone,
    S: EventSink<T>,
{
    fn navigate(&mut self, page: usize, action: &'static str) {
        self.current_page = page;

        tracing::debug!(
            target: TRACING_TARGET_WINDOW,
            action,
            current_page = self.current_page,
            total_pages = self.total_pages,
            "page navigation"
        );

        self.emit_page();
    }

    fn emit_page(&mut self) {
        let records = self.current_slice();
        self.sink.emit(PageEvent::PageChanged { records });
    }

    fn reject(&mut self, error: Error) -> Error {
        self.sink
            .emit(PageEvent::ValidationFailed(ValidationFailure::from(&error)));
        error
    }
}
