//! Page-size choices offered to the user.

use serde::Serialize;

/// Page sizes a picker offers, in ascending order.
pub const BASE_PAGE_SIZES: [usize; 5] = [5, 10, 25, 50, 100];

/// Page-size choices excluding the one currently selected.
///
/// The list is advisory: it drives a picker, it does not restrict which sizes
/// a window accepts. A selected size outside [`BASE_PAGE_SIZES`] leaves the
/// full base set on offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageSizeOptions(Vec<usize>);

impl PageSizeOptions {
    /// Builds the option list for the given selected page size.
    pub fn for_selected(selected: usize) -> Self {
        let mut options = BASE_PAGE_SIZES.to_vec();
        if let Some(index) = options.iter().position(|&size| size == selected) {
            options.remove(index);
        }

        Self(options)
    }

    /// Returns the offered page sizes.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Returns whether `size` is offered.
    pub fn contains(&self, size: usize) -> bool {
        self.0.contains(&size)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[usize]> for PageSizeOptions {
    fn as_ref(&self) -> &[usize] {
        self.as_slice()
    }
}
