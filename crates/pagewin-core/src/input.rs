//! Parsing of page numbers typed by a user.

use crate::error::{Error, Result};

/// Parses the contents of a page-number input box.
///
/// Surrounding whitespace is ignored. The result is not range-checked; pass
/// it to [`PageWindow::go_to_page`](crate::PageWindow::go_to_page) for that.
/// Negative numbers parse so that the range check can report them.
pub fn parse_page_input(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_page_input().with_message("Please enter a page number."));
    }

    trimmed.parse::<i64>().map_err(|source| {
        Error::invalid_page_input()
            .with_message(format!("'{trimmed}' is not a valid page number."))
            .with_source(source)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_page_input("3").unwrap(), 3);
        assert_eq!(parse_page_input("  12\n").unwrap(), 12);
        assert_eq!(parse_page_input("+4").unwrap(), 4);
    }

    #[test]
    fn parses_out_of_range_values() {
        assert_eq!(parse_page_input("0").unwrap(), 0);
        assert_eq!(parse_page_input("-2").unwrap(), -2);
    }

    #[test]
    fn rejects_empty_input() {
        let error = parse_page_input("   ").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidPageInput);
    }

    #[test]
    fn rejects_non_numeric_input() {
        for text in ["abc", "1.5", "2 3", "NaN"] {
            let error = parse_page_input(text).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidPageInput, "input {text:?}");
        }
    }
}
