//! Page window configuration.
//!
//! [`PageWindowConfig`] carries the two inputs a host hands to a window at
//! construction: the starting page size and the display hint for the
//! page-size picker. It can be built in code through [`PageWindowBuilder`],
//! deserialized from a config file, or (with the `config` feature) parsed
//! from command-line arguments and environment variables.

#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a [`PageWindow`](crate::PageWindow).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[cfg_attr(feature = "config", derive(Args))]
#[builder(
    name = "PageWindowBuilder",
    pattern = "owned",
    setter(into, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
pub struct PageWindowConfig {
    /// Number of records shown per page when the window is created.
    ///
    /// This value is also the size restored by a pagination reset.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "page-size",
            env = "PAGEWIN_PAGE_SIZE",
            default_value_t = PageWindowConfig::DEFAULT_PAGE_SIZE
        )
    )]
    #[builder(default = "PageWindowConfig::DEFAULT_PAGE_SIZE")]
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Whether the page-size picker should be hidden by the renderer.
    ///
    /// Passed through unchanged; it has no effect on slicing.
    #[cfg_attr(
        feature = "config",
        arg(long = "page-size-hidden", env = "PAGEWIN_PAGE_SIZE_HIDDEN")
    )]
    #[builder(default = "false")]
    #[serde(default)]
    pub page_size_hidden: bool,
}

fn default_page_size() -> usize {
    PageWindowConfig::DEFAULT_PAGE_SIZE
}

impl Default for PageWindowConfig {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            page_size_hidden: false,
        }
    }
}

impl PageWindowConfig {
    /// Page size used when the host does not provide one.
    pub const DEFAULT_PAGE_SIZE: usize = 5;

    /// Create a new configuration builder.
    pub fn builder() -> PageWindowBuilder {
        PageWindowBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// Fields are public, so a configuration assembled by hand or parsed from
    /// the command line is checked again before a window accepts it.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_config().with_message("page size must be greater than 0"));
        }

        Ok(())
    }
}

impl PageWindowBuilder {
    fn validate_config(&self) -> std::result::Result<(), String> {
        if let Some(page_size) = &self.page_size
            && *page_size == 0
        {
            return Err("Page size must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl From<PageWindowBuilderError> for Error {
    fn from(error: PageWindowBuilderError) -> Self {
        Error::invalid_config()
            .with_message(error.to_string())
            .with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PageWindowConfig::default();

        assert_eq!(config.page_size, 5);
        assert!(!config.page_size_hidden);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = PageWindowConfig::builder()
            .with_page_size(25usize)
            .with_page_size_hidden(true)
            .build()
            .expect("Valid config");

        assert_eq!(config.page_size, 25);
        assert!(config.page_size_hidden);
    }

    #[test]
    fn test_builder_defaults_match_default() {
        let config = PageWindowConfig::builder().build().expect("Valid config");
        assert_eq!(config, PageWindowConfig::default());
    }

    #[test]
    fn test_builder_rejects_zero_page_size() {
        let result = PageWindowConfig::builder().with_page_size(0usize).build();
        assert!(result.is_err());

        let error: Error = result.unwrap_err().into();
        assert_eq!(error.kind(), crate::ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config = PageWindowConfig {
            page_size: 0,
            page_size_hidden: false,
        };
        let error = config.validate().unwrap_err();
        assert_eq!(error.kind(), crate::ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: PageWindowConfig = serde_json::from_str("{}").expect("Valid json");
        assert_eq!(config, PageWindowConfig::default());

        let config: PageWindowConfig =
            serde_json::from_str(r#"{"page_size":10,"page_size_hidden":true}"#)
                .expect("Valid json");
        assert_eq!(config.page_size, 10);
        assert!(config.page_size_hidden);
    }
}
