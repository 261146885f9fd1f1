//! Configuration for the paginator widget.

use super::keys::PagerKeyMap;
use super::style::StyleOverrides;
use crate::error::ConfigError;
use crate::pager::DEFAULT_PAGE_SIZE;

/// Text shown on the navigation controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label of the "go to first page" control.
    pub first: String,
    /// Label of the "go to previous page" control.
    pub previous: String,
    /// Label of the "go to next page" control.
    pub next: String,
    /// Label of the "go to last page" control.
    pub last: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: "First".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            last: "Last".to_string(),
        }
    }
}

impl Labels {
    /// Creates labels from the four control texts.
    pub fn new(
        first: impl Into<String>,
        previous: impl Into<String>,
        next: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            previous: previous.into(),
            next: next.into(),
            last: last.into(),
        }
    }
}

/// Paginator configuration.
///
/// Defaults: initial page 1, ten items per page, English labels, default
/// styles and the default key map.
///
/// The builder methods never fail; an invalid value is reported by
/// [`Config::validate`], which the paginator constructors call.
///
/// # Examples
///
/// ```rust
/// use bubbletea_pager::paginator::{Config, Labels};
/// use bubbletea_pager::ConfigError;
///
/// let config = Config::new()
///     .with_page_size(25)
///     .with_labels(Labels::new("«", "‹", "›", "»"));
/// assert!(config.validate().is_ok());
///
/// let bad = Config::new().with_page_size(0);
/// assert_eq!(bad.validate(), Err(ConfigError::ZeroPageSize));
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Page selected whenever a new collection is set (1-based).
    pub initial_page: usize,
    /// Number of items per page.
    pub page_size: usize,
    /// Texts of the navigation controls.
    pub labels: Labels,
    /// Style overrides layered on the base styles.
    pub styles: StyleOverrides,
    /// Start from blank styles instead of the default ones.
    pub disable_default_styles: bool,
    /// Key bindings.
    pub keymap: PagerKeyMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            labels: Labels::default(),
            styles: StyleOverrides::default(),
            disable_default_styles: false,
            keymap: PagerKeyMap::default(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial page (builder pattern).
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.initial_page = page;
        self
    }

    /// Sets the page size (builder pattern).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the control labels (builder pattern).
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the style overrides (builder pattern).
    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    /// Starts from blank styles instead of the defaults (builder pattern).
    pub fn with_default_styles_disabled(mut self, disabled: bool) -> Self {
        self.disable_default_styles = disabled;
        self
    }

    /// Sets the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: PagerKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroPageSize`] if `page_size` is 0.
    /// - [`ConfigError::ZeroInitialPage`] if `initial_page` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.initial_page == 0 {
            return Err(ConfigError::ZeroInitialPage);
        }
        Ok(())
    }
}
