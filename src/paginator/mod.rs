//! A numbered paginator widget for bubbletea-rs.
//!
//! The paginator owns a collection of items and shows a row of page controls:
//! First, Previous, a window of up to ten page numbers, Next and Last. Whenever
//! the selected page changes it slices the collection and hands the items of the
//! new page to a callback.
//!
//! Page changes come from three places:
//! - key presses, handled by [`Model::update`] through the [`PagerKeyMap`];
//! - a [`GoToPageMsg`] sent by the application (for example on a mouse click);
//! - direct calls to [`Model::request_page`] and the navigation helpers.
//!
//! All of them go through the same check: a request for a page outside
//! `1..=total_pages` is ignored, leaving the selection and the displayed items
//! untouched.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_pager::paginator::{Config, Model};
//! use std::sync::{Arc, Mutex};
//!
//! let items: Vec<u32> = (1..=25).collect();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut paginator = Model::new(items, Config::new())
//!     .expect("default config is valid")
//!     .with_on_change(move |page: &[u32]| {
//!         if let Ok(mut seen) = sink.lock() {
//!             seen.push(page.to_vec());
//!         }
//!     });
//!
//! assert_eq!(paginator.current_page(), Some(1));
//! assert_eq!(paginator.page_items(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
//!
//! let change = paginator.request_page(3).expect("page 3 exists");
//! assert_eq!(change.items, &[21, 22, 23, 24, 25]);
//!
//! // Out of range: ignored
//! assert!(paginator.request_page(4).is_none());
//! assert_eq!(paginator.current_page(), Some(3));
//!
//! // Subscribing delivered the current page, then page 3
//! assert_eq!(seen.lock().map(|s| s.len()).unwrap_or(0), 2);
//! ```

mod config;
mod keys;
mod rendering;
mod style;


pub use config::{Config, Labels};
pub use keys::PagerKeyMap;
pub use style::{PagerStyles, StyleOverrides};

use crate::error::ConfigError;
use crate::pager::{compute_pager, Pager};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::fmt;
use std::sync::Arc;

/// Callback receiving the items of a newly selected page.
///
/// Shared so that a cloned paginator notifies the same subscriber.
pub type ChangeCallback<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Message asking the paginator to select a page (1-based).
///
/// Handled by [`Model::update`] even when the paginator is blurred, since it
/// comes from the application rather than the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoToPageMsg(pub usize);

/// The outcome of an accepted page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange<'a, T> {
    /// The freshly computed pager.
    pub pager: &'a Pager,
    /// Items of the selected page.
    pub items: &'a [T],
}

/// The paginator widget.
///
/// Holds the item collection, the configuration and the pager of the selected
/// page. The pager is `None` while no page is selected, which is always the case
/// for an empty collection.
#[derive(Clone)]
pub struct Model<T> {
    items: Arc<[T]>,
    config: Config,
    styles: PagerStyles,
    pager: Option<Pager>,
    on_change: Option<ChangeCallback<T>>,
    focus: bool,
}

impl<T: fmt::Debug> fmt::Debug for Model<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("items", &self.items)
            .field("config", &self.config)
            .field("pager", &self.pager)
            .field("on_change", &self.on_change.is_some())
            .field("focus", &self.focus)
            .finish()
    }
}

impl<T> Model<T> {
    /// Creates a paginator over `items`.
    ///
    /// When the collection is not empty, the configured initial page is
    /// requested right away. If that page does not exist the request is ignored
    /// like any other out-of-range request and no page is selected.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`Config::validate`].
    pub fn new(items: impl Into<Arc<[T]>>, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let styles = PagerStyles::resolve(&config.styles, config.disable_default_styles);
        let mut model = Self {
            items: items.into(),
            config,
            styles,
            pager: None,
            on_change: None,
            focus: true,
        };
        model.reset();
        Ok(model)
    }

    /// Creates a paginator over `items` with the default configuration.
    pub fn from_items(items: impl Into<Arc<[T]>>) -> Self {
        let mut model = Self {
            items: items.into(),
            config: Config::default(),
            styles: PagerStyles::default(),
            pager: None,
            on_change: None,
            focus: true,
        };
        model.reset();
        model
    }

    /// Sets the page change callback (builder pattern).
    ///
    /// If a page is already selected, the callback is invoked once with its
    /// items so the subscriber starts out in sync.
    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        self.set_on_change(on_change);
        self
    }

    /// Sets the page change callback, invoking it with the current page if any.
    pub fn set_on_change<F>(&mut self, on_change: F)
    where
        F: Fn(&[T]) + Send + Sync + 'static,
    {
        if self.pager.is_some() {
            on_change(self.page_items());
        }
        self.on_change = Some(Arc::new(on_change));
    }

    /// Replaces the item collection.
    ///
    /// A different collection resets the selection to the configured initial
    /// page. Passing the collection already held (the same `Arc`) changes
    /// nothing. Returns true if the collection was replaced.
    pub fn set_items(&mut self, items: Arc<[T]>) -> bool {
        if Arc::ptr_eq(&self.items, &items) {
            return false;
        }
        log::debug!(
            "paginator collection changed ({} -> {} items), resetting to page {}",
            self.items.len(),
            items.len(),
            self.config.initial_page
        );
        self.items = items;
        self.reset();
        true
    }

    /// Changes the initial page and selects it.
    ///
    /// Setting the page already configured changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroInitialPage`] if `page` is 0; the
    /// configuration is left unchanged.
    pub fn set_initial_page(&mut self, page: usize) -> Result<(), ConfigError> {
        if page == 0 {
            return Err(ConfigError::ZeroInitialPage);
        }
        if page != self.config.initial_page {
            self.config.initial_page = page;
            self.reset();
        }
        Ok(())
    }

    /// Requests `page` (1-based).
    ///
    /// The bound is checked against the page count of the current collection
    /// before anything is computed. A page outside `1..=total_pages` is ignored:
    /// `None` is returned, the selection stays as it was and the callback is not
    /// invoked.
    ///
    /// On success the new pager is stored, the callback receives the page's
    /// items and both are returned.
    pub fn request_page(&mut self, page: usize) -> Option<PageChange<'_, T>> {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages {
            log::debug!(
                "ignoring request for page {} (collection has {} pages)",
                page,
                total_pages
            );
            return None;
        }

        let pager = compute_pager(self.items.len(), page, self.config.page_size);
        let range = pager.item_range();
        if let Some(on_change) = &self.on_change {
            on_change(&self.items[range.clone()]);
        }

        let pager = self.pager.insert(pager);
        Some(PageChange {
            pager,
            items: &self.items[range],
        })
    }

    /// Selects the first page.
    pub fn first_page(&mut self) -> Option<PageChange<'_, T>> {
        self.request_page(1)
    }

    /// Selects the page before the current one.
    pub fn prev_page(&mut self) -> Option<PageChange<'_, T>> {
        let current = self.current_page()?;
        self.request_page(current - 1)
    }

    /// Selects the page after the current one.
    pub fn next_page(&mut self) -> Option<PageChange<'_, T>> {
        let current = self.current_page()?;
        self.request_page(current + 1)
    }

    /// Selects the last page.
    pub fn last_page(&mut self) -> Option<PageChange<'_, T>> {
        let last = self.total_pages();
        self.request_page(last)
    }

    /// Handles key presses and [`GoToPageMsg`] messages.
    ///
    /// Key presses are ignored while the paginator is blurred.
    pub fn update(&mut self, msg: &Msg) {
        if let Some(GoToPageMsg(page)) = msg.downcast_ref::<GoToPageMsg>() {
            self.request_page(*page);
            return;
        }
        if !self.focus {
            return;
        }
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.config.keymap.first_page.matches(key_msg) {
                self.first_page();
            } else if self.config.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            } else if self.config.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.config.keymap.last_page.matches(key_msg) {
                self.last_page();
            }
        }
    }

    /// The pager of the selected page, if any.
    pub fn pager(&self) -> Option<&Pager> {
        self.pager.as_ref()
    }

    /// The selected page (1-based), if any.
    pub fn current_page(&self) -> Option<usize> {
        self.pager.as_ref().map(|p| p.current_page)
    }

    /// Number of pages of the current collection.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.config.page_size)
    }

    /// Items of the selected page; empty if no page is selected.
    pub fn page_items(&self) -> &[T] {
        match &self.pager {
            Some(pager) => &self.items[pager.item_range()],
            None => &[],
        }
    }

    /// The whole collection.
    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    /// The configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The resolved styles.
    pub fn styles(&self) -> &PagerStyles {
        &self.styles
    }

    /// The key bindings.
    pub fn keymap(&self) -> &PagerKeyMap {
        &self.config.keymap
    }

    fn reset(&mut self) {
        self.pager = None;
        if !self.items.is_empty() {
            self.request_page(self.config.initial_page);
        }
    }
}

impl<T> Component for Model<T> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
