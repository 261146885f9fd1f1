#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-pager/")]

//! # bubbletea-pager
//!
//! A numbered pagination widget for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications.
//!
//! Give the paginator a collection and a page size; it works out which page
//! numbers to show, renders First / Previous / page numbers / Next / Last
//! controls, and hands your application the items of the selected page every
//! time the selection changes.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! - [`pager`]: the pure arithmetic. [`compute_pager`] turns
//!   `(total_items, current_page, page_size)` into a [`Pager`] holding the page
//!   count, the window of page numbers to show and the slice indices of the
//!   current page.
//! - [`paginator`]: the widget. [`Paginator`] owns the items, validates page
//!   requests, calls your callback and renders the controls with lipgloss.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_pager::prelude::*;
//!
//! let items: Vec<String> = (1..=150).map(|i| format!("Item {}", i)).collect();
//! let mut paginator = Paginator::new(items, PaginatorConfig::new().with_page_size(10))
//!     .expect("valid configuration");
//!
//! assert_eq!(paginator.total_pages(), 15);
//! assert_eq!(paginator.page_items()[0], "Item 1");
//!
//! paginator.request_page(15);
//! assert_eq!(paginator.page_items()[0], "Item 141");
//!
//! let controls = paginator.view();
//! assert!(controls.contains("Next"));
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! Forward messages to the paginator from your model's `update()` and render it
//! in `view()`:
//!
//! ```rust
//! use bubbletea_pager::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     paginator: Paginator<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let items: Vec<String> = (1..=100).map(|i| format!("Item {}", i)).collect();
//!         (Self { paginator: Paginator::from_items(items) }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.paginator.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         format!(
//!             "{}\n\n{}",
//!             self.paginator.page_items().join("\n"),
//!             self.paginator.view()
//!         )
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: rejected
//! page requests and collection resets at `debug`, every computed pager at
//! `trace`. Install any `log` backend to see them.

pub mod error;
pub mod key;
pub mod pager;
pub mod paginator;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// A focused component reacts to keyboard input; a blurred one ignores it.
///
/// ```rust
/// use bubbletea_pager::prelude::*;
///
/// let mut paginator = Paginator::from_items(vec![1, 2, 3]);
/// assert!(paginator.focused());
///
/// paginator.blur();
/// assert!(!paginator.focused());
///
/// let _cmd = paginator.focus();
/// assert!(paginator.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command to run when focus is gained.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use error::ConfigError;
pub use key::{Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use pager::{compute_pager, Pager, DEFAULT_PAGE_SIZE, MAX_VISIBLE_PAGES};
pub use paginator::{
    Config as PaginatorConfig, GoToPageMsg, Labels as PaginatorLabels, Model as Paginator,
    PageChange, PagerKeyMap, PagerStyles, StyleOverrides,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_pager::prelude::*;
///
/// let pager = compute_pager(25, 1, 10);
/// assert_eq!(pager.pages, vec![1, 2, 3]);
/// ```
pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::key::{Binding, KeyMap};
    pub use crate::pager::{compute_pager, Pager};
    pub use crate::paginator::{
        Config as PaginatorConfig, GoToPageMsg, Labels as PaginatorLabels, Model as Paginator,
        PageChange, PagerKeyMap, PagerStyles, StyleOverrides,
    };
    pub use crate::Component;
}
