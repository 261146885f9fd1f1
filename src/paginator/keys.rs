//! Key bindings for paginator navigation.
//!
//! - **First page**: `home/g`
//! - **Previous page**: `←/h/pgup`
//! - **Next page**: `→/l/pgdn`
//! - **Last page**: `end/G`
//!
//! ```rust
//! use bubbletea_pager::paginator::PagerKeyMap;
//! use bubbletea_pager::key::KeyMap;
//!
//! let keymap = PagerKeyMap::default();
//! assert_eq!(keymap.short_help().len(), 2);
//! assert_eq!(keymap.full_help()[0].len(), 4);
//! ```

use crate::key::{self, KeyMap};
use crossterm::event::KeyCode;

/// Key bindings for moving between pages.
#[derive(Debug, Clone)]
pub struct PagerKeyMap {
    /// Go to the first page.
    pub first_page: key::Binding,
    /// Go to the previous page.
    pub prev_page: key::Binding,
    /// Go to the next page.
    pub next_page: key::Binding,
    /// Go to the last page.
    pub last_page: key::Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            prev_page: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::Right,
                KeyCode::Char('l'),
                KeyCode::PageDown,
            ])
            .with_help("→/l", "next page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
        }
    }
}

impl KeyMap for PagerKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.first_page,
            &self.prev_page,
            &self.next_page,
            &self.last_page,
        ]]
    }
}
