//! Key bindings and help metadata for components.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the short help text shown for it. Components expose their bindings through
//! the [`KeyMap`] trait so help views can be generated from them.
//!
//! ```rust
//! use bubbletea_pager::key::Binding;
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next page");
//!
//! let msg = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::NONE };
//! assert!(next.matches(&msg));
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers required in addition to the key.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Returns true if `msg` is this key press.
    ///
    /// Modifiers must match exactly, except that an extra SHIFT is tolerated on
    /// character keys: terminals report `G` as a shifted `Char('G')`.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if msg.key != self.code || !msg.modifiers.contains(self.modifiers) {
            return false;
        }
        let extra = msg.modifiers.difference(self.modifiers);
        extra.is_empty() || (matches!(self.code, KeyCode::Char(_)) && extra == KeyModifiers::SHIFT)
    }
}

/// Help text for a binding: the key legend and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key legend, e.g. `"←/h"`.
    pub key: String,
    /// Description, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key presses.
    ///
    /// Accepts plain key codes or `(KeyCode, KeyModifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help legend and description (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Sets whether the binding is enabled (builder pattern).
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Returns true if `msg` triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Returns true if `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Exposes a component's bindings for help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the full help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_binding_matches_any_of_its_keys() {
        let binding = Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]);

        assert!(binding.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(binding.matches(&key(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
    }

    #[test]
    fn test_shifted_letter_matches_plain_binding() {
        let binding = Binding::new(vec![KeyCode::Char('G')]);
        assert!(binding.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_extra_modifiers_do_not_match() {
        let right = Binding::new(vec![KeyCode::Right]);
        let h = Binding::new(vec![KeyCode::Char('h')]);

        assert!(!right.matches(&key(KeyCode::Right, KeyModifiers::CONTROL)));
        assert!(!right.matches(&key(KeyCode::Right, KeyModifiers::SHIFT)));
        assert!(!h.matches(&key(KeyCode::Char('h'), KeyModifiers::ALT)));
        assert!(!h.matches(&key(
            KeyCode::Char('h'),
            KeyModifiers::SHIFT | KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_required_modifier() {
        let binding = Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)]);

        assert!(binding.matches(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key(KeyCode::Char('n'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Home]).with_help("home", "first page");
        binding.set_enabled(false);

        assert!(!binding.enabled());
        assert!(!binding.matches(&key(KeyCode::Home, KeyModifiers::NONE)));
        assert_eq!(binding.help().desc, "first page");
    }

    #[test]
    fn test_matches_any() {
        let home = Binding::new(vec![KeyCode::Home]);
        let end = Binding::new(vec![KeyCode::End]);

        assert!(matches(&key(KeyCode::End, KeyModifiers::NONE), &[&home, &end]));
        assert!(!matches(&key(KeyCode::Enter, KeyModifiers::NONE), &[&home, &end]));
    }
}
