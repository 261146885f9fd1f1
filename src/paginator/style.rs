//! Styling for the paginator control.
//!
//! The control is rendered as one row of cells inside a container:
//!
//! ```text
//! [ First ][ Previous ][ 1 ][ 2 ][ 3 ][ Next ][ Last ]
//! ```
//!
//! Each cell is styled in layers: the `item` style wraps the cell and the `link`
//! style wraps its label. Inside the link, the label of the current page is
//! rendered with the `active` style, and labels of controls that cannot be used
//! from the current page (First/Previous on page 1, Next/Last on the last page)
//! with the `disabled` style.
//!
//! Custom styles are layered on the defaults with [`StyleOverrides`]: properties
//! set on an override win, and properties it leaves unset are inherited from the
//! default for that element. Padding and margins are merged per side; a side
//! left at 0 keeps the default, so removing the default padding means starting
//! from blank styles (`disable_default_styles`).
//!
//! ```rust
//! use bubbletea_pager::paginator::{PagerStyles, StyleOverrides};
//! use lipgloss_extras::prelude::*;
//!
//! let overrides = StyleOverrides::default()
//!     .with_link(Style::new().foreground(Color::from("#FF5F87")));
//!
//! let styles = PagerStyles::resolve(&overrides, false);
//! let _cell = styles.link.clone().render("Next");
//! ```

use lipgloss_extras::prelude::*;

/// Resolved styles for every rendered element of the paginator.
#[derive(Debug, Clone)]
pub struct PagerStyles {
    /// Style for the row containing all cells.
    pub container: Style,
    /// Style wrapping each cell.
    pub item: Style,
    /// Style for each cell's label.
    pub link: Style,
    /// Style for the current page's label, applied inside `link`.
    pub active: Style,
    /// Style for labels of unusable controls, applied inside `link`.
    pub disabled: Style,
}

impl Default for PagerStyles {
    /// Default adaptive styles: horizontally padded labels, a bold underlined
    /// current page and subdued unusable controls.
    fn default() -> Self {
        Self {
            container: Style::new(),
            item: Style::new(),
            link: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(0, 1, 0, 1),
            active: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .bold(true)
                .underline(true),
            disabled: Style::new().foreground(AdaptiveColor {
                Light: "#DDDADA",
                Dark: "#3C3C3C",
            }),
        }
    }
}

impl PagerStyles {
    /// Styles with no properties set at all.
    pub fn blank() -> Self {
        Self {
            container: Style::new(),
            item: Style::new(),
            link: Style::new(),
            active: Style::new(),
            disabled: Style::new(),
        }
    }

    /// Builds the styles used for rendering.
    ///
    /// Starts from [`PagerStyles::default`], or from [`PagerStyles::blank`] when
    /// `disable_defaults` is set, and layers each override on top.
    pub fn resolve(overrides: &StyleOverrides, disable_defaults: bool) -> Self {
        let base = if disable_defaults {
            Self::blank()
        } else {
            Self::default()
        };

        Self {
            container: merge(base.container, overrides.container.as_ref()),
            item: merge(base.item, overrides.item.as_ref()),
            link: merge(base.link, overrides.link.as_ref()),
            active: merge(base.active, overrides.active.as_ref()),
            disabled: merge(base.disabled, overrides.disabled.as_ref()),
        }
    }
}

/// Layers `custom` on `base`.
///
/// lipgloss `inherit` skips padding and margins, so those are carried over per
/// side: a side the override leaves at 0 takes the base value.
fn merge(base: Style, custom: Option<&Style>) -> Style {
    let Some(custom) = custom else {
        return base;
    };

    let (pt, pr, pb, pl) = per_side(custom.get_padding(), base.get_padding());
    let (mt, mr, mb, ml) = per_side(custom.get_margin(), base.get_margin());
    custom
        .clone()
        .inherit(base)
        .padding(pt, pr, pb, pl)
        .margin(mt, mr, mb, ml)
}

fn per_side(
    custom: (i32, i32, i32, i32),
    base: (i32, i32, i32, i32),
) -> (i32, i32, i32, i32) {
    let pick = |c: i32, b: i32| if c == 0 { b } else { c };
    (
        pick(custom.0, base.0),
        pick(custom.1, base.1),
        pick(custom.2, base.2),
        pick(custom.3, base.3),
    )
}

/// Per-element style overrides layered on the paginator's styles.
///
/// Any element left as `None` keeps its base style.
#[derive(Debug, Clone, Default)]
pub struct StyleOverrides {
    /// Override for the container row.
    pub container: Option<Style>,
    /// Override for each cell.
    pub item: Option<Style>,
    /// Override for each label.
    pub link: Option<Style>,
    /// Override for the current page's label.
    pub active: Option<Style>,
    /// Override for labels of unusable controls.
    pub disabled: Option<Style>,
}

impl StyleOverrides {
    /// Sets the container override (builder pattern).
    pub fn with_container(mut self, style: Style) -> Self {
        self.container = Some(style);
        self
    }

    /// Sets the cell override (builder pattern).
    pub fn with_item(mut self, style: Style) -> Self {
        self.item = Some(style);
        self
    }

    /// Sets the label override (builder pattern).
    pub fn with_link(mut self, style: Style) -> Self {
        self.link = Some(style);
        self
    }

    /// Sets the current page override (builder pattern).
    pub fn with_active(mut self, style: Style) -> Self {
        self.active = Some(style);
        self
    }

    /// Sets the unusable control override (builder pattern).
    pub fn with_disabled(mut self, style: Style) -> Self {
        self.disabled = Some(style);
        self
    }

    /// Returns true if no element is overridden.
    pub fn is_empty(&self) -> bool {
        self.container.is_none()
            && self.item.is_none()
            && self.link.is_none()
            && self.active.is_none()
            && self.disabled.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap_or_default()
    }

    #[test]
    fn test_default_link_pads_labels() {
        let styles = PagerStyles::default();
        assert_eq!(plain(&styles.link.clone().render("3")), " 3 ");
    }

    #[test]
    fn test_blank_styles_render_label_as_is() {
        let styles = PagerStyles::resolve(&StyleOverrides::default(), true);
        assert_eq!(plain(&styles.link.clone().render("Next")), "Next");
        assert_eq!(plain(&styles.active.clone().render("4")), "4");
    }

    #[test]
    fn test_override_applies_over_blank_base() {
        let overrides = StyleOverrides::default().with_link(Style::new().padding(0, 2, 0, 2));
        assert!(!overrides.is_empty());

        let styles = PagerStyles::resolve(&overrides, true);
        assert_eq!(plain(&styles.link.clone().render("1")), "  1  ");
        // Untouched elements keep the blank base
        assert_eq!(plain(&styles.item.clone().render("1")), "1");
    }

    #[test]
    fn test_color_override_keeps_default_padding() {
        let overrides =
            StyleOverrides::default().with_link(Style::new().foreground(Color::from("#FF0000")));

        let styles = PagerStyles::resolve(&overrides, false);
        assert_eq!(styles.link.get_padding(), (0, 1, 0, 1));
        assert_eq!(plain(&styles.link.clone().render("3")), " 3 ");
    }

    #[test]
    fn test_padding_override_merges_per_side() {
        let overrides = StyleOverrides::default().with_link(Style::new().padding_left(3));

        let styles = PagerStyles::resolve(&overrides, false);
        assert_eq!(styles.link.get_padding(), (0, 1, 0, 3));
    }

    #[test]
    fn test_margin_carried_from_base() {
        let base = Style::new().margin(0, 2, 0, 0);
        let merged = merge(base, Some(&Style::new().bold(true)));
        assert_eq!(merged.get_margin(), (0, 2, 0, 0));
    }
}
