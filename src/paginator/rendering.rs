//! View rendering for the paginator.

use super::Model;
use lipgloss_extras::lipgloss;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellState {
    Normal,
    Active,
    Disabled,
}

impl<T> Model<T> {
    /// Renders the page controls.
    ///
    /// Returns an empty string when there is nothing to paginate: no page is
    /// selected (empty collection) or the window holds a single page.
    ///
    /// Otherwise renders one row: First, Previous, the page numbers of the
    /// window, Next and Last. First and Previous are drawn disabled on the first
    /// page, Next and Last on the last page, and the current page number is drawn
    /// active.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_pager::paginator::Model;
    ///
    /// let empty: Model<u8> = Model::from_items(Vec::new());
    /// assert_eq!(empty.view(), "");
    ///
    /// let single = Model::from_items(vec![1, 2, 3]);
    /// assert_eq!(single.view(), "");
    ///
    /// let paged = Model::from_items((0..25).collect::<Vec<u32>>());
    /// assert!(paged.view().contains("Previous"));
    /// ```
    pub fn view(&self) -> String {
        let Some(pager) = &self.pager else {
            return String::new();
        };
        if pager.pages.len() <= 1 {
            return String::new();
        }

        let labels = &self.config.labels;
        let back = if pager.on_first_page() {
            CellState::Disabled
        } else {
            CellState::Normal
        };
        let forward = if pager.on_last_page() {
            CellState::Disabled
        } else {
            CellState::Normal
        };

        let mut cells = Vec::with_capacity(pager.pages.len() + 4);
        cells.push(self.render_cell(&labels.first, back));
        cells.push(self.render_cell(&labels.previous, back));
        for &page in &pager.pages {
            let state = if page == pager.current_page {
                CellState::Active
            } else {
                CellState::Normal
            };
            cells.push(self.render_cell(&page.to_string(), state));
        }
        cells.push(self.render_cell(&labels.next, forward));
        cells.push(self.render_cell(&labels.last, forward));

        let parts: Vec<&str> = cells.iter().map(String::as_str).collect();
        let row = lipgloss::join_horizontal(lipgloss::TOP, &parts);
        self.styles.container.clone().render(&row)
    }

    fn render_cell(&self, label: &str, state: CellState) -> String {
        let label = match state {
            CellState::Normal => label.to_string(),
            CellState::Active => self.styles.active.clone().render(label),
            CellState::Disabled => self.styles.disabled.clone().render(label),
        };
        let link = self.styles.link.clone().render(&label);
        self.styles.item.clone().render(&link)
    }
}
