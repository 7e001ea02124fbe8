use std::cmp::min;

/// Entries of the sidebar menu, one per collection operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MenuItem {
    AddBook,
    RemoveBook,
    ViewBooks,
    ViewProgress,
}

impl MenuItem {
    pub(crate) const ALL: [MenuItem; 4] = [
        MenuItem::AddBook,
        MenuItem::RemoveBook,
        MenuItem::ViewBooks,
        MenuItem::ViewProgress,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuItem::AddBook => "Add Book",
            MenuItem::RemoveBook => "Remove Book",
            MenuItem::ViewBooks => "View Books",
            MenuItem::ViewProgress => "View Progress",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MenuItem::AddBook => 0,
            MenuItem::RemoveBook => 1,
            MenuItem::ViewBooks => 2,
            MenuItem::ViewProgress => 3,
        }
    }

    /// Map the `1`-`4` shortcut keys onto menu entries.
    pub(crate) fn from_shortcut(ch: char) -> Option<Self> {
        let digit = ch.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(|idx| Self::ALL.get(idx).copied())
    }

    pub(crate) fn offset(self, delta: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let idx = (self.index() as isize + delta).rem_euclid(len);
        Self::ALL[idx as usize]
    }
}

/// Cursor over a list whose rows come from the collection on every draw.
/// Used by both the removal picker and the book listing.
#[derive(Default)]
pub(crate) struct ListCursor {
    pub(crate) selected: usize,
}

impl ListCursor {
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max_index = (len - 1) as isize;
        let next = (self.selected as isize + offset).clamp(0, max_index);
        self.selected = next as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Pull the cursor back inside the list after rows disappear.
    pub(crate) fn ensure_in_bounds(&mut self, len: usize) {
        self.selected = min(self.selected, len.saturating_sub(1));
    }
}
