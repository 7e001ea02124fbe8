use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::Book;

/// Label rendered in front of the read checkbox.
pub(crate) const READ_PROMPT: &str = "Have you read this book?";

/// Form state for the "Add Book" panel.
#[derive(Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) genre: String,
    pub(crate) read: bool,
    pub(crate) active: BookField,
    pub(crate) error: Option<String>,
}

/// Fields of the book form in focus order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum BookField {
    #[default]
    Title,
    Author,
    Year,
    Genre,
    Read,
}

impl BookField {
    pub(crate) const ALL: [BookField; 5] = [
        BookField::Title,
        BookField::Author,
        BookField::Year,
        BookField::Genre,
        BookField::Read,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Year => "Year",
            BookField::Genre => "Genre",
            BookField::Read => READ_PROMPT,
        }
    }

    /// Row offset of the field inside the form block.
    pub(crate) fn row(self) -> u16 {
        match self {
            BookField::Title => 0,
            BookField::Author => 1,
            BookField::Year => 2,
            BookField::Genre => 3,
            BookField::Read => 4,
        }
    }
}

impl BookForm {
    /// Move focus to the next field, wrapping after the checkbox.
    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Author,
            BookField::Author => BookField::Year,
            BookField::Year => BookField::Genre,
            BookField::Genre => BookField::Read,
            BookField::Read => BookField::Title,
        };
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            BookField::Title => BookField::Read,
            BookField::Author => BookField::Title,
            BookField::Year => BookField::Author,
            BookField::Genre => BookField::Year,
            BookField::Read => BookField::Genre,
        };
    }

    /// Feed a typed character to the active field. On the checkbox only the
    /// space bar does anything.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            BookField::Read => {
                if ch == ' ' {
                    self.toggle_read();
                    true
                } else {
                    false
                }
            }
            field => {
                if let Some(value) = self.text_mut(field) {
                    value.push(ch);
                }
                true
            }
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(value) = self.text_mut(self.active) {
            value.pop();
        }
    }

    pub(crate) fn toggle_read(&mut self) {
        self.read = !self.read;
    }

    /// Build the record exactly as typed. Blank fields are allowed.
    pub(crate) fn to_book(&self) -> Book {
        Book {
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year.clone(),
            genre: self.genre.clone(),
            read: self.read,
        }
    }

    /// Clear every input after a successful submit.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    fn text(&self, field: BookField) -> Option<&String> {
        match field {
            BookField::Title => Some(&self.title),
            BookField::Author => Some(&self.author),
            BookField::Year => Some(&self.year),
            BookField::Genre => Some(&self.genre),
            BookField::Read => None,
        }
    }

    fn text_mut(&mut self, field: BookField) -> Option<&mut String> {
        match field {
            BookField::Title => Some(&mut self.title),
            BookField::Author => Some(&mut self.author),
            BookField::Year => Some(&mut self.year),
            BookField::Genre => Some(&mut self.genre),
            BookField::Read => None,
        }
    }

    /// Render a single line for the form widget. `focused` is false while the
    /// menu has focus so no field is highlighted.
    pub(crate) fn build_line(&self, field: BookField, focused: bool) -> Line<'static> {
        let is_active = focused && self.active == field;
        let active_style = Style::default().fg(Color::Yellow);

        if field == BookField::Read {
            let checkbox = if self.read { "[x]" } else { "[ ]" };
            let style = if is_active {
                active_style
            } else {
                Style::default()
            };
            return Line::from(vec![
                Span::raw(format!("{}: ", field.label())),
                Span::styled(checkbox, style),
            ]);
        }

        let value = self.text(field).cloned().unwrap_or_default();
        let (display, style) = if value.is_empty() {
            let style = if is_active {
                active_style
            } else {
                Style::default().fg(Color::DarkGray)
            };
            (String::new(), style)
        } else if is_active {
            (value, active_style)
        } else {
            (value, Style::default())
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Character count of a text field, used to place the cursor.
    pub(crate) fn value_len(&self, field: BookField) -> usize {
        self.text(field).map(|value| value.chars().count()).unwrap_or(0)
    }
}

/// State for confirming removal of every book sharing a title.
pub(crate) struct ConfirmRemove {
    pub(crate) title: String,
    pub(crate) matches: usize,
}
