use std::mem;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, error};

use crate::store::BookCollection;

use super::forms::{BookField, BookForm, ConfirmRemove};
use super::helpers::{
    centered_rect, listing_items, progress_lines, surface_error, EMPTY_COLLECTION,
};
use super::screens::{ListCursor, MenuItem};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Width of the menu column.
const SIDEBAR_WIDTH: u16 = 26;
const APP_TITLE: &str = "Book Collection Manager";
/// Marker drawn in front of the selected row of every list.
const LIST_HIGHLIGHT: &str = "> ";

/// Which half of the window receives key presses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Focus {
    Menu,
    Panel,
}

/// Modal overlays drawn on top of the current panel.
enum Mode {
    Normal,
    ConfirmRemove(ConfirmRemove),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    collection: BookCollection,
    menu: MenuItem,
    focus: Focus,
    mode: Mode,
    form: BookForm,
    remove: ListCursor,
    listing: ListCursor,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(collection: BookCollection) -> Self {
        Self {
            collection,
            menu: MenuItem::AddBook,
            focus: Focus::Menu,
            mode: Mode::Normal,
            form: BookForm::default(),
            remove: ListCursor::default(),
            listing: ListCursor::default(),
            status: None,
        }
    }

    pub fn collection(&self) -> &BookCollection {
        &self.collection
    }

    /// Route a key press. Returns `true` once the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => match self.focus {
                Focus::Menu => self.handle_menu_key(code, &mut exit)?,
                Focus::Panel => self.handle_panel_key(code, &mut exit)?,
            },
            Mode::ConfirmRemove(confirm) => self.handle_confirm_remove(code, confirm)?,
        };

        Ok(exit)
    }

    fn handle_menu_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Up => self.select_menu(self.menu.offset(-1)),
            KeyCode::Down => self.select_menu(self.menu.offset(1)),
            KeyCode::Char(ch) => {
                if let Some(item) = MenuItem::from_shortcut(ch) {
                    self.select_menu(item);
                    self.focus_panel();
                }
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Tab => self.focus_panel(),
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_panel_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.menu {
            MenuItem::AddBook => self.handle_add_book(code),
            MenuItem::RemoveBook => self.handle_remove_book(code, exit),
            MenuItem::ViewBooks => {
                let book_count = self.collection.len();
                match code {
                    KeyCode::Char('q') => *exit = true,
                    KeyCode::Esc | KeyCode::Left => self.focus_menu(),
                    KeyCode::Up => self.listing.move_selection(-1, book_count),
                    KeyCode::Down => self.listing.move_selection(1, book_count),
                    KeyCode::PageUp => self.listing.move_selection(-5, book_count),
                    KeyCode::PageDown => self.listing.move_selection(5, book_count),
                    KeyCode::Home => self.listing.select_first(),
                    KeyCode::End => self.listing.select_last(book_count),
                    _ => {}
                }
                Ok(Mode::Normal)
            }
            MenuItem::ViewProgress => {
                match code {
                    KeyCode::Char('q') => *exit = true,
                    KeyCode::Esc | KeyCode::Left => self.focus_menu(),
                    _ => {}
                }
                Ok(Mode::Normal)
            }
        }
    }

    fn handle_add_book(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Esc => self.focus_menu(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.previous_field(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                if let Err(err) = self.save_new_book() {
                    let message = surface_error(&err);
                    error!(error = %format!("{err:#}"), "failed to add book");
                    self.form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            }
            KeyCode::Char(ch) => {
                if self.form.push_char(ch) {
                    self.form.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_remove_book(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let title_count = self.collection.titles().len();
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc | KeyCode::Left => self.focus_menu(),
            KeyCode::Up => self.remove.move_selection(-1, title_count),
            KeyCode::Down => self.remove.move_selection(1, title_count),
            KeyCode::PageUp => self.remove.move_selection(-5, title_count),
            KeyCode::PageDown => self.remove.move_selection(5, title_count),
            KeyCode::Home => self.remove.select_first(),
            KeyCode::End => self.remove.select_last(title_count),
            KeyCode::Enter | KeyCode::Char('-') => match self.selected_title() {
                Some(title) => {
                    self.clear_status();
                    let matches = self
                        .collection
                        .books()
                        .iter()
                        .filter(|book| book.title == title)
                        .count();
                    return Ok(Mode::ConfirmRemove(ConfirmRemove { title, matches }));
                }
                None => self.set_status("No books to remove.", StatusKind::Error),
            },
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_confirm_remove(&mut self, code: KeyCode, confirm: ConfirmRemove) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Removal cancelled.", StatusKind::Info);
                Ok(Mode::Normal)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.perform_remove(&confirm) {
                    Ok(_) => Ok(Mode::Normal),
                    Err(err) => {
                        error!(error = %format!("{err:#}"), "failed to remove book");
                        self.set_status(surface_error(&err), StatusKind::Error);
                        Ok(Mode::Normal)
                    }
                }
            }
            _ => Ok(Mode::ConfirmRemove(confirm)),
        }
    }

    fn save_new_book(&mut self) -> Result<()> {
        let book = self.form.to_book();
        self.collection
            .add(book)
            .context("failed to save book")?;
        self.form.reset();
        self.set_status("Book added successfully!", StatusKind::Info);
        Ok(())
    }

    fn perform_remove(&mut self, confirm: &ConfirmRemove) -> Result<()> {
        let removed = self
            .collection
            .remove(&confirm.title)
            .context("failed to remove book")?;
        self.remove.ensure_in_bounds(self.collection.titles().len());
        if removed > 1 {
            self.set_status(
                format!("Removed {removed} books titled '{}'.", confirm.title),
                StatusKind::Info,
            );
        } else {
            self.set_status("Book removed successfully!", StatusKind::Info);
        }
        Ok(())
    }

    fn selected_title(&self) -> Option<String> {
        self.collection
            .titles()
            .get(self.remove.selected)
            .map(|title| title.to_string())
    }

    fn select_menu(&mut self, item: MenuItem) {
        if self.menu != item {
            debug!(menu = item.label(), "menu selection changed");
            self.menu = item;
            self.clear_status();
        }
    }

    fn focus_panel(&mut self) {
        self.focus = Focus::Panel;
        match self.menu {
            MenuItem::RemoveBook => {
                let title_count = self.collection.titles().len();
                self.remove.ensure_in_bounds(title_count);
                if title_count == 0 {
                    self.set_status("No books to remove.", StatusKind::Info);
                }
            }
            MenuItem::ViewBooks => self.listing.select_first(),
            MenuItem::AddBook | MenuItem::ViewProgress => {}
        }
    }

    fn focus_menu(&mut self) {
        self.focus = Focus::Menu;
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(content_area);

        self.draw_menu(frame, columns[0]);
        match self.menu {
            MenuItem::AddBook => self.draw_add_book(frame, columns[1]),
            MenuItem::RemoveBook => self.draw_remove_book(frame, columns[1]),
            MenuItem::ViewBooks => self.draw_books(frame, columns[1]),
            MenuItem::ViewProgress => self.draw_progress(frame, columns[1]),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        if let Mode::ConfirmRemove(confirm) = &self.mode {
            self.draw_confirm_remove(frame, area, confirm);
        }
    }

    fn panel_block(&self, title: &'static str) -> Block<'static> {
        let block = Block::default().borders(Borders::ALL).title(title);
        if self.focus == Focus::Panel {
            block.border_style(Style::default().fg(Color::Yellow))
        } else {
            block
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .map(|item| ListItem::new(format!("{}. {}", item.index() + 1, item.label())))
            .collect();

        let mut block = Block::default().borders(Borders::ALL).title(APP_TITLE);
        if self.focus == Focus::Menu {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(LIST_HIGHLIGHT);
        let mut state = ListState::default().with_selected(Some(self.menu.index()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_add_book(&self, frame: &mut Frame, area: Rect) {
        let block = self.panel_block("Add a New Book");
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);
        let focused = self.focus == Focus::Panel;

        let field_rows = BookField::ALL.len() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(field_rows + 1), Constraint::Min(0)])
            .split(inner);

        // One row per field, unwrapped, so the cursor row always matches the
        // field and typed whitespace is shown as entered.
        let fields: Vec<Line> = BookField::ALL
            .iter()
            .map(|field| self.form.build_line(*field, focused))
            .collect();
        frame.render_widget(Paragraph::new(fields), chunks[0]);

        let hint = if let Some(error) = &self.form.error {
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(Span::styled(
                "Enter to add • Tab to switch • Space toggles read • Esc to menu",
                Style::default().fg(Color::Gray),
            ))
        };
        frame.render_widget(Paragraph::new(hint).wrap(Wrap { trim: true }), chunks[1]);

        if focused && self.form.active != BookField::Read {
            let field = self.form.active;
            let prefix = format!("{}: ", field.label()).chars().count() as u16;
            let offset = prefix.saturating_add(self.form.value_len(field) as u16);
            let max_x = inner.x + inner.width.saturating_sub(1);
            let cursor_x = inner.x.saturating_add(offset).min(max_x);
            frame.set_cursor_position((cursor_x, inner.y + field.row()));
        }
    }

    fn draw_remove_book(&self, frame: &mut Frame, area: Rect) {
        let block = self.panel_block("Remove a Book");
        let titles = self.collection.titles();

        if titles.is_empty() {
            let message = Paragraph::new(Line::from(EMPTY_COLLECTION))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = titles
            .iter()
            .map(|title| ListItem::new(title.to_string()))
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(LIST_HIGHLIGHT);

        let selected = if self.focus == Focus::Panel {
            Some(self.remove.selected)
        } else {
            None
        };
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_books(&self, frame: &mut Frame, area: Rect) {
        let block = self.panel_block("Your Book Collection");
        let ranked = self.collection.list();

        if ranked.is_empty() {
            let message = Paragraph::new(Line::from(EMPTY_COLLECTION))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let focused = self.focus == Focus::Panel;
        let inner_width = block.inner(area).width as usize;
        let width = if focused {
            inner_width.saturating_sub(LIST_HIGHLIGHT.chars().count())
        } else {
            inner_width
        };

        let list = List::new(listing_items(&ranked, width))
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol(LIST_HIGHLIGHT);

        // The list keeps the selected book in view, so walking the selection
        // reaches every entry however many rows each one wraps onto.
        let selected = focused.then_some(self.listing.selected);
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_progress(&self, frame: &mut Frame, area: Rect) {
        let block = self.panel_block("Reading Progress");
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);
        let stats = self.collection.stats();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(Paragraph::new(progress_lines(&stats)), chunks[0]);

        let ratio = (stats.completion_rate() / 100.0).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Completion"))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(ratio)
            .label(format!("{}%", stats.completion_label()));
        frame.render_widget(gauge, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.mode, self.focus, self.menu) {
            (Mode::ConfirmRemove(_), _, _) => Line::from(vec![
                Span::styled("[y/Enter]", key_style),
                Span::raw(" Remove   "),
                Span::styled("[n/Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Focus::Menu, _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[1-4]", key_style),
                Span::raw(" Jump   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (_, Focus::Panel, MenuItem::AddBook) => Line::from(vec![
                Span::styled("[Tab/↑↓]", key_style),
                Span::raw(" Field   "),
                Span::styled("[Space]", key_style),
                Span::raw(" Toggle Read   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Add   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu"),
            ]),
            (_, Focus::Panel, MenuItem::RemoveBook) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Remove   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (_, Focus::Panel, MenuItem::ViewBooks) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Walk Books   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (_, Focus::Panel, MenuItem::ViewProgress) => Line::from(vec![
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_confirm_remove(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmRemove) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Confirm Removal")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = vec![Line::from(format!("Remove '{}'?", confirm.title))];
        if confirm.matches > 1 {
            lines.push(Line::from(format!(
                "All {} books with this title will be removed.",
                confirm.matches
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Y to confirm or N / Esc to cancel.",
            Style::default().fg(Color::Gray),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tempfile::TempDir;

    fn setup_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let collection = BookCollection::open(temp_dir.path().join("books_data.json")).unwrap();
        (temp_dir, App::new(collection))
    }

    fn press(app: &mut App, codes: impl IntoIterator<Item = KeyCode>) {
        for code in codes {
            assert!(!app.handle_key(code).unwrap());
        }
    }

    fn type_text(app: &mut App, text: &str) {
        press(app, text.chars().map(KeyCode::Char));
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn render(app: &App) -> String {
        screen_text(&draw_sized(app, 100, 24))
    }

    #[test]
    fn add_form_submits_typed_book() {
        let (_temp, mut app) = setup_app();
        press(&mut app, [KeyCode::Enter]);
        type_text(&mut app, "Dune");
        press(&mut app, [KeyCode::Tab]);
        type_text(&mut app, "Herbert");
        press(&mut app, [KeyCode::Tab]);
        type_text(&mut app, "1965");
        press(&mut app, [KeyCode::Tab]);
        type_text(&mut app, "SciFi");
        press(&mut app, [KeyCode::Tab, KeyCode::Char(' '), KeyCode::Enter]);

        let books = app.collection().books();
        assert_eq!(books, &[Book::new("Dune", "Herbert", "1965", "SciFi", true)]);
        assert_eq!(app.form.title, "");
        assert!(render(&app).contains("Book added successfully!"));
    }

    #[test]
    fn typing_q_in_the_form_does_not_quit() {
        let (_temp, mut app) = setup_app();
        press(&mut app, [KeyCode::Enter]);
        type_text(&mut app, "quiet");
        assert_eq!(app.form.title, "quiet");
    }

    #[test]
    fn remove_flow_requires_confirmation() {
        let (_temp, mut app) = setup_app();
        app.collection
            .add(Book::new("Dune", "Herbert", "1965", "SciFi", true))
            .unwrap();
        app.collection
            .add(Book::new("Emma", "Austen", "1815", "Classic", false))
            .unwrap();

        press(&mut app, [KeyCode::Char('2'), KeyCode::Enter, KeyCode::Esc]);
        assert_eq!(app.collection().len(), 2);

        press(&mut app, [KeyCode::Enter, KeyCode::Char('y')]);
        assert_eq!(app.collection().titles(), vec!["Emma"]);
        assert!(render(&app).contains("Book removed successfully!"));
    }

    #[test]
    fn remove_with_empty_collection_reports_nothing_to_do() {
        let (_temp, mut app) = setup_app();
        press(&mut app, [KeyCode::Char('2'), KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::Normal));
        assert!(render(&app).contains("No books to remove."));
    }

    #[test]
    fn views_render_listing_and_progress() {
        let (_temp, mut app) = setup_app();
        app.collection
            .add(Book::new("Dune", "Herbert", "1965", "SciFi", true))
            .unwrap();
        app.collection
            .add(Book::new("Emma", "Austen", "1815", "Classic", false))
            .unwrap();

        press(&mut app, [KeyCode::Char('3')]);
        let screen = render(&app);
        assert!(screen.contains("1. Dune by Herbert (1965) - SciFi - Read"));
        assert!(screen.contains("2. Emma by Austen (1815) - Classic - Unread"));

        press(&mut app, [KeyCode::Esc, KeyCode::Char('4')]);
        let screen = render(&app);
        assert!(screen.contains("Total books in collection: 2"));
        assert!(screen.contains("Reading progress: 50.00%"));
    }

    #[test]
    fn long_listing_reaches_the_last_book() {
        let (_temp, mut app) = setup_app();
        for i in 1..=30 {
            app.collection
                .add(Book::new(
                    format!("A Rather Long Title Number {i}"),
                    "Some Author Name",
                    "2000",
                    "Literary Fiction",
                    false,
                ))
                .unwrap();
        }

        press(&mut app, [KeyCode::Char('3')]);
        let screen = screen_text(&draw_sized(&app, 80, 24));
        assert!(screen.contains("Number 1 by"));
        assert!(!screen.contains("Number 30"));

        press(&mut app, std::iter::repeat(KeyCode::Down).take(200));
        assert_eq!(app.listing.selected, 29);
        let screen = screen_text(&draw_sized(&app, 80, 24));
        assert!(screen.contains("Number 30 by"));
        assert!(screen.contains("Fiction - Unread"));

        press(&mut app, [KeyCode::Home]);
        let screen = screen_text(&draw_sized(&app, 80, 24));
        assert!(screen.contains("Number 1 by"));
    }

    #[test]
    fn form_cursor_follows_typed_whitespace() {
        let (_temp, mut app) = setup_app();
        press(&mut app, [KeyCode::Enter]);
        type_text(&mut app, "  Dune ");

        let mut terminal = draw_sized(&app, 100, 24);
        assert!(screen_text(&terminal).contains("Title:   Dune "));

        // Panel border sits at column 26 and row 0; the value starts after "Title: ".
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!((cursor.x, cursor.y), (27 + 7 + 7, 1));
    }

    #[test]
    fn failed_save_is_shown_and_form_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let collection = BookCollection::with_books(temp_dir.path(), Vec::new());
        let mut app = App::new(collection);

        press(&mut app, [KeyCode::Enter]);
        type_text(&mut app, "Lost");
        press(&mut app, [KeyCode::Enter]);

        assert!(app.collection().is_empty());
        assert_eq!(app.form.title, "Lost");
        assert!(app.form.error.is_some());
    }

    #[test]
    fn quit_from_menu() {
        let (_temp, mut app) = setup_app();
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
    }
}
