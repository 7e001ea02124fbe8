use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use super::app::App;

/// How long a single wait for input lasts before the screen is redrawn.
const INPUT_POLL: Duration = Duration::from_millis(250);

type Backend = CrosstermBackend<Stdout>;

/// What one terminal event means to the book manager.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Key(KeyCode),
    Interrupt,
    Ignored,
}

impl From<Event> for Input {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Input::from(key),
            _ => Input::Ignored,
        }
    }
}

impl From<KeyEvent> for Input {
    fn from(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return Input::Ignored;
        }
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Input::Interrupt;
        }
        Input::Key(key.code)
    }
}

/// Raw mode plus the alternate screen for as long as the value lives. The
/// previous terminal state comes back on drop, including when the draw loop
/// bails out with an error.
struct Session {
    terminal: Terminal<Backend>,
    restored: bool,
}

impl Session {
    fn start() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("failed to create terminal backend")?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode().context("failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("failed to leave alternate screen")?;
        self.terminal
            .show_cursor()
            .context("failed to restore cursor visibility")?;
        info!("terminal restored");
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %format!("{err:#}"), "terminal left in a partial state");
        }
    }
}

/// Take over the terminal and feed key presses to `app` until it asks to quit.
pub fn run_app(app: &mut App) -> Result<()> {
    let mut session = Session::start()?;
    let outcome = drive(&mut session.terminal, app);
    session.restore()?;
    outcome
}

fn drive(terminal: &mut Terminal<Backend>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        if !event::poll(INPUT_POLL).context("event polling failed")? {
            continue;
        }
        match Input::from(event::read().context("failed to read event")?) {
            Input::Ignored => {}
            Input::Interrupt => {
                debug!("interrupted from the keyboard");
                return Ok(());
            }
            Input::Key(code) => {
                if app.handle_key(code)? {
                    return Ok(());
                }
            }
        }
    }
}
