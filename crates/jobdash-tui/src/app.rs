use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use jobdash_api::PostSource;
use jobdash_core::JobdashResult;

use crate::clipboard;
use crate::clock::ClockState;
use crate::events::{Event, EventHandler};
use crate::fetch::{FetchMode, FetchOutcome, Fetcher};
use crate::search::SearchState;
use crate::state::DashboardState;
use crate::ui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigating the result list.
    Browse,
    /// Editing the search bar.
    Search,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub state: DashboardState,
    pub search: SearchState,
    pub combined: Option<String>,
    pub status: Option<String>,
    pub clock: ClockState,
    fetcher: Fetcher,
    outcomes: mpsc::UnboundedReceiver<FetchOutcome>,
}

impl App {
    pub fn new(source: Arc<dyn PostSource>, debounce: Duration) -> Self {
        let (fetcher, outcomes) = Fetcher::new(source);
        Self {
            should_quit: false,
            mode: AppMode::Browse,
            state: DashboardState::new(),
            search: SearchState::new(debounce),
            combined: None,
            status: None,
            clock: ClockState::new(),
            fetcher,
            outcomes,
        }
    }

    pub async fn run(&mut self) -> JobdashResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();

        // Initial load with the empty query, like opening the dashboard.
        self.reset_fetch();

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key(key),
                    Event::Tick => self.on_tick(Instant::now()),
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.mode {
            AppMode::Browse => self.handle_browse_key(key),
            AppMode::Search => self.handle_search_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('/') => self.mode = AppMode::Search,
            KeyCode::Char('j') | KeyCode::Down => self.state.cursor.next(self.state.posts.len()),
            KeyCode::Char('k') | KeyCode::Up => self.state.cursor.prev(),
            KeyCode::Char('v') | KeyCode::Char(' ') => self.state.toggle_selected(),
            KeyCode::Char('m') => self.load_more(),
            KeyCode::Char('r') => self.reset_fetch(),
            KeyCode::Char('c') => self.combined = Some(self.state.combine_selected()),
            KeyCode::Char('y') => self.copy_combined(),
            KeyCode::Esc => {
                if self.combined.is_some() {
                    self.combined = None;
                } else {
                    self.status = None;
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let now = Instant::now();
        match key.code {
            KeyCode::Esc => self.mode = AppMode::Browse,
            KeyCode::Enter => {
                self.mode = AppMode::Browse;
                if self.search.commit_now().is_some() {
                    self.reset_fetch();
                }
            }
            KeyCode::Char(c) => {
                self.search.input.insert_char(c);
                self.search.edited(now);
            }
            KeyCode::Backspace => {
                self.search.input.backspace();
                self.search.edited(now);
            }
            KeyCode::Delete => {
                self.search.input.delete();
                self.search.edited(now);
            }
            KeyCode::Left => self.search.input.move_left(),
            KeyCode::Right => self.search.input.move_right(),
            KeyCode::Home => self.search.input.move_home(),
            KeyCode::End => self.search.input.move_end(),
            _ => {}
        }
    }

    fn on_tick(&mut self, now: Instant) {
        self.clock.tick();

        if self.search.poll(now).is_some() {
            self.reset_fetch();
        }

        while let Ok(outcome) = self.outcomes.try_recv() {
            if let Err(e) = self.state.apply(outcome) {
                tracing::error!("fetch failed: {}", e);
                self.status = Some(format!("Fetch failed: {}", e));
            }
        }
    }

    fn reset_fetch(&mut self) {
        let seq = self.fetcher.request(self.search.query(), 1, FetchMode::Reset);
        self.state.begin_request(seq);
    }

    fn load_more(&mut self) {
        if !self.state.can_load_more() {
            return;
        }
        let page = self.state.next_page;
        let seq = self.fetcher.request(self.search.query(), page, FetchMode::Append);
        self.state.begin_request(seq);
    }

    fn copy_combined(&mut self) {
        let Some(text) = self.combined.as_deref() else {
            self.status = Some("Nothing combined yet (press c first)".to_string());
            return;
        };
        match clipboard::copy_text(text) {
            Ok(()) => self.status = Some("Copied to clipboard!".to_string()),
            Err(e) => {
                tracing::error!("clipboard copy failed: {}", e);
                self.status = Some(format!("Clipboard copy failed: {}", e));
            }
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
