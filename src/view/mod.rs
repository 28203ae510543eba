//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod notifications;
mod pagination_bar;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use pagination_bar::pagination_line;
pub use styles::{ColorConfig, ListStyles};
pub use table::{column_widths, COLUMN_HEADERS};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::fetch::{FetchCompletion, FetchDispatcher, ResultsFetcher};
use crate::model::FilterState;
use crate::state::{ActionOutcome, AppState, ControllerEvent, EventListState, FetchRequest};
use chrono::{Local, NaiveDate};
use constants::EVENT_POLL_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The async runtime for fetches could not be started
    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// fetcher to support canned results.
pub struct TuiApp<B, F>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: ListStyles,
    dispatcher: FetchDispatcher<F>,
    completions: UnboundedReceiver<FetchCompletion>,
}

impl<F> TuiApp<CrosstermBackend<Stdout>, F>
where
    F: ResultsFetcher + Send + Sync + 'static,
{
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        styles: ListStyles,
        dispatcher: FetchDispatcher<F>,
        completions: UnboundedReceiver<FetchCompletion>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            styles,
            dispatcher,
            completions,
        ))
    }
}

impl<B, F> TuiApp<B, F>
where
    B: ratatui::backend::Backend,
    F: ResultsFetcher + Send + Sync + 'static,
{
    /// Assemble an app around an already prepared terminal.
    pub(crate) fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        styles: ListStyles,
        dispatcher: FetchDispatcher<F>,
        completions: UnboundedReceiver<FetchCompletion>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles,
            dispatcher,
            completions,
        }
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Between input events the loop
    /// drains finished fetches and redraws when any arrived.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(EVENT_POLL_INTERVAL_MS);

        self.mount();
        self.draw()?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    // Terminal::draw autoresizes
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.drain_completions() {
                self.draw()?;
            }
        }
    }

    /// Issue the initial fetch.
    fn mount(&mut self) {
        if let Some(request) = self.app_state.apply(ControllerEvent::Mount) {
            self.dispatch(request);
        }
    }

    /// Handle a single keyboard event.
    ///
    /// Returns true if app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        match self.app_state.handle_action(action, today()) {
            ActionOutcome::Quit => return true,
            ActionOutcome::Fetch(request) => self.dispatch(request),
            ActionOutcome::Redraw => {}
        }
        false
    }

    fn dispatch(&self, request: FetchRequest) {
        self.dispatcher.dispatch(request.filters);
    }

    /// Feed every finished fetch into the state.
    ///
    /// Returns true if anything arrived.
    fn drain_completions(&mut self) -> bool {
        let mut received = false;
        while let Ok(completion) = self.completions.try_recv() {
            received = true;
            if let Some(request) = self.app_state.apply(ControllerEvent::from(completion)) {
                self.dispatch(request);
            }
        }
        received
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B, F> TuiApp<B, F>
where
    B: ratatui::backend::Backend,
    F: ResultsFetcher + Send + Sync + 'static,
{
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn mount_test(&mut self) {
        self.mount()
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn drain_completions_test(&mut self) -> bool {
        self.drain_completions()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Today's date in the local timezone.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Initialize and run the TUI application.
///
/// Starts the runtime fetches execute on, sets up the terminal, runs the
/// event loop and restores the terminal even when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_fetcher<F>(
    fetcher: F,
    config: &ResolvedConfig,
    colors: ColorConfig,
) -> Result<(), TuiError>
where
    F: ResultsFetcher + Send + Sync + 'static,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(TuiError::Runtime)?;

    let (dispatcher, completions) = FetchDispatcher::new(fetcher, runtime.handle().clone());
    let filters = FilterState::defaults_for(today(), config.page_size);
    let app_state = AppState::new(
        EventListState::new(config.title.clone(), filters),
        config.locations.clone(),
        config.zones.clone(),
    );
    info!(page_size = config.page_size, "Starting event list");

    let result = TuiApp::new(
        app_state,
        ListStyles::with_color_config(colors),
        dispatcher,
        completions,
    )
    .and_then(|mut app| app.run());

    // Always restore terminal state
    let restored = restore_terminal();

    // In-flight requests are abandoned rather than awaited.
    runtime.shutdown_background();

    result.and(restored)
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
