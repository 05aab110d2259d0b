use std::{
    io::{self, Stdout},
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
    app::{
        fetch,
        state::{AppState, Effect, FetchOutcome, FetchRequest},
        ui,
    },
    config::Config,
    services::QuoteService,
};

const TICK: Duration = Duration::from_millis(100);

pub struct App<S: QuoteService> {
    service: Arc<S>,
    state: AppState,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
}

impl<S: QuoteService> App<S> {
    pub fn new(service: S, config: &Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            service: Arc::new(service),
            state: AppState::new(*config.movers_shown()),
            tx,
            rx,
        }
    }

    fn dispatch(&self, request: FetchRequest) {
        fetch::dispatch(Arc::clone(&self.service), request, self.tx.clone());
    }

    pub async fn run(&mut self, initial_symbol: Option<&str>) -> Result<()> {
        for request in self.state.start(initial_symbol) {
            self.dispatch(request);
        }

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = setup_or_restore(init_terminal, || {
            let _ = disable_raw_mode();
        })?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            while let Ok(outcome) = self.rx.try_recv() {
                self.state.apply(outcome);
            }

            terminal.draw(|frame| ui::render(frame, &self.state))?;

            // Keeps the runtime free for in-flight fetches between key presses.
            if !tokio::task::block_in_place(|| event::poll(TICK))? {
                continue;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                for effect in self.state.handle_key(key) {
                    match effect {
                        Effect::Quit => {
                            info!("Quitting");
                            return Ok(());
                        }
                        Effect::Fetch(request) => self.dispatch(request),
                    }
                }
            }
        }
    }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Runs `setup`; when it fails, `restore` undoes what was done before it so the
/// error leaves the terminal usable.
pub(crate) fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().inspect_err(|_| restore())
}
