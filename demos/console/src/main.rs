//! Console control panel binary
//!
//! Flow: terminal events -> [`map_key`](console_panel::components::map_key)
//! -> actions -> reducer -> effects. The effect handler spawns dispatch
//! futures and cooldown timers on the task manager; their completions come
//! back as actions on the same channel.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use panel_dispatch::{ActionLogger, Dispatcher, Store, TaskManager};

use console_panel::action::Action;
use console_panel::components;
use console_panel::effect::Effect;
use console_panel::events::{self, TermEvent};
use console_panel::panel;
use console_panel::reducer::reducer;
use console_panel::state::AppState;

/// Terminal control panel for the cache/database demo backend
#[derive(Parser, Debug)]
#[command(name = "panel")]
#[command(about = "Trigger backend load jobs and user operations from the terminal")]
struct Args {
    /// Base URL of the backend API
    #[arg(long, default_value = panel::DEFAULT_BASE_URL)]
    base_url: String,

    /// Append structured logs to this file (stdout belongs to the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &args.base_url).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    base_url: &str,
) -> io::Result<()> {
    let endpoints = panel::endpoints(base_url);
    let dispatcher = Dispatcher::new(endpoints.clone());

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut tasks = TaskManager::new(action_tx.clone());
    let mut store = Store::new(
        AppState::new(panel::action_table(), &endpoints),
        reducer,
    )
    .with_middleware(ActionLogger);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<TermEvent>();
    let cancel_token = CancellationToken::new();
    let _poller = events::spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(16),
        cancel_token.clone(),
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(120));
    let mut should_render = true;

    loop {
        if should_render {
            terminal.draw(|frame| components::render(frame, store.state()))?;
            should_render = false;
        }

        tokio::select! {
            Some(event) = event_rx.recv() => {
                match event {
                    TermEvent::Key(key) => {
                        if let Some(action) = components::map_key(key, store.state()) {
                            let _ = action_tx.send(action);
                        }
                    }
                    TermEvent::Resize(_, _) => {
                        should_render = true;
                    }
                }
            }

            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    break;
                }
                let transition = store.dispatch(action);
                for effect in transition.effects {
                    handle_effect(effect, &dispatcher, &store, &mut tasks);
                }
                should_render |= transition.changed;
            }

            _ = ticker.tick() => {
                should_render |= store.dispatch(Action::Tick).changed;
            }
        }
    }

    cancel_token.cancel();
    tasks.cancel_all();
    Ok(())
}

/// Perform one declared effect: spawn the dispatch future or arm a
/// cooldown timer.
fn handle_effect(
    effect: Effect,
    dispatcher: &Dispatcher,
    store: &Store<AppState, Action, Effect>,
    tasks: &mut TaskManager<Action>,
) {
    match effect {
        Effect::Dispatch { id, generation, fields } => {
            let descriptor = match store.state().table.lookup(id) {
                Ok(descriptor) => descriptor.clone(),
                Err(err) => {
                    tracing::error!(%err, "dropping dispatch effect");
                    return;
                }
            };
            let dispatcher = dispatcher.clone();
            tasks.spawn(id, async move {
                let outcome = dispatcher.dispatch(&descriptor, &fields).await;
                Action::DidSettle { id, generation, outcome }
            });
        }
        Effect::Cooldown { id, generation, delay } => {
            tasks.schedule(id, delay, move || Action::CooldownDidExpire { id, generation });
        }
    }
}
