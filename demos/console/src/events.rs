//! Terminal event polling
//!
//! Crossterm's poll/read API is blocking, so it runs on its own task and
//! feeds the main loop through a channel, with a token for clean shutdown.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Terminal events the panel reacts to.
#[derive(Debug)]
pub enum TermEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

const MAX_EVENTS_PER_BATCH: usize = 20;

/// Spawn the event polling task.
///
/// Polls crossterm with `poll_timeout` up to a small batch per cycle and
/// sleeps `loop_sleep` between cycles; the token stops the task and drains
/// whatever crossterm still buffered.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<TermEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut processed = 0;
                    while processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        processed += 1;
                        let term_event = match event::read() {
                            Ok(event::Event::Key(key)) if key.kind != KeyEventKind::Release => {
                                Some(TermEvent::Key(key))
                            }
                            Ok(event::Event::Resize(w, h)) => Some(TermEvent::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(term_event) = term_event {
                            if tx.send(term_event).is_err() {
                                debug!("event channel closed, stopping poller");
                                return;
                            }
                        }
                    }
                }
            }
        }
    })
}
