use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::search::{OutcomeSubscription, SearchOutcome};

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Resize,
    Tick,
    /// The search service published a new outcome.
    Outcome(SearchOutcome),
}

/// Merges terminal input and published outcomes into one stream.
///
/// Terminal input is read on a dedicated thread because crossterm's reader
/// blocks; outcomes are forwarded by a Tokio task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    stop: Arc<AtomicBool>,
    forwarder: JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, mut outcomes: OutcomeSubscription) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));

        let input_tx = tx.clone();
        let input_stop = Arc::clone(&stop);
        thread::spawn(move || read_terminal(tick_rate, input_tx, input_stop));

        let forwarder = tokio::spawn(async move {
            while let Some(outcome) = outcomes.changed().await {
                if tx.send(AppEvent::Outcome(outcome)).is_err() {
                    break;
                }
            }
        });

        Self {
            rx,
            stop,
            forwarder,
        }
    }

    /// Next event, or `None` once both sources are gone.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        self.forwarder.abort();
    }
}

fn read_terminal(tick_rate: Duration, tx: mpsc::UnboundedSender<AppEvent>, stop: Arc<AtomicBool>) {
    let mut last_tick = Instant::now();
    while !stop.load(Ordering::Relaxed) {
        // Short poll keeps the stop flag responsive.
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                    Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                    Ok(Event::Resize(_, _)) => Some(AppEvent::Resize),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to read terminal event");
                        break;
                    }
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Failed to poll terminal events");
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
}
