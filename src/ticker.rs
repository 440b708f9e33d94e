//! Background ETA ticker.
//!
//! Each bar owns at most one ticker: a tokio task that wakes once per interval,
//! takes the bar's lock and refreshes the remaining-time and rate fields from the
//! progress made since the previous tick. Inside a tokio runtime the task is
//! spawned on it; a synchronous caller gets a dedicated thread driving a
//! current-thread runtime instead.
//!
//! The ticker moves through three states:
//!
//! - [`TickerState::Idle`] - not started yet
//! - [`TickerState::Running`] - ticking once per interval
//! - [`TickerState::Stopped`] - told to quit; never ticks again
//!
//! Stopping sends on a oneshot channel, so it never waits for the task. The task
//! selects on that channel next to its interval and exits on the next poll,
//! dropping the interval with it.

use crate::bar::state::BarState;
use crate::error::Result;

use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::runtime::{self, Handle};
use tokio::sync::oneshot;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

/// Lifecycle of an ETA ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    /// Not started.
    Idle,
    /// Ticking once per interval.
    Running,
    /// Stopped for good.
    Stopped,
}

/// Handle on a bar's ETA ticker task.
#[derive(Debug)]
pub(crate) struct EtaTicker {
    state: TickerState,
    period: Duration,
    /// Dropping the sender resolves the receiver too, so a dropped ticker stops
    /// its task as well.
    quit: Option<oneshot::Sender<()>>,
}

impl EtaTicker {
    pub fn new(period: Duration) -> Self {
        Self {
            state: TickerState::Idle,
            period,
            quit: None,
        }
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    /// Spawn the ticker task.
    ///
    /// Only an idle ticker starts; calling this in any other state does nothing.
    pub fn start(&mut self, shared: Arc<Mutex<BarState>>) -> Result<()> {
        if self.state != TickerState::Idle {
            return Ok(());
        }

        let (quit_tx, quit_rx) = oneshot::channel();
        let task = run(shared, self.period, quit_rx);
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(task);
            }
            Err(_) => {
                let runtime = runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()?;
                thread::Builder::new()
                    .name("glyphbar-eta".to_string())
                    .spawn(move || runtime.block_on(task))?;
                debug!("No tokio runtime in scope, ETA ticker runs on its own thread");
            }
        }

        self.quit = Some(quit_tx);
        self.state = TickerState::Running;
        debug!("ETA ticker started with a {:?} interval", self.period);
        Ok(())
    }

    /// Signal the task to quit and mark the ticker stopped.
    pub fn stop(&mut self) {
        if let Some(quit) = self.quit.take() {
            // The task may already be gone with its runtime.
            let _ = quit.send(());
            debug!("ETA ticker stop requested");
        }
        self.state = TickerState::Stopped;
    }
}

async fn run(shared: Arc<Mutex<BarState>>, period: Duration, mut quit: oneshot::Receiver<()>) {
    let mut ticks = time::interval_at(Instant::now() + period, period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = &mut quit => break,
            _ = ticks.tick() => tick(&shared, period),
        }
    }

    debug!("ETA ticker exited");
}

fn tick(shared: &Mutex<BarState>, period: Duration) {
    let mut state = shared.lock();
    state.sample(period);
    trace!(current = state.current, eta = %state.eta_text, "ETA tick");
}
