// animation.rs - Fixed-cadence tick loop with pause and stop
//
// Each cycle steps the board, asks for a redraw, then sleeps for whatever is
// left of the tick period. While paused the loop parks on the pause channel.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine;
use crate::state::{PauseSwitch, Redraw, SharedBoard};

/// Stops a running [`AnimationLoop`]. Cloning shares the same signal.
#[derive(Debug, Clone)]
pub struct StopHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.tx.send_replace(true);
    }
}

pub struct AnimationLoop<R> {
    board: SharedBoard,
    pause: watch::Receiver<bool>,
    stop: watch::Receiver<bool>,
    stop_tx: Arc<watch::Sender<bool>>,
    redraw: R,
    tick_time: Duration,
    min_sleep: Duration,
}

impl<R: Redraw> AnimationLoop<R> {
    pub fn new(board: SharedBoard, pause: &PauseSwitch, redraw: R, config: &Config) -> Self {
        let (stop_tx, stop) = watch::channel(false);
        Self {
            board,
            pause: pause.subscribe(),
            stop,
            stop_tx: Arc::new(stop_tx),
            redraw,
            tick_time: config.tick_time,
            min_sleep: config.min_sleep,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        StopHandle {
            tx: self.stop_tx.clone(),
        }
    }

    /// Advance the board one generation and request a redraw.
    ///
    /// Returns `false` when the board was resized or edited while the next
    /// generation was being computed; the result is thrown away in that case.
    pub fn tick(&self) -> bool {
        let current = self.board.snapshot();
        let next = engine::step(&current);

        let mut view = self.board.lock();
        if !view.board.replace_all(next) {
            warn!(
                version = current.version(),
                "board changed mid-step, discarding generation"
            );
            return false;
        }
        debug!(
            generation = view.board.generation(),
            population = view.board.population(),
            "tick"
        );
        drop(view);

        self.redraw.request_redraw();
        true
    }

    /// Time to sleep after a cycle that took `elapsed`.
    fn sleep_after(&self, elapsed: Duration) -> Duration {
        match self.tick_time.checked_sub(elapsed) {
            Some(left) if !left.is_zero() => left,
            _ => {
                warn!(?elapsed, "tick overran its period");
                self.min_sleep
            }
        }
    }

    /// Run until stopped. Never ticks while paused.
    pub async fn run(mut self) {
        info!(tick = ?self.tick_time, "animation loop started");

        loop {
            let running = tokio::select! {
                biased;
                _ = stopped(&mut self.stop) => false,
                resumed = unpaused(&mut self.pause) => resumed,
            };
            if !running {
                break;
            }

            let started = Instant::now();
            self.tick();
            let nap = self.sleep_after(started.elapsed());

            tokio::select! {
                biased;
                _ = stopped(&mut self.stop) => break,
                _ = tokio::time::sleep(nap) => {}
            }
        }

        info!("animation loop stopped");
    }
}

/// Resolves once the stop flag is raised or the stop sender is gone.
async fn stopped(stop: &mut watch::Receiver<bool>) {
    if stop.wait_for(|stop| *stop).await.is_err() {
        // Closed sender counts as a stop
        debug!("stop sender dropped");
    }
}

/// Resolves with `true` once the pause flag is clear, or `false` if the pause
/// switch has gone away.
async fn unpaused(pause: &mut watch::Receiver<bool>) -> bool {
    pause.wait_for(|paused| !*paused).await.is_ok()
}
