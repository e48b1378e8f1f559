use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::ProgressConfig;

/// Simulated completion percentage, clamped to `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressState {
    percent: u8,
}

impl ProgressState {
    pub fn new(initial: u8) -> Self {
        Self {
            percent: initial.min(100),
        }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_full(&self) -> bool {
        self.percent >= 100
    }

    /// Add `step`, clamping at 100. Returns the new percentage.
    pub fn advance(&mut self, step: u8) -> u8 {
        let next = u16::from(self.percent) + u16::from(step);
        self.percent = next.min(100) as u8;
        self.percent
    }

    pub fn reset(&mut self) {
        self.percent = 0;
    }
}

/// One update from the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressTick {
    pub percent: u8,
    /// Set on the single tick that lands on 100; no ticks follow it.
    pub reached_full: bool,
}

/// Drives a fake progress ramp on a fixed cadence, independent of real work.
#[derive(Clone, Copy, Debug)]
pub struct ProgressSimulator {
    config: ProgressConfig,
}

impl ProgressSimulator {
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// Start ramping from 0. Must be called inside a tokio runtime.
    pub fn start<F>(&self, on_tick: F) -> ProgressHandle
    where
        F: FnMut(ProgressTick) + Send + 'static,
    {
        self.start_at(0, on_tick)
    }

    /// Start ramping from `initial`. The first tick fires one interval after
    /// the call.
    pub fn start_at<F>(&self, initial: u8, mut on_tick: F) -> ProgressHandle
    where
        F: FnMut(ProgressTick) + Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let step = self.config.step.max(1);
        let period = self.config.interval();
        let mut state = ProgressState::new(initial);

        let task = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if flag.load(Ordering::Acquire) {
                    break;
                }

                let percent = state.advance(step);
                let reached_full = state.is_full();
                on_tick(ProgressTick {
                    percent,
                    reached_full,
                });
                if reached_full {
                    break;
                }
            }
        });

        ProgressHandle { task, cancelled }
    }
}

/// Owner of a running ramp. Dropping it cancels the ramp.
#[derive(Debug)]
pub struct ProgressHandle {
    task: JoinHandle<()>,
    cancelled: Arc<AtomicBool>,
}

impl ProgressHandle {
    /// Stop ticking. On a current-thread runtime no tick is delivered after
    /// this returns; on a multi-thread runtime one tick already past the
    /// cancellation check may still land.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.task.abort();
    }

    /// A detached way to cancel the same ramp, e.g. from another task.
    pub fn canceller(&self) -> ProgressCanceller {
        ProgressCanceller {
            cancelled: Arc::clone(&self.cancelled),
            abort: self.task.abort_handle(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// True once the timer task has exited, by reaching 100 or by cancellation.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the timer task to exit.
    pub async fn wait(mut self) {
        let _ = (&mut self.task).await;
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Clone, Debug)]
pub struct ProgressCanceller {
    cancelled: Arc<AtomicBool>,
    abort: AbortHandle,
}

impl ProgressCanceller {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.abort.abort();
    }
}
