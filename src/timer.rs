//! Tick scheduling.
//!
//! The engine never reads the wall clock. It asks a [`Scheduler`] to deliver a
//! tick for a player after a fixed interval and cancels that request when the
//! turn changes. [`TimerQueue`] keeps pending ticks against whatever time the
//! caller supplies: simulated milliseconds in tests, [`MonotonicClock`] in the
//! console driver.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::sync::StopFlag;
use crate::types::Player;

/// Identifies one scheduled tick so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickHandle(u64);

/// Cancellable one-shot tick delivery.
pub trait Scheduler {
    /// Request a tick for `player` once `after_ms` have elapsed.
    fn schedule(&mut self, player: Player, after_ms: u64) -> TickHandle;

    /// Drop a pending tick. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TickHandle);

    /// Release the earliest tick due at or before `now_ms`, if any.
    ///
    /// When nothing is due the scheduler's time moves forward to `now_ms`.
    fn fire_due(&mut self, now_ms: u64) -> Option<Player>;

    /// The time new ticks are scheduled from.
    fn now_ms(&self) -> u64;
}

#[derive(Debug, Clone, Copy)]
struct PendingTick {
    due_ms: u64,
    handle: TickHandle,
    player: Player,
}

/// Deadline-ordered queue of pending ticks over caller-supplied time.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTick>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue seeded at `start_ms` instead of zero.
    #[must_use]
    pub fn starting_at(start_ms: u64) -> Self {
        TimerQueue {
            now_ms: start_ms,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Deadline of the earliest pending tick.
    #[must_use]
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due_ms).min()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, player: Player, after_ms: u64) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTick {
            due_ms: self.now_ms.saturating_add(after_ms),
            handle,
            player,
        });
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.pending.retain(|t| t.handle != handle);
    }

    fn fire_due(&mut self, now_ms: u64) -> Option<Player> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.handle))
            .map(|(i, _)| i);

        match next {
            Some(i) => {
                let tick = self.pending.swap_remove(i);
                self.now_ms = self.now_ms.max(tick.due_ms);
                Some(tick.player)
            }
            None => {
                self.now_ms = self.now_ms.max(now_ms);
                None
            }
        }
    }

    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

/// Milliseconds elapsed since construction, from [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn start() -> Self {
        MonotonicClock {
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Spawn a thread that calls `on_wake` every `interval` until `stop_flag` is set.
pub fn spawn_ticker<F>(interval: Duration, stop_flag: StopFlag, mut on_wake: F) -> JoinHandle<()>
where
    F: FnMut() + Send + 'static,
{
    thread::spawn(move || {
        while !stop_flag.is_stopped() {
            thread::sleep(interval);
            if stop_flag.is_stopped() {
                break;
            }
            on_wake();
        }
    })
}
