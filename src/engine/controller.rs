//! Clock engine implementation.

use log::{debug, info, trace, warn};

use super::listener::{ClockListener, Silent};
use super::state::{ClockSnapshot, ClockState};
use crate::control::TimeControl;
use crate::error::ClockError;
use crate::format::TimeFormatter;
use crate::player::PlayerClock;
use crate::timer::{Scheduler, TickHandle, TimerQueue};
use crate::types::{DelayMode, Player};

/// Length of one tick in milliseconds
pub const TICK_LENGTH_MS: u64 = 100;

/// Result of [`ClockEngine::request_pause_or_reset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseRequest {
    /// The running clock was paused
    Paused,
    /// Clocks were already stopped; a reset confirmation was requested
    ResetRequested,
}

/// Result of [`ClockEngine::apply_settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconfigured {
    /// Clock-affecting values changed; the game was reset
    Reset,
    /// Only display preferences changed; the game continues
    DisplayOnly,
    /// Nothing changed
    Unchanged,
}

/// Two-player clock state machine.
pub struct ClockEngine<S = TimerQueue, L = Silent> {
    control: TimeControl,
    formatter: TimeFormatter,
    clocks: [PlayerClock; 2],
    state: ClockState,
    /// The single tick in flight, if any
    pending_tick: Option<TickHandle>,
    scheduler: S,
    listener: L,
}

impl ClockEngine {
    /// Engine over a simulated-time [`TimerQueue`] with no listener.
    pub fn new(control: TimeControl) -> Result<Self, ClockError> {
        Self::with_parts(control, TimerQueue::new(), Silent)
    }
}

impl<S: Scheduler, L: ClockListener> ClockEngine<S, L> {
    pub fn with_parts(control: TimeControl, scheduler: S, listener: L) -> Result<Self, ClockError> {
        control.validate()?;
        let mut engine = ClockEngine {
            control,
            formatter: TimeFormatter::from_control(&control),
            clocks: [PlayerClock::default(); 2],
            state: ClockState::Idle,
            pending_tick: None,
            scheduler,
            listener,
        };
        engine.install(control);
        Ok(engine)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    #[must_use]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn active_player(&self) -> Option<Player> {
        self.state.active_player()
    }

    #[inline]
    #[must_use]
    pub fn is_time_up(&self) -> bool {
        self.state.is_time_up()
    }

    /// Whether the player on turn has already had their delay seeded.
    #[must_use]
    pub fn is_turn_delayed(&self) -> bool {
        self.state
            .turn_holder()
            .is_some_and(|p| self.clock(p).delay_started())
    }

    #[inline]
    #[must_use]
    pub fn clock(&self, player: Player) -> &PlayerClock {
        &self.clocks[player.index()]
    }

    #[inline]
    #[must_use]
    pub fn control(&self) -> &TimeControl {
        &self.control
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the time control and start a fresh game.
    ///
    /// An invalid control is rejected and the current game continues untouched.
    pub fn configure(&mut self, control: TimeControl) -> Result<(), ClockError> {
        if let Err(e) = control.validate() {
            warn!("rejected time control {control:?}: {e}");
            return Err(e.into());
        }
        self.install(control);
        self.notify();
        Ok(())
    }

    /// Start over with the current time control.
    pub fn reset(&mut self) {
        self.install(self.control);
        self.notify();
    }

    /// Apply changed preferences, resetting only when clock values change.
    pub fn apply_settings(&mut self, control: TimeControl) -> Result<Reconfigured, ClockError> {
        if control == self.control {
            return Ok(Reconfigured::Unchanged);
        }
        if self.control.affects_clocks(&control) {
            self.configure(control)?;
            return Ok(Reconfigured::Reset);
        }
        control.validate()?;
        debug!("display preferences updated without reset");
        self.control = control;
        self.formatter = TimeFormatter::from_control(&control);
        self.notify();
        Ok(Reconfigured::DisplayOnly)
    }

    fn install(&mut self, control: TimeControl) {
        self.cancel_tick();
        self.control = control;
        self.formatter = TimeFormatter::from_control(&control);
        self.clocks = Player::BOTH.map(|p| PlayerClock::new(control.initial_ms(p)));
        self.state = ClockState::Idle;
        info!(
            "clock configured: {} delay {} ms, start {} / {} ms",
            control.delay_mode,
            control.delay_ms,
            control.initial_ms(Player::One),
            control.initial_ms(Player::Two)
        );
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// `player` finished their move; the opponent's clock starts.
    ///
    /// Returns `false` without changing anything when the opponent's clock is
    /// already running (a repeated press) or the game is over.
    pub fn player_moved(&mut self, player: Player) -> bool {
        match self.state {
            ClockState::TimeUp(_) => {
                trace!("move by player {player} ignored: time is up");
                false
            }
            ClockState::Running(p) if p == player.opponent() => {
                trace!("move by player {player} ignored: opponent already running");
                false
            }
            _ => {
                self.switch_turn(player);
                self.notify();
                true
            }
        }
    }

    /// Charge one tick to `player`.
    ///
    /// Ticks for a player whose clock is not running are stale and ignored.
    pub fn tick(&mut self, player: Player) -> bool {
        if self.state != ClockState::Running(player) {
            trace!("stale tick for player {player} while {}", self.state);
            return false;
        }
        // Drops the queued tick when driven directly rather than by the scheduler
        self.cancel_tick();

        let bronstein = self.control.delay_mode == DelayMode::Bronstein;
        let delay_ms = self.control.delay_ms;
        let clock = &mut self.clocks[player.index()];

        if bronstein {
            clock.advance_delay(delay_ms, TICK_LENGTH_MS);
        }
        // While delay remains the tick is absorbed by it
        if !(bronstein && clock.pending_delay_ms() > 0) {
            clock.deduct(TICK_LENGTH_MS);
        }

        let out_of_time = if bronstein {
            clock.budget_ms() == 0
        } else {
            clock.remaining_ms() == 0
        };
        trace!(
            "tick player {player}: {} ms left, {} ms delay",
            clock.remaining_ms(),
            clock.pending_delay_ms()
        );

        if out_of_time {
            info!("player {player} is out of time");
            self.state = ClockState::TimeUp(player);
            self.listener.out_of_time(player);
        } else {
            self.schedule_tick(player);
        }
        self.notify();
        true
    }

    /// Stop the running clock, remembering whose turn it is.
    pub fn pause(&mut self) -> Result<(), ClockError> {
        match self.state {
            ClockState::Running(p) => {
                self.stop_running(p);
                Ok(())
            }
            state => Err(self.illegal("pause", state)),
        }
    }

    /// Restart `player`'s clock after a pause.
    ///
    /// Resuming the paused player continues their turn with the delay they had
    /// left. Resuming the other player means the paused player completed their
    /// move during the pause.
    pub fn resume(&mut self, player: Player) -> Result<(), ClockError> {
        match self.state {
            ClockState::Paused(_) => {
                self.switch_turn(player.opponent());
                self.notify();
                Ok(())
            }
            state => Err(self.illegal("resume", state)),
        }
    }

    /// Pause if a clock is running, otherwise ask for reset confirmation.
    pub fn request_pause_or_reset(&mut self) -> PauseRequest {
        match self.state {
            ClockState::Running(p) => {
                self.stop_running(p);
                PauseRequest::Paused
            }
            state => {
                debug!("reset confirmation requested while {state}");
                self.listener.confirm_reset();
                PauseRequest::ResetRequested
            }
        }
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Apply every tick due at or before `now_ms`. Returns the number applied.
    pub fn run_until(&mut self, now_ms: u64) -> usize {
        let mut applied = 0;
        while let Some(player) = self.scheduler.fire_due(now_ms) {
            if self.tick(player) {
                applied += 1;
            }
        }
        applied
    }

    /// Let `elapsed_ms` pass on the scheduler's clock.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        let now = self.scheduler.now_ms().saturating_add(elapsed_ms);
        self.run_until(now)
    }

    /// Current clock faces and state.
    #[must_use]
    pub fn snapshot(&self) -> ClockSnapshot {
        let face = |p: Player| {
            let clock = self.clock(p);
            self.formatter
                .format_clock(clock.remaining_ms(), clock.pending_delay_ms())
        };
        ClockSnapshot {
            player_one: face(Player::One),
            player_two: face(Player::Two),
            active: self.state.active_player(),
            time_up: self.state.is_time_up(),
            state: self.state,
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn switch_turn(&mut self, mover: Player) {
        let next = mover.opponent();
        let resuming = self.state == ClockState::Paused(next);

        match self.control.delay_mode {
            DelayMode::Fischer if self.state.turn_holder() == Some(mover) => {
                self.clocks[mover.index()].add_increment(self.control.delay_ms);
            }
            DelayMode::Bronstein => {
                self.clocks[mover.index()].set_pending_delay(0);
                if !resuming {
                    self.clocks[next.index()].set_pending_delay(self.control.delay_ms);
                }
            }
            _ => {}
        }

        self.clocks[mover.index()].set_delay_started(false);
        if !resuming {
            self.clocks[next.index()].set_delay_started(false);
        }

        self.cancel_tick();
        self.state = ClockState::Running(next);
        self.schedule_tick(next);
        debug!(
            "player {mover} moved; player {next} {}",
            if resuming { "resumes" } else { "on turn" }
        );
    }

    fn stop_running(&mut self, player: Player) {
        self.cancel_tick();
        self.state = ClockState::Paused(player);
        debug!("paused on player {player}");
        self.notify();
    }

    fn schedule_tick(&mut self, player: Player) {
        self.pending_tick = Some(self.scheduler.schedule(player, TICK_LENGTH_MS));
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn illegal(&self, operation: &'static str, state: ClockState) -> ClockError {
        warn!("cannot {operation} while {state}");
        ClockError::IllegalTransition { operation, state }
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        self.listener.render(&snapshot);
    }
}
