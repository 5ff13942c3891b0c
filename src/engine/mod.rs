//! Clock engine: which player's clock runs and how time is charged.
//!
//! The engine is driven by discrete events (a player completing a move,
//! pause/resume, reset) and by ticks delivered through a [`Scheduler`]. Every
//! applied event leaves a [`ClockSnapshot`] ready for rendering.
//!
//! [`Scheduler`]: crate::timer::Scheduler

mod controller;
mod listener;
mod state;

#[cfg(test)]
mod tests;

pub use controller::{ClockEngine, PauseRequest, Reconfigured, TICK_LENGTH_MS};
pub use listener::{ClockListener, Silent};
pub use state::{ClockSnapshot, ClockState};
