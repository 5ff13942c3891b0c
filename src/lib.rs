pub mod console;
pub mod control;
pub mod engine;
pub mod error;
pub mod format;
pub mod player;
pub mod settings;
pub mod sync;
pub mod timer;
pub mod types;

pub use control::TimeControl;
pub use engine::{ClockEngine, ClockListener, ClockSnapshot, ClockState, TICK_LENGTH_MS};
pub use error::{ClockError, ConfigError};
pub use format::TimeFormatter;
pub use player::PlayerClock;
pub use settings::{Settings, TimeUnit};
pub use timer::{Scheduler, TimerQueue};
pub use types::{DelayMode, Player};
