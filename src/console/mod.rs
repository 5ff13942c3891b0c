//! Line-oriented console driver.
//!
//! Reads commands on stdin and runs the clocks in real time. A ticker thread
//! wakes every few milliseconds and feeds due ticks to the engine; commands
//! first catch the engine up to the current time, so a tap is always applied
//! after the ticks that preceded it.

use std::io::{self, BufRead};
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use parking_lot::Mutex;

use crate::engine::{ClockEngine, ClockListener, PauseRequest, Reconfigured};
use crate::error::ClockError;
use crate::settings::Settings;
use crate::sync::StopFlag;
use crate::timer::{spawn_ticker, MonotonicClock, TimerQueue};
use crate::types::Player;

pub mod command;
pub mod options;

use command::{parse_console_command, ConsoleCommand};
use options::{apply_setoption, option_lines, parse_setoption, OptionUpdate};

/// How often the ticker thread polls for due ticks
const POLL_INTERVAL_MS: u64 = 10;

/// Buffers engine signals as output lines.
#[derive(Debug, Default)]
pub struct ConsoleListener {
    events: Vec<String>,
}

impl ConsoleListener {
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.events)
    }
}

impl ClockListener for ConsoleListener {
    fn out_of_time(&mut self, player: Player) {
        self.events.push(format!("flag {player}"));
    }

    fn confirm_reset(&mut self) {
        self.events.push("confirm reset".to_string());
    }
}

pub type SharedEngine = Arc<Mutex<ClockEngine<TimerQueue, ConsoleListener>>>;

/// Output of one command.
#[derive(Debug, Default)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

pub struct Console {
    engine: SharedEngine,
    settings: Settings,
}

impl Console {
    pub fn new(settings: Settings) -> Result<Self, ClockError> {
        let control = settings.to_time_control()?;
        let engine = ClockEngine::with_parts(control, TimerQueue::new(), ConsoleListener::default())?;
        Ok(Console {
            engine: Arc::new(Mutex::new(engine)),
            settings,
        })
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine {
        Arc::clone(&self.engine)
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execute one input line at time `now_ms`.
    pub fn handle_line(&mut self, line: &str, now_ms: u64) -> Reply {
        let Some(cmd) = parse_console_command(line) else {
            return Reply::default();
        };

        let mut reply = Reply::default();
        let mut engine = self.engine.lock();
        engine.run_until(now_ms);
        reply.lines.extend(engine.listener_mut().drain());

        match cmd {
            ConsoleCommand::Tap(player) => {
                if !engine.player_moved(player) {
                    reply.lines.push(format!("info string tap {player} ignored"));
                }
            }
            ConsoleCommand::Pause => {
                if engine.request_pause_or_reset() == PauseRequest::Paused {
                    reply.lines.push("info string paused".to_string());
                }
            }
            ConsoleCommand::Resume(player) => {
                if let Err(e) = engine.resume(player) {
                    reply.lines.push(format!("error {e}"));
                }
            }
            ConsoleCommand::Reset => engine.reset(),
            ConsoleCommand::SetOption(parts) => {
                let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
                match parse_setoption(&parts) {
                    Some((name, value)) => {
                        let mut updated = self.settings;
                        if apply_setoption(&mut updated, &name, value.as_deref())
                            == OptionUpdate::UnknownName
                        {
                            reply.lines.push(format!("error unknown option '{name}'"));
                        } else {
                            match updated
                                .to_time_control()
                                .map_err(ClockError::from)
                                .and_then(|control| engine.apply_settings(control))
                            {
                                Ok(outcome) => {
                                    self.settings = updated;
                                    if outcome == Reconfigured::Reset {
                                        reply.lines.push("info string clocks reset".to_string());
                                    }
                                }
                                Err(e) => reply.lines.push(format!("error {e}")),
                            }
                        }
                    }
                    None => reply.lines.push("error malformed setoption".to_string()),
                }
            }
            ConsoleCommand::Options => reply.lines.extend(option_lines(&self.settings)),
            ConsoleCommand::Show => {}
            ConsoleCommand::Quit => {
                reply.quit = true;
                return reply;
            }
            ConsoleCommand::Unknown(text) => {
                reply.lines.push(format!("error unknown command '{text}'"));
            }
        }

        reply.lines.extend(engine.listener_mut().drain());
        reply.lines.push(engine.snapshot().to_string());
        reply
    }
}

/// Apply ticks due by `now_ms` and collect any signals they raised.
pub fn poll(engine: &SharedEngine, now_ms: u64) -> Vec<String> {
    let mut engine = engine.lock();
    engine.run_until(now_ms);
    engine.listener_mut().drain()
}

/// Run the console on stdin/stdout until `quit` or end of input.
pub fn run_console_loop() {
    let mut console = match Console::new(Settings::default()) {
        Ok(console) => console,
        Err(e) => {
            error!("cannot start clock: {e}");
            return;
        }
    };

    let clock = MonotonicClock::start();
    let stop = StopFlag::new();
    let shared = console.engine();
    let ticker = spawn_ticker(
        Duration::from_millis(POLL_INTERVAL_MS),
        stop.clone(),
        move || {
            for line in poll(&shared, clock.now_ms()) {
                println!("{line}");
            }
        },
    );
    info!("console ready");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let reply = console.handle_line(&line, clock.now_ms());
        for out in &reply.lines {
            println!("{out}");
        }
        if reply.quit {
            break;
        }
    }

    stop.stop();
    if ticker.join().is_err() {
        error!("ticker thread panicked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds_console(initial: u64) -> Console {
        let settings = Settings {
            initial_time: initial,
            initial_unit: crate::settings::TimeUnit::Seconds,
            ..Settings::default()
        };
        Console::new(settings).unwrap()
    }

    #[test]
    fn tap_starts_opponent_clock() {
        let mut console = seconds_console(5);
        let reply = console.handle_line("tap 1", 0);
        assert_eq!(reply.lines.last().unwrap(), "clock 0:05.0 | 0:05.0 active 2");

        let reply = console.handle_line("show", 1_000);
        assert_eq!(reply.lines.last().unwrap(), "clock 0:05.0 | 0:04.0 active 2");
    }

    #[test]
    fn flag_is_reported_once() {
        let mut console = seconds_console(1);
        console.handle_line("tap 2", 0);
        let reply = console.handle_line("show", 5_000);
        assert_eq!(reply.lines[0], "flag 1");
        assert!(reply.lines.last().unwrap().ends_with("timeup"));

        let reply = console.handle_line("show", 6_000);
        assert!(!reply.lines.iter().any(|l| l.starts_with("flag")));
    }

    #[test]
    fn pause_then_pause_requests_reset() {
        let mut console = seconds_console(5);
        console.handle_line("tap 1", 0);
        let reply = console.handle_line("pause", 500);
        assert!(reply.lines.contains(&"info string paused".to_string()));
        let reply = console.handle_line("pause", 600);
        assert!(reply.lines.contains(&"confirm reset".to_string()));
    }

    #[test]
    fn resume_when_not_paused_is_an_error() {
        let mut console = seconds_console(5);
        let reply = console.handle_line("resume 1", 0);
        assert!(reply.lines[0].starts_with("error Cannot resume"));
    }

    #[test]
    fn setoption_display_change_keeps_game() {
        let mut console = seconds_console(5);
        console.handle_line("tap 1", 0);
        let reply = console.handle_line("setoption name Show Deciseconds value false", 1_050);
        assert_eq!(reply.lines.last().unwrap(), "clock 0:05 | 0:04 active 2");
        assert!(!console.settings().show_deciseconds);
    }

    #[test]
    fn setoption_clock_change_resets() {
        let mut console = seconds_console(5);
        console.handle_line("tap 1", 0);
        let reply = console.handle_line("setoption name Initial Time value 8", 1_000);
        assert!(reply.lines.contains(&"info string clocks reset".to_string()));
        assert_eq!(reply.lines.last().unwrap(), "clock 0:08.0 | 0:08.0 active -");
    }

    #[test]
    fn unknown_input_is_reported() {
        let mut console = seconds_console(5);
        let reply = console.handle_line("castle", 0);
        assert_eq!(reply.lines[0], "error unknown command 'castle'");
        let reply = console.handle_line("setoption name Hash value 64", 0);
        assert_eq!(reply.lines[0], "error unknown option 'Hash'");
    }

    #[test]
    fn quit_stops() {
        let mut console = seconds_console(5);
        assert!(console.handle_line("quit", 0).quit);
    }
}
