use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// Environment variable naming the log level (error, warn, info, debug, trace)
const LOG_LEVEL_VAR: &str = "CHESS_CLOCK_LOG";

fn log_level() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn main() {
    if let Err(e) = WriteLogger::init(log_level(), Config::default(), std::io::stderr()) {
        eprintln!("logger unavailable: {e}");
    }

    chess_clock::console::run_console_loop();
}
