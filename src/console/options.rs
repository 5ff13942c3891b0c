use log::warn;

use crate::settings::{Settings, TimeUnit};
use crate::types::DelayMode;

/// Outcome of a `setoption` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionUpdate {
    Applied,
    UnknownName,
}

fn check(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `option ...` lines describing every setting and its current value.
#[must_use]
pub fn option_lines(settings: &Settings) -> Vec<String> {
    let defaults = Settings::default();
    vec![
        format!(
            "option name Initial Time type spin default {} current {}",
            defaults.initial_time, settings.initial_time
        ),
        format!(
            "option name Initial Time 2 type spin default {} current {}",
            defaults.initial_time_2, settings.initial_time_2
        ),
        format!(
            "option name Different Initial Time type check default {} current {}",
            check(defaults.different_initial_time),
            check(settings.different_initial_time)
        ),
        format!(
            "option name Initial Time Unit type combo default {} current {} var hours var minutes var seconds",
            defaults.initial_unit, settings.initial_unit
        ),
        format!(
            "option name Delay type combo default {} current {} var None var Fischer var Bronstein",
            defaults.delay_mode, settings.delay_mode
        ),
        format!(
            "option name Delay Time type spin default {} current {}",
            defaults.delay_time, settings.delay_time
        ),
        format!(
            "option name Delay Time Unit type combo default {} current {} var hours var minutes var seconds",
            defaults.delay_unit, settings.delay_unit
        ),
        format!(
            "option name Show Deciseconds type check default {} current {}",
            check(defaults.show_deciseconds),
            check(settings.show_deciseconds)
        ),
        format!(
            "option name Decisecond Threshold type spin default {} current {}",
            defaults.decisecond_threshold_secs, settings.decisecond_threshold_secs
        ),
    ]
}

/// Parse a number, falling back to `fallback` when the value is unusable.
fn number_or(name: &str, value: Option<&str>, fallback: u64) -> u64 {
    match value.map(|v| v.trim().parse::<u64>()) {
        Some(Ok(n)) => n,
        _ => {
            warn!("option '{name}': invalid value {value:?}, using {fallback}");
            fallback
        }
    }
}

fn flag_or(value: Option<&str>, fallback: bool) -> bool {
    value.map_or(fallback, |v| {
        matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1")
    })
}

fn unit_or(name: &str, value: Option<&str>, fallback: TimeUnit) -> TimeUnit {
    value.and_then(|v| v.parse().ok()).unwrap_or_else(|| {
        warn!("option '{name}': invalid unit {value:?}, using {fallback}");
        fallback
    })
}

/// Update `settings` from one option. Unusable values fall back to the default.
pub fn apply_setoption(settings: &mut Settings, name: &str, value: Option<&str>) -> OptionUpdate {
    let defaults = Settings::default();
    let normalized = name.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "initial time" => {
            settings.initial_time = number_or(name, value, defaults.initial_time);
        }
        "initial time 2" => {
            settings.initial_time_2 = number_or(name, value, defaults.initial_time_2);
        }
        "different initial time" => {
            settings.different_initial_time = flag_or(value, defaults.different_initial_time);
        }
        "initial time unit" => {
            settings.initial_unit = unit_or(name, value, defaults.initial_unit);
        }
        "delay" => {
            settings.delay_mode = value.and_then(|v| v.parse().ok()).unwrap_or_else(|| {
                warn!("option '{name}': invalid mode {value:?}, using {}", DelayMode::None);
                defaults.delay_mode
            });
        }
        "delay time" => {
            settings.delay_time = number_or(name, value, defaults.delay_time);
        }
        "delay time unit" => {
            settings.delay_unit = unit_or(name, value, defaults.delay_unit);
        }
        "show deciseconds" => {
            settings.show_deciseconds = flag_or(value, defaults.show_deciseconds);
        }
        "decisecond threshold" => {
            settings.decisecond_threshold_secs =
                number_or(name, value, defaults.decisecond_threshold_secs);
        }
        _ => return OptionUpdate::UnknownName,
    }
    OptionUpdate::Applied
}

#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.is_empty() || parts[0] != "setoption" {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut in_value = false;

    for part in parts.iter().skip(1) {
        match *part {
            "name" if !in_value && name_parts.is_empty() => {}
            "value" if !in_value => in_value = true,
            _ if in_value => value_parts.push(part),
            _ => name_parts.push(part),
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
