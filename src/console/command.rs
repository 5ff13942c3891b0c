use crate::types::Player;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// The player finished their move
    Tap(Player),
    /// Pause if running, otherwise ask to reset
    Pause,
    Resume(Player),
    Reset,
    SetOption(Vec<String>),
    Options,
    Show,
    Quit,
    Unknown(String),
}

pub fn parse_console_command(line: &str) -> Option<ConsoleCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let player_arg = || parts.get(1).and_then(|v| v.parse::<Player>().ok());
    let unknown = || ConsoleCommand::Unknown(trimmed.to_string());

    let cmd = match parts[0] {
        "tap" | "move" => player_arg().map_or_else(unknown, ConsoleCommand::Tap),
        "resume" => player_arg().map_or_else(unknown, ConsoleCommand::Resume),
        "pause" => ConsoleCommand::Pause,
        "reset" | "new" => ConsoleCommand::Reset,
        "setoption" => {
            ConsoleCommand::SetOption(parts.iter().map(|p| (*p).to_string()).collect())
        }
        "options" => ConsoleCommand::Options,
        "show" => ConsoleCommand::Show,
        "quit" => ConsoleCommand::Quit,
        _ => unknown(),
    };

    Some(cmd)
}
