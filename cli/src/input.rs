use twenty48_core::MoveIntent;

/// Maps a single key to an intent, anything unmapped becomes `Unknown`.
pub fn decode_key(key: char) -> MoveIntent {
    match key.to_ascii_lowercase() {
        'w' => MoveIntent::Up,
        'a' => MoveIntent::Left,
        's' => MoveIntent::Down,
        'd' => MoveIntent::Right,
        'r' => MoveIntent::Restart,
        'q' => MoveIntent::Quit,
        _ => MoveIntent::Unknown,
    }
}

/// Decodes the first non-blank character of an input line.
pub fn decode_line(line: &str) -> MoveIntent {
    line.trim()
        .chars()
        .next()
        .map_or(MoveIntent::Unknown, decode_key)
}
