//! CLI command implementations

pub mod matches;
pub mod play;
pub mod solve;

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

/// Parse an `x`/`o` flag value, naming the flag in the error.
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    value
        .parse::<Player>()
        .map_err(|_| anyhow!("Invalid value '{value}' for {flag} (expected 'x' or 'o')"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_player_tokens() {
        assert_eq!(parse_player_token("x", "--human").unwrap(), Player::X);
        assert_eq!(parse_player_token(" O ", "--human").unwrap(), Player::O);
        let err = parse_player_token("z", "--human").unwrap_err();
        assert!(err.to_string().contains("--human"));
    }
}
