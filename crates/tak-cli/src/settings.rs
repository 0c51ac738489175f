//! Game settings from the environment.
//!
//! - `TAK_CONFIG`: path to a JSON `GameConfig`
//! - `TAK_BOARD_SIZE`: board dimension, overrides the file
//! - `TAK_BOT`: `first` or `second`, the color a random bot plays
//! - `TAK_SEED`: seed for the bot
//! - `NO_COLOR`: disable colored pieces

use anyhow::{bail, Context};
use std::collections::HashMap;
use tak_core::{Bot, Color, GameConfig};

/// Everything the binary needs to start a game
#[derive(Debug)]
pub struct Settings {
    pub config: GameConfig,
    pub bot: Option<Bot>,
    pub colorize: bool,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars, |path| {
            std::fs::read_to_string(path).with_context(|| format!("failed to read config file {}", path))
        })
    }

    /// Build settings from a variable map; `read_file` loads `TAK_CONFIG`
    pub fn from_vars<F>(vars: &HashMap<String, String>, read_file: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> anyhow::Result<String>,
    {
        let mut config = match vars.get("TAK_CONFIG") {
            Some(path) => {
                let json = read_file(path)?;
                GameConfig::from_json(&json).with_context(|| format!("invalid config in {}", path))?
            }
            None => GameConfig::default(),
        };

        if let Some(size) = vars.get("TAK_BOARD_SIZE") {
            config.board_size = size
                .parse()
                .with_context(|| format!("TAK_BOARD_SIZE is not a number: {:?}", size))?;
        }
        config.validate()?;

        let seed = vars
            .get("TAK_SEED")
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("TAK_SEED is not a number")?;

        let bot = match vars.get("TAK_BOT").map(|s| s.to_ascii_lowercase()) {
            None => None,
            Some(seat) => {
                let color = match seat.as_str() {
                    "first" => Color::First,
                    "second" => Color::Second,
                    other => bail!("TAK_BOT must be 'first' or 'second', got {:?}", other),
                };
                Some(match seed {
                    Some(seed) => Bot::with_seed(color, seed),
                    None => Bot::new(color),
                })
            }
        };

        Ok(Self {
            config,
            bot,
            colorize: !vars.contains_key("NO_COLOR"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tak_core::TurnOrder;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_file(path: &str) -> anyhow::Result<String> {
        bail!("unexpected read of {}", path)
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_vars(&HashMap::new(), no_file).unwrap();
        assert_eq!(settings.config, GameConfig::default());
        assert!(settings.bot.is_none());
        assert!(settings.colorize);
    }

    #[test]
    fn test_board_size_override() {
        let settings =
            Settings::from_vars(&vars(&[("TAK_BOARD_SIZE", "6"), ("NO_COLOR", "1")]), no_file)
                .unwrap();
        assert_eq!(settings.config.board_size, 6);
        assert!(!settings.colorize);

        assert!(Settings::from_vars(&vars(&[("TAK_BOARD_SIZE", "12")]), no_file).is_err());
        assert!(Settings::from_vars(&vars(&[("TAK_BOARD_SIZE", "big")]), no_file).is_err());
    }

    #[test]
    fn test_config_file() {
        let settings = Settings::from_vars(
            &vars(&[("TAK_CONFIG", "game.json"), ("TAK_BOARD_SIZE", "4")]),
            |_| Ok(r#"{"board_size": 7, "turn_order": "RepeatAfterOpening"}"#.to_string()),
        )
        .unwrap();
        assert_eq!(settings.config.board_size, 4);
        assert_eq!(settings.config.turn_order, TurnOrder::RepeatAfterOpening);
    }

    #[test]
    fn test_bot_seat() {
        let settings = Settings::from_vars(
            &vars(&[("TAK_BOT", "Second"), ("TAK_SEED", "9")]),
            no_file,
        )
        .unwrap();
        assert_eq!(settings.bot.map(|b| b.color), Some(Color::Second));

        assert!(Settings::from_vars(&vars(&[("TAK_BOT", "third")]), no_file).is_err());
    }
}
