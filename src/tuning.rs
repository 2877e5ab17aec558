//! Data-driven game balance
//!
//! Difficulty presets plus optional file-backed overrides for playtesting.
//! The values a run was started with travel inside the game state, so a
//! serialized state replays with the balance it was played at.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "default" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Balance values for this preset
    pub fn tuning(&self) -> Tuning {
        match self {
            Difficulty::Easy => Tuning {
                ball_speed: 3.5,
                ball_speed_increment: 0.1,
                paddle_speed: 8.0,
                ..Tuning::default()
            },
            Difficulty::Normal => Tuning::default(),
            Difficulty::Hard => Tuning {
                ball_speed: 6.0,
                ball_speed_increment: 0.3,
                paddle_speed: 6.0,
                ..Tuning::default()
            },
        }
    }
}

/// Gameplay balance values carried by the game state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Ball launch speed
    pub ball_speed: f32,
    /// Speed gained per destroyed brick
    pub ball_speed_increment: f32,
    /// Hard cap on ball speed
    pub ball_max_speed: f32,
    /// Paddle movement per tick
    pub paddle_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_speed: BALL_START_SPEED,
            ball_speed_increment: BALL_SPEED_INCREMENT,
            ball_max_speed: BALL_MAX_SPEED,
            paddle_speed: PADDLE_SPEED,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults
    ///
    /// A missing or unreadable file is not an error; a present-but-invalid
    /// file is logged and ignored.
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(tuning) => {
                log::info!("loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("invalid tuning file {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write tuning to a JSON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("tuning saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_match_the_tuning_table() {
        let easy = Difficulty::Easy.tuning();
        assert_eq!(easy.ball_speed, 3.5);
        assert_eq!(easy.paddle_speed, 8.0);
        assert_eq!(easy.ball_speed_increment, 0.1);

        let normal = Difficulty::Normal.tuning();
        assert_eq!(normal.ball_speed, BALL_START_SPEED);
        assert_eq!(normal.paddle_speed, PADDLE_SPEED);

        let hard = Difficulty::Hard.tuning();
        assert_eq!(hard.ball_speed, 6.0);
        assert_eq!(hard.paddle_speed, 6.0);
        assert_eq!(hard.ball_speed_increment, 0.3);

        // The speed cap is shared by every preset
        assert_eq!(easy.ball_max_speed, hard.ball_max_speed);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("default"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let tuning = Tuning::load(Path::new("/nonexistent/tuning.json"));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = std::env::temp_dir().join("blockbreak-tuning-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tuning.json");

        let tuning = Difficulty::Hard.tuning();
        tuning.save(&path).unwrap();
        assert_eq!(Tuning::load(&path), tuning);

        std::fs::remove_file(&path).ok();
    }
}
