//! Difficulty presets
//!
//! A round is played at one of four presets picked from the menu. Every
//! entity scales its per-frame movement by the matching multiplier.

use std::fmt;

/// Speed and frequency multipliers for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    /// Scales the base barrel spawn interval (higher = fewer barrels)
    pub barrel_frequency: i32,
    pub barrel_speed: i32,
    pub ship_speed: i32,
    pub bomb_speed: i32,
    pub submarine_speed: i32,
}

impl Difficulty {
    pub const fn new(
        barrel_frequency: i32,
        barrel_speed: i32,
        ship_speed: i32,
        bomb_speed: i32,
        submarine_speed: i32,
    ) -> Self {
        Self {
            barrel_frequency,
            barrel_speed,
            ship_speed,
            bomb_speed,
            submarine_speed,
        }
    }

    /// Preset for menu choice 1-4, `None` for anything else
    pub fn preset(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::new(3, 1, 2, 2, 1)),
            2 => Some(Self::new(2, 1, 2, 2, 2)),
            3 => Some(Self::new(2, 2, 1, 1, 2)),
            4 => Some(Self::new(1, 2, 1, 1, 3)),
            _ => None,
        }
    }
}

impl Default for Difficulty {
    /// Menu-time placeholder; replaced when a preset is chosen
    fn default() -> Self {
        Self::new(1, 1, 1, 1, 1)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frequency={} barrel={} ship={} bomb={} submarine={}",
            self.barrel_frequency,
            self.barrel_speed,
            self.ship_speed,
            self.bomb_speed,
            self.submarine_speed
        )
    }
}
