use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coin::COIN_SIZE;

/// World configuration, provided by the shell at startup.
/// Defaults reproduce the reference behavior: an 800x600 world with the floor
/// at the bottom edge, 30 coins and a single platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in game units.
    pub width: f32,
    /// World height in game units.
    pub height: f32,
    /// Y coordinate of the world floor the player rests on.
    pub floor_y: f32,
    /// Number of coins kept falling through the world.
    pub coin_count: u32,
    /// Static platform layout, in registration order. Order matters:
    /// collision resolution processes simultaneous hits first-registered
    /// first.
    pub platforms: Vec<PlatformDesc>,
    /// Seed for coin spawn positions. Equal seeds give equal runs.
    pub seed: u64,
}

/// One static platform: width, height and top-left position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlatformDesc {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            floor_y: 600.0,
            coin_count: 30,
            platforms: vec![PlatformDesc {
                width: 210.0,
                height: 70.0,
                x: 600.0,
                y: 800.0,
            }],
            seed: 42,
        }
    }
}

impl WorldConfig {
    /// Parse a configuration from a JSON string. Missing fields fall back to
    /// the defaults above.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject malformed configurations before the simulation starts.
    /// The simulation itself assumes well-formed numeric state and never
    /// re-checks any of this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.width.is_finite())
            || !(self.height > 0.0 && self.height.is_finite())
        {
            return Err(ConfigError::InvalidWorldSize {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.floor_y > 0.0 && self.floor_y.is_finite()) {
            return Err(ConfigError::InvalidFloor {
                floor_y: self.floor_y,
            });
        }
        for (index, p) in self.platforms.iter().enumerate() {
            if !(p.width > 0.0) || !(p.height > 0.0) {
                return Err(ConfigError::InvalidPlatform {
                    index,
                    width: p.width,
                    height: p.height,
                });
            }
        }
        // Coin spawn draws from [0, width - COIN_SIZE) x [0, height - COIN_SIZE).
        if self.coin_count > 0 && (self.width <= COIN_SIZE || self.height <= COIN_SIZE) {
            return Err(ConfigError::WorldTooSmallForCoins {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Fatal configuration errors, rejected at world construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidWorldSize { width: f32, height: f32 },
    InvalidFloor { floor_y: f32 },
    InvalidPlatform { index: usize, width: f32, height: f32 },
    WorldTooSmallForCoins { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::InvalidWorldSize { width, height } => {
                write!(f, "world size must be positive, got {width}x{height}")
            }
            ConfigError::InvalidFloor { floor_y } => {
                write!(f, "floor_y must be positive, got {floor_y}")
            }
            ConfigError::InvalidPlatform {
                index,
                width,
                height,
            } => write!(
                f,
                "platform {index} must have positive size, got {width}x{height}"
            ),
            ConfigError::WorldTooSmallForCoins { width, height } => write!(
                f,
                "world {width}x{height} is too small to spawn a {COIN_SIZE}-unit coin"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(WorldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_matches_reference_world() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.width, 800.0);
        assert_eq!(cfg.height, 600.0);
        assert_eq!(cfg.floor_y, 600.0);
        assert_eq!(cfg.coin_count, 30);
        assert_eq!(cfg.platforms.len(), 1);
    }

    #[test]
    fn negative_world_size_rejected() {
        let cfg = WorldConfig {
            width: -800.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidWorldSize { .. })
        ));
    }

    #[test]
    fn zero_size_platform_rejected() {
        let mut cfg = WorldConfig::default();
        cfg.platforms.push(PlatformDesc {
            width: 0.0,
            height: 70.0,
            x: 0.0,
            y: 0.0,
        });
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidPlatform {
                index: 1,
                width: 0.0,
                height: 70.0
            })
        );
    }

    #[test]
    fn tiny_world_with_coins_rejected() {
        let cfg = WorldConfig {
            width: 20.0,
            height: 20.0,
            floor_y: 20.0,
            platforms: vec![],
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::WorldTooSmallForCoins { .. })
        ));
    }

    #[test]
    fn tiny_world_without_coins_is_fine() {
        let cfg = WorldConfig {
            width: 20.0,
            height: 20.0,
            floor_y: 20.0,
            coin_count: 0,
            platforms: vec![],
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn parse_config_from_json() {
        let json = r#"{
            "width": 1024,
            "height": 768,
            "floor_y": 768,
            "coin_count": 10,
            "platforms": [
                { "width": 210, "height": 70, "x": 600, "y": 500 }
            ]
        }"#;
        let cfg = WorldConfig::from_json(json).unwrap();
        assert_eq!(cfg.width, 1024.0);
        assert_eq!(cfg.coin_count, 10);
        assert_eq!(cfg.platforms[0].x, 600.0);
        // Omitted field falls back to the default
        assert_eq!(cfg.seed, 42);
    }

    #[test]
    fn display_names_the_offending_platform() {
        let err = ConfigError::InvalidPlatform {
            index: 3,
            width: -1.0,
            height: 70.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("platform 3"), "got: {msg}");
    }
}
