use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected physics tuning.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("damping factor must lie in (0, 1), got {0}")]
    DampingFactor(f32),
    #[error("damping epsilon must be a positive finite number, got {0}")]
    DampingEpsilon(f32),
    #[error("landing tolerance must be finite and non-negative, got {0}")]
    LandingTolerance(f32),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What happens to horizontal velocity when no direction is held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Brake {
    /// Stop dead on release.
    Instant,
    /// Multiply by `factor` every tick, snap to zero below `epsilon`.
    Damped { factor: f32, epsilon: f32 },
}

impl Default for Brake {
    fn default() -> Self {
        Brake::Damped {
            factor: 0.9,
            epsilon: 0.01,
        }
    }
}

/// Which level elements take part in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub platforms: bool,
    pub obstacles: bool,
    pub pickup: bool,
    /// Show the hero selection screen when no hero is stored.
    pub player_selection: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            platforms: true,
            obstacles: true,
            pickup: true,
            player_selection: true,
        }
    }
}

/// Tuning constants for the player and the world.
/// All speeds are in world units per tick; there is no delta time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to `velocity.y` every airborne tick (Y-down, so positive).
    pub gravity: f32,
    /// Upper bound on downward velocity.
    pub max_fall_speed: f32,
    /// Horizontal speed while a direction is held.
    pub move_speed: f32,
    /// Magnitude of the upward velocity set by a jump.
    pub jump_force: f32,
    pub brake: Brake,
    /// Extra jumps allowed while airborne. Zero disables double jump.
    pub air_jumps: u32,
    /// How far above a platform top the previous bottom edge may sit and still count as landing.
    pub landing_tolerance: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub features: Features,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            max_fall_speed: 25.0,
            move_speed: 2.0,
            jump_force: 10.0,
            brake: Brake::default(),
            air_jumps: 0,
            landing_tolerance: 0.5,
            player_width: 50.0,
            player_height: 50.0,
            features: Features::default(),
        }
    }
}

impl PhysicsConfig {
    /// Parse and validate a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PhysicsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if let Brake::Damped { factor, epsilon } = self.brake {
            if !(factor > 0.0 && factor < 1.0) {
                return Err(ConfigError::DampingFactor(factor));
            }
            if !(epsilon.is_finite() && epsilon > 0.0) {
                return Err(ConfigError::DampingEpsilon(epsilon));
            }
        }
        if !(self.landing_tolerance.is_finite() && self.landing_tolerance >= 0.0) {
            return Err(ConfigError::LandingTolerance(self.landing_tolerance));
        }
        Ok(())
    }
}

/// The historical game variants, expressed as presets of one engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Fast walk, stops dead, ground only, fixed hero.
    Original,
    /// `Original` plus the hero selection screen.
    Selection,
    /// Slower walk with gradual braking.
    Damped,
    /// Adds floating platforms.
    Platforms,
    /// Adds spikes that send the hero back to spawn.
    Obstacles,
    /// Everything: platforms, spikes and a key that finishes the level.
    KeyHunt,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Original,
        Variant::Selection,
        Variant::Damped,
        Variant::Platforms,
        Variant::Obstacles,
        Variant::KeyHunt,
    ];

    pub fn preset(self) -> PhysicsConfig {
        let ground_only = Features {
            platforms: false,
            obstacles: false,
            pickup: false,
            player_selection: false,
        };
        let snappy = PhysicsConfig {
            move_speed: 5.0,
            brake: Brake::Instant,
            features: ground_only,
            ..PhysicsConfig::default()
        };
        let damped = PhysicsConfig {
            features: Features {
                player_selection: true,
                ..ground_only
            },
            ..PhysicsConfig::default()
        };
        match self {
            Variant::Original => snappy,
            Variant::Selection => PhysicsConfig {
                features: Features {
                    player_selection: true,
                    ..ground_only
                },
                ..snappy
            },
            Variant::Damped => damped,
            Variant::Platforms => PhysicsConfig {
                jump_force: 12.0,
                features: Features {
                    platforms: true,
                    ..damped.features
                },
                ..damped
            },
            Variant::Obstacles => PhysicsConfig {
                jump_force: 12.0,
                features: Features {
                    platforms: true,
                    obstacles: true,
                    ..damped.features
                },
                ..damped
            },
            Variant::KeyHunt => PhysicsConfig {
                gravity: 0.6,
                move_speed: 3.0,
                jump_force: 13.0,
                ..PhysicsConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_valid() {
        for variant in Variant::ALL {
            assert!(variant.preset().validate().is_ok(), "{:?}", variant);
        }
    }

    #[test]
    fn presets_differ_in_features() {
        assert!(!Variant::Original.preset().features.platforms);
        assert!(Variant::Platforms.preset().features.platforms);
        assert!(!Variant::Platforms.preset().features.obstacles);
        assert!(Variant::Obstacles.preset().features.obstacles);
        assert!(Variant::KeyHunt.preset().features.pickup);
        assert!(!Variant::Original.preset().features.player_selection);
        assert!(Variant::Selection.preset().features.player_selection);
    }

    #[test]
    fn rejects_non_positive_gravity() {
        let config = PhysicsConfig {
            gravity: 0.0,
            ..PhysicsConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "gravity", .. })
        ));
    }

    #[test]
    fn rejects_damping_outside_unit_interval() {
        let config = PhysicsConfig {
            brake: Brake::Damped { factor: 1.0, epsilon: 0.01 },
            ..PhysicsConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::DampingFactor(f)) if f == 1.0));
    }

    #[test]
    fn parse_partial_json_keeps_defaults() {
        let json = r#"{
            "gravity": 0.8,
            "brake": { "mode": "instant" },
            "features": { "obstacles": false }
        }"#;
        let config = PhysicsConfig::from_json(json).unwrap();
        assert_eq!(config.gravity, 0.8);
        assert_eq!(config.brake, Brake::Instant);
        assert_eq!(config.jump_force, 10.0);
        assert!(!config.features.obstacles);
        assert!(config.features.platforms);
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let err = PhysicsConfig::from_json(r#"{ "move_speed": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "move_speed", .. }));
    }
}
