use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::aabb::Rect;
use crate::physics::body::StaticBody;
use crate::physics::config::ConfigError;

/// Errors raised while turning level data into a playable world.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("{kind} #{index} has a non-positive size or non-finite coordinates: {rect:?}")]
    InvalidRect {
        kind: &'static str,
        index: usize,
        rect: RectDesc,
    },
    #[error("spawn point must be finite, got ({x}, {y})")]
    InvalidSpawn { x: f32, y: f32 },
    #[error("world bounds must be positive and finite, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
    #[error("level has no implicit ground and no platforms to stand on")]
    NoGround,
    #[error("no levels to play")]
    NoLevels,
    #[error("invalid physics config: {0}")]
    Config(#[from] ConfigError),
    #[error("level parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Plain `{x, y, w, h}` record as written in level files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDesc {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl From<RectDesc> for Rect {
    fn from(d: RectDesc) -> Self {
        Rect::new(d.x, d.y, d.w, d.h)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointDesc {
    pub x: f32,
    pub y: f32,
}

/// Declarative level layout, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelData {
    pub name: String,
    pub spawn: PointDesc,
    pub platforms: Vec<RectDesc>,
    pub obstacles: Vec<RectDesc>,
    /// The key that finishes the level.
    pub key: Option<RectDesc>,
    /// Treat the bottom edge of the world as solid ground.
    pub implicit_ground: bool,
}

impl Default for LevelData {
    fn default() -> Self {
        Self {
            name: String::from("untitled"),
            spawn: PointDesc { x: 100.0, y: 100.0 },
            platforms: Vec::new(),
            obstacles: Vec::new(),
            key: None,
            implicit_ground: true,
        }
    }
}

impl LevelData {
    /// Parse level data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate every rectangle and produce an immutable level.
    pub fn build(&self) -> Result<Level, LevelError> {
        let spawn = Vec2::new(self.spawn.x, self.spawn.y);
        if !spawn.is_finite() {
            return Err(LevelError::InvalidSpawn { x: spawn.x, y: spawn.y });
        }

        let mut bodies = Vec::with_capacity(self.platforms.len() + self.obstacles.len());
        for (index, desc) in self.platforms.iter().enumerate() {
            bodies.push(StaticBody::platform(checked_rect("platform", index, *desc)?));
        }
        for (index, desc) in self.obstacles.iter().enumerate() {
            bodies.push(StaticBody::obstacle(checked_rect("obstacle", index, *desc)?));
        }
        let key = match self.key {
            Some(desc) => Some(checked_rect("key", 0, desc)?),
            None => None,
        };

        if !self.implicit_ground && self.platforms.is_empty() {
            return Err(LevelError::NoGround);
        }

        Ok(Level {
            name: self.name.clone(),
            spawn,
            bodies,
            key,
            implicit_ground: self.implicit_ground,
        })
    }
}

fn checked_rect(kind: &'static str, index: usize, desc: RectDesc) -> Result<Rect, LevelError> {
    let rect = Rect::from(desc);
    if rect.is_well_formed() {
        Ok(rect)
    } else {
        Err(LevelError::InvalidRect { kind, index, rect: desc })
    }
}

/// A validated level. Geometry is immutable from here on.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub spawn: Vec2,
    pub bodies: Vec<StaticBody>,
    pub key: Option<Rect>,
    pub implicit_ground: bool,
}

impl Level {
    /// Parse and validate in one go.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        LevelData::from_json(json)?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::body::BodyKind;

    #[test]
    fn parse_full_level() {
        let json = r#"{
            "name": "first steps",
            "spawn": { "x": 40, "y": 300 },
            "platforms": [ { "x": 200, "y": 450, "w": 150, "h": 20 } ],
            "obstacles": [ { "x": 500, "y": 570, "w": 40, "h": 30 } ],
            "key": { "x": 700, "y": 380, "w": 30, "h": 30 }
        }"#;
        let level = Level::from_json(json).unwrap();
        assert_eq!(level.name, "first steps");
        assert_eq!(level.spawn, Vec2::new(40.0, 300.0));
        assert_eq!(level.bodies.len(), 2);
        assert_eq!(level.bodies[0].kind, BodyKind::Platform);
        assert_eq!(level.bodies[1].kind, BodyKind::Obstacle);
        assert_eq!(level.key, Some(Rect::new(700.0, 380.0, 30.0, 30.0)));
        assert!(level.implicit_ground);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let level = Level::from_json("{}").unwrap();
        assert_eq!(level.spawn, Vec2::new(100.0, 100.0));
        assert!(level.bodies.is_empty());
        assert!(level.key.is_none());
    }

    #[test]
    fn rejects_zero_width_platform() {
        let json = r#"{ "platforms": [
            { "x": 0, "y": 0, "w": 10, "h": 10 },
            { "x": 0, "y": 0, "w": 0, "h": 10 }
        ] }"#;
        let err = Level::from_json(json).unwrap_err();
        assert!(matches!(err, LevelError::InvalidRect { kind: "platform", index: 1, .. }));
    }

    #[test]
    fn rejects_negative_key() {
        let data = LevelData {
            key: Some(RectDesc { x: 0.0, y: 0.0, w: 5.0, h: -5.0 }),
            ..LevelData::default()
        };
        assert!(matches!(data.build(), Err(LevelError::InvalidRect { kind: "key", .. })));
    }

    #[test]
    fn rejects_non_finite_spawn() {
        let data = LevelData {
            spawn: PointDesc { x: f32::NAN, y: 0.0 },
            ..LevelData::default()
        };
        assert!(matches!(data.build(), Err(LevelError::InvalidSpawn { .. })));
    }

    #[test]
    fn no_ground_without_platforms_is_rejected() {
        let data = LevelData {
            implicit_ground: false,
            ..LevelData::default()
        };
        assert!(matches!(data.build(), Err(LevelError::NoGround)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Level::from_json("{ nope"), Err(LevelError::Parse(_))));
    }
}
