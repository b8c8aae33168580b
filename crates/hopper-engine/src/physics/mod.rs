pub mod aabb;
pub mod body;
pub mod config;
pub mod world;

pub use aabb::Rect;
pub use body::{BodyKind, Pickup, Player, PlayerState, StaticBody};
pub use config::{Brake, ConfigError, Features, PhysicsConfig, Variant};
pub use world::{RespawnCause, World, WorldEvent};
