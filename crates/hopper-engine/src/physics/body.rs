use glam::Vec2;
use crate::physics::aabb::Rect;

/// Vertical movement state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    /// Standing on the ground or on a platform. Jumps are accepted.
    #[default]
    Grounded,
    /// Rising or falling.
    Airborne,
}

/// The player-controlled body. Owned and mutated only by the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub state: PlayerState,
    /// Air jumps left before the next landing.
    pub air_jumps_left: u32,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            state: PlayerState::Grounded,
            air_jumps_left: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn is_grounded(&self) -> bool {
        self.state == PlayerState::Grounded
    }

    /// Put the player back at `spawn`, motionless and grounded. The world
    /// demotes it to airborne when nothing supports the spawn point.
    pub fn respawn(&mut self, spawn: Vec2, air_jumps: u32) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.state = PlayerState::Grounded;
        self.air_jumps_left = air_jumps;
    }

    /// Stop vertical motion and stand with the bottom edge on `surface_y`.
    pub fn land_on(&mut self, surface_y: f32, air_jumps: u32) {
        self.pos.y = surface_y - self.size.y;
        self.vel.y = 0.0;
        self.state = PlayerState::Grounded;
        self.air_jumps_left = air_jumps;
    }
}

/// What a static body does to the player on contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Solid from above only. The player can jump up through it.
    Platform,
    /// Any overlap sends the player back to spawn.
    Obstacle,
}

/// Level geometry that never moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticBody {
    pub kind: BodyKind,
    pub rect: Rect,
}

impl StaticBody {
    pub fn platform(rect: Rect) -> Self {
        Self { kind: BodyKind::Platform, rect }
    }

    pub fn obstacle(rect: Rect) -> Self {
        Self { kind: BodyKind::Obstacle, rect }
    }
}

/// The key. Stays in the world until collected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub rect: Rect,
    pub collected: bool,
}

impl Pickup {
    pub fn new(rect: Rect) -> Self {
        Self { rect, collected: false }
    }
}
