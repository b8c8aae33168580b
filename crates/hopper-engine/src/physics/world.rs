use glam::Vec2;

use crate::input::state::{Direction, InputState};
use crate::level::data::{Level, LevelError};
use crate::physics::aabb::Rect;
use crate::physics::body::{BodyKind, Pickup, Player, PlayerState, StaticBody};
use crate::physics::config::{Brake, PhysicsConfig};

/// Why the player was put back at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnCause {
    Obstacle,
    FellOut,
    Restart,
}

/// Something that happened during a step, reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    Jumped,
    /// Airborne → Grounded transition.
    Landed,
    Respawned(RespawnCause),
    /// The key was picked up. Fires once per level run.
    KeyCollected,
}

/// The simulation for one level: the player, the static geometry and the key.
///
/// One call to [`World::step`] advances exactly one tick. There is no delta
/// time; every constant in [`PhysicsConfig`] is expressed per tick.
#[derive(Debug, Clone)]
pub struct World {
    config: PhysicsConfig,
    player: Player,
    bodies: Vec<StaticBody>,
    pickup: Option<Pickup>,
    spawn: Vec2,
    bounds: Vec2,
    implicit_ground: bool,
    /// `up` as seen on the previous step, for press-edge jump detection.
    up_was_pressed: bool,
    tick: u64,
}

impl World {
    /// Build a world for `level` inside a `bounds.x` × `bounds.y` field.
    pub fn new(level: &Level, config: PhysicsConfig, bounds: Vec2) -> Result<Self, LevelError> {
        config.validate()?;
        check_bounds(bounds)?;

        let size = Vec2::new(config.player_width, config.player_height);
        let player = Player::new(level.spawn, size);

        let bodies = level
            .bodies
            .iter()
            .filter(|b| match b.kind {
                BodyKind::Platform => config.features.platforms,
                BodyKind::Obstacle => config.features.obstacles,
            })
            .copied()
            .collect();
        let pickup = level
            .key
            .filter(|_| config.features.pickup)
            .map(Pickup::new);

        // Without platforms there is nothing to stand on but the world floor.
        let implicit_ground = level.implicit_ground || !config.features.platforms;

        let mut world = Self {
            config,
            player,
            bodies,
            pickup,
            spawn: level.spawn,
            bounds,
            implicit_ground,
            up_was_pressed: false,
            tick: 0,
        };
        world.place_at_spawn();
        Ok(world)
    }

    /// Advance one tick and return what happened.
    pub fn step(&mut self, input: &InputState) -> Vec<WorldEvent> {
        let mut events = Vec::new();
        self.step_into(input, &mut events);
        events
    }

    /// Advance one tick, appending events to `events`.
    pub fn step_into(&mut self, input: &InputState, events: &mut Vec<WorldEvent>) {
        self.tick += 1;

        let up = input.is_pressed(Direction::Up);
        if up && !self.up_was_pressed && self.jump() {
            events.push(WorldEvent::Jumped);
        }
        self.up_was_pressed = up;

        let started_grounded = self.player.is_grounded();
        let prev_bottom = self.player.bottom();

        // Integrate with last tick's velocity.
        self.player.pos += self.player.vel;

        self.apply_gravity();
        self.apply_horizontal_control(input);
        self.clamp_to_field();

        if self.config.features.platforms {
            self.resolve_platform_landing(prev_bottom);
        }

        if !started_grounded && self.player.is_grounded() {
            events.push(WorldEvent::Landed);
        }

        if self.config.features.obstacles && self.touches_obstacle() {
            log::debug!("tick {}: hit obstacle at {:?}", self.tick, self.player.pos);
            self.respawn(RespawnCause::Obstacle, events);
            return;
        }

        if !self.implicit_ground && self.player.pos.y > self.bounds.y {
            log::debug!("tick {}: fell out of the world", self.tick);
            self.respawn(RespawnCause::FellOut, events);
            return;
        }

        let player_rect = self.player.rect();
        if let Some(pickup) = self.pickup.as_mut() {
            if !pickup.collected && pickup.rect.overlaps(&player_rect) {
                pickup.collected = true;
                events.push(WorldEvent::KeyCollected);
            }
        }
    }

    /// Jump command. Accepted only while grounded or with air jumps left.
    /// Returns false, leaving the velocity untouched, when refused.
    pub fn jump(&mut self) -> bool {
        let player = &mut self.player;
        match player.state {
            PlayerState::Grounded => {}
            PlayerState::Airborne if player.air_jumps_left > 0 => {
                player.air_jumps_left -= 1;
            }
            PlayerState::Airborne => return false,
        }
        player.vel.y = -self.config.jump_force;
        player.state = PlayerState::Airborne;
        true
    }

    /// Reset the player to spawn and put the key back.
    pub fn restart(&mut self) {
        self.place_at_spawn();
        if let Some(pickup) = self.pickup.as_mut() {
            pickup.collected = false;
        }
        self.up_was_pressed = false;
    }

    fn apply_gravity(&mut self) {
        let ground_y = self.ground_y();
        let player = &mut self.player;
        match ground_y {
            Some(ground) if player.bottom() >= ground => {
                player.land_on(ground, self.config.air_jumps);
            }
            _ => {
                player.state = PlayerState::Airborne;
                player.vel.y = (player.vel.y + self.config.gravity).min(self.config.max_fall_speed);
            }
        }
    }

    fn apply_horizontal_control(&mut self, input: &InputState) {
        let vel = &mut self.player.vel;
        if input.is_pressed(Direction::Right) {
            vel.x = self.config.move_speed;
        } else if input.is_pressed(Direction::Left) {
            vel.x = -self.config.move_speed;
        } else {
            match self.config.brake {
                Brake::Instant => vel.x = 0.0,
                Brake::Damped { factor, epsilon } => {
                    vel.x *= factor;
                    if vel.x.abs() < epsilon {
                        vel.x = 0.0;
                    }
                }
            }
        }
    }

    fn clamp_to_field(&mut self) {
        let player = &mut self.player;
        let max_x = (self.bounds.x - player.size.x).max(0.0);
        if player.pos.x < 0.0 {
            player.pos.x = 0.0;
            player.vel.x = player.vel.x.max(0.0);
        } else if player.pos.x > max_x {
            player.pos.x = max_x;
            player.vel.x = player.vel.x.min(0.0);
        }
    }

    /// Land on the highest platform whose top the player's bottom edge crossed
    /// this tick. Only downward crossings count, so the player can jump up
    /// through platforms and walk past their sides.
    fn resolve_platform_landing(&mut self, prev_bottom: f32) {
        let player_rect = self.player.rect();
        let bottom = player_rect.bottom();
        let moving_down = self.player.vel.y > 0.0 || bottom > prev_bottom;
        if !moving_down {
            return;
        }

        let tolerance = self.config.landing_tolerance;
        let surface = self
            .bodies
            .iter()
            .filter(|b| b.kind == BodyKind::Platform)
            .map(|b| &b.rect)
            .filter(|r| {
                player_rect.overlaps_x(r) && prev_bottom <= r.top() + tolerance && bottom >= r.top()
            })
            .map(|r| r.top())
            .reduce(f32::min);

        if let Some(top) = surface {
            self.player.land_on(top, self.config.air_jumps);
        }
    }

    fn touches_obstacle(&self) -> bool {
        let player_rect = self.player.rect();
        self.bodies
            .iter()
            .any(|b| b.kind == BodyKind::Obstacle && b.rect.overlaps(&player_rect))
    }

    fn respawn(&mut self, cause: RespawnCause, events: &mut Vec<WorldEvent>) {
        self.place_at_spawn();
        events.push(WorldEvent::Respawned(cause));
    }

    /// Reset the player to spawn. It starts Grounded only when the spawn point
    /// rests on the floor or on a platform top; otherwise it falls first.
    fn place_at_spawn(&mut self) {
        self.player.respawn(self.spawn, self.config.air_jumps);
        if !self.is_supported() {
            self.player.state = PlayerState::Airborne;
        }
    }

    /// Whether the player's bottom edge sits on the floor or a platform top.
    fn is_supported(&self) -> bool {
        let bottom = self.player.bottom();
        let tolerance = self.config.landing_tolerance;
        let on_floor = self
            .ground_y()
            .map_or(false, |ground| (bottom - ground).abs() <= tolerance);
        if on_floor {
            return true;
        }
        if !self.config.features.platforms {
            return false;
        }
        let player_rect = self.player.rect();
        self.bodies.iter().any(|b| {
            b.kind == BodyKind::Platform
                && player_rect.overlaps_x(&b.rect)
                && (bottom - b.rect.top()).abs() <= tolerance
        })
    }

    // -- Accessors --

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bodies(&self) -> &[StaticBody] {
        &self.bodies
    }

    pub fn pickup(&self) -> Option<&Pickup> {
        self.pickup.as_ref()
    }

    /// True once the key has been collected.
    pub fn is_complete(&self) -> bool {
        self.pickup.map_or(false, |p| p.collected)
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Y of the implicit floor, if the level has one.
    pub fn ground_y(&self) -> Option<f32> {
        self.implicit_ground.then_some(self.bounds.y)
    }

    /// Number of steps taken since construction.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The field as a rectangle anchored at the origin.
    pub fn field(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.bounds)
    }
}

fn check_bounds(bounds: Vec2) -> Result<(), LevelError> {
    if bounds.is_finite() && bounds.x > 0.0 && bounds.y > 0.0 {
        Ok(())
    } else {
        Err(LevelError::InvalidBounds {
            width: bounds.x,
            height: bounds.y,
        })
    }
}
