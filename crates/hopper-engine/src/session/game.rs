use glam::Vec2;

use crate::api::game::{EngineContext, Game, GameConfig, RenderContext};
use crate::api::types::{event_kind, GameEvent};
use crate::input::queue::{custom, InputEvent, InputQueue};
use crate::input::state::InputState;
use crate::level::data::{Level, LevelError};
use crate::physics::config::PhysicsConfig;
use crate::physics::world::{RespawnCause, World, WorldEvent};
use crate::render::traits::ImageId;
use crate::render::world::{draw_world, Palette};

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Waiting for the player to pick a hero.
    SelectPlayer,
    /// The world is running.
    Playing,
    /// The key was collected; the world is frozen until restart or next level.
    LevelComplete,
    /// The hero image failed to load. The world does not run.
    AssetLoadFailed,
}

impl Screen {
    /// Numeric code sent to the page with `SCREEN_CHANGED`.
    pub fn code(self) -> f32 {
        match self {
            Screen::SelectPlayer => 0.0,
            Screen::Playing => 1.0,
            Screen::LevelComplete => 2.0,
            Screen::AssetLoadFailed => 3.0,
        }
    }
}

fn respawn_code(cause: RespawnCause) -> f32 {
    match cause {
        RespawnCause::Obstacle => 0.0,
        RespawnCause::FellOut => 1.0,
        RespawnCause::Restart => 2.0,
    }
}

/// The platformer session: levels, the running world, input flags and the
/// current screen. Input handlers only ever reach it through the input queue.
pub struct PlatformerGame {
    physics: PhysicsConfig,
    game_config: GameConfig,
    palette: Palette,
    levels: Vec<Level>,
    level_index: usize,
    world: World,
    input: InputState,
    screen: Screen,
    hero: Option<ImageId>,
    step_events: Vec<WorldEvent>,
}

impl PlatformerGame {
    /// Create a session that starts on the first of `levels`.
    pub fn new(physics: PhysicsConfig, levels: Vec<Level>) -> Result<Self, LevelError> {
        Self::with_game_config(physics, levels, GameConfig::default())
    }

    pub fn with_game_config(
        physics: PhysicsConfig,
        levels: Vec<Level>,
        game_config: GameConfig,
    ) -> Result<Self, LevelError> {
        let first = levels.first().ok_or(LevelError::NoLevels)?;
        let bounds = Vec2::new(game_config.world_width, game_config.world_height);
        let world = World::new(first, physics, bounds)?;
        let screen = if physics.features.player_selection {
            Screen::SelectPlayer
        } else {
            Screen::Playing
        };
        Ok(Self {
            physics,
            game_config,
            palette: Palette::default(),
            levels,
            level_index: 0,
            world,
            input: InputState::new(),
            screen,
            hero: None,
            step_events: Vec::with_capacity(8),
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn hero(&self) -> Option<ImageId> {
        self.hero
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn selection_enabled(&self) -> bool {
        self.physics.features.player_selection
    }

    fn set_screen(&mut self, ctx: &mut EngineContext, screen: Screen) {
        if self.screen == screen {
            return;
        }
        log::info!("screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        ctx.emit_event(GameEvent::new(event_kind::SCREEN_CHANGED, screen.code()));
    }

    fn load_level(&mut self, ctx: &mut EngineContext, index: usize) {
        let Some(level) = self.levels.get(index) else {
            log::warn!("no level #{}", index);
            return;
        };
        match World::new(level, self.physics, self.world.bounds()) {
            Ok(world) => {
                log::info!("level {} ({}) loaded", index, level.name);
                self.world = world;
                self.level_index = index;
                self.input.release_all();
                ctx.emit_event(GameEvent::new(event_kind::LEVEL_STARTED, index as f32));
            }
            Err(e) => log::error!("failed to load level {}: {}", index, e),
        }
    }

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32, a: f32) {
        match kind {
            custom::START => {
                self.hero = Some(ImageId(a as u32));
                if matches!(self.screen, Screen::SelectPlayer | Screen::AssetLoadFailed) {
                    self.set_screen(ctx, Screen::Playing);
                }
            }
            custom::ASSET_FAILED => {
                log::warn!("hero image {} failed to load", a);
                self.hero = None;
                ctx.emit_event(GameEvent::new(event_kind::ASSET_LOAD_FAILED, a));
                self.set_screen(ctx, Screen::AssetLoadFailed);
            }
            custom::RESTART => {
                if matches!(self.screen, Screen::Playing | Screen::LevelComplete) {
                    self.world.restart();
                    self.input.release_all();
                    ctx.emit_event(GameEvent::new(
                        event_kind::PLAYER_RESPAWNED,
                        respawn_code(RespawnCause::Restart),
                    ));
                    self.set_screen(ctx, Screen::Playing);
                }
            }
            custom::NEXT_LEVEL => {
                if self.screen != Screen::LevelComplete {
                    log::warn!("next level requested before the key was collected");
                } else if self.level_index + 1 < self.levels.len() {
                    self.load_level(ctx, self.level_index + 1);
                    self.set_screen(ctx, Screen::Playing);
                } else {
                    log::info!("last level complete");
                }
            }
            custom::CHANGE_HERO => {
                if self.physics.features.player_selection {
                    self.hero = None;
                    self.input.release_all();
                    self.set_screen(ctx, Screen::SelectPlayer);
                }
            }
            other => log::warn!("unknown custom event kind {}", other),
        }
    }

    fn report(&mut self, ctx: &mut EngineContext) {
        for event in std::mem::take(&mut self.step_events) {
            match event {
                WorldEvent::KeyCollected => {
                    log::info!("level {} complete", self.level_index);
                    ctx.emit_event(GameEvent::new(event_kind::LEVEL_COMPLETE, self.level_index as f32));
                    self.set_screen(ctx, Screen::LevelComplete);
                }
                WorldEvent::Respawned(cause) => {
                    ctx.emit_event(GameEvent::new(event_kind::PLAYER_RESPAWNED, respawn_code(cause)));
                }
                WorldEvent::Jumped | WorldEvent::Landed => {}
            }
        }
    }
}

impl Game for PlatformerGame {
    fn config(&self) -> GameConfig {
        self.game_config.clone()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        log::info!(
            "platformer: {} level(s), selection {}",
            self.levels.len(),
            if self.selection_enabled() { "on" } else { "off" }
        );
        ctx.emit_event(GameEvent::new(event_kind::SCREEN_CHANGED, self.screen.code()));
        ctx.emit_event(GameEvent::new(event_kind::LEVEL_STARTED, self.level_index as f32));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::Custom { kind, a, .. } = *event {
                self.handle_custom(ctx, kind, a);
            } else {
                self.input.apply(event);
            }
        }

        if self.screen != Screen::Playing {
            return;
        }

        self.step_events.clear();
        self.world.step_into(&self.input, &mut self.step_events);
        self.report(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        match self.screen {
            Screen::Playing | Screen::LevelComplete => {
                draw_world(&self.world, self.hero, &self.palette, ctx.out);
            }
            Screen::SelectPlayer | Screen::AssetLoadFailed => ctx.out.clear(),
        }
    }

    fn player_selection(&self) -> bool {
        self.selection_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::data::{LevelData, PointDesc, RectDesc};
    use crate::physics::config::{Features, Variant};
    use crate::render::draw_list::{DrawCommand, DrawList};

    fn key_level(name: &str) -> Level {
        LevelData {
            name: name.into(),
            spawn: PointDesc { x: 100.0, y: 550.0 },
            key: Some(RectDesc { x: 300.0, y: 560.0, w: 30.0, h: 30.0 }),
            ..LevelData::default()
        }
        .build()
        .unwrap()
    }

    fn custom(kind: u32, a: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b: 0.0, c: 0.0 }
    }

    fn queue(events: &[InputEvent]) -> InputQueue {
        let mut q = InputQueue::new();
        for e in events {
            q.push(*e);
        }
        q
    }

    fn kinds(ctx: &EngineContext) -> Vec<f32> {
        ctx.events.iter().map(|e| e.kind).collect()
    }

    fn started_game(levels: Vec<Level>) -> (PlatformerGame, EngineContext) {
        let mut game = PlatformerGame::new(Variant::KeyHunt.preset(), levels).unwrap();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        game.update(&mut ctx, &queue(&[custom(custom::START, 4.0)]));
        ctx.clear_frame_data();
        (game, ctx)
    }

    #[test]
    fn requires_at_least_one_level() {
        assert!(matches!(
            PlatformerGame::new(PhysicsConfig::default(), Vec::new()),
            Err(LevelError::NoLevels)
        ));
    }

    #[test]
    fn selection_screen_blocks_the_world() {
        let mut game = PlatformerGame::new(PhysicsConfig::default(), vec![key_level("a")]).unwrap();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        assert_eq!(game.screen(), Screen::SelectPlayer);

        game.update(&mut ctx, &InputQueue::new());
        assert_eq!(game.world().tick(), 0);

        game.update(&mut ctx, &queue(&[custom(custom::START, 4.0)]));
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.hero(), Some(ImageId(4)));
        assert_eq!(game.world().tick(), 1);
    }

    #[test]
    fn without_selection_the_game_starts_playing() {
        let game = PlatformerGame::new(Variant::Original.preset(), vec![key_level("a")]).unwrap();
        assert_eq!(game.screen(), Screen::Playing);
    }

    #[test]
    fn asset_failure_is_reported() {
        let mut game = PlatformerGame::new(PhysicsConfig::default(), vec![key_level("a")]).unwrap();
        let mut ctx = EngineContext::new();
        game.update(&mut ctx, &queue(&[custom(custom::ASSET_FAILED, 1.0)]));
        assert_eq!(game.screen(), Screen::AssetLoadFailed);
        assert_eq!(
            kinds(&ctx),
            vec![event_kind::ASSET_LOAD_FAILED, event_kind::SCREEN_CHANGED]
        );
        assert_eq!(game.world().tick(), 0);
    }

    #[test]
    fn keyboard_events_drive_the_hero() {
        let (mut game, mut ctx) = started_game(vec![key_level("a")]);
        game.update(&mut ctx, &queue(&[InputEvent::KeyDown { key_code: 39 }]));
        for _ in 0..10 {
            game.update(&mut ctx, &InputQueue::new());
        }
        assert!(game.world().player().pos.x > 100.0);

        game.update(&mut ctx, &queue(&[InputEvent::KeyUp { key_code: 39 }]));
        assert!(!game.input().is_pressed(crate::input::state::Direction::Right));
    }

    #[test]
    fn collecting_the_key_completes_the_level_once() {
        let (mut game, mut ctx) = started_game(vec![key_level("a"), key_level("b")]);
        game.update(&mut ctx, &queue(&[InputEvent::ControlDown { control: 1 }]));
        let mut completions = 0;
        for _ in 0..300 {
            game.update(&mut ctx, &InputQueue::new());
            completions += ctx
                .events
                .iter()
                .filter(|e| e.kind == event_kind::LEVEL_COMPLETE)
                .count();
            ctx.clear_frame_data();
        }
        assert_eq!(completions, 1);
        assert_eq!(game.screen(), Screen::LevelComplete);
        let frozen = game.world().tick();
        game.update(&mut ctx, &InputQueue::new());
        assert_eq!(game.world().tick(), frozen);
    }

    #[test]
    fn next_level_after_completion() {
        let (mut game, mut ctx) = started_game(vec![key_level("a"), key_level("b")]);

        // Ignored while the key is still out there.
        game.update(&mut ctx, &queue(&[custom(custom::NEXT_LEVEL, 0.0)]));
        assert_eq!(game.level_index(), 0);

        game.update(&mut ctx, &queue(&[InputEvent::ControlDown { control: 1 }]));
        while game.screen() == Screen::Playing {
            game.update(&mut ctx, &InputQueue::new());
        }
        ctx.clear_frame_data();

        game.update(&mut ctx, &queue(&[custom(custom::NEXT_LEVEL, 0.0)]));
        assert_eq!(game.level_index(), 1);
        assert_eq!(game.screen(), Screen::Playing);
        assert_eq!(game.world().player().pos, Vec2::new(100.0, 550.0));
        assert!(kinds(&ctx).contains(&event_kind::LEVEL_STARTED));
        // Held controls do not leak into the new level.
        assert_eq!(*game.input(), InputState::new());
    }

    #[test]
    fn restart_resets_hero_and_key() {
        let (mut game, mut ctx) = started_game(vec![key_level("a")]);
        game.update(&mut ctx, &queue(&[InputEvent::ControlDown { control: 1 }]));
        while game.screen() == Screen::Playing {
            game.update(&mut ctx, &InputQueue::new());
        }
        game.update(&mut ctx, &queue(&[custom(custom::RESTART, 0.0)]));
        assert_eq!(game.screen(), Screen::Playing);
        assert!(!game.world().is_complete());
        assert_eq!(game.world().player().pos.x, 100.0);
    }

    #[test]
    fn change_hero_returns_to_selection() {
        let (mut game, mut ctx) = started_game(vec![key_level("a")]);
        game.update(&mut ctx, &queue(&[custom(custom::CHANGE_HERO, 0.0)]));
        assert_eq!(game.screen(), Screen::SelectPlayer);
        assert_eq!(game.hero(), None);
    }

    #[test]
    fn obstacle_respawn_is_forwarded() {
        let level = LevelData {
            spawn: PointDesc { x: 100.0, y: 550.0 },
            obstacles: vec![RectDesc { x: 200.0, y: 570.0, w: 30.0, h: 30.0 }],
            ..LevelData::default()
        }
        .build()
        .unwrap();
        let (mut game, mut ctx) = started_game(vec![level]);
        game.update(&mut ctx, &queue(&[InputEvent::KeyDown { key_code: 39 }]));
        let mut respawns = 0;
        for _ in 0..60 {
            game.update(&mut ctx, &InputQueue::new());
            respawns += ctx
                .events
                .iter()
                .filter(|e| e.kind == event_kind::PLAYER_RESPAWNED && e.a == 0.0)
                .count();
            ctx.clear_frame_data();
        }
        assert!(respawns >= 1);
    }

    #[test]
    fn render_draws_hero_image_while_playing() {
        let (game, _ctx) = started_game(vec![key_level("a")]);
        let mut list = DrawList::new();
        game.render(&mut RenderContext { out: &mut list });
        assert!(matches!(
            list.commands().last(),
            Some(DrawCommand::Image { image: ImageId(4), .. })
        ));
    }

    #[test]
    fn render_only_clears_on_selection_screen() {
        let game = PlatformerGame::new(PhysicsConfig::default(), vec![key_level("a")]).unwrap();
        let mut list = DrawList::new();
        game.render(&mut RenderContext { out: &mut list });
        assert_eq!(list.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn ground_only_features_skip_the_key() {
        let physics = PhysicsConfig {
            features: Features {
                pickup: false,
                ..Features::default()
            },
            ..PhysicsConfig::default()
        };
        let game = PlatformerGame::new(physics, vec![key_level("a")]).unwrap();
        assert!(game.world().pickup().is_none());
    }
}
