use glam::Vec2;
use hopper_engine::{
    EngineContext, FrameStepper, Game, GameConfig, InputEvent, InputQueue, RenderAdapter,
    RenderContext, View,
};

/// Generic game runner that wires up the frame loop.
///
/// The page owns the scheduler: it calls [`GameRunner::tick`] from
/// `requestAnimationFrame`. Input callbacks only push events; the game sees
/// them at the start of the next update.
pub struct GameRunner<G: Game, R: RenderAdapter> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Handed to the extra updates of a multi-step frame so input is applied once.
    no_input: InputQueue,
    stepper: FrameStepper,
    config: GameConfig,
    surface: R,
    initialized: bool,
    /// Events emitted by `init` stay in the buffer until the page has read
    /// them after the first frame.
    keep_init_events: bool,
    paused: bool,
}

impl<G: Game, R: RenderAdapter> GameRunner<G, R> {
    pub fn new(game: G, surface: R) -> Self {
        let config = game.config();
        let stepper = FrameStepper::new(config.fixed_dt);
        let ctx = EngineContext::with_config(&config);

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            no_input: InputQueue::new(),
            stepper,
            config,
            surface,
            initialized: false,
            keep_init_events: false,
            paused: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.keep_init_events = true;
        log::info!(
            "runner ready on {} ({}x{})",
            self.surface.backend(),
            self.config.world_width,
            self.config.world_height
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the game as many times as the stepper says, then draw.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized || self.paused {
            return;
        }

        if self.keep_init_events {
            self.keep_init_events = false;
        } else {
            self.ctx.clear_frame_data();
        }

        let steps = self.stepper.steps(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.no_input };
            self.game.update(&mut self.ctx, input);
        }

        // A fixed-step frame may run zero updates; keep its input for the next one.
        if steps > 0 {
            self.input.drain();
        }

        let mut render_ctx = RenderContext {
            out: &mut self.surface,
        };
        self.game.render(&mut render_ctx);
    }

    /// The surface is now `width` x `height` pixels. The world keeps its
    /// configured size and is scaled to fit, centered.
    pub fn resize(&mut self, width: f32, height: f32) {
        let world = Vec2::new(self.config.world_width, self.config.world_height);
        let view = View::fit(Vec2::new(width, height), world);
        log::debug!("surface {}x{}, world scale {}", width, height, view.scale);
        self.surface.set_view(view);
    }

    /// Stop stepping. Frames keep arriving but do nothing.
    pub fn pause(&mut self) {
        if !self.paused {
            log::info!("paused");
            self.paused = true;
        }
    }

    /// Resume stepping. Input queued while paused is discarded.
    pub fn resume(&mut self) {
        if self.paused {
            log::info!("resumed");
            self.paused = false;
            self.input.drain();
            self.stepper = FrameStepper::new(self.config.fixed_dt);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    // ---- Accessors read by the page ----

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn player_selection(&self) -> bool {
        self.game.player_selection()
    }
}
