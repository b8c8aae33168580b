/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A keyboard key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// A keyboard key was released.
    KeyUp { key_code: u32 },
    /// An on-screen control region was touched or clicked.
    /// `control` is 0 = left, 1 = right, 2 = up, 3 = down.
    ControlDown { control: u32 },
    /// The touch/click on a control region ended.
    ControlUp { control: u32 },
    /// A custom event from the UI layer (start, restart, next level, ...).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Custom event kinds sent by the host page.
pub mod custom {
    /// The hero image finished loading. `a` = image handle.
    pub const START: u32 = 1;
    /// The hero image failed to load. `a` = image handle.
    pub const ASSET_FAILED: u32 = 2;
    /// Reload the current level.
    pub const RESTART: u32 = 3;
    /// Advance to the next level once the key is collected.
    pub const NEXT_LEVEL: u32 = 4;
    /// Go back to the hero selection screen.
    pub const CHANGE_HERO: u32 = 5;
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
