use crate::input::queue::InputEvent;

/// DOM key codes for the arrow keys.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Logical direction shared by the keyboard and the on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            KEY_LEFT => Some(Direction::Left),
            KEY_UP => Some(Direction::Up),
            KEY_RIGHT => Some(Direction::Right),
            KEY_DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    /// Control region index as sent by the page: 0 left, 1 right, 2 up, 3 down.
    pub fn from_control(control: u32) -> Option<Self> {
        Self::ALL.get(control as usize).copied()
    }

    fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

/// Pressed flags for the four directions.
/// Written by input handlers, read-only to the physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pressed: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeated presses of an already held direction are no-ops.
    pub fn set_pressed(&mut self, direction: Direction, pressed: bool) {
        self.pressed[direction.index()] = pressed;
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.pressed[direction.index()]
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; 4];
    }

    /// Fold a raw input event into the pressed flags.
    /// Returns false for events that carry no direction (unknown keys, custom events).
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        let (direction, pressed) = match *event {
            InputEvent::KeyDown { key_code } => (Direction::from_key_code(key_code), true),
            InputEvent::KeyUp { key_code } => (Direction::from_key_code(key_code), false),
            InputEvent::ControlDown { control } => (Direction::from_control(control), true),
            InputEvent::ControlUp { control } => (Direction::from_control(control), false),
            InputEvent::Custom { .. } => return false,
        };
        match direction {
            Some(direction) => {
                self.set_pressed(direction, pressed);
                true
            }
            None => {
                log::debug!("ignoring unmapped input {:?}", event);
                false
            }
        }
    }
}
