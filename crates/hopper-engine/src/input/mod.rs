pub mod queue;
pub mod state;

pub use queue::{custom, InputEvent, InputQueue};
pub use state::{Direction, InputState};
