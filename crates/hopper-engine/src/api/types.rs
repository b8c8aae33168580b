use bytemuck::{Pod, Zeroable};

/// A game event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
/// Laid out as 4 consecutive f32 so the page can read the buffer directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32) -> Self {
        Self { kind, a, b: 0.0, c: 0.0 }
    }
}

/// Event kinds written into [`GameEvent::kind`].
pub mod event_kind {
    /// The key was collected. `a` = level index.
    pub const LEVEL_COMPLETE: f32 = 1.0;
    /// The hero went back to spawn. `a` = cause (0 obstacle, 1 fell out, 2 restart).
    pub const PLAYER_RESPAWNED: f32 = 2.0;
    /// The hero image could not be loaded. `a` = image handle.
    pub const ASSET_LOAD_FAILED: f32 = 3.0;
    /// The session switched screens. `a` = screen code.
    pub const SCREEN_CHANGED: f32 = 4.0;
    /// A new level was loaded. `a` = level index.
    pub const LEVEL_STARTED: f32 = 5.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_event_is_four_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }

    #[test]
    fn events_cast_to_flat_floats() {
        let events = [
            GameEvent::new(event_kind::LEVEL_COMPLETE, 2.0),
            GameEvent::new(event_kind::PLAYER_RESPAWNED, 0.0),
        ];
        let floats: &[f32] = bytemuck::cast_slice(&events);
        assert_eq!(floats, &[1.0, 2.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0]);
    }
}
