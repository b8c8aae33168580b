use hopper_engine::{Level, LevelError, PlatformerGame, Variant};

/// Levels in play order.
const LEVELS: &[&str] = &[
    include_str!("../levels/01_first_steps.json"),
    include_str!("../levels/02_spike_run.json"),
    include_str!("../levels/03_tower.json"),
];

pub fn load_levels() -> Result<Vec<Level>, LevelError> {
    LEVELS.iter().map(|json| Level::from_json(json)).collect()
}

/// The full game: hero selection, platforms, spikes and a key per level.
pub fn build_game() -> Result<PlatformerGame, LevelError> {
    let physics = Variant::KeyHunt.preset();
    physics.validate()?;
    PlatformerGame::new(physics, load_levels()?)
}
