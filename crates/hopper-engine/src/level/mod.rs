pub mod data;

pub use data::{Level, LevelData, LevelError, PointDesc, RectDesc};
