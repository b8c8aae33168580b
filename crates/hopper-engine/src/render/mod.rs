pub mod draw_list;
pub mod traits;
pub mod world;

pub use draw_list::{DrawCommand, DrawList};
pub use traits::{Color, ImageId, RenderAdapter, View};
pub use world::{draw_world, Palette};
