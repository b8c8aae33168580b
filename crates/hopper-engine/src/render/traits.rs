//! Draw primitives the engine renders through.
//!
//! The engine never owns a drawing surface. Each frame it calls into a
//! [`RenderAdapter`]: the browser bridge implements it on top of a Canvas 2D
//! context, tests use the recording [`DrawList`](super::draw_list::DrawList).

use glam::Vec2;

/// Handle for an image the host has loaded (e.g., the chosen hero sprite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageId(pub u32);

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS color string, as accepted by `fillStyle`.
    pub fn to_css(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

/// Placement of the world on the drawing surface: world coordinates are
/// multiplied by `scale`, then shifted by `offset` (surface pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub scale: f32,
    pub offset: Vec2,
}

impl Default for View {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl View {
    /// Largest uniform scale that shows the whole world, centered on the
    /// surface. Degenerate sizes give the identity view.
    pub fn fit(surface: Vec2, world: Vec2) -> Self {
        let usable = |v: Vec2| v.is_finite() && v.min_element() > 0.0;
        if !usable(surface) || !usable(world) {
            return Self::default();
        }
        let scale = (surface.x / world.x).min(surface.y / world.y);
        Self {
            scale,
            offset: (surface - world * scale) * 0.5,
        }
    }
}

/// Drawing surface contract.
///
/// # Example Implementation
///
/// ```ignore
/// struct SvgWriter { out: String }
///
/// impl RenderAdapter for SvgWriter {
///     fn backend(&self) -> &'static str { "svg" }
///     fn clear(&mut self) { self.out.clear(); }
///     fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
///         // <rect .../>
///     }
///     fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32) {
///         // <image .../>
///     }
/// }
/// ```
pub trait RenderAdapter {
    /// Backend identifier (e.g., "canvas2d", "recording").
    fn backend(&self) -> &'static str;

    /// Wipe the whole surface before a new frame.
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle. `x, y` is the top-left corner.
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Draw a loaded image stretched into the given rectangle.
    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32);

    /// The surface was resized. Draw calls keep using world coordinates;
    /// the adapter maps them through `view`.
    fn set_view(&mut self, _view: View) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_use_hex() {
        assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
    }

    #[test]
    fn wide_surface_is_pillarboxed() {
        let view = View::fit(Vec2::new(1280.0, 850.0), Vec2::new(800.0, 600.0));
        assert!((view.scale - 850.0 / 600.0).abs() < 1e-6);
        assert!(view.offset.y.abs() < 1e-3);
        assert!((view.offset.x - (1280.0 - 800.0 * view.scale) / 2.0).abs() < 1e-3);
    }

    #[test]
    fn tall_surface_is_letterboxed() {
        let view = View::fit(Vec2::new(400.0, 900.0), Vec2::new(800.0, 600.0));
        assert_eq!(view.scale, 0.5);
        assert_eq!(view.offset, Vec2::new(0.0, 300.0));
    }

    #[test]
    fn degenerate_surface_keeps_identity() {
        assert_eq!(View::fit(Vec2::new(0.0, 600.0), Vec2::new(800.0, 600.0)), View::default());
        assert_eq!(View::fit(Vec2::new(f32::NAN, 1.0), Vec2::new(800.0, 600.0)), View::default());
    }

    #[test]
    fn translucent_colors_use_rgba() {
        let c = Color { r: 10, g: 20, b: 30, a: 0 };
        assert_eq!(c.to_css(), "rgba(10, 20, 30, 0.000)");
    }
}
