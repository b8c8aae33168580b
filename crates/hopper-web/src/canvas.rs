//! 2D canvas backend for [`RenderAdapter`].

use std::collections::HashMap;

use hopper_engine::{Color, ImageId, RenderAdapter, View};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// Draws through a `CanvasRenderingContext2d`.
///
/// Images are registered once by the page and then addressed by [`ImageId`].
/// Draw calls take world coordinates; the current [`View`] is applied as the
/// context transform.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: HashMap<ImageId, HtmlImageElement>,
    next_image: u32,
    view: View,
}

impl CanvasRenderer {
    /// Look up `<canvas id=...>` and take its 2D context.
    pub fn from_canvas_id(id: &str) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{}", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", id)))?;
        Self::from_canvas(canvas)
    }

    pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("unexpected 2d context type"))?;

        Ok(Self {
            canvas,
            ctx,
            images: HashMap::new(),
            next_image: 1,
            view: View::default(),
        })
    }

    /// Keep `image` for later `draw_image` calls and return its id.
    pub fn register_image(&mut self, image: HtmlImageElement) -> ImageId {
        let id = ImageId(self.next_image);
        self.next_image += 1;
        self.images.insert(id, image);
        id
    }

    /// Resize the backing store. The page decides the CSS size.
    /// Resetting the size also resets the context transform.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.apply_view();
    }

    fn apply_view(&self) {
        let View { scale, offset } = self.view;
        let (s, x, y) = (scale as f64, offset.x as f64, offset.y as f64);
        if let Err(e) = self.ctx.set_transform(s, 0.0, 0.0, s, x, y) {
            log::warn!("set_transform failed: {:?}", e);
        }
    }
}

impl RenderAdapter for CanvasRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn clear(&mut self) {
        // Wipe the letterbox bars too, in surface pixels.
        if let Err(e) = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0) {
            log::warn!("set_transform failed: {:?}", e);
        }
        self.ctx
            .clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        self.apply_view();
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32) {
        let Some(img) = self.images.get(&image) else {
            log::warn!("draw_image: unknown image {:?}", image);
            return;
        };
        // Not decoded yet: skip this frame instead of throwing.
        if !img.complete() || img.natural_width() == 0 {
            return;
        }
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            img, x as f64, y as f64, w as f64, h as f64,
        ) {
            log::warn!("draw_image failed: {:?}", e);
        }
    }

    fn set_view(&mut self, view: View) {
        self.view = view;
        self.apply_view();
    }
}
