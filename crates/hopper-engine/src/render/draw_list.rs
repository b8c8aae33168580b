use crate::render::traits::{Color, ImageId, RenderAdapter, View};

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Image { image: ImageId, x: f32, y: f32, w: f32, h: f32 },
}

/// A render adapter that records calls instead of drawing.
/// Used for headless runs and to inspect what a frame would draw.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    view: View,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
            view: View::default(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The view the last resize asked for.
    pub fn view(&self) -> View {
        self.view
    }
}

impl RenderAdapter for DrawList {
    fn backend(&self) -> &'static str {
        "recording"
    }

    /// Starts a new frame: previously recorded commands are dropped.
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn draw_image(&mut self, image: ImageId, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Image { image, x, y, w, h });
    }

    fn set_view(&mut self, view: View) {
        self.view = view;
    }
}
