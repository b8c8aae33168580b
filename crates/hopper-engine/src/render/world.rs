use crate::physics::body::BodyKind;
use crate::physics::world::World;
use crate::render::traits::{Color, ImageId, RenderAdapter};

/// Fill colors for everything that has no image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub platform: Color,
    pub obstacle: Color,
    pub key: Color,
    /// Used for the hero when no sprite is loaded.
    pub player: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x87, 0xce, 0xeb),
            platform: Color::rgb(0x6b, 0x4f, 0x2a),
            obstacle: Color::rgb(0xc0, 0x39, 0x2b),
            key: Color::rgb(0xf1, 0xc4, 0x0f),
            player: Color::rgb(0x2c, 0x3e, 0x50),
        }
    }
}

/// Draw one frame of `world`: background, platforms and obstacles, the key
/// while uncollected, then the hero on top.
pub fn draw_world(world: &World, hero: Option<ImageId>, palette: &Palette, out: &mut dyn RenderAdapter) {
    out.clear();

    let field = world.field();
    out.draw_rect(0.0, 0.0, field.size.x, field.size.y, palette.background);

    for body in world.bodies() {
        let color = match body.kind {
            BodyKind::Platform => palette.platform,
            BodyKind::Obstacle => palette.obstacle,
        };
        let r = &body.rect;
        out.draw_rect(r.pos.x, r.pos.y, r.size.x, r.size.y, color);
    }

    if let Some(pickup) = world.pickup().filter(|p| !p.collected) {
        let r = &pickup.rect;
        out.draw_rect(r.pos.x, r.pos.y, r.size.x, r.size.y, palette.key);
    }

    let p = world.player();
    match hero {
        Some(image) => out.draw_image(image, p.pos.x, p.pos.y, p.size.x, p.size.y),
        None => out.draw_rect(p.pos.x, p.pos.y, p.size.x, p.size.y, palette.player),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use crate::input::state::InputState;
    use crate::level::data::{LevelData, PointDesc, RectDesc};
    use crate::physics::config::PhysicsConfig;
    use crate::render::draw_list::{DrawCommand, DrawList};

    fn keyed_world() -> World {
        let data = LevelData {
            spawn: PointDesc { x: 100.0, y: 550.0 },
            platforms: vec![RectDesc { x: 300.0, y: 450.0, w: 100.0, h: 20.0 }],
            obstacles: vec![RectDesc { x: 600.0, y: 570.0, w: 30.0, h: 30.0 }],
            key: Some(RectDesc { x: 110.0, y: 560.0, w: 20.0, h: 20.0 }),
            ..LevelData::default()
        };
        World::new(&data.build().unwrap(), PhysicsConfig::default(), Vec2::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn frame_draws_every_visible_element() {
        let world = keyed_world();
        let palette = Palette::default();
        let mut list = DrawList::new();
        draw_world(&world, Some(ImageId(7)), &palette, &mut list);

        let cmds = list.commands();
        assert_eq!(cmds.len(), 6);
        assert_eq!(cmds[0], DrawCommand::Clear);
        assert!(matches!(cmds[2], DrawCommand::Rect { color, .. } if color == palette.platform));
        assert!(matches!(cmds[3], DrawCommand::Rect { color, .. } if color == palette.obstacle));
        assert!(matches!(cmds[4], DrawCommand::Rect { color, .. } if color == palette.key));
        assert_eq!(
            cmds[5],
            DrawCommand::Image { image: ImageId(7), x: 100.0, y: 550.0, w: 50.0, h: 50.0 }
        );
    }

    #[test]
    fn collected_key_is_not_drawn() {
        let mut world = keyed_world();
        world.step(&InputState::new());
        assert!(world.is_complete());

        let mut list = DrawList::new();
        draw_world(&world, None, &Palette::default(), &mut list);
        assert_eq!(list.len(), 5);
        assert!(matches!(list.commands()[4], DrawCommand::Rect { w, h, .. } if w == 50.0 && h == 50.0));
    }
}
