use glam::Vec2;
use tracing::debug;
use winit::event::{MouseButton, VirtualKeyCode};

use crate::app::{Exercise, Flow};
use crate::draw::{self, Color, Immediate, Primitive};
use crate::input::Cursor;
use crate::settings::Settings;

/// Number keys pick how the clicked points get assembled.
pub fn primitive_for_key(key: VirtualKeyCode) -> Option<Primitive> {
    match key {
        VirtualKeyCode::Key1 => Some(Primitive::Points),
        VirtualKeyCode::Key2 => Some(Primitive::Lines),
        VirtualKeyCode::Key3 => Some(Primitive::Triangles),
        VirtualKeyCode::Key4 => Some(Primitive::Polygon),
        VirtualKeyCode::Key5 => Some(Primitive::Quads),
        _ => None,
    }
}

/// Points collected from left clicks, drawn as the selected primitive.
pub struct ClickedShape {
    vertices: Vec<Vec2>,
    primitive: Primitive,
}

impl Default for ClickedShape {
    fn default() -> Self {
        ClickedShape {
            vertices: Vec::new(),
            primitive: Primitive::Triangles,
        }
    }
}

impl ClickedShape {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn vertices(self: &Self) -> &[Vec2] {
        &self.vertices
    }

    #[inline]
    pub fn primitive(self: &Self) -> Primitive {
        self.primitive
    }

    /// Returns true if the key selected a primitive.
    pub fn select(self: &mut Self, key: VirtualKeyCode) -> bool {
        match primitive_for_key(key) {
            Some(p) => {
                debug!(primitive = ?p, "primitive selected");
                self.primitive = p;
                true
            }
            None => false,
        }
    }

    pub fn click(self: &mut Self, button: MouseButton, cursor: &Cursor) {
        if button == MouseButton::Left {
            let v = cursor.world();
            debug!(x = v.x, y = v.y, "vertex added");
            self.vertices.push(v);
        }
    }

    pub fn draw(self: &Self, gfx: &mut dyn Immediate) {
        gfx.color(Color::WHITE);
        draw::draw_vertices(gfx, self.primitive, &self.vertices);
    }
}

#[derive(Default)]
pub struct PrimitivePicker {
    shape: ClickedShape,
}

impl PrimitivePicker {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn shape(self: &Self) -> &ClickedShape {
        &self.shape
    }
}

impl Exercise for PrimitivePicker {
    fn settings(self: &Self) -> Settings {
        Settings::new("TD2").with_view_size(2.0)
    }

    fn key_pressed(self: &mut Self, key: VirtualKeyCode) -> Flow {
        self.shape.select(key);
        Flow::Continue
    }

    fn mouse_pressed(self: &mut Self, button: MouseButton, cursor: &Cursor) {
        self.shape.click(button, cursor);
    }

    fn draw(self: &mut Self, gfx: &mut dyn Immediate) {
        self.shape.draw(gfx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recorder::Recorder;
    use crate::projection::{View, Viewport};

    fn cursor(x: f32, y: f32) -> Cursor {
        Cursor::new(Vec2::new(x, y), View::new(Viewport::new(800, 800), 2.0))
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(primitive_for_key(VirtualKeyCode::Key1), Some(Primitive::Points));
        assert_eq!(primitive_for_key(VirtualKeyCode::Key2), Some(Primitive::Lines));
        assert_eq!(primitive_for_key(VirtualKeyCode::Key3), Some(Primitive::Triangles));
        assert_eq!(primitive_for_key(VirtualKeyCode::Key4), Some(Primitive::Polygon));
        assert_eq!(primitive_for_key(VirtualKeyCode::Key5), Some(Primitive::Quads));
        assert_eq!(primitive_for_key(VirtualKeyCode::Key6), None);
    }

    #[test]
    fn test_defaults_to_triangles() {
        assert_eq!(PrimitivePicker::new().shape().primitive(), Primitive::Triangles);
    }

    #[test]
    fn test_other_keys_keep_selection() {
        let mut ex = PrimitivePicker::new();
        ex.key_pressed(VirtualKeyCode::Key2);
        assert_eq!(ex.key_pressed(VirtualKeyCode::Q), Flow::Continue);
        assert_eq!(ex.shape().primitive(), Primitive::Lines);
    }

    #[test]
    fn test_left_clicks_append_world_points() {
        let mut ex = PrimitivePicker::new();
        ex.mouse_pressed(MouseButton::Left, &cursor(400.0, 400.0));
        ex.mouse_pressed(MouseButton::Right, &cursor(0.0, 0.0));
        ex.mouse_pressed(MouseButton::Left, &cursor(0.0, 0.0));
        let vs = ex.shape().vertices();
        assert_eq!(vs.len(), 2);
        assert!(vs[0].abs_diff_eq(Vec2::ZERO, 1e-5));
        assert!(vs[1].abs_diff_eq(Vec2::new(-1.0, 1.0), 1e-5));
    }

    #[test]
    fn test_draws_all_points_with_selected_primitive() {
        let mut ex = PrimitivePicker::new();
        ex.key_pressed(VirtualKeyCode::Key1);
        for x in [0.0, 200.0, 400.0] {
            ex.mouse_pressed(MouseButton::Left, &cursor(x, 400.0));
        }
        let mut rec = Recorder::new();
        ex.draw(&mut rec);
        let b = rec.batches();
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].0, Primitive::Points);
        assert_eq!(b[0].1, ex.shape().vertices().to_vec());
        assert_eq!(rec.colors(), vec![Color::WHITE]);
    }
}
