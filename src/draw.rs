use glam::{Mat4, Vec2};

use crate::projection::View;

pub const POINT_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const PURPLE: Color = Color::rgb(0.64, 0.1, 1.0);

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// How the vertices between `begin` and `end` get assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Points,
    Lines,
    LineLoop,
    Triangles,
    Quads,
    Polygon,
}

/// Fixed function, immediate mode drawing.
///
/// The current matrix is the modelview one, only `projection` touches the
/// projection matrix.
pub trait Immediate {
    fn viewport(self: &mut Self, width: u32, height: u32);
    fn projection(self: &mut Self, mat: &Mat4);
    fn clear(self: &mut Self, color: Color);

    fn load_identity(self: &mut Self);
    fn mult_matrix(self: &mut Self, mat: &Mat4);

    fn point_size(self: &mut Self, size: f32);
    fn color(self: &mut Self, color: Color);
    fn begin(self: &mut Self, primitive: Primitive);
    fn vertex(self: &mut Self, v: Vec2);
    fn end(self: &mut Self);
}

pub fn apply_view(gfx: &mut dyn Immediate, view: &View) {
    let vp = view.viewport();
    gfx.viewport(vp.width, vp.height);
    gfx.projection(&view.ortho_matrix());
}

pub fn draw_vertices(gfx: &mut dyn Immediate, primitive: Primitive, vertices: &[Vec2]) {
    gfx.point_size(POINT_SIZE);
    gfx.begin(primitive);
    for v in vertices {
        gfx.vertex(*v);
    }
    gfx.end();
}


#[cfg(test)]
mod tests {
    use super::recorder::{Call, Recorder};
    use super::*;
    use crate::projection::Viewport;

    #[test]
    fn test_draw_vertices_single_block() {
        let mut rec = Recorder::new();
        let vs = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        draw_vertices(&mut rec, Primitive::Triangles, &vs);
        assert_eq!(rec.calls[0], Call::PointSize(POINT_SIZE));
        assert_eq!(rec.batches(), vec![(Primitive::Triangles, vs.to_vec())]);
    }

    #[test]
    fn test_draw_no_vertices_still_balanced() {
        let mut rec = Recorder::new();
        draw_vertices(&mut rec, Primitive::Points, &[]);
        assert_eq!(rec.batches(), vec![(Primitive::Points, vec![])]);
    }

    #[test]
    fn test_apply_view() {
        let mut rec = Recorder::new();
        let view = View::new(Viewport::new(640, 480), 2.0);
        apply_view(&mut rec, &view);
        assert_eq!(
            rec.calls,
            vec![Call::Viewport(640, 480), Call::Projection(view.ortho_matrix())]
        );
    }
}
