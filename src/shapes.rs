use std::f32::consts::TAU;

use glam::Vec2;

use crate::draw::{Color, Immediate, Primitive};

pub const CIRCLE_SEGMENTS: usize = 30;

const SQUARE: [Vec2; 4] = [
    Vec2::new(-0.5, 0.5),
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
];

#[inline]
fn outline_or_fill(full: bool) -> Primitive {
    if full {
        Primitive::Polygon
    } else {
        Primitive::LineLoop
    }
}

/// Samples the circle counter clockwise starting at angle 0, the last point
/// is not repeated.
pub fn circle_points(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    let step = TAU / segments as f32;
    (0..segments)
        .map(|i| {
            let teta = step * i as f32;
            center + radius * Vec2::new(teta.cos(), teta.sin())
        })
        .collect()
}

pub fn draw_circle(gfx: &mut dyn Immediate, center: Vec2, radius: f32, full: bool) {
    gfx.begin(outline_or_fill(full));
    for p in circle_points(center, radius, CIRCLE_SEGMENTS) {
        gfx.vertex(p);
    }
    gfx.end();
}

/// Unit square around the origin.
pub fn draw_square(gfx: &mut dyn Immediate, full: bool) {
    gfx.begin(outline_or_fill(full));
    for v in SQUARE.iter() {
        gfx.vertex(*v);
    }
    gfx.end();
}

/// Red x axis, green y axis.
pub fn draw_origin(gfx: &mut dyn Immediate, half_len: f32) {
    gfx.begin(Primitive::Lines);

    gfx.color(Color::RED);
    gfx.vertex(Vec2::new(-half_len, 0.0));
    gfx.vertex(Vec2::new(half_len, 0.0));

    gfx.color(Color::GREEN);
    gfx.vertex(Vec2::new(0.0, -half_len));
    gfx.vertex(Vec2::new(0.0, half_len));

    gfx.end();
}
