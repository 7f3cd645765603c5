use glam::{Mat4, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }

    #[inline]
    pub fn aspect_ratio(self: &Self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Edges of an orthographic box, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

pub const NEAR: f32 = -1.0;
pub const FAR: f32 = 1.0;

/// A viewport together with the amount of world it shows.
///
/// `view_size` is the world extent of the shorter window side, the longer side
/// is stretched by the aspect ratio so that nothing gets distorted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    viewport: Viewport,
    view_size: f32,
}

impl View {
    pub fn new(viewport: Viewport, view_size: f32) -> Self {
        View {
            viewport,
            view_size,
        }
    }

    #[inline]
    pub fn viewport(self: &Self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn view_size(self: &Self) -> f32 {
        self.view_size
    }

    /// Returns true if the viewport actually changed.
    /// A minimized window reports a zero size, that one is ignored.
    pub fn resize(self: &mut Self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let viewport = Viewport::new(width, height);
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        true
    }

    pub fn bounds(self: &Self) -> Bounds {
        let half = self.view_size / 2.0;
        let aspect = self.viewport.aspect_ratio();
        if aspect > 1.0 {
            Bounds {
                left: -half * aspect,
                right: half * aspect,
                bottom: -half,
                top: half,
            }
        } else {
            Bounds {
                left: -half,
                right: half,
                bottom: -half / aspect,
                top: half / aspect,
            }
        }
    }

    #[inline]
    pub fn ortho_matrix(self: &Self) -> Mat4 {
        let b = self.bounds();
        Mat4::orthographic_rh_gl(b.left, b.right, b.bottom, b.top, NEAR, FAR)
    }

    /// Window position (origin top left, y down) to world position.
    pub fn screen_to_world(self: &Self, pos: Vec2) -> Vec2 {
        let half = self.view_size / 2.0;
        let aspect = self.viewport.aspect_ratio();
        let nx = pos.x * (2.0 / self.viewport.width as f32) - 1.0;
        let ny = -pos.y * (2.0 / self.viewport.height as f32) + 1.0;
        if aspect >= 1.0 {
            Vec2::new(half * aspect * nx, half * ny)
        } else {
            Vec2::new(half * nx, half / aspect * ny)
        }
    }

    /// Window position scaled into [0, 1] on both axes.
    #[inline]
    pub fn screen_to_unit(self: &Self, pos: Vec2) -> Vec2 {
        Vec2::new(
            pos.x / self.viewport.width as f32,
            pos.y / self.viewport.height as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    static EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn approx_eq_v(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    #[test]
    fn test_square_bounds() {
        let view = View::new(Viewport::new(800, 800), 2.0);
        let b = view.bounds();
        assert_eq!(
            b,
            Bounds {
                left: -1.0,
                right: 1.0,
                bottom: -1.0,
                top: 1.0
            }
        );
    }

    #[test]
    fn test_wide_bounds_stretch_x() {
        let view = View::new(Viewport::new(1600, 800), 6.0);
        let b = view.bounds();
        assert!(approx_eq(b.left, -6.0));
        assert!(approx_eq(b.right, 6.0));
        assert!(approx_eq(b.bottom, -3.0));
        assert!(approx_eq(b.top, 3.0));
    }

    #[test]
    fn test_tall_bounds_stretch_y() {
        let view = View::new(Viewport::new(400, 800), 1.0);
        let b = view.bounds();
        assert!(approx_eq(b.left, -0.5));
        assert!(approx_eq(b.right, 0.5));
        assert!(approx_eq(b.bottom, -1.0));
        assert!(approx_eq(b.top, 1.0));
    }

    #[test]
    fn test_ortho_maps_bounds_to_clip_space() {
        let view = View::new(Viewport::new(1200, 800), 2.0);
        let b = view.bounds();
        let m = view.ortho_matrix();
        let top_right = m.project_point3(Vec3::new(b.right, b.top, 0.0));
        let bottom_left = m.project_point3(Vec3::new(b.left, b.bottom, 0.0));
        assert!(approx_eq(top_right.x, 1.0) && approx_eq(top_right.y, 1.0));
        assert!(approx_eq(bottom_left.x, -1.0) && approx_eq(bottom_left.y, -1.0));
    }

    #[test]
    fn test_screen_to_world_square() {
        let view = View::new(Viewport::new(800, 800), 2.0);
        assert!(approx_eq_v(view.screen_to_world(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, 1.0)));
        assert!(approx_eq_v(view.screen_to_world(Vec2::new(400.0, 400.0)), Vec2::ZERO));
        assert!(approx_eq_v(view.screen_to_world(Vec2::new(800.0, 800.0)), Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn test_screen_corners_hit_bounds() {
        for (w, h) in [(1600, 800), (800, 1600), (1024, 768), (300, 900)] {
            let view = View::new(Viewport::new(w, h), 6.0);
            let b = view.bounds();
            let tl = view.screen_to_world(Vec2::ZERO);
            let br = view.screen_to_world(Vec2::new(w as f32, h as f32));
            assert!(approx_eq_v(tl, Vec2::new(b.left, b.top)), "{}x{}", w, h);
            assert!(approx_eq_v(br, Vec2::new(b.right, b.bottom)), "{}x{}", w, h);
        }
    }

    #[test]
    fn test_screen_to_world_scales_with_view_size() {
        let view = View::new(Viewport::new(800, 800), 6.0);
        assert!(approx_eq_v(view.screen_to_world(Vec2::new(800.0, 0.0)), Vec2::new(3.0, 3.0)));
    }

    #[test]
    fn test_screen_to_unit() {
        let view = View::new(Viewport::new(800, 400), 1.0);
        assert!(approx_eq_v(view.screen_to_unit(Vec2::new(200.0, 300.0)), Vec2::new(0.25, 0.75)));
    }

    #[test]
    fn test_resize_ignores_zero_and_same_size() {
        let mut view = View::new(Viewport::new(800, 800), 2.0);
        assert!(!view.resize(0, 600));
        assert!(!view.resize(800, 0));
        assert!(!view.resize(800, 800));
        assert_eq!(*view.viewport(), Viewport::new(800, 800));
        assert!(view.resize(1024, 768));
        assert_eq!(*view.viewport(), Viewport::new(1024, 768));
    }
}
