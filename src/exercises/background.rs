use tracing::info;
use winit::event::{MouseButton, VirtualKeyCode};

use crate::app::{Exercise, Flow};
use crate::draw::{Color, Immediate};
use crate::input::Cursor;
use crate::settings::Settings;

const RED_STEP: f32 = 0.05;

/// Paints the background from the mouse position, or adds red on `R`.
#[derive(Default)]
pub struct BackgroundPainter {
    follow: bool,
    red: f32,
    clear: Color,
}

impl BackgroundPainter {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn is_following(self: &Self) -> bool {
        self.follow
    }

    fn paint_from(self: &mut Self, cursor: &Cursor) {
        let rel = cursor.relative();
        self.clear = Color::rgb(rel.x, 0.0, rel.y);
    }
}

impl Exercise for BackgroundPainter {
    fn settings(self: &Self) -> Settings {
        Settings::new("TD 01 Ex 03").with_view_size(1.0)
    }

    #[inline]
    fn background(self: &Self) -> Color {
        self.clear
    }

    fn key_pressed(self: &mut Self, key: VirtualKeyCode) -> Flow {
        match key {
            VirtualKeyCode::Q => return Flow::Quit,
            VirtualKeyCode::M => {
                self.follow = !self.follow;
                info!(follow = self.follow, "mode changed");
            }
            // Stops one step past 1.0, GL clamps it anyway
            VirtualKeyCode::R if !self.follow && self.red <= 1.0 => {
                self.red += RED_STEP;
                self.clear = Color::rgb(self.red, 0.0, 0.0);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn mouse_pressed(self: &mut Self, button: MouseButton, cursor: &Cursor) {
        if button == MouseButton::Left {
            self.paint_from(cursor);
        }
    }

    fn cursor_moved(self: &mut Self, cursor: &Cursor) {
        if self.follow {
            self.paint_from(cursor);
        }
    }

    fn draw(self: &mut Self, _gfx: &mut dyn Immediate) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_frame;
    use crate::draw::recorder::{Call, Recorder};
    use crate::projection::{View, Viewport};
    use glam::Vec2;

    fn cursor(x: f32, y: f32) -> Cursor {
        Cursor::new(Vec2::new(x, y), View::new(Viewport::new(800, 800), 1.0))
    }

    #[test]
    fn test_quit() {
        let mut ex = BackgroundPainter::new();
        assert_eq!(ex.key_pressed(VirtualKeyCode::Q), Flow::Quit);
        assert_eq!(ex.key_pressed(VirtualKeyCode::A), Flow::Continue);
    }

    #[test]
    fn test_click_paints() {
        let mut ex = BackgroundPainter::new();
        ex.mouse_pressed(MouseButton::Right, &cursor(400.0, 200.0));
        assert_eq!(ex.background(), Color::BLACK);
        ex.mouse_pressed(MouseButton::Left, &cursor(400.0, 200.0));
        assert_eq!(ex.background(), Color::rgb(0.5, 0.0, 0.25));
    }

    #[test]
    fn test_motion_only_paints_in_follow_mode() {
        let mut ex = BackgroundPainter::new();
        ex.cursor_moved(&cursor(800.0, 0.0));
        assert_eq!(ex.background(), Color::BLACK);

        ex.key_pressed(VirtualKeyCode::M);
        assert!(ex.is_following());
        ex.cursor_moved(&cursor(800.0, 0.0));
        assert_eq!(ex.background(), Color::rgb(1.0, 0.0, 0.0));

        ex.key_pressed(VirtualKeyCode::M);
        ex.cursor_moved(&cursor(0.0, 800.0));
        assert_eq!(ex.background(), Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_red_steps() {
        let mut ex = BackgroundPainter::new();
        ex.key_pressed(VirtualKeyCode::R);
        ex.key_pressed(VirtualKeyCode::R);
        assert!((ex.background().r - 0.1).abs() < 1e-6);
        assert_eq!(ex.background().g, 0.0);
    }

    #[test]
    fn test_red_ignored_while_following() {
        let mut ex = BackgroundPainter::new();
        ex.key_pressed(VirtualKeyCode::M);
        ex.key_pressed(VirtualKeyCode::R);
        assert_eq!(ex.background(), Color::BLACK);
    }

    #[test]
    fn test_red_stops_past_one() {
        let mut ex = BackgroundPainter::new();
        for _ in 0..100 {
            ex.key_pressed(VirtualKeyCode::R);
        }
        let r = ex.background().r;
        assert!(r > 1.0 && r <= 1.0 + RED_STEP + 1e-6);
    }

    #[test]
    fn test_frame_is_only_a_clear() {
        let mut ex = BackgroundPainter::new();
        ex.mouse_pressed(MouseButton::Left, &cursor(0.0, 800.0));
        let mut rec = Recorder::new();
        render_frame(&mut ex, &mut rec);
        assert_eq!(
            rec.calls,
            vec![Call::Clear(Color::rgb(0.0, 0.0, 1.0)), Call::LoadIdentity]
        );
    }
}
