use glam::Vec2;
use tracing::debug;
use winit::event::{MouseButton, VirtualKeyCode};

use crate::app::{Exercise, Flow};
use crate::draw::{Color, Immediate};
use crate::input::Cursor;
use crate::settings::Settings;
use crate::shapes;
use crate::transform::{Operation, Placement2D, World2D};

pub const VIEW_SIZE: f32 = 6.0;
const STEP: f32 = 0.25;

const CIRCLE_CENTER: Vec2 = Vec2::new(1.0, 2.0);
const CIRCLE_RADIUS: f32 = 0.5;

/// Rotate 45° then translate along the rotated x axis.
pub const ROTATE_THEN_TRANSLATE: [Operation; 2] = [
    Operation::Rotation(45.0),
    Operation::Translation(Vec2::new(1.0, 0.0)),
];

/// Translate, rotate 45° around the new origin, translate again.
pub const TRANSLATE_ROTATE_TRANSLATE: [Operation; 3] = [
    Operation::Translation(Vec2::new(1.0, 0.0)),
    Operation::Rotation(45.0),
    Operation::Translation(Vec2::new(1.0, 0.0)),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scene {
    Circle,
    /// A square that goes wherever the mouse clicks
    FollowSquare,
    /// The same square placed by two different chains of operations.
    ///
    /// The orange and purple squares do not end up in the same place: every
    /// operation moves the coordinate frame, not the square, so the order
    /// they are applied in changes the result.
    Composition,
}

impl Scene {
    pub fn for_key(key: VirtualKeyCode) -> Option<Scene> {
        match key {
            VirtualKeyCode::C => Some(Scene::Circle),
            VirtualKeyCode::O => Some(Scene::FollowSquare),
            VirtualKeyCode::S => Some(Scene::Composition),
            _ => None,
        }
    }
}

fn arrow_step(key: VirtualKeyCode) -> Option<Vec2> {
    match key {
        VirtualKeyCode::Up => Some(Vec2::new(0.0, STEP)),
        VirtualKeyCode::Down => Some(Vec2::new(0.0, -STEP)),
        VirtualKeyCode::Left => Some(Vec2::new(-STEP, 0.0)),
        VirtualKeyCode::Right => Some(Vec2::new(STEP, 0.0)),
        _ => None,
    }
}

pub struct TransformPlayground {
    scene: Scene,
    square: Placement2D,
}

impl Default for TransformPlayground {
    fn default() -> Self {
        TransformPlayground {
            scene: Scene::Circle,
            square: Placement2D::new(),
        }
    }
}

impl TransformPlayground {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn scene(self: &Self) -> Scene {
        self.scene
    }

    #[inline]
    pub fn square_center(self: &Self) -> Vec2 {
        *self.square.get_pos()
    }

    fn draw_composition(gfx: &mut dyn Immediate) {
        gfx.color(Color::ORANGE);
        for op in ROTATE_THEN_TRANSLATE.iter() {
            op.apply(gfx);
        }
        shapes::draw_square(gfx, false);

        gfx.color(Color::PURPLE);
        gfx.load_identity();
        for op in TRANSLATE_ROTATE_TRANSLATE.iter() {
            op.apply(gfx);
        }
        shapes::draw_square(gfx, false);
    }
}

impl Exercise for TransformPlayground {
    fn settings(self: &Self) -> Settings {
        Settings::new("TD2").with_view_size(VIEW_SIZE)
    }

    fn key_pressed(self: &mut Self, key: VirtualKeyCode) -> Flow {
        if key == VirtualKeyCode::Q {
            return Flow::Quit;
        }
        if let Some(scene) = Scene::for_key(key) {
            debug!(?scene, "scene selected");
            self.scene = scene;
        } else if let Some(step) = arrow_step(key) {
            self.square.strafe(step);
        }
        Flow::Continue
    }

    fn mouse_pressed(self: &mut Self, button: MouseButton, cursor: &Cursor) {
        if button == MouseButton::Left {
            let center = cursor.world();
            debug!(x = center.x, y = center.y, "square moved");
            self.square.set_pos(center);
        }
    }

    fn draw(self: &mut Self, gfx: &mut dyn Immediate) {
        shapes::draw_origin(gfx, VIEW_SIZE / 4.0);

        match self.scene {
            Scene::Circle => {
                gfx.color(Color::ORANGE);
                shapes::draw_circle(gfx, CIRCLE_CENTER, CIRCLE_RADIUS, false);
            }
            Scene::FollowSquare => {
                gfx.color(Color::ORANGE);
                gfx.mult_matrix(self.square.get_mat());
                shapes::draw_square(gfx, false);
            }
            Scene::Composition => Self::draw_composition(gfx),
        }
    }
}
