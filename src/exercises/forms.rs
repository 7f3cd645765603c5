use glam::Vec2;
use tracing::debug;
use winit::event::{MouseButton, VirtualKeyCode};

use super::primitives::ClickedShape;
use crate::app::{Exercise, Flow};
use crate::draw::{Color, Immediate};
use crate::input::Cursor;
use crate::settings::Settings;
use crate::shapes;

const RADIUS: f32 = 0.5;
const AXIS_HALF_LEN: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Form {
    Circle,
    Origin,
    Square,
}

impl Form {
    pub fn for_key(key: VirtualKeyCode) -> Option<Form> {
        match key {
            VirtualKeyCode::C => Some(Form::Circle),
            VirtualKeyCode::O => Some(Form::Origin),
            VirtualKeyCode::S => Some(Form::Square),
            _ => None,
        }
    }
}

/// One canonical form at a time, with the clicked primitive on top.
pub struct FormGallery {
    form: Form,
    full: bool,
    shape: ClickedShape,
}

impl Default for FormGallery {
    fn default() -> Self {
        FormGallery {
            form: Form::Circle,
            full: false,
            shape: ClickedShape::new(),
        }
    }
}

impl FormGallery {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn form(self: &Self) -> Form {
        self.form
    }

    #[inline]
    pub fn is_full(self: &Self) -> bool {
        self.full
    }

    #[inline]
    pub fn shape(self: &Self) -> &ClickedShape {
        &self.shape
    }
}

impl Exercise for FormGallery {
    fn settings(self: &Self) -> Settings {
        Settings::new("TD2").with_view_size(2.0)
    }

    fn key_pressed(self: &mut Self, key: VirtualKeyCode) -> Flow {
        if key == VirtualKeyCode::Q {
            return Flow::Quit;
        }
        if self.shape.select(key) {
            return Flow::Continue;
        }
        if let Some(form) = Form::for_key(key) {
            debug!(?form, "form selected");
            self.form = form;
        } else if key == VirtualKeyCode::F {
            self.full = !self.full;
        }
        Flow::Continue
    }

    fn mouse_pressed(self: &mut Self, button: MouseButton, cursor: &Cursor) {
        self.shape.click(button, cursor);
    }

    fn draw(self: &mut Self, gfx: &mut dyn Immediate) {
        match self.form {
            Form::Circle => {
                gfx.color(Color::BLUE);
                shapes::draw_circle(gfx, Vec2::ZERO, RADIUS, self.full);
            }
            Form::Origin => shapes::draw_origin(gfx, AXIS_HALF_LEN),
            Form::Square => {
                gfx.color(Color::WHITE);
                shapes::draw_square(gfx, self.full);
            }
        }
        self.shape.draw(gfx);
    }
}
