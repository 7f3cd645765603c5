use std::collections::HashSet;

use glam::Vec2;
use tracing::debug;
use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

use crate::projection::View;

pub struct KeyboardHandler {
    held: HashSet<VirtualKeyCode>,
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        KeyboardHandler {
            held: HashSet::with_capacity(16),
        }
    }
}

impl KeyboardHandler {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the key only when it goes from released to pressed, auto repeat
    /// while held down does not count.
    pub fn handle(self: &mut Self, key_ev: &KeyboardInput) -> Option<VirtualKeyCode> {
        let code = key_ev.virtual_keycode?;
        match key_ev.state {
            ElementState::Pressed => {
                if self.held.insert(code) {
                    debug!(key = ?code, scancode = key_ev.scancode, "key pressed");
                    Some(code)
                } else {
                    None
                }
            }
            ElementState::Released => {
                self.held.remove(&code);
                None
            }
        }
    }

    #[inline]
    pub fn is_pressed(self: &Self, code: VirtualKeyCode) -> bool {
        self.held.contains(&code)
    }
}

/// Last known cursor position, in window pixels, and the view it was seen in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    position: Vec2,
    view: View,
}

impl Cursor {
    #[inline]
    pub fn new(position: Vec2, view: View) -> Self {
        Cursor { position, view }
    }

    #[inline]
    pub fn position(self: &Self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn world(self: &Self) -> Vec2 {
        self.view.screen_to_world(self.position)
    }

    #[inline]
    pub fn relative(self: &Self) -> Vec2 {
        self.view.screen_to_unit(self.position)
    }
}
