use std::ffi::CStr;

use glam::{Mat4, Vec2};

use crate::draw::{Color, Immediate, Primitive};
use crate::gl;
use crate::gl::types::*;

#[inline]
fn gl_mode(p: Primitive) -> GLenum {
    match p {
        Primitive::Points => gl::POINTS,
        Primitive::Lines => gl::LINES,
        Primitive::LineLoop => gl::LINE_LOOP,
        Primitive::Triangles => gl::TRIANGLES,
        Primitive::Quads => gl::QUADS,
        Primitive::Polygon => gl::POLYGON,
    }
}

/// Talks to the OpenGL context that is current on this thread.
/// Only build one after the function pointers were loaded.
pub struct GlImmediate {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl GlImmediate {
    pub(crate) fn new() -> Self {
        GlImmediate {
            _not_send: std::marker::PhantomData,
        }
    }
}

impl Immediate for GlImmediate {
    fn viewport(self: &mut Self, width: u32, height: u32) {
        let w = GLsizei::try_from(width).unwrap_or(GLsizei::MAX);
        let h = GLsizei::try_from(height).unwrap_or(GLsizei::MAX);
        unsafe {
            gl::Viewport(0, 0, w, h);
        }
    }

    fn projection(self: &mut Self, mat: &Mat4) {
        unsafe {
            gl::MatrixMode(gl::PROJECTION);
            gl::LoadMatrixf(mat.to_cols_array().as_ptr());
            gl::MatrixMode(gl::MODELVIEW);
        }
    }

    fn clear(self: &mut Self, color: Color) {
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    #[inline]
    fn load_identity(self: &mut Self) {
        unsafe {
            gl::LoadIdentity();
        }
    }

    #[inline]
    fn mult_matrix(self: &mut Self, mat: &Mat4) {
        unsafe {
            gl::MultMatrixf(mat.to_cols_array().as_ptr());
        }
    }

    #[inline]
    fn point_size(self: &mut Self, size: f32) {
        unsafe {
            gl::PointSize(size);
        }
    }

    #[inline]
    fn color(self: &mut Self, color: Color) {
        unsafe {
            gl::Color4f(color.r, color.g, color.b, color.a);
        }
    }

    #[inline]
    fn begin(self: &mut Self, primitive: Primitive) {
        unsafe {
            gl::Begin(gl_mode(primitive));
        }
    }

    #[inline(always)]
    fn vertex(self: &mut Self, v: Vec2) {
        unsafe {
            gl::Vertex2f(v.x, v.y);
        }
    }

    #[inline]
    fn end(self: &mut Self) {
        unsafe {
            gl::End();
        }
    }
}

pub fn gl_version() -> String {
    let s = unsafe { gl::GetString(gl::VERSION) };
    if s.is_null() {
        return String::from("unknown");
    }
    unsafe { CStr::from_ptr(s as *const std::os::raw::c_char) }
        .to_string_lossy()
        .into_owned()
}
