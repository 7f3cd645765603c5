use glam::*;

use crate::draw::Immediate;

/// One step of the modelview matrix, like glTranslatef/glRotatef/glScalef.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operation {
    Translation(Vec2),
    /// In degrees, around the z axis
    Rotation(f32),
    Scale(Vec2),
}

impl Operation {
    pub fn matrix(self: &Self) -> Mat4 {
        match *self {
            Operation::Translation(v) => Mat4::from_translation(v.extend(0.0)),
            Operation::Rotation(deg) => Mat4::from_rotation_z(deg.to_radians()),
            Operation::Scale(v) => Mat4::from_scale(v.extend(1.0)),
        }
    }

    #[inline]
    pub fn apply(self: &Self, gfx: &mut dyn Immediate) {
        gfx.mult_matrix(&self.matrix());
    }
}

/// Same matrix as applying `ops` one after the other.
/// Each operation moves the frame the following ones are expressed in.
pub fn compose(ops: &[Operation]) -> Mat4 {
    ops.iter().fold(Mat4::IDENTITY, |m, op| m * op.matrix())
}

pub trait World2D {
    fn get_mat(self: &mut Self) -> &Mat4;

    fn get_pos(self: &Self) -> &Vec2;
    fn set_pos(self: &mut Self, val: Vec2);
    fn strafe(self: &mut Self, val: Vec2);
}

pub struct Placement2D {
    pos: Vec2,
    angle: f32, // in Degrees ( not radians )
    size: Vec2,
    mat: Option<Mat4>,
}

impl Default for Placement2D {
    fn default() -> Self {
        Placement2D {
            pos: Vec2::ZERO,
            angle: 0.0,
            size: Vec2::ONE,
            mat: None,
        }
    }
}

impl Placement2D {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn get_angle(self: &Self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn set_angle(self: &mut Self, deg: f32) {
        self.angle = deg;
        self.mat = None;
    }

    #[inline]
    pub fn get_size(self: &Self) -> &Vec2 {
        &self.size
    }

    #[inline]
    pub fn set_size(self: &mut Self, val: Vec2) {
        self.size = val;
        self.mat = None;
    }
}

impl World2D for Placement2D {
    #[inline]
    fn get_mat(self: &mut Self) -> &Mat4 {
        let (pos, angle, size) = (self.pos, self.angle, self.size);
        self.mat.get_or_insert_with(|| {
            compose(&[
                Operation::Translation(pos),
                Operation::Rotation(angle),
                Operation::Scale(size),
            ])
        })
    }

    #[inline]
    fn get_pos(self: &Self) -> &Vec2 {
        &self.pos
    }

    #[inline]
    fn set_pos(self: &mut Self, val: Vec2) {
        self.pos = val;
        self.mat = None;
    }

    #[inline]
    fn strafe(self: &mut Self, val: Vec2) {
        self.pos += val;
        self.mat = None;
    }
}
