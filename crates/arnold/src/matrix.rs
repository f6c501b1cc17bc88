//! 4x4 transform helpers computed by the renderer's own math routines.

use arnold_sys as sys;
use sys::{AtHPoint, AtMatrix, AtVector};

pub fn identity() -> AtMatrix {
    unsafe { sys::AiM4Identity() }
}

pub fn translation(t: AtVector) -> AtMatrix {
    unsafe { sys::AiM4Translation(&t) }
}

pub fn scaling(s: AtVector) -> AtMatrix {
    unsafe { sys::AiM4Scaling(&s) }
}

/// Rotation about the x axis by `degrees`.
pub fn rotation_x(degrees: f32) -> AtMatrix {
    unsafe { sys::AiM4RotationX(degrees) }
}

pub fn rotation_y(degrees: f32) -> AtMatrix {
    unsafe { sys::AiM4RotationY(degrees) }
}

pub fn rotation_z(degrees: f32) -> AtMatrix {
    unsafe { sys::AiM4RotationZ(degrees) }
}

/// The frame with origin `o` and axes `u`, `v`, `w`.
pub fn frame(o: AtVector, u: AtVector, v: AtVector, w: AtVector) -> AtMatrix {
    unsafe { sys::AiM4Frame(&o, &u, &v, &w) }
}

/// `a * b`, applying `a` first since points are row vectors.
pub fn mult(a: &AtMatrix, b: &AtMatrix) -> AtMatrix {
    unsafe { sys::AiM4Mult(a, b) }
}

pub fn transpose(m: &AtMatrix) -> AtMatrix {
    unsafe { sys::AiM4Transpose(m) }
}

/// The inverse of `m`, `None` when it is singular.
pub fn invert(m: &AtMatrix) -> Option<AtMatrix> {
    if is_singular(m) {
        return None;
    }
    Some(unsafe { sys::AiM4Invert(m) })
}

pub fn determinant(m: &AtMatrix) -> f32 {
    unsafe { sys::AiM4Determinant(m) }
}

pub fn lerp(t: f32, a: &AtMatrix, b: &AtMatrix) -> AtMatrix {
    unsafe { sys::AiM4Lerp(t, a, b) }
}

pub fn transform_point(m: &AtMatrix, p: AtVector) -> AtVector {
    unsafe { sys::AiM4PointByMatrixMult(m, &p) }
}

pub fn transform_hpoint(m: &AtMatrix, p: AtHPoint) -> AtHPoint {
    unsafe { sys::AiM4HPointByMatrixMult(m, &p) }
}

/// Transforms a direction, ignoring translation.
pub fn transform_vector(m: &AtMatrix, v: AtVector) -> AtVector {
    unsafe { sys::AiM4VectorByMatrixMult(m, &v) }
}

/// Transforms by the transpose of `m`, as used for normals with an inverse
/// matrix.
pub fn transform_vector_transposed(m: &AtMatrix, v: AtVector) -> AtVector {
    unsafe { sys::AiM4VectorByMatrixTMult(m, &v) }
}

pub fn is_identity(m: &AtMatrix) -> bool {
    unsafe { sys::AiM4IsIdentity(m) }
}

pub fn is_singular(m: &AtMatrix) -> bool {
    unsafe { sys::AiM4IsSingular(m) }
}
