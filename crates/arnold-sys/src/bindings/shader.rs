//! The few shading entry points usable outside of a shader.

use std::ffi::c_int;

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_RAY_UNDEFINED: u8 = 0x00;
pub const AI_RAY_CAMERA: u8 = 0x01;
pub const AI_RAY_SHADOW: u8 = 0x02;
pub const AI_RAY_DIFFUSE_TRANSMIT: u8 = 0x04;
pub const AI_RAY_SPECULAR_TRANSMIT: u8 = 0x08;
pub const AI_RAY_VOLUME: u8 = 0x10;
pub const AI_RAY_DIFFUSE_REFLECT: u8 = 0x20;
pub const AI_RAY_SPECULAR_REFLECT: u8 = 0x40;
pub const AI_RAY_SUBSURFACE: u8 = 0x80;
pub const AI_RAY_ALL_DIFFUSE: u8 = AI_RAY_DIFFUSE_TRANSMIT | AI_RAY_DIFFUSE_REFLECT;
pub const AI_RAY_ALL_SPECULAR: u8 = AI_RAY_SPECULAR_TRANSMIT | AI_RAY_SPECULAR_REFLECT;
pub const AI_RAY_ALL_REFLECT: u8 = AI_RAY_DIFFUSE_REFLECT | AI_RAY_SPECULAR_REFLECT;
pub const AI_RAY_ALL_TRANSMIT: u8 = AI_RAY_DIFFUSE_TRANSMIT | AI_RAY_SPECULAR_TRANSMIT;
pub const AI_RAY_ALL: u8 = u8::MAX;

arnold_api! {
    pub struct ShaderApi => shader {
        /// Samples an IES profile into `data`, which must hold
        /// `width * height` floats.
        fn AiLightIESLoad(filename: AtString, width: u32, height: u32, max_intensity: *mut f32, data: *mut f32) -> bool;
        fn AiIrradiance(p: *const AtVector, n: *const AtVector, tid: c_int, pid: u32) -> AtRGB;
        fn AiRadiance(
            p: *const AtVector,
            dir: *const AtVector,
            n: *const AtVector,
            obj: *mut AtNode,
            face: u32,
            u: f32,
            v: f32,
            shader: *mut AtNode,
            tid: c_int,
            pid: u32,
        ) -> AtRGB;
    }
}
