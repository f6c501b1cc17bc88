//! Arrays of parameter values, optionally with several motion keys.
//!
//! The variadic `AiArray` constructor is not bound; build arrays with
//! [`AiArrayAllocate`] or [`AiArrayConvert`] instead.

use std::ffi::{c_int, c_void};

use crate::macros::arnold_api;
use crate::types::*;

pub type AiArrayDestroyCB =
    Option<unsafe extern "C" fn(nbuffer: u8, buffers: *const *const c_void, user_data: *const c_void)>;

arnold_api! {
    pub struct ArrayApi => array {
        fn AiArrayAllocate(nelements: u32, nkeys: u8, type_: u8) -> *mut AtArray;
        fn AiArrayMakeShared(
            nelements: u32,
            nkeys: u8,
            type_: u8,
            buffers: *const *const c_void,
            callback: AiArrayDestroyCB,
            callback_data: *mut c_void,
        ) -> *mut AtArray;
        fn AiArrayDestroy(array: *mut AtArray);
        /// Copies `nelements * nkeys` values of `type_` out of `data`.
        fn AiArrayConvert(nelements: u32, nkeys: u8, type_: u8, data: *const c_void) -> *mut AtArray;
        fn AiArrayResize(array: *mut AtArray, nelements: u32, nkeys: u8);
        fn AiArrayCopy(array: *const AtArray) -> *mut AtArray;
        fn AiArraySetKey(array: *mut AtArray, key: u8, data: *const c_void) -> bool;
        fn AiArrayMap(array: *mut AtArray) -> *mut c_void;
        fn AiArrayMapConst(array: *const AtArray) -> *const c_void;
        fn AiArrayMapKey(array: *mut AtArray, key: u8) -> *mut c_void;
        fn AiArrayMapKeyConst(array: *const AtArray, key: u8) -> *const c_void;
        fn AiArrayUnmap(array: *mut AtArray);
        fn AiArrayUnmapConst(array: *const AtArray);
        fn AiArrayGetNumElements(array: *const AtArray) -> u32;
        fn AiArrayGetNumKeys(array: *const AtArray) -> u8;
        fn AiArrayGetType(array: *const AtArray) -> u8;
        fn AiArrayGetDataSize(array: *const AtArray) -> usize;
        fn AiArrayGetKeySize(array: *const AtArray) -> usize;
        fn AiArrayInterpolateVec(array: *const AtArray, time: f32, idx: u32) -> AtVector;
        fn AiArrayInterpolateRGB(array: *const AtArray, time: f32, idx: u32) -> AtRGB;
        fn AiArrayInterpolateRGBA(array: *const AtArray, time: f32, idx: u32) -> AtRGBA;
        fn AiArrayInterpolateFlt(array: *const AtArray, time: f32, idx: u32) -> f32;
        fn AiArrayInterpolateMtx(array: *const AtArray, time: f32, idx: u32) -> AtMatrix;

        fn AiArrayGetBool(a: *const AtArray, i: u32) -> bool;
        fn AiArrayGetByte(a: *const AtArray, i: u32) -> u8;
        fn AiArrayGetInt(a: *const AtArray, i: u32) -> c_int;
        fn AiArrayGetUInt(a: *const AtArray, i: u32) -> u32;
        fn AiArrayGetFlt(a: *const AtArray, i: u32) -> f32;
        fn AiArrayGetRGB(a: *const AtArray, i: u32) -> AtRGB;
        fn AiArrayGetRGBA(a: *const AtArray, i: u32) -> AtRGBA;
        fn AiArrayGetVec2(a: *const AtArray, i: u32) -> AtVector2Return;
        fn AiArrayGetVec(a: *const AtArray, i: u32) -> AtVector;
        fn AiArrayGetMtx(a: *const AtArray, i: u32) -> AtMatrix;
        fn AiArrayGetStr(a: *const AtArray, i: u32) -> AtStringReturn;
        fn AiArrayGetPtr(a: *const AtArray, i: u32) -> *mut c_void;
        fn AiArrayGetArray(a: *const AtArray, i: u32) -> *mut AtArray;

        fn AiArraySetBool(a: *mut AtArray, i: u32, val: bool) -> bool;
        fn AiArraySetByte(a: *mut AtArray, i: u32, val: u8) -> bool;
        fn AiArraySetInt(a: *mut AtArray, i: u32, val: c_int) -> bool;
        fn AiArraySetUInt(a: *mut AtArray, i: u32, val: u32) -> bool;
        fn AiArraySetFlt(a: *mut AtArray, i: u32, val: f32) -> bool;
        fn AiArraySetRGB(a: *mut AtArray, i: u32, val: AtRGB) -> bool;
        fn AiArraySetRGBA(a: *mut AtArray, i: u32, val: AtRGBA) -> bool;
        fn AiArraySetVec2(a: *mut AtArray, i: u32, val: AtVector2) -> bool;
        fn AiArraySetVec(a: *mut AtArray, i: u32, val: AtVector) -> bool;
        fn AiArraySetMtx(a: *mut AtArray, i: u32, val: AtMatrix) -> bool;
        fn AiArraySetStr(a: *mut AtArray, i: u32, val: AtString) -> bool;
        fn AiArraySetPtr(a: *mut AtArray, i: u32, val: *mut c_void) -> bool;
        fn AiArraySetArray(a: *mut AtArray, i: u32, val: *mut AtArray) -> bool;
    }
}
