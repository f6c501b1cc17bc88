use std::ffi::{c_char, c_int};

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_TYPE_BYTE: u8 = 0x00;
pub const AI_TYPE_INT: u8 = 0x01;
pub const AI_TYPE_UINT: u8 = 0x02;
pub const AI_TYPE_BOOLEAN: u8 = 0x03;
pub const AI_TYPE_FLOAT: u8 = 0x04;
pub const AI_TYPE_RGB: u8 = 0x05;
pub const AI_TYPE_RGBA: u8 = 0x06;
pub const AI_TYPE_VECTOR: u8 = 0x07;
pub const AI_TYPE_VECTOR2: u8 = 0x09;
pub const AI_TYPE_STRING: u8 = 0x0A;
pub const AI_TYPE_POINTER: u8 = 0x0B;
pub const AI_TYPE_NODE: u8 = 0x0C;
pub const AI_TYPE_ARRAY: u8 = 0x0D;
pub const AI_TYPE_MATRIX: u8 = 0x0E;
pub const AI_TYPE_ENUM: u8 = 0x0F;
pub const AI_TYPE_CLOSURE: u8 = 0x10;
pub const AI_TYPE_USHORT: u8 = 0x11;
pub const AI_TYPE_HALF: u8 = 0x12;
pub const AI_TYPE_UNDEFINED: u8 = 0xFF;
pub const AI_TYPE_NONE: u8 = 0xFF;

pub const AI_USERDEF_UNDEFINED: u8 = 0;
pub const AI_USERDEF_CONSTANT: u8 = 1;
pub const AI_USERDEF_UNIFORM: u8 = 2;
pub const AI_USERDEF_VARYING: u8 = 3;
pub const AI_USERDEF_INDEXED: u8 = 4;

arnold_api! {
    pub struct ParamApi => params {
        fn AiParamGetName(pentry: *const AtParamEntry) -> AtStringReturn;
        fn AiParamGetType(pentry: *const AtParamEntry) -> u8;
        fn AiParamGetSubType(pentry: *const AtParamEntry) -> u8;
        fn AiParamGetDefault(pentry: *const AtParamEntry) -> *const AtParamValue;
        fn AiParamGetEnum(pentry: *const AtParamEntry) -> AtEnum;
        fn AiParamGetTypeName(type_: u8) -> *const c_char;
        fn AiParamGetTypeSize(type_: u8) -> c_int;
        fn AiUserParamGetName(upentry: *const AtUserParamEntry) -> *const c_char;
        fn AiUserParamGetType(upentry: *const AtUserParamEntry) -> u8;
        fn AiUserParamGetArrayType(upentry: *const AtUserParamEntry) -> u8;
        fn AiUserParamGetCategory(upentry: *const AtUserParamEntry) -> u8;
        fn AiParamTypeConvertible(dst_type: u8, src_type: u8) -> bool;
    }
}
