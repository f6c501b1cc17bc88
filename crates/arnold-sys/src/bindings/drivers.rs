use std::ffi::c_char;

use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct DriverApi => drivers {
        /// Driver entry registered for a file extension such as `"exr"`.
        fn AiFindDriverType(extension: *const c_char) -> *const AtNodeEntry;
        /// Null-terminated list of the extensions a driver writes.
        fn AiDriverExtension(nentry: *const AtNodeEntry) -> *const *const c_char;
        fn AiQuantize8bit(x: i32, y: i32, i: i32, value: f32, dither: bool) -> u8;
        fn AiQuantize16bit(x: i32, y: i32, i: i32, value: f32, dither: bool) -> u16;
    }
}
