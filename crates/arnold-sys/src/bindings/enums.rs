use std::ffi::{c_char, c_int};

use crate::macros::arnold_api;
use crate::types::AtEnum;

arnold_api! {
    pub struct EnumApi => enums {
        /// -1 when `string` is not one of the values.
        fn AiEnumGetValue(enum_type: AtEnum, string: *const c_char) -> c_int;
        fn AiEnumGetString(enum_type: AtEnum, index: c_int) -> *const c_char;
    }
}
