use std::ffi::c_char;

use crate::macros::arnold_api;

arnold_api! {
    pub struct StringApi => string {
        /// Interns `s` and returns the renderer-owned copy an `AtString` wraps.
        fn AiCreateAtStringData_private(s: *const c_char) -> *const c_char;
        fn AiAtStringLength(s: *const c_char) -> usize;
        fn AiAtStringHash(s: *const c_char) -> usize;
    }
}
