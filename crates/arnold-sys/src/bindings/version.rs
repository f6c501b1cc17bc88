use std::ffi::c_char;

use crate::macros::arnold_api;
use crate::types::AtCopyrightNoticeType;

pub const AI_VERSION_ARCH_NUM: u32 = 7;
pub const AI_VERSION_MAJOR_NUM: u32 = 4;
pub const AI_VERSION_MINOR_NUM: u32 = 2;
pub const AI_VERSION_FIX: &str = "1";
pub const AI_VERSION: &str = "7.4.2.1";

pub const AI_COPYRIGHT_NOTICES_CORE: AtCopyrightNoticeType = 0;
pub const AI_COPYRIGHT_NOTICES_PLUGINS: AtCopyrightNoticeType = 1;

/// Buffer sizes `AiGetVersion` writes into.
pub const AI_VERSION_COMPONENT_LEN: usize = 10;
pub const AI_VERSION_FIX_LEN: usize = 20;

arnold_api! {
    pub struct VersionApi => version {
        /// Every output pointer may be null. When not, `arch`, `major` and
        /// `minor` need [`AI_VERSION_COMPONENT_LEN`] bytes and `fix` needs
        /// [`AI_VERSION_FIX_LEN`].
        fn AiGetVersion(arch: *mut c_char, major: *mut c_char, minor: *mut c_char, fix: *mut c_char) -> *const c_char;
        fn AiGetVersionInfo() -> *const c_char;
        fn AiGetCompileOptions() -> *const c_char;
        fn AiCheckAPIVersion(arch: *const c_char, major: *const c_char, minor: *const c_char) -> bool;
        fn AiSetAppString(appstr: *const c_char);
        fn AiGetCopyrightNotices(copyright_notice_type: AtCopyrightNoticeType) -> *const c_char;
    }
}
