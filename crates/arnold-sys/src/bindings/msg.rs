//! Logging configuration, message callbacks and message output.

use std::ffi::{c_char, c_int, c_void};

use crate::LoadError;
use crate::api::{api, symbol};
use crate::macros::arnold_api;
use crate::types::*;

pub const AI_SEVERITY_INFO: c_int = 0x00;
pub const AI_SEVERITY_WARNING: c_int = 0x01;
pub const AI_SEVERITY_ERROR: c_int = 0x02;
pub const AI_SEVERITY_FATAL: c_int = 0x03;

pub const AI_LOG_NONE: c_int = 0x0000;
pub const AI_LOG_INFO: c_int = 0x0001;
pub const AI_LOG_WARNINGS: c_int = 0x0002;
pub const AI_LOG_ERRORS: c_int = 0x0004;
pub const AI_LOG_DEBUG: c_int = 0x0008;
pub const AI_LOG_STATS: c_int = 0x0010;
pub const AI_LOG_ASS_PARSE: c_int = 0x0020;
pub const AI_LOG_PLUGINS: c_int = 0x0040;
pub const AI_LOG_PROGRESS: c_int = 0x0080;
pub const AI_LOG_NAN: c_int = 0x0100;
pub const AI_LOG_TIMESTAMP: c_int = 0x0200;
pub const AI_LOG_BACKTRACE: c_int = 0x0400;
pub const AI_LOG_MEMORY: c_int = 0x0800;
pub const AI_LOG_COLOR: c_int = 0x1000;
pub const AI_LOG_STATUS: c_int = 0x2000;
/// Every flag except [`AI_LOG_STATUS`].
pub const AI_LOG_ALL: c_int = AI_LOG_INFO
    | AI_LOG_WARNINGS
    | AI_LOG_ERRORS
    | AI_LOG_DEBUG
    | AI_LOG_STATS
    | AI_LOG_PLUGINS
    | AI_LOG_PROGRESS
    | AI_LOG_NAN
    | AI_LOG_ASS_PARSE
    | AI_LOG_TIMESTAMP
    | AI_LOG_BACKTRACE
    | AI_LOG_MEMORY
    | AI_LOG_COLOR;

arnold_api! {
    pub struct MsgApi => msg {
        fn AiMsgSetLogFileName(filename: *const c_char);
        /// A null `universe` applies to the default universe.
        fn AiMsgSetLogFileFlags(universe: *const AtUniverse, flags: c_int);
        fn AiMsgSetConsoleFlags(universe: *const AtUniverse, flags: c_int);
        fn AiMsgGetLogFileFlags(universe: *const AtUniverse) -> c_int;
        fn AiMsgGetConsoleFlags(universe: *const AtUniverse) -> c_int;
        fn AiMsgSetMaxWarnings(max_warnings: c_int);
        /// Returns the id to deregister with. `func` may run on any thread.
        fn AiMsgRegisterCallback(func: AtMsgExtendedCallBack, mask: c_int, user_ptr: *mut c_void) -> u32;
        fn AiMsgDeregisterCallback(callback_id: u32);
        fn AiMsgSetCallbackMask(callback_id: u32, mask: c_int);
        fn AiMsgGetCallbackMask(callback_id: u32) -> c_int;
        fn AiMsgTab(tabinc: c_int);
        fn AiMsgUtilGetUsedMemory() -> usize;
        fn AiMsgUtilGetElapsedTime() -> u32;
        fn AiMsgSystemInfo(universe: *const AtUniverse);
    }
}

/// The printf-style message functions. They are C-variadic, which the table
/// macro cannot express.
pub struct MsgFormatApi {
    pub AiMsgInfo: unsafe extern "C" fn(format: *const c_char, ...),
    pub AiMsgDebug: unsafe extern "C" fn(format: *const c_char, ...),
    pub AiMsgWarning: unsafe extern "C" fn(format: *const c_char, ...),
    pub AiMsgError: unsafe extern "C" fn(format: *const c_char, ...),
    pub AiMsgFatal: unsafe extern "C" fn(format: *const c_char, ...),
}

impl MsgFormatApi {
    pub(crate) fn resolve(library: &libloading::Library) -> Result<Self, LoadError> {
        Ok(Self {
            AiMsgInfo: symbol(library, "AiMsgInfo")?,
            AiMsgDebug: symbol(library, "AiMsgDebug")?,
            AiMsgWarning: symbol(library, "AiMsgWarning")?,
            AiMsgError: symbol(library, "AiMsgError")?,
            AiMsgFatal: symbol(library, "AiMsgFatal")?,
        })
    }
}

const VERBATIM: *const c_char = c"%s".as_ptr();

/// Logs `msg` as is, it is never interpreted as a format string.
///
/// # Safety
/// `msg` must point to a nul-terminated string.
pub unsafe fn AiMsgInfo(msg: *const c_char) {
    unsafe { (api().msg_format.AiMsgInfo)(VERBATIM, msg) }
}

/// See [`AiMsgInfo`].
///
/// # Safety
/// `msg` must point to a nul-terminated string.
pub unsafe fn AiMsgDebug(msg: *const c_char) {
    unsafe { (api().msg_format.AiMsgDebug)(VERBATIM, msg) }
}

/// See [`AiMsgInfo`].
///
/// # Safety
/// `msg` must point to a nul-terminated string.
pub unsafe fn AiMsgWarning(msg: *const c_char) {
    unsafe { (api().msg_format.AiMsgWarning)(VERBATIM, msg) }
}

/// See [`AiMsgInfo`].
///
/// # Safety
/// `msg` must point to a nul-terminated string.
pub unsafe fn AiMsgError(msg: *const c_char) {
    unsafe { (api().msg_format.AiMsgError)(VERBATIM, msg) }
}

/// Logs `msg` and aborts the render.
///
/// # Safety
/// `msg` must point to a nul-terminated string.
pub unsafe fn AiMsgFatal(msg: *const c_char) {
    unsafe { (api().msg_format.AiMsgFatal)(VERBATIM, msg) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_all_excludes_status() {
        assert_eq!(AI_LOG_ALL & AI_LOG_STATUS, 0);
        assert_eq!(AI_LOG_ALL, 0x1FFF);
    }
}
