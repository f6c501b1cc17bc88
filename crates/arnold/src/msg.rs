//! The renderer's log, bridged into `tracing`.

use std::ffi::{c_char, c_int, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::ptr;

use arnold_sys as sys;
use tracing::{debug, error, info, warn};

use crate::flags::LogFlags;
use crate::string::{c_str_to_string, path_to_c_string, to_c_string};
use crate::{Result, Universe};

/// Forwards the renderer's messages to `tracing` under the `arnold` target
/// while alive.
///
/// Pair it with [`set_console_flags`] set to [`LogFlags::empty`] to stop the
/// renderer printing the same messages itself.
pub struct LogBridge {
    id: u32,
}

impl LogBridge {
    pub fn install(mask: LogFlags) -> LogBridge {
        let callback = forward_message as unsafe extern "C" fn(_, _, _, _, _);
        let id = unsafe { sys::AiMsgRegisterCallback(Some(callback), mask.bits(), ptr::null_mut()) };
        debug!(id, ?mask, "installed log bridge");
        LogBridge { id }
    }

    pub fn mask(&self) -> LogFlags {
        LogFlags::from_bits_truncate(unsafe { sys::AiMsgGetCallbackMask(self.id) })
    }

    pub fn set_mask(&self, mask: LogFlags) {
        unsafe { sys::AiMsgSetCallbackMask(self.id, mask.bits()) };
    }
}

impl Drop for LogBridge {
    fn drop(&mut self) {
        unsafe { sys::AiMsgDeregisterCallback(self.id) };
    }
}

/// Level a native message is logged at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

pub(crate) fn level_for(logmask: c_int, severity: c_int) -> Level {
    match severity {
        sys::AI_SEVERITY_WARNING => Level::Warn,
        sys::AI_SEVERITY_ERROR | sys::AI_SEVERITY_FATAL => Level::Error,
        _ if logmask & (sys::AI_LOG_DEBUG | sys::AI_LOG_MEMORY | sys::AI_LOG_PLUGINS) != 0 => Level::Debug,
        _ => Level::Info,
    }
}

extern "C" fn forward_message(
    logmask: c_int,
    severity: c_int,
    msg_string: *const c_char,
    _metadata: *mut sys::AtParamValueMap,
    _user_ptr: *mut c_void,
) {
    let Some(message) = (unsafe { c_str_to_string(msg_string) }) else {
        return;
    };
    let message = message.trim_end();
    // A panicking subscriber must not unwind into the renderer
    let _ = panic::catch_unwind(AssertUnwindSafe(|| match level_for(logmask, severity) {
        Level::Debug => debug!(target: "arnold", "{message}"),
        Level::Info => info!(target: "arnold", "{message}"),
        Level::Warn => warn!(target: "arnold", "{message}"),
        Level::Error => error!(target: "arnold", "{message}"),
    }));
}

/// Sets what the renderer prints to the console for `universe`, or for the
/// default universe.
pub fn set_console_flags(universe: Option<&Universe<'_>>, flags: LogFlags) {
    let universe = universe.map_or(ptr::null(), |u| u.as_ptr().cast_const());
    unsafe { sys::AiMsgSetConsoleFlags(universe, flags.bits()) };
}

pub fn console_flags(universe: Option<&Universe<'_>>) -> LogFlags {
    let universe = universe.map_or(ptr::null(), |u| u.as_ptr().cast_const());
    LogFlags::from_bits_truncate(unsafe { sys::AiMsgGetConsoleFlags(universe) })
}

/// Writes the log to `path` as well as the console.
pub fn set_log_file(path: &Path) -> Result<()> {
    let path = path_to_c_string(path)?;
    unsafe { sys::AiMsgSetLogFileName(path.as_ptr()) };
    Ok(())
}

pub fn set_log_file_flags(universe: Option<&Universe<'_>>, flags: LogFlags) {
    let universe = universe.map_or(ptr::null(), |u| u.as_ptr().cast_const());
    unsafe { sys::AiMsgSetLogFileFlags(universe, flags.bits()) };
}

pub fn log_file_flags(universe: Option<&Universe<'_>>) -> LogFlags {
    let universe = universe.map_or(ptr::null(), |u| u.as_ptr().cast_const());
    LogFlags::from_bits_truncate(unsafe { sys::AiMsgGetLogFileFlags(universe) })
}

/// Caps how many warnings the renderer reports.
pub fn set_max_warnings(max: i32) {
    unsafe { sys::AiMsgSetMaxWarnings(max) };
}

/// Logs `message` through the renderer at info level.
pub fn message(message: &str) -> Result<()> {
    let message = to_c_string(message)?;
    unsafe { sys::AiMsgInfo(message.as_ptr()) };
    Ok(())
}

pub fn warning(message: &str) -> Result<()> {
    let message = to_c_string(message)?;
    unsafe { sys::AiMsgWarning(message.as_ptr()) };
    Ok(())
}

/// Errors logged this way abort renders if the options ask for it.
pub fn error(message: &str) -> Result<()> {
    let message = to_c_string(message)?;
    unsafe { sys::AiMsgError(message.as_ptr()) };
    Ok(())
}

/// Bytes the renderer has allocated.
pub fn used_memory() -> usize {
    unsafe { sys::AiMsgUtilGetUsedMemory() }
}

/// Milliseconds since the session began.
pub fn elapsed_ms() -> u32 {
    unsafe { sys::AiMsgUtilGetElapsedTime() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_severity() {
        assert_eq!(level_for(sys::AI_LOG_WARNINGS, sys::AI_SEVERITY_WARNING), Level::Warn);
        assert_eq!(level_for(sys::AI_LOG_ERRORS, sys::AI_SEVERITY_ERROR), Level::Error);
        assert_eq!(level_for(sys::AI_LOG_ERRORS, sys::AI_SEVERITY_FATAL), Level::Error);
        assert_eq!(level_for(sys::AI_LOG_INFO, sys::AI_SEVERITY_INFO), Level::Info);
        assert_eq!(level_for(sys::AI_LOG_PLUGINS, sys::AI_SEVERITY_INFO), Level::Debug);
    }

    struct PanickingSubscriber;

    impl tracing::Subscriber for PanickingSubscriber {
        fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, _: &tracing::Event<'_>) {
            panic!("subscriber failure");
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    #[test]
    fn test_forward_contains_subscriber_panic() {
        tracing::subscriber::with_default(PanickingSubscriber, || {
            forward_message(
                sys::AI_LOG_ERRORS,
                sys::AI_SEVERITY_ERROR,
                c"render failed".as_ptr(),
                ptr::null_mut(),
                ptr::null_mut(),
            );
        });
    }

    #[test]
    fn test_forward_ignores_null() {
        forward_message(sys::AI_LOG_INFO, sys::AI_SEVERITY_INFO, ptr::null(), ptr::null_mut(), ptr::null_mut());
        forward_message(
            sys::AI_LOG_WARNINGS,
            sys::AI_SEVERITY_WARNING,
            c"missing texture\n".as_ptr(),
            ptr::null_mut(),
            ptr::null_mut(),
        );
    }
}
