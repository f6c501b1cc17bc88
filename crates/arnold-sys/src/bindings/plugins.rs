use std::ffi::c_char;

use crate::macros::arnold_api;

arnold_api! {
    pub struct PluginApi => plugins {
        /// Loads every plugin found in `directory`. Several directories may
        /// be given, separated like the platform's `PATH`.
        fn AiLoadPlugins(directory: *const c_char);
    }
}
