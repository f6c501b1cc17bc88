use std::ffi::c_char;

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_FILE_TYPE_CUSTOM: AtFileType = 0;
pub const AI_FILE_TYPE_TEXTURE: AtFileType = 1;
pub const AI_FILE_TYPE_OSL: AtFileType = 2;
pub const AI_FILE_TYPE_PROCEDURAL: AtFileType = 3;
pub const AI_FILE_TYPE_PLUGIN: AtFileType = 4;

arnold_api! {
    pub struct FileApi => file_utils {
        /// Resolves against the search paths of `file_type`. `custom_path` is
        /// only read for [`AI_FILE_TYPE_CUSTOM`] and may be null.
        fn AiResolveFilePath(file_path: *const c_char, file_type: AtFileType, custom_path: *const c_char) -> AtStringReturn;
    }
}
