use std::ffi::c_char;

use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct VolumeApi => volume {
        /// Channel (grid) names stored in a volume file such as `.vdb`.
        fn AiVolumeFileGetChannels(filename: *const c_char) -> *mut AtArray;
        /// Bounds of the given channels, or of all of them when `channels` is null.
        fn AiVolumeFileGetBBox(filename: *const c_char, channels: *const AtArray) -> AtBBox;
    }
}
