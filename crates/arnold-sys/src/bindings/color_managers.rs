use std::ffi::{c_char, c_int, c_void};

use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct ColorManagerApi => color_manager {
        /// A null `node` uses the color manager of the options node.
        fn AiColorManagerTransform(
            node: *mut AtNode,
            name: AtString,
            is_output: bool,
            dither: bool,
            roi: *const AtBBox2,
            src: *mut c_void,
            src_layout: *const AtChannelLayout,
            dst: *mut c_void,
            dst_layout: *const AtChannelLayout,
        ) -> bool;
        fn AiColorManagerGetDefaults(node: *mut AtNode, s_rgb: *mut AtString, linear: *mut AtString);
        /// `chromaticities` must hold 8 floats: xy for red, green, blue and white.
        fn AiColorManagerGetChromaticities(node: *mut AtNode, space: AtString, chromaticities: *mut f32) -> bool;
        fn AiColorManagerGetCustomAttributes(node: *mut AtNode, space: AtString, num: *mut c_int, attributes: *mut *const c_char);
        fn AiColorManagerGetNumColorSpaces(node: *mut AtNode, family: AtString) -> c_int;
        fn AiColorManagerGetColorSpaceNameByIndex(node: *mut AtNode, i: c_int, family: AtString) -> AtStringReturn;
        fn AiColorManagerGetNumFamilies(node: *mut AtNode) -> c_int;
        fn AiColorManagerGetFamilyNameByIndex(node: *mut AtNode, i: c_int) -> AtStringReturn;
        fn AiColorManagerColorSpaceIsLinear(node: *mut AtNode, cs: AtString) -> bool;
    }
}
