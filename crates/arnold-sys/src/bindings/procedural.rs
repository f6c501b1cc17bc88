use std::ffi::c_int;

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_PROC_BOXES: AtProcViewportMode = 0;
pub const AI_PROC_POINTS: AtProcViewportMode = 1;
pub const AI_PROC_POLYGONS: AtProcViewportMode = 2;

arnold_api! {
    pub struct ProceduralApi => procedural {
        /// Writes a viewport representation of `node` into `universe`.
        fn AiProceduralViewport(
            node: *const AtNode,
            universe: *mut AtUniverse,
            mode: AtProcViewportMode,
            params: *const AtParamValueMap,
        ) -> c_int;
        fn AiProceduralExpand(proc_node: *mut AtNode, params: *const AtParamValueMap) -> bool;
    }
}
