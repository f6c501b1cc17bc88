use std::ffi::{c_char, c_int};

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_MATX_SUCCESS: AtMaterialxErrorCode = 0;
pub const AI_MATX_ERROR_LOAD_DOCUMENT: AtMaterialxErrorCode = 1;
pub const AI_MATX_ERROR_NO_MATERIALS: AtMaterialxErrorCode = 2;

arnold_api! {
    pub struct MaterialxApi => materialx {
        fn AiMaterialxWrite(
            universe: *const AtUniverse,
            filename: *const c_char,
            look_name: *const c_char,
            properties: *const c_char,
            relative: bool,
        ) -> c_int;
        fn AiMaterialxWriteMaterial(
            filename: *const c_char,
            material_name: *const c_char,
            surface: *const AtNode,
            volume: *const AtNode,
            displacement: *const AtNode,
        ) -> c_int;
        fn AiMaterialxGetLookNames(filename: *const c_char) -> *mut AtArray;
        fn AiMaterialxGetMaterialNames(filename: *const c_char) -> *mut AtArray;
        /// Created nodes are appended to `nodes` when it is not null.
        fn AiMaterialxReadMaterials(
            universe: *mut AtUniverse,
            filename: *const c_char,
            params: *const AtParamValueMap,
            nodes: *mut AtArray,
        ) -> c_int;
        fn AiMaterialxGetOslShaderCode(
            node_definition: *const c_char,
            shader_name: *const c_char,
            connected_inputs: *mut AtParamValueMap,
        ) -> AtStringReturn;
        fn AiMaterialxGetNodeEntryFromDefinition(
            node_definition: *const c_char,
            optional_parameters: *mut AtParamValueMap,
        ) -> *const AtNodeEntry;
    }
}
