use std::ffi::{c_char, c_int};

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_NODE_UNDEFINED: c_int = 0x0000;
pub const AI_NODE_OPTIONS: c_int = 0x0001;
pub const AI_NODE_CAMERA: c_int = 0x0002;
pub const AI_NODE_LIGHT: c_int = 0x0004;
pub const AI_NODE_SHAPE: c_int = 0x0008;
pub const AI_NODE_SHADER: c_int = 0x0010;
pub const AI_NODE_OVERRIDE: c_int = 0x0020;
pub const AI_NODE_DRIVER: c_int = 0x0040;
pub const AI_NODE_FILTER: c_int = 0x0080;
pub const AI_NODE_COLOR_MANAGER: c_int = 0x0800;
pub const AI_NODE_OPERATOR: c_int = 0x1000;
pub const AI_NODE_IMAGER: c_int = 0x2000;
pub const AI_NODE_ALL: c_int = 0xFFFF;

// Derived kinds of shape nodes.
pub const AI_NODE_SHAPE_PROCEDURAL: c_int = 0x0100;
pub const AI_NODE_SHAPE_VOLUME: c_int = 0x0200;
pub const AI_NODE_SHAPE_IMPLICIT: c_int = 0x0400;

arnold_api! {
    pub struct NodeEntryApi => node_entry {
        fn AiNodeEntryLookUp(name: AtString) -> *const AtNodeEntry;
        fn AiNodeEntryGetName(nentry: *const AtNodeEntry) -> *const c_char;
        fn AiNodeEntryGetNameAtString(nentry: *const AtNodeEntry) -> AtStringReturn;
        fn AiNodeEntryGetType(nentry: *const AtNodeEntry) -> c_int;
        fn AiNodeEntryGetTypeName(nentry: *const AtNodeEntry) -> *const c_char;
        fn AiNodeEntryGetDerivedType(nentry: *const AtNodeEntry) -> c_int;
        fn AiNodeEntryGetDerivedTypeName(nentry: *const AtNodeEntry) -> *const c_char;
        fn AiNodeEntryGetOutputType(nentry: *const AtNodeEntry) -> c_int;
        /// Null for entries built into the core library.
        fn AiNodeEntryGetFilename(nentry: *const AtNodeEntry) -> *const c_char;
        fn AiNodeEntryGetVersion(nentry: *const AtNodeEntry) -> *const c_char;
        fn AiNodeEntryGetCount(nentry: *const AtNodeEntry) -> c_int;
        fn AiNodeEntryGetNumParams(nentry: *const AtNodeEntry) -> c_int;
        fn AiNodeEntryGetParameter(nentry: *const AtNodeEntry, i: c_int) -> *const AtParamEntry;
        fn AiNodeEntryLookUpParameter(nentry: *const AtNodeEntry, param: AtString) -> *const AtParamEntry;
        fn AiNodeEntryGetNumOutputs(nentry: *const AtNodeEntry) -> c_int;
        fn AiNodeEntryGetOutput(nentry: *const AtNodeEntry, i: c_int) -> *const AtParamEntry;
        fn AiNodeEntryLookUpOutput(nentry: *const AtNodeEntry, param: AtString) -> *const AtParamEntry;
        fn AiNodeEntryGetParamIterator(nentry: *const AtNodeEntry) -> *mut AtParamIterator;
        /// A null `param` iterates the metadata of the entry itself.
        fn AiNodeEntryGetMetaDataIterator(nentry: *const AtNodeEntry, param: *const c_char) -> *mut AtMetaDataIterator;
        fn AiNodeEntryInstall(
            type_: c_int,
            output_type: u8,
            name: *const c_char,
            filename: *const c_char,
            methods: *const AtNodeMethods,
            version: *const c_char,
        );
        fn AiNodeEntryUninstall(name: *const c_char);
        fn AiParamIteratorDestroy(iter: *mut AtParamIterator);
        fn AiParamIteratorGetNext(iter: *mut AtParamIterator) -> *const AtParamEntry;
        fn AiParamIteratorFinished(iter: *const AtParamIterator) -> bool;
        fn AiMetaDataIteratorDestroy(iter: *mut AtMetaDataIterator);
        fn AiMetaDataIteratorGetNext(iter: *mut AtMetaDataIterator) -> *const AtMetaDataEntry;
        fn AiMetaDataIteratorFinished(iter: *const AtMetaDataIterator) -> bool;
    }
}
