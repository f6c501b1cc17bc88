//! Node creation, lookup, linking and typed parameter access.

use std::ffi::{c_char, c_int, c_void};

use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct NodeApi => nodes {
        fn AiNode(universe: *mut AtUniverse, nentry_name: AtString, name: AtString, parent: *const AtNode) -> *mut AtNode;
        fn AiNodeLookUpByName(universe: *const AtUniverse, name: AtString, parent: *const AtNode) -> *mut AtNode;
        fn AiNodeDeclare(node: *mut AtNode, param: AtString, declaration: *const c_char) -> bool;
        fn AiNodeLookUpUserParameter(node: *const AtNode, param: AtString) -> *const AtUserParamEntry;
        fn AiNodeIs(node: *const AtNode, str: AtString) -> bool;
        fn AiNodeReset(node: *mut AtNode);
        fn AiNodeResetParameter(node: *mut AtNode, param: *const c_char);
        fn AiNodeClone(node: *const AtNode, new_name: AtString, parent: *const AtNode) -> *mut AtNode;
        fn AiNodeDestroy(node: *mut AtNode) -> bool;
        fn AiNodeReplace(old_node: *mut AtNode, new_node: *mut AtNode, remove: bool);
        fn AiNodeLink(src: *mut AtNode, input: *const c_char, target: *mut AtNode) -> bool;
        fn AiNodeLinkOutput(src: *mut AtNode, output: *const c_char, target: *mut AtNode, input: *const c_char) -> bool;
        fn AiNodeUnlink(node: *mut AtNode, input: *const c_char) -> bool;
        fn AiNodeIsLinked(node: *const AtNode, input: *const c_char) -> bool;
        /// `comp` may be null.
        fn AiNodeGetLink(node: *const AtNode, input: *const c_char, comp: *mut c_int) -> *mut AtNode;
        fn AiNodeGetLinkOutput(
            node: *const AtNode,
            input: *const c_char,
            output_param: *mut c_int,
            output_comp: *mut c_int,
        ) -> *mut AtNode;
        fn AiNodeGetName(node: *const AtNode) -> *const c_char;
        fn AiNodeGetNodeEntry(node: *const AtNode) -> *const AtNodeEntry;
        fn AiNodeGetLocalData(node: *const AtNode) -> *mut c_void;
        fn AiNodeSetLocalData(node: *mut AtNode, data: *mut c_void);
        fn AiNodeGetPluginData(node: *const AtNode) -> *mut c_void;
        fn AiNodeSetDisabled(node: *mut AtNode, disabled: bool);
        fn AiNodeIsDisabled(node: *const AtNode) -> bool;
        fn AiNodeGetParent(node: *const AtNode) -> *mut AtNode;
        fn AiNodeGetUniverse(node: *const AtNode) -> *mut AtUniverse;
        fn AiNodeGetUserParamIterator(node: *const AtNode) -> *mut AtUserParamIterator;
        fn AiNodeGetProcessedGeometry(source_node: *mut AtNode, dest_universe: *mut AtUniverse) -> *mut AtNode;
        fn AiNodeAddDependencyParam(consumer: *mut AtNode, producer: *const AtNode, param: AtString);
        fn AiNodeClearDependency(consumer: *mut AtNode, producer: *const AtNode);
        fn AiUserParamIteratorDestroy(iter: *mut AtUserParamIterator);
        fn AiUserParamIteratorGetNext(iter: *mut AtUserParamIterator) -> *const AtUserParamEntry;
        fn AiUserParamIteratorFinished(iter: *const AtUserParamIterator) -> bool;

        fn AiNodeSetByte(node: *mut AtNode, param: AtString, val: u8);
        fn AiNodeSetInt(node: *mut AtNode, param: AtString, val: c_int);
        fn AiNodeSetUInt(node: *mut AtNode, param: AtString, val: u32);
        fn AiNodeSetBool(node: *mut AtNode, param: AtString, val: bool);
        fn AiNodeSetFlt(node: *mut AtNode, param: AtString, val: f32);
        fn AiNodeSetPtr(node: *mut AtNode, param: AtString, val: *mut c_void);
        /// The node takes ownership of `val`.
        fn AiNodeSetArray(node: *mut AtNode, param: AtString, val: *mut AtArray);
        fn AiNodeSetMatrix(node: *mut AtNode, param: AtString, val: AtMatrix);
        fn AiNodeSetStr(node: *mut AtNode, param: AtString, str: AtString);
        fn AiNodeSetRGB(node: *mut AtNode, param: AtString, r: f32, g: f32, b: f32);
        fn AiNodeSetRGBA(node: *mut AtNode, param: AtString, r: f32, g: f32, b: f32, a: f32);
        fn AiNodeSetVec(node: *mut AtNode, param: AtString, x: f32, y: f32, z: f32);
        fn AiNodeSetVec2(node: *mut AtNode, param: AtString, x: f32, y: f32);
        /// Sets parameters from `.ass` syntax, e.g. `"radius 2 matrix ..."`.
        fn AiNodeSetAttributes(node: *mut AtNode, attributes: *const c_char);

        fn AiNodeGetByte(node: *const AtNode, param: AtString) -> u8;
        fn AiNodeGetInt(node: *const AtNode, param: AtString) -> c_int;
        fn AiNodeGetUInt(node: *const AtNode, param: AtString) -> u32;
        fn AiNodeGetBool(node: *const AtNode, param: AtString) -> bool;
        fn AiNodeGetFlt(node: *const AtNode, param: AtString) -> f32;
        fn AiNodeGetRGB(node: *const AtNode, param: AtString) -> AtRGB;
        fn AiNodeGetRGBA(node: *const AtNode, param: AtString) -> AtRGBA;
        fn AiNodeGetVec(node: *const AtNode, param: AtString) -> AtVector;
        fn AiNodeGetVec2(node: *const AtNode, param: AtString) -> AtVector2Return;
        fn AiNodeGetStr(node: *const AtNode, param: AtString) -> AtStringReturn;
        fn AiNodeGetPtr(node: *const AtNode, param: AtString) -> *mut c_void;
        fn AiNodeGetArray(node: *const AtNode, param: AtString) -> *mut AtArray;
        fn AiNodeGetMatrix(node: *const AtNode, param: AtString) -> AtMatrix;
    }
}
