use std::ffi::c_int;

use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct OperatorApi => operator {
        fn AiOpSetTarget(universe: *mut AtUniverse, node: *mut AtNode) -> bool;
        fn AiOpGetTarget(universe: *const AtUniverse) -> *mut AtNode;
        fn AiOpGetInputs(op: *mut AtNode) -> *mut AtArray;
        /// An `index` of -1 appends.
        fn AiOpLink(from: *mut AtNode, to: *mut AtNode, index: c_int) -> bool;
        fn AiOpUnlinkInputByIndex(to: *mut AtNode, index: u32) -> bool;
        fn AiOpUnlink(from: *mut AtNode, to: *mut AtNode) -> bool;
        fn AiOpMatchNodeSelection(node: *mut AtNode, selection: AtString, relative: bool, target: *mut AtNode) -> bool;
    }
}
