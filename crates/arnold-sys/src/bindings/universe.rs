use std::ffi::c_int;

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_CACHE_TEXTURE: c_int = 0x0001;
pub const AI_CACHE_BACKGROUND: c_int = 0x0002;
pub const AI_CACHE_QUAD: c_int = 0x0004;
pub const AI_CACHE_VOLUME_DISPLAY: c_int = 0x0008;
pub const AI_CACHE_ALL: c_int =
    AI_CACHE_TEXTURE | AI_CACHE_BACKGROUND | AI_CACHE_QUAD | AI_CACHE_VOLUME_DISPLAY;

arnold_api! {
    pub struct UniverseApi => universe {
        fn AiUniverse() -> *mut AtUniverse;
        fn AiUniverseDestroy(universe: *mut AtUniverse);
        fn AiUniverseCacheFlush(universe: *mut AtUniverse, cache_flags: c_int) -> bool;
        fn AiUniverseGetOptions(universe: *const AtUniverse) -> *mut AtNode;
        fn AiUniverseGetCamera(universe: *const AtUniverse) -> *mut AtNode;
        fn AiUniverseGetSceneBounds(universe: *const AtUniverse) -> AtBBox;
        fn AiUniverseGetNodeIterator(universe: *const AtUniverse, node_mask: u32) -> *mut AtNodeIterator;
        fn AiUniverseGetNodeEntryIterator(node_mask: u32) -> *mut AtNodeEntryIterator;
        fn AiUniverseGetAOVIterator(universe: *const AtUniverse) -> *mut AtAOVIterator;
        fn AiUniverseAddDefaultNodes(universe: *mut AtUniverse, params: *const AtParamValueMap);
        fn AiUniverseGetRenderSession(universe: *const AtUniverse) -> *mut AtRenderSession;
        fn AiUniverseCompare(
            universe1: *const AtUniverse,
            universe2: *const AtUniverse,
            node_mask: u32,
            diffs: *mut AtParamValueMap,
        ) -> bool;
        fn AiUniverseGetId(universe: *const AtUniverse) -> u32;
        fn AiUniverseGetFromId(universe_id: u32) -> *mut AtUniverse;
        fn AiNodeIteratorDestroy(iter: *mut AtNodeIterator);
        fn AiNodeIteratorGetNext(iter: *mut AtNodeIterator) -> *mut AtNode;
        fn AiNodeIteratorFinished(iter: *const AtNodeIterator) -> bool;
        fn AiNodeEntryIteratorDestroy(iter: *mut AtNodeEntryIterator);
        fn AiNodeEntryIteratorGetNext(iter: *mut AtNodeEntryIterator) -> *mut AtNodeEntry;
        fn AiNodeEntryIteratorFinished(iter: *const AtNodeEntryIterator) -> bool;
        fn AiAOVIteratorDestroy(iter: *mut AtAOVIterator);
        fn AiAOVIteratorGetNext(iter: *mut AtAOVIterator) -> *const AtAOVEntry;
        fn AiAOVIteratorFinished(iter: *const AtAOVIterator) -> bool;
    }
}
