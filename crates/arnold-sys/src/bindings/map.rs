//! String-keyed maps of typed values, used to pass options to scene
//! loading/writing and to carry message metadata.

use std::ffi::{c_int, c_void};

use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct ParamValueMapApi => map {
        fn AiParamValueMap() -> *mut AtParamValueMap;
        fn AiParamValueMapDestroy(map: *mut AtParamValueMap);
        fn AiParamValueMapGetIterator(map: *const AtParamValueMap) -> *mut AtParamValueMapIterator;
        fn AiParamValueMapMerge(target_map: *mut AtParamValueMap, src_map: *const AtParamValueMap);
        fn AiParamValueMapClone(src_map: *const AtParamValueMap) -> *mut AtParamValueMap;

        fn AiParamValueMapSetBool(map: *mut AtParamValueMap, name: AtString, value: bool);
        fn AiParamValueMapSetInt(map: *mut AtParamValueMap, name: AtString, value: c_int);
        fn AiParamValueMapSetFlt(map: *mut AtParamValueMap, name: AtString, value: f32);
        fn AiParamValueMapSetRGB(map: *mut AtParamValueMap, name: AtString, value: AtRGB);
        fn AiParamValueMapSetVec(map: *mut AtParamValueMap, name: AtString, value: AtVector);
        fn AiParamValueMapSetVec2(map: *mut AtParamValueMap, name: AtString, value: AtVector2);
        fn AiParamValueMapSetStr(map: *mut AtParamValueMap, name: AtString, value: AtString);
        fn AiParamValueMapSetArray(map: *mut AtParamValueMap, name: AtString, value: *mut AtArray);
        fn AiParamValueMapSetPtr(map: *mut AtParamValueMap, name: AtString, value: *mut c_void);

        fn AiParamValueMapGetBool(map: *const AtParamValueMap, name: AtString, value: *mut bool) -> bool;
        fn AiParamValueMapGetInt(map: *const AtParamValueMap, name: AtString, value: *mut c_int) -> bool;
        fn AiParamValueMapGetFlt(map: *const AtParamValueMap, name: AtString, value: *mut f32) -> bool;
        fn AiParamValueMapGetRGB(map: *const AtParamValueMap, name: AtString, value: *mut AtRGB) -> bool;
        fn AiParamValueMapGetVec(map: *const AtParamValueMap, name: AtString, value: *mut AtVector) -> bool;
        fn AiParamValueMapGetVec2(map: *const AtParamValueMap, name: AtString, value: *mut AtVector2) -> bool;
        fn AiParamValueMapGetStr(map: *const AtParamValueMap, name: AtString, value: *mut AtString) -> bool;
        fn AiParamValueMapGetArray(map: *const AtParamValueMap, name: AtString, value: *mut *mut AtArray) -> bool;
        fn AiParamValueMapGetPtr(map: *const AtParamValueMap, name: AtString, value: *mut *mut c_void) -> bool;

        fn AiParamValueMapIteratorDestroy(iter: *mut AtParamValueMapIterator);
        fn AiParamValueMapIteratorGetNext(iter: *mut AtParamValueMapIterator) -> *const AtParamValueMapEntry;
        fn AiParamValueMapIteratorFinished(iter: *const AtParamValueMapIterator) -> bool;
    }
}
