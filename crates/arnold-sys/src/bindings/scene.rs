use std::ffi::c_char;

use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct SceneApi => scene {
        /// `params` may be null.
        fn AiSceneLoad(universe: *mut AtUniverse, filename: *const c_char, params: *const AtParamValueMap) -> bool;
        /// `params` and `mds` may be null.
        fn AiSceneWrite(
            universe: *mut AtUniverse,
            filename: *const c_char,
            params: *const AtParamValueMap,
            mds: *const AtMetadataStore,
        ) -> bool;
        fn AiSceneFormatSupported(extension: *const c_char) -> bool;
        fn AiSceneFormatIterator() -> *mut AtSceneFormatIterator;
        fn AiSceneFormatIteratorDestroy(iter: *mut AtSceneFormatIterator);
        fn AiSceneFormatIteratorGetNext(iter: *mut AtSceneFormatIterator) -> *const AtSceneFormatData;
        fn AiSceneFormatIteratorFinished(iter: *const AtSceneFormatIterator) -> bool;
        fn AiSceneFormatGetExtensionIterator(format_data: *const AtSceneFormatData) -> *mut AtSceneFormatExtensionIterator;
        fn AiSceneFormatExtensionIteratorDestroy(iter: *mut AtSceneFormatExtensionIterator);
        fn AiSceneFormatExtensionIteratorGetNext(iter: *mut AtSceneFormatExtensionIterator) -> *const c_char;
        fn AiSceneFormatExtensionIteratorFinished(iter: *const AtSceneFormatExtensionIterator) -> bool;
        fn AiSceneFormatGetName(format_data: *const AtSceneFormatData) -> *const c_char;
        fn AiSceneFormatGetDescription(format_data: *const AtSceneFormatData) -> *const c_char;
        fn AiSceneFormatSupportsReading(format_data: *const AtSceneFormatData) -> bool;
        fn AiSceneFormatSupportsWriting(format_data: *const AtSceneFormatData) -> bool;
        fn AiSceneFormatGetMetadataStore(format_data: *const AtSceneFormatData) -> *const AtMetadataStore;
    }
}
