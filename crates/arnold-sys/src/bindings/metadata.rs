//! Node entry metadata and standalone metadata stores.

use std::ffi::{c_char, c_int};

use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct MetadataApi => metadata {
        fn AiMetaDataLoadFile(filename: *const c_char) -> bool;
        fn AiMetaDataGetBool(nentry: *const AtNodeEntry, param: AtString, name: AtString, value: *mut bool) -> bool;
        fn AiMetaDataGetInt(nentry: *const AtNodeEntry, param: AtString, name: AtString, value: *mut c_int) -> bool;
        fn AiMetaDataGetFlt(nentry: *const AtNodeEntry, param: AtString, name: AtString, value: *mut f32) -> bool;
        fn AiMetaDataGetRGB(nentry: *const AtNodeEntry, param: AtString, name: AtString, value: *mut AtRGB) -> bool;
        fn AiMetaDataGetRGBA(nentry: *const AtNodeEntry, param: AtString, name: AtString, value: *mut AtRGBA) -> bool;
        fn AiMetaDataGetVec(nentry: *const AtNodeEntry, param: AtString, name: AtString, value: *mut AtVector) -> bool;
        fn AiMetaDataGetVec2(nentry: *const AtNodeEntry, param: AtString, name: AtString, value: *mut AtVector2) -> bool;
        fn AiMetaDataGetStr(nentry: *const AtNodeEntry, param: AtString, name: AtString, value: *mut AtString) -> bool;

        fn AiMetadataStore() -> *mut AtMetadataStore;
        fn AiMetadataStoreDestroy(mds: *mut AtMetadataStore);
        fn AiMetadataStoreLoadFromASS(mds: *mut AtMetadataStore, file: *const c_char) -> bool;
        fn AiMetadataStoreGetIterator(mds: *const AtMetadataStore) -> *mut AtMetaDataIterator;
        fn AiMetadataStoreGetIteratorRecursive(mds: *const AtMetadataStore, param: *const c_char, recursive: bool) -> *mut AtMetaDataIterator;
        fn AiMetadataStoreSetBool(mds: *mut AtMetadataStore, name: AtString, value: bool);
        fn AiMetadataStoreParamSetBool(mds: *mut AtMetadataStore, param: AtString, name: AtString, value: bool);
        fn AiMetadataStoreSetInt(mds: *mut AtMetadataStore, name: AtString, value: c_int);
        fn AiMetadataStoreParamSetInt(mds: *mut AtMetadataStore, param: AtString, name: AtString, value: c_int);
        fn AiMetadataStoreSetFlt(mds: *mut AtMetadataStore, name: AtString, value: f32);
        fn AiMetadataStoreParamSetFlt(mds: *mut AtMetadataStore, param: AtString, name: AtString, value: f32);
        fn AiMetadataStoreSetRGB(mds: *mut AtMetadataStore, name: AtString, value: AtRGB);
        fn AiMetadataStoreParamSetRGB(mds: *mut AtMetadataStore, param: AtString, name: AtString, value: AtRGB);
        fn AiMetadataStoreSetVec(mds: *mut AtMetadataStore, name: AtString, value: AtVector);
        fn AiMetadataStoreParamSetVec(mds: *mut AtMetadataStore, param: AtString, name: AtString, value: AtVector);
        fn AiMetadataStoreSetVec2(mds: *mut AtMetadataStore, name: AtString, value: AtVector2);
        fn AiMetadataStoreParamSetVec2(mds: *mut AtMetadataStore, param: AtString, name: AtString, value: AtVector2);
        fn AiMetadataStoreSetStr(mds: *mut AtMetadataStore, name: AtString, value: AtString);
        fn AiMetadataStoreParamSetStr(mds: *mut AtMetadataStore, param: AtString, name: AtString, value: AtString);
        fn AiMetadataStoreGetBool(mds: *const AtMetadataStore, name: AtString, value: *mut bool) -> bool;
        fn AiMetadataStoreParamGetBool(mds: *const AtMetadataStore, param: AtString, name: AtString, value: *mut bool) -> bool;
        fn AiMetadataStoreGetInt(mds: *const AtMetadataStore, name: AtString, value: *mut c_int) -> bool;
        fn AiMetadataStoreParamGetInt(mds: *const AtMetadataStore, param: AtString, name: AtString, value: *mut c_int) -> bool;
        fn AiMetadataStoreGetFlt(mds: *const AtMetadataStore, name: AtString, value: *mut f32) -> bool;
        fn AiMetadataStoreParamGetFlt(mds: *const AtMetadataStore, param: AtString, name: AtString, value: *mut f32) -> bool;
        fn AiMetadataStoreGetRGB(mds: *const AtMetadataStore, name: AtString, value: *mut AtRGB) -> bool;
        fn AiMetadataStoreParamGetRGB(mds: *const AtMetadataStore, param: AtString, name: AtString, value: *mut AtRGB) -> bool;
        fn AiMetadataStoreGetVec(mds: *const AtMetadataStore, name: AtString, value: *mut AtVector) -> bool;
        fn AiMetadataStoreParamGetVec(mds: *const AtMetadataStore, param: AtString, name: AtString, value: *mut AtVector) -> bool;
        fn AiMetadataStoreGetVec2(mds: *const AtMetadataStore, name: AtString, value: *mut AtVector2) -> bool;
        fn AiMetadataStoreParamGetVec2(mds: *const AtMetadataStore, param: AtString, name: AtString, value: *mut AtVector2) -> bool;
        fn AiMetadataStoreGetStr(mds: *const AtMetadataStore, name: AtString, value: *mut AtString) -> bool;
        fn AiMetadataStoreParamGetStr(mds: *const AtMetadataStore, param: AtString, name: AtString, value: *mut AtString) -> bool;
    }
}
