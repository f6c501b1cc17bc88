//! Keyed value containers passed to scene I/O and filled by universe
//! comparison.

use std::ffi::c_int;
use std::path::Path;
use std::ptr::NonNull;

use arnold_sys as sys;
use sys::{AtRGB, AtString, AtVector, AtVector2};

use crate::error::{check, non_null};
use crate::iter::NativeIter;
use crate::param::{ParamType, ParamValue};
use crate::string::{at_string_to_string, path_to_c_string, to_at_string, to_at_string_opt, to_c_string};
use crate::{MetaData, Result};

/// Named parameters, e.g. the options of [`Universe::load_scene`](crate::Universe::load_scene).
pub struct ParamValueMap {
    pub(crate) handle: NonNull<sys::AtParamValueMap>,
}

macro_rules! map_accessors {
    ($($get:ident / $set:ident: $ty:ty = $init:expr => $ai_get:ident / $ai_set:ident;)*) => {
        $(
            pub fn $get(&self, name: &str) -> Result<Option<$ty>> {
                let name = to_at_string(name)?;
                let mut value = $init;
                let found = unsafe { sys::$ai_get(self.as_ptr(), name, &mut value) };
                Ok(found.then_some(value))
            }

            pub fn $set(&mut self, name: &str, value: $ty) -> Result<()> {
                let name = to_at_string(name)?;
                unsafe { sys::$ai_set(self.handle.as_ptr(), name, value) };
                Ok(())
            }
        )*
    };
}

impl ParamValueMap {
    pub fn new() -> Result<ParamValueMap> {
        let handle = non_null(unsafe { sys::AiParamValueMap() }, "AiParamValueMap")?;
        Ok(ParamValueMap { handle })
    }

    pub fn as_ptr(&self) -> *const sys::AtParamValueMap {
        self.handle.as_ptr()
    }

    map_accessors! {
        bool / set_bool: bool = false => AiParamValueMapGetBool / AiParamValueMapSetBool;
        int / set_int: c_int = 0 => AiParamValueMapGetInt / AiParamValueMapSetInt;
        flt / set_flt: f32 = 0.0 => AiParamValueMapGetFlt / AiParamValueMapSetFlt;
        rgb / set_rgb: AtRGB = AtRGB::default() => AiParamValueMapGetRGB / AiParamValueMapSetRGB;
        vec / set_vec: AtVector = AtVector::default() => AiParamValueMapGetVec / AiParamValueMapSetVec;
        vec2 / set_vec2: AtVector2 = AtVector2::default() => AiParamValueMapGetVec2 / AiParamValueMapSetVec2;
    }

    pub fn str(&self, name: &str) -> Result<Option<String>> {
        let name = to_at_string(name)?;
        let mut value = AtString::null();
        let found = unsafe { sys::AiParamValueMapGetStr(self.as_ptr(), name, &mut value) };
        Ok(if found { unsafe { at_string_to_string(value) } } else { None })
    }

    pub fn set_str(&mut self, name: &str, value: &str) -> Result<()> {
        let name = to_at_string(name)?;
        let value = to_at_string(value)?;
        unsafe { sys::AiParamValueMapSetStr(self.handle.as_ptr(), name, value) };
        Ok(())
    }

    /// Copies every entry of `other` into this map, replacing duplicates.
    pub fn merge(&mut self, other: &ParamValueMap) {
        unsafe { sys::AiParamValueMapMerge(self.handle.as_ptr(), other.as_ptr()) };
    }

    pub fn try_clone(&self) -> Result<ParamValueMap> {
        let handle = non_null(unsafe { sys::AiParamValueMapClone(self.as_ptr()) }, "AiParamValueMapClone")?;
        Ok(ParamValueMap { handle })
    }

    /// Every entry with its decoded value.
    pub fn entries(&self) -> Vec<(String, ParamValue)> {
        let iter = unsafe {
            NativeIter::new(
                sys::AiParamValueMapGetIterator(self.as_ptr()),
                sys::AiParamValueMapIteratorGetNext,
                sys::AiParamValueMapIteratorFinished,
                sys::AiParamValueMapIteratorDestroy,
            )
        };
        iter.map(|entry| unsafe {
            let entry = entry.as_ref();
            let value = match ParamType::from_raw(entry.type_) {
                Some(ty) => ParamValue::read(ty, &entry.value, &[]),
                None => ParamValue::Unsupported(None),
            };
            (at_string_to_string(entry.name).unwrap_or_default(), value)
        })
        .collect()
    }
}

impl Drop for ParamValueMap {
    fn drop(&mut self) {
        unsafe { sys::AiParamValueMapDestroy(self.handle.as_ptr()) };
    }
}

/// Metadata written alongside a scene by [`Universe::write_scene`](crate::Universe::write_scene),
/// or read from one.
pub struct MetadataStore {
    pub(crate) handle: NonNull<sys::AtMetadataStore>,
}

macro_rules! store_accessors {
    ($($get:ident / $set:ident: $ty:ty = $init:expr =>
        $ai_get:ident / $ai_param_get:ident / $ai_set:ident / $ai_param_set:ident;)*) => {
        $(
            /// Reads `name` of `param`, or of the store itself when `param`
            /// is `None`.
            pub fn $get(&self, param: Option<&str>, name: &str) -> Result<Option<$ty>> {
                let name = to_at_string(name)?;
                let mut value = $init;
                let found = match param {
                    Some(param) => {
                        let param = to_at_string(param)?;
                        unsafe { sys::$ai_param_get(self.as_ptr(), param, name, &mut value) }
                    }
                    None => unsafe { sys::$ai_get(self.as_ptr(), name, &mut value) },
                };
                Ok(found.then_some(value))
            }

            pub fn $set(&mut self, param: Option<&str>, name: &str, value: $ty) -> Result<()> {
                let name = to_at_string(name)?;
                match param {
                    Some(param) => {
                        let param = to_at_string(param)?;
                        unsafe { sys::$ai_param_set(self.handle.as_ptr(), param, name, value) };
                    }
                    None => unsafe { sys::$ai_set(self.handle.as_ptr(), name, value) },
                }
                Ok(())
            }
        )*
    };
}

impl MetadataStore {
    pub fn new() -> Result<MetadataStore> {
        let handle = non_null(unsafe { sys::AiMetadataStore() }, "AiMetadataStore")?;
        Ok(MetadataStore { handle })
    }

    pub fn as_ptr(&self) -> *const sys::AtMetadataStore {
        self.handle.as_ptr()
    }

    /// Reads the metadata of a `.ass` file without loading its nodes.
    pub fn load_from_ass(&mut self, path: &Path) -> Result<()> {
        let path = path_to_c_string(path)?;
        check(
            unsafe { sys::AiMetadataStoreLoadFromASS(self.handle.as_ptr(), path.as_ptr()) },
            "AiMetadataStoreLoadFromASS",
        )
    }

    store_accessors! {
        bool / set_bool: bool = false =>
            AiMetadataStoreGetBool / AiMetadataStoreParamGetBool / AiMetadataStoreSetBool / AiMetadataStoreParamSetBool;
        int / set_int: c_int = 0 =>
            AiMetadataStoreGetInt / AiMetadataStoreParamGetInt / AiMetadataStoreSetInt / AiMetadataStoreParamSetInt;
        flt / set_flt: f32 = 0.0 =>
            AiMetadataStoreGetFlt / AiMetadataStoreParamGetFlt / AiMetadataStoreSetFlt / AiMetadataStoreParamSetFlt;
        rgb / set_rgb: AtRGB = AtRGB::default() =>
            AiMetadataStoreGetRGB / AiMetadataStoreParamGetRGB / AiMetadataStoreSetRGB / AiMetadataStoreParamSetRGB;
        vec / set_vec: AtVector = AtVector::default() =>
            AiMetadataStoreGetVec / AiMetadataStoreParamGetVec / AiMetadataStoreSetVec / AiMetadataStoreParamSetVec;
        vec2 / set_vec2: AtVector2 = AtVector2::default() =>
            AiMetadataStoreGetVec2 / AiMetadataStoreParamGetVec2 / AiMetadataStoreSetVec2 / AiMetadataStoreParamSetVec2;
    }

    pub fn str(&self, param: Option<&str>, name: &str) -> Result<Option<String>> {
        let name = to_at_string(name)?;
        let mut value = AtString::null();
        let found = match param {
            Some(param) => {
                let param = to_at_string(param)?;
                unsafe { sys::AiMetadataStoreParamGetStr(self.as_ptr(), param, name, &mut value) }
            }
            None => unsafe { sys::AiMetadataStoreGetStr(self.as_ptr(), name, &mut value) },
        };
        Ok(if found { unsafe { at_string_to_string(value) } } else { None })
    }

    pub fn set_str(&mut self, param: Option<&str>, name: &str, value: &str) -> Result<()> {
        let param = to_at_string_opt(param)?;
        let name = to_at_string(name)?;
        let value = to_at_string(value)?;
        unsafe {
            if param.is_null() {
                sys::AiMetadataStoreSetStr(self.handle.as_ptr(), name, value);
            } else {
                sys::AiMetadataStoreParamSetStr(self.handle.as_ptr(), param, name, value);
            }
        }
        Ok(())
    }

    /// Every item in the store. With `param` set, only that parameter's items
    /// are listed, and `recursive` also lists the items of its children.
    pub fn entries(&self, param: Option<&str>, recursive: bool) -> Result<Vec<MetaData>> {
        let param = param.map(to_c_string).transpose()?;
        let handle = match &param {
            Some(param) => unsafe {
                sys::AiMetadataStoreGetIteratorRecursive(self.as_ptr(), param.as_ptr(), recursive)
            },
            None => unsafe { sys::AiMetadataStoreGetIterator(self.as_ptr()) },
        };
        let iter = unsafe {
            NativeIter::new(
                handle,
                sys::AiMetaDataIteratorGetNext,
                sys::AiMetaDataIteratorFinished,
                sys::AiMetaDataIteratorDestroy,
            )
        };
        Ok(iter.map(|entry| unsafe { MetaData::from_entry(entry.as_ref()) }).collect())
    }
}

impl Drop for MetadataStore {
    fn drop(&mut self) {
        unsafe { sys::AiMetadataStoreDestroy(self.handle.as_ptr()) };
    }
}
