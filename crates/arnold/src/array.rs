use std::ffi::c_int;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use arnold_sys as sys;
use sys::{AtMatrix, AtRGB, AtRGBA, AtVector, AtVector2};

use crate::error::{check, non_null};
use crate::param::ParamType;
use crate::string::{at_string_to_string, narrow_string, narrow_vec2, to_at_string};
use crate::{Error, Result};

/// Element types an [`Array`] can be built from or viewed as.
///
/// # Safety
/// `TYPE` must be the tag the renderer uses for arrays of `Self`, with the
/// same layout.
pub unsafe trait ArrayElement: Copy {
    const TYPE: ParamType;
}

macro_rules! array_element {
    ($($ty:ty => $param:ident),* $(,)?) => {
        $(unsafe impl ArrayElement for $ty {
            const TYPE: ParamType = ParamType::$param;
        })*
    };
}

array_element! {
    u8 => Byte,
    c_int => Int,
    u32 => UInt,
    bool => Boolean,
    f32 => Float,
    AtRGB => Rgb,
    AtRGBA => Rgba,
    AtVector => Vector,
    AtVector2 => Vector2,
    AtMatrix => Matrix,
}

/// An array of parameter values, optionally with several motion keys.
///
/// Arrays built here are owned and destroyed on drop unless handed to a node
/// with [`Node::set_array`](crate::Node::set_array). Arrays read from a node
/// are borrowed for `'a`.
pub struct Array<'a> {
    handle: NonNull<sys::AtArray>,
    owned: bool,
    _borrow: PhantomData<&'a ()>,
}

macro_rules! element_accessors {
    ($($get:ident / $set:ident: $ty:ty => $ai_get:ident / $ai_set:ident;)*) => {
        $(
            pub fn $get(&self, index: u32) -> Option<$ty> {
                (index < self.len()).then(|| unsafe { sys::$ai_get(self.as_ptr(), index) })
            }

            pub fn $set(&mut self, index: u32, value: $ty) -> Result<()> {
                check(unsafe { sys::$ai_set(self.as_mut_ptr(), index, value) }, stringify!($ai_set))
            }
        )*
    };
}

impl Array<'static> {
    /// A zeroed array of `len` elements and `keys` motion keys.
    pub fn allocate(len: u32, keys: u8, element: ParamType) -> Result<Array<'static>> {
        let handle = non_null(
            unsafe { sys::AiArrayAllocate(len, keys, element.to_raw()) },
            "AiArrayAllocate",
        )?;
        Ok(Array::owned(handle))
    }

    /// Copies `values` into a single key array.
    pub fn from_slice<T: ArrayElement>(values: &[T]) -> Result<Array<'static>> {
        Array::from_keys(values, 1)
    }

    /// Copies `values` into an array of `keys` motion keys, laid out key
    /// after key. `values` must split evenly into the keys.
    pub fn from_keys<T: ArrayElement>(values: &[T], keys: u8) -> Result<Array<'static>> {
        let keys = keys.max(1);
        if values.len() % usize::from(keys) != 0 {
            return Err(Error::KeyMismatch { len: values.len(), keys });
        }
        let len = u32::try_from(values.len() / usize::from(keys)).map_err(|_| Error::Failed("AiArrayConvert"))?;
        let handle = non_null(
            unsafe { sys::AiArrayConvert(len, keys, T::TYPE.to_raw(), values.as_ptr().cast()) },
            "AiArrayConvert",
        )?;
        Ok(Array::owned(handle))
    }

    fn owned(handle: NonNull<sys::AtArray>) -> Array<'static> {
        Array {
            handle,
            owned: true,
            _borrow: PhantomData,
        }
    }

    /// Gives up ownership, the caller becomes responsible for the array.
    /// `None` for a borrowed array, which was never ours to give.
    pub fn into_raw(self) -> Option<*mut sys::AtArray> {
        if !self.owned {
            return None;
        }
        let ptr = self.handle.as_ptr();
        mem::forget(self);
        Some(ptr)
    }
}

impl<'a> Array<'a> {
    /// # Safety
    /// A non-null `ptr` must stay valid for `'a`.
    pub(crate) unsafe fn borrowed(ptr: *mut sys::AtArray) -> Option<Array<'a>> {
        NonNull::new(ptr).map(|handle| Array {
            handle,
            owned: false,
            _borrow: PhantomData,
        })
    }

    /// This array if it is owned, a copy of it otherwise.
    pub fn into_owned(self) -> Result<Array<'static>> {
        if !self.owned {
            return self.try_clone();
        }
        let handle = self.handle;
        mem::forget(self);
        Ok(Array::owned(handle))
    }

    pub fn is_owned(&self) -> bool {
        self.owned
    }

    pub fn as_ptr(&self) -> *const sys::AtArray {
        self.handle.as_ptr()
    }

    fn as_mut_ptr(&mut self) -> *mut sys::AtArray {
        self.handle.as_ptr()
    }

    /// Elements per key.
    pub fn len(&self) -> u32 {
        unsafe { sys::AiArrayGetNumElements(self.as_ptr()) }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn num_keys(&self) -> u8 {
        unsafe { sys::AiArrayGetNumKeys(self.as_ptr()) }
    }

    pub fn element_type(&self) -> Option<ParamType> {
        ParamType::from_raw(unsafe { sys::AiArrayGetType(self.as_ptr()) })
    }

    /// Bytes taken by all keys.
    pub fn data_size(&self) -> usize {
        unsafe { sys::AiArrayGetDataSize(self.as_ptr()) }
    }

    /// An owned deep copy.
    pub fn try_clone(&self) -> Result<Array<'static>> {
        let handle = non_null(unsafe { sys::AiArrayCopy(self.as_ptr()) }, "AiArrayCopy")?;
        Ok(Array::owned(handle))
    }

    pub fn resize(&mut self, len: u32, keys: u8) {
        unsafe { sys::AiArrayResize(self.as_mut_ptr(), len, keys) };
    }

    /// Copies out every key, `None` when `T` is not the element type.
    pub fn to_vec<T: ArrayElement>(&self) -> Option<Vec<T>> {
        if self.element_type() != Some(T::TYPE) {
            return None;
        }
        let count = self.len() as usize * usize::from(self.num_keys());
        let mut out = Vec::with_capacity(count);
        unsafe {
            let data = sys::AiArrayMapConst(self.as_ptr()).cast::<T>();
            if !data.is_null() {
                out.extend_from_slice(std::slice::from_raw_parts(data, count));
            }
            sys::AiArrayUnmapConst(self.as_ptr());
        }
        Some(out)
    }

    element_accessors! {
        bool / set_bool: bool => AiArrayGetBool / AiArraySetBool;
        byte / set_byte: u8 => AiArrayGetByte / AiArraySetByte;
        int / set_int: c_int => AiArrayGetInt / AiArraySetInt;
        uint / set_uint: u32 => AiArrayGetUInt / AiArraySetUInt;
        flt / set_flt: f32 => AiArrayGetFlt / AiArraySetFlt;
        rgb / set_rgb: AtRGB => AiArrayGetRGB / AiArraySetRGB;
        rgba / set_rgba: AtRGBA => AiArrayGetRGBA / AiArraySetRGBA;
        vec / set_vec: AtVector => AiArrayGetVec / AiArraySetVec;
        matrix / set_matrix: AtMatrix => AiArrayGetMtx / AiArraySetMtx;
    }

    pub fn vec2(&self, index: u32) -> Option<AtVector2> {
        (index < self.len()).then(|| narrow_vec2(unsafe { sys::AiArrayGetVec2(self.as_ptr(), index) }))
    }

    pub fn set_vec2(&mut self, index: u32, value: AtVector2) -> Result<()> {
        check(unsafe { sys::AiArraySetVec2(self.as_mut_ptr(), index, value) }, "AiArraySetVec2")
    }

    /// `Some(None)` for an element holding the empty string.
    pub fn str(&self, index: u32) -> Option<Option<String>> {
        (index < self.len()).then(|| unsafe {
            at_string_to_string(narrow_string(sys::AiArrayGetStr(self.as_ptr(), index)))
        })
    }

    pub fn set_str(&mut self, index: u32, value: &str) -> Result<()> {
        let value = to_at_string(value)?;
        check(unsafe { sys::AiArraySetStr(self.as_mut_ptr(), index, value) }, "AiArraySetStr")
    }

    /// Value of element `index` at `time` in `[0, 1]`, interpolated between
    /// motion keys.
    pub fn interpolate_flt(&self, time: f32, index: u32) -> f32 {
        unsafe { sys::AiArrayInterpolateFlt(self.as_ptr(), time, index) }
    }

    pub fn interpolate_vec(&self, time: f32, index: u32) -> AtVector {
        unsafe { sys::AiArrayInterpolateVec(self.as_ptr(), time, index) }
    }

    pub fn interpolate_rgb(&self, time: f32, index: u32) -> AtRGB {
        unsafe { sys::AiArrayInterpolateRGB(self.as_ptr(), time, index) }
    }

    pub fn interpolate_matrix(&self, time: f32, index: u32) -> AtMatrix {
        unsafe { sys::AiArrayInterpolateMtx(self.as_ptr(), time, index) }
    }
}

impl Drop for Array<'_> {
    fn drop(&mut self) {
        if self.owned {
            unsafe { sys::AiArrayDestroy(self.handle.as_ptr()) };
        }
    }
}

impl std::fmt::Debug for Array<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Array")
            .field("len", &self.len())
            .field("keys", &self.num_keys())
            .field("type", &self.element_type())
            .field("owned", &self.owned)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use super::*;

    #[test]
    fn test_element_tags() {
        assert_eq!(<f32 as ArrayElement>::TYPE.to_raw(), sys::AI_TYPE_FLOAT);
        assert_eq!(<AtVector as ArrayElement>::TYPE.to_raw(), sys::AI_TYPE_VECTOR);
        assert_eq!(<bool as ArrayElement>::TYPE.to_raw(), sys::AI_TYPE_BOOLEAN);
        assert_eq!(<AtMatrix as ArrayElement>::TYPE.to_raw(), sys::AI_TYPE_MATRIX);
    }

    #[test]
    fn test_borrowed_null_is_none() {
        assert!(unsafe { Array::borrowed(std::ptr::null_mut()) }.is_none());
    }

    #[test]
    fn test_from_keys_rejects_uneven_split() {
        let err = Array::from_keys(&[1.0f32, 2.0, 3.0], 2).err().unwrap();
        assert!(matches!(err, Error::KeyMismatch { len: 3, keys: 2 }));
        let err = Array::from_keys(&[AtVector::new(0.0, 0.0, 0.0); 5], 3).err().unwrap();
        assert_eq!(err.to_string(), "5 values do not split into 3 motion keys");
    }

    #[test]
    fn test_borrowed_into_raw_is_none() {
        // Borrowed arrays are never destroyed, the pointer is not touched
        let borrowed: Array<'static> = unsafe { Array::borrowed(NonNull::dangling().as_ptr()) }.unwrap();
        assert!(!borrowed.is_owned());
        assert!(borrowed.into_raw().is_none());
    }

    #[test]
    fn test_element_sizes_match_native() {
        assert_eq!(size_of::<AtRGB>(), 12);
        assert_eq!(size_of::<AtVector2>(), 8);
        assert_eq!(size_of::<bool>(), 1);
        assert_eq!(size_of::<AtMatrix>(), 64);
    }
}
