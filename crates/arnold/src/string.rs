//! Conversions between Rust strings and the renderer's string types.

use std::ffi::{CStr, CString, c_char};
use std::path::Path;

use arnold_sys as sys;
use sys::{AtString, AtStringReturn, AtVector2, AtVector2Return};

use crate::Result;

pub fn to_c_string(s: &str) -> Result<CString> {
    Ok(CString::new(s)?)
}

/// Paths that are not valid UTF-8 are passed on lossily, the renderer only
/// takes UTF-8 file names.
pub fn path_to_c_string(path: &Path) -> Result<CString> {
    to_c_string(&path.to_string_lossy())
}

/// Interns `s` in the renderer's string table.
pub fn to_at_string(s: &str) -> Result<AtString> {
    let s = to_c_string(s)?;
    let data = unsafe { sys::AiCreateAtStringData_private(s.as_ptr()) };
    Ok(AtString { data })
}

/// Like [`to_at_string`], mapping `None` to the null string the API reads as
/// "not given".
pub fn to_at_string_opt(s: Option<&str>) -> Result<AtString> {
    s.map_or(Ok(AtString::null()), to_at_string)
}

/// Reads an interned string, `None` when it is null.
///
/// # Safety
/// A non-null `s` must come from the renderer.
pub unsafe fn at_string_to_string(s: AtString) -> Option<String> {
    if s.is_null() {
        return None;
    }
    let bytes = unsafe {
        let len = sys::AiAtStringLength(s.data);
        std::slice::from_raw_parts(s.data.cast::<u8>(), len)
    };
    Some(decode_bytes(bytes))
}

/// # Safety
/// A non-null `ptr` must point to a nul-terminated string.
pub unsafe fn c_str_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let s = unsafe { CStr::from_ptr(ptr) };
    Some(decode_bytes(s.to_bytes()))
}

/// UTF-8 decoding, invalid sequences become U+FFFD.
pub fn decode_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Drops the padding Windows adds to returned strings.
#[allow(clippy::useless_conversion)]
pub fn narrow_string(value: AtStringReturn) -> AtString {
    value.into()
}

/// Drops the extra component Windows adds to returned 2D vectors.
#[allow(clippy::useless_conversion)]
pub fn narrow_vec2(value: AtVector2Return) -> AtVector2 {
    value.into()
}

/// Reads a null-terminated array of C strings such as an `AtEnum`.
///
/// # Safety
/// A non-null `list` must be terminated by a null entry.
pub unsafe fn c_str_list(list: *const *const c_char) -> Vec<String> {
    let mut out = Vec::new();
    if list.is_null() {
        return out;
    }
    let mut cursor = list;
    unsafe {
        while !(*cursor).is_null() {
            out.extend(c_str_to_string(*cursor));
            cursor = cursor.add(1);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn test_c_str_to_string() {
        let name = c"persp_camera";
        assert_eq!(
            unsafe { c_str_to_string(name.as_ptr()) }.as_deref(),
            Some("persp_camera")
        );
        assert_eq!(unsafe { c_str_to_string(ptr::null()) }, None);
    }

    #[test]
    fn test_decode_bytes_lossy() {
        assert_eq!(decode_bytes(b"utah_teapot"), "utah_teapot");
        assert_eq!(decode_bytes(b"bad\xffbyte"), "bad\u{fffd}byte");
    }

    #[test]
    fn test_null_at_string_is_absent() {
        assert_eq!(unsafe { at_string_to_string(AtString::null()) }, None);
    }

    #[test]
    fn test_c_str_list() {
        let values = [c"boxes".as_ptr(), c"points".as_ptr(), c"polygons".as_ptr(), ptr::null()];
        assert_eq!(
            unsafe { c_str_list(values.as_ptr()) },
            vec!["boxes", "points", "polygons"]
        );
        assert!(unsafe { c_str_list(ptr::null()) }.is_empty());
    }

    #[test]
    fn test_to_c_string_rejects_nul() {
        assert!(to_c_string("sphere").is_ok());
        assert!(to_c_string("sph\0ere").is_err());
    }

    #[test]
    fn test_path_to_c_string() {
        let path = Path::new("scenes").join("cornell.ass");
        let c = path_to_c_string(&path).unwrap();
        assert!(c.to_str().unwrap().ends_with("cornell.ass"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_narrow_is_identity() {
        let s = AtString { data: c"x".as_ptr() };
        assert_eq!(narrow_string(s), s);
        assert_eq!(narrow_vec2(AtVector2::new(1.0, 2.0)), AtVector2::new(1.0, 2.0));
    }

    #[cfg(windows)]
    #[test]
    fn test_narrow_drops_padding() {
        let ret = AtStringReturn { data: c"x".as_ptr(), workaround: 7 };
        assert_eq!(narrow_string(ret).data, ret.data);
        assert_eq!(
            narrow_vec2(sys::AtVector::new(1.0, 2.0, 3.0)),
            AtVector2::new(1.0, 2.0)
        );
    }
}
