use std::ffi::NulError;

use arnold_sys::LoadError;

use crate::device::DeviceError;
use crate::render::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("string contains an interior nul byte")]
    InteriorNul(#[from] NulError),
    /// The named function returned null.
    #[error("{0} returned null")]
    Null(&'static str),
    #[error("an Arnold session is already active")]
    SessionActive,
    /// An array's values don't divide into its motion keys.
    #[error("{len} values do not split into {keys} motion keys")]
    KeyMismatch { len: usize, keys: u8 },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Device(#[from] DeviceError),
    /// The named function reported failure.
    #[error("{0} failed")]
    Failed(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Turns the `bool` a native call returned into a [`Result`].
pub(crate) fn check(ok: bool, function: &'static str) -> Result<()> {
    if ok { Ok(()) } else { Err(Error::Failed(function)) }
}

/// Turns a possibly null pointer a native call returned into a [`Result`].
pub(crate) fn non_null<T>(ptr: *mut T, function: &'static str) -> Result<std::ptr::NonNull<T>> {
    std::ptr::NonNull::new(ptr).ok_or(Error::Null(function))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        assert!(check(true, "AiSceneLoad").is_ok());
        let err = check(false, "AiSceneLoad").unwrap_err();
        assert_eq!(err.to_string(), "AiSceneLoad failed");
    }

    #[test]
    fn test_non_null() {
        let mut value = 3;
        assert!(non_null(&mut value as *mut i32, "AiUniverse").is_ok());
        let err = non_null(std::ptr::null_mut::<i32>(), "AiUniverse").unwrap_err();
        assert!(matches!(err, Error::Null("AiUniverse")));
    }

    #[test]
    fn test_interior_nul() {
        let err: Error = std::ffi::CString::new("a\0b").unwrap_err().into();
        assert!(matches!(err, Error::InteriorNul(_)));
    }
}
