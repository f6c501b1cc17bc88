use arnold_sys as sys;

use crate::iter::NativeIter;
use crate::string::{c_str_to_string, to_c_string};
use crate::Result;

/// A scene file format the renderer can read or write, built in or added by
/// a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneFormat {
    pub name: String,
    pub description: Option<String>,
    /// Extensions including the leading dot, e.g. `".ass"`.
    pub extensions: Vec<String>,
    pub reads: bool,
    pub writes: bool,
}

impl SceneFormat {
    /// Every registered format.
    pub fn all() -> Vec<SceneFormat> {
        let formats = unsafe {
            NativeIter::new(
                sys::AiSceneFormatIterator(),
                sys::AiSceneFormatIteratorGetNext,
                sys::AiSceneFormatIteratorFinished,
                sys::AiSceneFormatIteratorDestroy,
            )
        };
        formats
            .map(|data| unsafe { SceneFormat::from_raw(data.as_ptr()) })
            .collect()
    }

    /// # Safety
    /// `data` must come from a scene format iterator.
    unsafe fn from_raw(data: *const sys::AtSceneFormatData) -> SceneFormat {
        unsafe {
            let extensions = NativeIter::new(
                sys::AiSceneFormatGetExtensionIterator(data),
                sys::AiSceneFormatExtensionIteratorGetNext,
                sys::AiSceneFormatExtensionIteratorFinished,
                sys::AiSceneFormatExtensionIteratorDestroy,
            )
            .filter_map(|ext| c_str_to_string(ext.as_ptr()))
            .collect();
            SceneFormat {
                name: c_str_to_string(sys::AiSceneFormatGetName(data)).unwrap_or_default(),
                description: c_str_to_string(sys::AiSceneFormatGetDescription(data)),
                extensions,
                reads: sys::AiSceneFormatSupportsReading(data),
                writes: sys::AiSceneFormatSupportsWriting(data),
            }
        }
    }
}

/// Whether a file with `extension` (e.g. `".usd"`) can be loaded or written.
pub fn format_supported(extension: &str) -> Result<bool> {
    let extension = to_c_string(extension)?;
    Ok(unsafe { sys::AiSceneFormatSupported(extension.as_ptr()) })
}
