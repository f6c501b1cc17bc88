//! Plugin loading and the search paths the renderer resolves files against.

use std::path::Path;

use arnold_sys as sys;
use tracing::info;

use crate::string::{at_string_to_string, narrow_string, path_to_c_string, to_c_string};
use crate::Result;

/// What kind of file [`resolve_file_path`] looks for, which picks the
/// search path it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Searched in the path given to [`resolve_file_path`].
    Custom,
    Texture,
    Osl,
    Procedural,
    Plugin,
}

impl From<FileType> for sys::AtFileType {
    fn from(value: FileType) -> Self {
        match value {
            FileType::Custom => sys::AI_FILE_TYPE_CUSTOM,
            FileType::Texture => sys::AI_FILE_TYPE_TEXTURE,
            FileType::Osl => sys::AI_FILE_TYPE_OSL,
            FileType::Procedural => sys::AI_FILE_TYPE_PROCEDURAL,
            FileType::Plugin => sys::AI_FILE_TYPE_PLUGIN,
        }
    }
}

/// Loads every plugin found in `directory`. Several directories may be
/// given separated by the platform's path separator.
pub fn load_plugins(directory: &Path) -> Result<()> {
    let c_directory = path_to_c_string(directory)?;
    unsafe { sys::AiLoadPlugins(c_directory.as_ptr()) };
    info!("Loaded plugins from {}", directory.display());
    Ok(())
}

/// Finds `path` on the search path for `file_type`. `custom_path` is only
/// consulted for [`FileType::Custom`].
pub fn resolve_file_path(path: &str, file_type: FileType, custom_path: Option<&str>) -> Result<Option<String>> {
    let path = to_c_string(path)?;
    let custom_path = custom_path.map(to_c_string).transpose()?;
    let custom_ptr = custom_path.as_ref().map_or(std::ptr::null(), |p| p.as_ptr());
    let resolved = narrow_string(unsafe { sys::AiResolveFilePath(path.as_ptr(), file_type.into(), custom_ptr) });
    Ok(unsafe { at_string_to_string(resolved) })
}

/// Loads node metadata from a `.mtd` file.
pub fn load_metadata_file(path: &Path) -> Result<()> {
    let path = path_to_c_string(path)?;
    crate::error::check(unsafe { sys::AiMetaDataLoadFile(path.as_ptr()) }, "AiMetaDataLoadFile")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_type_values() {
        assert_eq!(sys::AtFileType::from(FileType::Custom), sys::AI_FILE_TYPE_CUSTOM);
        assert_eq!(sys::AtFileType::from(FileType::Plugin), sys::AI_FILE_TYPE_PLUGIN);
    }
}
