use std::ffi::c_char;
use std::fmt;
use std::str::FromStr;

use arnold_sys as sys;

use crate::string::{c_str_to_string, decode_bytes, to_c_string};
use crate::Result;

/// Version of the loaded renderer, `arch.major.minor.fix`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub arch: u32,
    pub major: u32,
    pub minor: u32,
    /// May carry a suffix such as `1.beta`, so it is kept as text.
    pub fix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version string {0:?}")]
pub struct ParseVersionError(String);

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(4, '.');
        let mut number = || -> std::result::Result<u32, ParseVersionError> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| ParseVersionError(s.to_string()))
        };
        let arch = number()?;
        let major = number()?;
        let minor = number()?;
        let fix = parts.next().unwrap_or("0").to_string();
        Ok(Version {
            arch,
            major,
            minor,
            fix,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.arch, self.major, self.minor, self.fix)
    }
}

/// The version these bindings were written against.
pub fn bound_version() -> Version {
    Version {
        arch: sys::AI_VERSION_ARCH_NUM,
        major: sys::AI_VERSION_MAJOR_NUM,
        minor: sys::AI_VERSION_MINOR_NUM,
        fix: sys::AI_VERSION_FIX.to_string(),
    }
}

/// Full version string of the loaded library, e.g. `"7.4.2.1"`.
pub fn version_string() -> String {
    let ptr = unsafe {
        sys::AiGetVersion(std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut(), std::ptr::null_mut())
    };
    unsafe { c_str_to_string(ptr) }.unwrap_or_default()
}

/// The loaded library's version, read component by component.
pub fn version() -> std::result::Result<Version, ParseVersionError> {
    let mut arch = [0 as c_char; sys::AI_VERSION_COMPONENT_LEN];
    let mut major = [0 as c_char; sys::AI_VERSION_COMPONENT_LEN];
    let mut minor = [0 as c_char; sys::AI_VERSION_COMPONENT_LEN];
    let mut fix = [0 as c_char; sys::AI_VERSION_FIX_LEN];
    unsafe {
        sys::AiGetVersion(arch.as_mut_ptr(), major.as_mut_ptr(), minor.as_mut_ptr(), fix.as_mut_ptr());
    }
    let joined = [&arch[..], &major[..], &minor[..], &fix[..]]
        .map(buffer_to_string)
        .join(".");
    joined.parse()
}

fn buffer_to_string(buffer: &[c_char]) -> String {
    let bytes: Vec<u8> = buffer.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
    decode_bytes(&bytes)
}

/// Build date, platform and compiler of the loaded library.
pub fn version_info() -> String {
    unsafe { c_str_to_string(sys::AiGetVersionInfo()) }.unwrap_or_default()
}

pub fn compile_options() -> String {
    unsafe { c_str_to_string(sys::AiGetCompileOptions()) }.unwrap_or_default()
}

/// Whether a plugin built against `arch.major.minor` can run on the loaded
/// library.
pub fn check_api_version(arch: &str, major: &str, minor: &str) -> Result<bool> {
    let arch = to_c_string(arch)?;
    let major = to_c_string(major)?;
    let minor = to_c_string(minor)?;
    Ok(unsafe { sys::AiCheckAPIVersion(arch.as_ptr(), major.as_ptr(), minor.as_ptr()) })
}

/// Licence notices of the renderer's third-party components, or of its
/// plugins' when `plugins` is set.
pub fn copyright_notices(plugins: bool) -> String {
    let kind = if plugins {
        sys::AI_COPYRIGHT_NOTICES_PLUGINS
    } else {
        sys::AI_COPYRIGHT_NOTICES_CORE
    };
    unsafe { c_str_to_string(sys::AiGetCopyrightNotices(kind)) }.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        let version: Version = "7.4.2.1".parse().unwrap();
        assert_eq!(version.arch, 7);
        assert_eq!(version.major, 4);
        assert_eq!(version.minor, 2);
        assert_eq!(version.fix, "1");
        assert_eq!(version.to_string(), "7.4.2.1");
    }

    #[test]
    fn test_parse_version_without_fix() {
        let version: Version = "7.3.0".parse().unwrap();
        assert_eq!(version.fix, "0");
    }

    #[test]
    fn test_parse_version_keeps_fix_suffix() {
        let version: Version = "7.4.2.1.beta".parse().unwrap();
        assert_eq!(version.fix, "1.beta");
    }

    #[test]
    fn test_parse_version_rejects_garbage() {
        assert!("seven".parse::<Version>().is_err());
        assert!("7.x.2".parse::<Version>().is_err());
        assert_eq!(
            "7".parse::<Version>().unwrap_err().to_string(),
            "invalid version string \"7\""
        );
    }

    #[test]
    fn test_bound_version_matches_constant() {
        assert_eq!(bound_version().to_string(), sys::AI_VERSION);
    }

    #[test]
    fn test_buffer_to_string_stops_at_nul() {
        let buffer = [b'4' as c_char, b'2' as c_char, 0, b'9' as c_char];
        assert_eq!(buffer_to_string(&buffer), "42");
    }
}
