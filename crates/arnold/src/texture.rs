//! Queries on texture files, answered from the renderer's texture cache.

use std::ffi::c_char;
use std::path::Path;
use std::{ptr, slice};

use arnold_sys as sys;
use sys::AtMatrix;
use tracing::info;

use crate::render::native_enum;
use crate::string::{at_string_to_string, c_str_to_string, narrow_string, path_to_c_string, to_c_string};
use crate::{Result, Universe};

/// Width and height of the top mip level, `None` if the file can't be read.
pub fn resolution(path: &Path) -> Result<Option<(u32, u32)>> {
    let path = path_to_c_string(path)?;
    let (mut width, mut height) = (0, 0);
    let ok = unsafe { sys::AiTextureGetResolution(path.as_ptr(), &mut width, &mut height) };
    Ok(ok.then_some((width, height)))
}

pub fn num_channels(path: &Path) -> Result<Option<u32>> {
    let path = path_to_c_string(path)?;
    let mut channels = 0;
    let ok = unsafe { sys::AiTextureGetNumChannels(path.as_ptr(), &mut channels) };
    Ok(ok.then_some(channels))
}

pub fn channel_name(path: &Path, index: u32) -> Result<Option<String>> {
    let path = path_to_c_string(path)?;
    Ok(unsafe { c_str_to_string(sys::AiTextureGetChannelName(path.as_ptr(), index)) })
}

/// Pixel format as an `AI_TYPE_*` tag.
pub fn format(path: &Path) -> Result<Option<u32>> {
    let path = path_to_c_string(path)?;
    let mut format = 0;
    let ok = unsafe { sys::AiTextureGetFormat(path.as_ptr(), &mut format) };
    Ok(ok.then_some(format))
}

pub fn bit_depth(path: &Path) -> Result<Option<u32>> {
    let path = path_to_c_string(path)?;
    let mut depth = 0;
    let ok = unsafe { sys::AiTextureGetBitDepth(path.as_ptr(), &mut depth) };
    Ok(ok.then_some(depth))
}

/// World to screen and world to camera matrices stored in a rendered image.
pub fn matrices(path: &Path) -> Result<Option<(AtMatrix, AtMatrix)>> {
    let path = path_to_c_string(path)?;
    let (mut world_to_screen, mut world_to_camera) = (AtMatrix::IDENTITY, AtMatrix::IDENTITY);
    let ok = unsafe { sys::AiTextureGetMatrices(path.as_ptr(), &mut world_to_screen, &mut world_to_camera) };
    Ok(ok.then_some((world_to_screen, world_to_camera)))
}

/// Drops `path` from the texture cache so the next lookup rereads it.
pub fn invalidate(path: &Path) -> Result<()> {
    let path = path_to_c_string(path)?;
    unsafe { sys::AiTextureInvalidate(path.as_ptr()) };
    Ok(())
}

/// The source image a `.tx` file was converted from, if it recorded one.
pub fn tx_source(tx_path: &Path) -> Result<Option<String>> {
    let tx_path = path_to_c_string(tx_path)?;
    let source = narrow_string(unsafe { sys::AiTextureGetTxSourceFileName(tx_path.as_ptr()) });
    Ok(unsafe { at_string_to_string(source) })
}

/// Queues conversion of `path` to `.tx` with `maketx` style `flags`.
///
/// Jobs run in the background, [`wait_tx_jobs`] collects them.
pub fn make_tx(path: &Path, flags: &str, universe: Option<&Universe<'_>>) -> Result<()> {
    let path = path_to_c_string(path)?;
    let flags = to_c_string(flags)?;
    let universe = universe.map_or(ptr::null(), |u| u.as_ptr().cast_const());
    unsafe { sys::AiMakeTx(path.as_ptr(), flags.as_ptr(), universe) };
    Ok(())
}

native_enum! {
    /// Outcome of one `.tx` conversion job.
    pub enum TxStatus: sys::AtMakeTxStatus {
        Pending = sys::AiTxPending,
        Error = sys::AiTxError,
        Updated = sys::AiTxUpdated,
        UpdateUnneeded = sys::AiTxUpdate_unneeded,
        Aborted = sys::AiTxAborted,
    }
}

/// One texture submitted through [`make_tx`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxJob {
    pub source: Option<String>,
    /// `None` for a status this version does not know.
    pub status: Option<TxStatus>,
}

/// Blocks until every queued `.tx` conversion is done and reports how each
/// submitted texture ended up.
pub fn wait_tx_jobs() -> Vec<TxJob> {
    let mut statuses = ptr::null_mut();
    let mut sources = ptr::null_mut();
    let mut submitted = 0;
    // Each call waits for a single job
    while unsafe { sys::AiMakeTxWaitJob(&mut statuses, &mut sources, &mut submitted) } > 0 {}
    let jobs = unsafe { tx_jobs(statuses, sources, submitted) };
    let updated = jobs.iter().filter(|job| job.status == Some(TxStatus::Updated)).count();
    info!("Converted {updated} of {submitted} textures to tx");
    jobs
}

/// Cancels every queued `.tx` conversion and reports the submitted textures.
pub fn abort_tx_jobs() -> Vec<TxJob> {
    let mut statuses = ptr::null_mut();
    let mut sources = ptr::null_mut();
    let mut submitted = 0;
    unsafe { sys::AiMakeTxAbort(&mut statuses, &mut sources, &mut submitted) };
    unsafe { tx_jobs(statuses, sources, submitted) }
}

/// # Safety
///
/// Non-null `statuses` and `sources` must each point to `count` elements.
unsafe fn tx_jobs(statuses: *const sys::AtMakeTxStatus, sources: *const *const c_char, count: u32) -> Vec<TxJob> {
    if statuses.is_null() || count == 0 {
        return Vec::new();
    }
    let statuses = unsafe { slice::from_raw_parts(statuses, count as usize) };
    (0..statuses.len())
        .map(|i| TxJob {
            source: if sources.is_null() { None } else { unsafe { c_str_to_string(*sources.add(i)) } },
            status: TxStatus::try_from(statuses[i]).ok(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::ffi::CString;

    use super::*;

    #[test]
    fn test_tx_status_round_trip() {
        assert_eq!(TxStatus::try_from(sys::AiTxUpdated), Ok(TxStatus::Updated));
        assert_eq!(sys::AtMakeTxStatus::from(TxStatus::Aborted), sys::AiTxAborted);
        assert_eq!(TxStatus::try_from(17), Err(17));
    }

    #[test]
    fn test_tx_jobs() {
        let first = CString::new("wood.png").unwrap();
        let second = CString::new("brick.exr").unwrap();
        let sources = [first.as_ptr(), second.as_ptr()];
        let statuses = [sys::AiTxUpdated, sys::AiTxError];
        let jobs = unsafe { tx_jobs(statuses.as_ptr(), sources.as_ptr(), 2) };
        assert_eq!(
            jobs,
            vec![
                TxJob { source: Some("wood.png".into()), status: Some(TxStatus::Updated) },
                TxJob { source: Some("brick.exr".into()), status: Some(TxStatus::Error) },
            ]
        );
    }

    #[test]
    fn test_tx_jobs_empty() {
        assert!(unsafe { tx_jobs(ptr::null(), ptr::null(), 3) }.is_empty());
        let statuses = [sys::AiTxPending];
        let jobs = unsafe { tx_jobs(statuses.as_ptr(), ptr::null(), 1) };
        assert_eq!(jobs, vec![TxJob { source: None, status: Some(TxStatus::Pending) }]);
    }
}
