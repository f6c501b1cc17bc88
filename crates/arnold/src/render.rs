//! Render sessions and the status codes they report.

use std::ffi::{c_int, c_void};
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::ptr::NonNull;
use std::time::Instant;

use arnold_sys as sys;
use tracing::{debug, error, info, warn};

use crate::error::non_null;
use crate::string::{at_string_to_string, to_at_string};
use crate::{Node, Result, Universe};

/// Declares a Rust enum mirroring one of the renderer's `int` enums.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $raw:ty {
            $($(#[$vmeta:meta])* $variant:ident = $value:path,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl TryFrom<$raw> for $name {
            type Error = $raw;

            fn try_from(value: $raw) -> std::result::Result<Self, $raw> {
                match value {
                    $(v if v == $value => Ok($name::$variant),)*
                    other => Err(other),
                }
            }
        }

        impl From<$name> for $raw {
            fn from(value: $name) -> $raw {
                match value {
                    $($name::$variant => $value,)*
                }
            }
        }
    };
}

pub(crate) use native_enum;

native_enum! {
    pub enum RenderStatus: c_int {
        NotStarted = sys::AI_RENDER_STATUS_NOT_STARTED,
        Paused = sys::AI_RENDER_STATUS_PAUSED,
        Restarting = sys::AI_RENDER_STATUS_RESTARTING,
        Rendering = sys::AI_RENDER_STATUS_RENDERING,
        Finished = sys::AI_RENDER_STATUS_FINISHED,
        Failed = sys::AI_RENDER_STATUS_FAILED,
    }
}

native_enum! {
    pub enum RenderMode: c_int {
        /// Render through the options camera into the outputs.
        Camera = sys::AI_RENDER_MODE_CAMERA,
        /// Set up the scene for ray queries without rendering an image.
        Free = sys::AI_RENDER_MODE_FREE,
    }
}

native_enum! {
    pub enum SessionMode: c_int {
        Batch = sys::AI_SESSION_BATCH,
        Interactive = sys::AI_SESSION_INTERACTIVE,
    }
}

native_enum! {
    pub enum RenderUpdateType: c_int {
        Interrupt = sys::AI_RENDER_UPDATE_INTERRUPT,
        BeforePass = sys::AI_RENDER_UPDATE_BEFORE_PASS,
        DuringPass = sys::AI_RENDER_UPDATE_DURING_PASS,
        AfterPass = sys::AI_RENDER_UPDATE_AFTER_PASS,
        Finished = sys::AI_RENDER_UPDATE_FINISHED,
        Error = sys::AI_RENDER_UPDATE_ERROR,
    }
}

native_enum! {
    /// Which outputs a pass wants written.
    pub enum DisplayOutput: c_int {
        None = sys::AI_DISPLAY_OUTPUT_NONE,
        Interactive = sys::AI_DISPLAY_OUTPUT_INTERACTIVE,
        PartialInteractive = sys::AI_DISPLAY_OUTPUT_PARTIAL_INTERACTIVE,
        All = sys::AI_DISPLAY_OUTPUT_ALL,
    }
}

/// A render call that did not end in `AI_SUCCESS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("render aborted")]
    Abort,
    #[error("no camera")]
    NoCamera,
    #[error("bad camera")]
    BadCamera,
    #[error("usage not validated")]
    Validation,
    #[error("invalid render region")]
    RenderRegion,
    #[error("render interrupted")]
    Interrupt,
    #[error("no outputs")]
    NoOutputs,
    #[error("render device unavailable")]
    UnavailableDevice,
    #[error("render error")]
    Error,
    #[error("unknown render error code {0}")]
    Unknown(i32),
}

impl RenderError {
    /// Maps a native return code to `Ok` on `AI_SUCCESS`.
    pub fn check(code: sys::AtRenderErrorCode) -> std::result::Result<(), RenderError> {
        let err = match code {
            sys::AI_SUCCESS => return Ok(()),
            sys::AI_ABORT => RenderError::Abort,
            sys::AI_ERROR_NO_CAMERA => RenderError::NoCamera,
            sys::AI_ERROR_BAD_CAMERA => RenderError::BadCamera,
            sys::AI_ERROR_VALIDATION => RenderError::Validation,
            sys::AI_ERROR_RENDER_REGION => RenderError::RenderRegion,
            sys::AI_INTERRUPT => RenderError::Interrupt,
            sys::AI_ERROR_NO_OUTPUTS => RenderError::NoOutputs,
            sys::AI_ERROR_UNAVAILABLE_DEVICE => RenderError::UnavailableDevice,
            sys::AI_ERROR => RenderError::Error,
            other => RenderError::Unknown(other),
        };
        Err(err)
    }
}

/// Progress reported to a [`RenderUpdate`] callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateInfo {
    pub outputs_to_display: Option<DisplayOutput>,
    pub pass_index: u32,
    pub total_passes: u32,
    pub aa_samples: i32,
    pub aa_samples_max: i32,
    pub gi_diffuse_samples: i32,
    pub gi_specular_samples: i32,
    pub gi_transmission_samples: i32,
    pub gi_sss_samples: i32,
    pub gi_volume_samples: i32,
}

impl From<&sys::AtRenderUpdateInfo> for UpdateInfo {
    fn from(info: &sys::AtRenderUpdateInfo) -> Self {
        Self {
            outputs_to_display: DisplayOutput::try_from(info.outputs_to_display).ok(),
            pass_index: info.pass_index,
            total_passes: info.total_passes,
            aa_samples: info.current_AA_samples,
            aa_samples_max: info.current_AA_samples_max,
            gi_diffuse_samples: info.current_GI_diffuse_samples,
            gi_specular_samples: info.current_GI_specular_samples,
            gi_transmission_samples: info.current_GI_transmission_samples,
            gi_sss_samples: info.current_GI_sss_samples,
            gi_volume_samples: info.current_GI_volume_samples,
        }
    }
}

/// Receives render progress on the renderer's own threads.
///
/// The returned status tells the renderer how to carry on, usually
/// [`RenderStatus::Rendering`] during a render and
/// [`RenderStatus::Finished`] or [`RenderStatus::Failed`] once it is over.
pub trait RenderUpdate: Send {
    fn update(&mut self, update: RenderUpdateType, info: &UpdateInfo) -> RenderStatus;
}

impl<F> RenderUpdate for F
where
    F: FnMut(RenderUpdateType, &UpdateInfo) -> RenderStatus + Send,
{
    fn update(&mut self, update: RenderUpdateType, info: &UpdateInfo) -> RenderStatus {
        self(update, info)
    }
}

/// Status the renderer expects back for an update when no callback decides.
pub fn default_status(update: RenderUpdateType) -> RenderStatus {
    match update {
        RenderUpdateType::Interrupt => RenderStatus::Paused,
        RenderUpdateType::BeforePass | RenderUpdateType::DuringPass | RenderUpdateType::AfterPass => {
            RenderStatus::Rendering
        }
        RenderUpdateType::Finished => RenderStatus::Finished,
        RenderUpdateType::Error => RenderStatus::Failed,
    }
}

type BoxedUpdate = Box<dyn RenderUpdate>;

extern "C" fn render_update_trampoline(
    private_data: *mut c_void,
    update_type: sys::AtRenderUpdateType,
    update_info: *const sys::AtRenderUpdateInfo,
) -> sys::AtRenderStatus {
    let Ok(update) = RenderUpdateType::try_from(update_type) else {
        warn!(update_type, "unknown render update type");
        return sys::AI_RENDER_STATUS_RENDERING;
    };
    if private_data.is_null() {
        return default_status(update).into();
    }
    let info = unsafe { update_info.as_ref() }.map(UpdateInfo::from).unwrap_or_default();
    let callback = unsafe { &mut *private_data.cast::<BoxedUpdate>() };
    // Unwinding into the renderer aborts the process
    match panic::catch_unwind(AssertUnwindSafe(|| callback.update(update, &info))) {
        Ok(status) => status.into(),
        Err(_) => {
            error!(?update, "render update callback panicked");
            sys::AI_RENDER_STATUS_FAILED
        }
    }
}

/// One render of a [`Universe`].
///
/// A universe has at most one session. Dropping the session ends any render
/// still in progress before destroying it.
pub struct RenderSession<'u> {
    pub(crate) handle: NonNull<sys::AtRenderSession>,
    // Kept alive until the renderer stops calling it
    callback: Option<Box<BoxedUpdate>>,
    begun: bool,
    _universe: PhantomData<&'u Universe<'u>>,
}

impl<'u> RenderSession<'u> {
    pub fn new(universe: &'u Universe<'_>, mode: SessionMode) -> Result<Self> {
        let handle = non_null(
            unsafe { sys::AiRenderSession(universe.handle.as_ptr(), mode.into()) },
            "AiRenderSession",
        )?;
        debug!(?mode, "created render session");
        Ok(RenderSession {
            handle,
            callback: None,
            begun: false,
            _universe: PhantomData,
        })
    }

    pub(crate) fn as_ptr(&self) -> *mut sys::AtRenderSession {
        self.handle.as_ptr()
    }

    pub fn mode(&self) -> Option<SessionMode> {
        SessionMode::try_from(unsafe { sys::AiGetSessionMode(self.as_ptr()) }).ok()
    }

    /// The options node this session renders with.
    pub fn options(&self) -> Option<Node<'u>> {
        unsafe { Node::from_raw(sys::AiRenderSessionGetOptions(self.as_ptr()).cast_mut()) }
    }

    /// Renders to completion on the calling thread.
    pub fn render(&mut self, mode: RenderMode) -> Result<()> {
        let start = Instant::now();
        let code = unsafe { sys::AiRender(self.as_ptr(), mode.into()) };
        let result = RenderError::check(code);
        match result {
            Ok(()) => info!("Render: {:.2}s", start.elapsed().as_secs_f32()),
            Err(err) => warn!("Render stopped after {:.2}s: {err}", start.elapsed().as_secs_f32()),
        }
        Ok(result?)
    }

    /// Starts rendering in the background and returns immediately.
    ///
    /// `callback` is called from the renderer's threads until [`end`] returns.
    ///
    /// [`end`]: RenderSession::end
    pub fn begin(&mut self, mode: RenderMode, callback: Option<Box<dyn RenderUpdate>>) -> Result<()> {
        let mut callback = callback.map(Box::new);
        let (function, data): (sys::AtRenderUpdateCallback, *mut c_void) = match callback.as_mut() {
            Some(boxed) => (
                Some(render_update_trampoline as unsafe extern "C" fn(_, _, _) -> _),
                (&mut **boxed as *mut BoxedUpdate).cast(),
            ),
            None => (None, std::ptr::null_mut()),
        };
        let code = unsafe { sys::AiRenderBegin(self.as_ptr(), mode.into(), function, data) };
        RenderError::check(code)?;
        // Moving the outer box does not move the callback it points to
        self.callback = callback;
        self.begun = true;
        debug!(?mode, "render started");
        Ok(())
    }

    /// Waits for a render started with [`begin`](RenderSession::begin) to stop.
    pub fn end(&mut self) -> Result<()> {
        if !self.begun {
            return Ok(());
        }
        let code = unsafe { sys::AiRenderEnd(self.as_ptr()) };
        self.begun = false;
        self.callback = None;
        Ok(RenderError::check(code)?)
    }

    pub fn status(&self) -> RenderStatus {
        let raw = unsafe { sys::AiRenderGetStatus(self.as_ptr()) };
        RenderStatus::try_from(raw).unwrap_or_else(|raw| {
            warn!(raw, "unknown render status");
            RenderStatus::Failed
        })
    }

    pub fn interrupt(&self, blocking: bool) {
        unsafe { sys::AiRenderInterrupt(self.as_ptr(), blocking_call(blocking)) };
    }

    pub fn abort(&self, blocking: bool) {
        unsafe { sys::AiRenderAbort(self.as_ptr(), blocking_call(blocking)) };
    }

    pub fn resume(&self) {
        unsafe { sys::AiRenderResume(self.as_ptr()) };
    }

    pub fn restart(&self) {
        unsafe { sys::AiRenderRestart(self.as_ptr()) };
    }

    pub fn set_hint_bool(&self, hint: &str, value: bool) -> Result<bool> {
        let hint = to_at_string(hint)?;
        Ok(unsafe { sys::AiRenderSetHintBool(self.as_ptr(), hint, value) })
    }

    pub fn set_hint_int(&self, hint: &str, value: i32) -> Result<bool> {
        let hint = to_at_string(hint)?;
        Ok(unsafe { sys::AiRenderSetHintInt(self.as_ptr(), hint, value) })
    }

    pub fn set_hint_flt(&self, hint: &str, value: f32) -> Result<bool> {
        let hint = to_at_string(hint)?;
        Ok(unsafe { sys::AiRenderSetHintFlt(self.as_ptr(), hint, value) })
    }

    pub fn set_hint_str(&self, hint: &str, value: &str) -> Result<bool> {
        let hint = to_at_string(hint)?;
        let value = to_at_string(value)?;
        Ok(unsafe { sys::AiRenderSetHintStr(self.as_ptr(), hint, value) })
    }

    pub fn hint_bool(&self, hint: &str) -> Result<Option<bool>> {
        let hint = to_at_string(hint)?;
        let mut value = false;
        let found = unsafe { sys::AiRenderGetHintBool(self.as_ptr(), hint, &mut value) };
        Ok(found.then_some(value))
    }

    pub fn hint_int(&self, hint: &str) -> Result<Option<i32>> {
        let hint = to_at_string(hint)?;
        let mut value = 0;
        let found = unsafe { sys::AiRenderGetHintInt(self.as_ptr(), hint, &mut value) };
        Ok(found.then_some(value))
    }

    pub fn hint_flt(&self, hint: &str) -> Result<Option<f32>> {
        let hint = to_at_string(hint)?;
        let mut value = 0.0;
        let found = unsafe { sys::AiRenderGetHintFlt(self.as_ptr(), hint, &mut value) };
        Ok(found.then_some(value))
    }

    pub fn hint_str(&self, hint: &str) -> Result<Option<String>> {
        let hint = to_at_string(hint)?;
        let mut value = sys::AtString::null();
        let found = unsafe { sys::AiRenderGetHintStr(self.as_ptr(), hint, &mut value) };
        Ok(if found { unsafe { at_string_to_string(value) } } else { None })
    }

    /// Marks driver output `index` of the options' outputs as displayed
    /// during interactive passes.
    pub fn add_interactive_output(&self, index: u32) {
        unsafe { sys::AiRenderAddInteractiveOutput(self.as_ptr(), index) };
    }

    pub fn is_interactive_output(&self, index: u32) -> bool {
        unsafe { sys::AiRenderIsInteractiveOutput(self.as_ptr(), index) }
    }

    pub fn remove_interactive_output(&self, index: u32) -> bool {
        unsafe { sys::AiRenderRemoveInteractiveOutput(self.as_ptr(), index) }
    }

    pub fn remove_all_interactive_outputs(&self) {
        unsafe { sys::AiRenderRemoveAllInteractiveOutputs(self.as_ptr()) };
    }
}

impl Drop for RenderSession<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.end() {
            debug!("render ended with {err} while dropping its session");
        }
        unsafe { sys::AiRenderSessionDestroy(self.as_ptr()) };
    }
}

/// Whether any render session in the process is currently rendering.
pub fn is_any_active() -> bool {
    unsafe { sys::AiRenderIsAnyActive() }
}

fn blocking_call(blocking: bool) -> sys::AtBlockingCall {
    if blocking { sys::AI_BLOCKING } else { sys::AI_NON_BLOCKING }
}

#[cfg(test)]
mod tests {
    use std::ptr;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_render_error_codes() {
        assert_eq!(RenderError::check(sys::AI_SUCCESS), Ok(()));
        assert_eq!(RenderError::check(sys::AI_ABORT), Err(RenderError::Abort));
        assert_eq!(RenderError::check(sys::AI_ERROR_NO_CAMERA), Err(RenderError::NoCamera));
        assert_eq!(RenderError::check(sys::AI_INTERRUPT), Err(RenderError::Interrupt));
        assert_eq!(RenderError::check(sys::AI_ERROR), Err(RenderError::Error));
        assert_eq!(RenderError::check(42), Err(RenderError::Unknown(42)));
    }

    #[test]
    fn test_enum_round_trip() {
        assert_eq!(RenderStatus::try_from(sys::AI_RENDER_STATUS_FINISHED), Ok(RenderStatus::Finished));
        assert_eq!(c_int::from(SessionMode::Interactive), sys::AI_SESSION_INTERACTIVE);
        assert_eq!(RenderMode::try_from(7), Err(7));
        assert_eq!(DisplayOutput::try_from(2), Ok(DisplayOutput::PartialInteractive));
    }

    #[test]
    fn test_default_status() {
        assert_eq!(default_status(RenderUpdateType::DuringPass), RenderStatus::Rendering);
        assert_eq!(default_status(RenderUpdateType::Finished), RenderStatus::Finished);
        assert_eq!(default_status(RenderUpdateType::Error), RenderStatus::Failed);
        assert_eq!(default_status(RenderUpdateType::Interrupt), RenderStatus::Paused);
    }

    fn native_info(pass_index: u32, total_passes: u32) -> sys::AtRenderUpdateInfo {
        sys::AtRenderUpdateInfo {
            render_session: ptr::null_mut(),
            outputs_to_display: sys::AI_DISPLAY_OUTPUT_ALL,
            pass_index,
            total_passes,
            current_AA_samples: 3,
            current_AA_samples_max: 3,
            current_GI_diffuse_samples: 2,
            current_GI_specular_samples: 2,
            current_GI_transmission_samples: 2,
            current_GI_sss_samples: 2,
            current_GI_volume_samples: 0,
        }
    }

    #[test]
    fn test_update_info_conversion() {
        let info = UpdateInfo::from(&native_info(1, 4));
        assert_eq!(info.outputs_to_display, Some(DisplayOutput::All));
        assert_eq!(info.pass_index, 1);
        assert_eq!(info.total_passes, 4);
        assert_eq!(info.aa_samples, 3);
        assert_eq!(info.gi_volume_samples, 0);
    }

    #[test]
    fn test_trampoline_calls_callback() {
        let passes = Arc::new(AtomicU32::new(0));
        let seen = passes.clone();
        let mut callback: BoxedUpdate = Box::new(move |update: RenderUpdateType, info: &UpdateInfo| {
            seen.store(info.pass_index + 1, Ordering::SeqCst);
            if update == RenderUpdateType::AfterPass && info.pass_index + 1 == info.total_passes {
                RenderStatus::Finished
            } else {
                RenderStatus::Rendering
            }
        });
        let data = (&mut callback as *mut BoxedUpdate).cast::<c_void>();

        let info = native_info(0, 2);
        let status = render_update_trampoline(data, sys::AI_RENDER_UPDATE_AFTER_PASS, &info);
        assert_eq!(status, sys::AI_RENDER_STATUS_RENDERING);
        assert_eq!(passes.load(Ordering::SeqCst), 1);

        let info = native_info(1, 2);
        let status = render_update_trampoline(data, sys::AI_RENDER_UPDATE_AFTER_PASS, &info);
        assert_eq!(status, sys::AI_RENDER_STATUS_FINISHED);
        assert_eq!(passes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_trampoline_contains_panic() {
        let mut callback: BoxedUpdate = Box::new(|_: RenderUpdateType, _: &UpdateInfo| -> RenderStatus {
            panic!("callback failure")
        });
        let data = (&mut callback as *mut BoxedUpdate).cast::<c_void>();
        let info = native_info(0, 1);
        let status = render_update_trampoline(data, sys::AI_RENDER_UPDATE_DURING_PASS, &info);
        assert_eq!(status, sys::AI_RENDER_STATUS_FAILED);
    }

    #[test]
    fn test_trampoline_without_callback() {
        let info = native_info(0, 1);
        let status = render_update_trampoline(ptr::null_mut(), sys::AI_RENDER_UPDATE_ERROR, &info);
        assert_eq!(status, sys::AI_RENDER_STATUS_FAILED);
        let status = render_update_trampoline(ptr::null_mut(), 99, ptr::null());
        assert_eq!(status, sys::AI_RENDER_STATUS_RENDERING);
    }
}
