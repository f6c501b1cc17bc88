use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};

use arnold_sys as sys;
use tracing::debug;

use crate::render::SessionMode;
use crate::{Error, Result};

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// The renderer's global state, alive between `AiBegin` and `AiEnd`.
///
/// Only one may exist at a time. A [`Universe`](crate::Universe) borrows the
/// session it was created in, so it can't outlive `AiEnd`.
pub struct Session {
    // AiBegin and AiEnd must run on the same thread
    _not_send: PhantomData<*mut ()>,
}

impl Session {
    /// Fails with [`Error::SessionActive`] while another `Session` lives.
    pub fn begin(mode: SessionMode) -> Result<Session> {
        if ACTIVE.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_err() {
            return Err(Error::SessionActive);
        }
        debug!(?mode, "AiBegin");
        unsafe { sys::AiBegin(mode.into()) };
        Ok(Session {
            _not_send: PhantomData,
        })
    }

    /// Whether any session is active in the process, including one started
    /// by a host application.
    pub fn is_active() -> bool {
        unsafe { sys::AiArnoldIsActive() }
    }

    /// Installs or removes the renderer's crash and interrupt handlers.
    pub fn set_system_handlers(&self, install: bool) {
        let mask = if install {
            sys::AI_SYSTEM_HANDLER_ALL
        } else {
            sys::AI_SYSTEM_HANDLER_NONE
        };
        unsafe { sys::AiSetSystemHandlers(mask) };
    }

    /// Sets the host application string shown in the log header.
    pub fn set_app_string(&self, app: &str) -> Result<()> {
        let app = crate::string::to_c_string(app)?;
        unsafe { sys::AiSetAppString(app.as_ptr()) };
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        debug!("AiEnd");
        unsafe { sys::AiEnd() };
        ACTIVE.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_session_refused() {
        // Stands in for a live session without touching the renderer
        ACTIVE.store(true, Ordering::Release);
        let result = Session::begin(SessionMode::Batch);
        ACTIVE.store(false, Ordering::Release);
        assert!(matches!(result, Err(Error::SessionActive)));
    }
}
