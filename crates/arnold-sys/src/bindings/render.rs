//! Global Arnold state, render sessions and render control.

use std::ffi::c_void;

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_BLOCKING: AtBlockingCall = 0;
pub const AI_NON_BLOCKING: AtBlockingCall = 1;

pub const AI_RENDER_MODE_CAMERA: AtRenderMode = 0;
pub const AI_RENDER_MODE_FREE: AtRenderMode = 1;

pub const AI_SUCCESS: AtRenderErrorCode = 0;
pub const AI_ABORT: AtRenderErrorCode = 1;
pub const AI_ERROR_NO_CAMERA: AtRenderErrorCode = 2;
pub const AI_ERROR_BAD_CAMERA: AtRenderErrorCode = 3;
pub const AI_ERROR_VALIDATION: AtRenderErrorCode = 4;
pub const AI_ERROR_RENDER_REGION: AtRenderErrorCode = 5;
pub const AI_INTERRUPT: AtRenderErrorCode = 6;
pub const AI_ERROR_NO_OUTPUTS: AtRenderErrorCode = 7;
pub const AI_ERROR_UNAVAILABLE_DEVICE: AtRenderErrorCode = 8;
pub const AI_ERROR: AtRenderErrorCode = 9;

pub const AI_SESSION_BATCH: AtSessionMode = 0;
pub const AI_SESSION_INTERACTIVE: AtSessionMode = 1;

pub const AI_DISPLAY_OUTPUT_NONE: AtDisplayOutput = 0;
pub const AI_DISPLAY_OUTPUT_INTERACTIVE: AtDisplayOutput = 1;
pub const AI_DISPLAY_OUTPUT_PARTIAL_INTERACTIVE: AtDisplayOutput = 2;
pub const AI_DISPLAY_OUTPUT_ALL: AtDisplayOutput = 3;

pub const AI_RENDER_STATUS_NOT_STARTED: AtRenderStatus = 0;
pub const AI_RENDER_STATUS_PAUSED: AtRenderStatus = 1;
pub const AI_RENDER_STATUS_RESTARTING: AtRenderStatus = 2;
pub const AI_RENDER_STATUS_RENDERING: AtRenderStatus = 3;
pub const AI_RENDER_STATUS_FINISHED: AtRenderStatus = 4;
pub const AI_RENDER_STATUS_FAILED: AtRenderStatus = 5;

pub const AI_RENDER_UPDATE_INTERRUPT: AtRenderUpdateType = 0;
pub const AI_RENDER_UPDATE_BEFORE_PASS: AtRenderUpdateType = 1;
pub const AI_RENDER_UPDATE_DURING_PASS: AtRenderUpdateType = 2;
pub const AI_RENDER_UPDATE_AFTER_PASS: AtRenderUpdateType = 3;
pub const AI_RENDER_UPDATE_FINISHED: AtRenderUpdateType = 4;
pub const AI_RENDER_UPDATE_ERROR: AtRenderUpdateType = 5;

pub type AtSystemHandlerMask = std::ffi::c_int;
pub const AI_SYSTEM_HANDLER_NONE: AtSystemHandlerMask = 0x00;
pub const AI_SYSTEM_HANDLER_ALL: AtSystemHandlerMask = 0xFF;

arnold_api! {
    pub struct RenderApi => render {
        fn AiBegin(default_rs_mode: AtSessionMode);
        fn AiEnd();
        fn AiArnoldIsActive() -> bool;
        fn AiSetSystemHandlers(mask: AtSystemHandlerMask);
        fn AiRenderSession(universe: *mut AtUniverse, mode: AtSessionMode) -> *mut AtRenderSession;
        fn AiRenderSessionGetUniverse(render_session: *const AtRenderSession) -> *mut AtUniverse;
        fn AiRenderSessionGetOptions(render_session: *const AtRenderSession) -> *const AtNode;
        fn AiRenderSessionDestroy(render_session: *mut AtRenderSession);
        fn AiGetSessionMode(render_session: *const AtRenderSession) -> AtSessionMode;
        fn AiRenderAddInteractiveOutput(render_session: *mut AtRenderSession, output_index: u32);
        fn AiRenderIsInteractiveOutput(render_session: *mut AtRenderSession, output_index: u32) -> bool;
        fn AiRenderRemoveInteractiveOutput(render_session: *mut AtRenderSession, output_index: u32) -> bool;
        fn AiRenderRemoveAllInteractiveOutputs(render_session: *mut AtRenderSession);
        fn AiRenderSetHintBool(render_session: *mut AtRenderSession, hint: AtString, value: bool) -> bool;
        fn AiRenderSetHintInt(render_session: *mut AtRenderSession, hint: AtString, value: i32) -> bool;
        fn AiRenderSetHintFlt(render_session: *mut AtRenderSession, hint: AtString, value: f32) -> bool;
        fn AiRenderSetHintStr(render_session: *mut AtRenderSession, hint: AtString, value: AtString) -> bool;
        fn AiRenderSetHintArray(render_session: *mut AtRenderSession, hint: AtString, value: *mut AtArray) -> bool;
        fn AiRenderGetHintBool(render_session: *const AtRenderSession, hint: AtString, value: *mut bool) -> bool;
        fn AiRenderGetHintInt(render_session: *const AtRenderSession, hint: AtString, value: *mut i32) -> bool;
        fn AiRenderGetHintFlt(render_session: *const AtRenderSession, hint: AtString, value: *mut f32) -> bool;
        fn AiRenderGetHintStr(render_session: *const AtRenderSession, hint: AtString, value: *mut AtString) -> bool;
        fn AiRenderGetHintArray(render_session: *const AtRenderSession, hint: AtString, value: *mut *const AtArray) -> bool;
        fn AiRenderBegin(
            render_session: *mut AtRenderSession,
            mode: AtRenderMode,
            update_callback: AtRenderUpdateCallback,
            callback_private_data: *mut c_void,
        ) -> AtRenderErrorCode;
        fn AiRenderEnd(render_session: *mut AtRenderSession) -> AtRenderErrorCode;
        fn AiRenderGetStatus(render_session: *const AtRenderSession) -> AtRenderStatus;
        fn AiRenderInterrupt(render_session: *mut AtRenderSession, blocking: AtBlockingCall);
        fn AiRenderAbort(render_session: *mut AtRenderSession, blocking: AtBlockingCall);
        fn AiRenderResume(render_session: *mut AtRenderSession);
        fn AiRenderRestart(render_session: *mut AtRenderSession);
        fn AiRenderIsAnyActive() -> bool;
        fn AiRender(render_session: *mut AtRenderSession, mode: AtRenderMode) -> AtRenderErrorCode;
    }
}
