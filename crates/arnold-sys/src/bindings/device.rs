use std::ffi::c_char;

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_DEVICE_TYPE_CPU: AtDeviceType = 0;
pub const AI_DEVICE_TYPE_GPU: AtDeviceType = 1;

pub const AI_DEVICE_MEMORY_TOTAL: AtDeviceMemory = 0;
pub const AI_DEVICE_MEMORY_FREE: AtDeviceMemory = 1;
pub const AI_DEVICE_MEMORY_USED: AtDeviceMemory = 2;

pub const AI_DEVICE_SELECT_SUCCESS: AtDeviceSelectErrorCode = 0;
pub const AI_DEVICE_SELECT_FAILURE_NO_DEVICES_FOUND: AtDeviceSelectErrorCode = 1;
pub const AI_DEVICE_SELECT_FAILURE_NAME: AtDeviceSelectErrorCode = 2;
pub const AI_DEVICE_SELECT_FAILURE_MEMORY: AtDeviceSelectErrorCode = 3;
pub const AI_DEVICE_SELECT_FAILURE_INVALID_ID: AtDeviceSelectErrorCode = 4;
pub const AI_DEVICE_SELECT_FAILURE_UNSUPPORTED: AtDeviceSelectErrorCode = 5;
pub const AI_DEVICE_SELECT_FAILURE_UNKNOWN: AtDeviceSelectErrorCode = 6;

arnold_api! {
    pub struct DeviceApi => device {
        /// On failure `reason` receives an explanation.
        fn AiDeviceTypeIsSupported(device_type: AtDeviceType, reason: *mut AtString) -> bool;
        fn AiDeviceSelect(render_session: *mut AtRenderSession, device_type: AtDeviceType, device_ids: *const AtArray) -> AtDeviceSelectErrorCode;
        fn AiDeviceAutoSelect(render_session: *mut AtRenderSession) -> AtDeviceSelectErrorCode;
        fn AiDeviceGetSelectedType(render_session: *const AtRenderSession) -> AtDeviceType;
        fn AiDeviceGetSelectedIds(render_session: *const AtRenderSession, device_type: AtDeviceType) -> *const AtArray;
        fn AiDeviceGetCount(device_type: AtDeviceType) -> u32;
        fn AiDeviceGetIds(device_type: AtDeviceType) -> *const AtArray;
        fn AiDeviceGetName(device_type: AtDeviceType, device_id: u32) -> AtStringReturn;
        fn AiDeviceGetMemoryMB(device_type: AtDeviceType, device_id: u32, memory: AtDeviceMemory) -> u32;
        fn AiGPUCacheSetDirectory(dir_path: *const c_char);
        fn AiGPUCacheGetDirectory() -> AtStringReturn;
    }
}
