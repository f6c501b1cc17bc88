//! Render devices and choosing which ones a session uses.

use arnold_sys as sys;
use tracing::debug;

use crate::render::native_enum;
use crate::string::{at_string_to_string, narrow_string};
use crate::{Array, ParamType, RenderSession, Result};

native_enum! {
    pub enum DeviceType: sys::AtDeviceType {
        Cpu = sys::AI_DEVICE_TYPE_CPU,
        Gpu = sys::AI_DEVICE_TYPE_GPU,
    }
}

native_enum! {
    pub enum DeviceMemory: sys::AtDeviceMemory {
        Total = sys::AI_DEVICE_MEMORY_TOTAL,
        Free = sys::AI_DEVICE_MEMORY_FREE,
        Used = sys::AI_DEVICE_MEMORY_USED,
    }
}

/// Why a session could not switch to the requested devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("no devices found")]
    NoDevicesFound,
    #[error("device name mismatch")]
    Name,
    #[error("not enough device memory")]
    Memory,
    #[error("invalid device id")]
    InvalidId,
    #[error("device unsupported")]
    Unsupported,
    #[error("device selection failed")]
    Unknown,
}

impl DeviceError {
    pub fn check(code: sys::AtDeviceSelectErrorCode) -> std::result::Result<(), DeviceError> {
        let err = match code {
            sys::AI_DEVICE_SELECT_SUCCESS => return Ok(()),
            sys::AI_DEVICE_SELECT_FAILURE_NO_DEVICES_FOUND => DeviceError::NoDevicesFound,
            sys::AI_DEVICE_SELECT_FAILURE_NAME => DeviceError::Name,
            sys::AI_DEVICE_SELECT_FAILURE_MEMORY => DeviceError::Memory,
            sys::AI_DEVICE_SELECT_FAILURE_INVALID_ID => DeviceError::InvalidId,
            sys::AI_DEVICE_SELECT_FAILURE_UNSUPPORTED => DeviceError::Unsupported,
            _ => DeviceError::Unknown,
        };
        Err(err)
    }
}

/// `Err` carries the renderer's explanation.
pub fn is_supported(device: DeviceType) -> std::result::Result<(), String> {
    let mut reason = sys::AtString::null();
    if unsafe { sys::AiDeviceTypeIsSupported(device.into(), &mut reason) } {
        Ok(())
    } else {
        Err(unsafe { at_string_to_string(reason) }.unwrap_or_default())
    }
}

pub fn count(device: DeviceType) -> u32 {
    unsafe { sys::AiDeviceGetCount(device.into()) }
}

pub fn ids(device: DeviceType) -> Vec<u32> {
    let ids = unsafe { Array::borrowed(sys::AiDeviceGetIds(device.into()).cast_mut()) };
    ids.and_then(|ids| ids.to_vec::<u32>()).unwrap_or_default()
}

pub fn name(device: DeviceType, id: u32) -> Option<String> {
    unsafe { at_string_to_string(narrow_string(sys::AiDeviceGetName(device.into(), id))) }
}

/// Memory of device `id` in megabytes.
pub fn memory_mb(device: DeviceType, id: u32, kind: DeviceMemory) -> u32 {
    unsafe { sys::AiDeviceGetMemoryMB(device.into(), id, kind.into()) }
}

impl RenderSession<'_> {
    /// Renders on the devices `ids` of type `device`, or on every device of
    /// that type when `ids` is empty.
    pub fn select_device(&self, device: DeviceType, ids: &[u32]) -> Result<()> {
        let ids = if ids.is_empty() {
            None
        } else {
            Some(Array::from_slice(ids)?)
        };
        let ids_ptr = ids.as_ref().map_or(std::ptr::null(), Array::as_ptr);
        let code = unsafe { sys::AiDeviceSelect(self.as_ptr(), device.into(), ids_ptr) };
        DeviceError::check(code)?;
        debug!(?device, "selected render device");
        Ok(())
    }

    /// Picks devices from the options' `render_device` settings.
    pub fn auto_select_device(&self) -> Result<()> {
        Ok(DeviceError::check(unsafe { sys::AiDeviceAutoSelect(self.as_ptr()) })?)
    }

    pub fn selected_device(&self) -> Option<DeviceType> {
        DeviceType::try_from(unsafe { sys::AiDeviceGetSelectedType(self.as_ptr()) }).ok()
    }

    pub fn selected_device_ids(&self, device: DeviceType) -> Vec<u32> {
        let ids = unsafe { Array::borrowed(sys::AiDeviceGetSelectedIds(self.as_ptr(), device.into()).cast_mut()) };
        ids.filter(|ids| ids.element_type() == Some(ParamType::UInt))
            .and_then(|ids| ids.to_vec::<u32>())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_select_codes() {
        assert_eq!(DeviceError::check(sys::AI_DEVICE_SELECT_SUCCESS), Ok(()));
        assert_eq!(
            DeviceError::check(sys::AI_DEVICE_SELECT_FAILURE_INVALID_ID),
            Err(DeviceError::InvalidId)
        );
        assert_eq!(DeviceError::check(17), Err(DeviceError::Unknown));
    }

    #[test]
    fn test_device_type_values() {
        assert_eq!(DeviceType::try_from(sys::AI_DEVICE_TYPE_GPU), Ok(DeviceType::Gpu));
        assert_eq!(sys::AtDeviceMemory::from(DeviceMemory::Free), sys::AI_DEVICE_MEMORY_FREE);
    }
}
