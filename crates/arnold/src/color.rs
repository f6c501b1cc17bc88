use std::ffi::c_int;
use std::marker::PhantomData;
use std::ptr;

use arnold_sys as sys;
use sys::AtString;

use crate::string::{at_string_to_string, narrow_string, to_at_string, to_at_string_opt};
use crate::{Node, Result};

/// Color space queries against a color manager node, or against the
/// options' color manager when built with [`ColorManager::active`].
#[derive(Debug, Clone, Copy)]
pub struct ColorManager<'u> {
    node: *mut sys::AtNode,
    _universe: PhantomData<Node<'u>>,
}

impl ColorManager<'static> {
    pub fn active() -> ColorManager<'static> {
        ColorManager {
            node: ptr::null_mut(),
            _universe: PhantomData,
        }
    }
}

impl<'u> ColorManager<'u> {
    pub fn from_node(node: Node<'u>) -> ColorManager<'u> {
        ColorManager {
            node: node.as_ptr(),
            _universe: PhantomData,
        }
    }

    /// The sRGB and linear color space names this manager uses by default.
    pub fn defaults(&self) -> (Option<String>, Option<String>) {
        let (mut srgb, mut linear) = (AtString::null(), AtString::null());
        unsafe {
            sys::AiColorManagerGetDefaults(self.node, &mut srgb, &mut linear);
            (at_string_to_string(srgb), at_string_to_string(linear))
        }
    }

    pub fn families(&self) -> Vec<String> {
        let count = unsafe { sys::AiColorManagerGetNumFamilies(self.node) };
        (0..count)
            .filter_map(|i| unsafe {
                at_string_to_string(narrow_string(sys::AiColorManagerGetFamilyNameByIndex(self.node, i)))
            })
            .collect()
    }

    /// Color spaces in `family`, or every space when `family` is `None`.
    pub fn color_spaces(&self, family: Option<&str>) -> Result<Vec<String>> {
        let family = to_at_string_opt(family)?;
        let count: c_int = unsafe { sys::AiColorManagerGetNumColorSpaces(self.node, family) };
        Ok((0..count)
            .filter_map(|i| unsafe {
                at_string_to_string(narrow_string(sys::AiColorManagerGetColorSpaceNameByIndex(
                    self.node, i, family,
                )))
            })
            .collect())
    }

    pub fn is_linear(&self, color_space: &str) -> Result<bool> {
        let color_space = to_at_string(color_space)?;
        Ok(unsafe { sys::AiColorManagerColorSpaceIsLinear(self.node, color_space) })
    }

    /// The red, green, blue and white point xy coordinates of `color_space`.
    pub fn chromaticities(&self, color_space: &str) -> Result<Option<[f32; 8]>> {
        let color_space = to_at_string(color_space)?;
        let mut chromaticities = [0.0f32; 8];
        let ok = unsafe {
            sys::AiColorManagerGetChromaticities(self.node, color_space, chromaticities.as_mut_ptr())
        };
        Ok(ok.then_some(chromaticities))
    }
}
