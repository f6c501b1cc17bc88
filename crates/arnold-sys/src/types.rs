//! `#[repr(C)]` shapes of the value types that cross the Arnold ABI.
//!
//! Only layout lives here. None of these types enforce anything about their
//! contents, the native library is the authority on what a value means.

use std::ffi::{c_char, c_int, c_void};
use std::ops::Index;

use crate::macros::opaque_handle;

opaque_handle!(
    AtNode,
    AtNodeEntry,
    AtUniverse,
    AtRenderSession,
    AtArray,
    AtParamEntry,
    AtUserParamEntry,
    AtParamValueMap,
    AtMetadataStore,
    AtNodeIterator,
    AtNodeEntryIterator,
    AtParamIterator,
    AtUserParamIterator,
    AtMetaDataIterator,
    AtAOVIterator,
    AtParamValueMapIterator,
    AtSceneFormatIterator,
    AtSceneFormatExtensionIterator,
    AtSceneFormatData,
    AtNodeMethods,
    AtList,
);

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl AtVector {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtVector2 {
    pub x: f32,
    pub y: f32,
}

impl AtVector2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtHPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtRGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl AtRGB {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtRGBA {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl AtRGBA {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Row-major 4x4 matrix. `m[row][column]`, translation lives in row 3.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtMatrix {
    pub data: [[f32; 4]; 4],
}

impl AtMatrix {
    pub const IDENTITY: AtMatrix = AtMatrix::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    pub const fn from_rows(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }
}

impl Index<usize> for AtMatrix {
    type Output = [f32; 4];

    fn index(&self, row: usize) -> &Self::Output {
        &self.data[row]
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AtBBox {
    pub min: AtVector,
    pub max: AtVector,
}

impl AtBBox {
    pub const fn new(min: AtVector, max: AtVector) -> Self {
        Self { min, max }
    }

    pub const fn from_coords(
        min_x: f32,
        min_y: f32,
        min_z: f32,
        max_x: f32,
        max_y: f32,
        max_z: f32,
    ) -> Self {
        Self::new(
            AtVector::new(min_x, min_y, min_z),
            AtVector::new(max_x, max_y, max_z),
        )
    }
}

pub const AI_BBOX_UNIT: AtBBox = AtBBox::from_coords(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);
pub const AI_BBOX_ZERO: AtBBox = AtBBox::from_coords(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

/// Integer pixel window, inclusive on both ends.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AtBBox2 {
    pub minx: c_int,
    pub miny: c_int,
    pub maxx: c_int,
    pub maxy: c_int,
}

/// Interned string handle. The pointed-to bytes are owned by the renderer and
/// live for the rest of the process; their length comes from
/// `AiAtStringLength`.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AtString {
    pub data: *const c_char,
}

impl AtString {
    pub const fn null() -> Self {
        Self {
            data: std::ptr::null(),
        }
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }
}

impl Default for AtString {
    fn default() -> Self {
        Self::null()
    }
}

/// Return shape of functions declared to return `AtString`.
///
/// MSVC returns a class with a constructor through a hidden pointer even when
/// it fits in a register. Padding the shape past 8 bytes makes the Rust side
/// pass that pointer too.
#[cfg(windows)]
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AtStringReturn {
    pub data: *const c_char,
    pub workaround: c_char,
}

#[cfg(windows)]
impl From<AtStringReturn> for AtString {
    fn from(value: AtStringReturn) -> Self {
        AtString { data: value.data }
    }
}

#[cfg(not(windows))]
pub type AtStringReturn = AtString;

/// Return shape of functions declared to return `AtVector2`, see
/// [`AtStringReturn`].
#[cfg(windows)]
pub type AtVector2Return = AtVector;

#[cfg(windows)]
impl From<AtVector> for AtVector2 {
    fn from(value: AtVector) -> Self {
        AtVector2::new(value.x, value.y)
    }
}

#[cfg(not(windows))]
pub type AtVector2Return = AtVector2;

/// 128 bits of untyped parameter storage. The `AI_TYPE_*` tag stored next to
/// it says which accessor is meaningful.
#[repr(C, align(8))]
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct AtParamValue {
    data: [u64; 2],
}

impl std::fmt::Debug for AtParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AtParamValue({:#018x}, {:#018x})", self.data[0], self.data[1])
    }
}

macro_rules! param_value_accessors {
    ($($get:ident / $set:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $get(&self) -> $ty {
                const { assert!(size_of::<$ty>() <= size_of::<AtParamValue>()) };
                // SAFETY: in bounds per the assertion above and every accessed
                // type is plain old data with alignment <= 8
                unsafe { self.data.as_ptr().cast::<$ty>().read() }
            }

            pub fn $set(&mut self, value: $ty) {
                const { assert!(size_of::<$ty>() <= size_of::<AtParamValue>()) };
                // SAFETY: see the getter
                unsafe { self.data.as_mut_ptr().cast::<$ty>().write(value) }
            }
        )*
    };
}

impl AtParamValue {
    pub const fn from_raw(data: [u64; 2]) -> Self {
        Self { data }
    }

    pub const fn into_raw(self) -> [u64; 2] {
        self.data
    }

    /// `bool` stored by the renderer; any non-zero byte reads as true.
    pub fn bool(&self) -> bool {
        self.byte() != 0
    }

    pub fn set_bool(&mut self, value: bool) {
        self.set_byte(value as u8)
    }

    param_value_accessors!(
        byte / set_byte: u8,
        int / set_int: c_int,
        uint / set_uint: u32,
        flt / set_flt: f32,
        rgb / set_rgb: AtRGB,
        rgba / set_rgba: AtRGBA,
        vec / set_vec: AtVector,
        vec2 / set_vec2: AtVector2,
        str / set_str: AtString,
        ptr / set_ptr: *mut c_void,
        matrix_ptr / set_matrix_ptr: *mut AtMatrix,
        array / set_array: *mut AtArray,
    );
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AtAOVEntry {
    pub name: AtString,
    pub type_: u8,
    pub blend_mode: c_int,
    pub expression: AtString,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AtMetaDataEntry {
    pub name: AtString,
    pub param: AtString,
    pub type_: u8,
    pub value: AtParamValue,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AtParamValueMapEntry {
    pub name: AtString,
    pub type_: u8,
    pub value: AtParamValue,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AtRenderUpdateInfo {
    pub render_session: *mut AtRenderSession,
    pub outputs_to_display: AtDisplayOutput,
    pub pass_index: u32,
    pub total_passes: u32,
    pub current_AA_samples: i32,
    pub current_AA_samples_max: i32,
    pub current_GI_diffuse_samples: i32,
    pub current_GI_specular_samples: i32,
    pub current_GI_transmission_samples: i32,
    pub current_GI_sss_samples: i32,
    pub current_GI_volume_samples: i32,
}

/// Image buffer filled by `AiReadImage`/`AiResizeImage`. Both pointers are
/// owned by the caller afterwards and released with `AiFree`.
#[repr(C)]
#[derive(Debug)]
pub struct AtImage {
    pub buffer: *mut c_void,
    pub width: c_int,
    pub height: c_int,
    pub full_width: c_int,
    pub full_height: c_int,
    pub x: c_int,
    pub y: c_int,
    pub channels: c_int,
    pub format: u8,
    pub aov_names: *mut AtArray,
}

impl Default for AtImage {
    fn default() -> Self {
        Self {
            buffer: std::ptr::null_mut(),
            width: 0,
            height: 0,
            full_width: 0,
            full_height: 0,
            x: 0,
            y: 0,
            channels: 0,
            format: 0,
            aov_names: std::ptr::null_mut(),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtChannelLayout {
    pub channel_type: u8,
    pub type_: u8,
    pub x_stride: usize,
    pub y_stride: usize,
}

/// Null-terminated list of C strings.
pub type AtEnum = *const *const c_char;

pub type AtBlockingCall = c_int;
pub type AtRenderMode = c_int;
pub type AtRenderErrorCode = c_int;
pub type AtSessionMode = c_int;
pub type AtDisplayOutput = c_int;
pub type AtRenderStatus = c_int;
pub type AtRenderUpdateType = c_int;
pub type AtCommonPolicy = c_int;
pub type AtDeviceType = c_int;
pub type AtDeviceMemory = c_int;
pub type AtStatsMode = c_int;
pub type AtFileType = c_int;
pub type AtProcViewportMode = c_int;
pub type AtMakeTxStatus = c_int;
pub type AtCopyrightNoticeType = c_int;
pub type AtMaterialxErrorCode = c_int;
pub type AtADPDialogMode = c_int;
pub type AtDeviceSelectErrorCode = c_int;

pub type AtRenderUpdateCallback = Option<
    unsafe extern "C" fn(
        private_data: *mut c_void,
        update_type: AtRenderUpdateType,
        update_info: *const AtRenderUpdateInfo,
    ) -> AtRenderStatus,
>;

pub type AtMsgExtendedCallBack = Option<
    unsafe extern "C" fn(
        logmask: c_int,
        severity: c_int,
        msg_string: *const c_char,
        metadata: *mut AtParamValueMap,
        user_ptr: *mut c_void,
    ),
>;

#[cfg(test)]
mod tests {
    use std::mem::{align_of, offset_of, size_of};

    use super::*;

    #[test]
    fn test_value_type_sizes() {
        assert_eq!(size_of::<AtVector>(), 12);
        assert_eq!(size_of::<AtVector2>(), 8);
        assert_eq!(size_of::<AtHPoint>(), 16);
        assert_eq!(size_of::<AtRGB>(), 12);
        assert_eq!(size_of::<AtRGBA>(), 16);
        assert_eq!(size_of::<AtMatrix>(), 64);
        assert_eq!(size_of::<AtBBox>(), 24);
        assert_eq!(size_of::<AtBBox2>(), 16);
        assert_eq!(size_of::<AtString>(), size_of::<*const c_char>());
    }

    #[test]
    fn test_param_value_layout() {
        assert_eq!(size_of::<AtParamValue>(), 16);
        assert_eq!(align_of::<AtParamValue>(), 8);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_record_layouts() {
        assert_eq!(offset_of!(AtAOVEntry, type_), 8);
        assert_eq!(offset_of!(AtAOVEntry, blend_mode), 12);
        assert_eq!(offset_of!(AtAOVEntry, expression), 16);
        assert_eq!(size_of::<AtAOVEntry>(), 24);

        assert_eq!(offset_of!(AtMetaDataEntry, type_), 16);
        assert_eq!(offset_of!(AtMetaDataEntry, value), 24);
        assert_eq!(size_of::<AtMetaDataEntry>(), 40);

        assert_eq!(offset_of!(AtParamValueMapEntry, value), 16);
        assert_eq!(size_of::<AtParamValueMapEntry>(), 32);

        assert_eq!(offset_of!(AtRenderUpdateInfo, pass_index), 12);
        assert_eq!(size_of::<AtRenderUpdateInfo>(), 48);

        assert_eq!(offset_of!(AtImage, format), 36);
        assert_eq!(offset_of!(AtImage, aov_names), 40);
        assert_eq!(size_of::<AtImage>(), 48);

        assert_eq!(offset_of!(AtChannelLayout, x_stride), 8);
        assert_eq!(size_of::<AtChannelLayout>(), 24);
    }

    #[cfg(windows)]
    #[test]
    fn test_return_shapes_exceed_register_size() {
        assert!(size_of::<AtStringReturn>() > 8);
        assert!(size_of::<AtVector2Return>() > 8);
    }

    #[test]
    fn test_return_shapes_narrow() {
        let name = c"persp_camera";
        let ret = AtStringReturn {
            data: name.as_ptr(),
            #[cfg(windows)]
            workaround: 0,
        };
        assert_eq!(AtString::from(ret).data, name.as_ptr());
    }

    #[test]
    fn test_opaque_handles_are_zero_sized() {
        assert_eq!(size_of::<AtNode>(), 0);
        assert_eq!(size_of::<AtUniverse>(), 0);
        assert_eq!(size_of::<AtRenderSession>(), 0);
    }

    #[test]
    fn test_bbox_constants() {
        assert_eq!(AI_BBOX_UNIT.min, AtVector::new(0.0, 0.0, 0.0));
        assert_eq!(AI_BBOX_UNIT.max, AtVector::new(1.0, 1.0, 1.0));
        assert_eq!(AI_BBOX_ZERO.min, AI_BBOX_ZERO.max);
    }

    #[test]
    fn test_matrix_rows() {
        let m = AtMatrix::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(m[1][2], 7.0);
        assert_eq!(m[3], [13.0, 14.0, 15.0, 16.0]);
        assert_eq!(AtMatrix::IDENTITY[2][2], 1.0);
        assert_eq!(AtMatrix::IDENTITY[2][3], 0.0);
    }

    #[test]
    fn test_null_string() {
        assert!(AtString::null().is_null());
        assert!(AtString::default().is_null());
        assert!(!AtString { data: c"a".as_ptr() }.is_null());
    }

    #[test]
    fn test_param_value_accessors() {
        let mut value = AtParamValue::default();
        value.set_flt(0.5);
        assert_eq!(value.flt(), 0.5);
        assert_eq!(value.into_raw()[0] as u32, 0.5f32.to_bits());

        value.set_rgba(AtRGBA::new(1.0, 0.5, 0.25, 0.125));
        assert_eq!(value.rgba().a, 0.125);
        assert_eq!(value.rgb(), AtRGB::new(1.0, 0.5, 0.25));

        value.set_bool(true);
        assert!(value.bool());
        let value = AtParamValue::from_raw([0x0100, 0]);
        assert!(!value.bool());
        assert_eq!(value.uint(), 0x0100);
    }
}
