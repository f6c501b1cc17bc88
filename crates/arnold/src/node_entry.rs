use std::ffi::c_int;
use std::fmt;
use std::ptr::NonNull;

use arnold_sys as sys;
use sys::{AtRGB, AtRGBA, AtString, AtVector, AtVector2};

use crate::flags::NodeMask;
use crate::iter::NativeIter;
use crate::param::{ParamEntry, ParamType, ParamValue};
use crate::string::{at_string_to_string, c_str_to_string, to_at_string, to_at_string_opt, to_c_string};
use crate::Result;

/// Broad kind of a node entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Options,
    Camera,
    Light,
    Shape,
    Shader,
    Override,
    Driver,
    Filter,
    ColorManager,
    Operator,
    Imager,
    /// Derived kinds of shapes, only reported by [`NodeEntry::derived_type`].
    ShapeProcedural,
    ShapeVolume,
    ShapeImplicit,
}

impl NodeType {
    pub fn from_raw(raw: c_int) -> Option<NodeType> {
        let ty = match raw {
            sys::AI_NODE_OPTIONS => NodeType::Options,
            sys::AI_NODE_CAMERA => NodeType::Camera,
            sys::AI_NODE_LIGHT => NodeType::Light,
            sys::AI_NODE_SHAPE => NodeType::Shape,
            sys::AI_NODE_SHADER => NodeType::Shader,
            sys::AI_NODE_OVERRIDE => NodeType::Override,
            sys::AI_NODE_DRIVER => NodeType::Driver,
            sys::AI_NODE_FILTER => NodeType::Filter,
            sys::AI_NODE_COLOR_MANAGER => NodeType::ColorManager,
            sys::AI_NODE_OPERATOR => NodeType::Operator,
            sys::AI_NODE_IMAGER => NodeType::Imager,
            sys::AI_NODE_SHAPE_PROCEDURAL => NodeType::ShapeProcedural,
            sys::AI_NODE_SHAPE_VOLUME => NodeType::ShapeVolume,
            sys::AI_NODE_SHAPE_IMPLICIT => NodeType::ShapeImplicit,
            _ => return None,
        };
        Some(ty)
    }

    /// The mask selecting this kind of node. Derived shape kinds select all
    /// shapes.
    pub fn mask(self) -> NodeMask {
        match self {
            NodeType::Options => NodeMask::OPTIONS,
            NodeType::Camera => NodeMask::CAMERA,
            NodeType::Light => NodeMask::LIGHT,
            NodeType::Shape
            | NodeType::ShapeProcedural
            | NodeType::ShapeVolume
            | NodeType::ShapeImplicit => NodeMask::SHAPE,
            NodeType::Shader => NodeMask::SHADER,
            NodeType::Override => NodeMask::OVERRIDE,
            NodeType::Driver => NodeMask::DRIVER,
            NodeType::Filter => NodeMask::FILTER,
            NodeType::ColorManager => NodeMask::COLOR_MANAGER,
            NodeType::Operator => NodeMask::OPERATOR,
            NodeType::Imager => NodeMask::IMAGER,
        }
    }

    /// Parses the names used on the command line and in `.ass` files,
    /// e.g. `"shader"` or `"color_manager"`.
    pub fn from_name(name: &str) -> Option<NodeType> {
        let ty = match name {
            "options" => NodeType::Options,
            "camera" => NodeType::Camera,
            "light" => NodeType::Light,
            "shape" => NodeType::Shape,
            "shader" => NodeType::Shader,
            "override" => NodeType::Override,
            "driver" => NodeType::Driver,
            "filter" => NodeType::Filter,
            "color_manager" => NodeType::ColorManager,
            "operator" => NodeType::Operator,
            "imager" => NodeType::Imager,
            "procedural" => NodeType::ShapeProcedural,
            "volume" => NodeType::ShapeVolume,
            "implicit" => NodeType::ShapeImplicit,
            _ => return None,
        };
        Some(ty)
    }
}

/// A metadata item attached to a node entry or one of its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaData {
    pub name: String,
    /// `None` for metadata on the entry itself.
    pub param: Option<String>,
    pub value: ParamValue,
}

impl MetaData {
    /// # Safety
    /// `entry` must come from the renderer.
    pub(crate) unsafe fn from_entry(entry: &sys::AtMetaDataEntry) -> MetaData {
        let value = match ParamType::from_raw(entry.type_) {
            Some(ty) => unsafe { ParamValue::read(ty, &entry.value, &[]) },
            None => ParamValue::Unsupported(None),
        };
        unsafe {
            MetaData {
                name: at_string_to_string(entry.name).unwrap_or_default(),
                param: at_string_to_string(entry.param),
                value,
            }
        }
    }
}

/// The type of a node, as installed by the renderer or a plugin.
///
/// Entries live until the session ends.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeEntry {
    handle: NonNull<sys::AtNodeEntry>,
}

// Entries are immutable once installed
unsafe impl Send for NodeEntry {}
unsafe impl Sync for NodeEntry {}

macro_rules! metadata_getters {
    ($($name:ident: $ty:ty = $init:expr => $ai:ident;)*) => {
        $(
            /// Reads metadata `name` of `param`, or of the entry itself
            /// when `param` is `None`.
            pub fn $name(&self, param: Option<&str>, name: &str) -> Result<Option<$ty>> {
                let param = to_at_string_opt(param)?;
                let name = to_at_string(name)?;
                let mut value = $init;
                let found = unsafe { sys::$ai(self.as_ptr(), param, name, &mut value) };
                Ok(found.then_some(value))
            }
        )*
    };
}

impl NodeEntry {
    /// # Safety
    /// A non-null `ptr` must come from the renderer.
    pub(crate) unsafe fn from_raw(ptr: *const sys::AtNodeEntry) -> Option<NodeEntry> {
        NonNull::new(ptr.cast_mut()).map(|handle| NodeEntry { handle })
    }

    pub fn as_ptr(&self) -> *const sys::AtNodeEntry {
        self.handle.as_ptr()
    }

    pub fn look_up(name: &str) -> Result<Option<NodeEntry>> {
        let name = to_at_string(name)?;
        Ok(unsafe { NodeEntry::from_raw(sys::AiNodeEntryLookUp(name)) })
    }

    /// Every installed entry whose type is in `mask`.
    pub fn iter(mask: NodeMask) -> impl Iterator<Item = NodeEntry> {
        let iter = unsafe {
            NativeIter::new(
                sys::AiUniverseGetNodeEntryIterator(mask.bits()),
                next_entry,
                sys::AiNodeEntryIteratorFinished,
                sys::AiNodeEntryIteratorDestroy,
            )
        };
        iter.map(|handle| NodeEntry { handle })
    }

    pub fn name(&self) -> String {
        unsafe { c_str_to_string(sys::AiNodeEntryGetName(self.as_ptr())) }.unwrap_or_default()
    }

    pub fn node_type(&self) -> Option<NodeType> {
        NodeType::from_raw(unsafe { sys::AiNodeEntryGetType(self.as_ptr()) })
    }

    pub fn type_name(&self) -> Option<String> {
        unsafe { c_str_to_string(sys::AiNodeEntryGetTypeName(self.as_ptr())) }
    }

    pub fn derived_type(&self) -> Option<NodeType> {
        NodeType::from_raw(unsafe { sys::AiNodeEntryGetDerivedType(self.as_ptr()) })
    }

    pub fn derived_type_name(&self) -> Option<String> {
        unsafe { c_str_to_string(sys::AiNodeEntryGetDerivedTypeName(self.as_ptr())) }
    }

    /// Output type of a shader, `None` for other kinds of nodes.
    pub fn output_type(&self) -> Option<ParamType> {
        let raw = unsafe { sys::AiNodeEntryGetOutputType(self.as_ptr()) };
        u8::try_from(raw).ok().and_then(ParamType::from_raw)
    }

    /// Plugin file the entry was loaded from, `None` for built-in entries.
    pub fn filename(&self) -> Option<String> {
        unsafe { c_str_to_string(sys::AiNodeEntryGetFilename(self.as_ptr())) }
    }

    pub fn version(&self) -> Option<String> {
        unsafe { c_str_to_string(sys::AiNodeEntryGetVersion(self.as_ptr())) }
    }

    /// Number of nodes of this type across all universes.
    pub fn count(&self) -> usize {
        let count = unsafe { sys::AiNodeEntryGetCount(self.as_ptr()) };
        usize::try_from(count).unwrap_or(0)
    }

    pub fn num_params(&self) -> usize {
        let count = unsafe { sys::AiNodeEntryGetNumParams(self.as_ptr()) };
        usize::try_from(count).unwrap_or(0)
    }

    pub fn param(&self, index: usize) -> Option<ParamEntry> {
        let index = c_int::try_from(index).ok()?;
        unsafe { ParamEntry::from_raw(sys::AiNodeEntryGetParameter(self.as_ptr(), index)) }
    }

    pub fn look_up_param(&self, name: &str) -> Result<Option<ParamEntry>> {
        let name = to_at_string(name)?;
        Ok(unsafe { ParamEntry::from_raw(sys::AiNodeEntryLookUpParameter(self.as_ptr(), name)) })
    }

    pub fn params(&self) -> impl Iterator<Item = ParamEntry> + use<> {
        let iter = unsafe {
            NativeIter::new(
                sys::AiNodeEntryGetParamIterator(self.as_ptr()),
                sys::AiParamIteratorGetNext,
                sys::AiParamIteratorFinished,
                sys::AiParamIteratorDestroy,
            )
        };
        iter.filter_map(|entry| unsafe { ParamEntry::from_raw(entry.as_ptr()) })
    }

    pub fn num_outputs(&self) -> usize {
        let count = unsafe { sys::AiNodeEntryGetNumOutputs(self.as_ptr()) };
        usize::try_from(count).unwrap_or(0)
    }

    pub fn output(&self, index: usize) -> Option<ParamEntry> {
        let index = c_int::try_from(index).ok()?;
        unsafe { ParamEntry::from_raw(sys::AiNodeEntryGetOutput(self.as_ptr(), index)) }
    }

    pub fn look_up_output(&self, name: &str) -> Result<Option<ParamEntry>> {
        let name = to_at_string(name)?;
        Ok(unsafe { ParamEntry::from_raw(sys::AiNodeEntryLookUpOutput(self.as_ptr(), name)) })
    }

    /// Metadata of `param`, or of the entry itself when `param` is `None`.
    pub fn metadata(&self, param: Option<&str>) -> Result<Vec<MetaData>> {
        let param = param.map(to_c_string).transpose()?;
        let param_ptr = param.as_ref().map_or(std::ptr::null(), |p| p.as_ptr());
        let iter = unsafe {
            NativeIter::new(
                sys::AiNodeEntryGetMetaDataIterator(self.as_ptr(), param_ptr),
                sys::AiMetaDataIteratorGetNext,
                sys::AiMetaDataIteratorFinished,
                sys::AiMetaDataIteratorDestroy,
            )
        };
        Ok(iter.map(|entry| unsafe { MetaData::from_entry(entry.as_ref()) }).collect())
    }

    metadata_getters! {
        meta_bool: bool = false => AiMetaDataGetBool;
        meta_int: c_int = 0 => AiMetaDataGetInt;
        meta_flt: f32 = 0.0 => AiMetaDataGetFlt;
        meta_rgb: AtRGB = AtRGB::default() => AiMetaDataGetRGB;
        meta_rgba: AtRGBA = AtRGBA::default() => AiMetaDataGetRGBA;
        meta_vec: AtVector = AtVector::default() => AiMetaDataGetVec;
        meta_vec2: AtVector2 = AtVector2::default() => AiMetaDataGetVec2;
    }

    pub fn meta_str(&self, param: Option<&str>, name: &str) -> Result<Option<String>> {
        let param = to_at_string_opt(param)?;
        let name = to_at_string(name)?;
        let mut value = AtString::null();
        let found = unsafe { sys::AiMetaDataGetStr(self.as_ptr(), param, name, &mut value) };
        Ok(if found { unsafe { at_string_to_string(value) } } else { None })
    }
}

unsafe fn next_entry(iter: *mut sys::AtNodeEntryIterator) -> *const sys::AtNodeEntry {
    unsafe { sys::AiNodeEntryIteratorGetNext(iter) }.cast_const()
}

impl fmt::Debug for NodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeEntry")
            .field("name", &self.name())
            .field("type", &self.node_type())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_from_raw() {
        assert_eq!(NodeType::from_raw(sys::AI_NODE_CAMERA), Some(NodeType::Camera));
        assert_eq!(NodeType::from_raw(sys::AI_NODE_SHAPE_VOLUME), Some(NodeType::ShapeVolume));
        assert_eq!(NodeType::from_raw(sys::AI_NODE_UNDEFINED), None);
    }

    #[test]
    fn test_derived_shapes_select_shapes() {
        assert_eq!(NodeType::ShapeProcedural.mask(), NodeMask::SHAPE);
        assert_eq!(NodeType::ColorManager.mask().bits(), sys::AI_NODE_COLOR_MANAGER as u32);
    }

    #[test]
    fn test_node_type_from_name() {
        assert_eq!(NodeType::from_name("shader"), Some(NodeType::Shader));
        assert_eq!(NodeType::from_name("color_manager"), Some(NodeType::ColorManager));
        assert_eq!(NodeType::from_name("teapot"), None);
    }

    #[test]
    fn test_metadata_from_entry() {
        let mut value = sys::AtParamValue::default();
        value.set_bool(true);
        let entry = sys::AtMetaDataEntry {
            name: AtString::null(),
            param: AtString::null(),
            type_: sys::AI_TYPE_BOOLEAN,
            value,
        };
        let meta = unsafe { MetaData::from_entry(&entry) };
        assert_eq!(meta.name, "");
        assert_eq!(meta.param, None);
        assert_eq!(meta.value, ParamValue::Bool(true));
    }
}
