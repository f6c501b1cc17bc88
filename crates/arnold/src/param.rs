//! Parameter declarations of node entries and the values they default to.

use std::fmt;
use std::ptr::NonNull;

use arnold_sys as sys;
use sys::{AtMatrix, AtRGB, AtRGBA, AtVector, AtVector2};

use crate::string::{at_string_to_string, c_str_list, c_str_to_string, narrow_string};

/// Type tag of a parameter, array element or AOV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Byte,
    Int,
    UInt,
    Boolean,
    Float,
    Rgb,
    Rgba,
    Vector,
    Vector2,
    String,
    Pointer,
    Node,
    Array,
    Matrix,
    Enum,
    Closure,
    UShort,
    Half,
}

impl ParamType {
    /// `None` for `AI_TYPE_NONE` and tags this crate does not know.
    pub fn from_raw(raw: u8) -> Option<ParamType> {
        let ty = match raw {
            sys::AI_TYPE_BYTE => ParamType::Byte,
            sys::AI_TYPE_INT => ParamType::Int,
            sys::AI_TYPE_UINT => ParamType::UInt,
            sys::AI_TYPE_BOOLEAN => ParamType::Boolean,
            sys::AI_TYPE_FLOAT => ParamType::Float,
            sys::AI_TYPE_RGB => ParamType::Rgb,
            sys::AI_TYPE_RGBA => ParamType::Rgba,
            sys::AI_TYPE_VECTOR => ParamType::Vector,
            sys::AI_TYPE_VECTOR2 => ParamType::Vector2,
            sys::AI_TYPE_STRING => ParamType::String,
            sys::AI_TYPE_POINTER => ParamType::Pointer,
            sys::AI_TYPE_NODE => ParamType::Node,
            sys::AI_TYPE_ARRAY => ParamType::Array,
            sys::AI_TYPE_MATRIX => ParamType::Matrix,
            sys::AI_TYPE_ENUM => ParamType::Enum,
            sys::AI_TYPE_CLOSURE => ParamType::Closure,
            sys::AI_TYPE_USHORT => ParamType::UShort,
            sys::AI_TYPE_HALF => ParamType::Half,
            _ => return None,
        };
        Some(ty)
    }

    pub fn to_raw(self) -> u8 {
        match self {
            ParamType::Byte => sys::AI_TYPE_BYTE,
            ParamType::Int => sys::AI_TYPE_INT,
            ParamType::UInt => sys::AI_TYPE_UINT,
            ParamType::Boolean => sys::AI_TYPE_BOOLEAN,
            ParamType::Float => sys::AI_TYPE_FLOAT,
            ParamType::Rgb => sys::AI_TYPE_RGB,
            ParamType::Rgba => sys::AI_TYPE_RGBA,
            ParamType::Vector => sys::AI_TYPE_VECTOR,
            ParamType::Vector2 => sys::AI_TYPE_VECTOR2,
            ParamType::String => sys::AI_TYPE_STRING,
            ParamType::Pointer => sys::AI_TYPE_POINTER,
            ParamType::Node => sys::AI_TYPE_NODE,
            ParamType::Array => sys::AI_TYPE_ARRAY,
            ParamType::Matrix => sys::AI_TYPE_MATRIX,
            ParamType::Enum => sys::AI_TYPE_ENUM,
            ParamType::Closure => sys::AI_TYPE_CLOSURE,
            ParamType::UShort => sys::AI_TYPE_USHORT,
            ParamType::Half => sys::AI_TYPE_HALF,
        }
    }

    /// The renderer's own name for the type, as written in `.ass` files.
    pub fn name(self) -> Option<String> {
        unsafe { c_str_to_string(sys::AiParamGetTypeName(self.to_raw())) }
    }

    /// Size in bytes of one value, as the renderer stores it.
    pub fn size(self) -> usize {
        let size = unsafe { sys::AiParamGetTypeSize(self.to_raw()) };
        usize::try_from(size).unwrap_or(0)
    }

    /// Whether a link from an output of type `source` can drive this type.
    pub fn accepts(self, source: ParamType) -> bool {
        unsafe { sys::AiParamTypeConvertible(self.to_raw(), source.to_raw()) }
    }
}

/// A parameter declared by a [`NodeEntry`](crate::NodeEntry).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParamEntry {
    handle: NonNull<sys::AtParamEntry>,
}

impl ParamEntry {
    /// # Safety
    /// A non-null `ptr` must come from the renderer.
    pub(crate) unsafe fn from_raw(ptr: *const sys::AtParamEntry) -> Option<ParamEntry> {
        NonNull::new(ptr.cast_mut()).map(|handle| ParamEntry { handle })
    }

    fn as_ptr(&self) -> *const sys::AtParamEntry {
        self.handle.as_ptr()
    }

    pub fn name(&self) -> String {
        let name = narrow_string(unsafe { sys::AiParamGetName(self.as_ptr()) });
        unsafe { at_string_to_string(name) }.unwrap_or_default()
    }

    pub fn param_type(&self) -> Option<ParamType> {
        ParamType::from_raw(unsafe { sys::AiParamGetType(self.as_ptr()) })
    }

    /// Element type of an array parameter.
    pub fn sub_type(&self) -> Option<ParamType> {
        ParamType::from_raw(unsafe { sys::AiParamGetSubType(self.as_ptr()) })
    }

    /// Labels of an enum parameter in index order, empty for other types.
    pub fn enum_labels(&self) -> Vec<String> {
        if self.param_type() != Some(ParamType::Enum) {
            return Vec::new();
        }
        unsafe { c_str_list(sys::AiParamGetEnum(self.as_ptr())) }
    }

    pub fn default_value(&self) -> ParamValue {
        let Some(ty) = self.param_type() else {
            return ParamValue::Unsupported(None);
        };
        let value = unsafe { sys::AiParamGetDefault(self.as_ptr()).as_ref() };
        match value {
            Some(value) => {
                let labels = self.enum_labels();
                unsafe { ParamValue::read(ty, value, &labels) }
            }
            None => ParamValue::Unsupported(Some(ty)),
        }
    }
}

impl fmt::Debug for ParamEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamEntry")
            .field("name", &self.name())
            .field("type", &self.param_type())
            .finish()
    }
}

/// A decoded parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Byte(u8),
    Int(i32),
    UInt(u32),
    Bool(bool),
    Float(f32),
    Rgb(AtRGB),
    Rgba(AtRGBA),
    Vector(AtVector),
    Vector2(AtVector2),
    String(Option<String>),
    Matrix(AtMatrix),
    Enum { index: i32, label: Option<String> },
    /// An array default, with its element type and length.
    Array { element: Option<ParamType>, len: u32 },
    /// Node references, pointers and closures default to nothing.
    Null(ParamType),
    Unsupported(Option<ParamType>),
}

impl ParamValue {
    /// Reads `value` as a `ty`. `labels` names the enum values.
    ///
    /// # Safety
    /// `value` must hold a `ty` as written by the renderer.
    pub(crate) unsafe fn read(ty: ParamType, value: &sys::AtParamValue, labels: &[String]) -> ParamValue {
        match ty {
            ParamType::Byte => ParamValue::Byte(value.byte()),
            ParamType::Int => ParamValue::Int(value.int()),
            ParamType::UInt => ParamValue::UInt(value.uint()),
            ParamType::Boolean => ParamValue::Bool(value.bool()),
            ParamType::Float => ParamValue::Float(value.flt()),
            ParamType::Rgb => ParamValue::Rgb(value.rgb()),
            ParamType::Rgba => ParamValue::Rgba(value.rgba()),
            ParamType::Vector => ParamValue::Vector(value.vec()),
            ParamType::Vector2 => ParamValue::Vector2(value.vec2()),
            ParamType::String => ParamValue::String(unsafe { at_string_to_string(value.str()) }),
            ParamType::Matrix => match unsafe { value.matrix_ptr().as_ref() } {
                Some(matrix) => ParamValue::Matrix(*matrix),
                None => ParamValue::Matrix(AtMatrix::IDENTITY),
            },
            ParamType::Enum => {
                let index = value.int();
                let label = usize::try_from(index).ok().and_then(|i| labels.get(i)).cloned();
                ParamValue::Enum { index, label }
            }
            ParamType::Array => {
                let array = value.array();
                if array.is_null() {
                    ParamValue::Array { element: None, len: 0 }
                } else {
                    let (element, len) =
                        unsafe { (sys::AiArrayGetType(array), sys::AiArrayGetNumElements(array)) };
                    ParamValue::Array {
                        element: ParamType::from_raw(element),
                        len,
                    }
                }
            }
            ParamType::Node | ParamType::Pointer | ParamType::Closure => ParamValue::Null(ty),
            ParamType::UShort | ParamType::Half => ParamValue::Unsupported(Some(ty)),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Byte(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::UInt(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Rgb(c) => write!(f, "{} {} {}", c.r, c.g, c.b),
            ParamValue::Rgba(c) => write!(f, "{} {} {} {}", c.r, c.g, c.b, c.a),
            ParamValue::Vector(v) => write!(f, "{} {} {}", v.x, v.y, v.z),
            ParamValue::Vector2(v) => write!(f, "{} {}", v.x, v.y),
            ParamValue::String(Some(s)) => write!(f, "\"{s}\""),
            ParamValue::String(None) => write!(f, "\"\""),
            ParamValue::Matrix(m) => {
                let rows: Vec<String> = m
                    .data
                    .iter()
                    .map(|row| row.map(|v| v.to_string()).join(" "))
                    .collect();
                write!(f, "{}", rows.join(" "))
            }
            ParamValue::Enum { label: Some(label), .. } => write!(f, "{label}"),
            ParamValue::Enum { index, label: None } => write!(f, "{index}"),
            ParamValue::Array { len, .. } => write!(f, "[{len}]"),
            ParamValue::Null(_) => write!(f, "(null)"),
            ParamValue::Unsupported(_) => write!(f, "?"),
        }
    }
}

/// How a user parameter varies over a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserParamCategory {
    Constant,
    Uniform,
    Varying,
    Indexed,
}

impl UserParamCategory {
    pub fn from_raw(raw: u8) -> Option<UserParamCategory> {
        match raw {
            sys::AI_USERDEF_CONSTANT => Some(UserParamCategory::Constant),
            sys::AI_USERDEF_UNIFORM => Some(UserParamCategory::Uniform),
            sys::AI_USERDEF_VARYING => Some(UserParamCategory::Varying),
            sys::AI_USERDEF_INDEXED => Some(UserParamCategory::Indexed),
            _ => None,
        }
    }
}

/// A parameter added to a single node with [`Node::declare`](crate::Node::declare).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UserParamEntry {
    handle: NonNull<sys::AtUserParamEntry>,
}

impl UserParamEntry {
    /// # Safety
    /// A non-null `ptr` must come from the renderer.
    pub(crate) unsafe fn from_raw(ptr: *const sys::AtUserParamEntry) -> Option<UserParamEntry> {
        NonNull::new(ptr.cast_mut()).map(|handle| UserParamEntry { handle })
    }

    fn as_ptr(&self) -> *const sys::AtUserParamEntry {
        self.handle.as_ptr()
    }

    pub fn name(&self) -> Option<String> {
        unsafe { c_str_to_string(sys::AiUserParamGetName(self.as_ptr())) }
    }

    pub fn param_type(&self) -> Option<ParamType> {
        ParamType::from_raw(unsafe { sys::AiUserParamGetType(self.as_ptr()) })
    }

    pub fn array_type(&self) -> Option<ParamType> {
        ParamType::from_raw(unsafe { sys::AiUserParamGetArrayType(self.as_ptr()) })
    }

    pub fn category(&self) -> Option<UserParamCategory> {
        UserParamCategory::from_raw(unsafe { sys::AiUserParamGetCategory(self.as_ptr()) })
    }
}

impl fmt::Debug for UserParamEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserParamEntry")
            .field("name", &self.name())
            .field("type", &self.param_type())
            .field("category", &self.category())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_type_round_trip() {
        for raw in 0..=0x12u8 {
            if let Some(ty) = ParamType::from_raw(raw) {
                assert_eq!(ty.to_raw(), raw);
            }
        }
        assert_eq!(ParamType::from_raw(0x08), None);
        assert_eq!(ParamType::from_raw(sys::AI_TYPE_NONE), None);
        assert_eq!(ParamType::from_raw(sys::AI_TYPE_VECTOR2), Some(ParamType::Vector2));
    }

    #[test]
    fn test_read_scalars() {
        let mut value = sys::AtParamValue::default();
        value.set_flt(0.5);
        assert_eq!(unsafe { ParamValue::read(ParamType::Float, &value, &[]) }, ParamValue::Float(0.5));

        let mut value = sys::AtParamValue::default();
        value.set_rgb(AtRGB::new(1.0, 0.5, 0.25));
        assert_eq!(
            unsafe { ParamValue::read(ParamType::Rgb, &value, &[]) },
            ParamValue::Rgb(AtRGB::new(1.0, 0.5, 0.25))
        );
    }

    #[test]
    fn test_read_enum_label() {
        let labels = vec!["perspective".to_string(), "orthographic".to_string()];
        let mut value = sys::AtParamValue::default();
        value.set_int(1);
        assert_eq!(
            unsafe { ParamValue::read(ParamType::Enum, &value, &labels) },
            ParamValue::Enum {
                index: 1,
                label: Some("orthographic".to_string())
            }
        );
        value.set_int(5);
        let read = unsafe { ParamValue::read(ParamType::Enum, &value, &labels) };
        assert_eq!(read.to_string(), "5");
    }

    #[test]
    fn test_read_null_matrix_and_string() {
        let value = sys::AtParamValue::default();
        assert_eq!(
            unsafe { ParamValue::read(ParamType::Matrix, &value, &[]) },
            ParamValue::Matrix(AtMatrix::IDENTITY)
        );
        assert_eq!(
            unsafe { ParamValue::read(ParamType::String, &value, &[]) },
            ParamValue::String(None)
        );
        assert_eq!(
            unsafe { ParamValue::read(ParamType::Array, &value, &[]) },
            ParamValue::Array { element: None, len: 0 }
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::Vector(AtVector::new(0.0, 1.0, 2.5)).to_string(), "0 1 2.5");
        assert_eq!(ParamValue::String(Some("linear".into())).to_string(), "\"linear\"");
        assert_eq!(ParamValue::Bool(true).to_string(), "true");
        assert_eq!(ParamValue::Null(ParamType::Node).to_string(), "(null)");
        assert_eq!(
            ParamValue::Matrix(AtMatrix::IDENTITY).to_string(),
            "1 0 0 0 0 1 0 0 0 0 1 0 0 0 0 1"
        );
    }

    #[test]
    fn test_user_param_category() {
        assert_eq!(UserParamCategory::from_raw(sys::AI_USERDEF_VARYING), Some(UserParamCategory::Varying));
        assert_eq!(UserParamCategory::from_raw(sys::AI_USERDEF_UNDEFINED), None);
    }
}
