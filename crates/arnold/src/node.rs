use std::ffi::{c_int, c_void};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use arnold_sys as sys;
use sys::{AtMatrix, AtRGB, AtRGBA, AtVector, AtVector2};

use crate::error::{check, non_null};
use crate::iter::NativeIter;
use crate::param::UserParamEntry;
use crate::string::{at_string_to_string, c_str_to_string, narrow_string, narrow_vec2, to_at_string, to_c_string};
use crate::{Array, Error, NodeEntry, Result, Universe};

/// A node living in a [`Universe`].
///
/// Nodes are owned by their universe, this is only a handle to one and is
/// freely copyable. Because copies may outlive it, removing a node is
/// `unsafe`, see [`Node::destroy`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node<'u> {
    handle: NonNull<sys::AtNode>,
    _universe: PhantomData<&'u Universe<'u>>,
}

macro_rules! scalar_accessors {
    ($($get:ident / $set:ident: $ty:ty => $ai_get:ident / $ai_set:ident;)*) => {
        $(
            pub fn $get(&self, param: &str) -> Result<$ty> {
                let param = to_at_string(param)?;
                Ok(unsafe { sys::$ai_get(self.as_ptr(), param) })
            }

            pub fn $set(&self, param: &str, value: $ty) -> Result<()> {
                let param = to_at_string(param)?;
                unsafe { sys::$ai_set(self.as_ptr(), param, value) };
                Ok(())
            }
        )*
    };
}

impl<'u> Node<'u> {
    /// # Safety
    /// A non-null `ptr` must be a live node of a universe outliving `'u`.
    pub(crate) unsafe fn from_raw(ptr: *mut sys::AtNode) -> Option<Node<'u>> {
        NonNull::new(ptr).map(|handle| Node {
            handle,
            _universe: PhantomData,
        })
    }

    pub fn as_ptr(&self) -> *mut sys::AtNode {
        self.handle.as_ptr()
    }

    pub fn name(&self) -> Option<String> {
        unsafe { c_str_to_string(sys::AiNodeGetName(self.as_ptr())) }
    }

    pub fn entry(&self) -> Option<NodeEntry> {
        unsafe { NodeEntry::from_raw(sys::AiNodeGetNodeEntry(self.as_ptr())) }
    }

    /// Whether the node is an instance of the named node entry.
    pub fn is(&self, entry_name: &str) -> Result<bool> {
        let entry_name = to_at_string(entry_name)?;
        Ok(unsafe { sys::AiNodeIs(self.as_ptr(), entry_name) })
    }

    scalar_accessors! {
        byte / set_byte: u8 => AiNodeGetByte / AiNodeSetByte;
        int / set_int: c_int => AiNodeGetInt / AiNodeSetInt;
        uint / set_uint: u32 => AiNodeGetUInt / AiNodeSetUInt;
        bool / set_bool: bool => AiNodeGetBool / AiNodeSetBool;
        flt / set_flt: f32 => AiNodeGetFlt / AiNodeSetFlt;
        matrix / set_matrix: AtMatrix => AiNodeGetMatrix / AiNodeSetMatrix;
    }

    pub fn rgb(&self, param: &str) -> Result<AtRGB> {
        let param = to_at_string(param)?;
        Ok(unsafe { sys::AiNodeGetRGB(self.as_ptr(), param) })
    }

    pub fn set_rgb(&self, param: &str, value: AtRGB) -> Result<()> {
        let param = to_at_string(param)?;
        unsafe { sys::AiNodeSetRGB(self.as_ptr(), param, value.r, value.g, value.b) };
        Ok(())
    }

    pub fn rgba(&self, param: &str) -> Result<AtRGBA> {
        let param = to_at_string(param)?;
        Ok(unsafe { sys::AiNodeGetRGBA(self.as_ptr(), param) })
    }

    pub fn set_rgba(&self, param: &str, value: AtRGBA) -> Result<()> {
        let param = to_at_string(param)?;
        unsafe { sys::AiNodeSetRGBA(self.as_ptr(), param, value.r, value.g, value.b, value.a) };
        Ok(())
    }

    pub fn vec(&self, param: &str) -> Result<AtVector> {
        let param = to_at_string(param)?;
        Ok(unsafe { sys::AiNodeGetVec(self.as_ptr(), param) })
    }

    pub fn set_vec(&self, param: &str, value: AtVector) -> Result<()> {
        let param = to_at_string(param)?;
        unsafe { sys::AiNodeSetVec(self.as_ptr(), param, value.x, value.y, value.z) };
        Ok(())
    }

    pub fn vec2(&self, param: &str) -> Result<AtVector2> {
        let param = to_at_string(param)?;
        Ok(narrow_vec2(unsafe { sys::AiNodeGetVec2(self.as_ptr(), param) }))
    }

    pub fn set_vec2(&self, param: &str, value: AtVector2) -> Result<()> {
        let param = to_at_string(param)?;
        unsafe { sys::AiNodeSetVec2(self.as_ptr(), param, value.x, value.y) };
        Ok(())
    }

    /// `None` for an empty or unset string parameter.
    pub fn str(&self, param: &str) -> Result<Option<String>> {
        let param = to_at_string(param)?;
        let value = narrow_string(unsafe { sys::AiNodeGetStr(self.as_ptr(), param) });
        Ok(unsafe { at_string_to_string(value) }.filter(|value| !value.is_empty()))
    }

    pub fn set_str(&self, param: &str, value: &str) -> Result<()> {
        let param = to_at_string(param)?;
        let value = to_at_string(value)?;
        unsafe { sys::AiNodeSetStr(self.as_ptr(), param, value) };
        Ok(())
    }

    /// Reads a `NODE` parameter.
    pub fn node(&self, param: &str) -> Result<Option<Node<'u>>> {
        let param = to_at_string(param)?;
        Ok(unsafe { Node::from_raw(sys::AiNodeGetPtr(self.as_ptr(), param).cast()) })
    }

    pub fn set_node(&self, param: &str, value: Option<Node<'u>>) -> Result<()> {
        let param = to_at_string(param)?;
        let value = value.map_or(ptr::null_mut(), |node| node.as_ptr().cast::<c_void>());
        unsafe { sys::AiNodeSetPtr(self.as_ptr(), param, value) };
        Ok(())
    }

    /// The array stored in `param`, still owned by the node.
    pub fn array(&self, param: &str) -> Result<Option<Array<'u>>> {
        let param = to_at_string(param)?;
        Ok(unsafe { Array::borrowed(sys::AiNodeGetArray(self.as_ptr(), param)) })
    }

    /// Hands `value` over to the node. A borrowed array is copied first.
    pub fn set_array(&self, param: &str, value: Array<'_>) -> Result<()> {
        let param = to_at_string(param)?;
        let value = value.into_owned()?.into_raw().ok_or(Error::Failed("AiNodeSetArray"))?;
        unsafe { sys::AiNodeSetArray(self.as_ptr(), param, value) };
        Ok(())
    }

    /// Sets several parameters at once from `.ass` syntax, e.g.
    /// `"radius 2 center 0 1 0"`.
    pub fn set_attributes(&self, attributes: &str) -> Result<()> {
        let attributes = to_c_string(attributes)?;
        unsafe { sys::AiNodeSetAttributes(self.as_ptr(), attributes.as_ptr()) };
        Ok(())
    }

    /// Declares a user parameter, e.g. `declare("tag", "constant STRING")`.
    pub fn declare(&self, param: &str, declaration: &str) -> Result<()> {
        let param = to_at_string(param)?;
        let declaration = to_c_string(declaration)?;
        check(
            unsafe { sys::AiNodeDeclare(self.as_ptr(), param, declaration.as_ptr()) },
            "AiNodeDeclare",
        )
    }

    pub fn user_param(&self, param: &str) -> Result<Option<UserParamEntry>> {
        let param = to_at_string(param)?;
        Ok(unsafe { UserParamEntry::from_raw(sys::AiNodeLookUpUserParameter(self.as_ptr(), param)) })
    }

    pub fn user_params(&self) -> impl Iterator<Item = UserParamEntry> + '_ {
        let iter = unsafe {
            NativeIter::new(
                sys::AiNodeGetUserParamIterator(self.as_ptr()),
                sys::AiUserParamIteratorGetNext,
                sys::AiUserParamIteratorFinished,
                sys::AiUserParamIteratorDestroy,
            )
        };
        iter.filter_map(|entry| unsafe { UserParamEntry::from_raw(entry.as_ptr()) })
    }

    /// Connects the output of `source` to `input` of this node.
    pub fn link(&self, input: &str, source: Node<'u>) -> Result<()> {
        let input = to_c_string(input)?;
        check(
            unsafe { sys::AiNodeLink(source.as_ptr(), input.as_ptr(), self.as_ptr()) },
            "AiNodeLink",
        )
    }

    /// Like [`link`](Node::link) for a named output of `source`, e.g. `"r"`.
    pub fn link_output(&self, input: &str, source: Node<'u>, output: &str) -> Result<()> {
        let input = to_c_string(input)?;
        let output = to_c_string(output)?;
        check(
            unsafe { sys::AiNodeLinkOutput(source.as_ptr(), output.as_ptr(), self.as_ptr(), input.as_ptr()) },
            "AiNodeLinkOutput",
        )
    }

    pub fn unlink(&self, input: &str) -> Result<()> {
        let input = to_c_string(input)?;
        check(unsafe { sys::AiNodeUnlink(self.as_ptr(), input.as_ptr()) }, "AiNodeUnlink")
    }

    pub fn is_linked(&self, input: &str) -> Result<bool> {
        let input = to_c_string(input)?;
        Ok(unsafe { sys::AiNodeIsLinked(self.as_ptr(), input.as_ptr()) })
    }

    /// The node linked to `input` and the output component it is linked
    /// from, `-1` for the whole output.
    pub fn link_source(&self, input: &str) -> Result<Option<(Node<'u>, i32)>> {
        let input = to_c_string(input)?;
        let mut component: c_int = -1;
        let source = unsafe { sys::AiNodeGetLink(self.as_ptr(), input.as_ptr(), &mut component) };
        Ok(unsafe { Node::from_raw(source) }.map(|node| (node, component)))
    }

    pub fn set_disabled(&self, disabled: bool) {
        unsafe { sys::AiNodeSetDisabled(self.as_ptr(), disabled) };
    }

    pub fn is_disabled(&self) -> bool {
        unsafe { sys::AiNodeIsDisabled(self.as_ptr()) }
    }

    /// The procedural this node was created by, if any.
    pub fn parent(&self) -> Option<Node<'u>> {
        unsafe { Node::from_raw(sys::AiNodeGetParent(self.as_ptr())) }
    }

    /// Restores every parameter to its default.
    pub fn reset(&self) {
        unsafe { sys::AiNodeReset(self.as_ptr()) };
    }

    pub fn reset_param(&self, param: &str) -> Result<()> {
        let param = to_c_string(param)?;
        unsafe { sys::AiNodeResetParameter(self.as_ptr(), param.as_ptr()) };
        Ok(())
    }

    /// Copies this node into the same universe under `name`.
    pub fn clone_as(&self, name: &str) -> Result<Node<'u>> {
        let name = to_at_string(name)?;
        let clone = non_null(
            unsafe { sys::AiNodeClone(self.as_ptr(), name, ptr::null()) },
            "AiNodeClone",
        )?;
        Ok(Node {
            handle: clone,
            _universe: PhantomData,
        })
    }

    /// Points every reference to this node at `replacement` instead. The
    /// node itself stays in the universe.
    pub fn replace_with(&self, replacement: Node<'u>) {
        unsafe { sys::AiNodeReplace(self.as_ptr(), replacement.as_ptr(), false) };
    }

    /// Like [`replace_with`](Node::replace_with), then removes this node.
    ///
    /// # Safety
    /// Same as [`destroy`](Node::destroy).
    pub unsafe fn replace_and_destroy(self, replacement: Node<'u>) {
        unsafe { sys::AiNodeReplace(self.as_ptr(), replacement.as_ptr(), true) };
    }

    /// Removes the node from its universe.
    ///
    /// # Safety
    /// No copy of this handle, nor any handle to the same node obtained
    /// through lookups, links or iteration, may be used afterwards.
    pub unsafe fn destroy(self) -> Result<()> {
        check(unsafe { sys::AiNodeDestroy(self.as_ptr()) }, "AiNodeDestroy")
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name())
            .field("ptr", &self.handle)
            .finish()
    }
}
