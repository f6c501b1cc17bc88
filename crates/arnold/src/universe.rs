use std::marker::PhantomData;
use std::path::Path;
use std::ptr::{self, NonNull};
use std::time::Instant;

use arnold_sys as sys;
use sys::AtBBox;
use tracing::{debug, info};

use crate::error::{check, non_null};
use crate::flags::{CacheFlags, NodeMask};
use crate::iter::NativeIter;
use crate::string::{at_string_to_string, path_to_c_string, to_at_string};
use crate::{MetadataStore, Node, ParamType, ParamValueMap, Result, Session};

/// An AOV declared by the scene's outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aov {
    pub name: String,
    pub aov_type: Option<ParamType>,
    pub blend_mode: i32,
    pub expression: Option<String>,
}

/// A container of nodes that can be rendered.
///
/// Destroying a universe destroys every node in it, so [`Node`] handles
/// borrow the universe they came from. The universe in turn borrows the
/// [`Session`] it lives in.
pub struct Universe<'s> {
    pub(crate) handle: NonNull<sys::AtUniverse>,
    _session: PhantomData<&'s Session>,
}

impl<'s> Universe<'s> {
    /// A new universe holding its own options node.
    pub fn new(_session: &'s Session) -> Result<Universe<'s>> {
        let handle = non_null(unsafe { sys::AiUniverse() }, "AiUniverse")?;
        let universe = Universe {
            handle,
            _session: PhantomData,
        };
        debug!(id = universe.id(), "created universe");
        Ok(universe)
    }

    pub fn as_ptr(&self) -> *mut sys::AtUniverse {
        self.handle.as_ptr()
    }

    /// Process-wide identifier, unique while the universe lives.
    pub fn id(&self) -> u32 {
        unsafe { sys::AiUniverseGetId(self.as_ptr()) }
    }

    pub fn options(&self) -> Option<Node<'_>> {
        unsafe { Node::from_raw(sys::AiUniverseGetOptions(self.as_ptr())) }
    }

    /// The camera the options node renders through.
    pub fn camera(&self) -> Option<Node<'_>> {
        unsafe { Node::from_raw(sys::AiUniverseGetCamera(self.as_ptr())) }
    }

    /// Bounds of every shape. Only meaningful once a render has started.
    pub fn scene_bounds(&self) -> AtBBox {
        unsafe { sys::AiUniverseGetSceneBounds(self.as_ptr()) }
    }

    /// Creates a node of type `entry` named `name`.
    pub fn create_node(&self, entry: &str, name: &str) -> Result<Node<'_>> {
        let entry = to_at_string(entry)?;
        let name = to_at_string(name)?;
        let node = unsafe { sys::AiNode(self.as_ptr(), entry, name, ptr::null()) };
        unsafe { Node::from_raw(node) }.ok_or(crate::Error::Null("AiNode"))
    }

    pub fn look_up(&self, name: &str) -> Result<Option<Node<'_>>> {
        let name = to_at_string(name)?;
        Ok(unsafe { Node::from_raw(sys::AiNodeLookUpByName(self.as_ptr(), name, ptr::null())) })
    }

    /// Looks `name` up among the nodes created by the procedural `parent`.
    pub fn look_up_in(&self, name: &str, parent: Node<'_>) -> Result<Option<Node<'_>>> {
        let name = to_at_string(name)?;
        Ok(unsafe { Node::from_raw(sys::AiNodeLookUpByName(self.as_ptr(), name, parent.as_ptr())) })
    }

    /// Every node whose type is in `mask`.
    pub fn nodes(&self, mask: NodeMask) -> impl Iterator<Item = Node<'_>> {
        let iter = unsafe {
            NativeIter::new(
                sys::AiUniverseGetNodeIterator(self.as_ptr(), mask.bits()),
                next_node,
                sys::AiNodeIteratorFinished,
                sys::AiNodeIteratorDestroy,
            )
        };
        iter.filter_map(|node| unsafe { Node::from_raw(node.as_ptr()) })
    }

    pub fn aovs(&self) -> Vec<Aov> {
        let iter = unsafe {
            NativeIter::new(
                sys::AiUniverseGetAOVIterator(self.as_ptr()),
                sys::AiAOVIteratorGetNext,
                sys::AiAOVIteratorFinished,
                sys::AiAOVIteratorDestroy,
            )
        };
        iter.map(|entry| unsafe {
            let entry = entry.as_ref();
            Aov {
                name: at_string_to_string(entry.name).unwrap_or_default(),
                aov_type: ParamType::from_raw(entry.type_),
                blend_mode: entry.blend_mode,
                expression: at_string_to_string(entry.expression),
            }
        })
        .collect()
    }

    pub fn flush_cache(&self, flags: CacheFlags) -> Result<()> {
        check(
            unsafe { sys::AiUniverseCacheFlush(self.as_ptr(), flags.bits()) },
            "AiUniverseCacheFlush",
        )
    }

    /// Creates whichever default nodes (camera, filter...) the scene lacks.
    pub fn add_default_nodes(&self, params: Option<&ParamValueMap>) {
        let params = params.map_or(ptr::null(), ParamValueMap::as_ptr);
        unsafe { sys::AiUniverseAddDefaultNodes(self.as_ptr(), params) };
    }

    /// Loads a scene file in any supported format into this universe.
    pub fn load_scene(&self, path: &Path, params: Option<&ParamValueMap>) -> Result<()> {
        let start = Instant::now();
        let c_path = path_to_c_string(path)?;
        let params = params.map_or(ptr::null(), ParamValueMap::as_ptr);
        check(
            unsafe { sys::AiSceneLoad(self.as_ptr(), c_path.as_ptr(), params) },
            "AiSceneLoad",
        )?;
        info!("Loaded scene {}: {:.2}s", path.display(), start.elapsed().as_secs_f32());
        Ok(())
    }

    /// Writes this universe out, the format follows the file extension.
    pub fn write_scene(
        &self,
        path: &Path,
        params: Option<&ParamValueMap>,
        metadata: Option<&MetadataStore>,
    ) -> Result<()> {
        let c_path = path_to_c_string(path)?;
        let params = params.map_or(ptr::null(), ParamValueMap::as_ptr);
        let metadata = metadata.map_or(ptr::null(), MetadataStore::as_ptr);
        check(
            unsafe { sys::AiSceneWrite(self.as_ptr(), c_path.as_ptr(), params, metadata) },
            "AiSceneWrite",
        )?;
        info!("Wrote scene {}", path.display());
        Ok(())
    }

    /// Whether the nodes in `mask` are identical in both universes.
    pub fn compare(&self, other: &Universe<'_>, mask: NodeMask) -> bool {
        unsafe { sys::AiUniverseCompare(self.as_ptr(), other.as_ptr(), mask.bits(), ptr::null_mut()) }
    }

    /// Like [`compare`](Universe::compare), recording what differs in `diffs`.
    pub fn compare_into(&self, other: &Universe<'_>, mask: NodeMask, diffs: &mut ParamValueMap) -> bool {
        unsafe { sys::AiUniverseCompare(self.as_ptr(), other.as_ptr(), mask.bits(), diffs.handle.as_ptr()) }
    }
}

unsafe fn next_node(iter: *mut sys::AtNodeIterator) -> *const sys::AtNode {
    unsafe { sys::AiNodeIteratorGetNext(iter) }.cast_const()
}

impl Drop for Universe<'_> {
    fn drop(&mut self) {
        debug!(id = self.id(), "destroying universe");
        unsafe { sys::AiUniverseDestroy(self.as_ptr()) };
    }
}
