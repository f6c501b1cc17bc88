//! Safe wrappers over [`arnold_sys`].
//!
//! Handles that own a native object destroy it on drop. Nodes, node entries
//! and parameter entries are plain handles into state the renderer owns, and
//! borrow whatever keeps that state alive.
//!
//! ```no_run
//! use arnold::{NodeMask, RenderMode, RenderSession, Session, SessionMode, Universe};
//!
//! # fn main() -> arnold::Result<()> {
//! arnold::init()?;
//! let session = Session::begin(SessionMode::Batch)?;
//! let universe = Universe::new(&session)?;
//! universe.load_scene("cornell.ass".as_ref(), None)?;
//! for node in universe.nodes(NodeMask::LIGHT) {
//!     println!("{:?}", node.name());
//! }
//! let mut render = RenderSession::new(&universe, SessionMode::Batch)?;
//! render.render(RenderMode::Camera)?;
//! # Ok(())
//! # }
//! ```

mod array;
pub mod color;
pub mod device;
mod error;
mod flags;
mod iter;
mod map;
pub mod matrix;
pub mod msg;
mod node;
mod node_entry;
mod param;
pub mod plugins;
mod render;
pub mod scene;
mod session;
mod string;
pub mod texture;
mod universe;
pub mod version;

pub use arnold_sys as sys;
pub use sys::{AtBBox, AtMatrix, AtRGB, AtRGBA, AtVector, AtVector2, LoaderConfig};

pub use array::{Array, ArrayElement};
pub use color::ColorManager;
pub use device::{DeviceError, DeviceType};
pub use error::{Error, Result};
pub use flags::{CacheFlags, LogFlags, NodeMask, RayType};
pub use map::{MetadataStore, ParamValueMap};
pub use msg::LogBridge;
pub use node::Node;
pub use node_entry::{MetaData, NodeEntry, NodeType};
pub use param::{ParamEntry, ParamType, ParamValue, UserParamCategory, UserParamEntry};
pub use render::{
    default_status, is_any_active, DisplayOutput, RenderError, RenderMode, RenderSession, RenderStatus, RenderUpdate, RenderUpdateType,
    SessionMode, UpdateInfo,
};
pub use scene::SceneFormat;
pub use session::Session;
pub use string::{at_string_to_string, c_str_to_string, decode_bytes, to_at_string};
pub use universe::{Aov, Universe};
pub use version::Version;

/// Loads the renderer using the environment, see [`LoaderConfig::from_env`].
///
/// Unlike calling into [`sys`] directly, a missing library is reported
/// instead of ending the process.
pub fn init() -> Result<&'static sys::Arnold> {
    Ok(sys::load()?)
}

/// Loads the renderer from the locations `config` describes. Has no effect
/// once the library is loaded.
pub fn init_with(config: &LoaderConfig) -> Result<&'static sys::Arnold> {
    Ok(sys::load_with(config)?)
}
