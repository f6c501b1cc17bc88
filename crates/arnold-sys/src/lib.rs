//! Raw bindings to the Arnold renderer.
//!
//! The shared library is opened at runtime, see [`loader`] for where it is
//! looked up. Functions carry their C names and C signatures, with C++
//! references turned into pointers. Calling any of them loads the library
//! on first use.

#![allow(non_snake_case, non_camel_case_types, non_upper_case_globals)]
#![allow(clippy::missing_safety_doc, clippy::too_many_arguments)]

mod api;
mod bindings;
pub mod loader;
mod macros;
mod types;

pub use api::{Arnold, api, is_loaded, load, load_with};
pub use loader::{LoadError, LoadedFrom, LoaderConfig};
pub use types::*;

pub use bindings::adp::*;
pub use bindings::allocate::*;
pub use bindings::array::*;
pub use bindings::color_managers::*;
pub use bindings::device::*;
pub use bindings::drivers::*;
pub use bindings::enums::*;
pub use bindings::error_reporting::*;
pub use bindings::file_utils::*;
pub use bindings::font::*;
pub use bindings::map::*;
pub use bindings::materialx::*;
pub use bindings::matrix::*;
pub use bindings::metadata::*;
pub use bindings::msg::*;
pub use bindings::node_entry::*;
pub use bindings::nodes::*;
pub use bindings::operator::*;
pub use bindings::params::*;
pub use bindings::plugins::*;
pub use bindings::procedural::*;
pub use bindings::render::*;
pub use bindings::scene::*;
pub use bindings::shader::*;
pub use bindings::stats::*;
pub use bindings::string::*;
pub use bindings::texture::*;
pub use bindings::universe::*;
pub use bindings::version::*;
pub use bindings::volume::*;
