//! One module per topic of the Arnold API. Each declares the constants of its
//! header and a symbol table plus free functions for its entry points.

pub mod adp;
pub mod allocate;
pub mod array;
pub mod color_managers;
pub mod device;
pub mod drivers;
pub mod enums;
pub mod error_reporting;
pub mod file_utils;
pub mod font;
pub mod map;
pub mod materialx;
pub mod matrix;
pub mod metadata;
pub mod msg;
pub mod node_entry;
pub mod nodes;
pub mod operator;
pub mod params;
pub mod plugins;
pub mod procedural;
pub mod render;
pub mod scene;
pub mod shader;
pub mod stats;
pub mod string;
pub mod texture;
pub mod universe;
pub mod version;
pub mod volume;
