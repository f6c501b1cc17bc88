use arnold_sys as sys;
use bitflags::bitflags;

bitflags! {
    /// Selects node types when iterating a universe or comparing two.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeMask: u32 {
        const OPTIONS = sys::AI_NODE_OPTIONS as u32;
        const CAMERA = sys::AI_NODE_CAMERA as u32;
        const LIGHT = sys::AI_NODE_LIGHT as u32;
        const SHAPE = sys::AI_NODE_SHAPE as u32;
        const SHADER = sys::AI_NODE_SHADER as u32;
        const OVERRIDE = sys::AI_NODE_OVERRIDE as u32;
        const DRIVER = sys::AI_NODE_DRIVER as u32;
        const FILTER = sys::AI_NODE_FILTER as u32;
        const COLOR_MANAGER = sys::AI_NODE_COLOR_MANAGER as u32;
        const OPERATOR = sys::AI_NODE_OPERATOR as u32;
        const IMAGER = sys::AI_NODE_IMAGER as u32;
        const ALL = sys::AI_NODE_ALL as u32;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LogFlags: i32 {
        const INFO = sys::AI_LOG_INFO;
        const WARNINGS = sys::AI_LOG_WARNINGS;
        const ERRORS = sys::AI_LOG_ERRORS;
        const DEBUG = sys::AI_LOG_DEBUG;
        const STATS = sys::AI_LOG_STATS;
        const ASS_PARSE = sys::AI_LOG_ASS_PARSE;
        const PLUGINS = sys::AI_LOG_PLUGINS;
        const PROGRESS = sys::AI_LOG_PROGRESS;
        const NAN = sys::AI_LOG_NAN;
        const TIMESTAMP = sys::AI_LOG_TIMESTAMP;
        const BACKTRACE = sys::AI_LOG_BACKTRACE;
        const MEMORY = sys::AI_LOG_MEMORY;
        const COLOR = sys::AI_LOG_COLOR;
        const STATUS = sys::AI_LOG_STATUS;
        /// Everything except `STATUS`.
        const ALL = sys::AI_LOG_ALL;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RayType: u8 {
        const CAMERA = sys::AI_RAY_CAMERA;
        const SHADOW = sys::AI_RAY_SHADOW;
        const DIFFUSE_TRANSMIT = sys::AI_RAY_DIFFUSE_TRANSMIT;
        const SPECULAR_TRANSMIT = sys::AI_RAY_SPECULAR_TRANSMIT;
        const VOLUME = sys::AI_RAY_VOLUME;
        const DIFFUSE_REFLECT = sys::AI_RAY_DIFFUSE_REFLECT;
        const SPECULAR_REFLECT = sys::AI_RAY_SPECULAR_REFLECT;
        const SUBSURFACE = sys::AI_RAY_SUBSURFACE;
        const ALL_DIFFUSE = sys::AI_RAY_ALL_DIFFUSE;
        const ALL_SPECULAR = sys::AI_RAY_ALL_SPECULAR;
        const ALL_REFLECT = sys::AI_RAY_ALL_REFLECT;
        const ALL_TRANSMIT = sys::AI_RAY_ALL_TRANSMIT;
        const ALL = sys::AI_RAY_ALL;
    }
}

bitflags! {
    /// Caches flushed by [`Universe::flush_cache`](crate::Universe::flush_cache).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CacheFlags: i32 {
        const TEXTURE = sys::AI_CACHE_TEXTURE;
        const BACKGROUND = sys::AI_CACHE_BACKGROUND;
        const QUAD = sys::AI_CACHE_QUAD;
        const VOLUME_DISPLAY = sys::AI_CACHE_VOLUME_DISPLAY;
        const ALL = sys::AI_CACHE_ALL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_all_covers_every_level() {
        assert!(LogFlags::ALL.contains(LogFlags::INFO | LogFlags::WARNINGS | LogFlags::ERRORS));
        assert!(!LogFlags::ALL.contains(LogFlags::STATUS));
        assert_eq!(LogFlags::empty().bits(), sys::AI_LOG_NONE);
    }

    #[test]
    fn test_node_mask_bits() {
        let mask = NodeMask::CAMERA | NodeMask::LIGHT;
        assert_eq!(mask.bits(), 0x06);
        assert!(NodeMask::ALL.contains(NodeMask::IMAGER | NodeMask::OPERATOR));
    }

    #[test]
    fn test_ray_groups() {
        assert_eq!(
            RayType::ALL_DIFFUSE | RayType::ALL_SPECULAR,
            RayType::ALL_REFLECT | RayType::ALL_TRANSMIT
        );
        assert!(RayType::ALL.contains(RayType::SUBSURFACE | RayType::CAMERA));
    }

    #[test]
    fn test_cache_all() {
        assert_eq!(
            CacheFlags::ALL,
            CacheFlags::TEXTURE | CacheFlags::BACKGROUND | CacheFlags::QUAD | CacheFlags::VOLUME_DISPLAY
        );
    }

    #[test]
    fn test_log_flags_parse() {
        let flags: LogFlags = bitflags::parser::from_str("INFO | WARNINGS").unwrap();
        assert_eq!(flags, LogFlags::INFO | LogFlags::WARNINGS);
    }
}
