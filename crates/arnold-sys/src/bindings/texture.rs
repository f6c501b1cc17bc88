//! Texture file queries, `.tx` conversion and image I/O.

use std::ffi::c_char;

use crate::macros::arnold_api;
use crate::types::*;

pub const AiTxPending: AtMakeTxStatus = 0;
pub const AiTxError: AtMakeTxStatus = 1;
pub const AiTxUpdated: AtMakeTxStatus = 2;
pub const AiTxUpdate_unneeded: AtMakeTxStatus = 3;
pub const AiTxAborted: AtMakeTxStatus = 4;

arnold_api! {
    pub struct TextureApi => texture {
        fn AiTextureGetResolution(filename: *const c_char, width: *mut u32, height: *mut u32) -> bool;
        fn AiTextureGetNumChannels(filename: *const c_char, num_channels: *mut u32) -> bool;
        fn AiTextureGetChannelName(filename: *const c_char, channel_index: u32) -> *const c_char;
        fn AiTextureGetFormat(filename: *const c_char, format: *mut u32) -> bool;
        fn AiTextureGetBitDepth(filename: *const c_char, bit_depth: *mut u32) -> bool;
        fn AiTextureGetMatrices(filename: *const c_char, world_to_screen: *mut AtMatrix, world_to_camera: *mut AtMatrix) -> bool;
        fn AiTextureInvalidate(filename: *const c_char);
        fn AiTextureGetTxFileName(
            filename: *const c_char,
            texture_color_space: AtString,
            render_color_space: AtString,
            universe: *const AtUniverse,
        ) -> AtStringReturn;
        fn AiTextureGetTxSourceFileName(tx_filename: *const c_char) -> AtStringReturn;
        fn AiTextureAutoTxFlags(texture_file: *const c_char, texture_color_space: AtString, universe: *const AtUniverse) -> AtStringReturn;
        fn AiTextureTxFileNeedsUpdate(texture_file: *const c_char, tx_filename: *const c_char, flags: *const c_char) -> bool;
        /// `params` may be null. The buffers written into `image` belong to
        /// the caller and are released with `AiFree`.
        fn AiReadImage(filename: *const c_char, format: u8, image: *mut AtImage, params: *mut AtParamValueMap) -> bool;
        fn AiWriteImage(filename: *const c_char, image: *const AtImage, params: *mut AtParamValueMap) -> bool;
        fn AiResizeImage(in_image: *const AtImage, out_image: *mut AtImage, params: *mut AtParamValueMap) -> bool;
        /// Queues a conversion job, `universe` may be null.
        fn AiMakeTx(filename: *const c_char, flags: *const c_char, universe: *const AtUniverse);
        /// Waits for one queued job and returns how many are still running.
        /// The C++ reference parameters are always written; the arrays they
        /// receive are owned by the renderer.
        fn AiMakeTxWaitJob(
            statuses: *mut *mut AtMakeTxStatus,
            source_files: *mut *mut *const c_char,
            num_submitted_textures: *mut u32,
        ) -> u32;
        /// Same out parameters as `AiMakeTxWaitJob`, which must not be null.
        fn AiMakeTxAbort(
            statuses: *mut *mut AtMakeTxStatus,
            source_files: *mut *mut *const c_char,
            num_submitted_textures: *mut u32,
        );
    }
}
