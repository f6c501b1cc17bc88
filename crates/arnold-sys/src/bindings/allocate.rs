use std::ffi::c_void;

use crate::macros::arnold_api;
use crate::types::AtString;

arnold_api! {
    pub struct AllocateApi => allocate {
        fn AiMalloc(size: usize) -> *mut c_void;
        fn AiRealloc(addr: *mut c_void, size: usize) -> *mut c_void;
        fn AiFree(addr: *mut c_void);
        fn AiAddMemUsage(size: i64, category: AtString);
        fn AiMallocUsableSize(addr: *const c_void) -> usize;
    }
}
