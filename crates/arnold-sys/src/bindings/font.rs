use crate::macros::arnold_api;
use crate::types::*;

arnold_api! {
    pub struct FontApi => font {
        fn AiFontGetFamilies() -> *const AtArray;
        fn AiFontGetStyles(family: AtString) -> *const AtArray;
        fn AiFontGetFilename(family: AtString, style: AtString) -> AtStringReturn;
    }
}
