//! Analytics program opt-in.

use std::ffi::CStr;

use crate::macros::arnold_api;
use crate::types::*;

pub const AI_ADP_HOSTNAME: &CStr = c"ADDIN_PARENT_NAME";
pub const AI_ADP_HOSTVERSION: &CStr = c"ADDIN_PARENT_VERSION";
pub const AI_ADP_PLUGINNAME: &CStr = c"ADDIN_NAME";
pub const AI_ADP_PLUGINVERSION: &CStr = c"ADDIN_VERSION";

pub const AI_ADP_DIALOG_ONLY_FIRST_TIME: AtADPDialogMode = 1;
pub const AI_ADP_DIALOG_ALWAYS: AtADPDialogMode = 2;

arnold_api! {
    pub struct AdpApi => adp {
        fn AiADPDisplayDialogWindow(mode: AtADPDialogMode);
        fn AiADPDisableDialogWindow();
        fn AiADPSetOptedIn(wants_optin: bool);
        fn AiADPIsOptedIn() -> bool;
        fn AiADPAddProductMetadata(name: AtString, value: AtString);
    }
}
