use std::ffi::CStr;

use arnold_sys::*;

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_load_from_environment() {
    let arnold = load().expect("set ARNOLD_PATH or ARNOLD_SYS_LIBRARY");
    assert!(is_loaded());
    let loaded_from = arnold.loaded_from();
    println!("loaded {} ({:?})", loaded_from.candidate, loaded_from.location);
    assert!(!loaded_from.candidate.to_string().is_empty());
}

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_version_matches_bindings() {
    load().unwrap();
    let null = std::ptr::null_mut();
    let version = unsafe { CStr::from_ptr(AiGetVersion(null, null, null, null)) };
    let version = version.to_str().unwrap();
    assert!(version.starts_with(&format!("{AI_VERSION_ARCH_NUM}.")), "{version}");
}

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_begin_end_and_strings() {
    load().unwrap();
    unsafe {
        AiBegin(AI_SESSION_BATCH);
        assert!(AiArnoldIsActive());

        let a = AiCreateAtStringData_private(c"polymesh".as_ptr());
        let b = AiCreateAtStringData_private(c"polymesh".as_ptr());
        assert_eq!(a, b, "interned strings share storage");
        assert_eq!(AiAtStringLength(a), "polymesh".len());

        let entry = AiNodeEntryLookUp(AtString { data: a });
        assert!(!entry.is_null());
        assert_eq!(AiNodeEntryGetType(entry), AI_NODE_SHAPE);

        AiEnd();
    }
}
