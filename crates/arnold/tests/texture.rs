use std::fs;

use arnold::texture::{self, TxStatus};
use arnold::{Session, SessionMode};

// 2x2 binary PPM
fn write_checker(path: &std::path::Path) {
    let mut data = b"P6\n2 2\n255\n".to_vec();
    data.extend_from_slice(&[255, 255, 255, 0, 0, 0, 0, 0, 0, 255, 255, 255]);
    fs::write(path, data).unwrap();
}

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_make_tx_and_wait() {
    arnold::init().unwrap();
    let _session = Session::begin(SessionMode::Batch).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("checker.ppm");
    write_checker(&source);

    texture::make_tx(&source, "-v", None).unwrap();
    let jobs = texture::wait_tx_jobs();
    assert_eq!(jobs.len(), 1);
    assert!(jobs[0].source.as_deref().is_some_and(|s| s.ends_with("checker.ppm")));
    assert!(matches!(jobs[0].status, Some(TxStatus::Updated | TxStatus::UpdateUnneeded)));
    assert!(dir.path().join("checker.tx").exists());

    // Nothing left to wait for
    assert!(texture::wait_tx_jobs().iter().all(|job| job.status != Some(TxStatus::Pending)));
}
