use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use arnold::{
    RenderError, RenderMode, RenderSession, RenderStatus, RenderUpdateType, Session, SessionMode, UpdateInfo,
    Universe,
};

static SESSION: Mutex<()> = Mutex::new(());

fn minimal_scene(universe: &Universe<'_>, output: &std::path::Path) {
    let camera = universe.create_node("persp_camera", "camera").unwrap();
    camera.set_vec("position", arnold::AtVector::new(0.0, 0.0, 5.0)).unwrap();
    universe.create_node("sphere", "ball").unwrap();
    universe.create_node("gaussian_filter", "filter").unwrap();
    let driver = universe.create_node("driver_png", "driver").unwrap();
    driver.set_str("filename", &output.to_string_lossy()).unwrap();

    let options = universe.options().unwrap();
    options.set_node("camera", Some(camera)).unwrap();
    options.set_int("xres", 32).unwrap();
    options.set_int("yres", 32).unwrap();
    options.set_attributes("outputs \"RGBA RGBA filter driver\"").unwrap();
}

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_blocking_render_and_background_render() {
    let _guard = SESSION.lock().unwrap();
    arnold::init().unwrap();
    let session = Session::begin(SessionMode::Batch).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    let universe = Universe::new(&session).unwrap();
    minimal_scene(&universe, &output);

    {
        let mut render = RenderSession::new(&universe, SessionMode::Batch).unwrap();
        assert_eq!(render.status(), RenderStatus::NotStarted);
        render.render(RenderMode::Camera).unwrap();
        assert!(output.exists());
    }

    let passes = Arc::new(AtomicU32::new(0));
    let seen = passes.clone();
    let mut render = RenderSession::new(&universe, SessionMode::Interactive).unwrap();
    render
        .begin(
            RenderMode::Camera,
            Some(Box::new(move |update: RenderUpdateType, _info: &UpdateInfo| {
                if update == RenderUpdateType::AfterPass {
                    seen.fetch_add(1, Ordering::SeqCst);
                }
                arnold::default_status(update)
            })),
        )
        .unwrap();
    render.end().unwrap();
    assert!(passes.load(Ordering::SeqCst) >= 1);
}

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_render_without_camera_fails() {
    let _guard = SESSION.lock().unwrap();
    arnold::init().unwrap();
    let session = Session::begin(SessionMode::Batch).unwrap();
    let universe = Universe::new(&session).unwrap();
    let mut render = RenderSession::new(&universe, SessionMode::Batch).unwrap();
    let err = render.render(RenderMode::Camera).unwrap_err();
    assert!(matches!(
        err,
        arnold::Error::Render(RenderError::NoCamera | RenderError::NoOutputs)
    ));
}
