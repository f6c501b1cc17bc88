use std::sync::Mutex;

use arnold::{
    Array, AtRGB, AtVector, CacheFlags, LogBridge, LogFlags, NodeEntry, NodeMask, NodeType, ParamType, ParamValue,
    ParamValueMap, SceneFormat, Session, SessionMode, Universe,
};

// One session per process
static SESSION: Mutex<()> = Mutex::new(());

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_node_entries() {
    let _guard = SESSION.lock().unwrap();
    arnold::init().unwrap();
    let _session = Session::begin(SessionMode::Batch).unwrap();

    let sphere = NodeEntry::look_up("sphere").unwrap().expect("built-in sphere");
    assert_eq!(sphere.name(), "sphere");
    assert_eq!(sphere.node_type(), Some(NodeType::Shape));
    assert!(sphere.filename().is_none());

    let radius = sphere.look_up_param("radius").unwrap().unwrap();
    assert_eq!(radius.param_type(), Some(ParamType::Array));
    assert_eq!(radius.sub_type(), Some(ParamType::Float));
    assert_eq!(sphere.params().count(), sphere.num_params());

    let cameras: Vec<_> = NodeEntry::iter(NodeMask::CAMERA).map(|e| e.name()).collect();
    assert!(cameras.iter().any(|name| name == "persp_camera"));
    assert!(NodeEntry::look_up("no_such_node").unwrap().is_none());
}

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_enum_defaults() {
    let _guard = SESSION.lock().unwrap();
    arnold::init().unwrap();
    let _session = Session::begin(SessionMode::Batch).unwrap();

    let options = NodeEntry::look_up("options").unwrap().unwrap();
    let param = options.look_up_param("AA_samples").unwrap().unwrap();
    assert_eq!(param.default_value(), ParamValue::Int(1));

    let filter = NodeEntry::look_up("gaussian_filter").unwrap().unwrap();
    let width = filter.look_up_param("width").unwrap().unwrap();
    assert!(matches!(width.default_value(), ParamValue::Float(w) if w > 0.0));
}

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_build_and_query_universe() {
    let _guard = SESSION.lock().unwrap();
    arnold::init().unwrap();
    let session = Session::begin(SessionMode::Batch).unwrap();
    let _bridge = LogBridge::install(LogFlags::WARNINGS | LogFlags::ERRORS);

    let universe = Universe::new(&session).unwrap();
    let sphere = universe.create_node("sphere", "ball").unwrap();
    sphere.set_vec("center", AtVector::new(0.0, 1.0, 0.0)).unwrap();
    sphere.set_array("radius", Array::from_slice(&[2.0f32]).unwrap()).unwrap();
    let shader = universe.create_node("flat", "ball_shader").unwrap();
    shader.set_rgb("color", AtRGB::new(1.0, 0.0, 0.0)).unwrap();
    sphere.set_node("shader", Some(shader)).unwrap();

    assert_eq!(sphere.vec("center").unwrap(), AtVector::new(0.0, 1.0, 0.0));
    let radius = sphere.array("radius").unwrap().unwrap();
    assert_eq!(radius.flt(0), Some(2.0));
    assert_eq!(radius.flt(1), None);

    let keyed = Array::from_keys(&[1.0f32, 2.0, 3.0, 4.0], 2).unwrap();
    assert_eq!((keyed.len(), keyed.num_keys()), (2, 2));
    assert_eq!(keyed.to_vec::<f32>(), Some(vec![1.0, 2.0, 3.0, 4.0]));
    // A borrowed array is copied into the other node
    let other = universe.create_node("sphere", "other_ball").unwrap();
    other.set_array("radius", radius).unwrap();
    assert_eq!(other.array("radius").unwrap().unwrap().flt(0), Some(2.0));
    assert_eq!(sphere.node("shader").unwrap(), Some(shader));
    assert!(sphere.is("sphere").unwrap());

    let found = universe.look_up("ball").unwrap().unwrap();
    assert_eq!(found.name().as_deref(), Some("ball"));
    let mut shapes: Vec<_> = universe.nodes(NodeMask::SHAPE).filter_map(|n| n.name()).collect();
    shapes.sort();
    assert_eq!(shapes, vec!["ball".to_string(), "other_ball".to_string()]);

    sphere.declare("tag", "constant STRING").unwrap();
    sphere.set_str("tag", "hero").unwrap();
    assert_eq!(sphere.str("tag").unwrap().as_deref(), Some("hero"));
    sphere.set_str("tag", "").unwrap();
    assert_eq!(sphere.str("tag").unwrap(), None);
    let tag = sphere.user_param("tag").unwrap().unwrap();
    assert_eq!(tag.param_type(), Some(ParamType::String));

    let copy = sphere.clone_as("ball_copy").unwrap();
    let other_shader = universe.create_node("flat", "other_shader").unwrap();
    shader.replace_with(other_shader);
    assert_eq!(sphere.node("shader").unwrap(), Some(other_shader));
    assert!(universe.look_up("ball_shader").unwrap().is_some());

    // `copy` is not touched again
    unsafe { copy.destroy() }.unwrap();
    assert!(universe.look_up("ball_copy").unwrap().is_none());
    universe.flush_cache(CacheFlags::ALL).unwrap();
}

#[test]
#[ignore = "requires the Arnold SDK"]
fn test_write_and_reload_scene() {
    let _guard = SESSION.lock().unwrap();
    arnold::init().unwrap();
    let session = Session::begin(SessionMode::Batch).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.ass");
    {
        let universe = Universe::new(&session).unwrap();
        let light = universe.create_node("point_light", "key").unwrap();
        light.set_flt("intensity", 4.0).unwrap();
        universe.write_scene(&path, None, None).unwrap();
    }

    let universe = Universe::new(&session).unwrap();
    let mut params = ParamValueMap::new().unwrap();
    params.set_int("mask", NodeMask::LIGHT.bits() as i32).unwrap();
    universe.load_scene(&path, Some(&params)).unwrap();
    let light = universe.look_up("key").unwrap().unwrap();
    assert_eq!(light.flt("intensity").unwrap(), 4.0);

    assert!(SceneFormat::all().iter().any(|f| f.extensions.iter().any(|e| e == ".ass") && f.reads));
    assert!(arnold::scene::format_supported(".ass").unwrap());
}
