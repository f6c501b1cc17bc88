//! The process-wide handle on the loaded Arnold library.

use std::sync::{Mutex, OnceLock};

use libloading::Library;
use tracing::error;

use crate::bindings::{
    adp::AdpApi, allocate::AllocateApi, array::ArrayApi, color_managers::ColorManagerApi,
    device::DeviceApi, drivers::DriverApi, enums::EnumApi, error_reporting::ErrorReportingApi,
    file_utils::FileApi, font::FontApi, map::ParamValueMapApi, materialx::MaterialxApi,
    matrix::MatrixApi, metadata::MetadataApi, msg::MsgApi, msg::MsgFormatApi,
    node_entry::NodeEntryApi, nodes::NodeApi, operator::OperatorApi, params::ParamApi,
    plugins::PluginApi, procedural::ProceduralApi, render::RenderApi, scene::SceneApi,
    shader::ShaderApi, stats::StatsApi, string::StringApi, texture::TextureApi,
    universe::UniverseApi, version::VersionApi, volume::VolumeApi,
};
use crate::loader::{self, LoadError, LoadedFrom, LoaderConfig};

static ARNOLD: OnceLock<Arnold> = OnceLock::new();
static LOADING: Mutex<()> = Mutex::new(());

/// The opened library and every symbol resolved from it.
pub struct Arnold {
    library: Library,
    loaded_from: LoadedFrom,
    pub adp: AdpApi,
    pub allocate: AllocateApi,
    pub array: ArrayApi,
    pub color_manager: ColorManagerApi,
    pub device: DeviceApi,
    pub drivers: DriverApi,
    pub enums: EnumApi,
    pub error_reporting: ErrorReportingApi,
    pub file_utils: FileApi,
    pub font: FontApi,
    pub map: ParamValueMapApi,
    pub materialx: MaterialxApi,
    pub matrix: MatrixApi,
    pub metadata: MetadataApi,
    pub msg: MsgApi,
    pub msg_format: MsgFormatApi,
    pub node_entry: NodeEntryApi,
    pub nodes: NodeApi,
    pub operator: OperatorApi,
    pub params: ParamApi,
    pub plugins: PluginApi,
    pub procedural: ProceduralApi,
    pub render: RenderApi,
    pub scene: SceneApi,
    pub shader: ShaderApi,
    pub stats: StatsApi,
    pub string: StringApi,
    pub texture: TextureApi,
    pub universe: UniverseApi,
    pub version: VersionApi,
    pub volume: VolumeApi,
}

impl Arnold {
    fn resolve(library: Library, loaded_from: LoadedFrom) -> Result<Self, LoadError> {
        Ok(Self {
            adp: AdpApi::resolve(&library)?,
            allocate: AllocateApi::resolve(&library)?,
            array: ArrayApi::resolve(&library)?,
            color_manager: ColorManagerApi::resolve(&library)?,
            device: DeviceApi::resolve(&library)?,
            drivers: DriverApi::resolve(&library)?,
            enums: EnumApi::resolve(&library)?,
            error_reporting: ErrorReportingApi::resolve(&library)?,
            file_utils: FileApi::resolve(&library)?,
            font: FontApi::resolve(&library)?,
            map: ParamValueMapApi::resolve(&library)?,
            materialx: MaterialxApi::resolve(&library)?,
            matrix: MatrixApi::resolve(&library)?,
            metadata: MetadataApi::resolve(&library)?,
            msg: MsgApi::resolve(&library)?,
            msg_format: MsgFormatApi::resolve(&library)?,
            node_entry: NodeEntryApi::resolve(&library)?,
            nodes: NodeApi::resolve(&library)?,
            operator: OperatorApi::resolve(&library)?,
            params: ParamApi::resolve(&library)?,
            plugins: PluginApi::resolve(&library)?,
            procedural: ProceduralApi::resolve(&library)?,
            render: RenderApi::resolve(&library)?,
            scene: SceneApi::resolve(&library)?,
            shader: ShaderApi::resolve(&library)?,
            stats: StatsApi::resolve(&library)?,
            string: StringApi::resolve(&library)?,
            texture: TextureApi::resolve(&library)?,
            universe: UniverseApi::resolve(&library)?,
            version: VersionApi::resolve(&library)?,
            volume: VolumeApi::resolve(&library)?,
            library,
            loaded_from,
        })
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn loaded_from(&self) -> &LoadedFrom {
        &self.loaded_from
    }
}

pub(crate) fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, LoadError> {
    // SAFETY: every table declares the signature of the exported function
    unsafe { library.get::<T>(name.as_bytes()) }
        .map(|symbol| *symbol)
        .map_err(|source| LoadError::MissingSymbol {
            symbol: name,
            source,
        })
}

/// Loads the library as configured by the environment.
pub fn load() -> Result<&'static Arnold, LoadError> {
    load_with(&LoaderConfig::from_env())
}

/// Loads the library once. Later calls return the first instance and ignore
/// `config`.
pub fn load_with(config: &LoaderConfig) -> Result<&'static Arnold, LoadError> {
    if let Some(arnold) = ARNOLD.get() {
        return Ok(arnold);
    }

    let _guard = LOADING.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(arnold) = ARNOLD.get() {
        return Ok(arnold);
    }
    let (library, loaded_from) = loader::open(config)?;
    let arnold = Arnold::resolve(library, loaded_from)?;
    Ok(ARNOLD.get_or_init(|| arnold))
}

pub fn is_loaded() -> bool {
    ARNOLD.get().is_some()
}

/// The loaded library, loading it from the environment on first use.
///
/// Every raw function goes through here. Failing to load is fatal: the error
/// is logged and the process exits with status 1. Call [`load_with`] first to
/// handle the failure instead.
pub fn api() -> &'static Arnold {
    if let Some(arnold) = ARNOLD.get() {
        return arnold;
    }
    match load() {
        Ok(arnold) => arnold,
        Err(err) => {
            error!("{err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
