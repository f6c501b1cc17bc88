//! Locating and opening the Arnold shared library.
//!
//! The search order is: an explicit path, the OS loader's own search, every
//! directory of the platform library search variable, and finally the bin
//! folder of an SDK installation.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use libloading::Library;
use tracing::{debug, info, warn};

/// Environment variable naming the library file to open before searching.
pub const LIBRARY_VAR: &str = "ARNOLD_SYS_LIBRARY";
/// Environment variable pointing at the root of an Arnold SDK.
pub const SDK_VAR: &str = "ARNOLD_PATH";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{0} not supported")]
    UnsupportedPlatform(&'static str),
    #[error("32 bit targets not supported, must use 64 bit")]
    UnsupportedPointerWidth,
    #[error("could not find {name} (tried: {})", .tried.join("; "))]
    NotFound {
        name: &'static str,
        tried: Vec<String>,
    },
    #[error("{symbol} is missing from the loaded Arnold library")]
    MissingSymbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    pub fn current() -> Option<Platform> {
        if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else if cfg!(target_os = "linux") {
            Some(Platform::Linux)
        } else if cfg!(target_os = "macos") {
            Some(Platform::MacOs)
        } else {
            None
        }
    }

    pub fn library_name(self) -> &'static str {
        match self {
            Platform::Windows => "ai.dll",
            Platform::Linux => "libai.so",
            Platform::MacOs => "libai.dylib",
        }
    }

    pub fn search_path_var(self) -> &'static str {
        match self {
            Platform::Windows => "PATH",
            Platform::Linux => "LD_LIBRARY_PATH",
            Platform::MacOs => "DYLD_LIBRARY_PATH",
        }
    }
}

/// Where to look for the library.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    pub explicit_path: Option<PathBuf>,
    pub install_dir: Option<PathBuf>,
    pub search_path: Option<OsString>,
}

impl LoaderConfig {
    /// Reads [`LIBRARY_VAR`], [`SDK_VAR`] and the platform's library search
    /// variable. Without `ARNOLD_PATH` at runtime the install dir falls back
    /// to the one seen when this crate was built.
    pub fn from_env() -> Self {
        let non_empty = |value: &OsString| !value.is_empty();
        let install_dir = env::var_os(SDK_VAR)
            .filter(non_empty)
            .map(|root| PathBuf::from(root).join("bin"))
            .or_else(|| option_env!("ARNOLD_SYS_INSTALL_DIR").map(PathBuf::from));

        Self {
            explicit_path: env::var_os(LIBRARY_VAR).filter(non_empty).map(PathBuf::from),
            install_dir,
            search_path: Platform::current()
                .and_then(|platform| env::var_os(platform.search_path_var()))
                .filter(non_empty),
        }
    }

    pub fn with_explicit_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    /// Directories of the search variable, empty entries skipped.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        self.search_path
            .as_deref()
            .map(|paths| {
                env::split_paths(paths)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// One attempt of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Explicit(PathBuf),
    /// Bare library name handed to the OS loader.
    System(&'static str),
    SearchDir(PathBuf),
    InstallDir(PathBuf),
}

impl Candidate {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Candidate::Explicit(path) | Candidate::SearchDir(path) | Candidate::InstallDir(path) => {
                Some(path)
            }
            Candidate::System(_) => None,
        }
    }

    /// # Safety
    /// Opening runs the library's initialisers.
    unsafe fn open(&self) -> Result<Library, libloading::Error> {
        match self {
            Candidate::System(name) => unsafe { Library::new(name) },
            Candidate::Explicit(path) | Candidate::SearchDir(path) => unsafe { Library::new(path) },
            Candidate::InstallDir(path) => unsafe { open_beside_dependencies(path) },
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Explicit(path) => write!(f, "{} (explicit)", path.display()),
            Candidate::System(name) => write!(f, "{name} (system search)"),
            Candidate::SearchDir(path) => write!(f, "{}", path.display()),
            Candidate::InstallDir(path) => write!(f, "{} (install dir)", path.display()),
        }
    }
}

// The SDK keeps its dependent DLLs next to ai.dll, which the default search
// order would not look at.
#[cfg(windows)]
unsafe fn open_beside_dependencies(path: &Path) -> Result<Library, libloading::Error> {
    use libloading::os::windows;

    unsafe { windows::Library::load_with_flags(path, windows::LOAD_WITH_ALTERED_SEARCH_PATH) }
        .map(Library::from)
}

#[cfg(not(windows))]
unsafe fn open_beside_dependencies(path: &Path) -> Result<Library, libloading::Error> {
    unsafe { Library::new(path) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Standard,
    NonStandard(PathBuf),
    /// Resolved by the OS loader but not present in any search directory,
    /// i.e. already mapped into the process.
    AlreadyLoaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFrom {
    pub candidate: Candidate,
    pub location: Location,
}

/// Order in which [`open`] tries to load the library.
pub fn search_plan(config: &LoaderConfig, platform: Platform) -> Vec<Candidate> {
    let name = platform.library_name();
    let mut plan = Vec::new();

    if let Some(path) = &config.explicit_path {
        plan.push(Candidate::Explicit(path.clone()));
    }
    plan.push(Candidate::System(name));
    plan.extend(
        config
            .search_dirs()
            .into_iter()
            .map(|dir| Candidate::SearchDir(real_path(&dir).join(name))),
    );
    if let Some(dir) = &config.install_dir {
        plan.push(Candidate::InstallDir(dir.join(name)));
    }
    plan
}

/// Works out where a library found through the OS loader came from.
pub fn classify_system_load(
    config: &LoaderConfig,
    platform: Platform,
    exists: impl Fn(&Path) -> bool,
) -> Location {
    // An empty variable counts as unset
    if config.search_path.as_deref().is_none_or(OsStr::is_empty) {
        return Location::Standard;
    }
    let name = platform.library_name();
    match config
        .search_dirs()
        .iter()
        .map(|dir| real_path(dir))
        .find(|dir| exists(&dir.join(name)))
    {
        None => Location::AlreadyLoaded,
        Some(dir) => classify_dir(config, dir),
    }
}

fn classify_dir(config: &LoaderConfig, dir: PathBuf) -> Location {
    match &config.install_dir {
        Some(install_dir) if real_path(install_dir) == dir => Location::Standard,
        _ => Location::NonStandard(dir),
    }
}

fn real_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn locate(candidate: &Candidate, config: &LoaderConfig, platform: Platform) -> Location {
    match candidate {
        Candidate::System(_) => classify_system_load(config, platform, Path::exists),
        Candidate::InstallDir(_) => Location::Standard,
        Candidate::Explicit(path) | Candidate::SearchDir(path) => match path.parent() {
            Some(dir) => classify_dir(config, real_path(dir)),
            None => Location::NonStandard(path.clone()),
        },
    }
}

/// Opens the first candidate of [`search_plan`] that loads.
pub fn open(config: &LoaderConfig) -> Result<(Library, LoadedFrom), LoadError> {
    let platform = Platform::current().ok_or(LoadError::UnsupportedPlatform(env::consts::OS))?;
    if !cfg!(target_pointer_width = "64") {
        return Err(LoadError::UnsupportedPointerWidth);
    }

    let name = platform.library_name();
    let mut tried = Vec::new();
    for candidate in search_plan(config, platform) {
        debug!(%candidate, "opening Arnold library");
        // SAFETY: the Arnold library has no initialisers with preconditions
        match unsafe { candidate.open() } {
            Ok(library) => {
                let location = locate(&candidate, config, platform);
                match &location {
                    Location::Standard => info!(%candidate, "loaded {name}"),
                    Location::NonStandard(dir) if matches!(candidate, Candidate::System(_)) => {
                        warn!("{name} loaded from non standard location {}", dir.display())
                    }
                    Location::NonStandard(dir) => debug!(%candidate, "loaded {name} from {}", dir.display()),
                    Location::AlreadyLoaded => info!("{name} already loaded"),
                }
                return Ok((library, LoadedFrom { candidate, location }));
            }
            Err(err) => {
                debug!(%candidate, %err, "could not open");
                tried.push(format!("{candidate}: {err}"));
            }
        }
    }
    Err(LoadError::NotFound { name, tried })
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    fn joined(dirs: &[&Path]) -> OsString {
        env::join_paths(dirs).unwrap()
    }

    #[test]
    fn test_platform_names() {
        assert_eq!(Platform::Windows.library_name(), "ai.dll");
        assert_eq!(Platform::Linux.library_name(), "libai.so");
        assert_eq!(Platform::MacOs.library_name(), "libai.dylib");
        assert_eq!(Platform::Windows.search_path_var(), "PATH");
        assert_eq!(Platform::Linux.search_path_var(), "LD_LIBRARY_PATH");
        assert_eq!(Platform::MacOs.search_path_var(), "DYLD_LIBRARY_PATH");
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn test_current_platform_supported() {
        assert!(Platform::current().is_some());
    }

    #[test]
    fn test_plan_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let config = LoaderConfig::default()
            .with_explicit_path("/opt/custom/libai.so")
            .with_search_path(joined(&[first.path(), second.path()]))
            .with_install_dir("/opt/arnold/bin");

        let plan = search_plan(&config, Platform::Linux);
        assert_eq!(
            plan,
            vec![
                Candidate::Explicit(PathBuf::from("/opt/custom/libai.so")),
                Candidate::System("libai.so"),
                Candidate::SearchDir(real_path(first.path()).join("libai.so")),
                Candidate::SearchDir(real_path(second.path()).join("libai.so")),
                Candidate::InstallDir(PathBuf::from("/opt/arnold/bin/libai.so")),
            ]
        );
    }

    #[test]
    fn test_plan_without_configuration() {
        let plan = search_plan(&LoaderConfig::default(), Platform::MacOs);
        assert_eq!(plan, vec![Candidate::System("libai.dylib")]);
    }

    #[test]
    fn test_plan_skips_empty_search_entries() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoaderConfig::default().with_search_path(joined(&[
            Path::new(""),
            dir.path(),
            Path::new(""),
        ]));
        let dirs = config.search_dirs();
        assert_eq!(dirs, vec![dir.path().to_path_buf()]);
        assert_eq!(search_plan(&config, Platform::Windows).len(), 2);
    }

    #[test]
    fn test_classify_first_matching_dir() {
        let empty = tempfile::tempdir().unwrap();
        let custom = tempfile::tempdir().unwrap();
        let install = tempfile::tempdir().unwrap();
        File::create(custom.path().join("libai.so")).unwrap();
        File::create(install.path().join("libai.so")).unwrap();

        let config = LoaderConfig::default()
            .with_search_path(joined(&[empty.path(), custom.path(), install.path()]))
            .with_install_dir(install.path());

        assert_eq!(
            classify_system_load(&config, Platform::Linux, Path::exists),
            Location::NonStandard(real_path(custom.path()))
        );
    }

    #[test]
    fn test_classify_install_dir_is_standard() {
        let install = tempfile::tempdir().unwrap();
        File::create(install.path().join("libai.dylib")).unwrap();

        let config = LoaderConfig::default()
            .with_search_path(joined(&[install.path()]))
            .with_install_dir(install.path());

        assert_eq!(
            classify_system_load(&config, Platform::MacOs, Path::exists),
            Location::Standard
        );
    }

    #[test]
    fn test_classify_already_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoaderConfig::default().with_search_path(joined(&[dir.path()]));
        assert_eq!(
            classify_system_load(&config, Platform::Linux, Path::exists),
            Location::AlreadyLoaded
        );
    }

    #[test]
    fn test_classify_without_search_path() {
        assert_eq!(
            classify_system_load(&LoaderConfig::default(), Platform::Linux, |_| true),
            Location::Standard
        );
    }

    #[test]
    fn test_classify_empty_search_path() {
        let config = LoaderConfig::default().with_search_path("");
        assert_eq!(
            classify_system_load(&config, Platform::Linux, |_| false),
            Location::Standard
        );
    }

    #[test]
    fn test_locate_search_dir_outside_install_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoaderConfig::default().with_install_dir("/opt/arnold/bin");
        let candidate = Candidate::SearchDir(dir.path().join("libai.so"));
        assert_eq!(
            locate(&candidate, &config, Platform::Linux),
            Location::NonStandard(real_path(dir.path()))
        );
    }

    #[test]
    fn test_locate_explicit_in_install_dir() {
        let install = tempfile::tempdir().unwrap();
        let config = LoaderConfig::default().with_install_dir(install.path());
        let candidate = Candidate::Explicit(install.path().join("libai.so"));
        assert_eq!(locate(&candidate, &config, Platform::Linux), Location::Standard);
    }

    #[test]
    fn test_open_reports_every_attempt() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("not-a-library");
        fs::write(&bogus, b"definitely not an object file").unwrap();

        let config = LoaderConfig::default()
            .with_explicit_path(&bogus)
            .with_search_path(joined(&[dir.path()]))
            .with_install_dir(dir.path().join("bin"));

        // A machine with the SDK on its default search path resolves the
        // bare name, nothing to check then.
        if let Err(err) = open(&config) {
            let LoadError::NotFound { tried, .. } = err else {
                panic!("unexpected error {err}");
            };
            assert_eq!(tried.len(), 4);
            assert!(tried[0].contains("not-a-library"));
            assert!(tried[3].contains("install dir"));
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = LoadError::NotFound {
            name: "libai.so",
            tried: vec!["a: missing".into(), "b: missing".into()],
        };
        assert_eq!(
            err.to_string(),
            "could not find libai.so (tried: a: missing; b: missing)"
        );
    }
}
