use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo::rerun-if-env-changed=ARNOLD_PATH");

    // The library itself is opened at runtime, so nothing is linked here.
    // If an SDK is around at build time, remember its bin folder as the
    // last-resort location for the loader.
    if let Ok(e) = env::var("ARNOLD_PATH") {
        let arnold_dir = PathBuf::from(e);
        let arnold_bin_dir = arnold_dir.join("bin");
        eprintln!("default arnold install dir: {}", arnold_bin_dir.display());
        println!("cargo::rustc-env=ARNOLD_SYS_INSTALL_DIR={}", arnold_bin_dir.display());
    }
}
