use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use log::{info, warn};

fn registry() -> &'static Mutex<Vec<PathBuf>> {
    static REGISTRY: OnceLock<Mutex<Vec<PathBuf>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
}

pub fn register_exit_cleanup(path: &Path) {
    registry()
        .lock()
        .expect("cleanup registry poisoned")
        .push(path.to_path_buf());
    install_exit_hook();
}

pub fn cleanup_registered_files() {
    let mut paths = registry().lock().expect("cleanup registry poisoned");
    for path in paths.drain(..) {
        match fs::remove_file(&path) {
            Ok(()) => info!("Removed staged library {}", path.display()),
            // already removed on a failure path before the load
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not remove staged library {}: {}", path.display(), e),
        }
    }
}

#[cfg(unix)]
fn install_exit_hook() {
    use std::sync::Once;

    static HOOK: Once = Once::new();
    HOOK.call_once(|| unsafe {
        libc::atexit(run_exit_cleanup);
    });
}

// No portable exit hook here; hosts call cleanup_registered_files themselves.
#[cfg(not(unix))]
fn install_exit_hook() {}

#[cfg(unix)]
extern "C" fn run_exit_cleanup() {
    cleanup_registered_files();
}
