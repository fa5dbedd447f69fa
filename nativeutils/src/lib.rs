pub mod bundle;
pub mod cleanup;
pub mod errors;
mod utilities;

use std::io;
use std::path::PathBuf;

use libloading::Library;
use log::info;

use bundle::ResourceBundle;
use errors::LoadError;
use nativeutils_platform::{get_operating_system_type, library_file_name};

/// Copies the bundled resource at `path` into a uniquely named temporary file
/// and loads it as a native library. The staged file is removed on every
/// failure before the load and swept at process exit otherwise. Dropping the
/// returned `Library` unloads it, so hosts keep the handle alive.
pub fn load_library_from_bundle(
    bundle: &dyn ResourceBundle,
    path: &str,
) -> Result<Library, LoadError> {
    let staged = stage_library(bundle, path)?;
    info!("Loading native library from {}", staged.display());
    let library = unsafe { Library::new(&staged) }?;
    Ok(library)
}

/// Resolves `stem` to the platform's shared-library file name under `dir`
/// (e.g. `libfaiss.so`, `libfaiss.dylib`, `faiss.dll`) and loads it.
pub fn load_platform_library(
    bundle: &dyn ResourceBundle,
    dir: &str,
    stem: &str,
) -> Result<Library, LoadError> {
    let os = get_operating_system_type();
    let file_name = library_file_name(os, stem);
    let path = format!("{}/{}", dir.trim_end_matches('/'), file_name);
    load_library_from_bundle(bundle, &path)
}

fn stage_library(bundle: &dyn ResourceBundle, path: &str) -> Result<PathBuf, LoadError> {
    let name = utilities::validate_path(path)?;
    let mut temp = utilities::create_temp_file(name)?;
    // the NamedTempFile guard deletes the staged copy if anything below fails
    let mut stream = bundle.open(path)?;
    let bytes = io::copy(&mut stream, temp.as_file_mut())?;
    info!("Staged {} bytes of `{}` into {}", bytes, path, temp.path().display());
    let (file, staged) = temp.keep().map_err(|e| LoadError::Io(e.error))?;
    drop(file);
    Ok(staged)
}
