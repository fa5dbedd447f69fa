use tempfile::{Builder, NamedTempFile};

use crate::cleanup::register_exit_cleanup;
use crate::errors::LoadError;

pub(crate) const TEMP_FILE_PREFIX: &str = "nativeutils";

// Minimum name-component length accepted by common temp-file facilities.
const MIN_COMPONENT_LENGTH: usize = 3;

pub(crate) fn validate_path(path: &str) -> Result<&str, LoadError> {
    if path.is_empty() {
        return Err(LoadError::InvalidArgument(
            "the resource path cannot be empty".to_string(),
        ));
    }
    let name = base_name(path);
    if name.len() < MIN_COMPONENT_LENGTH {
        return Err(LoadError::InvalidArgument(format!(
            "the resource name `{}` is shorter than {} characters",
            name, MIN_COMPONENT_LENGTH
        )));
    }
    Ok(name)
}

pub(crate) fn create_temp_file(name: &str) -> Result<NamedTempFile, LoadError> {
    let temp = Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(name)
        .tempfile()?;
    register_exit_cleanup(temp.path());
    Ok(temp)
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
