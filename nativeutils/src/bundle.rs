use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::errors::LoadError;

pub trait ResourceBundle: Send + Sync {
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, LoadError>;
}

// Resources compiled into the binary, typically via include_bytes!.
pub struct StaticBundle {
    resources: HashMap<&'static str, &'static [u8]>,
}

impl StaticBundle {
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    pub fn insert(&mut self, path: &'static str, bytes: &'static [u8]) {
        self.resources.insert(path, bytes);
    }
}

impl Default for StaticBundle {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceBundle for StaticBundle {
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, LoadError> {
        match self.resources.get(path) {
            Some(bytes) => Ok(Box::new(*bytes)),
            None => Err(LoadError::NotFound(path.to_string())),
        }
    }
}

// Resources unpacked next to the application under a root directory.
pub struct DirBundle {
    root: PathBuf,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceBundle for DirBundle {
    fn open(&self, path: &str) -> Result<Box<dyn Read + '_>, LoadError> {
        let full = self.root.join(path.trim_start_matches('/'));
        if !full.is_file() {
            return Err(LoadError::NotFound(path.to_string()));
        }
        let file = File::open(full)?;
        Ok(Box::new(file))
    }
}
