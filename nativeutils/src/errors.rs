use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LoadError {
    InvalidArgument(String),
    NotFound(String),
    Io(io::Error),
    Loader(libloading::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            LoadError::NotFound(path) => {
                write!(f, "resource `{}` was not found inside the bundle", path)
            }
            LoadError::Io(e) => write!(f, "i/o failure while staging library: {}", e),
            LoadError::Loader(e) => write!(f, "native loader rejected library: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Loader(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<libloading::Error> for LoadError {
    fn from(e: libloading::Error) -> Self {
        LoadError::Loader(e)
    }
}
