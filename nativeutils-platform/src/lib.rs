use std::sync::OnceLock;

use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsType {
    Windows,
    MacOs,
    Linux,
    Other,
}

pub fn classify_os_name(name: &str) -> OsType {
    let name = name.to_lowercase();
    if name.contains("mac") || name.contains("darwin") {
        OsType::MacOs
    } else if name.contains("win") {
        OsType::Windows
    } else if name.contains("nux") {
        OsType::Linux
    } else {
        OsType::Other
    }
}

pub fn get_operating_system_type() -> OsType {
    static DETECTED_OS: OnceLock<OsType> = OnceLock::new();
    *DETECTED_OS.get_or_init(|| {
        let os = classify_os_name(std::env::consts::OS);
        info!("Detected operating system: {:?}", os);
        os
    })
}

pub fn library_extension(os: OsType) -> &'static str {
    match os {
        OsType::Windows => "dll",
        OsType::MacOs => "dylib",
        _ => "so",
    }
}

pub fn library_file_name(os: OsType, stem: &str) -> String {
    match os {
        OsType::Windows => format!("{}.{}", stem, library_extension(os)),
        _ => format!("lib{}.{}", stem, library_extension(os)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_table() {
        assert_eq!(classify_os_name("Mac OS X"), OsType::MacOs);
        assert_eq!(classify_os_name("Darwin"), OsType::MacOs);
        assert_eq!(classify_os_name("Windows 10"), OsType::Windows);
        assert_eq!(classify_os_name("Linux"), OsType::Linux);
        assert_eq!(classify_os_name("SunOS"), OsType::Other);
        assert_eq!(classify_os_name(""), OsType::Other);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let first = get_operating_system_type();
        let second = get_operating_system_type();
        assert_eq!(first, second);
        assert_eq!(first, classify_os_name(std::env::consts::OS));
    }

    #[test]
    fn test_library_file_names() {
        assert_eq!(library_file_name(OsType::Windows, "demo"), "demo.dll");
        assert_eq!(library_file_name(OsType::MacOs, "demo"), "libdemo.dylib");
        assert_eq!(library_file_name(OsType::Linux, "demo"), "libdemo.so");
        assert_eq!(library_file_name(OsType::Other, "demo"), "libdemo.so");
    }
}
