use std::fs;
use std::path::PathBuf;

use nativeutils::bundle::DirBundle;
use nativeutils::cleanup::cleanup_registered_files;
use nativeutils::errors::LoadError;
use nativeutils::load_library_from_bundle;

fn staged_files_matching(fragment: &str) -> Vec<PathBuf> {
    fs::read_dir(std::env::temp_dir())
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.contains(fragment))
        })
        .collect()
}

#[test]
fn unloadable_library_fails_and_is_removed_by_the_exit_sweep() {
    let dir = tempfile::TempDir::new().unwrap();
    let name = format!("garbage-{}.so", std::process::id());
    fs::write(dir.path().join(&name), b"these bytes are not a shared object").unwrap();
    let bundle = DirBundle::new(dir.path());

    let result = load_library_from_bundle(&bundle, &format!("/{}", name));
    assert!(matches!(result, Err(LoadError::Loader(_))));

    // the staged copy outlives the failed load until the sweep runs
    assert_eq!(staged_files_matching(&name).len(), 1);
    cleanup_registered_files();
    assert!(staged_files_matching(&name).is_empty());
}
