use super::*;
use std::path::Path;

#[test]
fn test_project_name_uses_last_component() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("my-app");
    std::fs::create_dir(&root).unwrap();

    assert_eq!(project_name(&root), "my-app");
}

#[test]
fn test_project_name_of_missing_path() {
    assert_eq!(project_name(Path::new("/does/not/exist/demo")), "demo");
}

#[test]
fn test_project_root_prefers_explicit_dir() {
    let root = project_root(Some(Path::new("/tmp/somewhere"))).unwrap();
    assert_eq!(root, PathBuf::from("/tmp/somewhere"));
}
