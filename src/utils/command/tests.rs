use super::*;

fn runner() -> ShellRunner {
    ShellRunner::new(None, "failed".to_string())
}

#[test]
fn test_quote_arg() {
    assert_eq!(quote_arg("button").as_deref(), Some("button"));
    let quoted = quote_arg("radio group").unwrap();
    assert_ne!(quoted, "radio group");
    assert_eq!(shlex::split(&quoted), Some(vec!["radio group".to_string()]));
    assert_eq!(quote_arg("bad\0arg"), None);
}

#[cfg(unix)]
#[test]
fn test_shell_runner_success_and_failure() {
    let runner = runner();
    assert!(runner.run("true", None, false));
    assert!(!runner.run("exit 3", None, false));
}

#[cfg(unix)]
#[test]
fn test_shell_runner_uses_cwd() {
    let dir = tempfile::tempdir().unwrap();
    let runner = runner();
    assert!(runner.run("touch marker.txt", Some(dir.path()), false));
    assert!(dir.path().join("marker.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_missing_tool() {
    assert_eq!(missing_tool(&["sh"]), None);
    assert_eq!(
        missing_tool(&["sh", "definitely-not-a-real-tool-xyz"]),
        Some("definitely-not-a-real-tool-xyz".to_string())
    );
}
