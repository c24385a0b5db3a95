//! External command execution.
//!
//! Package-manager invocations go through [`CommandRunner`] so the setup
//! steps can be driven by a fake in tests.

use crate::ui;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub trait CommandRunner {
    /// Run `command` through the platform shell, blocking until it exits.
    /// Interactive commands share the terminal with the child process.
    fn run(&self, command: &str, cwd: Option<&Path>, interactive: bool) -> bool;
}

/// Build a shell command in a platform-aware way.
///
/// - Unix: `sh -c <command>`
/// - Windows: `cmd /C <command>`
pub fn build_shell_command(command: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(command);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }
}

/// Quote a single argument for inclusion in a shell command line
pub fn quote_arg(arg: &str) -> Option<String> {
    shlex::try_quote(arg).ok().map(|q| q.into_owned())
}

/// Runs commands for real, logging failures to the project log file
pub struct ShellRunner {
    log_file: Option<PathBuf>,
    failure_hint: String,
}

impl ShellRunner {
    pub fn new(log_file: Option<PathBuf>, failure_hint: String) -> Self {
        Self {
            log_file,
            failure_hint,
        }
    }

    fn report_failure(&self) {
        ui::error(&self.failure_hint);
        if let Some(path) = &self.log_file {
            ui::dimmed(&format!("   {}", path.display()));
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: Option<&Path>, interactive: bool) -> bool {
        tracing::info!("Running command: {}", command);

        let mut cmd = build_shell_command(command);
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        if interactive {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());

            return match cmd.status() {
                Ok(status) if status.success() => true,
                Ok(status) => {
                    tracing::error!(
                        "Command failed: {}\nReturn Code: {:?}\nStderr:\nN/A",
                        command,
                        status.code()
                    );
                    self.report_failure();
                    false
                }
                Err(e) => {
                    tracing::error!("Command could not start: {}: {}", command, e);
                    self.report_failure();
                    false
                }
            };
        }

        cmd.stdin(Stdio::null());
        match cmd.output() {
            Ok(output) if output.status.success() => true,
            Ok(output) => {
                tracing::error!(
                    "Command failed: {}\nReturn Code: {:?}\nStderr:\n{}",
                    command,
                    output.status.code(),
                    String::from_utf8_lossy(&output.stderr)
                );
                self.report_failure();
                false
            }
            Err(e) => {
                tracing::error!("Command could not start: {}: {}", command, e);
                self.report_failure();
                false
            }
        }
    }
}

/// Fail with the name of the first required tool that is not on PATH
pub fn missing_tool(tools: &[&str]) -> Option<String> {
    tools
        .iter()
        .find(|tool| which::which(tool).is_err())
        .map(|tool| tool.to_string())
}

#[cfg(test)]
mod tests;
