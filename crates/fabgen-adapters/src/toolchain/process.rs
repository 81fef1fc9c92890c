//! Subprocess-backed toolchain.
//!
//! All commands are invoked through `sh -c` with an explicit working
//! directory set on the child via [`std::process::Command::current_dir`].
//! The process-wide working directory is never mutated, so there is
//! nothing to restore on any exit path — including panics and early
//! returns.
//!
//! The build invocation streams stdout/stderr through [`TailBuffer`]s on
//! reader threads and polls `try_wait` against a deadline; on timeout the
//! child is killed and reaped before the call returns, so no invocation
//! outlives its bound.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use fabgen_core::{
    application::{ApplicationError, ports::Toolchain},
    domain::{DIAGNOSTIC_TAIL_CHARS, ExecReport, ValidationResult},
    error::FabgenResult,
};

use super::tail::{TailBuffer, tail_chars};

/// Poll interval while waiting for the build to finish.
const BUILD_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The external commands the pipeline drives.
#[derive(Debug, Clone)]
pub struct ToolchainCommands {
    /// Creates the project skeleton; run from the project root's parent.
    pub scaffold: String,
    /// Install command; package names are appended, quoted.
    pub install: String,
    /// Build command; run inside the project root.
    pub build: String,
    /// Bound on the build invocation.
    pub build_timeout: Duration,
}

impl Default for ToolchainCommands {
    fn default() -> Self {
        Self {
            scaffold: "./setup-new-app.sh".into(),
            install: "npm install".into(),
            build: "npm run build".into(),
            build_timeout: Duration::from_secs(60),
        }
    }
}

/// Production [`Toolchain`] implementation over `std::process`.
pub struct ProcessToolchain {
    commands: ToolchainCommands,
}

impl ProcessToolchain {
    pub fn new(commands: ToolchainCommands) -> Self {
        Self { commands }
    }
}

impl Default for ProcessToolchain {
    fn default() -> Self {
        Self::new(ToolchainCommands::default())
    }
}

impl Toolchain for ProcessToolchain {
    fn scaffold(&self, project_root: &Path) -> FabgenResult<ExecReport> {
        // The scaffold command recreates the skeleton from scratch; a
        // stale tree from a previous run is removed first.
        if project_root.exists() {
            info!(root = %project_root.display(), "removing existing project directory");
            std::fs::remove_dir_all(project_root).map_err(|e| {
                ApplicationError::ScaffoldFailed {
                    reason: format!("could not remove existing {}: {}", project_root.display(), e),
                }
            })?;
        }

        let workdir = match project_root.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        run_captured(&self.commands.scaffold, workdir).map_err(|reason| {
            ApplicationError::ScaffoldFailed { reason }.into()
        })
    }

    fn install(&self, project_root: &Path, packages: &[String]) -> FabgenResult<ExecReport> {
        let mut command = self.commands.install.clone();
        for package in packages {
            command.push_str(" '");
            command.push_str(package);
            command.push('\'');
        }
        run_captured(&command, project_root).map_err(|reason| {
            ApplicationError::ToolchainUnavailable {
                command: self.commands.install.clone(),
                reason,
            }
            .into()
        })
    }

    fn build(&self, project_root: &Path) -> ValidationResult {
        run_bounded(
            &self.commands.build,
            project_root,
            self.commands.build_timeout,
        )
    }
}

/// Run a command to completion, returning bounded output tails.
///
/// `Err` means the command could not be invoked at all (shell missing,
/// bad working directory); a command that ran and exited nonzero is a
/// normal `Ok` with a nonzero code in the report.
fn run_captured(command: &str, workdir: &Path) -> Result<ExecReport, String> {
    debug!(command, workdir = %workdir.display(), "running toolchain command");

    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| format!("failed to spawn '{command}': {e}"))?;

    Ok(ExecReport {
        exit_code: output.status.code(),
        stdout_tail: tail_chars(&String::from_utf8_lossy(&output.stdout), DIAGNOSTIC_TAIL_CHARS),
        stderr_tail: tail_chars(&String::from_utf8_lossy(&output.stderr), DIAGNOSTIC_TAIL_CHARS),
    })
}

/// Run the build command with a deadline, normalizing every failure mode
/// into a [`ValidationResult`].
fn run_bounded(command: &str, workdir: &Path, timeout: Duration) -> ValidationResult {
    debug!(command, workdir = %workdir.display(), ?timeout, "running build validation");

    let mut child = match Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            warn!(command, error = %e, "build command could not be invoked");
            return ValidationResult::invocation_error(format!(
                "failed to invoke '{command}': {e}"
            ));
        }
    };

    // Reader threads own the pipes; killing the child closes them, which
    // unblocks the reads, so the joins below cannot hang.
    let stdout_reader = child.stdout.take().map(spawn_tail_reader);
    let stderr_reader = child.stderr.take().map(spawn_tail_reader);

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break Some(status),
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    break None;
                }
                std::thread::sleep(BUILD_POLL_INTERVAL);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return ValidationResult::invocation_error(format!(
                    "failed waiting for '{command}': {e}"
                ));
            }
        }
    };

    let stdout_tail = join_tail(stdout_reader);
    let stderr_tail = join_tail(stderr_reader);
    let combined = combine_tails(&stdout_tail, &stderr_tail);

    match status {
        Some(status) if status.success() => ValidationResult::passed(0, combined),
        Some(status) => ValidationResult::failed(status.code(), combined),
        None => ValidationResult::timeout(format!(
            "build exceeded {}s timeout; partial output: {}",
            timeout.as_secs(),
            combined
        )),
    }
}

fn spawn_tail_reader<R: Read + Send + 'static>(
    mut pipe: R,
) -> std::thread::JoinHandle<TailBuffer> {
    std::thread::spawn(move || {
        let mut tail = TailBuffer::new();
        let mut chunk = [0u8; 4096];
        loop {
            match pipe.read(&mut chunk) {
                Ok(0) | Err(_) => break,
                Ok(n) => tail.push(&chunk[..n]),
            }
        }
        tail
    })
}

fn join_tail(handle: Option<std::thread::JoinHandle<TailBuffer>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(TailBuffer::into_tail)
        .unwrap_or_default()
}

/// Merge the two streams into one bounded diagnostic string.
fn combine_tails(stdout: &str, stderr: &str) -> String {
    let combined = match (stdout.is_empty(), stderr.is_empty()) {
        (true, true) => String::new(),
        (false, true) => stdout.to_string(),
        (true, false) => stderr.to_string(),
        (false, false) => format!("{stdout}\n{stderr}"),
    };
    tail_chars(&combined, DIAGNOSTIC_TAIL_CHARS)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use fabgen_core::application::ports::Toolchain as _;

    fn toolchain(build: &str, timeout_ms: u64) -> ProcessToolchain {
        ProcessToolchain::new(ToolchainCommands {
            scaffold: "mkdir -p new-app".into(),
            install: "true".into(),
            build: build.into(),
            build_timeout: Duration::from_millis(timeout_ms),
        })
    }

    #[test]
    fn build_exit_zero_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let result = toolchain("echo done", 5000).build(dir.path());
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.diagnostic_tail.contains("done"));
    }

    #[test]
    fn build_nonzero_exit_is_failure_with_tail() {
        let dir = tempfile::tempdir().unwrap();
        let result = toolchain("echo broken >&2; exit 3", 5000).build(dir.path());
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert!(!result.timed_out);
        assert!(result.diagnostic_tail.contains("broken"));
    }

    #[test]
    fn build_timeout_is_distinguished() {
        let dir = tempfile::tempdir().unwrap();
        let result = toolchain("sleep 5", 200).build(dir.path());
        assert!(!result.success);
        assert!(result.timed_out);
        assert!(result.diagnostic_tail.contains("timeout"));
    }

    #[test]
    fn build_output_capture_is_bounded() {
        let dir = tempfile::tempdir().unwrap();
        // ~100 KiB of output; the captured tail must stay bounded.
        let result = toolchain("yes 0123456789 | head -c 100000; exit 1", 10_000).build(dir.path());
        assert!(!result.success);
        assert!(result.diagnostic_tail.chars().count() <= DIAGNOSTIC_TAIL_CHARS);
    }

    #[test]
    fn missing_workdir_is_an_invocation_error() {
        let result = toolchain("echo hi", 5000).build(Path::new("/no/such/dir"));
        assert!(!result.success);
        assert!(!result.timed_out);
        assert!(result.exit_code.is_none());
    }

    #[test]
    fn process_cwd_is_untouched_by_failing_build() {
        let before = std::env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let _ = toolchain("exit 1", 5000).build(dir.path());
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn scaffold_creates_skeleton_and_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("new-app");
        let report = toolchain("true", 5000).scaffold(&root).unwrap();
        assert!(report.success());
        assert!(root.is_dir());
    }

    #[test]
    fn scaffold_removes_stale_tree_first() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("new-app");
        std::fs::create_dir_all(root.join("stale")).unwrap();
        std::fs::write(root.join("stale/file.txt"), "old").unwrap();

        toolchain("true", 5000).scaffold(&root).unwrap();
        assert!(!root.join("stale").exists());
    }

    #[test]
    fn failing_scaffold_command_reports_nonzero() {
        let dir = tempfile::tempdir().unwrap();
        let tc = ProcessToolchain::new(ToolchainCommands {
            scaffold: "exit 7".into(),
            ..ToolchainCommands::default()
        });
        let report = tc.scaffold(&dir.path().join("new-app")).unwrap();
        assert_eq!(report.exit_code, Some(7));
        assert!(!report.success());
    }

    #[test]
    fn install_appends_quoted_packages() {
        let dir = tempfile::tempdir().unwrap();
        let tc = ProcessToolchain::new(ToolchainCommands {
            install: "echo".into(),
            ..ToolchainCommands::default()
        });
        let packages = vec!["mqtt".to_string(), "@tanstack/react-query".to_string()];
        let report = tc.install(dir.path(), &packages).unwrap();
        assert!(report.success());
        assert!(report.stdout_tail.contains("mqtt"));
        assert!(report.stdout_tail.contains("@tanstack/react-query"));
    }
}
