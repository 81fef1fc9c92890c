//! Scripted toolchain for testing.

use std::path::Path;
use std::sync::{Arc, Mutex};

use fabgen_core::{
    application::ports::Toolchain,
    domain::{ExecReport, ValidationResult},
    error::FabgenResult,
};

/// Toolchain double returning canned outcomes and recording invocations.
///
/// Clones share the invocation log, so a test can keep a handle after the
/// service takes ownership of its `Box`.
#[derive(Clone)]
pub struct ScriptedToolchain {
    scaffold_exit: i32,
    install_exit: i32,
    build_result: ValidationResult,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedToolchain {
    /// Every stage succeeds.
    pub fn all_green() -> Self {
        Self {
            scaffold_exit: 0,
            install_exit: 0,
            build_result: ValidationResult::passed(0, "scripted build ok"),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_scaffold_exit(mut self, code: i32) -> Self {
        self.scaffold_exit = code;
        self
    }

    pub fn with_install_exit(mut self, code: i32) -> Self {
        self.install_exit = code;
        self
    }

    pub fn with_build_result(mut self, result: ValidationResult) -> Self {
        self.build_result = result;
        self
    }

    /// Stage names invoked so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn report(code: i32) -> ExecReport {
        ExecReport {
            exit_code: Some(code),
            stdout_tail: String::new(),
            stderr_tail: if code == 0 {
                String::new()
            } else {
                format!("scripted failure (exit {code})")
            },
        }
    }
}

impl Toolchain for ScriptedToolchain {
    fn scaffold(&self, project_root: &Path) -> FabgenResult<ExecReport> {
        self.record(format!("scaffold {}", project_root.display()));
        Ok(Self::report(self.scaffold_exit))
    }

    fn install(&self, _project_root: &Path, packages: &[String]) -> FabgenResult<ExecReport> {
        self.record(format!("install {}", packages.len()));
        Ok(Self::report(self.install_exit))
    }

    fn build(&self, project_root: &Path) -> ValidationResult {
        self.record(format!("build {}", project_root.display()));
        self.build_result.clone()
    }
}
