//! Test environment for running the dddc binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a dddc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project and config directories.
///
/// The user config directory points into a temp dir so a developer's own
/// `dddc/config.toml` never leaks into tests.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    dddc_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
            dddc_bin: PathBuf::from(env!("CARGO_BIN_EXE_dddc")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Run dddc from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    fn run_from_with_env(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.dddc_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("DDDC_LOG")
            .env_remove("DDDC_EMBEDDABLE_SUFFIX")
            .env_remove("DDDC_ENUM_PACKAGE")
            .env_remove("DDDC_ID_TYPE");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
