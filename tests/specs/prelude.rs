//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the trex binary against a scratch
//! catalog.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

/// Catalog with two hosts sharing a CPU item, used by most catalog specs.
pub const WEB_AND_DB: &str = r#"
[[hosts]]
name = "web"

[[hosts.items]]
item_id = 1
key = "system.cpu.load"
value_type = "float"

[[hosts.items]]
item_id = 2
key = "log[/var/log/syslog]"
value_type = "log"

[[hosts.items]]
item_id = 3
key = "agent.version"
value_type = "str"
status = "disabled"

[[hosts]]
name = "db"

[[hosts.items]]
item_id = 10
key = "system.cpu.load"
value_type = "float"
"#;

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself when
/// CARGO_MANIFEST_DIR is stale.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

fn trex_binary() -> PathBuf {
    binary_path("trex")
}

/// Create a CLI builder for trex commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: vec![("NO_COLOR".into(), "1".into())],
            stdin: None,
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Feed `text` on stdin
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    /// Build the command without running it
    pub fn command(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(trex_binary());
        cmd.args(&self.args);

        // Parent settings must not leak into specs.
        cmd.env_remove("TREX_CATALOG");
        cmd.env_remove("TREX_MAX_DEPTH");
        cmd.env_remove("TREX_LOG");
        cmd.env_remove("COLOR");

        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        if let Some(text) = self.stdin {
            cmd.write_stdin(text);
        }
        cmd
    }

    fn run(self) -> Output {
        self.command().output().expect("command should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.run();
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.run();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Stdout parsed as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }

    /// Assert the process exit code
    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.output.status.code(), Some(expected), "stderr: {}", self.stderr());
        self
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

/// Scratch directory holding one catalog file
pub struct Workspace {
    dir: tempfile::TempDir,
    catalog: PathBuf,
}

impl Workspace {
    /// Workspace whose catalog file does not exist yet
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.toml");
        Self { dir, catalog }
    }

    /// Workspace seeded with a TOML catalog
    pub fn with_catalog(content: &str) -> Self {
        let ws = Self::empty();
        std::fs::write(&ws.catalog, content).unwrap();
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog
    }

    pub fn catalog_text(&self) -> String {
        std::fs::read_to_string(&self.catalog).unwrap()
    }

    /// CLI builder pointed at this workspace's catalog
    pub fn trex(&self) -> CliBuilder {
        cli().env("TREX_CATALOG", &self.catalog)
    }
}
