//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing checkpatch CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::Path;
use std::process::Command;

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the checkpatch binary.
///
/// Environment that changes behavior is cleared so the host does not leak
/// into tests.
pub fn checkpatch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("checkpatch"));
    cmd.env_remove("CHECKPATCH_CONFIG")
        .env_remove("CHECKPATCH_LOG")
        .env_remove("NO_COLOR")
        .env_remove("COLOR");
    cmd
}

/// Create a check builder.
pub fn cli() -> CheckBuilder<Text> {
    CheckBuilder::new()
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// High-level check builder for fluent test assertions
pub struct CheckBuilder<Mode = Text> {
    dir: Option<std::path::PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl CheckBuilder<Text> {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            stdin: None,
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> CheckBuilder<Json> {
        CheckBuilder {
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            stdin: self.stdin,
            _mode: PhantomData,
        }
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.run(), 0)
    }

    pub fn fails(self) -> RunAssert {
        run_exits(self.run(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.run(), code)
    }
}

#[allow(dead_code)]
impl CheckBuilder<Json> {
    pub fn passes(self) -> JsonReport {
        JsonReport::new(&run_exits(self.run(), 0).output.stdout)
    }

    pub fn fails(self) -> JsonReport {
        JsonReport::new(&run_exits(self.run(), 1).output.stdout)
    }
}

#[allow(dead_code)]
impl<Mode: 'static> CheckBuilder<Mode> {
    /// Set working directory
    pub fn pwd(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Pipe text on stdin
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    fn run(self) -> std::process::Output {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = checkpatch_cmd();

        if is_json {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }

        let mut cmd = assert_cmd::Command::from_std(cmd);
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.output().expect("command should run")
    }
}

fn run_exits(output: std::process::Output, code: i32) -> RunAssert {
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}\nstdout:\n{}\nstderr:\n{}",
        code,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a check run for chaining assertions
pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected (with diff on failure)
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout matches predicate.
    /// Prefer `stdout_eq` for strict matching.
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate.
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = String::from_utf8_lossy(&self.output.stdout);
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate.
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = String::from_utf8_lossy(&self.output.stderr);
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

/// Parsed JSON output with lookup helpers.
pub struct JsonReport {
    value: serde_json::Value,
}

#[allow(dead_code)]
impl JsonReport {
    fn new(stdout: &[u8]) -> Self {
        let value = serde_json::from_slice(stdout).unwrap_or_else(|e| {
            panic!(
                "invalid JSON ({}):\n{}",
                e,
                String::from_utf8_lossy(stdout)
            )
        });
        Self { value }
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    pub fn units(&self) -> &Vec<serde_json::Value> {
        self.value["units"].as_array().expect("units should be an array")
    }

    /// Messages of every diagnostic across all units, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.units()
            .iter()
            .flat_map(|u| u["diagnostics"].as_array().into_iter().flatten())
            .filter_map(|d| d["message"].as_str())
            .collect()
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary test project directory with helper methods.
///
/// ```ignore
/// let temp = Project::empty();
/// temp.config("[check]\nskip_signoff = true");
/// temp.file("lib/a.c", "int x; \n");
/// cli().pwd(temp.path()).args(&["-f", "lib"]).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write checkpatch.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.dir.path().join("checkpatch.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}

// =============================================================================
// PATCH BUILDERS
// =============================================================================

/// A signed mail patch adding `added` lines to `file`.
pub fn mail_patch(subject: &str, body: &str, file: &str, added: &[&str]) -> String {
    let mut text = format!(
        "From: Jane Doe <jane@example.com>\n\
         Subject: [PATCH] {subject}\n\
         \n\
         {body}\
         Signed-off-by: Jane Doe <jane@example.com>\n\
         ---\n\
         diff --git a/{file} b/{file}\n\
         --- a/{file}\n\
         +++ b/{file}\n\
         @@ -1,0 +1,{} @@\n",
        added.len()
    );
    for line in added {
        text.push('+');
        text.push_str(line);
        text.push('\n');
    }
    text
}

// =============================================================================
// GIT TEST HELPERS
// =============================================================================

fn git(project: &Project, args: &[&str]) {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(project.path())
        .output()
        .expect("git should run");
    assert!(output.status.success(), "git {:?} failed", args);
}

/// Initialize a git repo with minimal config
pub fn git_init(project: &Project) {
    git(project, &["init", "-q", "-b", "main"]);
    git(project, &["config", "user.email", "test@example.com"]);
    git(project, &["config", "user.name", "Test User"]);
}

/// Write a file and commit it with the given message
pub fn git_commit_file(project: &Project, path: &str, content: &str, message: &str) {
    project.file(path, content);
    git(project, &["add", path]);
    git(project, &["commit", "-q", "-m", message]);
}
