//! Shared testing utilities for chainorder CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Testing harness providing an isolated directory for chain files.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory holding the chain files of this test.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write a chain declaration and return its path.
    pub fn write_chain(&self, name: &str, content: &str) -> PathBuf {
        let file = self.root.child(name);
        file.write_str(content).expect("Failed to write chain file");
        file.path().to_path_buf()
    }

    /// Build a command for invoking the compiled `chainorder` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("chainorder").expect("Failed to locate chainorder binary");
        cmd.current_dir(self.work_dir()).env_remove("CHAINORDER_LOG");
        cmd
    }
}

/// A servlet-style filter chain with one dependency and a last stage.
#[allow(dead_code)]
pub const FILTER_CHAIN_YAML: &str = "\
stages: [dispatch, auth, request-log, cors]
order:
  - stage: auth
    depends_on: request-log
  - last: dispatch
";
