//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test project context
///
/// A temporary working directory the binary is run in.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    #[allow(dead_code)]
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Sorted entry names of a directory in the test project
    #[allow(dead_code)]
    pub fn list_dir(&self, name: &str) -> Vec<String> {
        let mut names: Vec<_> = std::fs::read_dir(self.dir.path().join(name))
            .expect("Failed to read directory")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote files of the bundled packages: (repo, remote path)
#[allow(dead_code)]
pub const BUNDLED_FILES: &[(&str, &str)] = &[
    ("QInstallerBridge", "QInstallerBridge.hpp"),
    ("QInstallerBridge", "LICENSE"),
    ("QArchive", "QArchive.hpp"),
    ("QArchive", "LICENSE"),
    ("QEasyDownloader", "QEasyDownloader.hpp"),
    ("QEasyDownloader", "LICENSE"),
];

/// Body served for a bundled remote file
#[allow(dead_code)]
pub fn body_for(repo: &str, file: &str) -> String {
    format!("// {repo}/{file}\n")
}

/// Start a mock raw-content host serving every bundled file
#[allow(dead_code)]
pub async fn mock_github() -> MockServer {
    let server = MockServer::start().await;
    for (repo, file) in BUNDLED_FILES {
        Mock::given(method("GET"))
            .and(path(format!("/antony-jr/{repo}/master/{file}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(body_for(repo, file)))
            .mount(&server)
            .await;
    }
    server
}

/// Run qib-bootstrap in the project directory
pub fn run_bootstrap(project: &TestProject, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qib-bootstrap"));
    cmd.current_dir(project.path());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute qib-bootstrap")
}
