#![allow(dead_code)]

pub mod mock_api;

pub use mock_api::{MockApi, MockResponse, RecordedRequest};

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_ORG: &str = "test-org";

/// Nothing listens here; used where a test must not reach any server.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// The binary with a scrubbed environment so host `HUMANITEC_*` vars don't leak in.
pub fn humctl_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("humctl"));
    for var in [
        "HUMCTL_CONFIG",
        "HUMANITEC_TOKEN",
        "HUMANITEC_ORG",
        "HUMANITEC_API_URL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A temp directory holding a `config.yaml`.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    /// Config with the test token/org pointing at `api_url`.
    pub fn new(api_url: &str) -> Self {
        Self::with_config(&format!(
            "humanitec_token: {TEST_TOKEN}\nhumanitec_org: {TEST_ORG}\napi_url: {api_url}\n"
        ))
    }

    pub fn with_config(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("config.yaml"), contents).expect("Failed to write config");
        Self { dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.yaml")
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    /// `humctl --config <this config> <args>`.
    pub fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        humctl_cmd()
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .assert()
    }
}
