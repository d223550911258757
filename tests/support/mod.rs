use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated home for one test: a tempdir holding the data file, with the
/// config lookup pointed away from any real user config.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) -> std::io::Result<()> {
        std::fs::write(self.config_file(), contents)
    }

    /// A taskflow command scoped to this home.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskflow").expect("taskflow binary");
        cmd.env("TASKFLOW_DATA", self.data_file());
        cmd.env("TASKFLOW_CONFIG", self.config_file());
        cmd.env_remove("RUST_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }
}

/// Add a task and return its id from the JSON envelope.
#[allow(dead_code)]
pub fn add_task(home: &TestHome, args: &[&str]) -> String {
    let mut full_args = vec!["add"];
    full_args.extend_from_slice(args);
    full_args.push("--json");

    let output = home
        .cmd()
        .args(&full_args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("json envelope");
    value["data"]["id"]
        .as_str()
        .expect("task id in envelope")
        .to_string()
}
