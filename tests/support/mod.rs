#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

use mistrz::adapter::outbound::json::JsonStore;
use mistrz::domain::EventLog;
use mistrz::port::Store;
use mistrz::testkit::domain::sample_log;

/// Scratch directory holding an event store and acting as `$HOME`, so the
/// binary never sees the real user configuration.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn with_log(log: &EventLog) -> Self {
        let workspace = Self::empty();
        JsonStore::new(workspace.store_path())
            .save(log)
            .expect("seed event store");
        workspace
    }

    pub fn with_sample() -> Self {
        Self::with_log(&sample_log())
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("events.json")
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    /// `mistrz` running inside the workspace with colors off.
    pub fn mistrz(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mistrz");
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never");
        cmd
    }
}
