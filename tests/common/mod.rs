#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("table");
        cmd.current_dir(&self.dir)
            .env_remove("RUST_LOG")
            .env_remove("TABLE_MAX_LINE_BYTES");
        cmd
    }

    pub fn run(&self, input: &str) -> Output {
        self.cmd()
            .write_stdin(input.to_string())
            .output()
            .expect("spawn table")
    }

    pub fn input_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, contents).expect("write input file");
        path
    }

    pub fn run_json(&self, input: &str) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .write_stdin(input.to_string())
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, input: &str) -> Value {
        let err = self
            .cmd()
            .arg("--json")
            .write_stdin(input.to_string())
            .assert()
            .failure()
            .stdout("")
            .get_output()
            .stderr
            .clone();
        serde_json::from_slice(&err).expect("valid json diagnostic")
    }
}

/// The exact stdout of a successful run for `v`.
pub fn expected_table(v: i64) -> String {
    (1..=10)
        .map(|m| format!("{v} times {m} is {}\n", v * m))
        .collect()
}

/// A process that exited with a code, as opposed to being killed by a signal.
pub fn assert_not_crashed(output: &Output, case: &str) {
    assert!(
        output.status.code().is_some(),
        "process terminated by signal on case {case}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
}
