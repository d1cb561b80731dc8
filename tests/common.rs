//! Common test helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn get_condgraph_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_condgraph"))
}

/// Run the binary in `dir` with colors disabled.
pub fn run_condgraph(dir: &Path, args: &[&str]) -> std::io::Result<Output> {
    Command::new(get_condgraph_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
}

/// Write a paper file into `dir` and return its path.
pub fn write_paper(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write paper file");
    path
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
