use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::process::Output;

/// Get a Command for searchkit with ambient log filters cleared
pub fn searchkit() -> Command {
    let mut cmd = cargo_bin_cmd!("searchkit");
    cmd.env_remove("RUST_LOG")
        .env_remove("SEARCHKIT_LOG")
        .env_remove("SEARCHKIT_LOG_LEVEL");
    cmd
}

/// Parse the single JSON object a command printed to stdout
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

/// Parse the JSON error envelope a command printed to stderr
#[allow(dead_code)]
pub fn stderr_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stderr).expect("stderr is not JSON")
}
