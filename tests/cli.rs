use std::io::Write;
use std::process::{Command, Stdio};

fn gate_lab() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gate-lab"))
}

#[test]
fn export_and_exit_writes_fresh_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.txt");

    let status = gate_lab()
        .arg("--export-and-exit")
        .arg("--output")
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("AND Gate\nA B Y\n"));
    assert!(written.contains("NOT Gate\nA B Y\n0 - 1\n1 - 0\n\n"));
    assert!(written.ends_with("XNOR Gate\nA B Y\n0 0 1\n0 1 0\n1 0 0\n1 1 1\n\n"));
}

#[test]
fn config_file_sets_the_destination() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("gate-lab.json");
    let output = dir.path().join("from-config.txt");
    std::fs::write(
        &config,
        serde_json::json!({ "output": output }).to_string(),
    )
    .unwrap();

    let status = gate_lab()
        .arg("--export-and-exit")
        .arg("--config")
        .arg(&config)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(output.exists());
}

#[test]
fn interactive_session_exports_on_command() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.txt");

    let mut child = gate_lab()
        .arg("--output")
        .arg(&path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"toggle and a\ntoggle and b\nexport\nquit\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());

    // Toggling runtime state never changes the exported tables
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("AND Gate\nA B Y\n0 0 0\n"));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Truth tables saved as"));
}
