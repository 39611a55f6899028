use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn canvasboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("canvasboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn canvasboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    canvasboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vector whiteboard core with headless event replay",
        ));
}

#[test]
fn no_arguments_is_an_error() {
    let temp = TempDir::new().unwrap();
    canvasboard_cmd(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to do"));
}

#[test]
fn output_requires_script() {
    let temp = TempDir::new().unwrap();
    canvasboard_cmd(&temp)
        .args(["--output", "out.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}

#[test]
fn script_replay_writes_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("draw.txt");
    let output = temp.path().join("board.png");
    fs::write(
        &script,
        "# rectangle, then an undone line\n\
         tool rectangle\n\
         down 10 10\n\
         move 110 60\n\
         up 110 60\n\
         tool line\n\
         down 0 100\n\
         up 50 100\n\
         key Ctrl+Z\n",
    )
    .unwrap();

    canvasboard_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .args(["--width", "200", "--height", "120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 element(s)"));

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn bad_script_line_is_reported() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.txt");
    fs::write(&script, "undo\nfly 1 2\n").unwrap();

    canvasboard_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: Unknown command 'fly'"));
}

#[test]
fn init_config_writes_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom").join("config.toml");

    canvasboard_cmd(&temp)
        .arg("--init-config")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(fs::read_to_string(&path).unwrap().contains("[keybindings]"));

    canvasboard_cmd(&temp)
        .arg("--init-config")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn script_uses_config_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[drawing]\ndefault_tool = \"rectangle\"\n").unwrap();
    let script = temp.path().join("draw.txt");
    fs::write(&script, "down 10 10\nup 40 40\n").unwrap();

    canvasboard_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 element(s)"));
}

#[test]
fn schema_dump_lists_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("keybindings"))
        .stdout(predicate::str::contains("selection"));
}
