use assert_cmd::Command;

pub fn diary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.env_remove("DIARY_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Join menu answers into stdin, one per line
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
