use assert_cmd::Command;
use std::path::Path;

pub fn moodstar_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodstar").unwrap();
    cmd.env_remove("MOODSTAR_ROOT");
    cmd.env_remove("MOODSTAR_LOG");
    cmd
}

/// Write an entry in the journal at `root`, returning the new entry id.
#[allow(dead_code)]
pub fn write_entry(root: &Path, emotion: &str, content: &str) -> String {
    let output = moodstar_cmd()
        .current_dir(root)
        .arg("write")
        .arg("-e")
        .arg(emotion)
        .arg(content)
        .output()
        .unwrap();
    assert!(output.status.success(), "write failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("id: "))
        .expect("write output should include the entry id")
        .to_string()
}
