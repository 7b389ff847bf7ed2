use assert_cmd::Command;

pub fn momo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("momo").unwrap();
    cmd.env_remove("MOMO_ROOT");
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

/// Pull the minted id out of "Saved entry <id> (<date>)"
#[allow(dead_code)]
pub fn saved_id(stdout: &str) -> u64 {
    let line = stdout
        .lines()
        .find(|l| l.starts_with("Saved entry"))
        .expect("no 'Saved entry' line in output");
    line.split_whitespace()
        .nth(2)
        .expect("no id in 'Saved entry' line")
        .parse()
        .expect("id is not a number")
}
