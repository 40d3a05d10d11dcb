use assert_cmd::cmd::Command;

#[allow(dead_code)]
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

pub fn make_cli() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).expect("Failed to find binary");
    // Keep ambient connection settings from leaking into test runs.
    for var in [
        "BOOKSCAPE_HOST",
        "BOOKSCAPE_PORT",
        "BOOKSCAPE_DB",
        "BOOKSCAPE_USER",
        "BOOKSCAPE_PASSWORD",
        "BOOKSCAPE_SNAPSHOT_TTL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}
