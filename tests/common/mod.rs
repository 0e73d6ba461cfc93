use assert_cmd::Command;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_WEEK_START");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized journal at `root`
#[allow(dead_code)]
pub fn moodlog_in(root: &Path) -> Command {
    let mut cmd = moodlog_cmd();
    cmd.current_dir(root);
    cmd
}

/// Initialize a journal at `root`
#[allow(dead_code)]
pub fn init_journal(root: &Path) {
    moodlog_cmd().arg("init").arg(root).assert().success();
}
