use std::path::Path;
use std::process::{Command, Output};

pub fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pbtour"));
    // keep the caller's config out of the way
    cmd.env_remove("PBTOUR_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run `pbtour --dir <dir> <args>` and return its output.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    cli()
        .arg("--dir")
        .arg(dir)
        .args(args)
        .output()
        .expect("run pbtour")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
