use std::process::Command;

fn main() {
    // short commit hash, shown by `letterboxed --version`
    let git_hash = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |hash| hash.trim().to_string());

    println!("cargo:rustc-env=GIT_HASH={git_hash}");

    // rerun build script if git HEAD changes
    println!("cargo:rerun-if-changed=.git/HEAD");
}
