//! Embeds the commit the bundle was built from as `FORMWIZARD_WEB_GIT_SHA`.
//! A value already exported by the build environment wins over git, for
//! images built without a checkout.

use std::env;
use std::path::PathBuf;
use std::process::Command;

const SHA_VAR: &str = "FORMWIZARD_WEB_GIT_SHA";

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn main() {
    println!("cargo:rerun-if-env-changed={SHA_VAR}");

    // apps/web sits below the repository root, so ask git where HEAD lives.
    if let Some(git_dir) = git(&["rev-parse", "--absolute-git-dir"]).map(PathBuf::from) {
        println!("cargo:rerun-if-changed={}", git_dir.join("HEAD").display());
        println!("cargo:rerun-if-changed={}", git_dir.join("refs").display());
    }

    let sha = env::var(SHA_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| git(&["rev-parse", "HEAD"]))
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env={SHA_VAR}={sha}");
}
