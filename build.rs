use std::process::Command;

/// Exposes the nearest git tag as `SPEEDY_BAT_GIT_TAG` for the footer version label.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--abbrev=0"])
        .output()
    else {
        return;
    };
    if !output.status.success() {
        return;
    }
    if let Ok(tag) = String::from_utf8(output.stdout) {
        let tag = tag.trim();
        if !tag.is_empty() {
            println!("cargo:rustc-env=SPEEDY_BAT_GIT_TAG={tag}");
        }
    }
}
