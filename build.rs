//! Build script for `repos`.
//!
//! Resolves the package long description from README.md (falling back to a
//! fixed string when the file is absent) and writes it to OUT_DIR, where
//! the crate embeds it with `include_str!`.

use std::fs;
use std::path::PathBuf;

include!("src/description.rs");

fn main() {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=src/description.rs");

    let out_dir: PathBuf = match std::env::var("OUT_DIR") {
        Ok(dir) => dir.into(),
        Err(err) => panic!("Failed to get environment variable 'OUT_DIR': {err}"),
    };

    let text = match long_description(std::path::Path::new("README.md")) {
        Ok(text) => text,
        Err(err) => panic!("Failed to read README.md: {err}"),
    };

    if let Err(err) = fs::write(out_dir.join("long_description.md"), text) {
        panic!("Failed to write long description to '{}': {}", out_dir.display(), err);
    }
}
