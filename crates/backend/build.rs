//! Places the workspace `config.toml` next to the built binary, where
//! `load_config` looks for it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let source = workspace_root.join("config.toml");

    if !source.exists() {
        println!("cargo:warning=no config.toml at {:?}, the embedded default applies", source);
        return;
    }

    // OUT_DIR is target/<profile>/build/backend-*/out
    let out_dir = env::var("OUT_DIR").unwrap_or_default();
    let profile = env::var("PROFILE").unwrap_or_default();
    let Some(target_dir) = Path::new(&out_dir).ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=profile directory not found from {:?}", out_dir);
        return;
    };

    if let Err(e) = fs::copy(&source, target_dir.join("config.toml")) {
        panic!("failed to copy config.toml: {}", e);
    }
}
