//! Build script for the SoundCloud downloader CLI.
//!
//! Copies the configuration template (`.env.example`) from the crate root
//! into the user's local data directory so a freshly installed binary finds
//! a ready-to-edit example next to where it expects the real `.env`.
//!
//! # File Operations
//!
//! ## Source Location
//! The script looks for `.env.example` in the crate root directory (where Cargo.toml resides).
//!
//! ## Destination Location
//! Templates are copied to the platform-specific local data directory:
//! - Linux: `~/.local/share/scdlcli/.env.example`
//! - macOS: `~/Library/Application Support/scdlcli/.env.example`
//! - Windows: `%LOCALAPPDATA%/scdlcli/.env.example`
//!
//! # Error Handling Strategy
//!
//! - **Missing template**: issues a cargo warning but continues the build
//! - **Directory creation / file copy failures**: returned as errors (critical)

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("scdlcli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
