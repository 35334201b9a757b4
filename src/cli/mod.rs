//! # CLI Module
//!
//! This module provides the command-line interface layer for scdlcli, a
//! SoundCloud downloader. It implements the user-facing commands and drives
//! the end-to-end sequence behind each of them: resolve the URL, gather the
//! candidate tracks, filter them by the positional selection rules, and for
//! each surviving track pick an audio source, download it, and tag the
//! file.
//!
//! ## Commands
//!
//! - [`download`] - Resolves a track, user profile, or playlist URL and
//!   downloads the tracks behind it, honoring `--limit`, `--include`,
//!   `--exclude`, `--range`, and the `--likes` / `--all` / `--similar`
//!   mode flags.
//! - [`charts`] - Fetches the top or trending chart for a genre and
//!   downloads the charted tracks.
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface, Orchestration)
//!     ↓
//! SoundCloud Layer (API Integration)
//!     ↓
//! Management Layer (File Persistence, Tagging)
//! ```
//!
//! ## Orchestration Rules
//!
//! Tracks are always processed in catalog order, enumerated from position
//! 1. The selection filter sees the running success counter before any
//! positional rule, so a limit of N yields exactly N successful downloads
//! even when include/exclude rules would admit more.
//!
//! ## Error Handling Philosophy
//!
//! - A failed resolve or gather is terminal for the run - there is nothing
//!   to download.
//! - A track without a usable audio source is skipped with a status line
//!   and the batch continues.
//! - A tagging failure is logged and ignored; the downloaded file stays.
//!
//! Every skip and failure produces a human-readable status line naming the
//! track; the run ends with the total successfully-downloaded count.

mod charts;
mod download;

pub use charts::charts;
pub use download::download;
pub use download::download_tracks;
