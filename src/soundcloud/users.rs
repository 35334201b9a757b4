use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::info;
use crate::soundcloud::{client::ApiClient, paginate, tracks};
use crate::types::{LikeItem, Track, User};

/// Target used when the caller sets no limit; effectively "everything".
const DEFAULT_TARGET: usize = 9999;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Fetches a user's uploaded tracks, filtered to downloadable ones during
/// enumeration.
pub async fn get_uploaded_tracks(
    client: &ApiClient,
    user: &User,
    limit: Option<usize>,
) -> Result<Vec<Track>, reqwest::Error> {
    let target = limit.unwrap_or(DEFAULT_TARGET);
    let url = client.endpoint(&format!("users/{id}/tracks", id = user.id));
    let params = [
        ("limit", target.to_string()),
        ("offset", "0".to_string()),
    ];

    let pb = spinner("Fetching uploads...");
    let result =
        paginate::collect_paginated(client, &url, &params, target, tracks::can_download).await;
    pb.finish_and_clear();

    let uploads = result?;
    info!("Found {} uploads", uploads.len());

    Ok(uploads)
}

/// Fetches the tracks a user has liked.
///
/// The likes feed wraps each entry; liked playlists are dropped and the
/// remaining entries are kept only when the wrapped track is downloadable.
/// The unwrapped list is truncated to the target count.
pub async fn get_liked_tracks(
    client: &ApiClient,
    user: &User,
    limit: Option<usize>,
) -> Result<Vec<Track>, reqwest::Error> {
    let target = limit.unwrap_or(DEFAULT_TARGET);
    let url = client.endpoint(&format!("users/{id}/likes", id = user.id));
    let params = [
        ("limit", target.to_string()),
        ("offset", "0".to_string()),
    ];

    let pb = spinner("Fetching likes...");
    let result = paginate::collect_paginated(client, &url, &params, target, |item: &LikeItem| {
        item.playlist.is_none()
            && item
                .track
                .as_ref()
                .is_some_and(tracks::can_download)
    })
    .await;
    pb.finish_and_clear();

    let mut likes: Vec<Track> = result?
        .into_iter()
        .filter_map(|item| item.track)
        .collect();
    likes.truncate(target);
    info!("Found {} likes", likes.len());

    Ok(likes)
}
