use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::info;
use crate::soundcloud::{client::ApiClient, paginate, tracks};
use crate::types::{ChartItem, Track};

/// Fetches charted tracks for a genre.
///
/// `kind` is `top` or `trending`. Chart entries wrap the ranked track; the
/// paginator filters on downloadability of the wrapped track, and the
/// unwrapped result is truncated to `count`.
pub async fn get_charted_tracks(
    client: &ApiClient,
    kind: &str,
    genre: &str,
    count: usize,
) -> Result<Vec<Track>, reqwest::Error> {
    let url = client.endpoint("charts");
    let params = [
        ("limit", count.to_string()),
        ("genre", format!("soundcloud:genres:{genre}")),
        ("kind", kind.to_string()),
    ];

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching {count} {kind} tracks..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = paginate::collect_paginated(client, &url, &params, count, |item: &ChartItem| {
        tracks::can_download(&item.track)
    })
    .await;
    pb.finish_and_clear();

    let mut charted: Vec<Track> = result?.into_iter().map(|item| item.track).collect();
    charted.truncate(count);
    info!("Found {} tracks", charted.len());

    Ok(charted)
}
