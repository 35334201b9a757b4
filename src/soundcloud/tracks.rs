use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::info;
use crate::soundcloud::client::ApiClient;
use crate::types::{AudioSource, PagedResponse, StreamLocator, Track};
use crate::utils;

/// Protocol tag of a transcoding retrievable as one sequential byte
/// stream. Adaptive-segment streaming (`hls`) is not supported.
pub const PROTOCOL_PROGRESSIVE: &str = "progressive";

/// Default format when a downloadable track does not declare one.
const DEFAULT_FORMAT: &str = "mp3";

/// Decides whether a usable audio source exists for `track`, without
/// performing any network call.
///
/// Used as the paginator's filter predicate during enumeration to avoid
/// wasted fetches; it mirrors the reachability decision of
/// [`select_source`]: a track passes this predicate exactly when
/// `select_source` would find a source.
pub fn can_download(track: &Track) -> bool {
    let directly_downloadable = track.downloadable.unwrap_or(false) && track.download_url.is_some();
    let streamable = track.streamable.unwrap_or(false);
    let has_stream = track.stream_url.is_some()
        || track
            .media
            .transcodings
            .iter()
            .any(|t| t.format.protocol == PROTOCOL_PROGRESSIVE);

    directly_downloadable || (streamable && has_stream)
}

/// Picks the best retrievable audio source for `track`.
///
/// Decision order, first match wins, mirroring the service semantics:
/// 1. An explicitly downloadable track with a direct download URL is
///    fetched as its declared original format (default `mp3`).
/// 2. A streamable track exposing the legacy stream URL is fetched as
///    `mp3`.
/// 3. A streamable track's transcoding offers are scanned in listed order
///    for the first progressive one. That offer's URL is a locator, not
///    the audio: one follow-up fetch yields a JSON body whose `url` field
///    is the real, time-limited audio URL. Format is `mp3`.
///
/// Returns `None` when no source is reachable. A failed follow-up fetch
/// (non-2xx, network error, malformed body) also yields `None` - a single
/// unresolvable track must not abort the batch.
pub async fn select_source(client: &ApiClient, track: &Track) -> Option<AudioSource> {
    if track.downloadable.unwrap_or(false) {
        if let Some(url) = &track.download_url {
            return Some(AudioSource {
                url: url.clone(),
                format: track
                    .original_format
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            });
        }
    }

    if !track.streamable.unwrap_or(false) {
        return None;
    }

    if let Some(url) = &track.stream_url {
        return Some(AudioSource {
            url: url.clone(),
            format: DEFAULT_FORMAT.to_string(),
        });
    }

    for transcoding in &track.media.transcodings {
        if transcoding.format.protocol == PROTOCOL_PROGRESSIVE {
            return match client.get_json::<StreamLocator>(&transcoding.url, &[]).await {
                Ok(locator) => Some(AudioSource {
                    url: locator.url,
                    format: DEFAULT_FORMAT.to_string(),
                }),
                Err(_) => None,
            };
        }
    }

    None
}

/// Fetches tracks similar to `track` from the recommendations endpoint.
///
/// A single page query; downloadability is not filtered here because it is
/// re-checked per track at download time.
pub async fn get_related_tracks(
    client: &ApiClient,
    track: &Track,
    count: usize,
) -> Result<Vec<Track>, reqwest::Error> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!(
        "Fetching tracks similar to {title}...",
        title = utils::track_title(track)
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let url = client.endpoint(&format!("tracks/{id}/related", id = track.id));
    let params = [
        ("limit", count.to_string()),
        ("offset", "0".to_string()),
    ];

    let result = client.get_json::<PagedResponse<Track>>(&url, &params).await;

    pb.finish_and_clear();
    let related = result?.collection;
    info!("Found {} similar tracks", related.len());

    Ok(related)
}
