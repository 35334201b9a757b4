use std::path::PathBuf;

use crate::{
    cli::download::download_tracks,
    error,
    management::DownloadManager,
    selection::TrackSelection,
    soundcloud::{charts as charts_api, client::ApiClient},
    success,
    types::DownloadStatus,
};

pub async fn charts(new: bool, genre: String, limit: usize, dir: PathBuf) {
    let client = ApiClient::new();
    let kind = if new { "trending" } else { "top" };

    let charted = match charts_api::get_charted_tracks(&client, kind, &genre, limit).await {
        Ok(charted) => charted,
        Err(e) => {
            error!("Failed to fetch {} tracks. Err: {}", kind, e);
        }
    };

    let manager = DownloadManager::new(dir);
    if let Err(e) = manager.ensure_dir().await {
        error!("Cannot create download directory. Err: {}", e);
    }

    // charts are already truncated to the requested count; no positional
    // rules apply here
    let selection = TrackSelection::default();
    let outcomes = download_tracks(&client, &charted, &selection, &manager).await;
    let downloaded = outcomes
        .iter()
        .filter(|o| o.status == DownloadStatus::Downloaded)
        .count();

    success!("Downloaded {} of {} tracks", downloaded, charted.len());
}
