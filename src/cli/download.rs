use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error, info,
    management::{DownloadManager, tag_file},
    selection::TrackSelection,
    soundcloud::{client::ApiClient, resolve, tracks as tracks_api},
    success,
    types::{CatalogEntity, DownloadOutcome, DownloadStatus, GatherMode, Track},
    utils, warning,
};

enum DownloadError {
    Skipped(String),
    Failed(String),
}

pub async fn download(url: String, dir: PathBuf, selection: TrackSelection, mode: GatherMode) {
    let client = ApiClient::new();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Resolving URL...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let resolved = resolve::resolve(&client, &url).await;
    pb.finish_and_clear();

    let entity = match resolved {
        Ok(entity) => entity,
        Err(e) => {
            error!(
                "Could not get a valid response from the SoundCloud API. Please check the API key. Err: {}",
                e
            );
        }
    };

    // user and playlist downloads land in a subdirectory named after the
    // profile / playlist owner
    let target_dir = match &entity {
        CatalogEntity::User(user) => {
            info!("User profile found");
            dir.join(utils::sanitize(&user.username))
        }
        CatalogEntity::Track(_) => {
            info!("Single track found");
            dir.clone()
        }
        CatalogEntity::Playlist(playlist) => {
            info!("Single playlist found");
            dir.join(utils::sanitize(&playlist.user.username))
        }
        CatalogEntity::Playlists(playlists) => {
            info!("{} playlists found", playlists.len());
            dir.clone()
        }
        CatalogEntity::Tracks(_) => dir.clone(),
    };

    let manager = DownloadManager::new(target_dir);
    if let Err(e) = manager.ensure_dir().await {
        error!("Cannot create download directory. Err: {}", e);
    }
    info!("Saving in: {}", manager.target_dir().display());

    let gathered = match resolve::gather_tracks(&client, entity, mode, selection.limit).await {
        Ok(gathered) => gathered,
        Err(e) => {
            error!("Failed to gather tracks. Err: {}", e);
        }
    };

    let outcomes = download_tracks(&client, &gathered, &selection, &manager).await;
    let downloaded = outcomes
        .iter()
        .filter(|o| o.status == DownloadStatus::Downloaded)
        .count();

    success!("Downloaded {} of {} tracks", downloaded, gathered.len());
}

/// Runs the per-track download loop over the gathered candidate list.
///
/// Tracks are enumerated from position 1 in catalog order; the selection
/// filter is evaluated against the running success counter before each
/// track is attempted, so the limit cutoff stops exactly at the requested
/// count.
pub async fn download_tracks(
    client: &ApiClient,
    tracks: &[Track],
    selection: &TrackSelection,
    manager: &DownloadManager,
) -> Vec<DownloadOutcome> {
    let mut outcomes = Vec::new();
    let mut downloaded = 0usize;

    for (index, track) in tracks.iter().enumerate() {
        let position = index + 1;
        if !selection.should_download(position, downloaded) {
            continue;
        }

        let title = utils::track_title(track);
        match download_track(client, track, manager).await {
            Ok(()) => {
                downloaded += 1;
                success!("Downloaded {}", title);
                outcomes.push(DownloadOutcome {
                    title,
                    status: DownloadStatus::Downloaded,
                });
            }
            Err(DownloadError::Skipped(reason)) => {
                warning!("Cannot download {}", title);
                outcomes.push(DownloadOutcome {
                    title,
                    status: DownloadStatus::Skipped(reason),
                });
            }
            Err(DownloadError::Failed(reason)) => {
                warning!("Failed to download {}. Err: {}", title, reason);
                outcomes.push(DownloadOutcome {
                    title,
                    status: DownloadStatus::Failed(reason),
                });
            }
        }
    }

    outcomes
}

async fn download_track(
    client: &ApiClient,
    track: &Track,
    manager: &DownloadManager,
) -> Result<(), DownloadError> {
    let source = match tracks_api::select_source(client, track).await {
        Some(source) => source,
        None => {
            return Err(DownloadError::Skipped(
                "no usable audio source".to_string(),
            ));
        }
    };

    let metadata = utils::track_metadata(track, &source);
    let filename = utils::build_filename(&metadata);

    let bytes = client
        .get_bytes(&source.url)
        .await
        .map_err(|e| DownloadError::Failed(e.to_string()))?;
    let path = manager
        .write_track(&filename, &bytes)
        .await
        .map_err(DownloadError::Failed)?;

    // tagging is best effort; the downloaded file stays either way
    let artwork = match &metadata.artwork_url {
        Some(url) => client.get_bytes(url).await.ok(),
        None => None,
    };
    if let Err(e) = tag_file(&path, &metadata, artwork) {
        warning!("Cannot tag {}. Err: {}", metadata.title, e);
    }

    Ok(())
}
