use crate::types::{AudioSource, Track, TrackMetadata};

pub fn sanitize(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '/' | '\\' | '?' | '*' | '"' | '<' | '>' | '|' | ':' => cleaned.push('_'),
            c if c.is_control() => cleaned.push('_'),
            _ => cleaned.push(ch),
        }
    }
    let trimmed = cleaned.trim().trim_matches('.');
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn track_title(track: &Track) -> String {
    track
        .title
        .clone()
        .unwrap_or_else(|| track.id.to_string())
}

pub fn track_artist(track: &Track) -> String {
    if let Some(meta) = &track.publisher_metadata {
        if let Some(artist) = &meta.artist {
            if !artist.is_empty() {
                return artist.clone();
            }
        }
    }
    if let Some(user) = &track.user {
        return user.username.clone();
    }
    "unknown".to_string()
}

pub fn track_metadata(track: &Track, source: &AudioSource) -> TrackMetadata {
    TrackMetadata {
        title: track_title(track),
        artist: track_artist(track),
        year: track.release_year,
        genre: track.genre.clone(),
        format: source.format.clone(),
        download_url: source.url.clone(),
        artwork_url: track.artwork_url.clone(),
    }
}

pub fn build_filename(metadata: &TrackMetadata) -> String {
    sanitize(&format!(
        "{artist} - {title}.{format}",
        artist = metadata.artist,
        title = metadata.title,
        format = metadata.format
    ))
}
