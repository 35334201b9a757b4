use std::path::Path;

use lofty::config::WriteOptions;
use lofty::picture::{MimeType, Picture, PictureType};
use lofty::prelude::*;
use lofty::tag::{Tag, TagType};

use crate::types::TrackMetadata;

/// Writes an ID3v2 tag with the track metadata and, when present, the
/// cover artwork into the downloaded file.
///
/// Tagging is best-effort from the caller's point of view: a failure here
/// never undoes a finished download.
pub fn tag_file(
    path: &Path,
    metadata: &TrackMetadata,
    artwork: Option<Vec<u8>>,
) -> Result<(), String> {
    let mut tag = Tag::new(TagType::Id3v2);
    tag.set_title(metadata.title.clone());
    tag.set_artist(metadata.artist.clone());
    if let Some(year) = metadata.year {
        tag.set_year(year);
    }
    if let Some(genre) = &metadata.genre {
        tag.set_genre(genre.clone());
    }
    if let Some(bytes) = artwork {
        tag.push_picture(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::Jpeg),
            None,
            bytes,
        ));
    }

    tag.save_to_path(path, WriteOptions::default())
        .map_err(|e| e.to_string())
}
