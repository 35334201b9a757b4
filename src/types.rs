use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub permalink_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: u64,
    pub title: Option<String>,
    pub user: Option<User>,
    pub publisher_metadata: Option<PublisherMetadata>,
    pub release_year: Option<u32>,
    pub genre: Option<String>,
    pub artwork_url: Option<String>,
    pub streamable: Option<bool>,
    pub downloadable: Option<bool>,
    pub download_url: Option<String>,
    pub stream_url: Option<String>,
    pub original_format: Option<String>,
    #[serde(default)]
    pub media: Media,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherMetadata {
    pub artist: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub transcodings: Vec<Transcoding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcoding {
    pub url: String,
    pub format: TranscodingFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscodingFormat {
    pub protocol: String,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub title: Option<String>,
    pub user: User,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// A resolved catalog identifier, classified once at the API boundary.
#[derive(Debug, Clone)]
pub enum CatalogEntity {
    User(User),
    Track(Box<Track>),
    Playlist(Playlist),
    Playlists(Vec<Playlist>),
    Tracks(Vec<Track>),
}

/// One page of a cursor-paginated collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub collection: Vec<T>,
    pub next_href: Option<String>,
}

/// An entry of a user's likes feed. Exactly one of the two is populated;
/// liked playlists are skipped during gathering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeItem {
    pub track: Option<Track>,
    pub playlist: Option<serde_json::Value>,
}

/// An entry of a charts page, wrapping the ranked track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartItem {
    pub track: Track,
}

/// Body of a progressive transcoding locator. The transcoding URL itself is
/// not the audio; fetching it yields this record with the time-limited
/// stream URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamLocator {
    pub url: String,
}

/// The audio source picked for a track: a retrievable URL plus file format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource {
    pub url: String,
    pub format: String,
}

/// Per-track record handed to the download and tagging collaborators.
#[derive(Debug, Clone)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: String,
    pub year: Option<u32>,
    pub genre: Option<String>,
    pub format: String,
    pub download_url: String,
    pub artwork_url: Option<String>,
}

/// Which track collections to gather for a resolved user or track.
#[derive(Debug, Clone, Copy, Default)]
pub struct GatherMode {
    pub likes: bool,
    pub all: bool,
    pub similar: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    Downloaded,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub title: String,
    pub status: DownloadStatus,
}
