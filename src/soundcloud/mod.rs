//! # SoundCloud Integration Module
//!
//! This module provides the interface to the SoundCloud v2 catalog API:
//! resolving arbitrary URLs into catalog entities, enumerating the track
//! collections behind them, and picking the best retrievable audio source
//! for each track. It is the only layer of scdlcli that talks to the
//! network.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of the catalog API:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! SoundCloud Integration Layer
//!     ├── Client (credentialed HTTP access)
//!     ├── Resolver (URL → user / track / playlist)
//!     ├── Paginator (cursor-based collection walking)
//!     ├── Source Selection (download / stream / transcoding)
//!     └── Gatherers (uploads, likes, related, charts)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! SoundCloud v2 API
//! ```
//!
//! ## Core Modules
//!
//! ### Client
//!
//! [`client`] - A constructed [`client::ApiClient`] value owning the HTTP
//! client, the API base URL, and the static client id. The client id is
//! attached to every request as a query parameter; there is no OAuth flow.
//! Transient 502 responses are retried with a fixed delay, everything else
//! is propagated to the call site.
//!
//! ### Resolver
//!
//! [`resolve`] - Classifies the `/resolve` payload into a
//! [`crate::types::CatalogEntity`] by inspecting the `kind` discriminant
//! before anything else touches the data, and routes a classified entity to
//! the right track collection (uploads, likes, playlist tracks, related
//! tracks, or the single track itself).
//!
//! ### Paginator
//!
//! [`paginate`] - Walks a cursor-paginated collection endpoint. Each page
//! carries the continuation URL for the next one (`next_href`); an absent
//! cursor is the end of the collection. Items are filtered in arrival
//! order, so catalog order is preserved.
//!
//! ### Source Selection
//!
//! [`tracks`] - Decides per track whether a usable audio source exists and
//! which one to prefer: an explicit download, the legacy stream URL, or the
//! first progressive transcoding. Progressive transcoding URLs are
//! locators; one follow-up fetch yields the real, time-limited audio URL.
//!
//! ### Gatherers
//!
//! [`users`] and [`charts`] - Collection queries built on the paginator:
//! a user's uploads and likes, and the genre charts.
//!
//! ## Error Handling
//!
//! - **Classification failures** (unknown `kind`, malformed payload) are
//!   hard errors for the run; there is nothing to download.
//! - **Pagination faults** (a page without the expected collection shape)
//!   abort that gather operation; partial pages are not returned as
//!   success.
//! - **Per-track source failures** (no source, failed locator fetch) are
//!   soft: the track is skipped and the batch continues.
//!
//! ## API Coverage
//!
//! - `GET /resolve` - URL to entity resolution
//! - `GET /users/{id}/tracks` - a user's uploads, paginated
//! - `GET /users/{id}/likes` - a user's likes, paginated
//! - `GET /tracks/{id}/related` - recommendations for a track
//! - `GET /charts` - top/trending tracks per genre, paginated

pub mod charts;
pub mod client;
pub mod paginate;
pub mod resolve;
pub mod tracks;
pub mod users;
