use serde_json::Value;

use crate::Res;
use crate::soundcloud::{client::ApiClient, tracks, users};
use crate::types::{CatalogEntity, GatherMode, Playlist, Track, User};

/// How many related tracks to pull for `--similar`.
const RELATED_COUNT: usize = 10;

/// Resolves an arbitrary SoundCloud URL into a classified catalog entity.
///
/// One call against the `/resolve` endpoint; the payload is classified by
/// [`classify`] before anything downstream touches it. Transport errors and
/// classification failures are both terminal for the run.
pub async fn resolve(client: &ApiClient, url: &str) -> Res<CatalogEntity> {
    let payload = client
        .get_json::<Value>(&client.endpoint("resolve"), &[("url", url.to_string())])
        .await?;

    classify(payload).map_err(Into::into)
}

/// Classifies a resolved payload by its shape and `kind` discriminant.
///
/// The API returns either a single object tagged with `kind`
/// (`user` / `track` / `playlist`) or a bare list of playlists or tracks.
/// Anything else - a missing or unrecognized `kind`, an empty list, a list
/// of mixed kinds - is a classification failure, never a silent default.
pub fn classify(payload: Value) -> Result<CatalogEntity, String> {
    if payload.is_object() {
        let kind = payload
            .get("kind")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| "resolved payload carries no kind discriminant".to_string())?;

        return match kind.as_str() {
            "user" => serde_json::from_value::<User>(payload)
                .map(CatalogEntity::User)
                .map_err(|e| e.to_string()),
            "track" => serde_json::from_value::<Track>(payload)
                .map(|t| CatalogEntity::Track(Box::new(t)))
                .map_err(|e| e.to_string()),
            "playlist" => serde_json::from_value::<Playlist>(payload)
                .map(CatalogEntity::Playlist)
                .map_err(|e| e.to_string()),
            other => Err(format!("unsupported entity kind: {other}")),
        };
    }

    if let Some(items) = payload.as_array() {
        if items.is_empty() {
            return Err("resolved payload is an empty list".to_string());
        }

        let kinds: Vec<String> = items
            .iter()
            .map(|item| {
                item.get("kind")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string()
            })
            .collect();

        if kinds.iter().all(|k| k == "playlist") {
            return serde_json::from_value::<Vec<Playlist>>(payload)
                .map(CatalogEntity::Playlists)
                .map_err(|e| e.to_string());
        }
        if kinds.iter().all(|k| k == "track") {
            return serde_json::from_value::<Vec<Track>>(payload)
                .map(CatalogEntity::Tracks)
                .map_err(|e| e.to_string());
        }

        return Err("resolved list is not uniformly playlists or tracks".to_string());
    }

    Err("resolved payload is neither an object nor a list".to_string())
}

/// Enumerates the ordered candidate tracks implied by a classified entity.
///
/// - user: likes and/or uploads depending on `mode`, likes first for
///   `--all`
/// - track: the track itself, plus related tracks for `--similar`
/// - playlist: its embedded track list, no pagination
/// - list of playlists: embedded tracks concatenated in list order
/// - list of tracks: taken as-is
///
/// `limit` caps how far the paginated gatherers enumerate; exact counts are
/// enforced downstream by the selection filter.
pub async fn gather_tracks(
    client: &ApiClient,
    entity: CatalogEntity,
    mode: GatherMode,
    limit: Option<usize>,
) -> Res<Vec<Track>> {
    match entity {
        CatalogEntity::User(user) => {
            let mut gathered = Vec::new();
            if mode.all || mode.likes {
                gathered.extend(users::get_liked_tracks(client, &user, limit).await?);
            }
            if !mode.likes {
                gathered.extend(users::get_uploaded_tracks(client, &user, limit).await?);
            }
            Ok(gathered)
        }
        CatalogEntity::Track(track) => {
            let mut gathered = vec![*track];
            if mode.similar {
                let related =
                    tracks::get_related_tracks(client, &gathered[0], RELATED_COUNT).await?;
                gathered.extend(related);
            }
            Ok(gathered)
        }
        CatalogEntity::Playlist(playlist) => Ok(playlist.tracks),
        CatalogEntity::Playlists(playlists) => {
            Ok(playlists.into_iter().flat_map(|p| p.tracks).collect())
        }
        CatalogEntity::Tracks(list) => Ok(list),
    }
}
