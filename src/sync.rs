//! Reordering a playlist by cover color.
//!
//! A sync resolves the source playlist and its `(Artified)` companion by
//! name, computes the dominant cover color of every track, sorts the track
//! URIs by HSV and appends them to the companion. Every color is computed
//! before the first track is written, so a failing cover aborts the sync
//! without touching the destination's contents.

use std::{collections::HashMap, fmt};

use crate::{
    color::{ColorExtractor, Rgb},
    error::AppError,
    info,
    spotify::SpotifyClient,
    success,
    types::{Playlist, PlaylistItem, TrackReference},
    utils, warning,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Keep every playlist entry instead of collapsing repeated URIs.
    pub keep_duplicates: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The source playlist is not in the user's library. Nothing was written.
    NotInLibrary { playlist: String },
    Artified {
        playlist_id: String,
        created: bool,
        tracks: Vec<String>,
    },
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOutcome::NotInLibrary { playlist } => write!(
                f,
                "{playlist} not in your library, make sure playlist has been added to your profile"
            ),
            SyncOutcome::Artified { .. } => write!(f, "Artified!"),
        }
    }
}

/// Ids of the source playlist and its companion, when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPair {
    pub source_id: Option<String>,
    pub destination_id: Option<String>,
}

/// Linear scan over the library; on repeated names the last one wins.
pub fn resolve_playlists(playlists: &[Playlist], source_name: &str) -> PlaylistPair {
    let destination_name = utils::artified_name(source_name);
    let mut pair = PlaylistPair::default();

    for playlist in playlists {
        if playlist.name == source_name {
            pair.source_id = Some(playlist.id.clone());
        }
        if playlist.name == destination_name {
            pair.destination_id = Some(playlist.id.clone());
        }
    }

    pair
}

/// Extracts uri and primary cover url from each playlist item.
///
/// Items whose track is gone (`track: null`) are skipped. A track without
/// any album image cannot be sorted and fails the whole sync.
pub fn track_references(items: Vec<PlaylistItem>) -> Result<Vec<TrackReference>, AppError> {
    let mut tracks = Vec::with_capacity(items.len());

    for item in items {
        let Some(track) = item.track else {
            warning!("Skipping playlist entry without a track");
            continue;
        };

        let cover = track
            .album
            .and_then(|album| album.images.into_iter().next())
            .ok_or_else(|| AppError::MissingArtwork(track.uri.clone()))?;

        tracks.push(TrackReference {
            uri: track.uri,
            cover_image_url: cover.url,
        });
    }

    Ok(tracks)
}

/// Pairs each uri with its color.
///
/// Unless `keep_duplicates` is set a repeated uri collapses into one entry
/// that keeps the position of its first occurrence and the color of its
/// last.
pub fn color_entries(colored: Vec<(String, Rgb)>, keep_duplicates: bool) -> Vec<(String, Rgb)> {
    if keep_duplicates {
        return colored;
    }

    let mut entries: Vec<(String, Rgb)> = Vec::with_capacity(colored.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for (uri, color) in colored {
        match index.get(&uri) {
            Some(&i) => entries[i].1 = color,
            None => {
                index.insert(uri.clone(), entries.len());
                entries.push((uri, color));
            }
        }
    }

    entries
}

/// Orders uris by ascending `(hue, saturation, value)`.
///
/// The sort is stable: exact ties keep their input order.
pub fn sort_by_color(mut entries: Vec<(String, Rgb)>) -> Vec<String> {
    entries.sort_by_cached_key(|(_, color)| color.to_hsv());
    entries.into_iter().map(|(uri, _)| uri).collect()
}

/// Runs one sync of `source_name` for the user behind `client`.
pub async fn sync(
    client: &SpotifyClient,
    extractor: &dyn ColorExtractor,
    source_name: &str,
    options: SyncOptions,
) -> Result<SyncOutcome, AppError> {
    let user = client.current_user().await?;
    let playlists = client.playlists().await?;
    let pair = resolve_playlists(&playlists, source_name);

    let Some(source_id) = pair.source_id else {
        warning!("Playlist {} not found for user {}", source_name, user.id);
        return Ok(SyncOutcome::NotInLibrary {
            playlist: source_name.to_string(),
        });
    };

    let (destination_id, created) = match pair.destination_id {
        Some(id) => (id, false),
        None => {
            let name = utils::artified_name(source_name);
            let playlist = client.create_playlist(&user.id, &name, true).await?;
            success!("Created playlist {}", name);
            (playlist.id, true)
        }
    };

    let items = client.playlist_items(&source_id).await?;
    let tracks = track_references(items)?;
    info!("Extracting cover colors for {} tracks", tracks.len());

    let mut colored = Vec::with_capacity(tracks.len());
    for track in tracks {
        let color = extractor.dominant_color(&track.cover_image_url).await?;
        colored.push((track.uri, color));
    }

    let sorted = sort_by_color(color_entries(colored, options.keep_duplicates));
    client.add_tracks(&destination_id, &sorted).await?;
    success!(
        "Added {} tracks to {}",
        sorted.len(),
        utils::artified_name(source_name)
    );

    Ok(SyncOutcome::Artified {
        playlist_id: destination_id,
        created,
        tracks: sorted,
    })
}
