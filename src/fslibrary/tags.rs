//! Tag reading, adapted from the teacher's `metadata::read`, trimmed
//! to the four fields the index builds over.

use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::Accessor;

use crate::error::{Error, Result};
use crate::playlist::Tuple;

/// Read the genre/artist/album/title tuple from an audio file.
/// Missing tags become empty strings (per [`crate::index::EntryTags`]),
/// not placeholder text — unlike the teacher's player-facing
/// `TrackMetadata`, an empty tag here means "skip this field", not
/// "unknown".
pub fn read_tags(path: &Path) -> Result<Tuple> {
    let tagged_file = Probe::open(path)
        .map_err(|e| Error::tags(path, e.to_string()))?
        .read()
        .map_err(|e| Error::tags(path, e.to_string()))?;

    let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());

    Ok(Tuple {
        genre: tag.and_then(|t| t.genre()).unwrap_or_default().to_string(),
        artist: tag.and_then(|t| t.artist()).unwrap_or_default().to_string(),
        album: tag.and_then(|t| t.album()).unwrap_or_default().to_string(),
        title: tag.and_then(|t| t.title()).unwrap_or_default().to_string(),
    })
}
