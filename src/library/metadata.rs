use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};

use crate::error::MetadataError;

use super::model::TrackTags;

/// Source of artist/title tags for an audio file.
pub trait TagReader {
    fn read_tags(&self, path: &Path) -> Result<TrackTags, MetadataError>;
}

/// Reads tags with lofty, which maps Vorbis comments, ID3v2 frames and MP4
/// atoms onto the same accessors.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> Result<TrackTags, MetadataError> {
        let tagged = lofty::read_from_path(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) else {
            return Ok(TrackTags::default());
        };

        Ok(TrackTags::new(
            tag.artist().as_deref(),
            tag.title().as_deref(),
        ))
    }
}
