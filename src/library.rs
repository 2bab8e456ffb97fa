//! Library module: finds audio files under a directory and reads the tags
//! needed to query lyric providers.

mod metadata;
mod model;
mod scan;

pub use metadata::{LoftyTagReader, TagReader};
pub use model::*;
pub use scan::scan;
