//! Lyrics files stored next to an audio file: `<stem>.lrc` for synced
//! lyrics, `<stem>.txt` for plain text.

mod state;
mod write;

pub use state::{SidecarState, inspect};
pub use write::{remove_plain, write_lyrics};
