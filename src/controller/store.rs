//! Bookmark file loading and saving.
//!
//! Bookmarks are stored as TOML, one `[[bookmark]]` table per seek point:
//!
//! ```toml
//! [[bookmark]]
//! name = "movie.mkv_0"
//! byte_offset = 1250000
//! time_offset = 5000000
//! ```

use crate::bookmark::{SeekPoint, MAX_BYTE_OFFSET};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Default, Serialize, Deserialize)]
struct BookmarkFile {
    #[serde(default, rename = "bookmark")]
    bookmarks: Vec<SeekPoint>,
}

/// Loads bookmarks from a TOML file.
///
/// A missing file yields an empty list.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid
/// bookmark TOML.
///
/// ```no_run
/// use seekquill::controller::store::load_bookmarks;
///
/// let bookmarks = load_bookmarks("movie.bookmarks.toml").unwrap();
/// ```
pub fn load_bookmarks<P: AsRef<Path>>(path: P) -> Result<Vec<SeekPoint>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bookmarks from {}", path.display()))?;
    let file: BookmarkFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse bookmarks in {}", path.display()))?;
    Ok(file.bookmarks)
}

/// Writes bookmarks to a TOML file, replacing its contents.
///
/// The write is atomic: the TOML goes to a temporary file in the target's
/// directory, which is then renamed over the target. A failed save leaves
/// any existing file untouched. Byte offsets are capped at
/// [`MAX_BYTE_OFFSET`] so every list can be stored.
///
/// # Errors
///
/// Returns an error if serialization, the temp file write or the rename
/// fails.
pub fn save_bookmarks<P: AsRef<Path>>(path: P, bookmarks: &[SeekPoint]) -> Result<()> {
    let path = path.as_ref();
    let file = BookmarkFile {
        bookmarks: bookmarks
            .iter()
            .map(|bookmark| SeekPoint {
                byte_offset: bookmark.byte_offset.min(MAX_BYTE_OFFSET),
                ..bookmark.clone()
            })
            .collect(),
    };
    let content = toml::to_string_pretty(&file).context("Failed to serialize bookmarks")?;

    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
            parent
        }
        None => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    temp.write_all(content.as_bytes())
        .context("Failed to write bookmarks to temp file")?;
    temp.as_file()
        .sync_all()
        .context("Failed to sync bookmarks temp file")?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to write bookmarks to {}", path.display()))?;

    Ok(())
}
