//! The seam between the bookmarks panel and the media input that owns the
//! authoritative bookmark list.
//!
//! The panel never holds controller-owned objects: [`InputController::bookmarks`]
//! returns copies, and edits are submitted back by value. Change notification
//! is an explicit subscription; listeners may be invoked from whatever thread
//! the controller mutates on, so they should only hand the notification off
//! (for example over a channel) rather than touch UI state directly.

pub mod memory;
pub mod store;

use crate::bookmark::SeekPoint;
use thiserror::Error;

pub use memory::MemoryInput;

/// Errors reported by an [`InputController`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// There is no active input session.
    #[error("no active input")]
    NoInput,
    /// The requested bookmark index does not exist.
    #[error("bookmark index {index} out of range (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// The current playback position could not be determined.
    #[error("playback position unavailable")]
    PositionUnavailable,
}

/// Result type for controller calls.
pub type ControlResult<T> = std::result::Result<T, ControlError>;

/// Callback fired whenever the bookmark list changes.
pub type ChangeListener = Box<dyn Fn() + Send + 'static>;

/// Operations the bookmarks panel needs from a media input.
pub trait InputController {
    /// Returns true while an input session is active.
    fn has_input(&self) -> bool;

    /// Display name of the current media, used to name new bookmarks.
    fn media_name(&self) -> String;

    /// Returns a copy of every bookmark, in list order.
    fn bookmarks(&self) -> ControlResult<Vec<SeekPoint>>;

    /// Returns the current playback position as an unnamed seek point.
    fn current_bookmark(&self) -> ControlResult<SeekPoint>;

    /// Appends a bookmark.
    fn add_bookmark(&mut self, bookmark: SeekPoint) -> ControlResult<()>;

    /// Removes the bookmark at `index`.
    fn delete_bookmark(&mut self, index: usize) -> ControlResult<()>;

    /// Removes every bookmark.
    fn clear_bookmarks(&mut self) -> ControlResult<()>;

    /// Replaces the bookmark at `index`.
    fn change_bookmark(&mut self, index: usize, bookmark: SeekPoint) -> ControlResult<()>;

    /// Seeks playback to the bookmark at `index`.
    fn set_bookmark(&mut self, index: usize) -> ControlResult<()>;

    /// Registers a listener fired after every change to the list.
    fn subscribe(&mut self, listener: ChangeListener);
}
