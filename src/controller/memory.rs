//! In-process media input with a wall-clock playback position.

use super::{ChangeListener, ControlError, ControlResult, InputController};
use crate::bookmark::time::MICROS_PER_SECOND;
use crate::bookmark::{SeekPoint, MAX_BYTE_OFFSET};
use std::time::Instant;

/// Default byte rate used to derive byte offsets (roughly a 2 Mbit/s stream).
pub const DEFAULT_BYTE_RATE: u64 = 250_000;

/// Playback position that advances in real time from the last seek.
#[derive(Debug, Clone)]
struct PlaybackClock {
    origin: Instant,
    base: i64,
    length: i64,
}

impl PlaybackClock {
    fn new(length: i64) -> Self {
        Self {
            origin: Instant::now(),
            base: 0,
            length: length.max(0),
        }
    }

    fn position(&self) -> i64 {
        let elapsed = i64::try_from(self.origin.elapsed().as_micros()).unwrap_or(i64::MAX);
        self.base.saturating_add(elapsed).clamp(0, self.length)
    }

    fn seek(&mut self, time_offset: i64) {
        self.base = time_offset.clamp(0, self.length);
        self.origin = Instant::now();
    }
}

/// A media input living entirely in memory.
///
/// Every successful mutation notifies all subscribed listeners synchronously,
/// on the caller's thread.
///
/// # Example
///
/// ```
/// use seekquill::bookmark::SeekPoint;
/// use seekquill::controller::{InputController, MemoryInput};
///
/// let mut input = MemoryInput::new("movie.mkv", 600 * 1_000_000);
/// input.add_bookmark(SeekPoint::new("start", 0, 0)).unwrap();
/// assert_eq!(input.bookmarks().unwrap().len(), 1);
/// ```
pub struct MemoryInput {
    name: String,
    active: bool,
    byte_rate: u64,
    clock: PlaybackClock,
    bookmarks: Vec<SeekPoint>,
    listeners: Vec<ChangeListener>,
}

impl MemoryInput {
    /// Creates an active input for `name` lasting `length` microseconds.
    pub fn new(name: impl Into<String>, length: i64) -> Self {
        Self {
            name: name.into(),
            active: true,
            byte_rate: DEFAULT_BYTE_RATE,
            clock: PlaybackClock::new(length),
            bookmarks: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Creates a controller with no input session; every call fails with
    /// [`ControlError::NoInput`].
    pub fn without_input() -> Self {
        Self {
            active: false,
            ..Self::new("", 0)
        }
    }

    /// Seeds the bookmark list without notifying listeners.
    pub fn with_bookmarks(mut self, bookmarks: Vec<SeekPoint>) -> Self {
        self.bookmarks = bookmarks;
        self
    }

    /// Sets the bytes-per-second rate used for byte offsets.
    pub fn with_byte_rate(mut self, byte_rate: u64) -> Self {
        self.byte_rate = byte_rate;
        self
    }

    /// Moves the playback position to `time_offset` microseconds.
    pub fn seek(&mut self, time_offset: i64) {
        self.clock.seek(time_offset);
    }

    fn ensure_input(&self) -> ControlResult<()> {
        if self.active {
            Ok(())
        } else {
            Err(ControlError::NoInput)
        }
    }

    fn check_index(&self, index: usize) -> ControlResult<()> {
        if index < self.bookmarks.len() {
            Ok(())
        } else {
            Err(ControlError::IndexOutOfRange {
                index,
                len: self.bookmarks.len(),
            })
        }
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }
}

impl InputController for MemoryInput {
    fn has_input(&self) -> bool {
        self.active
    }

    fn media_name(&self) -> String {
        self.name.clone()
    }

    fn bookmarks(&self) -> ControlResult<Vec<SeekPoint>> {
        self.ensure_input()?;
        Ok(self.bookmarks.clone())
    }

    fn current_bookmark(&self) -> ControlResult<SeekPoint> {
        self.ensure_input()?;
        let time_offset = self.clock.position();
        let bytes =
            i128::from(time_offset) * i128::from(self.byte_rate) / i128::from(MICROS_PER_SECOND);
        let byte_offset = u64::try_from(bytes.max(0))
            .unwrap_or(MAX_BYTE_OFFSET)
            .min(MAX_BYTE_OFFSET);
        Ok(SeekPoint::new(String::new(), byte_offset, time_offset))
    }

    fn add_bookmark(&mut self, bookmark: SeekPoint) -> ControlResult<()> {
        self.ensure_input()?;
        self.bookmarks.push(bookmark);
        self.notify();
        Ok(())
    }

    fn delete_bookmark(&mut self, index: usize) -> ControlResult<()> {
        self.ensure_input()?;
        self.check_index(index)?;
        self.bookmarks.remove(index);
        self.notify();
        Ok(())
    }

    fn clear_bookmarks(&mut self) -> ControlResult<()> {
        self.ensure_input()?;
        self.bookmarks.clear();
        self.notify();
        Ok(())
    }

    fn change_bookmark(&mut self, index: usize, bookmark: SeekPoint) -> ControlResult<()> {
        self.ensure_input()?;
        self.check_index(index)?;
        self.bookmarks[index] = bookmark;
        self.notify();
        Ok(())
    }

    fn set_bookmark(&mut self, index: usize) -> ControlResult<()> {
        self.ensure_input()?;
        self.check_index(index)?;
        let time_offset = self.bookmarks[index].time_offset;
        self.clock.seek(time_offset);
        Ok(())
    }

    fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }
}
