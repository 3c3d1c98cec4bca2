#![allow(dead_code)]

use seekquill::bookmark::SeekPoint;
use seekquill::controller::{ChangeListener, ControlError, ControlResult, InputController};

/// A mutating controller call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Add(SeekPoint),
    Delete(usize),
    Clear,
    Change(usize, SeekPoint),
    Set(usize),
}

/// Controller that records every mutating call and can be told to fail.
pub struct RecordingController {
    pub active: bool,
    pub media: String,
    pub list: Vec<SeekPoint>,
    pub position: Option<SeekPoint>,
    pub fail_list: bool,
    pub fail_mutations: bool,
    pub calls: Vec<Call>,
    listeners: Vec<ChangeListener>,
}

impl RecordingController {
    pub fn new(list: Vec<SeekPoint>) -> Self {
        Self {
            active: true,
            media: "movie.mkv".to_string(),
            list,
            position: Some(SeekPoint::new("", 2_500_000, 10_000_000)),
            fail_list: false,
            fail_mutations: false,
            calls: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn without_input() -> Self {
        Self {
            active: false,
            ..Self::new(Vec::new())
        }
    }

    /// Fires every listener, as if the list changed elsewhere.
    pub fn notify(&self) {
        for listener in &self.listeners {
            listener();
        }
    }

    fn mutate(&mut self, call: Call) -> ControlResult<()> {
        self.calls.push(call);
        if self.fail_mutations {
            return Err(ControlError::NoInput);
        }
        Ok(())
    }
}

impl InputController for RecordingController {
    fn has_input(&self) -> bool {
        self.active
    }

    fn media_name(&self) -> String {
        self.media.clone()
    }

    fn bookmarks(&self) -> ControlResult<Vec<SeekPoint>> {
        if self.fail_list {
            return Err(ControlError::NoInput);
        }
        Ok(self.list.clone())
    }

    fn current_bookmark(&self) -> ControlResult<SeekPoint> {
        self.position.clone().ok_or(ControlError::PositionUnavailable)
    }

    fn add_bookmark(&mut self, bookmark: SeekPoint) -> ControlResult<()> {
        self.mutate(Call::Add(bookmark.clone()))?;
        self.list.push(bookmark);
        self.notify();
        Ok(())
    }

    fn delete_bookmark(&mut self, index: usize) -> ControlResult<()> {
        self.mutate(Call::Delete(index))?;
        if index >= self.list.len() {
            return Err(ControlError::IndexOutOfRange {
                index,
                len: self.list.len(),
            });
        }
        self.list.remove(index);
        self.notify();
        Ok(())
    }

    fn clear_bookmarks(&mut self) -> ControlResult<()> {
        self.mutate(Call::Clear)?;
        self.list.clear();
        self.notify();
        Ok(())
    }

    fn change_bookmark(&mut self, index: usize, bookmark: SeekPoint) -> ControlResult<()> {
        self.mutate(Call::Change(index, bookmark.clone()))?;
        if index >= self.list.len() {
            return Err(ControlError::IndexOutOfRange {
                index,
                len: self.list.len(),
            });
        }
        self.list[index] = bookmark;
        self.notify();
        Ok(())
    }

    fn set_bookmark(&mut self, index: usize) -> ControlResult<()> {
        self.mutate(Call::Set(index))
    }

    fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }
}

pub fn sample_bookmarks() -> Vec<SeekPoint> {
    vec![
        SeekPoint::new("opening", 0, 0),
        SeekPoint::new("chase", 1_000_000, 3_661_000_000),
        SeekPoint::new("credits", 9_000_000, 5_400_000_000),
    ]
}
