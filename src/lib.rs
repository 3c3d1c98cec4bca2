//! SeekQuill - a terminal-based bookmark editor for media seek points.
//!
//! The [`panel::BookmarksPanel`] lists, creates, edits and deletes the
//! bookmarks of a media input and forwards every change to an
//! [`controller::InputController`], which owns the authoritative list.

pub mod bookmark;
pub mod config;
pub mod controller;
pub mod input;
pub mod panel;
pub mod theme;
pub mod ui;
