//! Input handling: keyboard mapping, mouse hit-testing and event dispatch.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::InputEvent;
