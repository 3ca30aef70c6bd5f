//! # skiphire-tui
//!
//! Heavy waste selector popup using ratatui with Elm architecture. Views are
//! pure render functions over the selection controller's state.

pub mod bridge;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod pickers;
pub mod skip_grid;
pub mod styles;
pub mod visual;

pub use bridge::spawn_catalog_fetch;
pub use keymap::KeyAction;
pub use messages::TuiMessage;
pub use model::{Section, TuiApp};
