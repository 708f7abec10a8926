//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod buttons;
pub mod panel;

pub use buttons::{buttons_task, Button, BUTTON_COUNT};
pub use panel::{panel_task, BoardPanel};
