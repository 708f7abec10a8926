//! Board-agnostic core logic for the Halo panel
//!
//! This crate contains all application logic that does not depend on
//! specific hardware:
//!
//! - Scene catalogue and renderer
//! - Session state (scene cursor, brightness) and input dispatch
//! - Panel: frame + link + session, render-then-push
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod panel;
pub mod scene;
pub mod session;

pub use config::PanelConfig;
pub use panel::{Outcome, Panel, Status, BOOT_LABEL};
pub use scene::{render_scene, reset_off, Scene, CATALOGUE, SCENE_COUNT};
pub use session::{Action, InputEvent, Session};
