//! Session state and input dispatch
//!
//! The session holds the two values the operator controls: which scene is
//! shown and at what brightness. It never advances on its own; every
//! change comes from an [`InputEvent`].

use crate::scene::SCENE_COUNT;

/// Default brightness step per button press
pub const BRIGHTNESS_STEP: u8 = 16;

/// Operator input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Advance to the next scene (wraps)
    Next,
    /// Go back one scene (wraps)
    Previous,
    /// Raise brightness by one step
    Brighter,
    /// Lower brightness by one step
    Dimmer,
    /// Re-send the current scene
    Reapply,
    /// Blank the panel and rewind to the first scene
    Off,
    /// Blank the panel and leave
    Exit,
}

/// What the panel has to do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Render the current scene and push it
    Render,
    /// Clear the frame and push it
    Off,
    /// Clear the frame, push it, and stop handling input
    Exit,
}

/// Scene cursor and brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    scene: usize,
    brightness: u8,
    step: u8,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(0xFF, BRIGHTNESS_STEP)
    }
}

impl Session {
    /// Start at scene 0 with the given brightness and step
    pub const fn new(brightness: u8, step: u8) -> Self {
        Self {
            scene: 0,
            brightness,
            step,
        }
    }

    /// Current scene index
    pub fn scene(&self) -> usize {
        self.scene
    }

    /// Current brightness
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Jump to a scene; indices past the catalogue wrap
    pub fn select(&mut self, scene: usize) {
        self.scene = scene % SCENE_COUNT;
    }

    /// Advance one scene, wrapping to 0
    pub fn next_scene(&mut self) {
        self.scene = (self.scene + 1) % SCENE_COUNT;
    }

    /// Go back one scene, wrapping to the last
    pub fn previous_scene(&mut self) {
        self.scene = match self.scene {
            0 => SCENE_COUNT - 1,
            n => n - 1,
        };
    }

    /// Raise brightness, clamped at 255
    pub fn brighter(&mut self) {
        self.brightness = self.brightness.saturating_add(self.step);
    }

    /// Lower brightness, clamped at 0
    pub fn dimmer(&mut self) {
        self.brightness = self.brightness.saturating_sub(self.step);
    }

    /// Apply an input event
    ///
    /// `Off` and `Exit` leave the scene cursor alone; the panel rewinds it
    /// when it clears the frame.
    pub fn apply(&mut self, event: InputEvent) -> Action {
        match event {
            InputEvent::Next => {
                self.next_scene();
                Action::Render
            }
            InputEvent::Previous => {
                self.previous_scene();
                Action::Render
            }
            InputEvent::Brighter => {
                self.brighter();
                Action::Render
            }
            InputEvent::Dimmer => {
                self.dimmer();
                Action::Render
            }
            InputEvent::Reapply => Action::Render,
            InputEvent::Off => Action::Off,
            InputEvent::Exit => Action::Exit,
        }
    }
}
