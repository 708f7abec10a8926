//! Panel: frame, link and session under one owner
//!
//! Rendering and pushing happen through `&mut self`, so nothing else can
//! touch the frame while a push sequence is on the wire.

use core::fmt::Write;

use halo_hal::I2cWrite;
use halo_protocol::{FrameBuffer, FrameLink, PushReport};
use heapless::String;

use crate::config::PanelConfig;
use crate::scene::{render_scene, reset_off, OFF_LABEL, SCENE_COUNT};
use crate::session::{Action, InputEvent, Session};

/// Label shown before the first frame is pushed
pub const BOOT_LABEL: &str = "BOOT";

/// Maximum characters per status line
pub const STATUS_LINE_LEN: usize = 24;

/// Result of handling one input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Outcome {
    /// What the event resolved to
    pub action: Action,
    /// Label of what is now on the panel
    pub label: &'static str,
    /// How the push went
    pub report: PushReport,
}

/// Operator-facing status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    /// 1-based scene number
    pub step: usize,
    /// Catalogue size
    pub of: usize,
    /// Current brightness
    pub brightness: u8,
    /// Label of what is on the panel
    pub label: &'static str,
}

impl Status {
    /// Status as three text lines ("Step n/25", "Brightness b", label)
    pub fn lines(&self) -> [String<STATUS_LINE_LEN>; 3] {
        let mut step = String::new();
        let _ = write!(step, "Step {}/{}", self.step, self.of);

        let mut brightness = String::new();
        let _ = write!(brightness, "Brightness {}", self.brightness);

        let mut label = String::new();
        for ch in self.label.chars() {
            if label.push(ch).is_err() {
                break;
            }
        }

        [step, brightness, label]
    }
}

/// The panel, driven by input events
pub struct Panel<B> {
    frame: FrameBuffer,
    link: FrameLink<B>,
    session: Session,
    label: &'static str,
}

impl<B: I2cWrite> Panel<B> {
    /// Create a panel over a bus; nothing is sent until [`Panel::start`]
    pub fn new(bus: B, config: &PanelConfig) -> Self {
        Self {
            frame: FrameBuffer::new(),
            link: FrameLink::new(bus, config.link()),
            session: config.session(),
            label: BOOT_LABEL,
        }
    }

    /// Show the first scene
    pub fn start(&mut self) -> PushReport {
        self.render();
        self.link.push_frame_counted(&self.frame)
    }

    /// Handle one input event: update the session, redraw, push
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        let action = self.session.apply(event);
        match action {
            Action::Render => self.render(),
            Action::Off | Action::Exit => self.turn_off(),
        }

        let report = self.link.push_frame_counted(&self.frame);
        Outcome {
            action,
            label: self.label,
            report,
        }
    }

    fn render(&mut self) {
        self.label = render_scene(
            &mut self.frame,
            self.session.scene(),
            self.session.brightness(),
        );
    }

    fn turn_off(&mut self) {
        let scene = reset_off(&mut self.frame);
        self.session.select(scene);
        self.label = OFF_LABEL;
    }

    /// Current status
    pub fn status(&self) -> Status {
        Status {
            step: self.session.scene() + 1,
            of: SCENE_COUNT,
            brightness: self.session.brightness(),
            label: self.label,
        }
    }

    /// Frame as last rendered
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Give back the bus
    pub fn release(self) -> B {
        self.link.release()
    }
}
