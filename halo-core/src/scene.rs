//! Scene catalogue
//!
//! A scene is a pure rendering rule: it clears the frame and applies a
//! fixed list of layers at the current brightness. The catalogue is a
//! constant table indexed by scene number.

use halo_protocol::map::RING_LEN;
use halo_protocol::{FrameBuffer, Group, Rgb, Slot};

/// Number of scenes in the catalogue
pub const SCENE_COUNT: usize = 25;

/// Label for indices outside the catalogue
pub const UNKNOWN_LABEL: &str = "step?";

/// Label shown after [`reset_off`]
pub const OFF_LABEL: &str = "OFF/reset";

/// Ring colours, expressed in terms of the brightness level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tint {
    /// Blue channel only
    Blue,
    /// Red channel only
    Red,
    /// Green channel only
    Green,
    /// All three channels
    White,
    /// Red and blue
    Purple,
    /// Green and blue
    Cyan,
    /// Red and green
    Yellow,
}

impl Tint {
    /// Channel values at a given brightness
    pub const fn at(self, level: u8) -> Rgb {
        match self {
            Tint::Blue => Rgb::new(0, 0, level),
            Tint::Red => Rgb::new(level, 0, 0),
            Tint::Green => Rgb::new(0, level, 0),
            Tint::White => Rgb::splat(level),
            Tint::Purple => Rgb::new(level, 0, level),
            Tint::Cyan => Rgb::new(0, level, level),
            Tint::Yellow => Rgb::new(level, level, 0),
        }
    }
}

/// One rendering step of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    /// A digit in a slot, no decimal point
    Digit { slot: Slot, digit: i16 },
    /// A monochrome group
    Group(Group),
    /// The whole ring in one colour
    Ring(Tint),
    /// Odd positions in one colour, even positions in another
    RingAlternate { odd: Tint, even: Tint },
    /// First half of the ring in one colour, second half in another
    RingSplit { first: Tint, second: Tint },
    /// Selected ring positions only
    RingPositions {
        positions: &'static [usize],
        tint: Tint,
    },
}

impl Layer {
    /// Apply the layer at the given brightness
    pub fn apply(&self, frame: &mut FrameBuffer, level: u8) {
        match *self {
            Layer::Digit { slot, digit } => frame.set_digit(slot, digit, level, false),
            Layer::Group(group) => frame.fill_group(group, level),
            Layer::Ring(tint) => frame.fill_ring(tint.at(level)),
            Layer::RingAlternate { odd, even } => {
                for position in 0..RING_LEN {
                    let tint = if position & 1 == 1 { odd } else { even };
                    frame.set_ring(position, tint.at(level));
                }
            }
            Layer::RingSplit { first, second } => {
                for position in 0..RING_LEN {
                    let tint = if position < RING_LEN / 2 { first } else { second };
                    frame.set_ring(position, tint.at(level));
                }
            }
            Layer::RingPositions { positions, tint } => {
                for &position in positions {
                    frame.set_ring(position, tint.at(level));
                }
            }
        }
    }
}

/// A catalogue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scene {
    /// Short description for the operator
    pub label: &'static str,
    /// Layers applied in order onto a cleared frame
    pub layers: &'static [Layer],
}

impl Scene {
    const fn new(label: &'static str, layers: &'static [Layer]) -> Self {
        Self { label, layers }
    }

    /// Clear the frame and draw this scene
    pub fn render(&self, frame: &mut FrameBuffer, brightness: u8) {
        frame.clear();
        for layer in self.layers {
            layer.apply(frame, brightness);
        }
    }
}

/// The scene catalogue, in cycling order
pub const CATALOGUE: [Scene; SCENE_COUNT] = [
    // Digits
    Scene::new("t0=1", &[Layer::Digit { slot: Slot::T0, digit: 1 }]),
    Scene::new("t1=9", &[Layer::Digit { slot: Slot::T1, digit: 9 }]),
    Scene::new(
        "b0=0 b1=6",
        &[
            Layer::Digit { slot: Slot::B0, digit: 0 },
            Layer::Digit { slot: Slot::B1, digit: 6 },
        ],
    ),
    // Monochrome groups
    Scene::new("uiTop", &[Layer::Group(Group::UiTop)]),
    Scene::new("uiBottom", &[Layer::Group(Group::UiBottom)]),
    Scene::new("bar33_37", &[Layer::Group(Group::Bar33To37)]),
    Scene::new("bar38_42", &[Layer::Group(Group::Bar38To42)]),
    Scene::new("bar43_48", &[Layer::Group(Group::Bar43To48)]),
    Scene::new("droplet", &[Layer::Group(Group::Droplet)]),
    Scene::new("midBox", &[Layer::Group(Group::MidBox)]),
    Scene::new("boltOuter", &[Layer::Group(Group::BoltOuter)]),
    Scene::new("boltInner", &[Layer::Group(Group::BoltInner)]),
    // Ring fills
    Scene::new("HALO blue", &[Layer::Ring(Tint::Blue)]),
    Scene::new("HALO red", &[Layer::Ring(Tint::Red)]),
    Scene::new("HALO green", &[Layer::Ring(Tint::Green)]),
    Scene::new("HALO white", &[Layer::Ring(Tint::White)]),
    Scene::new("HALO purple", &[Layer::Ring(Tint::Purple)]),
    Scene::new("HALO cyan", &[Layer::Ring(Tint::Cyan)]),
    Scene::new("HALO yellow", &[Layer::Ring(Tint::Yellow)]),
    // Ring patterns
    Scene::new(
        "HALO alt R/B",
        &[Layer::RingAlternate {
            odd: Tint::Red,
            even: Tint::Blue,
        }],
    ),
    Scene::new(
        "HALO half B/R",
        &[Layer::RingSplit {
            first: Tint::Blue,
            second: Tint::Red,
        }],
    ),
    Scene::new(
        "HALO one white",
        &[Layer::RingPositions {
            positions: &[0],
            tint: Tint::White,
        }],
    ),
    Scene::new(
        "HALO 3 white",
        &[Layer::RingPositions {
            positions: &[0, 4, 8],
            tint: Tint::White,
        }],
    ),
    // Combined
    Scene::new(
        "t0=7 + HALO blue",
        &[
            Layer::Digit { slot: Slot::T0, digit: 7 },
            Layer::Ring(Tint::Blue),
        ],
    ),
    Scene::new(
        "boltOuter + HALO red",
        &[Layer::Group(Group::BoltOuter), Layer::Ring(Tint::Red)],
    ),
];

/// Look up a catalogue entry
pub fn scene(index: usize) -> Option<&'static Scene> {
    CATALOGUE.get(index)
}

/// Render scene `index` into the frame and return its label
///
/// The frame is always cleared first; unknown indices leave it blank.
pub fn render_scene(frame: &mut FrameBuffer, index: usize, brightness: u8) -> &'static str {
    match scene(index) {
        Some(scene) => {
            scene.render(frame, brightness);
            scene.label
        }
        None => {
            frame.clear();
            UNKNOWN_LABEL
        }
    }
}

/// Turn everything off; returns the scene index to resume from
pub fn reset_off(frame: &mut FrameBuffer) -> usize {
    frame.clear();
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_protocol::map::SLOT_LEN;
    use halo_protocol::{FRAME_LEN, SEG7_MASK};
    use proptest::prelude::*;

    fn rendered(index: usize, brightness: u8) -> FrameBuffer {
        let mut frame = FrameBuffer::new();
        render_scene(&mut frame, index, brightness);
        frame
    }

    fn lit(frame: &FrameBuffer) -> usize {
        frame.as_bytes().iter().filter(|&&b| b != 0).count()
    }

    fn assert_digit(frame: &FrameBuffer, slot: Slot, digit: usize, level: u8) {
        let mask = SEG7_MASK[digit];
        for offset in 0..SLOT_LEN {
            let on = offset < 7 && mask & (1 << offset) != 0;
            let expected = if on { level } else { 0 };
            assert_eq!(
                frame.get(slot.base() + offset),
                Some(expected),
                "{} offset {}",
                slot.name(),
                offset
            );
        }
    }

    #[test]
    fn test_catalogue_size() {
        assert_eq!(CATALOGUE.len(), SCENE_COUNT);
        assert!(scene(SCENE_COUNT).is_none());
    }

    #[test]
    fn test_digit_scenes() {
        let frame = rendered(0, 0xFF);
        assert_digit(&frame, Slot::T0, 1, 0xFF);
        assert_eq!(lit(&frame), 2);

        let frame = rendered(1, 0x40);
        assert_digit(&frame, Slot::T1, 9, 0x40);
        assert_eq!(lit(&frame), 6);
    }

    #[test]
    fn test_scene_two_renders_both_bottom_digits() {
        let frame = rendered(2, 0xFF);
        assert_digit(&frame, Slot::B0, 0, 0xFF);
        assert_digit(&frame, Slot::B1, 6, 0xFF);
        assert_eq!(lit(&frame), 6 + 6);
    }

    #[test]
    fn test_group_scenes() {
        for (offset, group) in Group::ALL.iter().enumerate() {
            let index = 3 + offset;
            let mut frame = FrameBuffer::new();
            let label = render_scene(&mut frame, index, 0x30);

            assert_eq!(label, group.name());
            for &i in group.indices() {
                assert_eq!(frame.get(i as usize), Some(0x30));
            }
            assert_eq!(lit(&frame), group.indices().len());
        }
    }

    #[test]
    fn test_ring_fill_scenes() {
        let level = 0x80;
        let expected = [
            Rgb::new(0, 0, level),
            Rgb::new(level, 0, 0),
            Rgb::new(0, level, 0),
            Rgb::new(level, level, level),
            Rgb::new(level, 0, level),
            Rgb::new(0, level, level),
            Rgb::new(level, level, 0),
        ];
        for (offset, color) in expected.iter().enumerate() {
            let frame = rendered(12 + offset, level);
            for position in 0..RING_LEN {
                assert_eq!(frame.ring(position), Some(*color));
            }
        }
    }

    #[test]
    fn test_alternating_ring() {
        let frame = rendered(19, 255);
        for position in 0..RING_LEN {
            let expected = if position % 2 == 1 {
                Rgb::new(255, 0, 0)
            } else {
                Rgb::new(0, 0, 255)
            };
            assert_eq!(frame.ring(position), Some(expected));
        }
        assert_eq!(lit(&frame), RING_LEN);
    }

    #[test]
    fn test_split_ring() {
        let frame = rendered(20, 255);
        for position in 0..6 {
            assert_eq!(frame.ring(position), Some(Rgb::new(0, 0, 255)));
        }
        for position in 6..RING_LEN {
            assert_eq!(frame.ring(position), Some(Rgb::new(255, 0, 0)));
        }
    }

    #[test]
    fn test_single_and_triple_white() {
        let frame = rendered(21, 200);
        assert_eq!(frame.ring(0), Some(Rgb::splat(200)));
        assert_eq!(lit(&frame), 3);

        let frame = rendered(22, 200);
        for position in 0..RING_LEN {
            let expected = if position % 4 == 0 {
                Rgb::splat(200)
            } else {
                Rgb::BLACK
            };
            assert_eq!(frame.ring(position), Some(expected));
        }
    }

    #[test]
    fn test_combined_scenes() {
        let frame = rendered(23, 0xFF);
        assert_digit(&frame, Slot::T0, 7, 0xFF);
        assert_eq!(frame.ring(3), Some(Rgb::new(0, 0, 0xFF)));
        assert_eq!(lit(&frame), 3 + RING_LEN);

        let frame = rendered(24, 0xFF);
        for &i in Group::BoltOuter.indices() {
            assert_eq!(frame.get(i as usize), Some(0xFF));
        }
        assert_eq!(frame.ring(11), Some(Rgb::new(0xFF, 0, 0)));
        assert_eq!(lit(&frame), 10 + RING_LEN);
    }

    #[test]
    fn test_unknown_scene_is_blank() {
        let mut frame = FrameBuffer::new();
        frame.fill_ring(Rgb::splat(9));
        assert_eq!(render_scene(&mut frame, 25, 0xFF), UNKNOWN_LABEL);
        assert!(frame.is_blank());
        assert_eq!(render_scene(&mut frame, usize::MAX, 0xFF), UNKNOWN_LABEL);
    }

    #[test]
    fn test_reset_off() {
        let mut frame = rendered(15, 0xFF);
        assert_eq!(reset_off(&mut frame), 0);
        assert!(frame.is_blank());
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, a) in CATALOGUE.iter().enumerate() {
            for b in &CATALOGUE[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_render_is_idempotent(index in 0usize..SCENE_COUNT, brightness in any::<u8>()) {
            let mut frame = FrameBuffer::new();
            let first = render_scene(&mut frame, index, brightness);
            let snapshot = frame.clone();
            let second = render_scene(&mut frame, index, brightness);

            prop_assert_eq!(first, second);
            prop_assert_eq!(frame, snapshot);
        }

        #[test]
        fn prop_render_clears_first(
            index in 0usize..SCENE_COUNT,
            previous in 0usize..SCENE_COUNT,
            brightness in 1u8..,
        ) {
            // Rendering over another scene equals rendering on a blank frame
            let mut frame = rendered(previous, 0xFF);
            render_scene(&mut frame, index, brightness);
            prop_assert_eq!(frame, rendered(index, brightness));
        }

        #[test]
        fn prop_reserved_indices_stay_zero(index in 0usize..SCENE_COUNT, brightness in any::<u8>()) {
            let frame = rendered(index, brightness);
            prop_assert_eq!(frame.get(0), Some(0));
            for i in 125..FRAME_LEN {
                prop_assert_eq!(frame.get(i), Some(0));
            }
        }
    }
}
