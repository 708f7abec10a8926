//! Address map from frame positions to display elements
//!
//! All tables here are constant. The slot regions, the bar/icon groups and
//! the ring triples never share a frame index; the two row groups are the
//! union of the slots on that row.

use core::ops::Range;

/// Bytes per 7-segment slot (segments a..g, then the decimal point)
pub const SLOT_LEN: usize = 8;

/// Number of LED positions on the RGB ring
pub const RING_LEN: usize = 12;

/// A 7-segment digit slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    /// Top row, left digit
    T0,
    /// Top row, right digit
    T1,
    /// Bottom row, left digit
    B0,
    /// Bottom row, right digit
    B1,
}

impl Slot {
    /// All slots in frame order
    pub const ALL: [Slot; 4] = [Slot::T0, Slot::T1, Slot::B0, Slot::B1];

    /// First frame index of the slot
    pub const fn base(self) -> usize {
        match self {
            Slot::T0 => 1,
            Slot::T1 => 9,
            Slot::B0 => 17,
            Slot::B1 => 25,
        }
    }

    /// Frame indices covered by the slot, decimal point included
    pub const fn indices(self) -> Range<usize> {
        self.base()..self.base() + SLOT_LEN
    }

    /// Short name used on the panel silkscreen ("t0", "b1", ...)
    pub const fn name(self) -> &'static str {
        match self {
            Slot::T0 => "t0",
            Slot::T1 => "t1",
            Slot::B0 => "b0",
            Slot::B1 => "b1",
        }
    }

    /// Look a slot up by its short name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

const UI_TOP: [u8; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
const UI_BOTTOM: [u8; 16] = [
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
];
const BAR_33_37: [u8; 5] = [33, 34, 35, 36, 37];
const BAR_38_42: [u8; 5] = [38, 39, 40, 41, 42];
const BAR_43_48: [u8; 6] = [43, 44, 45, 46, 47, 48];
const DROPLET: [u8; 3] = [59, 60, 61];
const MID_BOX: [u8; 5] = [62, 63, 64, 79, 80];
const BOLT_OUTER: [u8; 10] = [65, 66, 67, 68, 69, 70, 71, 72, 73, 74];
const BOLT_INNER: [u8; 4] = [75, 76, 77, 78];

/// A named monochrome display region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Group {
    /// Whole top row (slots t0 and t1)
    UiTop,
    /// Whole bottom row (slots b0 and b1)
    UiBottom,
    /// First progress bar segment
    Bar33To37,
    /// Second progress bar segment
    Bar38To42,
    /// Third progress bar segment
    Bar43To48,
    /// Droplet icon
    Droplet,
    /// Center box
    MidBox,
    /// Bolt icon outline
    BoltOuter,
    /// Bolt icon fill
    BoltInner,
}

impl Group {
    /// All groups in catalogue order
    pub const ALL: [Group; 9] = [
        Group::UiTop,
        Group::UiBottom,
        Group::Bar33To37,
        Group::Bar38To42,
        Group::Bar43To48,
        Group::Droplet,
        Group::MidBox,
        Group::BoltOuter,
        Group::BoltInner,
    ];

    /// Frame indices of the group, in write order
    pub const fn indices(self) -> &'static [u8] {
        match self {
            Group::UiTop => &UI_TOP,
            Group::UiBottom => &UI_BOTTOM,
            Group::Bar33To37 => &BAR_33_37,
            Group::Bar38To42 => &BAR_38_42,
            Group::Bar43To48 => &BAR_43_48,
            Group::Droplet => &DROPLET,
            Group::MidBox => &MID_BOX,
            Group::BoltOuter => &BOLT_OUTER,
            Group::BoltInner => &BOLT_INNER,
        }
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Group::UiTop => "uiTop",
            Group::UiBottom => "uiBottom",
            Group::Bar33To37 => "bar33_37",
            Group::Bar38To42 => "bar38_42",
            Group::Bar43To48 => "bar43_48",
            Group::Droplet => "droplet",
            Group::MidBox => "midBox",
            Group::BoltOuter => "boltOuter",
            Group::BoltInner => "boltInner",
        }
    }

    /// Returns true for the row groups, which overlay the digit slots
    pub const fn is_row(self) -> bool {
        matches!(self, Group::UiTop | Group::UiBottom)
    }
}

/// Frame indices of the three colour channels of one ring LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingEntry {
    /// Red channel index
    pub r: u8,
    /// Green channel index
    pub g: u8,
    /// Blue channel index
    pub b: u8,
}

const fn ring_entry(i: u8) -> RingEntry {
    RingEntry {
        r: 81 + i,
        g: 97 + i,
        b: 113 + i,
    }
}

/// RGB ring, position 0 first, going round the halo
pub const RING: [RingEntry; RING_LEN] = [
    ring_entry(0),
    ring_entry(1),
    ring_entry(2),
    ring_entry(3),
    ring_entry(4),
    ring_entry(5),
    ring_entry(6),
    ring_entry(7),
    ring_entry(8),
    ring_entry(9),
    ring_entry(10),
    ring_entry(11),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FRAME_LEN;

    /// Mark an index as used, failing on a second use
    fn claim(used: &mut [bool; FRAME_LEN], index: usize) {
        assert!(index < FRAME_LEN, "index {} out of frame", index);
        assert!(!used[index], "index {} mapped twice", index);
        used[index] = true;
    }

    fn claimed() -> [bool; FRAME_LEN] {
        let mut used = [false; FRAME_LEN];
        for slot in Slot::ALL {
            for index in slot.indices() {
                claim(&mut used, index);
            }
        }
        for group in Group::ALL.iter().filter(|g| !g.is_row()) {
            for &index in group.indices() {
                claim(&mut used, index as usize);
            }
        }
        for entry in RING {
            claim(&mut used, entry.r as usize);
            claim(&mut used, entry.g as usize);
            claim(&mut used, entry.b as usize);
        }
        used
    }

    #[test]
    fn test_map_is_disjoint() {
        // Panics on the first aliased index
        claimed();
    }

    #[test]
    fn test_reserved_indices_unmapped() {
        let used = claimed();
        assert!(!used[0]);
        for index in 125..FRAME_LEN {
            assert!(!used[index], "index {} should be reserved", index);
        }
    }

    #[test]
    fn test_rows_are_slot_unions() {
        let top: [usize; 16] = core::array::from_fn(|i| Group::UiTop.indices()[i] as usize);
        let mut expected = Slot::T0.indices().chain(Slot::T1.indices());
        assert!(top.iter().all(|&i| Some(i) == expected.next()));
        assert_eq!(expected.next(), None);

        let bottom: [usize; 16] = core::array::from_fn(|i| Group::UiBottom.indices()[i] as usize);
        let mut expected = Slot::B0.indices().chain(Slot::B1.indices());
        assert!(bottom.iter().all(|&i| Some(i) == expected.next()));
        assert_eq!(expected.next(), None);
    }

    #[test]
    fn test_slot_bases() {
        assert_eq!(Slot::T0.base(), 1);
        assert_eq!(Slot::T1.base(), 9);
        assert_eq!(Slot::B0.base(), 17);
        assert_eq!(Slot::B1.base(), 25);
        assert_eq!(Slot::B1.indices(), 25..33);
    }

    #[test]
    fn test_slot_names() {
        for slot in Slot::ALL {
            assert_eq!(Slot::from_name(slot.name()), Some(slot));
        }
        assert_eq!(Slot::from_name("x9"), None);
    }

    #[test]
    fn test_group_sizes() {
        let sizes = [16, 16, 5, 5, 6, 3, 5, 10, 4];
        for (group, size) in Group::ALL.iter().zip(sizes) {
            assert_eq!(group.indices().len(), size, "{}", group.name());
        }
    }

    #[test]
    fn test_ring_channels() {
        assert_eq!(RING[0], RingEntry { r: 81, g: 97, b: 113 });
        assert_eq!(RING[11], RingEntry { r: 92, g: 108, b: 124 });
    }
}
