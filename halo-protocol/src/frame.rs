//! Frame buffer for the Halo panel
//!
//! A frame is 145 intensity bytes. Position 0 is reserved, positions
//! 125-144 are unmapped. Every write is bounds-checked and out-of-range
//! positions are ignored rather than reported.

use crate::map::{Group, Slot, RING, RING_LEN, SLOT_LEN};

/// Frame length in bytes
pub const FRAME_LEN: usize = 145;

/// Offset of the decimal point byte inside a slot
pub const DP_OFFSET: usize = 7;

/// 7-segment masks for digits 0-9 (bit 0 = segment a ... bit 6 = segment g)
pub const SEG7_MASK: [u8; 10] = [
    0b0011_1111,
    0b0000_0110,
    0b0101_1011,
    0b0100_1111,
    0b0110_0110,
    0b0110_1101,
    0b0111_1101,
    0b0000_0111,
    0b0111_1111,
    0b0110_1111,
];

/// Look up the segment mask for a digit, `None` outside 0-9
pub fn segment_mask(digit: i16) -> Option<u8> {
    usize::try_from(digit)
        .ok()
        .and_then(|d| SEG7_MASK.get(d))
        .copied()
}

/// Intensities for one ring LED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb {
    /// All channels off
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Same intensity on all channels
    pub const fn splat(v: u8) -> Self {
        Self::new(v, v, v)
    }
}

/// The 145-byte frame sent to the panel
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBuffer {
    bytes: [u8; FRAME_LEN],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            bytes: [0; FRAME_LEN],
        }
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Write one byte; positions past the frame are ignored
    pub fn set(&mut self, index: usize, value: u8) {
        if let Some(byte) = self.bytes.get_mut(index) {
            *byte = value;
        }
    }

    /// Read one byte
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Raw frame bytes, in wire order
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// Returns true if every byte is zero
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Render a digit into the slot starting at `base`
    ///
    /// The slot is always blanked first. Digits outside 0-9 leave it blank.
    pub fn set_digit_at(&mut self, base: usize, digit: i16, value: u8, dp: bool) {
        for offset in 0..SLOT_LEN {
            self.set(base.saturating_add(offset), 0);
        }

        let Some(mask) = segment_mask(digit) else {
            return;
        };

        for segment in 0..7 {
            if mask & (1 << segment) != 0 {
                self.set(base.saturating_add(segment), value);
            }
        }
        if dp {
            self.set(base.saturating_add(DP_OFFSET), value);
        }
    }

    /// Render a digit into a named slot
    pub fn set_digit(&mut self, slot: Slot, digit: i16, value: u8, dp: bool) {
        self.set_digit_at(slot.base(), digit, value, dp);
    }

    /// Write `value` to every index in the list
    pub fn fill_indices(&mut self, indices: &[u8], value: u8) {
        for &index in indices {
            self.set(index as usize, value);
        }
    }

    /// Light a monochrome group
    pub fn fill_group(&mut self, group: Group, value: u8) {
        self.fill_indices(group.indices(), value);
    }

    /// Set one ring LED; positions 12 and up are ignored
    pub fn set_ring(&mut self, position: usize, color: Rgb) {
        let Some(entry) = RING.get(position) else {
            return;
        };
        self.set(entry.r as usize, color.r);
        self.set(entry.g as usize, color.g);
        self.set(entry.b as usize, color.b);
    }

    /// Read back one ring LED
    pub fn ring(&self, position: usize) -> Option<Rgb> {
        let entry = RING.get(position)?;
        Some(Rgb::new(
            self.bytes[entry.r as usize],
            self.bytes[entry.g as usize],
            self.bytes[entry.b as usize],
        ))
    }

    /// Set every ring LED to the same colour
    pub fn fill_ring(&mut self, color: Rgb) {
        for position in 0..RING_LEN {
            self.set_ring(position, color);
        }
    }
}
