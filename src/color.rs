//! Pixel encoding for the serial interface
//!
//! Colors are carried as raw RGB565 values and encoded for the active
//! interface pixel format just before they go on the wire.
//!
//! | Format | Bytes | Layout                                   |
//! |--------|-------|------------------------------------------|
//! | RGB565 | 2     | `RRRRRGGG GGGBBBBB` (big-endian)         |
//! | RGB666 | 3     | `RRRRRR00 GGGGGG00 BBBBBB00`             |
//!
//! Element order (RGB/BGR) is handled by the controller through MADCTL,
//! so encoding never swaps channels.
//!
//! ## Example
//!
//! ```
//! use st7789s::{color::encode_rgb565, PixelFormat};
//!
//! // Pure red
//! let px = encode_rgb565(0xF800, PixelFormat::Rgb565);
//! assert_eq!(px.as_slice(), &[0xF8, 0x00]);
//!
//! let px = encode_rgb565(0xF800, PixelFormat::Rgb666);
//! assert_eq!(px.as_slice(), &[0xFC, 0x00, 0x00]);
//! ```

use crate::config::PixelFormat;

/// One encoded pixel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelBytes {
    bytes: [u8; 3],
    len: usize,
}

impl PixelBytes {
    /// The encoded bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Widen a 5-bit channel to 6 bits by replicating its top bit
fn widen5(value: u8) -> u8 {
    (value << 1) | (value >> 4)
}

/// Encode a raw RGB565 value for the given pixel format
pub fn encode_rgb565(raw: u16, format: PixelFormat) -> PixelBytes {
    match format {
        PixelFormat::Rgb565 => {
            let [hi, lo] = raw.to_be_bytes();
            PixelBytes {
                bytes: [hi, lo, 0],
                len: 2,
            }
        }
        PixelFormat::Rgb666 => {
            let r = widen5(((raw >> 11) & 0x1F) as u8);
            let g = ((raw >> 5) & 0x3F) as u8;
            let b = widen5((raw & 0x1F) as u8);
            PixelBytes {
                bytes: [r << 2, g << 2, b << 2],
                len: 3,
            }
        }
    }
}
