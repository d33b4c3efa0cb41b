//! Rotation to MADCTL mapping
//!
//! The ST7789S rotates by changing how its address counters walk frame
//! memory: MV exchanges rows and columns, MX and MY reverse them.
//!
//! | Rotation  | MV | MX | MY | MADCTL |
//! |-----------|----|----|----|--------|
//! | Rotate0   | 0  | 0  | 0  | 0x00   |
//! | Rotate90  | 1  | 1  | 0  | 0x60   |
//! | Rotate180 | 0  | 1  | 1  | 0xC0   |
//! | Rotate270 | 1  | 0  | 1  | 0xA0   |
//!
//! ## Example
//!
//! ```
//! use st7789s::{rotation::orientation, Rotation};
//!
//! let o = orientation(Rotation::Rotate90);
//! assert!(o.swap_xy);
//! assert!(o.mirror_x);
//! assert!(!o.mirror_y);
//! assert_eq!(o.madctl_bits(), 0x60);
//! ```

use crate::command::{MADCTL_MV, MADCTL_MX, MADCTL_MY};
use crate::config::{Dimensions, Rotation};

/// Address-order flags for one rotation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Exchange rows and columns
    pub swap_xy: bool,
    /// Reverse column order
    pub mirror_x: bool,
    /// Reverse row order
    pub mirror_y: bool,
}

impl Orientation {
    /// MADCTL MV/MX/MY bits for these flags
    pub fn madctl_bits(&self) -> u8 {
        let mut bits = 0;
        if self.swap_xy {
            bits |= MADCTL_MV;
        }
        if self.mirror_x {
            bits |= MADCTL_MX;
        }
        if self.mirror_y {
            bits |= MADCTL_MY;
        }
        bits
    }

    /// Flags encoded in a MADCTL value
    pub fn from_madctl(madctl: u8) -> Self {
        Self {
            swap_xy: madctl & MADCTL_MV != 0,
            mirror_x: madctl & MADCTL_MX != 0,
            mirror_y: madctl & MADCTL_MY != 0,
        }
    }
}

/// Address-order flags for a rotation
pub fn orientation(rotation: Rotation) -> Orientation {
    let (swap_xy, mirror_x, mirror_y) = match rotation {
        Rotation::Rotate0 => (false, false, false),
        Rotation::Rotate90 => (true, true, false),
        Rotation::Rotate180 => (false, true, true),
        Rotation::Rotate270 => (true, false, true),
    };
    Orientation {
        swap_xy,
        mirror_x,
        mirror_y,
    }
}

/// Dimensions as seen after rotation
pub fn rotated_dimensions(dimensions: Dimensions, rotation: Rotation) -> Dimensions {
    if orientation(rotation).swap_xy {
        dimensions.swapped()
    } else {
        dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate0_is_native() {
        assert_eq!(orientation(Rotation::Rotate0).madctl_bits(), 0x00);
    }

    #[test]
    fn test_rotate180_mirrors_both_axes() {
        let o = orientation(Rotation::Rotate180);
        assert!(!o.swap_xy);
        assert_eq!(o.madctl_bits(), 0xC0);
    }

    #[test]
    fn test_rotate270() {
        assert_eq!(orientation(Rotation::Rotate270).madctl_bits(), 0xA0);
    }

    #[test]
    fn test_from_madctl_ignores_other_bits() {
        // BGR and ML set alongside MV|MY
        let o = Orientation::from_madctl(0xA0 | 0x08 | 0x10);
        assert_eq!(o, orientation(Rotation::Rotate270));
    }

    #[test]
    fn test_rotated_dimensions_swap_on_quarter_turns() {
        let dims = Dimensions::new(240, 320).unwrap();
        assert_eq!(rotated_dimensions(dims, Rotation::Rotate180), dims);
        let turned = rotated_dimensions(dims, Rotation::Rotate90);
        assert_eq!((turned.width, turned.height), (320, 240));
    }
}
