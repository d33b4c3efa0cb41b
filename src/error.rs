//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and panel operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during panel creation and operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use st7789s::{Builder, BuilderError, Dimensions};
//!
//! // 24 bits per pixel is not supported by the ST7789S serial interface
//! let result = Builder::new().bits_per_pixel(24).build();
//! assert!(matches!(result, Err(BuilderError::UnsupportedBitsPerPixel(24))));
//!
//! // Larger than the controller's frame memory
//! let result = Dimensions::new(480, 320);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Columns of frame memory in the ST7789S (native orientation)
pub const GRAM_WIDTH: u16 = 240;

/// Rows of frame memory in the ST7789S (native orientation)
pub const GRAM_HEIGHT: u16 = 320;

/// Maximum number of entries in a vendor init table
///
/// The table length is carried as a 16-bit count.
pub const MAX_INIT_CMDS: usize = u16::MAX as usize;

/// Errors that can occur when interacting with the panel
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// The vendor init table is empty or longer than [`MAX_INIT_CMDS`]
    InvalidInitTable {
        /// Number of entries provided
        len: usize,
    },
    /// Invalid drawing window
    ///
    /// Start must be strictly less than end on both axes, and the window
    /// (after gap offsets) must fit the frame memory.
    InvalidWindow {
        /// Start column (inclusive)
        x_start: u16,
        /// Start row (inclusive)
        y_start: u16,
        /// End column (exclusive)
        x_end: u16,
        /// End row (exclusive)
        y_end: u16,
    },
    /// Pixel data is shorter than the window requires
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::InvalidInitTable { len } => {
                write!(
                    f,
                    "Invalid init table: {len} entries (expected 1..={MAX_INIT_CMDS})"
                )
            }
            Self::InvalidWindow {
                x_start,
                y_start,
                x_end,
                y_end,
            } => {
                write!(
                    f,
                    "Invalid window: ({x_start},{y_start})..({x_end},{y_end})"
                )
            }
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width in pixels requested
        width: u16,
        /// Height in pixels requested
        height: u16,
    },
    /// Bits per pixel other than 16 or 18
    UnsupportedBitsPerPixel(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {GRAM_WIDTH}x{GRAM_HEIGHT})"
            ),
            Self::UnsupportedBitsPerPixel(bits) => {
                write!(f, "Unsupported bits per pixel: {bits} (expected 16 or 18)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
