//! ST7789S command definitions
//!
//! This module defines the command bytes used to control the ST7789S LCD
//! controller, the [`InitCmd`] table entry type, and the default
//! vendor-specific initialization table.
//!
//! Commands are sent over SPI with the DC pin low for the command byte and
//! high for its parameters.
//!
//! ## Example
//!
//! ```
//! use st7789s::command::{self, InitCmd};
//!
//! // A custom init table: porch setting, then display on with a 20ms settle
//! static MY_INIT: [InitCmd; 2] = [
//!     InitCmd::new(command::PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33]),
//!     InitCmd::with_delay(command::DISPON, &[], 20),
//! ];
//! assert_eq!(MY_INIT[1].delay_ms, 20);
//! ```

// System function commands

/// No operation (0x00)
pub const NOP: u8 = 0x00;

/// Software reset command (0x01)
///
/// Resets registers to their default values. Wait at least 5ms before the
/// next command, 120ms before SLPOUT.
pub const SWRESET: u8 = 0x01;

/// Sleep in command (0x10)
pub const SLPIN: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Leaves sleep mode. The controller needs up to 120ms before SLPIN may be
/// sent again, and 5ms before further commands.
pub const SLPOUT: u8 = 0x11;

/// Partial display mode on (0x12)
pub const PTLON: u8 = 0x12;

/// Normal display mode on (0x13)
pub const NORON: u8 = 0x13;

/// Display inversion off (0x20)
pub const INVOFF: u8 = 0x20;

/// Display inversion on (0x21)
pub const INVON: u8 = 0x21;

/// Display off (0x28)
pub const DISPOFF: u8 = 0x28;

/// Display on (0x29)
pub const DISPON: u8 = 0x29;

// Memory access commands

/// Column address set (0x2A)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB] (end inclusive)
pub const CASET: u8 = 0x2A;

/// Row address set (0x2B)
///
/// Requires 4 bytes: [start_MSB, start_LSB, end_MSB, end_LSB] (end inclusive)
pub const RASET: u8 = 0x2B;

/// Memory write (0x2C)
///
/// Followed by pixel data for the window set by CASET/RASET.
pub const RAMWR: u8 = 0x2C;

/// Tearing effect line on (0x35)
pub const TEON: u8 = 0x35;

/// Memory data access control (0x36)
///
/// Requires 1 byte built from the `MADCTL_*` bits.
pub const MADCTL: u8 = 0x36;

/// Interface pixel format (0x3A)
///
/// Requires 1 byte: [`COLMOD_RGB565`] or [`COLMOD_RGB666`].
pub const COLMOD: u8 = 0x3A;

// Panel function commands

/// Porch setting (0xB2), 5 bytes
pub const PORCTRL: u8 = 0xB2;

/// Gate control (0xB7), 1 byte: VGH/VGL levels
pub const GCTRL: u8 = 0xB7;

/// VCOM setting (0xBB), 1 byte
pub const VCOMS: u8 = 0xBB;

/// LCM control (0xC0), 1 byte
pub const LCMCTRL: u8 = 0xC0;

/// VDV and VRH command enable (0xC2), 1 byte
pub const VDVVRHEN: u8 = 0xC2;

/// VRH set (0xC3), 1 byte
pub const VRHS: u8 = 0xC3;

/// VDV set (0xC4), 1 byte
pub const VDVS: u8 = 0xC4;

/// Frame rate control in normal mode (0xC6), 1 byte
pub const FRCTRL2: u8 = 0xC6;

/// Power control 1 (0xD0), 2 bytes
pub const PWCTRL1: u8 = 0xD0;

/// Positive voltage gamma control (0xE0), 14 bytes
pub const PVGAMCTRL: u8 = 0xE0;

/// Negative voltage gamma control (0xE1), 14 bytes
pub const NVGAMCTRL: u8 = 0xE1;

// MADCTL bits

/// Page address order (mirror Y)
pub const MADCTL_MY: u8 = 0x80;
/// Column address order (mirror X)
pub const MADCTL_MX: u8 = 0x40;
/// Page/column exchange (swap X and Y)
pub const MADCTL_MV: u8 = 0x20;
/// Line address order (vertical refresh direction)
pub const MADCTL_ML: u8 = 0x10;
/// BGR element order
pub const MADCTL_BGR: u8 = 0x08;

// COLMOD values

/// 16 bits per pixel (RGB565), 65K colors
pub const COLMOD_RGB565: u8 = 0x55;
/// 18 bits per pixel (RGB666), 262K colors
pub const COLMOD_RGB666: u8 = 0x66;

/// One entry of an initialization command table
///
/// The panel sends `cmd`, then `data` as its parameters, then waits
/// `delay_ms` milliseconds before the next entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitCmd {
    /// Command byte
    pub cmd: u8,
    /// Parameter bytes (may be empty)
    pub data: &'static [u8],
    /// Delay in milliseconds after this command
    pub delay_ms: u32,
}

impl InitCmd {
    /// Create a table entry with no trailing delay
    pub const fn new(cmd: u8, data: &'static [u8]) -> Self {
        Self {
            cmd,
            data,
            delay_ms: 0,
        }
    }

    /// Create a table entry followed by a delay
    pub const fn with_delay(cmd: u8, data: &'static [u8], delay_ms: u32) -> Self {
        Self {
            cmd,
            data,
            delay_ms,
        }
    }
}

/// Default vendor-specific initialization sequence
///
/// Sent after SLPOUT, MADCTL and COLMOD when no custom table is configured.
/// Tuned for the 2.4" 320x240 IPS module; consult the panel supplier for
/// other glass.
pub static DEFAULT_INIT_CMDS: [InitCmd; 13] = [
    InitCmd::new(PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33]),
    InitCmd::new(GCTRL, &[0x75]),
    InitCmd::new(VCOMS, &[0x1C]),
    InitCmd::new(LCMCTRL, &[0x2C]),
    InitCmd::new(VDVVRHEN, &[0x01]),
    InitCmd::new(VRHS, &[0x0B]),
    InitCmd::new(VDVS, &[0x20]),
    InitCmd::new(FRCTRL2, &[0x0F]),
    InitCmd::new(PWCTRL1, &[0xA4, 0xA1]),
    InitCmd::new(
        PVGAMCTRL,
        &[
            0xD0, 0x00, 0x03, 0x09, 0x13, 0x1C, 0x3A, 0x55, 0x48, 0x18, 0x12, 0x0E, 0x19, 0x1E,
        ],
    ),
    InitCmd::new(
        NVGAMCTRL,
        &[
            0xD0, 0x00, 0x03, 0x09, 0x05, 0x25, 0x3A, 0x55, 0x50, 0x3D, 0x1C, 0x1D, 0x1D, 0x1E,
        ],
    ),
    InitCmd::new(INVON, &[]),
    InitCmd::with_delay(NORON, &[], 10),
];
