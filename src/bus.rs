//! SPI bus and panel IO presets
//!
//! The ST7789S is write-only over a 4-wire serial interface: SCLK, MOSI,
//! CS and D/C. [`BusConfig::st7789s`] and [`IoConfig::st7789s`] fill in the
//! pins and timing it needs so the platform HAL can set up the bus, and the
//! [`Interface`](crate::interface::Interface) picks up the transfer size and
//! completion callback from them.
//!
//! ## Example
//!
//! ```
//! use st7789s::bus::{BusConfig, ColorTransDoneFn, IoConfig, PCLK_HZ};
//!
//! let bus = BusConfig::st7789s(12, 11, 320 * 40 * 2);
//! assert_eq!(bus.miso, None);
//!
//! fn flushed(count: &mut u32) -> bool {
//!     *count += 1;
//!     false
//! }
//! let callback: ColorTransDoneFn<u32> = flushed;
//! let io = IoConfig::st7789s(21, 40, Some(callback), 0u32);
//! assert_eq!(io.pclk_hz, PCLK_HZ);
//! assert_eq!(io.trans_queue_depth, 10);
//! ```

use embedded_hal::spi::{MODE_0, Mode};

/// GPIO number as understood by the platform HAL
pub type GpioNum = u8;

/// Pixel clock for the ST7789S serial interface (20 MHz)
pub const PCLK_HZ: u32 = 20_000_000;

/// Number of queued color transactions
pub const TRANS_QUEUE_DEPTH: usize = 10;

/// Command width in bits
pub const LCD_CMD_BITS: u8 = 8;

/// Parameter width in bits
pub const LCD_PARAM_BITS: u8 = 8;

/// SPI mode (CPOL = 0, CPHA = 0)
pub const SPI_MODE: Mode = MODE_0;

/// Called after a color transfer finishes
///
/// Receives the user context. The return value reports whether a
/// higher-priority task was woken; blocking transports ignore it.
pub type ColorTransDoneFn<C> = fn(&mut C) -> bool;

/// SPI bus configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BusConfig {
    /// Clock pin
    pub sclk: GpioNum,
    /// Data out pin
    pub mosi: GpioNum,
    /// Data in pin (unused by the ST7789S)
    pub miso: Option<GpioNum>,
    /// Quad-SPI HD pin
    pub quadhd: Option<GpioNum>,
    /// Quad-SPI WP pin
    pub quadwp: Option<GpioNum>,
    /// Largest single transfer in bytes (0 = unlimited)
    pub max_transfer_size: usize,
}

impl BusConfig {
    /// Bus preset for the ST7789S: clock and MOSI only
    pub fn st7789s(sclk: GpioNum, mosi: GpioNum, max_transfer_size: usize) -> Self {
        Self {
            sclk,
            mosi,
            miso: None,
            quadhd: None,
            quadwp: None,
            max_transfer_size,
        }
    }
}

/// Panel IO configuration
///
/// Generic over the callback context `C`.
#[derive(Clone, Copy, Debug)]
pub struct IoConfig<C> {
    /// Chip select pin
    pub cs: GpioNum,
    /// Data/command pin
    pub dc: GpioNum,
    /// SPI mode
    pub spi_mode: Mode,
    /// Pixel clock in Hz
    pub pclk_hz: u32,
    /// Depth of the color transaction queue
    pub trans_queue_depth: usize,
    /// Callback for finished color transfers
    pub on_color_trans_done: Option<ColorTransDoneFn<C>>,
    /// Context handed to the callback
    pub user_ctx: C,
    /// Command width in bits
    pub lcd_cmd_bits: u8,
    /// Parameter width in bits
    pub lcd_param_bits: u8,
}

impl<C> IoConfig<C> {
    /// IO preset for the ST7789S: mode 0, 20 MHz, 8-bit commands and parameters
    pub fn st7789s(
        cs: GpioNum,
        dc: GpioNum,
        on_color_trans_done: Option<ColorTransDoneFn<C>>,
        user_ctx: C,
    ) -> Self {
        Self {
            cs,
            dc,
            spi_mode: SPI_MODE,
            pclk_hz: PCLK_HZ,
            trans_queue_depth: TRANS_QUEUE_DEPTH,
            on_color_trans_done,
            user_ctx,
            lcd_cmd_bits: LCD_CMD_BITS,
            lcd_param_bits: LCD_PARAM_BITS,
        }
    }
}
