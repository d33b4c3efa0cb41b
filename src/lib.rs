//! ST7789S TFT LCD Driver
//!
//! A driver for the ST7789S LCD controller on a 4-wire SPI bus (SCLK, MOSI,
//! CS, D/C), with 240x320 frame memory.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Replaceable vendor init table
//! - Bus and IO presets with the controller's SPI timing
//! - 16 and 18 bit pixel formats
//! - Mirror, swap and rotation through MADCTL
//! - Window offsets for glass smaller than frame memory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7789s::bus::{BusConfig, IoConfig};
//! use st7789s::{Builder, ColorOrder, Interface, Panel, Rotation};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let bus = BusConfig::st7789s(12, 11, 240 * 80 * 2);
//! let io = IoConfig::st7789s(10, 9, None, ());
//! let interface = Interface::from_config(spi, dc, rst, &bus, io);
//!
//! let config = match Builder::new()
//!     .color_order(ColorOrder::Rgb)
//!     .rotation(Rotation::Rotate0)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut panel = match Panel::new(interface, &config) {
//!     Ok(panel) => panel,
//!     Err(_) => return,
//! };
//! let _ = panel.reset(&mut delay);
//! let _ = panel.init(&mut delay);
//! let _ = panel.disp_on_off(true);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// SPI bus and panel IO presets
pub mod bus;
/// Pixel encoding for the serial interface
pub mod color;
/// ST7789S command definitions and init tables
pub mod command;
/// Panel configuration types and builder
pub mod config;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Core panel operations
pub mod panel;
/// Rotation to MADCTL mapping
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use command::{DEFAULT_INIT_CMDS, InitCmd};
pub use config::{
    Builder, ColorOrder, Dimensions, GRAM_HEIGHT, GRAM_WIDTH, MAX_INIT_CMDS, PanelConfig,
    PixelFormat, ResetLevel, Rotation, VendorConfig,
};
pub use error::{BuilderError, Error};
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, NoResetPin, RESET_PULSE_MS};
pub use panel::Panel;
