//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the ST7789S controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The ST7789S requires:
//! - SPI bus (MOSI + SCK, CS handled by the [`SpiDevice`])
//! - 1 or 2 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, optional)
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7789s::{DisplayInterface, Interface, ResetLevel};
//! # use core::convert::Infallible;
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
//! # let mut delay = MockDelay;
//! // Create interface with SPI, DC and RST pins
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! let _ = interface.hard_reset(ResetLevel::ActiveLow, &mut delay);
//!
//! // Send a command with parameters
//! let _ = interface.send_command(0x3A, &[0x55]); // COLMOD, 16 bpp
//!
//! // Send pixel data to frame memory
//! let _ = interface.send_pixels(0x2C, &[0xF8, 0x00]);
//!
//! // Continue the same memory write
//! let _ = interface.send_data(&[0x07, 0xE0]);
//! ```

use core::fmt::Debug;
use core::marker::PhantomData;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::spi::SpiDevice;

use crate::bus::{BusConfig, ColorTransDoneFn, IoConfig};
use crate::config::ResetLevel;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Reset pulse width and recovery time in milliseconds
pub const RESET_PULSE_MS: u32 = 10;

/// Trait for hardware interface to ST7789S controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Panel`](crate::panel::Panel) to work with any
/// transport that can deliver commands and pixel data.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If you need
/// custom behavior (e.g., a parallel bus, DMA-backed transfers),
/// implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send a command byte followed by its parameters
    ///
    /// The implementation must:
    /// 1. Set DC pin low and send the command byte
    /// 2. Set DC pin high and send the parameter bytes, if any
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8, params: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send bulk color data following a memory write command
    ///
    /// The implementation must set the DC pin high and send the bytes.
    /// It may split the data into several transfers and signal completion
    /// once all of it has been sent.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a command byte followed by bulk color data
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_pixels(&mut self, command: u8, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.send_command(command, &[])?;
        self.send_data(data)
    }

    /// Pulse the reset line, if one is wired
    ///
    /// Returns `Ok(false)` without waiting when there is no reset line, so
    /// the caller can fall back to a software reset.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset pin fails.
    fn hard_reset<D: DelayNs>(
        &mut self,
        level: ResetLevel,
        delay: &mut D,
    ) -> InterfaceResult<bool, Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Placeholder for panels without a reset line
///
/// Shares the DC pin's error type so it fits the [`Interface`] bounds.
pub struct NoResetPin<E>(PhantomData<E>);

impl<E: embedded_hal::digital::Error> ErrorType for NoResetPin<E> {
    type Error = E;
}

impl<E: embedded_hal::digital::Error> OutputPin for NoResetPin<E> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Hardware interface implementation for ST7789S
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 SPI and GPIO traits.
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `C` - Context for the color-transfer-done callback
///
/// ## Example
///
/// ```rust,no_run
/// use st7789s::bus::{BusConfig, IoConfig};
/// use st7789s::{Builder, Interface, Panel};
/// # use core::convert::Infallible;
/// # use embedded_hal::digital::OutputPin;
/// # use embedded_hal::spi::{Operation, SpiDevice};
/// # struct MockSpi;
/// # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
/// # impl SpiDevice for MockSpi {
/// #     fn transaction(
/// #         &mut self,
/// #         _operations: &mut [Operation<'_, u8>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// # struct MockPin;
/// # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
/// # impl OutputPin for MockPin {
/// #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
/// # }
/// let bus = BusConfig::st7789s(12, 11, 320 * 40 * 2);
/// let io = IoConfig::st7789s(21, 40, None, ());
/// let interface = Interface::from_config(
///     MockSpi,        // SpiDevice, set up by the HAL from `bus` and `io`
///     MockPin,        // DC
///     MockPin,        // RST
///     &bus,
///     io,
/// );
///
/// # let config = match Builder::new().build() {
/// #     Ok(config) => config,
/// #     Err(_) => return,
/// # };
/// let _panel = Panel::new(interface, &config);
/// ```
pub struct Interface<SPI, DC, RST, C = ()> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin
    rst: Option<RST>,
    /// Largest single SPI write for color data (0 = unlimited)
    max_transfer_size: usize,
    /// Called once a color transfer has been written out
    on_color_trans_done: Option<ColorTransDoneFn<C>>,
    /// Context for `on_color_trans_done`
    user_ctx: C,
}

impl<SPI, DC, RST> Interface<SPI, DC, RST, ()>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new Interface with a reset line
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst: Some(rst),
            max_transfer_size: 0,
            on_color_trans_done: None,
            user_ctx: (),
        }
    }
}

impl<SPI, DC> Interface<SPI, DC, NoResetPin<DC::Error>, ()>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new Interface for a panel without a reset line
    ///
    /// [`Panel::reset`](crate::panel::Panel::reset) falls back to a software reset.
    pub fn without_reset(spi: SPI, dc: DC) -> Self {
        Self {
            spi,
            dc,
            rst: None,
            max_transfer_size: 0,
            on_color_trans_done: None,
            user_ctx: (),
        }
    }
}

impl<SPI, DC, C> Interface<SPI, DC, NoResetPin<DC::Error>, C>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create an Interface from bus and IO presets for a panel without a
    /// reset line
    pub fn from_config_without_reset(spi: SPI, dc: DC, bus: &BusConfig, io: IoConfig<C>) -> Self {
        Self::with_parts(spi, dc, None, bus, io)
    }
}

impl<SPI, DC, RST, C> Interface<SPI, DC, RST, C>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create an Interface from bus and IO presets
    ///
    /// Takes the transfer size limit from `bus` and the completion callback
    /// and its context from `io`. Pins and clock are assumed to be applied
    /// to `spi` by the platform HAL already.
    pub fn from_config(spi: SPI, dc: DC, rst: RST, bus: &BusConfig, io: IoConfig<C>) -> Self {
        Self::with_parts(spi, dc, Some(rst), bus, io)
    }

    fn with_parts(spi: SPI, dc: DC, rst: Option<RST>, bus: &BusConfig, io: IoConfig<C>) -> Self {
        Self {
            spi,
            dc,
            rst,
            max_transfer_size: bus.max_transfer_size,
            on_color_trans_done: io.on_color_trans_done,
            user_ctx: io.user_ctx,
        }
    }

    /// Set the largest single color transfer in bytes
    ///
    /// Default is 0 (no splitting).
    pub fn set_max_transfer_size(&mut self, bytes: usize) -> &mut Self {
        self.max_transfer_size = bytes;
        self
    }

    /// Get the largest single color transfer in bytes
    pub fn max_transfer_size(&self) -> usize {
        self.max_transfer_size
    }

    /// Access the callback context
    pub fn user_ctx(&self) -> &C {
        &self.user_ctx
    }

    /// Release the SPI device and pins
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, C, PinErr> DisplayInterface for Interface<SPI, DC, RST, C>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8, params: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        if !params.is_empty() {
            self.dc.set_high().map_err(InterfaceError::Pin)?;
            self.spi.write(params).map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;

        if self.max_transfer_size == 0 {
            self.spi.write(data).map_err(InterfaceError::Spi)?;
        } else {
            for chunk in data.chunks(self.max_transfer_size) {
                self.spi.write(chunk).map_err(InterfaceError::Spi)?;
            }
        }

        if let Some(callback) = self.on_color_trans_done {
            // Blocking transport: nothing to yield to
            let _ = callback(&mut self.user_ctx);
        }
        Ok(())
    }

    fn hard_reset<D: DelayNs>(
        &mut self,
        level: ResetLevel,
        delay: &mut D,
    ) -> InterfaceResult<bool, Self::Error> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(false);
        };

        let active_high = level == ResetLevel::ActiveHigh;
        rst.set_state(active_high.into()).map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        rst.set_state((!active_high).into()).map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        Ok(true)
    }
}
