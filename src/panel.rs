//! Core panel operations

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::command::{
    CASET, COLMOD, DISPOFF, DISPON, INVOFF, INVON, InitCmd, MADCTL,
    MADCTL_MV, MADCTL_MX, MADCTL_MY, RAMWR, RASET, SLPIN, SLPOUT, SWRESET,
};
use crate::config::{Dimensions, PanelConfig, PixelFormat, Rotation};
use crate::error::{Error, GRAM_HEIGHT, GRAM_WIDTH, MAX_INIT_CMDS};
use crate::interface::DisplayInterface;
use crate::rotation::orientation;

type PanelResult<I> = core::result::Result<(), Error<I>>;

/// Frame memory window, end exclusive, gap already applied
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Window {
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
}

impl Window {
    pub(crate) fn pixel_count(&self) -> usize {
        (self.x1 - self.x0) as usize * (self.y1 - self.y0) as usize
    }

    fn byte_len(&self, format: PixelFormat) -> usize {
        self.pixel_count() * format.bytes_per_pixel()
    }
}

/// Wait after a software reset, in milliseconds
pub const SWRESET_DELAY_MS: u32 = 20;

/// Wait after entering or leaving sleep, in milliseconds
pub const SLEEP_DELAY_MS: u32 = 100;

/// ST7789S panel driver
///
/// Owns the [`DisplayInterface`] and caches the MADCTL and COLMOD registers so
/// that mirror, swap and color-order changes can be applied one bit at a time.
///
/// ## Example
///
/// ```rust,no_run
/// use st7789s::{Builder, Interface, Panel};
/// # use core::convert::Infallible;
/// # use embedded_hal::delay::DelayNs;
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
/// # struct MockDelay;
/// # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
/// # let mut delay = MockDelay;
/// let config = match Builder::new().build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let mut panel = match Panel::new(Interface::new(MockSpi, MockPin, MockPin), &config) {
///     Ok(panel) => panel,
///     Err(_) => return,
/// };
/// let _ = panel.reset(&mut delay);
/// let _ = panel.init(&mut delay);
/// let _ = panel.disp_on_off(true);
///
/// // One red 2x1 strip in the top left corner
/// let _ = panel.draw_bitmap(0, 0, 2, 1, &[0xF8, 0x00, 0xF8, 0x00]);
/// ```
pub struct Panel<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Device configuration
    config: PanelConfig,
    /// Init table sent by `init`
    init_cmds: &'static [InitCmd],
    /// Cached MADCTL register
    madctl: u8,
    /// Cached COLMOD register
    colmod: u8,
    /// Pixel format matching `colmod`
    pixel_format: PixelFormat,
    /// Column offset added to every window
    x_gap: u16,
    /// Row offset added to every window
    y_gap: u16,
}

impl<I> Panel<I>
where
    I: DisplayInterface,
{
    /// Create a panel bound to an interface
    ///
    /// Nothing is sent to the controller until [`reset`](Self::reset) and
    /// [`init`](Self::init) are called.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInitTable` if a custom init table is empty or
    /// has more than [`MAX_INIT_CMDS`] entries.
    pub fn new(interface: I, config: &PanelConfig) -> Result<Self, Error<I>> {
        let init_cmds = config.vendor_config.resolved_init_cmds();
        if init_cmds.is_empty() || init_cmds.len() > MAX_INIT_CMDS {
            return Err(Error::InvalidInitTable {
                len: init_cmds.len(),
            });
        }

        let madctl =
            config.color_order.madctl_bit() | orientation(config.rotation).madctl_bits();
        let colmod = config.pixel_format.colmod();
        debug!(
            "new st7789s panel: madctl={:#04x} colmod={:#04x} init_cmds={}",
            madctl,
            colmod,
            init_cmds.len()
        );

        Ok(Self {
            interface,
            config: config.clone(),
            init_cmds,
            madctl,
            colmod,
            pixel_format: config.pixel_format,
            x_gap: 0,
            y_gap: 0,
        })
    }

    /// Reset the controller
    ///
    /// Pulses the reset line if the interface has one, otherwise sends a
    /// software reset and waits [`SWRESET_DELAY_MS`].
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<I> {
        let hardware = self
            .interface
            .hard_reset(self.config.reset_level, delay)
            .map_err(Error::Interface)?;
        if !hardware {
            debug!("no reset line, sending SWRESET");
            self.send_command(SWRESET, &[])?;
            delay.delay_ms(SWRESET_DELAY_MS);
        }
        Ok(())
    }

    /// Initialize the controller
    ///
    /// Leaves sleep, writes the cached MADCTL and COLMOD, then sends the init
    /// table in order, waiting after each entry as it specifies. Table entries
    /// that write MADCTL or COLMOD replace the cached values.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> PanelResult<I> {
        self.send_command(SLPOUT, &[])?;
        delay.delay_ms(SLEEP_DELAY_MS);

        self.send_command(MADCTL, &[self.madctl])?;
        self.send_command(COLMOD, &[self.colmod])?;

        let init_cmds = self.init_cmds;
        for cmd in init_cmds {
            self.track_cached_register(cmd);
            self.send_command(cmd.cmd, cmd.data)?;
            if cmd.delay_ms > 0 {
                delay.delay_ms(cmd.delay_ms);
            }
        }

        debug!("st7789s init done ({} commands)", init_cmds.len());
        Ok(())
    }

    fn track_cached_register(&mut self, cmd: &InitCmd) {
        let Some(&value) = cmd.data.first() else {
            return;
        };
        match cmd.cmd {
            MADCTL => {
                warn!("MADCTL overwritten by init table: {:#04x}", value);
                self.madctl = value;
            }
            COLMOD => {
                warn!("COLMOD overwritten by init table: {:#04x}", value);
                self.colmod = value;
                match value & 0x0F {
                    0x05 => self.pixel_format = PixelFormat::Rgb565,
                    0x06 => self.pixel_format = PixelFormat::Rgb666,
                    _ => warn!("unknown COLMOD {:#04x}, keeping {:?}", value, self.pixel_format),
                }
            }
            _ => {}
        }
    }

    /// Write pixel data to a window of frame memory
    ///
    /// The window spans `x_start..x_end` and `y_start..y_end` (end exclusive),
    /// shifted by the gap set with [`set_gap`](Self::set_gap). `data` must hold
    /// at least `width * height * bytes_per_pixel` bytes; only that many are sent.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is empty or does not fit
    /// frame memory, and `Error::BufferTooSmall` if `data` is too short.
    pub fn draw_bitmap(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
        data: &[u8],
    ) -> PanelResult<I> {
        let window = self.check_window(x_start, y_start, x_end, y_end)?;
        let required = window.byte_len(self.pixel_format);
        if data.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: data.len(),
            });
        }
        self.set_window(&window)?;
        self.interface
            .send_pixels(RAMWR, &data[..required])
            .map_err(Error::Interface)
    }

    /// Validate a window and translate it to frame memory addresses
    pub(crate) fn check_window(
        &self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
    ) -> Result<Window, Error<I>> {
        let invalid = Error::InvalidWindow {
            x_start,
            y_start,
            x_end,
            y_end,
        };
        if x_start >= x_end || y_start >= y_end {
            return Err(invalid);
        }

        let (max_x, max_y) = if self.madctl & MADCTL_MV != 0 {
            (GRAM_HEIGHT, GRAM_WIDTH)
        } else {
            (GRAM_WIDTH, GRAM_HEIGHT)
        };
        let (Some(x0), Some(x1), Some(y0), Some(y1)) = (
            x_start.checked_add(self.x_gap),
            x_end.checked_add(self.x_gap),
            y_start.checked_add(self.y_gap),
            y_end.checked_add(self.y_gap),
        ) else {
            return Err(invalid);
        };
        if x1 > max_x || y1 > max_y {
            return Err(invalid);
        }

        Ok(Window { x0, y0, x1, y1 })
    }

    /// Send CASET/RASET for a checked window
    pub(crate) fn set_window(&mut self, window: &Window) -> PanelResult<I> {
        // End addresses are inclusive on the wire
        let [xs_hi, xs_lo] = window.x0.to_be_bytes();
        let [xe_hi, xe_lo] = (window.x1 - 1).to_be_bytes();
        let [ys_hi, ys_lo] = window.y0.to_be_bytes();
        let [ye_hi, ye_lo] = (window.y1 - 1).to_be_bytes();
        self.send_command(CASET, &[xs_hi, xs_lo, xe_hi, xe_lo])?;
        self.send_command(RASET, &[ys_hi, ys_lo, ye_hi, ye_lo])
    }

    /// Turn color inversion on or off
    pub fn invert_color(&mut self, invert: bool) -> PanelResult<I> {
        self.send_command(if invert { INVON } else { INVOFF }, &[])
    }

    /// Mirror the panel along the X and/or Y axis
    pub fn mirror(&mut self, mirror_x: bool, mirror_y: bool) -> PanelResult<I> {
        self.update_madctl(MADCTL_MX, mirror_x);
        self.update_madctl(MADCTL_MY, mirror_y);
        self.send_command(MADCTL, &[self.madctl])
    }

    /// Exchange X and Y axes
    pub fn swap_xy(&mut self, swap: bool) -> PanelResult<I> {
        self.update_madctl(MADCTL_MV, swap);
        self.send_command(MADCTL, &[self.madctl])
    }

    /// Apply a rotation, replacing any mirror/swap settings
    pub fn set_rotation(&mut self, rotation: Rotation) -> PanelResult<I> {
        let o = orientation(rotation);
        self.update_madctl(MADCTL_MV, o.swap_xy);
        self.update_madctl(MADCTL_MX, o.mirror_x);
        self.update_madctl(MADCTL_MY, o.mirror_y);
        self.send_command(MADCTL, &[self.madctl])
    }

    fn update_madctl(&mut self, bit: u8, set: bool) {
        if set {
            self.madctl |= bit;
        } else {
            self.madctl &= !bit;
        }
    }

    /// Offset every subsequent window by `x_gap` columns and `y_gap` rows
    ///
    /// For glass smaller than the 240x320 frame memory, e.g. 135x240 modules.
    pub fn set_gap(&mut self, x_gap: u16, y_gap: u16) {
        self.x_gap = x_gap;
        self.y_gap = y_gap;
    }

    /// Turn the display output on or off
    pub fn disp_on_off(&mut self, on: bool) -> PanelResult<I> {
        self.send_command(if on { DISPON } else { DISPOFF }, &[])
    }

    /// Enter or leave sleep mode
    pub fn disp_sleep<D: DelayNs>(&mut self, sleep: bool, delay: &mut D) -> PanelResult<I> {
        self.send_command(if sleep { SLPIN } else { SLPOUT }, &[])?;
        delay.delay_ms(SLEEP_DELAY_MS);
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8, params: &[u8]) -> PanelResult<I> {
        self.interface
            .send_command(cmd, params)
            .map_err(Error::Interface)
    }

    /// Send more pixel data after a memory write
    #[cfg(feature = "graphics")]
    pub(crate) fn send_data(&mut self, data: &[u8]) -> PanelResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Start a memory write with the first pixel bytes
    #[cfg(feature = "graphics")]
    pub(crate) fn start_write(&mut self, data: &[u8]) -> PanelResult<I> {
        self.interface
            .send_pixels(RAMWR, data)
            .map_err(Error::Interface)
    }

    /// Visible dimensions, swapped while X and Y are exchanged
    pub fn dimensions(&self) -> Dimensions {
        if self.madctl & MADCTL_MV != 0 {
            self.config.dimensions.swapped()
        } else {
            self.config.dimensions
        }
    }

    /// Cached MADCTL register
    pub fn madctl(&self) -> u8 {
        self.madctl
    }

    /// Cached COLMOD register
    pub fn colmod(&self) -> u8 {
        self.colmod
    }

    /// Active pixel format
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    /// Current window offset
    pub fn gap(&self) -> (u16, u16) {
        (self.x_gap, self.y_gap)
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Release the interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{
        COLMOD_RGB565, COLMOD_RGB666, DEFAULT_INIT_CMDS, MADCTL_BGR, NOP, NORON, PORCTRL,
    };
    use crate::config::{Builder, ColorOrder, VendorConfig};
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    struct MockError;

    #[derive(Debug)]
    struct MockInterface {
        command_data: Vec<(u8, Vec<u8>)>,
        pixel_data: Vec<Vec<u8>>,
        has_reset_line: bool,
        resets: u32,
        failing: bool,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                command_data: Vec::new(),
                pixel_data: Vec::new(),
                has_reset_line: true,
                resets: 0,
                failing: false,
            }
        }

        fn commands(&self) -> Vec<u8> {
            self.command_data.iter().map(|(cmd, _)| *cmd).collect()
        }

        fn last_params(&self, cmd: u8) -> Option<Vec<u8>> {
            self.command_data
                .iter()
                .rev()
                .find(|(c, _)| *c == cmd)
                .map(|(_, data)| data.clone())
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = MockError;

        fn send_command(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
            if self.failing {
                return Err(MockError);
            }
            self.command_data.push((command, params.to_vec()));
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.failing {
                return Err(MockError);
            }
            self.pixel_data.push(data.to_vec());
            Ok(())
        }

        fn hard_reset<D: DelayNs>(
            &mut self,
            _level: crate::config::ResetLevel,
            _delay: &mut D,
        ) -> Result<bool, Self::Error> {
            if self.failing && self.has_reset_line {
                return Err(MockError);
            }
            if self.has_reset_line {
                self.resets += 1;
            }
            Ok(self.has_reset_line)
        }
    }

    #[derive(Default)]
    struct MockDelay {
        delays: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.delays.push(ms);
        }
    }

    fn test_panel(config: &PanelConfig) -> Panel<MockInterface> {
        Panel::new(MockInterface::new(), config).unwrap()
    }

    fn default_panel() -> Panel<MockInterface> {
        test_panel(&Builder::new().build().unwrap())
    }

    #[test]
    fn test_new_caches_color_order_and_format() {
        let config = Builder::new()
            .color_order(ColorOrder::Bgr)
            .bits_per_pixel(18)
            .build()
            .unwrap();
        let panel = test_panel(&config);
        assert_eq!(panel.madctl(), MADCTL_BGR);
        assert_eq!(panel.colmod(), COLMOD_RGB666);
        assert_eq!(panel.pixel_format(), PixelFormat::Rgb666);
        assert!(panel.interface.command_data.is_empty());
    }

    #[test]
    fn test_new_applies_configured_rotation() {
        let config = Builder::new().rotation(Rotation::Rotate90).build().unwrap();
        let panel = test_panel(&config);
        assert_eq!(panel.madctl(), MADCTL_MV | MADCTL_MX);
        assert_eq!(panel.dimensions().width, 320);
    }

    #[test]
    fn test_new_rejects_empty_init_table() {
        static EMPTY: [InitCmd; 0] = [];
        let config = Builder::new()
            .vendor_config(VendorConfig::with_init_cmds(&EMPTY))
            .build()
            .unwrap();
        let result = Panel::new(MockInterface::new(), &config);
        assert!(matches!(result, Err(Error::InvalidInitTable { len: 0 })));
    }

    #[test]
    fn test_new_rejects_oversized_init_table() {
        static TOO_LONG: [InitCmd; MAX_INIT_CMDS + 1] =
            [InitCmd::new(NOP, &[]); MAX_INIT_CMDS + 1];
        let config = Builder::new().init_cmds(&TOO_LONG).build().unwrap();
        let result = Panel::new(MockInterface::new(), &config);
        assert!(matches!(
            result,
            Err(Error::InvalidInitTable { len }) if len == MAX_INIT_CMDS + 1
        ));
    }

    #[test]
    fn test_new_accepts_longest_init_table() {
        static LONGEST: [InitCmd; MAX_INIT_CMDS] = [InitCmd::new(NOP, &[]); MAX_INIT_CMDS];
        let config = Builder::new().init_cmds(&LONGEST).build().unwrap();
        assert!(Panel::new(MockInterface::new(), &config).is_ok());
    }

    #[test]
    fn test_reset_uses_hardware_line() {
        let mut panel = default_panel();
        let mut delay = MockDelay::default();
        panel.reset(&mut delay).unwrap();
        assert_eq!(panel.interface.resets, 1);
        assert!(panel.interface.command_data.is_empty());
    }

    #[test]
    fn test_reset_falls_back_to_software_reset() {
        let mut interface = MockInterface::new();
        interface.has_reset_line = false;
        let mut panel = Panel::new(interface, &Builder::new().build().unwrap()).unwrap();
        let mut delay = MockDelay::default();
        panel.reset(&mut delay).unwrap();
        assert_eq!(panel.interface.commands(), alloc::vec![SWRESET]);
        assert_eq!(delay.delays, alloc::vec![SWRESET_DELAY_MS]);
    }

    #[test]
    fn test_init_sends_default_table_in_order() {
        let mut panel = default_panel();
        let mut delay = MockDelay::default();
        panel.init(&mut delay).unwrap();

        let mut expected = alloc::vec![
            (SLPOUT, Vec::new()),
            (MADCTL, alloc::vec![0x00]),
            (COLMOD, alloc::vec![COLMOD_RGB565]),
        ];
        expected.extend(DEFAULT_INIT_CMDS.iter().map(|c| (c.cmd, c.data.to_vec())));
        assert_eq!(panel.interface.command_data, expected);

        // SLPOUT wait, then the NORON entry's own delay
        assert_eq!(delay.delays, alloc::vec![SLEEP_DELAY_MS, 10]);
        assert_eq!(DEFAULT_INIT_CMDS.last().map(|c| c.cmd), Some(NORON));
    }

    #[test]
    fn test_init_honors_custom_table_delays() {
        static CUSTOM: [InitCmd; 3] = [
            InitCmd::with_delay(PORCTRL, &[0x0C, 0x0C, 0x00, 0x33, 0x33], 5),
            InitCmd::new(INVOFF, &[]),
            InitCmd::with_delay(DISPON, &[], 120),
        ];
        let config = Builder::new().init_cmds(&CUSTOM).build().unwrap();
        let mut panel = test_panel(&config);
        let mut delay = MockDelay::default();
        panel.init(&mut delay).unwrap();

        assert_eq!(
            panel.interface.commands(),
            alloc::vec![SLPOUT, MADCTL, COLMOD, PORCTRL, INVOFF, DISPON]
        );
        assert_eq!(delay.delays, alloc::vec![SLEEP_DELAY_MS, 5, 120]);
    }

    #[test]
    fn test_init_table_overrides_cached_registers() {
        static CUSTOM: [InitCmd; 2] = [
            InitCmd::new(MADCTL, &[0xC8]),
            InitCmd::new(COLMOD, &[0x66]),
        ];
        let config = Builder::new().init_cmds(&CUSTOM).build().unwrap();
        let mut panel = test_panel(&config);
        let mut delay = MockDelay::default();
        panel.init(&mut delay).unwrap();

        assert_eq!(panel.madctl(), 0xC8);
        assert_eq!(panel.colmod(), 0x66);
        assert_eq!(panel.pixel_format(), PixelFormat::Rgb666);

        // Later mirror changes start from the overridden value
        panel.mirror(false, false).unwrap();
        assert_eq!(panel.interface.last_params(MADCTL), Some(alloc::vec![0x08]));
    }

    #[test]
    fn test_init_keeps_pixel_format_on_unknown_colmod() {
        static CUSTOM: [InitCmd; 1] = [InitCmd::new(COLMOD, &[0x53])];
        let config = Builder::new().init_cmds(&CUSTOM).build().unwrap();
        let mut panel = test_panel(&config);
        let mut delay = MockDelay::default();
        panel.init(&mut delay).unwrap();

        assert_eq!(panel.colmod(), 0x53);
        assert_eq!(panel.pixel_format(), PixelFormat::Rgb565);
        assert_eq!(panel.interface.last_params(COLMOD), Some(alloc::vec![0x53]));
    }

    fn failing_panel(has_reset_line: bool) -> Panel<MockInterface> {
        let mut interface = MockInterface::new();
        interface.failing = true;
        interface.has_reset_line = has_reset_line;
        Panel::new(interface, &Builder::new().build().unwrap()).unwrap()
    }

    #[test]
    fn test_reset_propagates_interface_error() {
        let mut delay = MockDelay::default();
        let result = failing_panel(true).reset(&mut delay);
        assert!(matches!(result, Err(Error::Interface(MockError))));

        // Software reset path fails before waiting
        let result = failing_panel(false).reset(&mut delay);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert!(delay.delays.is_empty());
    }

    #[test]
    fn test_init_propagates_interface_error() {
        let mut panel = failing_panel(true);
        let mut delay = MockDelay::default();
        let result = panel.init(&mut delay);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert!(delay.delays.is_empty());
    }

    #[test]
    fn test_draw_bitmap_propagates_interface_error() {
        let mut panel = failing_panel(true);
        let result = panel.draw_bitmap(0, 0, 1, 1, &[0x00, 0x00]);
        assert!(matches!(result, Err(Error::Interface(MockError))));
        assert!(panel.interface.pixel_data.is_empty());
    }

    #[test]
    fn test_draw_bitmap_sets_inclusive_window() {
        let mut panel = default_panel();
        let data = [0xAAu8; 10 * 20 * 2];
        panel.draw_bitmap(5, 300, 15, 320, &data).unwrap();

        assert_eq!(
            panel.interface.last_params(CASET),
            Some(alloc::vec![0x00, 5, 0x00, 14])
        );
        assert_eq!(
            panel.interface.last_params(RASET),
            Some(alloc::vec![0x01, 0x2C, 0x01, 0x3F])
        );
        assert_eq!(panel.interface.commands().last(), Some(&RAMWR));
        assert_eq!(panel.interface.pixel_data, alloc::vec![data.to_vec()]);
    }

    #[test]
    fn test_draw_bitmap_applies_gap() {
        let mut panel = default_panel();
        panel.set_gap(52, 40);
        panel.draw_bitmap(0, 0, 1, 1, &[0x00, 0x1F]).unwrap();
        assert_eq!(
            panel.interface.last_params(CASET),
            Some(alloc::vec![0, 52, 0, 52])
        );
        assert_eq!(
            panel.interface.last_params(RASET),
            Some(alloc::vec![0, 40, 0, 40])
        );
        assert_eq!(panel.gap(), (52, 40));
    }

    #[test]
    fn test_draw_bitmap_sends_only_window_bytes() {
        let mut panel = default_panel();
        let data = [0x11u8; 64];
        panel.draw_bitmap(0, 0, 2, 2, &data).unwrap();
        assert_eq!(panel.interface.pixel_data[0].len(), 8);
    }

    #[test]
    fn test_draw_bitmap_empty_window_returns_error() {
        let mut panel = default_panel();
        let result = panel.draw_bitmap(10, 0, 10, 5, &[]);
        assert!(matches!(result, Err(Error::InvalidWindow { .. })));
        let result = panel.draw_bitmap(0, 6, 4, 5, &[]);
        assert!(matches!(result, Err(Error::InvalidWindow { .. })));
        assert!(panel.interface.command_data.is_empty());
    }

    #[test]
    fn test_draw_bitmap_out_of_bounds_returns_error() {
        let mut panel = default_panel();
        let data = [0u8; 4];
        let result = panel.draw_bitmap(0, 0, 241, 1, &data);
        assert!(matches!(result, Err(Error::InvalidWindow { .. })));

        panel.set_gap(0, 10);
        let result = panel.draw_bitmap(0, 315, 1, 316, &data);
        assert!(matches!(result, Err(Error::InvalidWindow { .. })));
    }

    #[test]
    fn test_draw_bitmap_swapped_allows_wide_window() {
        let mut panel = default_panel();
        panel.swap_xy(true).unwrap();
        let data = [0u8; 320 * 2];
        assert!(panel.draw_bitmap(0, 0, 320, 1, &data).is_ok());
        let result = panel.draw_bitmap(0, 0, 1, 241, &data);
        assert!(matches!(result, Err(Error::InvalidWindow { .. })));
    }

    #[test]
    fn test_draw_bitmap_buffer_too_small() {
        let mut panel = default_panel();
        let result = panel.draw_bitmap(0, 0, 4, 4, &[0u8; 31]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 32,
                provided: 31
            })
        ));
        assert!(panel.interface.command_data.is_empty());
    }

    #[test]
    fn test_draw_bitmap_rgb666_uses_three_bytes_per_pixel() {
        let config = Builder::new().bits_per_pixel(18).build().unwrap();
        let mut panel = test_panel(&config);
        let result = panel.draw_bitmap(0, 0, 2, 1, &[0u8; 4]);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 6,
                provided: 4
            })
        ));
    }

    #[test]
    fn test_invert_color() {
        let mut panel = default_panel();
        panel.invert_color(true).unwrap();
        panel.invert_color(false).unwrap();
        assert_eq!(panel.interface.commands(), alloc::vec![INVON, INVOFF]);
    }

    #[test]
    fn test_mirror_and_swap_keep_color_order_bit() {
        let config = Builder::new().color_order(ColorOrder::Bgr).build().unwrap();
        let mut panel = test_panel(&config);

        panel.mirror(true, false).unwrap();
        assert_eq!(
            panel.interface.last_params(MADCTL),
            Some(alloc::vec![MADCTL_BGR | MADCTL_MX])
        );

        panel.swap_xy(true).unwrap();
        panel.mirror(false, true).unwrap();
        assert_eq!(
            panel.madctl(),
            MADCTL_BGR | MADCTL_MV | MADCTL_MY
        );

        panel.swap_xy(false).unwrap();
        assert_eq!(panel.madctl(), MADCTL_BGR | MADCTL_MY);
    }

    #[test]
    fn test_set_rotation_replaces_orientation_bits() {
        let mut panel = default_panel();
        panel.mirror(true, true).unwrap();
        panel.set_rotation(Rotation::Rotate270).unwrap();
        assert_eq!(panel.madctl(), MADCTL_MV | MADCTL_MY);
        let dims = panel.dimensions();
        assert_eq!((dims.width, dims.height), (320, 240));
    }

    #[test]
    fn test_disp_on_off() {
        let mut panel = default_panel();
        panel.disp_on_off(true).unwrap();
        panel.disp_on_off(false).unwrap();
        assert_eq!(panel.interface.commands(), alloc::vec![DISPON, DISPOFF]);
    }

    #[test]
    fn test_disp_sleep_waits() {
        let mut panel = default_panel();
        let mut delay = MockDelay::default();
        panel.disp_sleep(true, &mut delay).unwrap();
        panel.disp_sleep(false, &mut delay).unwrap();
        assert_eq!(panel.interface.commands(), alloc::vec![SLPIN, SLPOUT]);
        assert_eq!(delay.delays, alloc::vec![SLEEP_DELAY_MS, SLEEP_DELAY_MS]);
    }

    #[test]
    fn test_release_returns_interface() {
        let mut panel = default_panel();
        panel.disp_on_off(true).unwrap();
        let interface = panel.release();
        assert_eq!(interface.commands(), alloc::vec![DISPON]);
    }
}
