//! Graphics support via embedded-graphics
//!
//! [`Panel`] implements [`DrawTarget`] for [`Rgb565`] directly. The ST7789S
//! keeps its own frame memory, so there is no host-side buffer: every draw
//! call opens a window and streams pixels straight to the controller.
//!
//! Rectangle fills and contiguous images become one window each, which keeps
//! SPI overhead low. Single pixels fall back to 1x1 windows.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     pixelcolor::Rgb565,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//! };
//! use st7789s::{Builder, Interface, Panel};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let config = match Builder::new().build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! # let mut panel = match Panel::new(Interface::new(MockSpi, MockPin, MockPin), &config) {
//! #     Ok(panel) => panel,
//! #     Err(_) => return,
//! # };
//! # let _ = panel.reset(&mut delay);
//! # let _ = panel.init(&mut delay);
//! let _ = panel.clear(Rgb565::BLACK);
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut panel);
//!
//! let _ = Circle::new(Point::new(100, 50), 40)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb565::GREEN, 2))
//!     .draw(&mut panel);
//! ```

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions as _, OriginDimensions, Size},
    pixelcolor::Rgb565,
    prelude::{IntoStorage, Pixel},
    primitives::{PointsIter, Rectangle},
};

use crate::color::encode_rgb565;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::panel::Panel;

/// Pixels encoded per SPI write while streaming a window
const CHUNK_PIXELS: usize = 32;

/// Largest encoded pixel, RGB666
const MAX_PIXEL_BYTES: usize = 3;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

impl<I> Panel<I>
where
    I: DisplayInterface,
{
    /// Open a window for `area`, which must already be clipped to the panel
    fn open_window(&mut self, area: &Rectangle) -> core::result::Result<usize, Error<I>> {
        let (x0, y0) = (area.top_left.x as u16, area.top_left.y as u16);
        let x1 = x0 + area.size.width as u16;
        let y1 = y0 + area.size.height as u16;
        let window = self.check_window(x0, y0, x1, y1)?;
        self.set_window(&window)?;
        Ok(window.pixel_count())
    }

    /// Stream encoded colors into an open window
    ///
    /// The first chunk carries RAMWR, the rest continue the same write.
    fn stream_colors<C>(&mut self, colors: C) -> GraphicsResult<I>
    where
        C: IntoIterator<Item = Rgb565>,
    {
        let format = self.pixel_format();
        let mut buf = [0u8; CHUNK_PIXELS * MAX_PIXEL_BYTES];
        let chunk_len = CHUNK_PIXELS * format.bytes_per_pixel();
        let mut len = 0;
        let mut started = false;

        for color in colors {
            let px = encode_rgb565(color.into_storage(), format);
            let bytes = px.as_slice();
            if len + bytes.len() > chunk_len {
                self.flush_chunk(&buf[..len], &mut started)?;
                len = 0;
            }
            buf[len..len + bytes.len()].copy_from_slice(bytes);
            len += bytes.len();
        }

        if len > 0 {
            self.flush_chunk(&buf[..len], &mut started)?;
        }
        Ok(())
    }

    fn flush_chunk(&mut self, chunk: &[u8], started: &mut bool) -> GraphicsResult<I> {
        if *started {
            self.send_data(chunk)
        } else {
            *started = true;
            self.start_write(chunk)
        }
    }
}

impl<I> DrawTarget for Panel<I>
where
    I: DisplayInterface,
{
    type Color = Rgb565;
    type Error = Error<I>;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();

        for Pixel(point, color) in pixels {
            if !bounds.contains(point) {
                continue;
            }
            let area = Rectangle::new(point, Size::new(1, 1));
            self.open_window(&area)?;
            self.stream_colors(core::iter::once(color))?;
        }

        Ok(())
    }

    fn fill_contiguous<Iter>(&mut self, area: &Rectangle, colors: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Self::Color>,
    {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }

        if clipped == *area {
            let count = self.open_window(area)?;
            return self.stream_colors(colors.into_iter().take(count));
        }

        // Partly off screen: drop the clipped pixels and draw the rest one by one
        let pixels = area
            .points()
            .zip(colors)
            .filter(|(point, _)| clipped.contains(*point))
            .map(|(point, color)| Pixel(point, color));
        self.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }

        let count = self.open_window(&clipped)?;
        self.stream_colors(core::iter::repeat(color).take(count))
    }
}

impl<I> OriginDimensions for Panel<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let dims = self.dimensions();
        Size::new(dims.width as u32, dims.height as u32)
    }
}
