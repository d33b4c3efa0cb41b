//! Panel configuration types and builder

use crate::command::{COLMOD_RGB565, COLMOD_RGB666, DEFAULT_INIT_CMDS, InitCmd, MADCTL_BGR};
pub use crate::error::{BuilderError, GRAM_HEIGHT, GRAM_WIDTH, MAX_INIT_CMDS};

/// Panel dimensions in pixels, in the controller's native portrait orientation
///
/// Landscape panels are described in portrait and turned with
/// [`Rotation`], which also swaps the frame memory addressing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Width in pixels (columns)
    pub width: u16,
    /// Height in pixels (rows)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either side is zero, or the
    /// size does not fit the 240x320 frame memory.
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || height == 0 || width > GRAM_WIDTH || height > GRAM_HEIGHT {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Dimensions with width and height exchanged
    pub fn swapped(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: GRAM_WIDTH,
            height: GRAM_HEIGHT,
        }
    }
}

/// Panel rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// RGB element order of the panel glass
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ColorOrder {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Blue, green, red
    Bgr,
}

impl ColorOrder {
    /// MADCTL bit for this order
    pub fn madctl_bit(self) -> u8 {
        match self {
            Self::Rgb => 0,
            Self::Bgr => MADCTL_BGR,
        }
    }
}

/// Interface pixel format
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PixelFormat {
    /// 16 bits per pixel, 2 bytes on the wire
    #[default]
    Rgb565,
    /// 18 bits per pixel, 3 bytes on the wire
    Rgb666,
}

impl PixelFormat {
    /// Look up a pixel format by bits per pixel
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::UnsupportedBitsPerPixel` for anything but 16 or 18.
    pub fn from_bits(bits: u8) -> Result<Self, BuilderError> {
        match bits {
            16 => Ok(Self::Rgb565),
            18 => Ok(Self::Rgb666),
            other => Err(BuilderError::UnsupportedBitsPerPixel(other)),
        }
    }

    /// Bits per pixel
    pub fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Rgb565 => 16,
            Self::Rgb666 => 18,
        }
    }

    /// Bytes per pixel as transferred over SPI
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb565 => 2,
            Self::Rgb666 => 3,
        }
    }

    /// COLMOD register value
    pub fn colmod(self) -> u8 {
        match self {
            Self::Rgb565 => COLMOD_RGB565,
            Self::Rgb666 => COLMOD_RGB666,
        }
    }
}

/// Active level of the reset line
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ResetLevel {
    /// Reset asserted by driving the line low
    #[default]
    ActiveLow,
    /// Reset asserted by driving the line high
    ActiveHigh,
}

/// Vendor configuration
///
/// Overrides the initialization sequence sent by
/// [`Panel::init`](crate::panel::Panel::init).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VendorConfig {
    /// Custom init table, or `None` to use [`DEFAULT_INIT_CMDS`]
    pub init_cmds: Option<&'static [InitCmd]>,
}

impl VendorConfig {
    /// Vendor configuration with a custom init table
    pub fn with_init_cmds(init_cmds: &'static [InitCmd]) -> Self {
        Self {
            init_cmds: Some(init_cmds),
        }
    }

    /// The table to send: the custom one if set, otherwise the default
    pub fn resolved_init_cmds(&self) -> &'static [InitCmd] {
        self.init_cmds.unwrap_or(&DEFAULT_INIT_CMDS)
    }
}

/// Panel device configuration
///
/// Use `Builder` to create a PanelConfig.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Panel dimensions in native orientation
    pub dimensions: Dimensions,
    /// Initial rotation
    pub rotation: Rotation,
    /// RGB element order
    pub color_order: ColorOrder,
    /// Interface pixel format
    pub pixel_format: PixelFormat,
    /// Reset line polarity
    pub reset_level: ResetLevel,
    /// Init table override
    pub vendor_config: VendorConfig,
}

/// Builder for constructing panel configuration
///
/// # Example
///
/// ```
/// use st7789s::{Builder, ColorOrder, Dimensions};
///
/// let dims = match Dimensions::new(240, 320) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .color_order(ColorOrder::Bgr)
///     .bits_per_pixel(16)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.pixel_format.bytes_per_pixel(), 2);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    dimensions: Dimensions,
    rotation: Rotation,
    color_order: ColorOrder,
    bits_per_pixel: Option<u8>,
    reset_level: ResetLevel,
    vendor_config: VendorConfig,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel dimensions (default 240x320)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set initial rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set RGB element order
    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Set bits per pixel (16 or 18, default 16)
    pub fn bits_per_pixel(mut self, bits: u8) -> Self {
        self.bits_per_pixel = Some(bits);
        self
    }

    /// Set the pixel format directly
    pub fn pixel_format(mut self, format: PixelFormat) -> Self {
        self.bits_per_pixel = Some(format.bits_per_pixel());
        self
    }

    /// Set reset line polarity
    pub fn reset_level(mut self, level: ResetLevel) -> Self {
        self.reset_level = level;
        self
    }

    /// Set the vendor configuration
    pub fn vendor_config(mut self, vendor_config: VendorConfig) -> Self {
        self.vendor_config = vendor_config;
        self
    }

    /// Use a custom initialization table
    pub fn init_cmds(mut self, init_cmds: &'static [InitCmd]) -> Self {
        self.vendor_config = VendorConfig::with_init_cmds(init_cmds);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::UnsupportedBitsPerPixel` if the bits per pixel
    /// are neither 16 nor 18
    pub fn build(self) -> Result<PanelConfig, BuilderError> {
        let pixel_format = match self.bits_per_pixel {
            Some(bits) => PixelFormat::from_bits(bits)?,
            None => PixelFormat::default(),
        };
        Ok(PanelConfig {
            dimensions: self.dimensions,
            rotation: self.rotation,
            color_order: self.color_order,
            pixel_format,
            reset_level: self.reset_level,
            vendor_config: self.vendor_config,
        })
    }
}
