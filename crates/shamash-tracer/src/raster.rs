use shamash_runtime::engine::EngineError;

use crate::color::Rgb;

/// Largest raster side the tracer accepts.
///
/// One primary ray per pixel means render cost grows with the pixel count;
/// past this size a single frame stops being interactive on a CPU.
pub const MAX_DIM: u32 = 8192;

/// Engine-owned RGBA8 pixel storage.
///
/// One flat allocation in row-major order with stride `width * 4` and no
/// padding. The buffer is allocated once at creation and never resized, so
/// frame views handed out by the engine always describe the same memory.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Allocates a zeroed `width` x `height` raster.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::ZeroDimension { width, height });
        }
        if width > MAX_DIM || height > MAX_DIM {
            return Err(EngineError::RasterTooLarge { width, height, max: MAX_DIM });
        }

        let len = width as usize * height as usize * 4;
        Ok(Self { width, height, pixels: vec![0; len] })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full pixel buffer, row-major RGBA8.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Writes one opaque pixel. `x` and `y` must be in bounds.
    ///
    /// Channels truncate from the color's `0.0..=255.0` range; alpha is
    /// always 255.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgb) {
        let idx = 4 * (x as usize + y as usize * self.width as usize);
        self.pixels[idx] = color.red as u8;
        self.pixels[idx + 1] = color.green as u8;
        self.pixels[idx + 2] = color.blue as u8;
        self.pixels[idx + 3] = 255;
    }
}
