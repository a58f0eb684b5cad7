//! Borrowed, validated views over engine-rendered pixels.

use thiserror::Error;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Raised when an engine hands out a raster that does not match its
/// declared dimensions. There is no recovery: the presentation contract
/// is broken and the caller is expected to abort.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("frame is {len} bytes but a {width}x{height} RGBA raster needs {expected}")]
    SizeMismatch {
        len: usize,
        width: u32,
        height: u32,
        expected: usize,
    },

    #[error("frame dimensions {width}x{height} contain a zero")]
    ZeroDimension { width: u32, height: u32 },
}

/// A read-only window over one rendered RGBA8 frame.
///
/// The view does not own its pixels: it borrows the engine's raster, so it
/// lives at most until the next mutable use of the engine and can never
/// describe a stale buffer. Construction is the single place the
/// `len == width * height * 4` contract is checked; everything downstream
/// (the GPU upload in particular) relies on it instead of re-validating.
///
/// Pixels are row-major from the top-left, tightly packed, alpha last.
#[derive(Debug, Copy, Clone)]
pub struct FrameView<'a> {
    pixels: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> FrameView<'a> {
    /// Wraps `pixels` as a `width` x `height` RGBA8 raster.
    pub fn new(pixels: &'a [u8], width: u32, height: u32) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::ZeroDimension { width, height });
        }

        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(FrameError::SizeMismatch {
                len: pixels.len(),
                width,
                height,
                expected,
            });
        }

        Ok(Self { pixels, width, height })
    }

    #[inline]
    pub fn pixels(&self) -> &'a [u8] {
        self.pixels
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes. Rows are tightly packed, so this is `width * 4`.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.width * BYTES_PER_PIXEL as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn accepts_exactly_sized_buffer() {
        let pixels = vec![0u8; 8 * 4 * BYTES_PER_PIXEL];
        let view = FrameView::new(&pixels, 8, 4).unwrap();
        assert_eq!(view.width(), 8);
        assert_eq!(view.height(), 4);
        assert_eq!(view.pixels().len(), pixels.len());
    }

    #[test]
    fn rejects_short_buffer() {
        let pixels = vec![0u8; 8 * 4 * BYTES_PER_PIXEL - 1];
        let err = FrameView::new(&pixels, 8, 4).unwrap_err();
        assert_eq!(
            err,
            FrameError::SizeMismatch { len: pixels.len(), width: 8, height: 4, expected: 128 }
        );
    }

    #[test]
    fn rejects_long_buffer() {
        // Too many bytes is as much a lie about the raster as too few.
        let pixels = vec![0u8; 8 * 4 * BYTES_PER_PIXEL + 4];
        assert!(FrameView::new(&pixels, 8, 4).is_err());
    }

    #[test]
    fn rejects_zero_dimension() {
        let pixels: Vec<u8> = Vec::new();
        assert_eq!(
            FrameView::new(&pixels, 0, 600).unwrap_err(),
            FrameError::ZeroDimension { width: 0, height: 600 }
        );
        assert_eq!(
            FrameView::new(&pixels, 800, 0).unwrap_err(),
            FrameError::ZeroDimension { width: 800, height: 0 }
        );
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[test]
    fn stride_is_width_times_four() {
        let pixels = vec![0u8; 3 * 2 * BYTES_PER_PIXEL];
        let view = FrameView::new(&pixels, 3, 2).unwrap();
        assert_eq!(view.stride(), 12);
    }
}
