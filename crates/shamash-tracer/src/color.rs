/// Display-referred RGB color with `0.0..=255.0` channels.
///
/// The channel scale matches the raster's byte range, so a shaded color
/// truncates straight into framebuffer bytes without a remap.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb::new(255.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 255.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 255.0);

    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Scales the color by a lighting factor.
    ///
    /// The factor is clamped: nothing darker than black, nothing brighter
    /// than the surface's own color.
    #[inline]
    pub fn shade(self, f: f64) -> Rgb {
        if f <= 0.0 {
            Rgb::BLACK
        } else if f >= 1.0 {
            self
        } else {
            Rgb::new(self.red * f, self.green * f, self.blue * f)
        }
    }
}
