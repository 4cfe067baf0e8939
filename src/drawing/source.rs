use {
  super::Color,
  crate::geometry::PixelSpace,
  euclid::Size2D,
  image::{DynamicImage, GenericImageView, Pixel, RgbImage, RgbaImage},
};

/// Read-only access to the decoded source image.
pub trait PixelSource {
  fn dimensions(&self) -> Size2D<u32, PixelSpace>;
  /// `x < width`, `y < height`
  fn sample(&self, x: u32, y: u32) -> Color;
}

impl PixelSource for RgbImage {
  fn dimensions(&self) -> Size2D<u32, PixelSpace> {
    GenericImageView::dimensions(self).into()
  }
  fn sample(&self, x: u32, y: u32) -> Color {
    *self.get_pixel(x, y)
  }
}

/// Alpha is dropped.
impl PixelSource for RgbaImage {
  fn dimensions(&self) -> Size2D<u32, PixelSpace> {
    GenericImageView::dimensions(self).into()
  }
  fn sample(&self, x: u32, y: u32) -> Color {
    self.get_pixel(x, y).to_rgb()
  }
}

impl PixelSource for DynamicImage {
  fn dimensions(&self) -> Size2D<u32, PixelSpace> {
    GenericImageView::dimensions(self).into()
  }
  fn sample(&self, x: u32, y: u32) -> Color {
    GenericImageView::get_pixel(self, x, y).to_rgb()
  }
}
