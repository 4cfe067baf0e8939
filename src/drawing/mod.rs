//! Midpoint circle rasterization and the render pass.
//!
//! Nothing here clips: every circle handed to the rasterizer must already fit on the
//! framebuffer, as the boxes produced by [`Packing`](crate::solver::Packing) do.

use {
  crate::{
    geometry::Circle,
    solver::Disc,
  },
  image::{Rgb, RgbImage},
  itertools::iproduct,
};

mod source;
pub use source::PixelSource;

pub type Color = Rgb<u8>;

/// Anything the rasterizer can write pixels into.
pub trait Framebuffer {
  /// Out of range coordinates are a caller bug; implementations may panic.
  fn put_pixel(&mut self, x: i32, y: i32, color: Color);

  /// Horizontal span `xa..=xb`, nothing if `xa > xb`.
  fn xline(&mut self, xa: i32, xb: i32, y: i32, color: Color) {
    for x in xa..=xb {
      self.put_pixel(x, y, color);
    }
  }
}

impl Framebuffer for RgbImage {
  fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
    debug_assert!(x >= 0 && y >= 0, "pixel ({x}, {y}) is off the canvas");
    *self.get_pixel_mut(x as u32, y as u32) = color;
  }
}

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Brush {
  Fill,
  Outline,
}

/// Circle painted with a single color.
#[derive(Debug, Copy, Clone)]
pub struct Texture<S> {
  pub shape: S,
  pub brush: Brush,
  pub color: Color,
}

impl Circle {
  pub fn texture(self, color: Color) -> Texture<Self> {
    Texture { shape: self, brush: Brush::Fill, color }
  }
  pub fn outline(self, color: Color) -> Texture<Self> {
    Texture { shape: self, brush: Brush::Outline, color }
  }
}

impl <B: Framebuffer> Draw<B> for Texture<Circle> {
  fn draw(&self, image: &mut B) {
    draw_circle(self.brush, self.shape, self.color, image);
  }
}

/// First octant of a midpoint circle of radius `r`, starting at `(r, 0)`, with `y` growing
/// by one per step while `x > y`. Points are relative to the center.
#[derive(Debug, Clone)]
pub struct Octant {
  x: i32,
  y: i32,
  f: i32,
  d_n: i32,
  d_nw: i32,
  started: bool,
}

impl Octant {
  pub fn new(r: i32) -> Self {
    Octant {
      x: r,
      y: 0,
      f: 1 - r,
      d_n: 3,
      d_nw: 5 - 2 * r,
      started: false,
    }
  }
}

impl Iterator for Octant {
  type Item = (i32, i32);

  fn next(&mut self) -> Option<Self::Item> {
    if !self.started {
      self.started = true;
      return Some((self.x, self.y));
    }
    if self.x <= self.y {
      return None;
    }
    if self.f <= 0 {
      // north
      self.f += self.d_n;
      self.d_n += 2;
      self.d_nw += 2;
    } else {
      // northwest
      self.x -= 1;
      self.f += self.d_nw;
      self.d_n += 2;
      self.d_nw += 4;
    }
    self.y += 1;
    Some((self.x, self.y))
  }
}

/// Rasterize `circle` into `image`, mirroring each octant point into all eight octants.
///
/// [`Brush::Outline`] plots the mirrored points, [`Brush::Fill`] draws the horizontal spans
/// between them. Both walk the same points, so an outline drawn over a fill sits exactly on
/// its rim.
pub fn draw_circle<B: Framebuffer>(brush: Brush, circle: Circle, color: Color, image: &mut B) {
  let (cx, cy) = (circle.xy.x, circle.xy.y);
  for (x, y) in Octant::new(circle.r) {
    match brush {
      Brush::Outline => {
        for (sx, sy) in iproduct!([1, -1], [1, -1]) {
          image.put_pixel(cx + sx * x, cy + sy * y, color);
          if x != y {
            image.put_pixel(cx + sx * y, cy + sy * x, color);
          }
        }
      }
      Brush::Fill => {
        image.xline(cx - x, cx + x, cy + y, color);
        image.xline(cx - x, cx + x, cy - y, color);
        if x != y {
          image.xline(cx - y, cx + y, cy + x, color);
          image.xline(cx - y, cx + y, cy - x, color);
        }
      }
    }
  }
}

/// Paint every box in collection order: filled with the source color under its center,
/// then outlined with `edge_color`.
pub fn render<S, B>(discs: &[Disc], source: &S, edge_color: Color, image: &mut B)
  where S: PixelSource + ?Sized,
        B: Framebuffer
{
  discs.iter().for_each(|disc| {
    let center = disc.circle.xy.to_u32();
    let color = source.sample(center.x, center.y);
    disc.circle.texture(color).draw(image);
    disc.circle.outline(edge_color).draw(image);
  });
}
