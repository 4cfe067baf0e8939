//! Integer circle geometry in pixel space.
//!
//! The origin of coordinate system is in top-left corner, y grows downward. Every test here is
//! mirror-symmetric, so orientation never affects the packing result.

use euclid::{Point2D, Size2D, Vector2D};


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSpace;

pub type P2 = Point2D<i32, PixelSpace>;
pub type Canvas = Size2D<i32, PixelSpace>;
type V2 = Vector2D<i128, PixelSpace>;

/// A disc with integer center and radius.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Circle {
  pub xy: P2,
  pub r: i32,
}

impl Circle {
  pub fn new(x: i32, y: i32, r: i32) -> Self {
    Circle { xy: P2::new(x, y), r }
  }

  pub fn grow(self, by: i32) -> Self {
    Circle { r: self.r + by, ..self }
  }
}

/// True iff the discs, both inflated so that their radii sum grows by `increment`, overlap.
/// Touching is not a collision. Squared distances are compared in `i128`: the squares of
/// `i32` coordinate differences and `i64` reaches both fit.
pub fn circles_collide(a: &Circle, b: &Circle, increment: i64) -> bool {
  let d = V2::new(
    a.xy.x as i128 - b.xy.x as i128,
    a.xy.y as i128 - b.xy.y as i128
  );
  let reach = a.r as i128 + b.r as i128 + increment as i128;
  d.square_length() < reach * reach
}

/// True iff the disc grown by `increment` keeps all of its pixels on the canvas.
///
/// The margin is tested against each wall separately: the low walls are inclusive (`>= 0`),
/// the high walls exclusive (`< width`), so a disc never touches the last row or column.
/// Computed in `i64`, so any `i32` radius and margin are safe.
pub fn in_bounds(circle: &Circle, increment: i64, canvas: Canvas) -> bool {
  let (x, y) = (circle.xy.x as i64, circle.xy.y as i64);
  let reach = circle.r as i64 + increment;
  x - reach >= 0 && y - reach >= 0 &&
  x + reach < canvas.width as i64 && y + reach < canvas.height as i64
}
