//! Circle-packing stencil effect, after the XScreenSaver `boxfit` hack.
//!
//! Boxes (circles) are scattered over the canvas and grown until none of them can grow or be
//! placed any more without colliding. Then every box is filled with the color of the source
//! image under its center and outlined with a fixed edge color.
//!
//! It is split into two main modules: [`solver`] for generating the packing, which never
//! touches pixels, and [`drawing`] for rasterizing it, which never re-checks collisions.
//!
//! # Basic usage
//! ```no_run
//! # use anyhow::Result;
//! use boxfit::{Config, util::parse_hex_color};
//!
//! # fn main() -> Result<()> {
//! let source = image::open("in.png")?.to_rgb8();
//! let config = Config::default()
//!   .with_max_alive(200)
//!   .with_edge_color(parse_hex_color("#101010")?)
//!   .with_seed(0);
//! let (image, stats) = boxfit::stencil(&source, &config)?;
//! println!("{} boxes", stats.boxes);
//! image.save("out.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! The two halves can also be driven separately:
//! ```
//! # use boxfit::{Config, geometry::Canvas, solver::Packing, drawing};
//! let config = Config::default().with_seed(7);
//! let source = image::RgbImage::from_pixel(64, 48, image::Rgb([200, 40, 40]));
//!
//! let mut packing = Packing::new(config, Canvas::new(64, 48));
//! let discs = packing.run();
//!
//! let mut image = image::RgbImage::new(64, 48);
//! drawing::render(discs, &source, config.edge_color, &mut image);
//! ```

pub mod config;
pub mod geometry;
pub mod solver;
pub mod drawing;
pub mod util;

pub use config::Config;

use {
  anyhow::{ensure, Result},
  drawing::PixelSource,
  geometry::Canvas,
  image::RgbImage,
  solver::{Packing, Stats},
};

/// Validate `config`, pack the canvas of `source`, and render the boxes into a new image of
/// the same size.
pub fn stencil<S>(source: &S, config: &Config) -> Result<(RgbImage, Stats)>
  where S: PixelSource + ?Sized
{
  config.validate()?;
  let size = source.dimensions();
  ensure!(
    size.width <= i32::MAX as u32 && size.height <= i32::MAX as u32,
    "source image {}x{} is too large", size.width, size.height
  );

  let mut packing = Packing::new(*config, Canvas::new(size.width as i32, size.height as i32));
  let discs = packing.run();

  let mut image = RgbImage::new(size.width, size.height);
  profile!("render", {
    drawing::render(discs, source, config.edge_color, &mut image);
  });
  log::debug!("{packing:?}");
  Ok((image, packing.stats()))
}
