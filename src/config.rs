use {
  crate::drawing::Color,
  anyhow::{ensure, Result},
  image::Rgb,
};

/// Simulation and rendering parameters.
///
/// The core takes these as given; call [`Config::validate`] before handing a config over.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  /// Maximum number of boxes growing at once
  pub max_alive: usize,
  /// Maximum number of boxes ever created
  pub max_total: usize,
  /// Radius of a freshly spawned box
  pub min_radius: i32,
  /// Minimum gap between boxes, and between a box and the canvas edge
  pub padding: i32,
  /// Radius increment per tick
  pub grow_by: i32,
  pub edge_color: Color,
  /// `None` seeds the generator from OS entropy
  pub seed: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      max_alive: 100,
      max_total: 65535,
      min_radius: 5,
      padding: 2,
      grow_by: 1,
      edge_color: Rgb([0x30, 0x30, 0x30]),
      seed: None,
    }}}

impl Config {
  pub fn with_max_alive(mut self, max_alive: usize) -> Self {
    self.max_alive = max_alive;
    self
  }
  pub fn with_max_total(mut self, max_total: usize) -> Self {
    self.max_total = max_total;
    self
  }
  pub fn with_min_radius(mut self, min_radius: i32) -> Self {
    self.min_radius = min_radius;
    self
  }
  pub fn with_padding(mut self, padding: i32) -> Self {
    self.padding = padding;
    self
  }
  pub fn with_grow_by(mut self, grow_by: i32) -> Self {
    self.grow_by = grow_by;
    self
  }
  pub fn with_edge_color(mut self, edge_color: Color) -> Self {
    self.edge_color = edge_color;
    self
  }
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  pub fn validate(&self) -> Result<()> {
    ensure!(self.max_alive >= 1, "max_alive must be at least 1, got {}", self.max_alive);
    ensure!(self.min_radius >= 1, "min_radius must be at least 1, got {}", self.min_radius);
    ensure!(self.padding >= 0, "padding must not be negative, got {}", self.padding);
    ensure!(self.grow_by >= 1, "grow_by must be at least 1, got {}", self.grow_by);
    Ok(())
  }
}
