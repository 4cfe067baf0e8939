//! Grow-and-spawn circle packing.
//!
//! Every tick first grows each live box by `grow_by`, freezing the ones that would no longer be
//! legal, then spawns fresh boxes of `min_radius` at random positions until `max_alive` boxes are
//! growing again. A single spawn that fails [`SPAWN_ATTEMPTS`] times in a row ends the whole run.

use {
  crate::{
    config::Config,
    geometry::{circles_collide, in_bounds, Canvas, Circle},
  },
  rand::prelude::*,
  rand_pcg::Pcg64,
  std::fmt::{Debug, Formatter},
};

#[cfg(test)] mod tests;

/// Random positions tried per spawn before the run is declared finished.
pub const SPAWN_ATTEMPTS: usize = 100;
/// Extra slots added on top of the 1.5x growth of the box storage.
const GROWTH_SLACK: usize = 16;
/// Legality scans over at least this many boxes run on the rayon pool.
const PAR_SCAN_THRESHOLD: usize = 2048;

/// A box: a circle that keeps growing while `alive`.
/// Dead boxes never change again, but stay in the collection as obstacles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Disc {
  pub circle: Circle,
  pub alive: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Termination {
  /// No legal spawn position was found.
  SpawnExhausted,
  /// `max_total` boxes have been created.
  TotalReached,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stats {
  pub boxes: usize,
  pub ticks: u64,
  pub termination: Option<Termination>,
}

/// Legal means inside the canvas and clear of every box in `discs` except the one at `skip`,
/// with `increment` of margin on both tests.
///
/// `skip` excludes by index, so a box is still compared against a twin with the same geometry.
pub fn is_legal(
  circle: &Circle,
  skip: Option<usize>,
  increment: i64,
  discs: &[Disc],
  canvas: Canvas
) -> bool {
  use rayon::prelude::*;

  if !in_bounds(circle, increment, canvas) {
    return false;
  }
  let collides = |(i, other): (usize, &Disc)|
    skip != Some(i) && circles_collide(circle, &other.circle, increment);

  if discs.len() >= PAR_SCAN_THRESHOLD {
    !discs.par_iter().enumerate().any(collides)
  } else {
    !discs.iter().enumerate().any(collides)
  }
}

pub struct Packing {
  discs: Vec<Disc>,
  alive: usize,
  ticks: u64,
  termination: Option<Termination>,
  canvas: Canvas,
  config: Config,
  rng: Pcg64,
}

impl Packing {
  /// `config` must have passed [`Config::validate`].
  pub fn new(config: Config, canvas: Canvas) -> Self {
    debug_assert!(config.validate().is_ok(), "unvalidated config: {config:?}");
    let rng = match config.seed {
      Some(seed) => Pcg64::seed_from_u64(seed),
      None => Pcg64::from_entropy(),
    };
    Self {
      // never more than max_total boxes, whatever max_alive says
      discs: Vec::with_capacity(config.max_alive.saturating_mul(2).min(config.max_total)),
      alive: 0,
      ticks: 0,
      termination: None,
      canvas,
      config,
      rng,
    }
  }

  /// Tick until finished, then hand out the final collection.
  pub fn run(&mut self) -> &[Disc] {
    crate::profile!("packing", {
      while !self.is_finished() {
        self.tick();
      }
    });
    log::info!(
      "packing finished after {} ticks: {} boxes, {:?}",
      self.ticks, self.discs.len(), self.termination
    );
    &self.discs
  }

  /// One grow phase followed by one spawn phase. Does nothing once finished.
  pub fn tick(&mut self) {
    if self.is_finished() {
      return;
    }
    self.grow();
    self.spawn();
    self.ticks += 1;
    log::debug!("tick {}: {} boxes, {} alive", self.ticks, self.discs.len(), self.alive);
  }

  fn grow(&mut self) {
    let increment = self.config.grow_by as i64 + self.config.padding as i64;
    for i in 0..self.discs.len() {
      let disc = self.discs[i];
      if !disc.alive {
        continue;
      }
      if is_legal(&disc.circle, Some(i), increment, &self.discs, self.canvas) {
        self.discs[i].circle = disc.circle.grow(self.config.grow_by);
      } else {
        self.discs[i].alive = false;
        self.alive -= 1;
        log::trace!("box #{i} frozen at {:?}", disc.circle);
      }
    }
  }

  fn spawn(&mut self) {
    while self.alive < self.config.max_alive {
      if self.discs.len() >= self.config.max_total {
        self.termination = Some(Termination::TotalReached);
        return;
      }
      self.reserve();
      match self.find_spot() {
        Some(circle) => {
          log::trace!("box #{} spawned at {:?}", self.discs.len(), circle);
          self.discs.push(Disc { circle, alive: true });
          self.alive += 1;
        }
        None => {
          self.termination = Some(Termination::SpawnExhausted);
          return;
        }
      }
    }
  }

  fn find_spot(&mut self) -> Option<Circle> {
    let Config { padding, min_radius, .. } = self.config;
    let xs = padding..self.canvas.width - padding;
    let ys = padding..self.canvas.height - padding;
    if xs.is_empty() || ys.is_empty() {
      return None;
    }
    for _ in 0..SPAWN_ATTEMPTS {
      let candidate = Circle::new(
        self.rng.gen_range(xs.clone()),
        self.rng.gen_range(ys.clone()),
        min_radius
      );
      if is_legal(&candidate, None, padding as i64, &self.discs, self.canvas) {
        return Some(candidate);
      }
    }
    None
  }

  // grow by 1.5x plus slack, rather than Vec's doubling
  fn reserve(&mut self) {
    if self.discs.len() == self.discs.capacity() {
      self.discs.reserve_exact(self.discs.capacity() / 2 + GROWTH_SLACK);
    }
  }

  pub fn is_finished(&self) -> bool {
    self.termination.is_some()
  }

  pub fn discs(&self) -> &[Disc] {
    &self.discs
  }

  pub fn into_discs(self) -> Vec<Disc> {
    self.discs
  }

  pub fn alive_count(&self) -> usize {
    self.alive
  }

  pub fn canvas(&self) -> Canvas {
    self.canvas
  }

  pub fn stats(&self) -> Stats {
    Stats {
      boxes: self.discs.len(),
      ticks: self.ticks,
      termination: self.termination,
    }
  }
}

impl Debug for Packing {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    use humansize::{FileSize, file_size_opts as options};

    let storage = self.discs.capacity() * std::mem::size_of::<Disc>();
    f.debug_struct("Packing")
      .field("boxes", &self.discs.len())
      .field("alive", &self.alive)
      .field("ticks", &self.ticks)
      .field("termination", &self.termination)
      .field("canvas", &self.canvas)
      .field("storage", &storage.file_size(options::BINARY).unwrap_or_default())
      .finish()
  }
}
