//! Command-line front end: decode an image, pack it, write the stencil.

use {
  boxfit::{drawing::Color, util::parse_hex_color, Config},
  anyhow::{Context, Result},
  clap::{builder::RangedU64ValueParser, ArgAction, Parser},
  std::path::PathBuf,
};

/// Fill an image with non-overlapping circles, each painted with the color under its center.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Source image (PNG, BMP or JPEG)
  input: PathBuf,
  /// Output image, format follows the extension
  output: PathBuf,
  /// Maximum number of circles growing at once
  #[arg(short = 'a', long, default_value_t = 100, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
  max_alive: usize,
  /// Maximum number of circles in total
  #[arg(short = 't', long, default_value_t = 65535, value_parser = RangedU64ValueParser::<usize>::new())]
  max_total: usize,
  /// Starting radius of a circle
  #[arg(short = 'r', long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(1..))]
  min_radius: i32,
  /// Gap kept between circles, and between a circle and the image edge
  #[arg(short = 'p', long, default_value_t = 2, value_parser = clap::value_parser!(i32).range(0..))]
  padding: i32,
  /// Radius increment per step
  #[arg(short = 'g', long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..))]
  grow_by: i32,
  /// Outline color, #rrggbb or #rgb
  #[arg(short = 'c', long, default_value = "#303030", value_parser = parse_hex_color)]
  edge_color: Color,
  /// Random seed, for reproducible output
  #[arg(short = 's', long)]
  seed: Option<u64>,
  /// More logging (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
  #[arg(short = 'v', long, action = ArgAction::Count)]
  verbose: u8,
}

impl Args {
  fn config(&self) -> Config {
    let config = Config::default()
      .with_max_alive(self.max_alive)
      .with_max_total(self.max_total)
      .with_min_radius(self.min_radius)
      .with_padding(self.padding)
      .with_grow_by(self.grow_by)
      .with_edge_color(self.edge_color);
    match self.seed {
      Some(seed) => config.with_seed(seed),
      None => config,
    }
  }
}

fn init_logger(verbose: u8) {
  let level = match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
  let args = Args::parse();
  init_logger(args.verbose);
  let config = args.config();

  let source = image::open(&args.input)
    .with_context(|| format!("unable to open {:?}", args.input))?
    .to_rgb8();
  log::info!("{:?}: {}x{}", args.input, source.width(), source.height());

  let (image, stats) = boxfit::stencil(&source, &config)?;
  log::info!(
    "{} boxes in {} ticks, stopped by {:?}",
    stats.boxes, stats.ticks, stats.termination
  );

  image.save(&args.output)
    .with_context(|| format!("unable to write {:?}", args.output))?;
  Ok(())
}
