use {
  crate::drawing::Color,
  anyhow::{bail, Context, Result},
  image::Rgb,
};

/// Time a block and report it at info level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $body: block) => {{
    let t0 = std::time::Instant::now();
    let ret = $body;
    ::log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
pub fn parse_hex_color(s: &str) -> Result<Color> {
  let hex = s.strip_prefix('#').unwrap_or(s);
  if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
    bail!("invalid hex color {s:?}");
  }
  let channel = |digits: &str| u8::from_str_radix(digits, 16)
    .with_context(|| format!("invalid hex color {s:?}"));

  match hex.len() {
    6 => Ok(Rgb([
      channel(&hex[0..2])?,
      channel(&hex[2..4])?,
      channel(&hex[4..6])?
    ])),
    // #abc == #aabbcc
    3 => Ok(Rgb([
      channel(&hex[0..1])? * 0x11,
      channel(&hex[1..2])? * 0x11,
      channel(&hex[2..3])? * 0x11
    ])),
    _ => bail!("hex color {s:?} must have 3 or 6 digits"),
  }
}
