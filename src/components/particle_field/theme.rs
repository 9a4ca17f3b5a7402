//! Colours used by the particle field.
//!
//! Palettes arrive as CSS hex strings (`#6366f1`) and are parsed once at
//! construction so the render pass never re-validates them.

use super::error::FieldError;

/// Stroke colour of the connector lines between nearby particles.
pub const CONNECTOR_COLOR: Color = Color::rgb(0x8b, 0x5c, 0xf6);

/// Fallback palette colour (indigo).
pub const DEFAULT_COLOR: Color = Color::rgb(0x63, 0x66, 0xf1);

/// Opaque RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Colour from its three channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parse `#rrggbb` or the `#rgb` shorthand.
	pub fn from_hex(s: &str) -> Option<Self> {
		let hex = s.trim().strip_prefix('#')?;
		if !hex.is_ascii() {
			return None;
		}
		match hex.len() {
			6 => Some(Self {
				r: u8::from_str_radix(&hex[0..2], 16).ok()?,
				g: u8::from_str_radix(&hex[2..4], 16).ok()?,
				b: u8::from_str_radix(&hex[4..6], 16).ok()?,
			}),
			3 => {
				let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
				Some(Self {
					r: digit(0)?,
					g: digit(1)?,
					b: digit(2)?,
				})
			}
			_ => None,
		}
	}

	/// `#rrggbb` form accepted by canvas fill and stroke styles.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// The set of colours particles are drawn from.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	colors: Vec<Color>,
}

impl Palette {
	/// Parse every entry; an empty list yields the default indigo palette.
	pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self, FieldError> {
		if colors.is_empty() {
			return Ok(Self::default());
		}
		let colors = colors
			.iter()
			.map(|c| {
				let c = c.as_ref();
				Color::from_hex(c).ok_or_else(|| FieldError::InvalidColor(c.to_string()))
			})
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self { colors })
	}

	/// Number of colours.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Always `false` for a parsed palette.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Colour at `index`, wrapping around.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			colors: vec![DEFAULT_COLOR],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_long_and_short_hex() {
		assert_eq!(Color::from_hex("#3776ab"), Some(Color::rgb(0x37, 0x76, 0xab)));
		assert_eq!(Color::from_hex("#FFD43B"), Some(Color::rgb(0xff, 0xd4, 0x3b)));
		assert_eq!(Color::from_hex("#fff"), Some(Color::rgb(255, 255, 255)));
	}

	#[test]
	fn rejects_malformed_hex() {
		assert_eq!(Color::from_hex("3776ab"), None);
		assert_eq!(Color::from_hex("#37"), None);
		assert_eq!(Color::from_hex("#zzzzzz"), None);
		assert_eq!(Color::from_hex("#ééé"), None);
	}

	#[test]
	fn css_output_is_lowercase_hex() {
		assert_eq!(Color::rgb(0xE4, 0x4D, 0x26).to_css(), "#e44d26");
		assert_eq!(CONNECTOR_COLOR.to_css(), "#8b5cf6");
	}

	#[test]
	fn empty_palette_falls_back_to_indigo() {
		let palette = Palette::parse::<&str>(&[]).unwrap();
		assert_eq!(palette.len(), 1);
		assert_eq!(palette.get(0), DEFAULT_COLOR);
	}

	#[test]
	fn bad_entry_names_the_colour() {
		let err = Palette::parse(&["#111111", "blue"]).unwrap_err();
		assert!(matches!(err, FieldError::InvalidColor(c) if c == "blue"));
	}
}
