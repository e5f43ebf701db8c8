//! Visual styling for the starfield.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with a different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba()` notation, always carrying the alpha channel.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// How stars are painted.
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldStyle {
	/// Fill color; its alpha is replaced by each star's current alpha.
	pub star_color: Color,
	/// Shadow color used for the soft glow around each star.
	pub glow_color: Color,
	/// Shadow blur radius in logical pixels.
	pub glow_blur: f64,
}

impl StarfieldStyle {
	/// Pale blue stars with a cyan halo (default)
	pub fn night_sky() -> Self {
		Self {
			star_color: Color::rgb(186, 226, 255),
			glow_color: Color::rgba(90, 209, 255, 0.6),
			glow_blur: 8.0,
		}
	}
}

impl Default for StarfieldStyle {
	fn default() -> Self {
		Self::night_sky()
	}
}
