//! Drawing the starfield onto a 2-D surface.
//!
//! Rendering goes through the [`Surface`] trait so the same code paints a
//! browser canvas and, in tests, a recording surface.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::state::Viewport;
use super::theme::StarfieldStyle;

/// The immediate-mode drawing operations the starfield needs.
pub trait Surface {
	/// Erase a rectangle.
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
	/// Start a new path.
	fn begin_path(&mut self);
	/// Add a circular arc to the path.
	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
	/// Fill color as a CSS string.
	fn set_fill_style(&mut self, css: &str);
	/// Glow color as a CSS string.
	fn set_shadow_color(&mut self, css: &str);
	/// Glow radius; 0 disables it.
	fn set_shadow_blur(&mut self, blur: f64);
	/// Fill the current path.
	fn fill(&mut self);
	/// Replace the current transform matrix.
	fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);
}

// Fully qualified calls: the trait methods share names with the inherent ones.
impl Surface for CanvasRenderingContext2d {
	fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn begin_path(&mut self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start, end);
	}

	fn set_fill_style(&mut self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn set_shadow_color(&mut self, css: &str) {
		CanvasRenderingContext2d::set_shadow_color(self, css);
	}

	fn set_shadow_blur(&mut self, blur: f64) {
		CanvasRenderingContext2d::set_shadow_blur(self, blur);
	}

	fn fill(&mut self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
		let _ = CanvasRenderingContext2d::set_transform(self, a, b, c, d, e, f);
	}
}

/// Point the surface's coordinate system at logical pixels.
pub fn configure(surface: &mut impl Surface, viewport: &Viewport) {
	surface.set_transform(viewport.scale, 0.0, 0.0, viewport.scale, 0.0, 0.0);
}

/// Clears the visible region and paints every star with its glow.
pub fn render(field: &ParticleField, surface: &mut impl Surface, style: &StarfieldStyle) {
	surface.clear_rect(0.0, 0.0, field.width(), field.height());

	let glow = style.glow_color.to_css();
	for p in &field.particles {
		surface.begin_path();
		surface.arc(p.x, p.y, p.radius, 0.0, TAU);
		surface.set_fill_style(&style.star_color.with_alpha(p.alpha).to_css());
		surface.set_shadow_color(&glow);
		surface.set_shadow_blur(style.glow_blur);
		surface.fill();
		// Shadow state persists on the context; drop it so glows don't stack.
		surface.set_shadow_blur(0.0);
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::super::particles::{FieldConfig, Particle};
	use super::super::rng::Sequence;
	use super::*;

	/// One recorded drawing call.
	#[derive(Clone, Debug, PartialEq)]
	pub(crate) enum Op {
		Clear(f64, f64, f64, f64),
		BeginPath,
		Arc(f64, f64, f64),
		Fill(String),
		ShadowColor(String),
		ShadowBlur(f64),
		Transform([f64; 6]),
	}

	/// Records calls, resolving `fill` to the fill style active at the time.
	#[derive(Debug, Default)]
	pub(crate) struct Recorder {
		pub(crate) ops: Vec<Op>,
		fill_style: String,
	}

	impl Surface for Recorder {
		fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
			self.ops.push(Op::Clear(x, y, width, height));
		}

		fn begin_path(&mut self) {
			self.ops.push(Op::BeginPath);
		}

		fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
			assert_eq!((start, end), (0.0, TAU), "stars are full circles");
			self.ops.push(Op::Arc(x, y, radius));
		}

		fn set_fill_style(&mut self, css: &str) {
			self.fill_style = css.to_string();
		}

		fn set_shadow_color(&mut self, css: &str) {
			self.ops.push(Op::ShadowColor(css.to_string()));
		}

		fn set_shadow_blur(&mut self, blur: f64) {
			self.ops.push(Op::ShadowBlur(blur));
		}

		fn fill(&mut self) {
			self.ops.push(Op::Fill(self.fill_style.clone()));
		}

		fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
			self.ops.push(Op::Transform([a, b, c, d, e, f]));
		}
	}

	#[test]
	fn clears_then_draws_each_star_with_reset_glow() {
		let mut rng = Sequence::constant(0.5);
		let mut field = ParticleField::new(80.0, 80.0, &FieldConfig::default(), &mut rng);
		field.particles = vec![
			Particle {
				x: 1.0,
				y: 2.0,
				radius: 0.5,
				speed: 0.1,
				alpha: 0.25,
				twinkle: 0.01,
			},
			Particle {
				x: 3.0,
				y: 4.0,
				radius: 1.2,
				speed: 0.1,
				alpha: 1.0,
				twinkle: 0.01,
			},
		];

		let mut surface = Recorder::default();
		render(&field, &mut surface, &StarfieldStyle::default());

		let glow = || Op::ShadowColor("rgba(90, 209, 255, 0.6)".into());
		assert_eq!(
			surface.ops,
			vec![
				Op::Clear(0.0, 0.0, 80.0, 80.0),
				Op::BeginPath,
				Op::Arc(1.0, 2.0, 0.5),
				glow(),
				Op::ShadowBlur(8.0),
				Op::Fill("rgba(186, 226, 255, 0.25)".into()),
				Op::ShadowBlur(0.0),
				Op::BeginPath,
				Op::Arc(3.0, 4.0, 1.2),
				glow(),
				Op::ShadowBlur(8.0),
				Op::Fill("rgba(186, 226, 255, 1)".into()),
				Op::ShadowBlur(0.0),
			]
		);
	}

	#[test]
	fn empty_field_only_clears() {
		let mut rng = Sequence::constant(0.5);
		let field = ParticleField::new(10.0, 10.0, &FieldConfig::default(), &mut rng);
		let mut surface = Recorder::default();
		render(&field, &mut surface, &StarfieldStyle::default());
		assert_eq!(surface.ops, vec![Op::Clear(0.0, 0.0, 10.0, 10.0)]);
	}

	#[test]
	fn configure_scales_to_logical_units() {
		let mut surface = Recorder::default();
		configure(&mut surface, &Viewport::new(100.0, 50.0, 3.0));
		assert_eq!(
			surface.ops,
			vec![Op::Transform([2.0, 0.0, 0.0, 2.0, 0.0, 0.0])]
		);
	}
}
