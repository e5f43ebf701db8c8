//! Starfield simulation state: viewport sizing and the frame loop step.
//!
//! One [`StarfieldState`] lives for the lifetime of the canvas. Resizing swaps
//! in a freshly generated [`ParticleField`]; each display refresh advances the
//! field by the time elapsed since the previous refresh and repaints it.

use super::particles::{FieldConfig, ParticleField};
use super::render::{self, Surface};
use super::rng::RandomSource;
use super::theme::StarfieldStyle;

/// Highest device pixel ratio the backing surface is scaled by.
pub const MAX_SCALE: f64 = 2.0;

/// Device-to-logical scale factor for a reported device pixel ratio.
///
/// Missing or nonsensical ratios fall back to 1.
pub fn scale_factor(device_pixel_ratio: f64) -> f64 {
	if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
		device_pixel_ratio.min(MAX_SCALE)
	} else {
		1.0
	}
}

/// Logical display size plus the scale used for the backing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Logical width in CSS pixels.
	pub width: f64,
	/// Logical height in CSS pixels.
	pub height: f64,
	/// Device pixels per logical pixel, at most [`MAX_SCALE`].
	pub scale: f64,
}

impl Viewport {
	/// Viewport for the window size and raw device pixel ratio.
	pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
			scale: scale_factor(device_pixel_ratio),
		}
	}

	/// Backing surface size in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.scale).floor() as u32,
			(self.height * self.scale).floor() as u32,
		)
	}
}

/// Particle field, viewport and frame clock for the background animation.
pub struct StarfieldState<R: RandomSource = fastrand::Rng> {
	/// Size the field was last laid out for.
	pub viewport: Viewport,
	/// The animated particles.
	pub field: ParticleField,
	/// Settings reused on every resize.
	pub config: FieldConfig,
	/// Host timestamp of the previous frame (0 before the first frame).
	pub last_timestamp: f64,
	rng: R,
}

impl StarfieldState {
	/// State backed by an unseeded generator.
	pub fn new(viewport: Viewport, config: FieldConfig) -> Self {
		Self::with_rng(viewport, config, fastrand::Rng::new())
	}
}

impl<R: RandomSource> StarfieldState<R> {
	/// State backed by the given random source.
	pub fn with_rng(viewport: Viewport, config: FieldConfig, mut rng: R) -> Self {
		let field = ParticleField::new(viewport.width, viewport.height, &config, &mut rng);
		log::debug!(
			"starlight: starfield {}x{} @{}x with {} stars",
			viewport.width,
			viewport.height,
			viewport.scale,
			field.len()
		);

		Self {
			viewport,
			field,
			config,
			last_timestamp: 0.0,
			rng,
		}
	}

	/// Adopt a new viewport and regenerate the field from scratch.
	pub fn resize(&mut self, viewport: Viewport) {
		self.viewport = viewport;
		self.field = ParticleField::new(viewport.width, viewport.height, &self.config, &mut self.rng);
		log::debug!(
			"starlight: resized to {}x{}, {} stars",
			viewport.width,
			viewport.height,
			self.field.len()
		);
	}

	/// Step the field to `timestamp` and return the elapsed time.
	pub fn advance(&mut self, timestamp: f64) -> f64 {
		let delta = timestamp - self.last_timestamp;
		self.field.step(delta, &mut self.rng);
		self.last_timestamp = timestamp;
		delta
	}

	/// One display refresh: advance, then repaint.
	pub fn frame(&mut self, timestamp: f64, surface: &mut impl Surface, style: &StarfieldStyle) {
		self.advance(timestamp);
		render::render(&self.field, surface, style);
	}
}
