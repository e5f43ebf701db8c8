//! Falling star particles and the field that owns them.

use super::rng::RandomSource;

/// Square logical pixels of viewport per particle.
pub const AREA_PER_PARTICLE: f64 = 3200.0;
/// How far past the bottom edge a particle may drift before wrapping to the top.
pub const WRAP_MARGIN: f64 = 2.0;
/// Drift units per millisecond of frame time (about one unit per frame at 60 Hz).
pub const DRIFT_PER_MS: f64 = 0.06;
/// Dimmest a particle may twinkle.
pub const ALPHA_MIN: f64 = 0.2;
/// Brightest a particle may twinkle.
pub const ALPHA_MAX: f64 = 1.0;

/// A single falling star.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in logical pixels.
	pub x: f64,
	/// Vertical position; briefly past the bottom edge before wrapping.
	pub y: f64,
	/// Circle radius, fixed at creation.
	pub radius: f64,
	/// Vertical drift rate.
	pub speed: f64,
	/// Current opacity, kept within [`ALPHA_MIN`, `ALPHA_MAX`].
	pub alpha: f64,
	/// Upper bound on the per-frame alpha jitter.
	pub twinkle: f64,
}

impl Particle {
	fn spawn(rng: &mut impl RandomSource, width: f64, height: f64) -> Self {
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			radius: rng.range(0.2, 1.4),
			speed: rng.range(0.05, 0.25),
			alpha: rng.range(0.3, 1.0),
			twinkle: rng.range(0.005, 0.025),
		}
	}

	/// Drift down by `drift` scaled by speed, wrap below `height`, then twinkle.
	fn step(&mut self, drift: f64, height: f64, rng: &mut impl RandomSource) {
		self.y += self.speed * drift;
		if self.y > height + WRAP_MARGIN {
			self.y = -WRAP_MARGIN;
		}
		self.alpha += (rng.next_f64() - 0.5) * self.twinkle;
		self.alpha = self.alpha.clamp(ALPHA_MIN, ALPHA_MAX);
	}
}

/// Limits applied when sizing a field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldConfig {
	/// Optional ceiling on the particle count. `None` keeps the count purely
	/// area-derived.
	pub max_particles: Option<usize>,
}

/// Number of particles for a `width` x `height` viewport.
pub fn particle_count(width: f64, height: f64, config: &FieldConfig) -> usize {
	let area_count = (width * height / AREA_PER_PARTICLE).floor();
	let count = if area_count.is_finite() && area_count > 0.0 {
		area_count as usize
	} else {
		0
	};
	config.max_particles.map_or(count, |max| count.min(max))
}

/// All particles for one viewport size.
///
/// A field is never resized in place: a new viewport gets a new field.
#[derive(Clone, Debug)]
pub struct ParticleField {
	/// Particles in draw order.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Spawn a field sized for the viewport area.
	pub fn new(width: f64, height: f64, config: &FieldConfig, rng: &mut impl RandomSource) -> Self {
		let count = particle_count(width, height, config);
		let particles = (0..count)
			.map(|_| Particle::spawn(rng, width, height))
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Advance every particle by `delta_ms` of host frame time.
	pub fn step(&mut self, delta_ms: f64, rng: &mut impl RandomSource) {
		let drift = delta_ms * DRIFT_PER_MS;
		for p in &mut self.particles {
			p.step(drift, self.height, rng);
		}
	}

	/// Logical width the field was spawned for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Logical height the field was spawned for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True for a zero-area viewport.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::super::rng::Sequence;
	use super::*;

	fn star(y: f64, alpha: f64) -> Particle {
		Particle {
			x: 10.0,
			y,
			radius: 1.0,
			speed: 0.1,
			alpha,
			twinkle: 0.02,
		}
	}

	fn field_of(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
		ParticleField {
			particles,
			width,
			height,
		}
	}

	#[rstest]
	#[case(0.0, 0.0, 0)]
	#[case(1.0, 3199.0, 0)]
	#[case(80.0, 40.0, 1)]
	#[case(800.0, 600.0, 150)]
	#[case(1920.0, 1080.0, 648)]
	#[case(375.0, 667.0, 78)]
	#[case(3840.0, 2160.0, 2592)]
	fn count_follows_area(#[case] width: f64, #[case] height: f64, #[case] expected: usize) {
		assert_eq!(particle_count(width, height, &FieldConfig::default()), expected);
	}

	#[test]
	fn count_respects_configured_ceiling() {
		let config = FieldConfig {
			max_particles: Some(100),
		};
		assert_eq!(particle_count(1920.0, 1080.0, &config), 100);
		assert_eq!(particle_count(80.0, 40.0, &config), 1);
	}

	#[test]
	fn degenerate_dimensions_yield_empty_field() {
		let mut rng = Sequence::constant(0.5);
		let field = ParticleField::new(f64::NAN, 100.0, &FieldConfig::default(), &mut rng);
		assert!(field.is_empty());
		let field = ParticleField::new(-50.0, 100.0, &FieldConfig::default(), &mut rng);
		assert!(field.is_empty());
	}

	#[test]
	fn spawned_particles_stay_in_their_ranges() {
		let mut rng = fastrand::Rng::with_seed(42);
		let field = ParticleField::new(640.0, 480.0, &FieldConfig::default(), &mut rng);
		assert_eq!(field.len(), 96);
		for p in &field.particles {
			assert!((0.0..640.0).contains(&p.x));
			assert!((0.0..480.0).contains(&p.y));
			assert!((0.2..1.4).contains(&p.radius));
			assert!((0.05..0.25).contains(&p.speed));
			assert!((0.3..1.0).contains(&p.alpha));
			assert!((0.005..0.025).contains(&p.twinkle));
		}
	}

	#[test]
	fn drift_scales_with_elapsed_time() {
		let mut field = field_of(vec![star(100.0, 0.5)], 200.0, 200.0);
		let mut rng = Sequence::constant(0.5);
		field.step(1000.0 / 60.0, &mut rng);
		let expected = 100.0 + 0.1 * (1000.0 / 60.0) * DRIFT_PER_MS;
		assert!((field.particles[0].y - expected).abs() < 1e-9);
		assert_eq!(field.particles[0].alpha, 0.5);
	}

	#[test]
	fn zero_delta_only_twinkles() {
		let mut rng = fastrand::Rng::with_seed(3);
		let mut field = ParticleField::new(300.0, 300.0, &FieldConfig::default(), &mut rng);
		let before = field.particles.clone();
		field.step(0.0, &mut rng);
		for (old, new) in before.iter().zip(&field.particles) {
			assert_eq!(old.x, new.x);
			assert_eq!(old.y, new.y);
			assert!((new.alpha - old.alpha).abs() <= old.twinkle / 2.0 + 1e-12);
			assert!((ALPHA_MIN..=ALPHA_MAX).contains(&new.alpha));
		}
	}

	#[test]
	fn particle_below_margin_wraps_to_top() {
		let mut field = field_of(vec![star(202.5, 0.5), star(201.0, 0.5)], 100.0, 200.0);
		let mut rng = Sequence::constant(0.5);
		field.step(0.0, &mut rng);
		assert_eq!(field.particles[0].y, -WRAP_MARGIN);
		// Still within the margin, so it keeps falling.
		assert_eq!(field.particles[1].y, 201.0);
	}

	#[test]
	fn drift_past_margin_wraps_within_same_step() {
		let mut field = field_of(vec![star(201.9, 0.5)], 100.0, 200.0);
		let mut rng = Sequence::constant(0.5);
		field.step(100.0, &mut rng);
		assert_eq!(field.particles[0].y, -WRAP_MARGIN);
	}

	#[rstest]
	#[case(0.0)]
	#[case(0.999_999)]
	fn alpha_stays_clamped_under_extreme_jitter(#[case] value: f64) {
		let mut rng = fastrand::Rng::with_seed(11);
		let mut field = ParticleField::new(400.0, 400.0, &FieldConfig::default(), &mut rng);
		let mut jitter = Sequence::constant(value);
		for _ in 0..500 {
			field.step(16.0, &mut jitter);
			for p in &field.particles {
				assert!((ALPHA_MIN..=ALPHA_MAX).contains(&p.alpha));
			}
		}
	}

	#[test]
	fn alpha_stays_clamped_under_random_jitter() {
		let mut rng = fastrand::Rng::with_seed(99);
		let mut field = field_of(vec![star(0.0, 0.21), star(0.0, 0.99)], 100.0, 100.0);
		for p in &mut field.particles {
			p.twinkle = 0.5;
		}
		for _ in 0..1000 {
			field.step(16.0, &mut rng);
			for p in &field.particles {
				assert!((ALPHA_MIN..=ALPHA_MAX).contains(&p.alpha));
			}
		}
	}
}
