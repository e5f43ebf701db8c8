//! Random source used for particle spawning and twinkle jitter.

/// A source of uniformly distributed values in `[0, 1)`.
///
/// The browser build draws from an unseeded [`fastrand::Rng`]; tests plug in
/// fixed sequences so stepping is reproducible.
pub trait RandomSource {
	/// Next value in `[0, 1)`.
	fn next_f64(&mut self) -> f64;

	/// Next value in `[min, max)`.
	fn range(&mut self, min: f64, max: f64) -> f64 {
		min + self.next_f64() * (max - min)
	}
}

impl RandomSource for fastrand::Rng {
	fn next_f64(&mut self) -> f64 {
		self.f64()
	}
}

/// Replays a fixed list of values, cycling when exhausted.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct Sequence {
	values: Vec<f64>,
	next: usize,
}

#[cfg(test)]
impl Sequence {
	pub(crate) fn new(values: &[f64]) -> Self {
		assert!(!values.is_empty(), "sequence needs at least one value");
		Self {
			values: values.to_vec(),
			next: 0,
		}
	}

	pub(crate) fn constant(value: f64) -> Self {
		Self::new(&[value])
	}
}

#[cfg(test)]
impl RandomSource for Sequence {
	fn next_f64(&mut self) -> f64 {
		let value = self.values[self.next % self.values.len()];
		self.next += 1;
		value
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn range_maps_unit_interval() {
		let mut rng = Sequence::new(&[0.0, 0.5]);
		assert_eq!(rng.range(2.0, 4.0), 2.0);
		assert_eq!(rng.range(2.0, 4.0), 3.0);
	}

	#[test]
	fn seeded_fastrand_is_deterministic() {
		let mut a = fastrand::Rng::with_seed(7);
		let mut b = fastrand::Rng::with_seed(7);
		for _ in 0..10 {
			let value = a.next_f64();
			assert_eq!(value, b.next_f64());
			assert!((0.0..1.0).contains(&value));
		}
	}
}
