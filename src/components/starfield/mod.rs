//! Animated starfield background.
//!
//! Paints a field of slowly falling, twinkling stars on a fullscreen canvas:
//! - Particle count derived from the window area, regenerated on resize
//! - Frame-rate independent drift driven by `requestAnimationFrame` timestamps
//! - High-density displays rendered at up to 2x for crisp dots
//! - Pluggable randomness so stepping can be made deterministic
//!
//! # Example
//!
//! ```ignore
//! use starlight::components::starfield::{FieldConfig, StarfieldCanvas};
//!
//! view! { <StarfieldCanvas config=FieldConfig { max_particles: Some(2000) } /> }
//! ```

mod component;
pub mod particles;
pub mod render;
pub mod rng;
pub mod state;
pub mod theme;

pub use component::StarfieldCanvas;
pub use particles::{FieldConfig, Particle, ParticleField};
pub use render::Surface;
pub use rng::RandomSource;
pub use state::{StarfieldState, Viewport};
pub use theme::{Color, StarfieldStyle};
