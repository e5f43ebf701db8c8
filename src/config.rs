//! Page configuration supplied by the hosting HTML.
//!
//! A deployment may embed
//! `<script id="site-config" type="application/json">{ ... }</script>` to
//! override the defaults. Every field is optional.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

use crate::components::apod::{DEFAULT_API_KEY, DEFAULT_ENDPOINT};
use crate::components::starfield::FieldConfig;

/// Element id of the embedded configuration script.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Tunables read from the page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
	/// APOD endpoint, without query string.
	pub apod_endpoint: String,
	/// API key sent with every request.
	pub apod_api_key: String,
	/// Ceiling on starfield particles; unlimited when absent.
	pub max_particles: Option<usize>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			apod_endpoint: DEFAULT_ENDPOINT.to_string(),
			apod_api_key: DEFAULT_API_KEY.to_string(),
			max_particles: None,
		}
	}
}

impl SiteConfig {
	/// Parse the embedded JSON; missing fields take their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Starfield settings derived from this configuration.
	pub fn field_config(&self) -> FieldConfig {
		FieldConfig {
			max_particles: self.max_particles,
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Load configuration from the DOM, falling back to defaults.
pub fn load_site_config() -> SiteConfig {
	let Some(json_text) = config_text() else {
		return SiteConfig::default();
	};

	match SiteConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"starlight: loaded site config (particle cap: {:?})",
				config.max_particles
			);
			config
		}
		Err(e) => {
			warn!("starlight: failed to parse site config: {}", e);
			SiteConfig::default()
		}
	}
}
