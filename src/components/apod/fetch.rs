//! Single-shot retrieval of today's entry over the browser `fetch` API.

use thiserror::Error;
use url::Url;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::types::Apod;

/// Public APOD endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";
/// Shared, heavily rate-limited key; deployments should configure their own.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Why today's entry could not be loaded.
#[derive(Debug, Error)]
pub enum ContentError {
	/// Not running in a browser.
	#[error("no browser window available")]
	NoWindow,
	/// The configured endpoint is not a valid absolute URL.
	#[error("invalid APOD endpoint: {0}")]
	Endpoint(#[from] url::ParseError),
	/// `fetch` rejected, or the body could not be read.
	#[error("request failed: {0}")]
	Network(String),
	/// The server answered with a non-success status.
	#[error("APOD request failed with status {0}")]
	Status(u16),
	/// The body was not the expected JSON.
	#[error("invalid APOD response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl From<JsValue> for ContentError {
	fn from(value: JsValue) -> Self {
		Self::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Endpoint with the API key appended as a percent-encoded query parameter.
pub fn request_url(endpoint: &str, api_key: &str) -> Result<String, ContentError> {
	Ok(Url::parse_with_params(endpoint, &[("api_key", api_key)])?.into())
}

/// Decode a response body.
pub fn parse_response(body: &str) -> Result<Apod, ContentError> {
	Ok(serde_json::from_str(body)?)
}

/// Fetch today's entry. One attempt; no retry and no timeout.
pub async fn fetch_apod(endpoint: &str, api_key: &str) -> Result<Apod, ContentError> {
	let window = web_sys::window().ok_or(ContentError::NoWindow)?;
	let response: Response = JsFuture::from(window.fetch_with_str(&request_url(endpoint, api_key)?))
		.await?
		.dyn_into()?;

	if !response.ok() {
		return Err(ContentError::Status(response.status()));
	}

	let body = JsFuture::from(response.text()?)
		.await?
		.as_string()
		.ok_or_else(|| ContentError::Network("response body is not text".into()))?;
	parse_response(&body)
}
