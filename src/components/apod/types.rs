//! Response shape of the Astronomy Picture of the Day API.

use serde::Deserialize;

/// Kind of media an entry links to.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
	/// A still image at `url`.
	#[default]
	Image,
	/// An embeddable player page at `url`.
	Video,
	/// Anything else the API reports; shown like an image.
	#[serde(other)]
	Other,
}

/// One day's entry. Every field is optional on the wire.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Apod {
	/// Entry title.
	pub title: Option<String>,
	/// Publication date, `YYYY-MM-DD`.
	pub date: Option<String>,
	/// Description text.
	pub explanation: Option<String>,
	/// Image source or embeddable video page.
	pub url: Option<String>,
	/// Full-resolution image, absent for videos.
	pub hdurl: Option<String>,
	/// How `url` should be displayed.
	#[serde(default)]
	pub media_type: MediaType,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_full_entry() {
		let apod: Apod = serde_json::from_str(
			r#"{
				"title": "Orion Nebula",
				"date": "2024-01-02",
				"explanation": "A stellar nursery.",
				"url": "https://apod.nasa.gov/apod/image/orion.jpg",
				"hdurl": "https://apod.nasa.gov/apod/image/orion_big.jpg",
				"media_type": "image",
				"service_version": "v1"
			}"#,
		)
		.unwrap();
		assert_eq!(apod.title.as_deref(), Some("Orion Nebula"));
		assert_eq!(apod.media_type, MediaType::Image);
		assert_eq!(
			apod.hdurl.as_deref(),
			Some("https://apod.nasa.gov/apod/image/orion_big.jpg")
		);
	}

	#[test]
	fn missing_fields_decode_as_absent() {
		let apod: Apod = serde_json::from_str("{}").unwrap();
		assert_eq!(apod, Apod::default());
	}

	#[test]
	fn unknown_media_type_is_other() {
		let apod: Apod = serde_json::from_str(r#"{"media_type": "interactive"}"#).unwrap();
		assert_eq!(apod.media_type, MediaType::Other);
		let apod: Apod = serde_json::from_str(r#"{"media_type": "video"}"#).unwrap();
		assert_eq!(apod.media_type, MediaType::Video);
	}
}
