//! Thumbnail grid of sample space imagery.

use leptos::prelude::*;

/// One gallery picture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
	/// Caption and alt text.
	pub label: &'static str,
	/// Image URL.
	pub src: &'static str,
}

const fn item(label: &'static str, src: &'static str) -> GalleryItem {
	GalleryItem { label, src }
}

/// Public-domain NASA images shown by default.
pub const SAMPLE_IMAGES: &[GalleryItem] = &[
	item("Orion Nebula", "https://images-assets.nasa.gov/image/PIA12235/PIA12235~orig.jpg"),
	item(
		"Earth at Night",
		"https://images-assets.nasa.gov/image/GSFC_20171208_Archive_e000705/GSFC_20171208_Archive_e000705~orig.jpg",
	),
	item("Jupiter Storms", "https://images-assets.nasa.gov/image/PIA03149/PIA03149~orig.jpg"),
	item("Saturn Rings", "https://images-assets.nasa.gov/image/PIA17011/PIA17011~orig.jpg"),
	item("Mars Dunes", "https://images-assets.nasa.gov/image/PIA04921/PIA04921~orig.jpg"),
	item("Crab Nebula", "https://images-assets.nasa.gov/image/PIA04981/PIA04981~orig.jpg"),
	item("Barred Spiral", "https://images-assets.nasa.gov/image/PIA12233/PIA12233~orig.jpg"),
	item("Ring Nebula", "https://images-assets.nasa.gov/image/PIA07077/PIA07077~orig.jpg"),
];

/// Lazily loaded thumbnails, each captioned with its label.
#[component]
pub fn Gallery(#[prop(default = SAMPLE_IMAGES)] items: &'static [GalleryItem]) -> impl IntoView {
	view! {
		<div id="galleryGrid" class="gallery-grid">
			{items
				.iter()
				.map(|item| {
					view! {
						<div class="thumb">
							<img loading="lazy" alt=item.label src=item.src />
							<span class="label">{item.label}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn samples_are_distinct_https_images() {
		assert_eq!(SAMPLE_IMAGES.len(), 8);
		let labels: HashSet<_> = SAMPLE_IMAGES.iter().map(|i| i.label).collect();
		assert_eq!(labels.len(), SAMPLE_IMAGES.len());
		for image in SAMPLE_IMAGES {
			assert!(image.src.starts_with("https://images-assets.nasa.gov/"));
			assert!(image.src.ends_with(".jpg"));
		}
	}
}
