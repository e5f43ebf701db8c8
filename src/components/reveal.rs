//! Fade-in of page sections as they scroll into view.
//!
//! Matching elements get [`REVEAL_CLASS`] the first time at least
//! [`REVEAL_THRESHOLD`] of them is visible, and are then no longer observed.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Elements that fade in.
pub const REVEAL_TARGETS: &[&str] = &[".section", ".thumb", ".apod-card"];
/// Visible fraction that triggers the reveal.
pub const REVEAL_THRESHOLD: f64 = 0.12;
/// Class added once an element has been seen.
pub const REVEAL_CLASS: &str = "in-view";

/// Selector list passed to `querySelectorAll`.
pub fn reveal_selector() -> String {
	REVEAL_TARGETS.join(", ")
}

fn reveal(entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
	if !entry.is_intersecting() {
		return;
	}
	let target = entry.target();
	let _ = target.class_list().add_1(REVEAL_CLASS);
	observer.unobserve(&target);
}

/// Start observing every reveal target currently in the document.
///
/// The observer lives for the rest of the page.
pub fn observe_reveals() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("starlight: no document; scroll reveal disabled");
		return;
	};

	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		|entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
					reveal(&entry, &observer);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
	let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
		Ok(observer) => observer,
		Err(e) => {
			warn!("starlight: IntersectionObserver unavailable: {:?}", e);
			return;
		}
	};
	callback.forget();

	let Ok(nodes) = document.query_selector_all(&reveal_selector()) else {
		return;
	};
	for i in 0..nodes.length() {
		if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&element);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn selector_covers_sections_thumbs_and_card() {
		assert_eq!(reveal_selector(), ".section, .thumb, .apod-card");
	}

	#[test]
	fn threshold_is_a_visible_fraction() {
		assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
		assert!(!REVEAL_CLASS.contains(' '));
	}
}
