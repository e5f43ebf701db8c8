//! The daily content card: view model and Leptos component.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info};

use super::fetch::{ContentError, fetch_apod};
use super::types::{Apod, MediaType};

/// Title shown until a response arrives, or when it has none.
pub const DEFAULT_TITLE: &str = "Astronomy Picture of the Day";
/// Alt text for untitled images.
pub const FALLBACK_ALT: &str = "APOD image";
/// Notice shown in place of media when loading fails.
pub const ERROR_TEXT: &str = "Failed to load APOD. Please try again later.";

/// What the card's media region holds.
#[derive(Clone, Debug, PartialEq)]
pub enum Media {
	/// Nothing yet; the request is in flight.
	Empty,
	/// A single image.
	Image { src: String, alt: String },
	/// An embedded player.
	Video { src: String },
	/// Fixed notice shown in place of media when loading failed.
	Error(String),
}

/// Everything the card displays.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
	/// Heading text.
	pub title: String,
	/// Publication date, empty when unknown.
	pub date: String,
	/// Description, empty when unknown.
	pub explanation: String,
	/// Target of the full-resolution link; `#` when there is none.
	pub hd_link: String,
	/// Contents of the media region.
	pub media: Media,
	/// Set until the request fails or the media element settles.
	pub loading: bool,
}

impl CardView {
	/// Initial state while the request is in flight.
	pub fn loading() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			date: String::new(),
			explanation: String::new(),
			hd_link: "#".to_string(),
			media: Media::Empty,
			loading: true,
		}
	}

	/// Fill the card from a successful response.
	///
	/// `loading` stays set: the media element clears it once it loads.
	pub fn from_apod(apod: Apod) -> Self {
		let src = apod.url.clone().unwrap_or_default();
		let media = match apod.media_type {
			MediaType::Video => Media::Video { src },
			MediaType::Image | MediaType::Other => Media::Image {
				src,
				alt: apod.title.clone().unwrap_or_else(|| FALLBACK_ALT.to_string()),
			},
		};

		Self {
			title: apod.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			date: apod.date.unwrap_or_default(),
			explanation: apod.explanation.unwrap_or_default(),
			hd_link: apod.hdurl.or(apod.url).unwrap_or_else(|| "#".to_string()),
			media,
			loading: true,
		}
	}

	/// Replace the media with the error notice, leaving the text as it was.
	pub fn failed(self) -> Self {
		Self {
			media: Media::Error(ERROR_TEXT.to_string()),
			loading: false,
			..self
		}
	}

	/// Apply the outcome of the request to this card.
	pub fn resolve(self, outcome: Result<Apod, ContentError>) -> Self {
		match outcome {
			Ok(apod) => {
				info!("starlight: loaded APOD {:?}", apod.date);
				Self::from_apod(apod)
			}
			Err(e) => {
				error!("starlight: {}", e);
				self.failed()
			}
		}
	}

	/// The media element finished loading (or gave up).
	pub fn media_settled(&mut self) {
		self.loading = false;
	}
}

/// Card showing today's astronomy picture or video with its description.
///
/// The request is issued once when the card is created.
#[component]
pub fn ApodCard(#[prop(into)] endpoint: String, #[prop(into)] api_key: String) -> impl IntoView {
	let card = RwSignal::new(CardView::loading());

	spawn_local(async move {
		let outcome = fetch_apod(&endpoint, &api_key).await;
		let current = card.get_untracked();
		card.set(current.resolve(outcome));
	});

	// Only media changes rebuild the media region; `loading` just toggles a class.
	let media = Memo::new(move |_| card.with(|c| c.media.clone()));

	view! {
		<article id="apodCard" class="apod-card" class:loading=move || card.with(|c| c.loading)>
			<div class="apod-media">
				{move || match media.get() {
					Media::Empty => ().into_any(),
					Media::Image { src, alt } => view! {
						<img
							src=src
							alt=alt
							loading="lazy"
							on:load=move |_| card.update(CardView::media_settled)
							on:error=move |_| card.update(CardView::media_settled)
						/>
					}
					.into_any(),
					Media::Video { src } => view! {
						<iframe
							src=src
							prop:loading="lazy"
							allowfullscreen=true
							on:load=move |_| card.update(CardView::media_settled)
						></iframe>
					}
					.into_any(),
					Media::Error(text) => view! { <p class="apod-error">{text}</p> }.into_any(),
				}}
			</div>
			<div class="apod-body">
				<h3 id="apodTitle">{move || card.with(|c| c.title.clone())}</h3>
				<p id="apodDate" class="apod-date">{move || card.with(|c| c.date.clone())}</p>
				<p id="apodExplanation">{move || card.with(|c| c.explanation.clone())}</p>
				<a
					id="apodHdLink"
					href=move || card.with(|c| c.hd_link.clone())
					target="_blank"
					rel="noopener"
				>
					"View full resolution"
				</a>
			</div>
		</article>
	}
}
