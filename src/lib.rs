//! starlight: space-themed landing page for the browser.
//!
//! This crate provides a WASM-rendered page with an animated starfield
//! background, a gallery of sample imagery, and a card showing NASA's
//! Astronomy Picture of the Day.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;

pub use components::apod::ApodCard;
pub use components::gallery::Gallery;
use components::reveal::observe_reveals;
pub use components::starfield::StarfieldCanvas;
pub use config::{SiteConfig, load_site_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starlight: logging initialized");
}

fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}

/// Main application component.
/// Reads page configuration from the DOM and lays out every section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_site_config();
	let field_config = config.field_config();
	let SiteConfig {
		apod_endpoint,
		apod_api_key,
		..
	} = config;

	// Runs once, after the sections are mounted.
	Effect::new(move |_| observe_reveals());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Starlight" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<StarfieldCanvas config=field_config />
		<main class="page">
			<section id="home" class="hero section">
				<h1>"Explore the universe"</h1>
				<p class="subtitle">"Imagery and daily discoveries from deep space."</p>
			</section>
			<section id="gallery" class="section">
				<h2>"Gallery"</h2>
				<Gallery />
			</section>
			<section id="apod" class="section">
				<h2>"Picture of the Day"</h2>
				<ApodCard endpoint=apod_endpoint api_key=apod_api_key />
			</section>
		</main>
		<footer class="site-footer">
			<p>"© " <span id="year">{current_year()}</span> " Starlight"</p>
		</footer>
	}
}
