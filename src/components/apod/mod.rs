//! Astronomy Picture of the Day card.
//!
//! Fetches today's entry once when mounted and shows either the image, an
//! embedded video, or a fixed error notice if the request fails.

mod card;
pub mod fetch;
mod types;

pub use card::{ApodCard, CardView, ERROR_TEXT, Media};
pub use fetch::{ContentError, DEFAULT_API_KEY, DEFAULT_ENDPOINT};
pub use types::{Apod, MediaType};
