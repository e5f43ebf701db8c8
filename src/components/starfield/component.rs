//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a fullscreen canvas behind the page, sizes it for the
//! window on mount and on every `resize`, and drives the simulation from a
//! `requestAnimationFrame` loop that re-registers itself every frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::FieldConfig;
use super::render;
use super::state::{StarfieldState, Viewport};
use super::theme::StarfieldStyle;

/// Bundles the simulation with its drawing context and styling.
struct StarfieldContext {
	state: StarfieldState,
	style: StarfieldStyle,
	ctx: CanvasRenderingContext2d,
}

/// Read the window's logical size and device pixel ratio.
fn measure(window: &Window) -> Viewport {
	let dimension = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport::new(
		dimension(window.inner_width()),
		dimension(window.inner_height()),
		window.device_pixel_ratio(),
	)
}

/// Size the backing store in device pixels and the element in CSS pixels.
///
/// Resizing the backing store resets the context, so the transform is
/// reapplied afterwards.
fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &mut CanvasRenderingContext2d, viewport: &Viewport) {
	let (backing_width, backing_height) = viewport.backing_size();
	canvas.set_width(backing_width);
	canvas.set_height(backing_height);

	// Fully qualified: leptos' `ElementExt::style` shadows the web-sys getter.
	let style = web_sys::HtmlElement::style(canvas);
	let (css_width, css_height) = css_size(viewport);
	let _ = style.set_property("width", &css_width);
	let _ = style.set_property("height", &css_height);

	render::configure(ctx, viewport);
}

/// CSS `width`/`height` values for the logical viewport size.
fn css_size(viewport: &Viewport) -> (String, String) {
	(format!("{}px", viewport.width), format!("{}px", viewport.height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Fullscreen animated starfield drawn behind the page content.
///
/// Stars fall slowly and twinkle; the field is regenerated for the new window
/// area whenever the window is resized.
#[component]
pub fn StarfieldCanvas(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
	#[prop(default = StarfieldStyle::default())] theme: StarfieldStyle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<StarfieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("starlight: no window, starfield disabled");
			return;
		};
		let Some(mut ctx) = context_2d(&canvas) else {
			warn!("starlight: 2d canvas context unavailable, starfield disabled");
			return;
		};

		let viewport = measure(&window);
		fit_canvas(&canvas, &mut ctx, &viewport);

		*context.borrow_mut() = Some(StarfieldContext {
			state: StarfieldState::new(viewport, config.clone()),
			style: theme.clone(),
			ctx,
		});

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let viewport = measure(&win);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				fit_canvas(&canvas_resize, &mut c.ctx, &viewport);
				c.state.resize(viewport);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let StarfieldContext { state, style, ctx } = c;
				state.frame(timestamp, ctx, style);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="starfield"
			class="starfield"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_size_stays_logical_on_dense_displays() {
		let viewport = Viewport::new(1280.0, 720.5, 3.0);
		assert_eq!(viewport.backing_size(), (2560, 1441));
		assert_eq!(css_size(&viewport), ("1280px".to_string(), "720.5px".to_string()));
	}
}
