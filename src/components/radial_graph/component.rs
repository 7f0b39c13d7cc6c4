use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, Window};

use super::animation::{Clock, PerformanceClock};
use super::config::RadialGraphConfig;
use super::error::GraphError;
use super::render;
use super::state::RadialGraphState;
use super::types::{Point, RadialData};

type SharedState = Rc<RefCell<RadialGraphState>>;

/// Handle to the self-rescheduling `requestAnimationFrame` callback.
#[derive(Clone, Default)]
struct FrameLoop {
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	fn is_started(&self) -> bool {
		self.callback.borrow().is_some()
	}

	fn request(&self, window: &Window) {
		if let Some(ref cb) = *self.callback.borrow() {
			self.pending
				.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}

	/// Cancel the pending frame and drop the callback, breaking its
	/// reference cycle.
	fn stop(&self) {
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

#[component]
pub fn RadialGraphCanvas(
	#[prop(into)] data: Signal<RadialData>,
	#[prop(optional)] config: Option<RadialGraphConfig>,
) -> impl IntoView {
	let built = viewport_width().and_then(|width| {
		RadialGraphState::new(&data.get_untracked(), width, config.unwrap_or_default())
	});
	let state: SharedState = match built {
		Ok(state) => Rc::new(RefCell::new(state)),
		Err(err) => {
			error!("radial graph setup failed: {err}");
			return Err::<(), _>(err).into_any();
		}
	};

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frames = FrameLoop::default();
	let (state_init, frames_init) = (state.clone(), frames.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if frames_init.is_started() {
			return;
		}
		if let Err(err) = start(&canvas, &state_init, &frames_init) {
			error!("radial graph failed to start: {err}");
		}
	});

	let teardown = SendWrapper::new((state.clone(), frames));
	on_cleanup(move || {
		let (state, frames) = teardown.take();
		state.borrow_mut().stop();
		frames.stop();
		info!(
			"radial graph stopped after {} frames",
			state.borrow().ticker.ticks()
		);
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let p = canvas_point(&canvas, &ev);
		let cursor = {
			let mut s = state_mm.borrow_mut();
			s.pointer_moved(p);
			s.cursor()
		};
		set_cursor(&canvas, cursor);
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		state_ml.borrow_mut().pointer_left();
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="radial-graph-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="max-width: 100%; height: auto; display: block; margin: auto;"
		/>
	}
	.into_any()
}

fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	// tachys' `ElementExt::style` shadows the web-sys getter.
	let _ = HtmlElement::style(canvas).set_property("cursor", cursor);
}

fn viewport_width() -> Result<f64, GraphError> {
	web_sys::window()
		.and_then(|window| window.inner_width().ok())
		.and_then(|width| width.as_f64())
		.ok_or(GraphError::NoWindow)
}

/// Pointer position in canvas pixels, undoing any CSS scaling.
fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	let scale_x = if rect.width() > 0.0 {
		canvas.width() as f64 / rect.width()
	} else {
		1.0
	};
	let scale_y = if rect.height() > 0.0 {
		canvas.height() as f64 / rect.height()
	} else {
		1.0
	};
	Point::new(
		(ev.client_x() as f64 - rect.left()) * scale_x,
		(ev.client_y() as f64 - rect.top()) * scale_y,
	)
}

fn start(
	canvas: &HtmlCanvasElement,
	state: &SharedState,
	frames: &FrameLoop,
) -> Result<(), GraphError> {
	let window = web_sys::window().ok_or(GraphError::NoWindow)?;
	let clock = PerformanceClock::new(&window)
		.ok_or_else(|| GraphError::Canvas("performance clock unavailable".into()))?;

	{
		let s = state.borrow();
		canvas.set_width(s.width() as u32);
		canvas.set_height(s.height() as u32);
	}

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(GraphError::canvas)?
		.ok_or_else(|| GraphError::Canvas("2d context unavailable".into()))?
		.dyn_into()
		.map_err(GraphError::canvas)?;

	render::render(&state.borrow(), &ctx);

	let (state_anim, frames_inner, canvas_anim) = (state.clone(), frames.clone(), canvas.clone());
	*frames.callback.borrow_mut() = Some(Closure::new(move || {
		let cursor = {
			let mut s = state_anim.borrow_mut();
			if !s.tick(clock.now_ms()) {
				return;
			}
			render::render(&s, &ctx);
			s.cursor()
		};
		// A tick can move a node onto or off a resting pointer.
		set_cursor(&canvas_anim, cursor);
		if let Some(window) = web_sys::window() {
			frames_inner.request(&window);
		}
	}));
	frames.request(&window);
	info!("radial graph animation started");
	Ok(())
}
