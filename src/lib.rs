//! Leptos client-side app that draws the radial skills graph.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[cfg(target_arch = "wasm32")]
use getrandom as _;

// Modules
mod components;
mod pages;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

pub use crate::components::radial_graph::GraphError;

/// Element the app attaches to on the skills page.
pub const CONTAINER_ID: &str = "skills-graph-container";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Mount [`App`] inside the element with id `container_id`.
pub fn mount(container_id: &str) -> Result<(), GraphError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or(GraphError::NoWindow)?;
	let container: HtmlElement = document
		.get_element_by_id(container_id)
		.and_then(|element| element.dyn_into().ok())
		.ok_or_else(|| GraphError::ContainerNotFound(container_id.to_string()))?;
	leptos::mount::mount_to(container, App).forget();
	info!("mounted into #{container_id}");
	Ok(())
}

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Skills Graph" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
