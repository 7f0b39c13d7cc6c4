use radial_graph_canvas::{CONTAINER_ID, init_logging, mount};

fn main() {
	init_logging();
	if let Err(err) = mount(CONTAINER_ID) {
		log::error!("{err}");
		wasm_bindgen::throw_str(&err.to_string());
	}
}
