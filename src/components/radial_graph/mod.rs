mod animation;
mod component;
mod config;
mod curve;
mod error;
mod interaction;
mod layout;
mod render;
mod scene;
mod state;
mod types;

pub use component::RadialGraphCanvas;
pub use config::RadialGraphConfig;
pub use error::GraphError;
pub use types::{CenterItem, Group, Item, RadialData};
