use std::f64::consts::PI;

use super::error::GraphError;

/// Tunables for one radial graph view. Defaults reproduce the skills page.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGraphConfig {
	/// Widest the canvas gets, before the margin is taken off.
	pub max_width: f64,
	pub margin: f64,
	pub height: f64,
	/// `radius = min(width, height) / shrink`.
	pub shrink: f64,
	/// Outer node radii are drawn from `radius ± jitter`.
	pub jitter: f64,
	pub start_angle: f64,
	/// Float offset in pixels.
	pub amplitude: f64,
	/// Milliseconds per radian of float phase.
	pub period_ms: f64,
	/// Fixed jitter seed. `None` draws a fresh silhouette on every load.
	pub seed: Option<u64>,
}

impl Default for RadialGraphConfig {
	fn default() -> Self {
		Self {
			max_width: 1000.0,
			margin: 40.0,
			height: 700.0,
			shrink: 2.5,
			jitter: 20.0,
			start_angle: -PI / 4.0,
			amplitude: 5.0,
			period_ms: 1000.0,
			seed: None,
		}
	}
}

impl RadialGraphConfig {
	pub fn validate(&self) -> Result<(), GraphError> {
		if !(self.shrink > 1.0) {
			return Err(GraphError::invalid_config("shrink", "must be greater than 1"));
		}
		if !(self.height > 0.0) {
			return Err(GraphError::invalid_config("height", "must be positive"));
		}
		if !(self.max_width > self.margin) {
			return Err(GraphError::invalid_config(
				"max_width",
				"must be larger than the margin",
			));
		}
		if !(self.jitter >= 0.0) {
			return Err(GraphError::invalid_config("jitter", "must not be negative"));
		}
		if !(self.amplitude >= 0.0) {
			return Err(GraphError::invalid_config("amplitude", "must not be negative"));
		}
		if !(self.period_ms > 0.0) {
			return Err(GraphError::invalid_config("period_ms", "must be positive"));
		}
		Ok(())
	}

	/// Canvas size for a viewport of the given width.
	pub fn canvas_size(&self, viewport_width: f64) -> Result<(f64, f64), GraphError> {
		let width = viewport_width.min(self.max_width) - self.margin;
		if !(width > 0.0) {
			return Err(GraphError::invalid_config(
				"viewport width",
				"too narrow for the margin",
			));
		}
		Ok((width, self.height))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_is_valid() {
		assert!(RadialGraphConfig::default().validate().is_ok());
	}

	#[test]
	fn canvas_width_is_capped_then_margined() {
		let config = RadialGraphConfig::default();
		assert_eq!(config.canvas_size(1600.0).unwrap(), (960.0, 700.0));
		assert_eq!(config.canvas_size(800.0).unwrap(), (760.0, 700.0));
	}

	#[test]
	fn narrow_viewport_is_rejected() {
		let config = RadialGraphConfig::default();
		assert!(matches!(
			config.canvas_size(30.0),
			Err(GraphError::InvalidConfig { .. })
		));
	}

	#[test]
	fn shrink_factor_must_exceed_one() {
		let config = RadialGraphConfig {
			shrink: 1.0,
			..Default::default()
		};
		assert!(matches!(
			config.validate(),
			Err(GraphError::InvalidConfig { field: "shrink", .. })
		));
	}

	#[test]
	fn negative_jitter_is_rejected() {
		let config = RadialGraphConfig {
			jitter: -1.0,
			..Default::default()
		};
		assert!(config.validate().is_err());
	}
}
