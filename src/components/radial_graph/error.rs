use thiserror::Error;

/// Failures while building or mounting a radial graph view.
#[derive(Debug, Error)]
pub enum GraphError {
	/// The dataset has no outer items to place around the center.
	#[error("radial graph needs at least one outer item")]
	EmptyItems,

	/// A config value is out of range.
	#[error("invalid config value for `{field}`: {reason}")]
	InvalidConfig {
		/// Offending setting
		field: &'static str,
		/// What the setting must satisfy
		reason: &'static str,
	},

	/// Nothing to attach the app to.
	#[error("no container element with id `{0}`")]
	ContainerNotFound(String),

	/// Running outside a browser, or the window is gone.
	#[error("browser window is not available")]
	NoWindow,

	/// Canvas or 2D context could not be set up.
	#[error("canvas setup failed: {0}")]
	Canvas(String),
}

impl GraphError {
	/// Out-of-range `field`, with the rule it breaks.
	pub fn invalid_config(field: &'static str, reason: &'static str) -> Self {
		Self::InvalidConfig { field, reason }
	}

	/// Wrap a JS-side failure from canvas or context setup.
	pub fn canvas(err: impl std::fmt::Debug) -> Self {
		Self::Canvas(format!("{err:?}"))
	}
}
