use std::any::Any;

use crate::datamodel::dispatch::try_project;
use crate::datamodel::projection::Projection;

/// Project `value` and record it as a structured `tracing` event.
///
/// Returns `false` without recording anything when the value's type is not
/// recognized, leaving it to the caller's default rendering.
pub fn log_value(message: &str, value: &dyn Any) -> bool {
	let Some(projected) = try_project(value) else {
		return false;
	};
	// Fields are recorded once per event, so the walk is drained here rather than streamed.
	log_projection(message, &projected.into_projection());
	true
}

/// Record an already materialized projection at INFO.
pub fn log_projection(message: &str, projection: &Projection) {
	tracing::info!(shape = projection.shape(), value = %projection, "{message}");
}

#[cfg(test)]
mod tests;
