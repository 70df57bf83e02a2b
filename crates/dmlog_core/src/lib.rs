//! Projection of hierarchical data-model values into structured logging form.

/// Data-model values, wrappers, classification, projection, and the logging sink.
pub mod datamodel;
