/// Root classification command.
pub mod classify;
/// Tracing sink command.
pub mod log;
/// Text rendering of lazy projections.
pub mod print;
/// Projection command.
pub mod project;
/// Shared command helpers.
pub mod util;
