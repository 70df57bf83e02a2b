mod classify;
mod compression;
mod dispatch;
mod document;
mod error;
mod name;
mod projection;
mod sink;
mod value;
mod walk;
mod wrap;

/// List strategy decision and value classification entry points.
pub use classify::{ListStrategy, ValueKind, list_strategy, project_value};
/// Compression detection result and decoder.
pub use compression::{Compression, ZSTD_MAGIC, decode_bytes};
/// Opaque-value dispatch boundary.
pub use dispatch::{Subject, try_project};
/// Input document decoding.
pub use document::{Document, DocumentOptions, decode_document, read_document};
/// Error and result aliases.
pub use error::{DmError, Result};
/// Member name synthesis for entry keys.
pub use name::member_name;
/// Materialized projection tree.
pub use projection::{Projection, Property, Scalar};
/// Tracing sink entry points.
pub use sink::{log_projection, log_value};
/// Hierarchical value model.
pub use value::{DataList, DataValue, Entry};
/// Lazy projection walk types.
pub use walk::{Member, Members, Projected, Values, project_list};
/// Indirection wrapper types.
pub use wrap::{EventDescriptor, EventName, Identifier, LazyValue};
