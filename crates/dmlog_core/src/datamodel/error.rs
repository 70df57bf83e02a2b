use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DmError>;

/// Errors produced while reading documents and building data-model values.
///
/// Projection itself never fails: every [`DataValue`](crate::datamodel::DataValue)
/// kind is covered, and unrecognized opaque inputs are reported as `None`
/// rather than as an error.
#[derive(Debug, Error)]
pub enum DmError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Raw input exceeded configured size limit.
	#[error("input of {len} bytes exceeds limit {limit} bytes")]
	InputTooLarge {
		/// Input length in bytes.
		len: usize,
		/// Maximum allowed input bytes.
		limit: usize,
	},
	/// Tagged document node named a kind outside the closed value model.
	#[error("unknown value kind {kind:?} at {at}")]
	UnknownValueKind {
		/// Offending `$type` tag.
		kind: String,
		/// Document path of the node.
		at: String,
	},
	/// Wrapper kind appeared below the document root.
	#[error("wrapper kind {kind:?} is only allowed at the document root (found at {at})")]
	WrapperNotAllowed {
		/// Wrapper `$type` tag.
		kind: &'static str,
		/// Document path of the node.
		at: String,
	},
	/// Document node was structurally malformed.
	#[error("invalid document at {at}: {reason}")]
	InvalidDocument {
		/// Document path of the node.
		at: String,
		/// Human-readable failure description.
		reason: String,
	},
	/// Identifier was empty or contained whitespace.
	#[error("invalid identifier: {value:?}")]
	InvalidIdentifier {
		/// Rejected identifier text.
		value: String,
	},
	/// Event name had an empty or whitespace-bearing segment.
	#[error("invalid event name: {value:?}")]
	InvalidEventName {
		/// Rejected event name text.
		value: String,
	},
	/// Event descriptor was empty or contained whitespace.
	#[error("invalid event descriptor: {value:?}")]
	InvalidEventDescriptor {
		/// Rejected descriptor text.
		value: String,
	},
}
