use std::path::Path;

use dmlog::datamodel::{Compression, Document, DocumentOptions, Result, read_document};

/// Read a document, overriding the default input size limit when requested.
pub(crate) fn load_document(path: &Path, max_input_bytes: Option<usize>) -> Result<(Compression, Document)> {
	let mut options = DocumentOptions::default();
	if let Some(limit) = max_input_bytes {
		options.max_input_bytes = limit;
	}
	tracing::debug!(path = %path.display(), limit = options.max_input_bytes, "reading document");
	read_document(path, &options)
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json output: {err}"),
	}
}
