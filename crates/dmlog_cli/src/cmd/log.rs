use std::path::PathBuf;

use dmlog::datamodel::{Result, log_value};

use crate::cmd::util::load_document;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long, default_value = "document")]
	pub message: String,
	#[arg(long = "max-input-bytes")]
	pub max_input_bytes: Option<usize>,
}

/// Route a document through the tracing sink.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file: path,
		message,
		max_input_bytes,
	} = args;

	let (_, document) = load_document(&path, max_input_bytes)?;
	if !log_value(&message, document.as_any()) {
		tracing::warn!(path = %path.display(), "document root was not recognized by the projector");
	}

	Ok(())
}
