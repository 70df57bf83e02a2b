use std::path::PathBuf;

use dmlog::datamodel::{Projection, Result};

use crate::cmd::print::{PrintOptions, render_projected};
use crate::cmd::util::{emit_json, load_document};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-input-bytes")]
	pub max_input_bytes: Option<usize>,
}

/// Project a document and print it as a text tree or JSON envelope.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file: path,
		json,
		max_items,
		max_depth,
		max_input_bytes,
	} = args;

	let (compression, document) = load_document(&path, max_input_bytes)?;
	let projected = document.subject().project();

	if json {
		let value = projected.into_projection();
		emit_json(&ProjectJson {
			path: path.display().to_string(),
			compression: compression.as_str(),
			root: document.kind_label(),
			shape: value.shape(),
			value,
		});
		return Ok(());
	}

	let mut print = PrintOptions::default();
	if let Some(max_items) = max_items {
		print.max_items = max_items;
		print.max_members = max_items;
	}
	if let Some(max_depth) = max_depth {
		print.max_depth = max_depth;
	}

	println!("path: {}", path.display());
	println!("compression: {}", compression.as_str());
	println!("root: {}", document.kind_label());
	println!("shape: {}", projected.shape());
	println!("value:");
	print!("{}", render_projected(projected, 2, print));

	Ok(())
}

#[derive(serde::Serialize)]
struct ProjectJson {
	path: String,
	compression: &'static str,
	root: &'static str,
	shape: &'static str,
	value: Projection,
}
