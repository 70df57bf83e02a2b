use std::path::PathBuf;

use dmlog::datamodel::{DataValue, Document, Result, list_strategy};

use crate::cmd::util::{emit_json, load_document};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-input-bytes")]
	pub max_input_bytes: Option<usize>,
}

/// Report the resolved kind of a document root and, for lists, the projection strategy.
pub fn run(args: Args) -> Result<()> {
	let Args { file: path, json, max_input_bytes } = args;

	let (_, document) = load_document(&path, max_input_bytes)?;
	let resolved: Option<&DataValue> = match &document {
		Document::Value(value) => Some(value),
		Document::Lazy(lazy) => Some(lazy.value()),
		Document::Identifier(_) | Document::EventName(_) | Document::EventDescriptor(_) => None,
	};

	let kind = resolved.map_or("string", |value| value.kind().as_str());
	let list = resolved.and_then(DataValue::as_list);
	let payload = ClassifyJson {
		path: path.display().to_string(),
		root: document.kind_label(),
		kind,
		strategy: list.map(|list| list_strategy(list).as_str()),
		entries: list.map(|list| list.len()),
		has_metadata: list.map(|list| list.metadata().is_some()),
	};

	if json {
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", payload.path);
	println!("root: {}", payload.root);
	println!("kind: {}", payload.kind);
	if let (Some(strategy), Some(entries), Some(has_metadata)) = (payload.strategy, payload.entries, payload.has_metadata) {
		println!("strategy: {strategy}");
		println!("entries: {entries}");
		println!("has_metadata: {has_metadata}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ClassifyJson {
	path: String,
	root: &'static str,
	kind: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	strategy: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	entries: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	has_metadata: Option<bool>,
}
