use std::any::Any;
use std::fs;
use std::path::Path;

use chrono::DateTime;
use serde_json::{Map, Value as JsonValue};

use crate::datamodel::compression::{Compression, decode_bytes};
use crate::datamodel::dispatch::Subject;
use crate::datamodel::{DataList, DataValue, DmError, Entry, EventDescriptor, EventName, Identifier, LazyValue, Result};

/// Reserved object key carrying an explicit node kind.
pub const TYPE_TAG: &str = "$type";

const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

/// Limits applied while reading input documents.
#[derive(Debug, Clone, Copy)]
pub struct DocumentOptions {
	/// Maximum raw or decompressed document size.
	pub max_input_bytes: usize,
}

impl Default for DocumentOptions {
	fn default() -> Self {
		Self {
			max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
		}
	}
}

/// Decoded document subject.
#[derive(Debug)]
pub enum Document {
	/// Plain data-model value.
	Value(DataValue),
	/// Deferred value wrapping the nested document value.
	Lazy(LazyValue),
	/// Identifier wrapper.
	Identifier(Identifier),
	/// Event name wrapper.
	EventName(EventName),
	/// Event descriptor wrapper.
	EventDescriptor(EventDescriptor),
}

impl Document {
	/// Stable lowercase label for the document's root kind.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Value(value) => value.kind().as_str(),
			Self::Lazy(_) => "lazy",
			Self::Identifier(_) => "identifier",
			Self::EventName(_) => "event",
			Self::EventDescriptor(_) => "descriptor",
		}
	}

	/// Borrow the subject as an opaque logging argument.
	pub fn as_any(&self) -> &dyn Any {
		match self {
			Self::Value(value) => value,
			Self::Lazy(lazy) => lazy,
			Self::Identifier(identifier) => identifier,
			Self::EventName(name) => name,
			Self::EventDescriptor(descriptor) => descriptor,
		}
	}

	/// Borrow the subject for projection.
	pub fn subject(&self) -> Subject<'_> {
		match self {
			Self::Value(value) => Subject::Value(value),
			Self::Lazy(lazy) => Subject::Lazy(lazy),
			Self::Identifier(identifier) => Subject::Identifier(identifier),
			Self::EventName(name) => Subject::EventName(name),
			Self::EventDescriptor(descriptor) => Subject::EventDescriptor(descriptor),
		}
	}
}

/// Read a JSON document from disk, decompressing zstd input when detected.
pub fn read_document(path: impl AsRef<Path>, options: &DocumentOptions) -> Result<(Compression, Document)> {
	let raw = fs::read(path)?;
	let (compression, bytes) = decode_bytes(raw, options.max_input_bytes)?;
	let json: JsonValue = serde_json::from_slice(&bytes)?;
	Ok((compression, decode_document(&json)?))
}

/// Decode a parsed JSON document.
///
/// Wrapper kinds (`identifier`, `event`, `descriptor`, `lazy`) are only
/// accepted at the root; everything below decodes to a [`DataValue`].
pub fn decode_document(json: &JsonValue) -> Result<Document> {
	let at = "$";
	let Some((map, tag)) = tagged(json, at)? else {
		return decode_value(json, at).map(Document::Value);
	};

	match tag {
		"identifier" => Ok(Document::Identifier(Identifier::new(required_str(map, "value", at)?)?)),
		"event" => Ok(Document::EventName(EventName::parse(required_str(map, "value", at)?)?)),
		"descriptor" => Ok(Document::EventDescriptor(EventDescriptor::new(required_str(map, "value", at)?)?)),
		"lazy" => {
			let value = decode_value(required(map, "value", at)?, &child(at, "value"))?;
			Ok(Document::Lazy(LazyValue::new(move || value.clone())))
		}
		_ => decode_tagged(map, tag, at).map(Document::Value),
	}
}

fn decode_value(json: &JsonValue, at: &str) -> Result<DataValue> {
	if let Some((map, tag)) = tagged(json, at)? {
		return decode_tagged(map, tag, at);
	}

	match json {
		JsonValue::Null => Ok(DataValue::Null),
		JsonValue::Bool(flag) => Ok(DataValue::Boolean(*flag)),
		JsonValue::Number(number) => number
			.as_f64()
			.map(DataValue::Number)
			.ok_or_else(|| invalid(at, format!("number {number} is not representable"))),
		JsonValue::String(text) => Ok(DataValue::from(text.as_str())),
		JsonValue::Array(items) => {
			let mut list = DataList::new();
			for (idx, item) in items.iter().enumerate() {
				list.push(decode_value(item, &format!("{at}[{idx}]"))?);
			}
			Ok(DataValue::List(list))
		}
		JsonValue::Object(map) => {
			let mut list = DataList::new();
			for (key, item) in map {
				list.push_keyed(key.as_str(), decode_value(item, &child(at, key))?);
			}
			Ok(DataValue::List(list))
		}
	}
}

fn decode_tagged(map: &Map<String, JsonValue>, tag: &str, at: &str) -> Result<DataValue> {
	match tag {
		"undefined" => Ok(DataValue::Undefined),
		"datetime" => {
			let text = required_str(map, "value", at)?;
			DateTime::parse_from_rfc3339(text)
				.map(DataValue::DateTime)
				.map_err(|err| invalid(at, format!("invalid RFC 3339 timestamp {text:?}: {err}")))
		}
		"list" => decode_list(map, at).map(DataValue::List),
		"identifier" => Err(DmError::WrapperNotAllowed { kind: "identifier", at: at.to_owned() }),
		"event" => Err(DmError::WrapperNotAllowed { kind: "event", at: at.to_owned() }),
		"descriptor" => Err(DmError::WrapperNotAllowed { kind: "descriptor", at: at.to_owned() }),
		"lazy" => Err(DmError::WrapperNotAllowed { kind: "lazy", at: at.to_owned() }),
		other => Err(DmError::UnknownValueKind {
			kind: other.to_owned(),
			at: at.to_owned(),
		}),
	}
}

fn decode_list(map: &Map<String, JsonValue>, at: &str) -> Result<DataList> {
	let entries_at = child(at, "entries");
	let entries = required(map, "entries", at)?
		.as_array()
		.ok_or_else(|| invalid(&entries_at, "expected an array of entries"))?;

	let mut list = DataList::new();
	for (position, item) in entries.iter().enumerate() {
		let entry_at = format!("{entries_at}[{position}]");
		list.push_entry(decode_entry(item, position, &entry_at)?);
	}

	if let Some(meta) = map.get("meta") {
		list.set_metadata(Some(decode_value(meta, &child(at, "meta"))?));
	}

	Ok(list)
}

fn decode_entry(json: &JsonValue, position: usize, at: &str) -> Result<Entry> {
	let map = json.as_object().ok_or_else(|| invalid(at, "expected an entry object"))?;

	let key = match map.get("key") {
		None | Some(JsonValue::Null) => None,
		Some(JsonValue::String(key)) => Some(key.as_str().into()),
		Some(_) => return Err(invalid(&child(at, "key"), "expected a string or null")),
	};

	let index = match map.get("index") {
		None => position,
		Some(raw) => raw
			.as_u64()
			.and_then(|value| usize::try_from(value).ok())
			.ok_or_else(|| invalid(&child(at, "index"), "expected a non-negative integer"))?,
	};

	let value = decode_value(required(map, "value", at)?, &child(at, "value"))?;
	let metadata = map.get("meta").map(|meta| decode_value(meta, &child(at, "meta"))).transpose()?;

	Ok(Entry { key, value, index, metadata })
}

fn tagged<'a>(json: &'a JsonValue, at: &str) -> Result<Option<(&'a Map<String, JsonValue>, &'a str)>> {
	let JsonValue::Object(map) = json else {
		return Ok(None);
	};
	let Some(tag) = map.get(TYPE_TAG) else {
		return Ok(None);
	};
	let tag = tag.as_str().ok_or_else(|| invalid(&child(at, TYPE_TAG), "expected a string"))?;
	Ok(Some((map, tag)))
}

fn required<'a>(map: &'a Map<String, JsonValue>, key: &str, at: &str) -> Result<&'a JsonValue> {
	map.get(key).ok_or_else(|| invalid(at, format!("missing `{key}`")))
}

fn required_str<'a>(map: &'a Map<String, JsonValue>, key: &str, at: &str) -> Result<&'a str> {
	required(map, key, at)?
		.as_str()
		.ok_or_else(|| invalid(&child(at, key), "expected a string"))
}

fn child(at: &str, key: &str) -> String {
	format!("{at}.{key}")
}

fn invalid(at: &str, reason: impl Into<String>) -> DmError {
	DmError::InvalidDocument {
		at: at.to_owned(),
		reason: reason.into(),
	}
}
