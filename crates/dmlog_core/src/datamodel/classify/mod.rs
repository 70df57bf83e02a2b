use crate::datamodel::projection::Scalar;
use crate::datamodel::walk::{Projected, project_list};
use crate::datamodel::{DataList, DataValue};

/// Kind tag of a [`DataValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// Undefined marker.
	Undefined,
	/// Null marker.
	Null,
	/// String scalar.
	String,
	/// Numeric scalar.
	Number,
	/// Timestamp scalar.
	DateTime,
	/// Boolean scalar.
	Boolean,
	/// Entry list.
	List,
}

impl ValueKind {
	/// Render kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Undefined => "undefined",
			Self::Null => "null",
			Self::String => "string",
			Self::Number => "number",
			Self::DateTime => "datetime",
			Self::Boolean => "boolean",
			Self::List => "list",
		}
	}
}

impl DataValue {
	/// Kind tag of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Undefined => ValueKind::Undefined,
			Self::Null => ValueKind::Null,
			Self::String(_) => ValueKind::String,
			Self::Number(_) => ValueKind::Number,
			Self::DateTime(_) => ValueKind::DateTime,
			Self::Boolean(_) => ValueKind::Boolean,
			Self::List(_) => ValueKind::List,
		}
	}
}

/// How a list is laid out in its projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStrategy {
	/// Keyed structure with `:(index)` sidecars; recorded indices are not `0..n`.
	IndexedStructure,
	/// Keyed structure; keys or metadata are present.
	Structure,
	/// Empty structure for a list with no entries.
	EmptyStructure,
	/// Positional sequence of values.
	Sequence,
}

impl ListStrategy {
	/// Render strategy as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::IndexedStructure => "indexed_structure",
			Self::Structure => "structure",
			Self::EmptyStructure => "empty_structure",
			Self::Sequence => "sequence",
		}
	}
}

/// Decide the projection layout of `list` from its entry shape.
///
/// Any entry whose recorded index differs from its traversal rank makes the
/// whole list indexed. Otherwise list metadata, entry keys, or entry metadata
/// select a keyed structure, an empty list becomes an empty structure, and a
/// dense anonymous list becomes a sequence.
pub fn list_strategy(list: &DataList) -> ListStrategy {
	let entries = list.entries();

	let strategy = if entries.iter().enumerate().any(|(position, entry)| entry.index != position) {
		ListStrategy::IndexedStructure
	} else if list.metadata().is_some() || entries.iter().any(|entry| entry.key.is_some() || entry.metadata.is_some()) {
		ListStrategy::Structure
	} else if entries.is_empty() {
		ListStrategy::EmptyStructure
	} else {
		ListStrategy::Sequence
	};

	tracing::trace!(strategy = strategy.as_str(), entries = entries.len(), "classified list");
	strategy
}

/// Project one value: scalars map to scalar leaves, lists are classified and walked lazily.
pub fn project_value(value: &DataValue) -> Projected<'_> {
	match value {
		DataValue::Undefined => Projected::Scalar(Scalar::Undefined),
		DataValue::Null => Projected::Scalar(Scalar::Null),
		DataValue::String(text) => Projected::Scalar(Scalar::String(text.clone())),
		DataValue::Number(number) => Projected::Scalar(Scalar::Number(*number)),
		DataValue::DateTime(stamp) => Projected::Scalar(Scalar::DateTime(*stamp)),
		DataValue::Boolean(flag) => Projected::Scalar(Scalar::Boolean(*flag)),
		DataValue::List(list) => project_list(list, list_strategy(list)),
	}
}

#[cfg(test)]
mod tests;
