use chrono::{DateTime, FixedOffset};

/// Hierarchical data-model value handed to the projector.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DataValue {
	/// Value was never assigned.
	#[default]
	Undefined,
	/// Explicit null marker.
	Null,
	/// UTF-8 string scalar.
	String(Box<str>),
	/// Numeric scalar.
	Number(f64),
	/// Timestamp scalar with its original offset.
	DateTime(DateTime<FixedOffset>),
	/// Boolean scalar.
	Boolean(bool),
	/// Ordered collection of keyed, indexed, or annotated entries.
	List(DataList),
}

impl DataValue {
	/// Borrow the list payload when this value is a list.
	pub fn as_list(&self) -> Option<&DataList> {
		match self {
			Self::List(list) => Some(list),
			_ => None,
		}
	}
}

impl From<&str> for DataValue {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for DataValue {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<f64> for DataValue {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<bool> for DataValue {
	fn from(value: bool) -> Self {
		Self::Boolean(value)
	}
}

impl From<DateTime<FixedOffset>> for DataValue {
	fn from(value: DateTime<FixedOffset>) -> Self {
		Self::DateTime(value)
	}
}

impl From<DataList> for DataValue {
	fn from(value: DataList) -> Self {
		Self::List(value)
	}
}

/// One member of a [`DataList`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
	/// Member name when the entry was added by key.
	pub key: Option<Box<str>>,
	/// Entry payload.
	pub value: DataValue,
	/// Logical position recorded by the owning list.
	///
	/// This is not the traversal rank: removing an entry leaves a gap in
	/// the indices of the entries that follow it.
	pub index: usize,
	/// Annotation attached to this entry.
	pub metadata: Option<DataValue>,
}

impl Entry {
	/// Positional entry without key or metadata.
	pub fn new(index: usize, value: impl Into<DataValue>) -> Self {
		Self {
			key: None,
			value: value.into(),
			index,
			metadata: None,
		}
	}

	/// Keyed entry without metadata.
	pub fn keyed(index: usize, key: impl Into<Box<str>>, value: impl Into<DataValue>) -> Self {
		Self {
			key: Some(key.into()),
			..Self::new(index, value)
		}
	}

	/// Attach per-entry metadata.
	pub fn with_metadata(mut self, metadata: impl Into<DataValue>) -> Self {
		self.metadata = Some(metadata.into());
		self
	}
}

/// Ordered entry container with optional list-level metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataList {
	entries: Vec<Entry>,
	metadata: Option<Box<DataValue>>,
	next_index: usize,
}

impl DataList {
	/// Create an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a positional value at the next logical index.
	pub fn push(&mut self, value: impl Into<DataValue>) -> &mut Entry {
		let index = self.next_index;
		self.push_entry(Entry::new(index, value))
	}

	/// Append a keyed value at the next logical index.
	pub fn push_keyed(&mut self, key: impl Into<Box<str>>, value: impl Into<DataValue>) -> &mut Entry {
		let index = self.next_index;
		self.push_entry(Entry::keyed(index, key, value))
	}

	/// Append an entry with its recorded index kept as-is.
	pub fn push_entry(&mut self, entry: Entry) -> &mut Entry {
		self.next_index = self.next_index.max(entry.index.saturating_add(1));
		self.entries.push(entry);
		let last = self.entries.len() - 1;
		&mut self.entries[last]
	}

	/// Remove the entry at traversal `position` without renumbering the rest.
	pub fn remove(&mut self, position: usize) -> Option<Entry> {
		(position < self.entries.len()).then(|| self.entries.remove(position))
	}

	/// Entries in storage order.
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	/// Entry payloads in storage order.
	pub fn values(&self) -> impl Iterator<Item = &DataValue> {
		self.entries.iter().map(|entry| &entry.value)
	}

	/// First value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&DataValue> {
		self.entries.iter().find(|entry| entry.key.as_deref() == Some(key)).map(|entry| &entry.value)
	}

	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the list holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// List-level metadata.
	pub fn metadata(&self) -> Option<&DataValue> {
		self.metadata.as_deref()
	}

	/// Replace list-level metadata.
	pub fn set_metadata(&mut self, metadata: Option<DataValue>) {
		self.metadata = metadata.map(Box::new);
	}
}

impl<V: Into<DataValue>> FromIterator<V> for DataList {
	fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
		let mut list = Self::new();
		for value in iter {
			list.push(value);
		}
		list
	}
}
