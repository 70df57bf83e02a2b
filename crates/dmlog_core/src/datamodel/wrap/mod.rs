use std::fmt;
use std::sync::OnceLock;

use crate::datamodel::{DataValue, DmError, Result};

/// Validated identifier; projects to its string value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(Box<str>);

impl Identifier {
	/// Build an identifier, rejecting empty text and embedded whitespace.
	pub fn new(value: impl Into<Box<str>>) -> Result<Self> {
		let value = value.into();
		if value.is_empty() || value.chars().any(char::is_whitespace) {
			return Err(DmError::InvalidIdentifier { value: value.into_string() });
		}
		Ok(Self(value))
	}

	/// Identifier text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Dot-separated event name such as `done.state.s1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventName {
	parts: Vec<Box<str>>,
}

impl EventName {
	/// Parse a dotted event name; every segment must be non-empty and whitespace-free.
	pub fn parse(value: &str) -> Result<Self> {
		let parts: Vec<Box<str>> = value.split('.').map(Box::from).collect();
		if parts.iter().any(|part| part.is_empty() || part.chars().any(char::is_whitespace)) {
			return Err(DmError::InvalidEventName { value: value.to_owned() });
		}
		Ok(Self { parts })
	}

	/// Name segments in order.
	pub fn parts(&self) -> impl Iterator<Item = &str> {
		self.parts.iter().map(AsRef::as_ref)
	}
}

impl fmt::Display for EventName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, part) in self.parts.iter().enumerate() {
			if idx > 0 {
				f.write_str(".")?;
			}
			f.write_str(part)?;
		}
		Ok(())
	}
}

/// Event-matching descriptor such as `error.*` or `*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventDescriptor(Box<str>);

impl EventDescriptor {
	/// Build a descriptor, rejecting empty text and embedded whitespace.
	pub fn new(value: impl Into<Box<str>>) -> Result<Self> {
		let value = value.into();
		if value.is_empty() || value.chars().any(char::is_whitespace) {
			return Err(DmError::InvalidEventDescriptor { value: value.into_string() });
		}
		Ok(Self(value))
	}

	/// Whether `name` is matched by this descriptor.
	///
	/// `*` matches everything; otherwise the descriptor's segments (with a
	/// trailing `.*` or `.` dropped) must prefix the name's segments.
	pub fn matches(&self, name: &EventName) -> bool {
		if &*self.0 == "*" {
			return true;
		}
		let prefix = self.0.strip_suffix(".*").or_else(|| self.0.strip_suffix('.')).unwrap_or(&*self.0);
		let mut names = name.parts();
		prefix.split('.').all(|segment| names.next() == Some(segment))
	}
}

impl fmt::Display for EventDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

type Init = Box<dyn Fn() -> DataValue + Send + Sync>;

/// Deferred value computed on first access and then kept.
pub struct LazyValue {
	init: Option<Init>,
	cell: OnceLock<DataValue>,
}

impl LazyValue {
	/// Defer `init` until the value is first requested.
	pub fn new(init: impl Fn() -> DataValue + Send + Sync + 'static) -> Self {
		Self {
			init: Some(Box::new(init)),
			cell: OnceLock::new(),
		}
	}

	/// Already-evaluated lazy value.
	pub fn ready(value: DataValue) -> Self {
		Self {
			init: None,
			cell: OnceLock::from(value),
		}
	}

	/// Force and borrow the underlying value.
	pub fn value(&self) -> &DataValue {
		self.cell
			.get_or_init(|| self.init.as_ref().map_or(DataValue::Undefined, |init| init()))
	}

	/// Whether the value has been forced.
	pub fn is_forced(&self) -> bool {
		self.cell.get().is_some()
	}
}

impl fmt::Debug for LazyValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LazyValue").field("value", &self.cell.get()).finish_non_exhaustive()
	}
}
