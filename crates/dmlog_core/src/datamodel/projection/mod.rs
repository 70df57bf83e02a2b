use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Largest magnitude for which every integral `f64` is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Scalar leaf of a projection.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	/// Projected undefined value.
	Undefined,
	/// Projected null value.
	Null,
	/// String scalar.
	String(Box<str>),
	/// Numeric scalar.
	Number(f64),
	/// Timestamp scalar.
	DateTime(DateTime<FixedOffset>),
	/// Boolean scalar.
	Boolean(bool),
	/// Raw entry index emitted in `:(index)` sidecar members.
	Index(usize),
}

impl Serialize for Scalar {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Undefined | Self::Null => serializer.serialize_unit(),
			Self::String(value) => serializer.serialize_str(value),
			Self::Number(value) if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER => serializer.serialize_i64(*value as i64),
			Self::Number(value) => serializer.serialize_f64(*value),
			Self::DateTime(value) => serializer.serialize_str(&value.to_rfc3339()),
			Self::Boolean(value) => serializer.serialize_bool(*value),
			Self::Index(value) => serializer.serialize_u64(*value as u64),
		}
	}
}

/// Named member of a projected structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
	/// Synthesized member name.
	pub name: String,
	/// Projected member value.
	pub value: Projection,
}

/// Materialized projection in the sink's three generic shapes.
///
/// Structures keep every member in emission order, including members whose
/// names collide. Lookups through [`Projection::get`] and map-shaped
/// renderings resolve collisions last-write-wins.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
	/// Scalar leaf.
	Scalar(Scalar),
	/// Ordered name/value members.
	Structure(Vec<Property>),
	/// Ordered positional values.
	Sequence(Vec<Projection>),
}

impl Projection {
	/// Stable lowercase shape label.
	pub fn shape(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::Structure(_) => "structure",
			Self::Sequence(_) => "sequence",
		}
	}

	/// Borrow the scalar leaf.
	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			Self::Scalar(scalar) => Some(scalar),
			_ => None,
		}
	}

	/// Borrow structure members in emission order.
	pub fn as_structure(&self) -> Option<&[Property]> {
		match self {
			Self::Structure(members) => Some(members),
			_ => None,
		}
	}

	/// Borrow sequence items in order.
	pub fn as_sequence(&self) -> Option<&[Projection]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Last structure member named `name`.
	pub fn get(&self, name: &str) -> Option<&Projection> {
		self.as_structure()?.iter().rev().find(|member| member.name == name).map(|member| &member.value)
	}

	/// All structure members named `name`, in emission order.
	pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Projection> + 'a {
		self.as_structure()
			.unwrap_or_default()
			.iter()
			.filter(move |member| member.name == name)
			.map(|member| &member.value)
	}

	/// Member names in emission order; empty for non-structures.
	pub fn member_names(&self) -> Vec<&str> {
		self.as_structure()
			.unwrap_or_default()
			.iter()
			.map(|member| member.name.as_str())
			.collect()
	}
}

impl Serialize for Projection {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Scalar(scalar) => scalar.serialize(serializer),
			Self::Structure(members) => {
				let mut map = serializer.serialize_map(Some(members.len()))?;
				for member in members {
					map.serialize_entry(&member.name, &member.value)?;
				}
				map.end()
			}
			Self::Sequence(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
		}
	}
}

/// Compact JSON rendering.
impl fmt::Display for Projection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
		f.write_str(&text)
	}
}

#[cfg(test)]
mod tests;
