use std::any::Any;

use crate::datamodel::classify::{list_strategy, project_value};
use crate::datamodel::projection::Scalar;
use crate::datamodel::walk::{Projected, project_list};
use crate::datamodel::{DataList, DataValue, EventDescriptor, EventName, Identifier, LazyValue};

/// Recognized input borrowed from an opaque logging argument.
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
	/// Plain data-model value.
	Value(&'a DataValue),
	/// Bare entry list.
	List(&'a DataList),
	/// Deferred value; forced before classification.
	Lazy(&'a LazyValue),
	/// Identifier; projects to its text.
	Identifier(&'a Identifier),
	/// Event name; projects to its dotted rendering.
	EventName(&'a EventName),
	/// Event descriptor; projects to its rendering.
	EventDescriptor(&'a EventDescriptor),
}

impl<'a> Subject<'a> {
	/// Match an opaque value against the recognized types.
	pub fn from_any(value: &'a dyn Any) -> Option<Self> {
		if let Some(list) = value.downcast_ref::<DataList>() {
			return Some(Self::List(list));
		}
		if let Some(value) = value.downcast_ref::<DataValue>() {
			return Some(Self::Value(value));
		}
		if let Some(lazy) = value.downcast_ref::<LazyValue>() {
			return Some(Self::Lazy(lazy));
		}
		if let Some(identifier) = value.downcast_ref::<Identifier>() {
			return Some(Self::Identifier(identifier));
		}
		if let Some(name) = value.downcast_ref::<EventName>() {
			return Some(Self::EventName(name));
		}
		if let Some(descriptor) = value.downcast_ref::<EventDescriptor>() {
			return Some(Self::EventDescriptor(descriptor));
		}
		None
	}

	/// Unwrap indirections and project the canonical value.
	pub fn project(self) -> Projected<'a> {
		match self {
			Self::Value(value) => project_value(value),
			Self::List(list) => project_list(list, list_strategy(list)),
			Self::Lazy(lazy) => project_value(lazy.value()),
			Self::Identifier(identifier) => Projected::Scalar(Scalar::String(identifier.as_str().into())),
			Self::EventName(name) => Projected::Scalar(Scalar::String(name.to_string().into_boxed_str())),
			Self::EventDescriptor(descriptor) => Projected::Scalar(Scalar::String(descriptor.to_string().into_boxed_str())),
		}
	}
}

/// Project an opaque logging argument when its type is recognized.
///
/// `None` means the value should fall back to the host's default rendering;
/// it is not an error.
pub fn try_project(value: &dyn Any) -> Option<Projected<'_>> {
	let Some(subject) = Subject::from_any(value) else {
		tracing::debug!("unrecognized value type, deferring to default rendering");
		return None;
	};
	Some(subject.project())
}

#[cfg(test)]
mod tests;
