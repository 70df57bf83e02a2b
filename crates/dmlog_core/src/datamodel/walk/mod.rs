use std::iter::FusedIterator;
use std::slice;

use crate::datamodel::classify::{ListStrategy, project_value};
use crate::datamodel::name::{INDEX_SUFFIX, LIST_META_NAME, META_SUFFIX, member_name};
use crate::datamodel::projection::{Projection, Property, Scalar};
use crate::datamodel::{DataList, DataValue, Entry};

/// Lazily walked projection borrowing its source value.
///
/// Structure and sequence payloads are single-pass iterators: members are
/// produced one at a time in entry order and nested lists are only walked
/// when their member is reached.
#[derive(Debug)]
pub enum Projected<'a> {
	/// Scalar leaf.
	Scalar(Scalar),
	/// Named members.
	Structure(Members<'a>),
	/// Positional values.
	Sequence(Values<'a>),
}

impl Projected<'_> {
	/// Stable lowercase shape label.
	pub fn shape(&self) -> &'static str {
		match self {
			Self::Scalar(_) => "scalar",
			Self::Structure(_) => "structure",
			Self::Sequence(_) => "sequence",
		}
	}

	/// Drain the walk into an owned projection tree.
	pub fn into_projection(self) -> Projection {
		match self {
			Self::Scalar(scalar) => Projection::Scalar(scalar),
			Self::Structure(members) => Projection::Structure(
				members
					.map(|member| Property {
						name: member.name,
						value: member.value.into_projection(),
					})
					.collect(),
			),
			Self::Sequence(values) => Projection::Sequence(values.map(Projected::into_projection).collect()),
		}
	}
}

/// One named member produced by [`Members`].
#[derive(Debug)]
pub struct Member<'a> {
	/// Synthesized member name.
	pub name: String,
	/// Projected member value.
	pub value: Projected<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
	Value,
	Index,
	Meta,
}

/// Member iterator for keyed list projections.
#[derive(Debug)]
pub struct Members<'a> {
	entries: slice::Iter<'a, Entry>,
	show_index: bool,
	list_meta: Option<&'a DataValue>,
	current: Option<&'a Entry>,
	name: String,
	step: Step,
}

impl<'a> Members<'a> {
	fn new(list: &'a DataList, show_index: bool) -> Self {
		Self {
			entries: list.entries().iter(),
			show_index,
			list_meta: list.metadata(),
			current: None,
			name: String::new(),
			step: Step::Value,
		}
	}

	fn empty() -> Self {
		let none: &'a [Entry] = &[];
		Self {
			entries: none.iter(),
			show_index: false,
			list_meta: None,
			current: None,
			name: String::new(),
			step: Step::Value,
		}
	}
}

impl<'a> Iterator for Members<'a> {
	type Item = Member<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let Some(entry) = self.current else {
				let Some(entry) = self.entries.next() else {
					return self.list_meta.take().map(|meta| Member {
						name: LIST_META_NAME.to_owned(),
						value: project_value(meta),
					});
				};
				self.current = Some(entry);
				self.name = member_name(entry.key.as_deref()).into_owned();
				self.step = Step::Value;
				continue;
			};

			match self.step {
				Step::Value => {
					self.step = Step::Index;
					return Some(Member {
						name: self.name.clone(),
						value: project_value(&entry.value),
					});
				}
				Step::Index => {
					self.step = Step::Meta;
					if self.show_index {
						return Some(Member {
							name: format!("{}{INDEX_SUFFIX}", self.name),
							value: Projected::Scalar(Scalar::Index(entry.index)),
						});
					}
				}
				Step::Meta => {
					self.current = None;
					if let Some(meta) = entry.metadata.as_ref() {
						return Some(Member {
							name: format!("{}{META_SUFFIX}", self.name),
							value: project_value(meta),
						});
					}
				}
			}
		}
	}
}

impl FusedIterator for Members<'_> {}

/// Value iterator for positional list projections.
#[derive(Debug)]
pub struct Values<'a> {
	entries: slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Values<'a> {
	type Item = Projected<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		self.entries.next().map(|entry| project_value(&entry.value))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.entries.size_hint()
	}
}

impl ExactSizeIterator for Values<'_> {}

impl FusedIterator for Values<'_> {}

/// Walk `list` with an already decided strategy.
///
/// [`ListStrategy::EmptyStructure`] always yields no members; list metadata
/// is only emitted by the two keyed strategies.
pub fn project_list(list: &DataList, strategy: ListStrategy) -> Projected<'_> {
	match strategy {
		ListStrategy::IndexedStructure => Projected::Structure(Members::new(list, true)),
		ListStrategy::Structure => Projected::Structure(Members::new(list, false)),
		ListStrategy::EmptyStructure => Projected::Structure(Members::empty()),
		ListStrategy::Sequence => Projected::Sequence(Values {
			entries: list.entries().iter(),
		}),
	}
}
