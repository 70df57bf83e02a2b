use chrono::DateTime;

use crate::datamodel::projection::Scalar;
use crate::datamodel::{DataList, DataValue, Entry, ListStrategy, Projected, ValueKind, list_strategy, project_value};

fn list_of(entries: Vec<Entry>) -> DataList {
	let mut list = DataList::new();
	for entry in entries {
		list.push_entry(entry);
	}
	list
}

#[test]
fn dense_anonymous_list_is_sequence() {
	let list: DataList = [1.0, 2.0, 3.0].into_iter().collect();
	assert_eq!(list_strategy(&list), ListStrategy::Sequence);
}

#[test]
fn index_gap_forces_indexed_structure() {
	let list = list_of(vec![Entry::new(0, "a"), Entry::new(2, "b")]);
	assert_eq!(list_strategy(&list), ListStrategy::IndexedStructure);
}

#[test]
fn list_not_starting_at_zero_is_indexed() {
	let list = list_of(vec![Entry::new(1, "a")]);
	assert_eq!(list_strategy(&list), ListStrategy::IndexedStructure);
}

#[test]
fn removal_makes_whole_list_indexed() {
	let mut list: DataList = ["a", "b", "c"].into_iter().collect();
	list.remove(0);
	assert_eq!(list_strategy(&list), ListStrategy::IndexedStructure);
}

#[test]
fn index_anomaly_takes_precedence_over_keys_and_metadata() {
	let mut list = list_of(vec![Entry::keyed(0, "a", 1.0), Entry::keyed(3, "b", 2.0).with_metadata("note")]);
	list.set_metadata(Some("list-note".into()));
	assert_eq!(list_strategy(&list), ListStrategy::IndexedStructure);
}

#[test]
fn list_metadata_on_dense_list_selects_structure() {
	let mut list: DataList = [1.0, 2.0].into_iter().collect();
	list.set_metadata(Some(DataValue::Boolean(true)));
	assert_eq!(list_strategy(&list), ListStrategy::Structure);
}

#[test]
fn any_key_selects_structure() {
	let mut list: DataList = [1.0, 2.0].into_iter().collect();
	list.push_keyed("named", 3.0);
	assert_eq!(list_strategy(&list), ListStrategy::Structure);
}

#[test]
fn blank_key_still_counts_as_key() {
	let list = list_of(vec![Entry::keyed(0, "", 1.0)]);
	assert_eq!(list_strategy(&list), ListStrategy::Structure);
}

#[test]
fn entry_metadata_selects_structure() {
	let list = list_of(vec![Entry::new(0, 1.0), Entry::new(1, 2.0).with_metadata(42.0)]);
	assert_eq!(list_strategy(&list), ListStrategy::Structure);
}

#[test]
fn empty_list_is_empty_structure() {
	assert_eq!(list_strategy(&DataList::new()), ListStrategy::EmptyStructure);
}

#[test]
fn empty_list_with_metadata_is_keyed_structure() {
	let mut list = DataList::new();
	list.set_metadata(Some("only-meta".into()));
	assert_eq!(list_strategy(&list), ListStrategy::Structure);
}

#[test]
fn scalars_project_to_matching_leaves() {
	let stamp = DateTime::parse_from_rfc3339("2020-01-02T03:04:05Z").expect("valid timestamp");
	let cases = [
		(DataValue::Undefined, Scalar::Undefined),
		(DataValue::Null, Scalar::Null),
		(DataValue::from("text"), Scalar::String("text".into())),
		(DataValue::Number(1.5), Scalar::Number(1.5)),
		(DataValue::DateTime(stamp), Scalar::DateTime(stamp)),
		(DataValue::Boolean(false), Scalar::Boolean(false)),
	];

	for (value, expected) in cases {
		match project_value(&value) {
			Projected::Scalar(scalar) => assert_eq!(scalar, expected),
			other => panic!("expected scalar for {value:?}, got {}", other.shape()),
		}
	}
}

#[test]
fn kind_labels_are_stable() {
	assert_eq!(DataValue::Undefined.kind().as_str(), "undefined");
	assert_eq!(DataValue::from(DataList::new()).kind(), ValueKind::List);
	assert_eq!(DataValue::Number(0.0).kind().as_str(), "number");
	assert_eq!(ListStrategy::IndexedStructure.as_str(), "indexed_structure");
}
