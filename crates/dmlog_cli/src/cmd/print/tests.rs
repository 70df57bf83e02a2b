use dmlog::datamodel::{DataList, DataValue, Entry, project_value};

use super::{PrintOptions, render_projected};

fn render(value: &DataValue, options: PrintOptions) -> String {
	render_projected(project_value(value), 0, options)
}

#[test]
fn renders_keyed_structure_with_sidecars() {
	let mut list = DataList::new();
	list.push_entry(Entry::keyed(0, "a", "x"));
	list.push_entry(Entry::keyed(1, "b", "y").with_metadata(42.0));

	let text = render(&DataValue::List(list), PrintOptions::default());
	assert_eq!(text, "{\n  a = \"x\"\n  b = \"y\"\n  b:(meta) = 42\n}\n");
}

#[test]
fn renders_nested_sequence_under_member() {
	let mut list = DataList::new();
	list.push_keyed("pair", [1.0, 2.0].into_iter().collect::<DataList>());

	let text = render(&DataValue::List(list), PrintOptions::default());
	assert_eq!(text, "{\n  pair =\n    [\n      1\n      2\n    ]\n}\n");
}

#[test]
fn truncates_long_sequences_and_counts_rest() {
	let list: DataList = (0..5).map(f64::from).collect();
	let options = PrintOptions {
		max_items: 2,
		..PrintOptions::default()
	};

	let text = render(&DataValue::List(list), options);
	assert_eq!(text, "[\n  0\n  1\n  ... 3 more\n]\n");
}

#[test]
fn truncates_structures_by_member_count() {
	let mut list = DataList::new();
	for key in ["a", "b", "c", "d"] {
		list.push_keyed(key, true);
	}
	let options = PrintOptions {
		max_members: 1,
		..PrintOptions::default()
	};

	let text = render(&DataValue::List(list), options);
	assert_eq!(text, "{\n  a = true\n  ... 3 more members\n}\n");
}

#[test]
fn collapses_beyond_depth_limit() {
	let inner: DataList = ["deep"].into_iter().collect();
	let mut outer = DataList::new();
	outer.push_keyed("inner", inner);
	let options = PrintOptions {
		max_depth: 1,
		..PrintOptions::default()
	};

	let text = render(&DataValue::List(outer), options);
	assert_eq!(text, "{\n  inner =\n    [... 1 items]\n}\n");
}

#[test]
fn empty_list_renders_as_empty_structure() {
	let text = render(&DataValue::List(DataList::new()), PrintOptions::default());
	assert_eq!(text, "{\n}\n");
}

#[test]
fn long_strings_are_truncated() {
	let options = PrintOptions {
		max_string_len: 3,
		..PrintOptions::default()
	};
	assert_eq!(render(&DataValue::from("abcdef"), options), "\"abc...\"\n");
}
