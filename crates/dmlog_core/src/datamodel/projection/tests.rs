use chrono::DateTime;

use super::{Projection, Property, Scalar};

fn prop(name: &str, value: Projection) -> Property {
	Property { name: name.to_owned(), value }
}

fn string(value: &str) -> Projection {
	Projection::Scalar(Scalar::String(value.into()))
}

#[test]
fn structure_serializes_members_in_emission_order() {
	let projection = Projection::Structure(vec![
		prop("z", string("last-letter")),
		prop("a", Projection::Scalar(Scalar::Number(1.0))),
		prop("a:(index)", Projection::Scalar(Scalar::Index(4))),
	]);

	assert_eq!(projection.to_string(), r#"{"z":"last-letter","a":1,"a:(index)":4}"#);
}

#[test]
fn duplicate_names_are_kept_and_lookup_is_last_write_wins() {
	let projection = Projection::Structure(vec![prop("(null)", string("first")), prop("(null)", string("second"))]);

	assert_eq!(projection.member_names(), vec!["(null)", "(null)"]);
	assert_eq!(projection.get("(null)"), Some(&string("second")));
	assert_eq!(projection.get_all("(null)").count(), 2);
	assert_eq!(projection.to_string(), r#"{"(null)":"first","(null)":"second"}"#);
}

#[test]
fn scalars_render_native_json_forms() {
	let stamp = DateTime::parse_from_rfc3339("2024-05-01T12:30:00+02:00").expect("valid timestamp");
	let projection = Projection::Sequence(vec![
		Projection::Scalar(Scalar::Undefined),
		Projection::Scalar(Scalar::Null),
		Projection::Scalar(Scalar::Boolean(true)),
		Projection::Scalar(Scalar::Number(2.5)),
		Projection::Scalar(Scalar::Number(-3.0)),
		Projection::Scalar(Scalar::DateTime(stamp)),
	]);

	assert_eq!(projection.to_string(), r#"[null,null,true,2.5,-3,"2024-05-01T12:30:00+02:00"]"#);
}

#[test]
fn non_finite_numbers_render_as_null() {
	let projection = Projection::Scalar(Scalar::Number(f64::NAN));
	assert_eq!(projection.to_string(), "null");
}

#[test]
fn accessors_match_shape() {
	let empty = Projection::Structure(Vec::new());
	assert_eq!(empty.shape(), "structure");
	assert!(empty.as_structure().is_some_and(<[Property]>::is_empty));
	assert!(empty.as_sequence().is_none());
	assert!(empty.get("anything").is_none());

	let seq = Projection::Sequence(vec![string("x")]);
	assert_eq!(seq.shape(), "sequence");
	assert!(seq.member_names().is_empty());
}
