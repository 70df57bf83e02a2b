use std::any::Any;

use crate::datamodel::projection::{Projection, Scalar};
use crate::datamodel::{DataList, DataValue, EventDescriptor, EventName, Identifier, LazyValue, Subject, try_project};

fn projected(value: &dyn Any) -> Projection {
	try_project(value).expect("value should be recognized").into_projection()
}

fn text(value: &str) -> Projection {
	Projection::Scalar(Scalar::String(value.into()))
}

#[test]
fn unrecognized_types_defer_to_default_handling() {
	assert!(try_project(&42_u32).is_none());
	assert!(try_project(&String::from("plain")).is_none());
	assert!(try_project(&vec![DataValue::Null]).is_none());
}

#[test]
fn bare_list_is_classified() {
	let list: DataList = [1.0, 2.0].into_iter().collect();
	assert_eq!(projected(&list).shape(), "sequence");
}

#[test]
fn data_value_scalar_projects_to_scalar() {
	assert_eq!(projected(&DataValue::Boolean(true)), Projection::Scalar(Scalar::Boolean(true)));
	assert_eq!(projected(&DataValue::Undefined), Projection::Scalar(Scalar::Undefined));
}

#[test]
fn lazy_value_is_forced_then_classified() {
	let lazy = LazyValue::new(|| {
		let mut list = DataList::new();
		list.push_keyed("answer", 42.0);
		DataValue::List(list)
	});

	let projection = projected(&lazy);
	assert!(lazy.is_forced());
	assert_eq!(projection.get("answer"), Some(&Projection::Scalar(Scalar::Number(42.0))));
}

#[test]
fn wrappers_unwrap_to_string_scalars() {
	let identifier = Identifier::new("s1").expect("valid identifier");
	let name = EventName::parse("done.state.s1").expect("valid event name");
	let descriptor = EventDescriptor::new("error.*").expect("valid descriptor");

	assert_eq!(projected(&identifier), text("s1"));
	assert_eq!(projected(&name), text("done.state.s1"));
	assert_eq!(projected(&descriptor), text("error.*"));
}

#[test]
fn send_trait_objects_are_accepted() {
	let boxed: Box<dyn Any + Send> = Box::new(Identifier::new("boxed").expect("valid identifier"));
	let subject = Subject::from_any(boxed.as_ref()).expect("identifier recognized");
	assert!(matches!(subject, Subject::Identifier(_)));
}
