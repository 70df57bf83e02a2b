use std::io;
use std::sync::{Arc, Mutex};

use super::log_value;
use crate::datamodel::{DataList, Entry};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
	fn text(&self) -> String {
		String::from_utf8(self.0.lock().expect("capture lock").clone()).expect("utf-8 log output")
	}
}

impl io::Write for Capture {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().expect("capture lock").extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

fn captured(run: impl FnOnce()) -> String {
	let capture = Capture::default();
	let writer = capture.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_ansi(false)
		.with_max_level(tracing::Level::INFO)
		.with_writer(move || writer.clone())
		.finish();
	tracing::subscriber::with_default(subscriber, run);
	capture.text()
}

#[test]
fn recognized_value_is_recorded_as_structured_field() {
	let mut list = DataList::new();
	list.push_entry(Entry::keyed(0, "a", "x"));
	list.push_entry(Entry::keyed(1, "b", "y").with_metadata(42.0));

	let mut handled = false;
	let output = captured(|| handled = log_value("state snapshot", &list));

	assert!(handled);
	assert!(output.contains("state snapshot"), "missing message in {output:?}");
	assert!(output.contains("shape=\"structure\"") || output.contains("shape=structure"), "missing shape in {output:?}");
	assert!(output.contains(r#"value={"a":"x","b":"y","b:(meta)":42}"#), "missing value in {output:?}");
}

#[test]
fn unrecognized_value_records_nothing() {
	let mut handled = true;
	let output = captured(|| handled = log_value("ignored", &3_i32));

	assert!(!handled);
	assert!(!output.contains("ignored"));
}
