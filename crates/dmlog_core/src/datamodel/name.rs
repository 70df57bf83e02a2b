use std::borrow::Cow;

/// Member name used for an entry without a key.
pub(crate) const NULL_KEY_NAME: &str = "(null)";
/// Member name of the trailing list-metadata member.
pub(crate) const LIST_META_NAME: &str = "(meta)";
/// Suffix of the per-entry index sidecar member.
pub(crate) const INDEX_SUFFIX: &str = ":(index)";
/// Suffix of the per-entry metadata sidecar member.
pub(crate) const META_SUFFIX: &str = ":(meta)";

/// Synthesize the structure member name for an entry key.
///
/// Absent keys become `(null)` and blank keys are wrapped in parentheses
/// with their whitespace kept, so every name is non-empty and "no key" never
/// collides with "blank key".
pub fn member_name(key: Option<&str>) -> Cow<'_, str> {
	match key {
		None => Cow::Borrowed(NULL_KEY_NAME),
		Some(key) if key.trim().is_empty() => Cow::Owned(format!("({key})")),
		Some(key) => Cow::Borrowed(key),
	}
}
