use dmlog::datamodel::{Projected, Scalar};

/// Output truncation and formatting limits for projected values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of members printed for a single structure.
	pub max_members: usize,
	/// Maximum number of items printed for a sequence.
	pub max_items: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum nesting depth rendered before collapsing.
	pub max_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members: 80,
			max_items: 16,
			max_string_len: 200,
			max_depth: 6,
		}
	}
}

/// Render one lazy projection as an indented text tree.
///
/// Members beyond the configured limits are drained and counted, never
/// rendered.
pub fn render_projected(projected: Projected<'_>, indent: usize, options: PrintOptions) -> String {
	let mut out = String::new();
	write_projected(&mut out, projected, indent, 0, options);
	out
}

fn write_projected(out: &mut String, projected: Projected<'_>, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match projected {
		Projected::Scalar(scalar) => {
			out.push_str(&format!("{pad}{}\n", scalar_text(&scalar, options.max_string_len)));
		}
		Projected::Sequence(mut items) => {
			if depth >= options.max_depth {
				out.push_str(&format!("{pad}[... {} items]\n", items.len()));
				return;
			}
			out.push_str(&format!("{pad}[\n"));
			for item in items.by_ref().take(options.max_items) {
				write_projected(out, item, indent + 2, depth + 1, options);
			}
			let rest = items.len();
			if rest > 0 {
				out.push_str(&format!("{pad}  ... {rest} more\n"));
			}
			out.push_str(&format!("{pad}]\n"));
		}
		Projected::Structure(mut members) => {
			if depth >= options.max_depth {
				out.push_str(&format!("{pad}{{ ... }}\n"));
				return;
			}
			out.push_str(&format!("{pad}{{\n"));
			for member in members.by_ref().take(options.max_members) {
				if matches!(member.value, Projected::Scalar(_)) {
					out.push_str(&format!("{pad}  {} = ", member.name));
					write_projected(out, member.value, 0, depth + 1, options);
				} else {
					out.push_str(&format!("{pad}  {} =\n", member.name));
					write_projected(out, member.value, indent + 4, depth + 1, options);
				}
			}
			let rest = members.count();
			if rest > 0 {
				out.push_str(&format!("{pad}  ... {rest} more members\n"));
			}
			out.push_str(&format!("{pad}}}\n"));
		}
	}
}

fn scalar_text(scalar: &Scalar, max_string_len: usize) -> String {
	match scalar {
		Scalar::Undefined => "undefined".to_owned(),
		Scalar::Null => "null".to_owned(),
		Scalar::String(text) => format!("\"{}\"", truncate(text, max_string_len)),
		Scalar::Number(number) => number.to_string(),
		Scalar::DateTime(stamp) => stamp.to_rfc3339(),
		Scalar::Boolean(flag) => flag.to_string(),
		Scalar::Index(index) => index.to_string(),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}

#[cfg(test)]
mod tests;
