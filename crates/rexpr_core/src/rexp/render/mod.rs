use std::fmt::{self, Display, Formatter};

use crate::rexp::{Content, Factor, Pair, Rexp};

/// Maximum array elements included in a rendering before truncation.
pub const MAX_RENDERED_ITEMS: usize = 100;

/// Quote a string for rendering: wrap in double quotes, escaping backslashes
/// and embedded quotes.
pub fn quote_string(s: &str) -> String {
	let mut out = String::with_capacity(s.len() + 2);
	out.push('"');
	for ch in s.chars() {
		match ch {
			'\\' => out.push_str("\\\\"),
			'"' => out.push_str("\\\""),
			_ => out.push(ch),
		}
	}
	out.push('"');
	out
}

impl Display for Rexp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{} ", self.kind().name())?;
		if let Some(attr) = self.attribute() {
			write!(f, "\nattr={attr}\n ")?;
		}
		render_content(f, self)?;
		f.write_str("]")
	}
}

fn render_content(f: &mut Formatter<'_>, value: &Rexp) -> fmt::Result {
	match value.content() {
		Content::Null => Ok(()),
		Content::Int(v) => write!(f, "{v}"),
		Content::Double(v) => write!(f, "{v}"),
		Content::Bool(b) => write!(f, "{b}"),
		Content::Str(s) => f.write_str(&quote_string(s)),
		Content::Symbol(name) => f.write_str(name),
		Content::Complex(c) => write!(f, "{c}"),
		Content::IntArray(items) => render_seq(f, items, |f, v| write!(f, "{v}")),
		Content::DoubleArray(items) => render_seq(f, items, |f, v| write!(f, "{v}")),
		Content::BoolArray(items) => render_seq(f, items, |f, v| write!(f, "{v}")),
		Content::StrArray(items) => render_seq(f, items, |f, s| f.write_str(&quote_string(s))),
		Content::Vector(items) => render_children(f, items),
		Content::Factor(factor) => write!(f, "{factor}"),
		Content::List(pair) | Content::Lang(pair) => render_chain(f, pair),
		Content::Opaque => write!(f, "{{{}}}", value.type_code()),
		Content::Unknown(code) => write!(f, "{code}"),
	}
}

// Parenthesized comma join, cut after MAX_RENDERED_ITEMS when more remain.
fn render_seq<T>(
	f: &mut Formatter<'_>,
	items: &[T],
	mut render: impl FnMut(&mut Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
	f.write_str("(")?;
	for (i, item) in items.iter().enumerate() {
		render(f, item)?;
		if i + 1 < items.len() {
			f.write_str(", ")?;
		}
		if i + 1 == MAX_RENDERED_ITEMS && items.len() > MAX_RENDERED_ITEMS {
			write!(f, "... ({} more values follow)", items.len() - MAX_RENDERED_ITEMS)?;
			break;
		}
	}
	f.write_str(")")
}

fn render_children(f: &mut Formatter<'_>, items: &[Rexp]) -> fmt::Result {
	f.write_str("(")?;
	for (i, child) in items.iter().enumerate() {
		write!(f, "{child}")?;
		if i + 1 < items.len() {
			f.write_str(", ")?;
		}
	}
	f.write_str(")")
}

// Each node renders as `head:tag,(rest)`. Tails are walked in a loop; chain
// length must not bound formatter depth.
fn render_chain(f: &mut Formatter<'_>, pair: &Pair) -> fmt::Result {
	let mut nested = 0_usize;
	let mut node = pair;
	loop {
		write!(f, "{}:", node.head())?;
		match node.tag() {
			Some(tag) => write!(f, "{tag}")?,
			None => f.write_str("NULL")?,
		}
		f.write_str(",(")?;
		let Some(rest) = node.rest() else {
			f.write_str("NULL")?;
			break;
		};
		match rest.content() {
			Content::List(next) | Content::Lang(next) => {
				write!(f, "[{} ", rest.kind().name())?;
				if let Some(attr) = rest.attribute() {
					write!(f, "\nattr={attr}\n ")?;
				}
				nested += 1;
				node = next;
			}
			_ => {
				write!(f, "{rest}")?;
				break;
			}
		}
	}
	f.write_str(")")?;
	for _ in 0..nested {
		f.write_str("])")?;
	}
	Ok(())
}

impl Display for Factor {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for i in 0..self.len() {
			match self.label(i) {
				Some(label) => f.write_str(&quote_string(label))?,
				None => f.write_str("NA")?,
			}
			if i + 1 < self.len() {
				f.write_str(", ")?;
			}
		}
		f.write_str(")")
	}
}

#[cfg(test)]
mod tests;
