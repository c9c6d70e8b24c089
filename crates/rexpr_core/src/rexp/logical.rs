/// Tri-state logical scalar: true, false, or the missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logical {
	/// Logical false.
	False,
	/// Logical true.
	True,
	/// Missing value marker.
	Na,
}

impl Logical {
	/// Decode the engine's raw integer encoding: 0 is false, 1 is true,
	/// anything else is NA.
	pub fn from_code(code: i32) -> Logical {
		match code {
			0 => Logical::False,
			1 => Logical::True,
			_ => Logical::Na,
		}
	}

	/// Plain boolean view, `None` for NA.
	pub fn as_bool(self) -> Option<bool> {
		match self {
			Logical::False => Some(false),
			Logical::True => Some(true),
			Logical::Na => None,
		}
	}

	/// Whether this is the missing value.
	pub fn is_na(self) -> bool {
		self == Logical::Na
	}
}

impl From<bool> for Logical {
	fn from(value: bool) -> Logical {
		if value { Logical::True } else { Logical::False }
	}
}

impl std::fmt::Display for Logical {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let label = match self {
			Logical::False => "FALSE",
			Logical::True => "TRUE",
			Logical::Na => "NA",
		};
		f.write_str(label)
	}
}
