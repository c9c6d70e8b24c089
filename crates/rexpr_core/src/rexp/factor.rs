use serde::Serialize;

/// Categorical content: 1-based integer codes indexing ordered level labels.
///
/// Code 0 denotes the missing value. Codes and levels are fixed at
/// construction and never independently mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Factor {
	codes: Vec<i32>,
	levels: Vec<String>,
}

impl Factor {
	/// New factor from raw codes and level labels.
	pub fn new(codes: Vec<i32>, levels: Vec<String>) -> Factor {
		Factor { codes, levels }
	}

	/// Number of observations.
	pub fn len(&self) -> usize {
		self.codes.len()
	}

	/// Whether the factor holds no observations.
	pub fn is_empty(&self) -> bool {
		self.codes.is_empty()
	}

	/// Raw 1-based codes; 0 is the missing value.
	pub fn codes(&self) -> &[i32] {
		&self.codes
	}

	/// Ordered level labels.
	pub fn levels(&self) -> &[String] {
		&self.levels
	}

	/// Level label for observation `idx`; `None` for NA or a code outside
	/// the level range.
	pub fn label(&self, idx: usize) -> Option<&str> {
		let code = *self.codes.get(idx)?;
		if code < 1 {
			return None;
		}
		self.levels.get(code as usize - 1).map(String::as_str)
	}

	/// Whether observation `idx` holds the missing value marker.
	pub fn is_na(&self, idx: usize) -> bool {
		self.codes.get(idx).is_some_and(|code| *code == 0)
	}
}
