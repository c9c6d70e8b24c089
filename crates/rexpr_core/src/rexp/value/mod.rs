use std::borrow::Cow;

use crate::rexp::{Complex, Factor, Handle, Kind, Logical, Pair};

/// Kind-dependent payload of a decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
	/// Explicit null marker.
	Null,
	/// Integer scalar.
	Int(i32),
	/// Real scalar.
	Double(f64),
	/// Tri-state logical scalar.
	Bool(Logical),
	/// String scalar.
	Str(String),
	/// Symbol name.
	Symbol(String),
	/// Complex scalar.
	Complex(Complex),
	/// Integer sequence.
	IntArray(Vec<i32>),
	/// Real sequence.
	DoubleArray(Vec<f64>),
	/// String sequence.
	StrArray(Vec<String>),
	/// Logical sequence.
	BoolArray(Vec<Logical>),
	/// Heterogeneous sequence of child values.
	Vector(Vec<Rexp>),
	/// Categorical codes with level labels.
	Factor(Factor),
	/// Dotted-pair list chain.
	List(Pair),
	/// Language-construct chain.
	Lang(Pair),
	/// Undecoded reference left with the engine.
	Opaque,
	/// Native code with no decoding rule.
	Unknown(i32),
}

impl Content {
	/// Kind tag for this payload.
	pub fn kind(&self) -> Kind {
		match self {
			Content::Null => Kind::Null,
			Content::Int(_) => Kind::Int,
			Content::Double(_) => Kind::Double,
			Content::Bool(_) => Kind::Bool,
			Content::Str(_) => Kind::Str,
			Content::Symbol(_) => Kind::Symbol,
			Content::Complex(_) => Kind::Complex,
			Content::IntArray(_) => Kind::IntArray,
			Content::DoubleArray(_) => Kind::DoubleArray,
			Content::StrArray(_) => Kind::StrArray,
			Content::BoolArray(_) => Kind::BoolArray,
			Content::Vector(_) => Kind::Vector,
			Content::Factor(_) => Kind::Factor,
			Content::List(_) => Kind::List,
			Content::Lang(_) => Kind::Lang,
			Content::Opaque => Kind::Opaque,
			Content::Unknown(_) => Kind::Unknown,
		}
	}
}

/// Decoded expression node.
///
/// Holds the kind-dependent content, an optional attribute value, and the
/// provenance of the decode: the engine handle and its native type code.
/// A value is immutable once constructed. Equality compares content and
/// attribute only; provenance does not participate.
#[derive(Debug, Clone)]
pub struct Rexp {
	pub(crate) content: Content,
	pub(crate) attr: Option<Box<Rexp>>,
	pub(crate) handle: Handle,
	pub(crate) type_code: i32,
}

impl Rexp {
	/// The null value.
	pub fn null() -> Rexp {
		Rexp::new(Content::Null)
	}

	/// Host-built value from content, with no attribute and null provenance.
	pub fn new(content: Content) -> Rexp {
		Rexp { content, attr: None, handle: Handle::NULL, type_code: 0 }
	}

	/// Host-built value with an attached attribute.
	pub fn with_attr(content: Content, attr: Rexp) -> Rexp {
		Rexp { content, attr: Some(Box::new(attr)), handle: Handle::NULL, type_code: 0 }
	}

	/// Kind tag of the content.
	pub fn kind(&self) -> Kind {
		self.content.kind()
	}

	/// Kind-dependent payload.
	pub fn content(&self) -> &Content {
		&self.content
	}

	/// Attribute value attached during decoding or construction.
	pub fn attribute(&self) -> Option<&Rexp> {
		self.attr.as_deref()
	}

	/// Engine handle this value was decoded from; null for host-built values.
	pub fn handle(&self) -> Handle {
		self.handle
	}

	/// Native type code the engine reported; 0 for host-built values.
	pub fn type_code(&self) -> i32 {
		self.type_code
	}

	/// Integer scalar view: scalar content or the first array element.
	pub fn as_int(&self) -> Option<i32> {
		match &self.content {
			Content::IntArray(items) => items.first().copied(),
			Content::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Real scalar view: scalar content or the first array element. Integer
	/// content is not read; widening is array-side only.
	pub fn as_double(&self) -> Option<f64> {
		match &self.content {
			Content::DoubleArray(items) => items.first().copied(),
			Content::Double(v) => Some(*v),
			_ => None,
		}
	}

	/// String scalar view: scalar content or the first array element.
	pub fn as_str(&self) -> Option<&str> {
		match &self.content {
			Content::Str(s) => Some(s),
			Content::StrArray(items) => items.first().map(String::as_str),
			_ => None,
		}
	}

	/// Logical scalar view: scalar content or the first array element.
	pub fn as_bool(&self) -> Option<Logical> {
		match &self.content {
			Content::Bool(b) => Some(*b),
			Content::BoolArray(items) => items.first().copied(),
			_ => None,
		}
	}

	/// Printable name of a symbol.
	pub fn as_symbol_name(&self) -> Option<&str> {
		match &self.content {
			Content::Symbol(name) => Some(name),
			_ => None,
		}
	}

	/// Complex scalar view.
	pub fn as_complex(&self) -> Option<Complex> {
		match &self.content {
			Content::Complex(c) => Some(*c),
			_ => None,
		}
	}

	/// Factor view.
	pub fn as_factor(&self) -> Option<&Factor> {
		match &self.content {
			Content::Factor(factor) => Some(factor),
			_ => None,
		}
	}

	/// List chain view; language constructs are not lists.
	pub fn as_list(&self) -> Option<&Pair> {
		match &self.content {
			Content::List(pair) => Some(pair),
			_ => None,
		}
	}

	/// Child values of a heterogeneous vector.
	pub fn as_vector(&self) -> Option<&[Rexp]> {
		match &self.content {
			Content::Vector(items) => Some(items),
			_ => None,
		}
	}

	/// Integer sequence view: borrowed for array content, owned for a
	/// promoted scalar. Real content is never narrowed.
	pub fn as_int_array(&self) -> Option<Cow<'_, [i32]>> {
		match &self.content {
			Content::IntArray(items) => Some(Cow::Borrowed(items.as_slice())),
			Content::Int(v) => Some(Cow::Owned(vec![*v])),
			_ => None,
		}
	}

	/// Real sequence view: borrowed for array content, owned for promoted
	/// scalars and element-wise widened integer content.
	pub fn as_double_array(&self) -> Option<Cow<'_, [f64]>> {
		match &self.content {
			Content::DoubleArray(items) => Some(Cow::Borrowed(items.as_slice())),
			Content::Double(v) => Some(Cow::Owned(vec![*v])),
			Content::Int(v) => Some(Cow::Owned(vec![f64::from(*v)])),
			Content::IntArray(items) => {
				Some(Cow::Owned(items.iter().map(|v| f64::from(*v)).collect()))
			}
			_ => None,
		}
	}

	/// String sequence view: borrowed for array content, owned for a
	/// promoted scalar.
	pub fn as_string_array(&self) -> Option<Cow<'_, [String]>> {
		match &self.content {
			Content::StrArray(items) => Some(Cow::Borrowed(items.as_slice())),
			Content::Str(s) => Some(Cow::Owned(vec![s.clone()])),
			_ => None,
		}
	}

	/// Row-major matrix view of real array content carrying a two-element
	/// `dim` attribute.
	///
	/// The flat sequence is column-major, so the walk fills columns outer
	/// and rows inner. Returns `None` unless the content is a real array,
	/// the attribute is a list whose head reads as exactly `[rows, cols]`,
	/// and `rows * cols` matches the flat length.
	pub fn as_double_matrix(&self) -> Option<Vec<Vec<f64>>> {
		let Content::DoubleArray(flat) = &self.content else {
			return None;
		};
		let attr = self.attr.as_deref()?;
		let Content::List(dim_entry) = attr.content() else {
			return None;
		};
		let dims = dim_entry.head().as_int_array()?;
		if dims.len() != 2 {
			return None;
		}
		let rows = usize::try_from(dims[0]).ok()?;
		let cols = usize::try_from(dims[1]).ok()?;
		if rows.checked_mul(cols)? != flat.len() {
			return None;
		}

		let mut out = vec![vec![0.0_f64; cols]; rows];
		let mut k = 0;
		for col in 0..cols {
			for row in 0..rows {
				out[row][col] = flat[k];
				k += 1;
			}
		}
		Some(out)
	}
}

impl Default for Rexp {
	fn default() -> Rexp {
		Rexp::null()
	}
}

impl PartialEq for Rexp {
	fn eq(&self, other: &Rexp) -> bool {
		self.content == other.content && self.attr == other.attr
	}
}

impl From<Vec<i32>> for Rexp {
	fn from(items: Vec<i32>) -> Rexp {
		Rexp::new(Content::IntArray(items))
	}
}

impl From<Vec<f64>> for Rexp {
	fn from(items: Vec<f64>) -> Rexp {
		Rexp::new(Content::DoubleArray(items))
	}
}

impl From<Vec<String>> for Rexp {
	fn from(items: Vec<String>) -> Rexp {
		Rexp::new(Content::StrArray(items))
	}
}
