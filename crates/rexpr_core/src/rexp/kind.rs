/// Decoded kind tag of a value node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Explicit null value.
	Null,
	/// Integer scalar.
	Int,
	/// Real scalar.
	Double,
	/// String scalar.
	Str,
	/// Tri-state logical scalar.
	Bool,
	/// Complex scalar.
	Complex,
	/// Symbol name.
	Symbol,
	/// Language-construct chain.
	Lang,
	/// Dotted-pair list chain.
	List,
	/// Heterogeneous vector of child values.
	Vector,
	/// Categorical codes with level labels.
	Factor,
	/// Integer sequence.
	IntArray,
	/// Real sequence.
	DoubleArray,
	/// String sequence.
	StrArray,
	/// Logical sequence.
	BoolArray,
	/// Undecoded reference left with the engine.
	Opaque,
	/// Native code with no decoding rule.
	Unknown,
}

impl Kind {
	/// Display name used by canonical rendering; arrays carry a trailing `*`.
	pub fn name(self) -> &'static str {
		match self {
			Self::Null => "NULL",
			Self::Int => "INT",
			Self::Double => "REAL",
			Self::Str => "STRING",
			Self::Bool => "BOOL",
			Self::Complex => "COMPLEX",
			Self::Symbol => "SYMBOL",
			Self::Lang => "LANG",
			Self::List => "LIST",
			Self::Vector => "VECTOR",
			Self::Factor => "FACTOR",
			Self::IntArray => "INT*",
			Self::DoubleArray => "REAL*",
			Self::StrArray => "STRING*",
			Self::BoolArray => "BOOL*",
			Self::Opaque => "(SEXP)",
			Self::Unknown => "UNKNOWN",
		}
	}

	/// Whether this kind is one of the homogeneous array kinds.
	pub fn is_array(self) -> bool {
		matches!(self, Self::IntArray | Self::DoubleArray | Self::StrArray | Self::BoolArray)
	}
}
