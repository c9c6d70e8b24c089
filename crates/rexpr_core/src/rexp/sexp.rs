use crate::rexp::Kind;

/// Nil expression.
pub const NILSXP: i32 = 0;
/// Symbol.
pub const SYMSXP: i32 = 1;
/// Dotted-pair list.
pub const LISTSXP: i32 = 2;
/// Closure.
pub const CLOSXP: i32 = 3;
/// Environment.
pub const ENVSXP: i32 = 4;
/// Promise.
pub const PROMSXP: i32 = 5;
/// Language construct.
pub const LANGSXP: i32 = 6;
/// Special form.
pub const SPECIALSXP: i32 = 7;
/// Builtin non-special form.
pub const BUILTINSXP: i32 = 8;
/// Character scalar.
pub const CHARSXP: i32 = 9;
/// Logical vector.
pub const LGLSXP: i32 = 10;
/// Integer vector.
pub const INTSXP: i32 = 13;
/// Real vector.
pub const REALSXP: i32 = 14;
/// Complex vector.
pub const CPLXSXP: i32 = 15;
/// String vector.
pub const STRSXP: i32 = 16;
/// Dot-dot-dot object.
pub const DOTSXP: i32 = 17;
/// Placeholder matching any type.
pub const ANYSXP: i32 = 18;
/// Generic vector.
pub const VECSXP: i32 = 19;
/// Expression vector.
pub const EXPRSXP: i32 = 20;
/// Byte code.
pub const BCODESXP: i32 = 21;
/// External pointer.
pub const EXTPTRSXP: i32 = 22;
/// Weak reference.
pub const WEAKREFSXP: i32 = 23;
/// Closure or builtin function.
pub const FUNSXP: i32 = 99;

/// Dispatch table from native type code to decoded kind.
///
/// Total on recognized codes; any code absent from the table decodes as
/// [`Kind::Unknown`]. The decoder refines two entries per handle: integer
/// vectors tagged categorical become factors, and one-element string vectors
/// collapse to scalar strings.
pub static DECODE_TABLE: &[(i32, Kind)] = &[
	(NILSXP, Kind::Null),
	(SYMSXP, Kind::Symbol),
	(LISTSXP, Kind::List),
	(INTSXP, Kind::IntArray),
	(REALSXP, Kind::DoubleArray),
	(STRSXP, Kind::StrArray),
	(VECSXP, Kind::Vector),
];

/// Decoded kind for a native type code.
pub fn decoded_kind(code: i32) -> Kind {
	DECODE_TABLE
		.iter()
		.find(|(c, _)| *c == code)
		.map(|(_, kind)| *kind)
		.unwrap_or(Kind::Unknown)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn recognized_codes_map() {
		assert_eq!(decoded_kind(NILSXP), Kind::Null);
		assert_eq!(decoded_kind(SYMSXP), Kind::Symbol);
		assert_eq!(decoded_kind(LISTSXP), Kind::List);
		assert_eq!(decoded_kind(INTSXP), Kind::IntArray);
		assert_eq!(decoded_kind(REALSXP), Kind::DoubleArray);
		assert_eq!(decoded_kind(STRSXP), Kind::StrArray);
		assert_eq!(decoded_kind(VECSXP), Kind::Vector);
	}

	#[test]
	fn unrecognized_codes_fall_back() {
		assert_eq!(decoded_kind(CLOSXP), Kind::Unknown);
		assert_eq!(decoded_kind(ENVSXP), Kind::Unknown);
		assert_eq!(decoded_kind(LGLSXP), Kind::Unknown);
		assert_eq!(decoded_kind(CPLXSXP), Kind::Unknown);
		assert_eq!(decoded_kind(-7), Kind::Unknown);
		assert_eq!(decoded_kind(1000), Kind::Unknown);
	}
}
