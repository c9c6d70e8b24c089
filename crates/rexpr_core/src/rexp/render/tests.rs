mod scalars {

	use crate::rexp::{Complex, Content, Handle, Logical, Rexp, quote_string};

	#[test]
	fn null_renders_name_only() {
		assert_eq!(Rexp::null().to_string(), "[NULL ]");
	}

	#[test]
	fn numeric_scalars() {
		assert_eq!(Rexp::new(Content::Int(7)).to_string(), "[INT 7]");
		assert_eq!(Rexp::new(Content::Double(1.5)).to_string(), "[REAL 1.5]");
		assert_eq!(Rexp::new(Content::Complex(Complex::new(1.0, 2.0))).to_string(), "[COMPLEX 1+2i]");
	}

	#[test]
	fn logical_scalar_renders_na_distinctly() {
		assert_eq!(Rexp::new(Content::Bool(Logical::Na)).to_string(), "[BOOL NA]");
		assert_eq!(Rexp::new(Content::Bool(Logical::True)).to_string(), "[BOOL TRUE]");
	}

	#[test]
	fn string_renders_quoted_symbol_bare() {
		assert_eq!(Rexp::new(Content::Str("a\"b".into())).to_string(), "[STRING \"a\\\"b\"]");
		assert_eq!(Rexp::new(Content::Symbol("mean".into())).to_string(), "[SYMBOL mean]");
	}

	#[test]
	fn opaque_renders_native_code() {
		let value = Rexp {
			content: Content::Opaque,
			attr: None,
			handle: Handle(5),
			type_code: 14,
		};
		assert_eq!(value.to_string(), "[(SEXP) {14}]");
	}

	#[test]
	fn unknown_renders_raw_code() {
		assert_eq!(Rexp::new(Content::Unknown(42)).to_string(), "[UNKNOWN 42]");
	}

	#[test]
	fn quote_string_escapes() {
		assert_eq!(quote_string("plain"), "\"plain\"");
		assert_eq!(quote_string("a\"b"), "\"a\\\"b\"");
		assert_eq!(quote_string("back\\slash"), "\"back\\\\slash\"");
	}
}

mod arrays {

	use crate::rexp::{Content, Logical, Rexp};

	#[test]
	fn int_array_comma_joined() {
		assert_eq!(Rexp::new(Content::IntArray(vec![1, 2, 3])).to_string(), "[INT* (1, 2, 3)]");
		assert_eq!(Rexp::new(Content::IntArray(vec![])).to_string(), "[INT* ()]");
	}

	#[test]
	fn string_array_elements_quoted() {
		let value = Rexp::new(Content::StrArray(vec!["a".into(), "b".into()]));
		assert_eq!(value.to_string(), "[STRING* (\"a\", \"b\")]");
	}

	#[test]
	fn bool_array_renders_na() {
		let value = Rexp::new(Content::BoolArray(vec![Logical::True, Logical::Na]));
		assert_eq!(value.to_string(), "[BOOL* (TRUE, NA)]");
	}

	#[test]
	fn truncation_marker_after_hundred_elements() {
		let value = Rexp::new(Content::IntArray((0..150).collect()));
		let text = value.to_string();
		assert!(text.starts_with("[INT* (0, 1, "));
		assert!(text.contains("98, 99, ... (50 more values follow))"));
		assert!(!text.contains("100"));
	}

	#[test]
	fn no_marker_at_exactly_hundred() {
		let value = Rexp::new(Content::DoubleArray((0..100).map(f64::from).collect()));
		let text = value.to_string();
		assert!(!text.contains("more values follow"));
		assert!(text.ends_with("98, 99)]"));
	}

	#[test]
	fn truncation_leaves_content_intact() {
		let value = Rexp::new(Content::IntArray((0..150).collect()));
		let _ = value.to_string();
		let view = value.as_int_array().expect("int array view");
		assert_eq!(view.len(), 150);
	}
}

mod structures {

	use crate::rexp::{Content, Factor, Pair, Rexp};

	#[test]
	fn vector_joins_full_child_renderings() {
		let value = Rexp::new(Content::Vector(vec![
			Rexp::new(Content::Int(1)),
			Rexp::new(Content::Str("s".into())),
		]));
		assert_eq!(value.to_string(), "[VECTOR ([INT 1], [STRING \"s\"])]");
	}

	#[test]
	fn single_pair_node() {
		let head = Rexp::new(Content::Str("x".into()));
		let tag = Rexp::new(Content::Symbol("n".into()));
		let value = Rexp::new(Content::List(Pair::new(head, Some(tag))));
		assert_eq!(value.to_string(), "[LIST [STRING \"x\"]:[SYMBOL n],(NULL)]");
	}

	#[test]
	fn two_node_chain_nests_rest_rendering() {
		let second = Pair::new(Rexp::new(Content::Str("b".into())), None);
		let first = Pair::with_rest(Rexp::new(Content::Str("a".into())), None, second);
		let value = Rexp::new(Content::List(first));
		assert_eq!(
			value.to_string(),
			"[LIST [STRING \"a\"]:NULL,([LIST [STRING \"b\"]:NULL,(NULL)])]"
		);
	}

	#[test]
	fn lang_shares_chain_rendering() {
		let node = Pair::new(Rexp::new(Content::Symbol("sum".into())), None);
		let value = Rexp::new(Content::Lang(node));
		assert_eq!(value.to_string(), "[LANG [SYMBOL sum]:NULL,(NULL)]");
	}

	#[test]
	fn factor_renders_na_distinct_from_labels() {
		let factor = Factor::new(vec![1, 0, 2], vec!["lo".into(), "hi".into()]);
		let value = Rexp::new(Content::Factor(factor));
		assert_eq!(value.to_string(), "[FACTOR (\"lo\", NA, \"hi\")]");
	}

	#[test]
	fn attribute_renders_between_name_and_content() {
		let head = Rexp::new(Content::IntArray(vec![2, 2]));
		let tag = Rexp::new(Content::Symbol("dim".into()));
		let attr = Rexp::new(Content::List(Pair::new(head, Some(tag))));
		let value = Rexp::with_attr(Content::DoubleArray(vec![1.0, 2.0, 3.0, 4.0]), attr);
		assert_eq!(
			value.to_string(),
			"[REAL* \nattr=[LIST [INT* (2, 2)]:[SYMBOL dim],(NULL)]\n (1, 2, 3, 4)]"
		);
	}

	#[test]
	fn rendering_is_idempotent() {
		let second = Pair::new(Rexp::new(Content::Int(2)), None);
		let first = Pair::with_rest(Rexp::new(Content::Int(1)), None, second);
		let value = Rexp::new(Content::List(first));
		assert_eq!(value.to_string(), value.to_string());
	}

	#[test]
	fn thousand_node_chain_renders_without_overflow() {
		let mut chain = Pair::new(Rexp::new(Content::Int(0)), None);
		for i in 1..1000 {
			chain = Pair::with_rest(Rexp::new(Content::Int(i)), None, chain);
		}
		let value = Rexp::new(Content::List(chain));
		let text = value.to_string();
		assert!(text.starts_with("[LIST [INT 999]:NULL,([LIST [INT 998]"));
		assert!(text.ends_with("]"));
	}
}
