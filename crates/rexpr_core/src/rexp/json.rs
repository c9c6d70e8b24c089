use serde::{Serialize, Serializer};

use crate::rexp::{Content, Logical, Pair, Rexp};

/// Project a decoded value onto a JSON tree.
///
/// Scalars map to JSON scalars with NA and non-finite reals as null; arrays
/// map to JSON arrays; factors map to `{codes, levels}`; pair chains map to
/// arrays of `{head, tag}` objects; opaque values map to the hex handle
/// string and unknown codes to the raw integer. A value carrying an
/// attribute wraps as `{value, attr}`.
pub fn value_to_json(value: &Rexp) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	let body = match value.content() {
		Content::Null => JsonValue::Null,
		Content::Int(v) => serde_json::json!(v),
		Content::Double(v) => double_to_json(*v),
		Content::Bool(b) => logical_to_json(*b),
		Content::Str(s) => serde_json::json!(s),
		Content::Symbol(name) => serde_json::json!(name),
		Content::Complex(c) => serde_json::to_value(c).unwrap_or(JsonValue::Null),
		Content::IntArray(items) => serde_json::json!(items),
		Content::DoubleArray(items) => {
			JsonValue::Array(items.iter().map(|v| double_to_json(*v)).collect())
		}
		Content::StrArray(items) => serde_json::json!(items),
		Content::BoolArray(items) => {
			JsonValue::Array(items.iter().map(|b| logical_to_json(*b)).collect())
		}
		Content::Vector(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
		Content::Factor(factor) => serde_json::to_value(factor).unwrap_or(JsonValue::Null),
		Content::List(pair) | Content::Lang(pair) => chain_to_json(pair),
		Content::Opaque => serde_json::json!(value.handle().to_string()),
		Content::Unknown(code) => serde_json::json!(code),
	};

	match value.attribute() {
		Some(attr) => {
			let mut out = Map::new();
			out.insert("value".to_owned(), body);
			out.insert("attr".to_owned(), value_to_json(attr));
			JsonValue::Object(out)
		}
		None => body,
	}
}

fn chain_to_json(pair: &Pair) -> serde_json::Value {
	let nodes: Vec<serde_json::Value> = pair
		.iter()
		.map(|node| {
			let mut out = serde_json::Map::new();
			out.insert("head".to_owned(), value_to_json(node.head()));
			if let Some(tag) = node.tag() {
				out.insert("tag".to_owned(), value_to_json(tag));
			}
			serde_json::Value::Object(out)
		})
		.collect();
	serde_json::Value::Array(nodes)
}

fn double_to_json(v: f64) -> serde_json::Value {
	if v.is_finite() { serde_json::json!(v) } else { serde_json::Value::Null }
}

fn logical_to_json(b: Logical) -> serde_json::Value {
	match b.as_bool() {
		Some(v) => serde_json::json!(v),
		None => serde_json::Value::Null,
	}
}

impl Serialize for Rexp {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		value_to_json(self).serialize(serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::value_to_json;
	use crate::rexp::{Complex, Content, Factor, Handle, Logical, Pair, Rexp};

	#[test]
	fn scalar_shapes() {
		assert_eq!(value_to_json(&Rexp::null()), serde_json::json!(null));
		assert_eq!(value_to_json(&Rexp::new(Content::Int(7))), serde_json::json!(7));
		assert_eq!(value_to_json(&Rexp::new(Content::Str("a".into()))), serde_json::json!("a"));
		assert_eq!(
			value_to_json(&Rexp::new(Content::Complex(Complex::new(1.0, -2.0)))),
			serde_json::json!({"re": 1.0, "im": -2.0})
		);
	}

	#[test]
	fn missing_values_project_to_null() {
		assert_eq!(value_to_json(&Rexp::new(Content::Double(f64::NAN))), serde_json::json!(null));
		assert_eq!(value_to_json(&Rexp::new(Content::Bool(Logical::Na))), serde_json::json!(null));
		let arr = Rexp::new(Content::DoubleArray(vec![1.0, f64::INFINITY]));
		assert_eq!(value_to_json(&arr), serde_json::json!([1.0, null]));
	}

	#[test]
	fn factor_projects_codes_and_levels() {
		let factor = Factor::new(vec![1, 0], vec!["a".into(), "b".into()]);
		let value = Rexp::new(Content::Factor(factor));
		assert_eq!(value_to_json(&value), serde_json::json!({"codes": [1, 0], "levels": ["a", "b"]}));
	}

	#[test]
	fn chain_projects_node_objects() {
		let second = Pair::new(Rexp::new(Content::Int(2)), None);
		let tag = Rexp::new(Content::Symbol("x".into()));
		let first = Pair::with_rest(Rexp::new(Content::Int(1)), Some(tag), second);
		let value = Rexp::new(Content::List(first));
		assert_eq!(
			value_to_json(&value),
			serde_json::json!([{"head": 1, "tag": "x"}, {"head": 2}])
		);
	}

	#[test]
	fn opaque_projects_hex_handle() {
		let value = Rexp {
			content: Content::Opaque,
			attr: None,
			handle: Handle(0x2a),
			type_code: 14,
		};
		assert_eq!(value_to_json(&value), serde_json::json!("0x000000000000002a"));
	}

	#[test]
	fn attribute_wraps_value() {
		let value = Rexp::with_attr(Content::Int(1), Rexp::new(Content::Str("m".into())));
		assert_eq!(value_to_json(&value), serde_json::json!({"value": 1, "attr": "m"}));
	}

	#[test]
	fn serialize_delegates_to_projection() {
		let value = Rexp::new(Content::IntArray(vec![1, 2]));
		let direct = value_to_json(&value);
		let via_serde = serde_json::to_value(&value).expect("serializes");
		assert_eq!(direct, via_serde);
	}
}
