//! Scripted in-memory engine for exercising the decoder without a native
//! session.
//!
//! Tests register handles with payloads on a [`ScriptedEngine`], hand it to
//! `rexpr::decode`, and assert on the resulting value tree. Handles can be
//! poisoned to script primitive failures, and every primitive call is
//! counted so tests can pin down how many fetches a path issues.

use std::cell::Cell;
use std::collections::HashMap;

use rexpr::rexp::{Engine, Handle, Result, RexError, sexp};

/// Payload registered for one scripted handle.
#[derive(Debug, Clone)]
enum Payload {
	Nil,
	Symbol(String),
	Strings(Vec<String>),
	Ints(Vec<i32>),
	Doubles(Vec<f64>),
	Vector(Vec<Handle>),
	PairNode { head: Handle, tag: Option<Handle>, tail: Option<Handle> },
	Raw,
	Poisoned,
}

#[derive(Debug, Clone)]
struct Entry {
	code: i32,
	categorical: bool,
	payload: Payload,
	attrs: HashMap<String, Handle>,
}

/// In-memory [`Engine`] whose handles and payloads are registered by test
/// code.
///
/// Registration methods take `&mut self` and hand back the new [`Handle`];
/// the `Engine` implementation is read-only apart from the primitive-call
/// counter. Handles never registered, and handles registered as poisoned,
/// make every primitive return [`RexError::InvalidHandle`].
#[derive(Debug, Default)]
pub struct ScriptedEngine {
	entries: HashMap<u64, Entry>,
	next: u64,
	calls: Cell<usize>,
}

impl ScriptedEngine {
	/// Empty engine with no registered handles.
	pub fn new() -> ScriptedEngine {
		ScriptedEngine::default()
	}

	/// Number of primitive calls issued so far, across all operations.
	pub fn primitive_calls(&self) -> usize {
		self.calls.get()
	}

	fn register(&mut self, code: i32, payload: Payload) -> Handle {
		self.next += 1;
		let entry = Entry { code, categorical: false, payload, attrs: HashMap::new() };
		self.entries.insert(self.next, entry);
		Handle(self.next)
	}

	/// Register a nil expression.
	pub fn nil(&mut self) -> Handle {
		self.register(sexp::NILSXP, Payload::Nil)
	}

	/// Register a symbol with a printable name.
	pub fn symbol(&mut self, name: &str) -> Handle {
		self.register(sexp::SYMSXP, Payload::Symbol(name.to_owned()))
	}

	/// Register a string vector.
	pub fn strings(&mut self, items: &[&str]) -> Handle {
		let items = items.iter().map(|s| (*s).to_owned()).collect();
		self.register(sexp::STRSXP, Payload::Strings(items))
	}

	/// Register a plain integer vector.
	pub fn ints(&mut self, items: &[i32]) -> Handle {
		self.register(sexp::INTSXP, Payload::Ints(items.to_vec()))
	}

	/// Register an integer vector tagged categorical, with a string-typed
	/// `levels` attribute holding the given labels.
	pub fn factor(&mut self, codes: &[i32], levels: &[&str]) -> Handle {
		let levels = self.strings(levels);
		let expr = self.categorical_ints(codes);
		self.set_attribute(expr, "levels", levels);
		expr
	}

	/// Register an integer vector tagged categorical but with no attributes;
	/// tests attach their own malformed `levels`.
	pub fn categorical_ints(&mut self, codes: &[i32]) -> Handle {
		let expr = self.register(sexp::INTSXP, Payload::Ints(codes.to_vec()));
		if let Some(entry) = self.entries.get_mut(&expr.0) {
			entry.categorical = true;
		}
		expr
	}

	/// Register a real vector.
	pub fn doubles(&mut self, items: &[f64]) -> Handle {
		self.register(sexp::REALSXP, Payload::Doubles(items.to_vec()))
	}

	/// Register a real vector carrying an integer `dim` attribute.
	pub fn matrix(&mut self, items: &[f64], rows: i32, cols: i32) -> Handle {
		let dim = self.ints(&[rows, cols]);
		let expr = self.doubles(items);
		self.set_attribute(expr, "dim", dim);
		expr
	}

	/// Register a generic vector over already-registered children.
	pub fn vector(&mut self, children: &[Handle]) -> Handle {
		self.register(sexp::VECSXP, Payload::Vector(children.to_vec()))
	}

	/// Register one dotted-pair node over already-registered handles.
	pub fn pair(&mut self, head: Handle, tag: Option<Handle>, tail: Option<Handle>) -> Handle {
		self.register(sexp::LISTSXP, Payload::PairNode { head, tag, tail })
	}

	/// Register a dotted-pair chain of untagged nodes, front handle returned.
	pub fn chain(&mut self, heads: &[Handle]) -> Handle {
		let mut tail = None;
		for head in heads.iter().rev() {
			tail = Some(self.pair(*head, None, tail));
		}
		tail.unwrap_or(Handle::NULL)
	}

	/// Register a handle with an arbitrary native type code and no payload.
	pub fn raw(&mut self, code: i32) -> Handle {
		self.register(code, Payload::Raw)
	}

	/// Register a handle whose every primitive call fails.
	pub fn poisoned(&mut self) -> Handle {
		self.register(0, Payload::Poisoned)
	}

	/// Attach a named attribute to a registered handle.
	pub fn set_attribute(&mut self, expr: Handle, name: &str, value: Handle) {
		if let Some(entry) = self.entries.get_mut(&expr.0) {
			entry.attrs.insert(name.to_owned(), value);
		}
	}

	fn entry(&self, expr: Handle) -> Result<&Entry> {
		self.calls.set(self.calls.get() + 1);
		let entry =
			self.entries.get(&expr.0).ok_or(RexError::InvalidHandle { handle: expr })?;
		if matches!(entry.payload, Payload::Poisoned) {
			return Err(RexError::InvalidHandle { handle: expr });
		}
		Ok(entry)
	}
}

impl Engine for ScriptedEngine {
	fn type_code(&self, expr: Handle) -> Result<i32> {
		Ok(self.entry(expr)?.code)
	}

	fn is_categorical(&self, expr: Handle) -> Result<bool> {
		Ok(self.entry(expr)?.categorical)
	}

	fn attribute(&self, expr: Handle, name: &str) -> Result<Option<Handle>> {
		Ok(self.entry(expr)?.attrs.get(name).copied())
	}

	fn string_array(&self, expr: Handle) -> Result<Option<Vec<String>>> {
		match &self.entry(expr)?.payload {
			Payload::Strings(items) => Ok(Some(items.clone())),
			_ => Ok(None),
		}
	}

	fn int_array(&self, expr: Handle) -> Result<Option<Vec<i32>>> {
		match &self.entry(expr)?.payload {
			Payload::Ints(items) => Ok(Some(items.clone())),
			_ => Ok(None),
		}
	}

	fn double_array(&self, expr: Handle) -> Result<Option<Vec<f64>>> {
		match &self.entry(expr)?.payload {
			Payload::Doubles(items) => Ok(Some(items.clone())),
			_ => Ok(None),
		}
	}

	fn symbol_name(&self, expr: Handle) -> Result<Option<String>> {
		match &self.entry(expr)?.payload {
			Payload::Symbol(name) => Ok(Some(name.clone())),
			_ => Ok(None),
		}
	}

	fn pair_head(&self, expr: Handle) -> Result<Handle> {
		match &self.entry(expr)?.payload {
			Payload::PairNode { head, .. } => Ok(*head),
			_ => Err(RexError::FetchFailed {
				handle: expr,
				detail: "not a pair node".to_owned(),
			}),
		}
	}

	fn pair_tail(&self, expr: Handle) -> Result<Option<Handle>> {
		match &self.entry(expr)?.payload {
			Payload::PairNode { tail, .. } => Ok(*tail),
			_ => Err(RexError::FetchFailed {
				handle: expr,
				detail: "not a pair node".to_owned(),
			}),
		}
	}

	fn pair_tag(&self, expr: Handle) -> Result<Option<Handle>> {
		match &self.entry(expr)?.payload {
			Payload::PairNode { tag, .. } => Ok(*tag),
			_ => Err(RexError::FetchFailed {
				handle: expr,
				detail: "not a pair node".to_owned(),
			}),
		}
	}

	fn vector_children(&self, expr: Handle) -> Result<Vec<Handle>> {
		match &self.entry(expr)?.payload {
			Payload::Vector(children) => Ok(children.clone()),
			_ => Err(RexError::FetchFailed {
				handle: expr,
				detail: "not a generic vector".to_owned(),
			}),
		}
	}
}

/// Build a scripted engine from a JSON fixture description, returning the
/// engine and the root handle.
///
/// Shapes: `null` registers nil; a string registers a one-element string
/// vector; an integer number a one-element integer vector; a non-integer
/// number a one-element real vector; a plain array a generic vector over its
/// element fixtures. Objects select typed payloads: `{"symbol": name}`,
/// `{"strings": [..]}`, `{"ints": [..]}`, `{"doubles": [..]}`,
/// `{"factor": {"codes": [..], "levels": [..]}}`,
/// `{"matrix": {"data": [..], "dim": [rows, cols]}}`, and
/// `{"list": [{"head": fixture, "tag": name?}, ..]}` for dotted-pair chains.
/// Anything else registers an unknown-typed handle.
pub fn engine_from_json(fixture: &serde_json::Value) -> (ScriptedEngine, Handle) {
	let mut engine = ScriptedEngine::new();
	let root = register_json(&mut engine, fixture);
	(engine, root)
}

fn register_json(engine: &mut ScriptedEngine, fixture: &serde_json::Value) -> Handle {
	use serde_json::Value as JsonValue;

	match fixture {
		JsonValue::Null => engine.nil(),
		JsonValue::String(s) => engine.strings(&[s.as_str()]),
		JsonValue::Number(n) => match n.as_i64() {
			Some(v) => engine.ints(&[v as i32]),
			None => engine.doubles(&[n.as_f64().unwrap_or(f64::NAN)]),
		},
		JsonValue::Array(items) => {
			let children: Vec<Handle> =
				items.iter().map(|item| register_json(engine, item)).collect();
			engine.vector(&children)
		}
		JsonValue::Object(map) => register_json_object(engine, map),
		JsonValue::Bool(_) => engine.raw(sexp::LGLSXP),
	}
}

fn register_json_object(
	engine: &mut ScriptedEngine,
	map: &serde_json::Map<String, serde_json::Value>,
) -> Handle {
	if let Some(name) = map.get("symbol").and_then(|v| v.as_str()) {
		return engine.symbol(name);
	}
	if let Some(items) = map.get("strings").and_then(|v| v.as_array()) {
		let items: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
		return engine.strings(&items);
	}
	if let Some(items) = map.get("ints").and_then(|v| v.as_array()) {
		return engine.ints(&int_items(items));
	}
	if let Some(items) = map.get("doubles").and_then(|v| v.as_array()) {
		return engine.doubles(&double_items(items));
	}
	if let Some(spec) = map.get("factor") {
		let codes = spec.get("codes").and_then(|v| v.as_array()).map(|v| int_items(v));
		let levels: Option<Vec<&str>> = spec
			.get("levels")
			.and_then(|v| v.as_array())
			.map(|items| items.iter().filter_map(|v| v.as_str()).collect());
		if let (Some(codes), Some(levels)) = (codes, levels) {
			return engine.factor(&codes, &levels);
		}
	}
	if let Some(spec) = map.get("matrix") {
		let data = spec.get("data").and_then(|v| v.as_array()).map(|v| double_items(v));
		let dim = spec.get("dim").and_then(|v| v.as_array()).map(|v| int_items(v));
		if let (Some(data), Some(dim)) = (data, dim)
			&& let [rows, cols] = dim[..]
		{
			return engine.matrix(&data, rows, cols);
		}
	}
	if let Some(nodes) = map.get("list").and_then(|v| v.as_array()) {
		return register_json_chain(engine, nodes);
	}
	engine.raw(sexp::ANYSXP)
}

// Registers back-to-front so each node can reference its tail.
fn register_json_chain(engine: &mut ScriptedEngine, nodes: &[serde_json::Value]) -> Handle {
	let mut tail = None;
	for node in nodes.iter().rev() {
		let head = match node.get("head") {
			Some(head) => register_json(engine, head),
			None => engine.nil(),
		};
		let tag = node
			.get("tag")
			.and_then(|v| v.as_str())
			.map(|name| engine.symbol(name));
		tail = Some(engine.pair(head, tag, tail));
	}
	tail.unwrap_or(Handle::NULL)
}

fn int_items(items: &[serde_json::Value]) -> Vec<i32> {
	items.iter().filter_map(|v| v.as_i64()).map(|v| v as i32).collect()
}

fn double_items(items: &[serde_json::Value]) -> Vec<f64> {
	items.iter().filter_map(serde_json::Value::as_f64).collect()
}

#[cfg(test)]
mod tests {
	use rexpr::rexp::{Engine, RexError, sexp};

	use super::{ScriptedEngine, engine_from_json};

	#[test]
	fn registered_payloads_fetch_back() {
		let mut engine = ScriptedEngine::new();
		let expr = engine.ints(&[1, 2, 3]);
		assert_eq!(engine.type_code(expr).expect("type code"), sexp::INTSXP);
		assert_eq!(engine.int_array(expr).expect("fetch"), Some(vec![1, 2, 3]));
		assert_eq!(engine.string_array(expr).expect("fetch"), None);
	}

	#[test]
	fn poisoned_handles_fail_every_primitive() {
		let mut engine = ScriptedEngine::new();
		let expr = engine.poisoned();
		let err = engine.type_code(expr).expect_err("poisoned");
		assert!(matches!(err, RexError::InvalidHandle { handle } if handle == expr));
	}

	#[test]
	fn calls_are_counted() {
		let mut engine = ScriptedEngine::new();
		let expr = engine.nil();
		assert_eq!(engine.primitive_calls(), 0);
		engine.type_code(expr).expect("type code");
		engine.is_categorical(expr).expect("flag");
		assert_eq!(engine.primitive_calls(), 2);
	}

	#[test]
	fn json_fixture_registers_typed_handles() {
		let fixture = serde_json::json!(["s", {"doubles": [1.5]}, {"ints": [1, 2]}]);
		let (engine, root) = engine_from_json(&fixture);
		assert_eq!(engine.type_code(root).expect("type code"), sexp::VECSXP);
		let children = engine.vector_children(root).expect("children");
		assert_eq!(children.len(), 3);
		assert_eq!(engine.type_code(children[0]).expect("type code"), sexp::STRSXP);
		assert_eq!(engine.type_code(children[1]).expect("type code"), sexp::REALSXP);
		assert_eq!(engine.type_code(children[2]).expect("type code"), sexp::INTSXP);
	}

	#[test]
	fn json_chain_links_front_to_back() {
		let fixture = serde_json::json!({"list": [
			{"head": {"ints": [1]}, "tag": "a"},
			{"head": {"ints": [2]}}
		]});
		let (engine, front) = engine_from_json(&fixture);
		assert_eq!(engine.type_code(front).expect("type code"), sexp::LISTSXP);
		let tail = engine.pair_tail(front).expect("tail").expect("present");
		assert_eq!(engine.type_code(tail).expect("type code"), sexp::LISTSXP);
		assert_eq!(engine.pair_tail(tail).expect("tail"), None);
		assert!(engine.pair_tag(front).expect("tag").is_some());
		assert!(engine.pair_tag(tail).expect("tag").is_none());
	}
}
