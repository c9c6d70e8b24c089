//! Decoding of engine handles into value trees.
//!
//! Structural expansion runs on an explicit step stack with an output stack
//! rather than call recursion, so nesting depth and chain length are bounded
//! by heap only. Vector children are pushed in reverse and reassembled once
//! all of them have decoded; pair chains are collected front to back in one
//! walk and assembled back to front.

use crate::rexp::{Content, Engine, Factor, Handle, Pair, Result, Rexp, sexp};

/// Name of the attribute holding factor level labels.
const LEVELS_ATTR: &str = "levels";
/// Name of the attribute holding array dimensions.
const DIM_ATTR: &str = "dim";

/// Decode the expression behind `expr` into a self-contained value tree.
///
/// With `convert = false` the native type code is queried once for
/// provenance and the result is an opaque value carrying only the handle; no
/// other primitive call is issued. With `convert = true` the handle is
/// expanded per its native type code: strings collapse to a scalar when they
/// hold exactly one element, integer vectors tagged categorical with a
/// well-formed string `levels` attribute become factors (and fall back to
/// plain integer arrays otherwise), real vectors pick up an integer `dim`
/// attribute when present, and generic vectors and dotted-pair chains expand
/// their components. Type codes with no decoding rule yield unknown values
/// without further fetches. Engine failures propagate unchanged.
pub fn decode<E: Engine + ?Sized>(engine: &E, expr: Handle, convert: bool) -> Result<Rexp> {
	if !convert {
		let code = engine.type_code(expr)?;
		return Ok(Rexp { content: Content::Opaque, attr: None, handle: expr, type_code: code });
	}

	let mut steps = vec![Step::Expand(expr)];
	let mut out: Vec<Rexp> = Vec::new();
	while let Some(step) = steps.pop() {
		match step {
			Step::Expand(expr) => expand(engine, expr, &mut steps, &mut out)?,
			Step::BuildVector { expr, code, len } => {
				let children = out.split_off(out.len().saturating_sub(len));
				out.push(Rexp {
					content: Content::Vector(children),
					attr: None,
					handle: expr,
					type_code: code,
				});
			}
			Step::BuildChain { nodes } => build_chain(nodes, &mut out),
		}
	}
	Ok(out.pop().unwrap_or_default())
}

/// Decode the named attribute of `expr`, if the engine reports one.
pub fn decode_attribute<E: Engine + ?Sized>(
	engine: &E,
	expr: Handle,
	name: &str,
) -> Result<Option<Rexp>> {
	match engine.attribute(expr, name)? {
		Some(attr) => decode(engine, attr, true).map(Some),
		None => Ok(None),
	}
}

enum Step {
	/// Decode one handle, pushing its value (or further steps) as needed.
	Expand(Handle),
	/// Collect the last `len` outputs into a vector value.
	BuildVector { expr: Handle, code: i32, len: usize },
	/// Assemble a collected pair chain from its decoded heads and tags.
	BuildChain { nodes: Vec<ChainNode> },
}

/// One dotted-pair node recorded during the front-to-back chain walk.
struct ChainNode {
	expr: Handle,
	code: i32,
	has_tag: bool,
}

fn expand<E: Engine + ?Sized>(
	engine: &E,
	expr: Handle,
	steps: &mut Vec<Step>,
	out: &mut Vec<Rexp>,
) -> Result<()> {
	let code = engine.type_code(expr)?;
	let mut attr = None;
	let content = match code {
		sexp::NILSXP => Content::Null,
		sexp::SYMSXP => Content::Symbol(engine.symbol_name(expr)?.unwrap_or_default()),
		sexp::STRSXP => {
			let mut items = engine.string_array(expr)?.unwrap_or_default();
			if items.len() == 1 {
				Content::Str(items.remove(0))
			} else {
				Content::StrArray(items)
			}
		}
		sexp::INTSXP => match decode_factor(engine, expr)? {
			Some(factor) => Content::Factor(factor),
			None => Content::IntArray(engine.int_array(expr)?.unwrap_or_default()),
		},
		sexp::REALSXP => {
			attr = dim_attribute(engine, expr)?;
			Content::DoubleArray(engine.double_array(expr)?.unwrap_or_default())
		}
		sexp::VECSXP => {
			let children = engine.vector_children(expr)?;
			steps.push(Step::BuildVector { expr, code, len: children.len() });
			for child in children.into_iter().rev() {
				steps.push(Step::Expand(child));
			}
			return Ok(());
		}
		sexp::LISTSXP => {
			collect_chain(engine, expr, code, steps)?;
			return Ok(());
		}
		_ => Content::Unknown(code),
	};
	out.push(Rexp { content, attr: attr.map(Box::new), handle: expr, type_code: code });
	Ok(())
}

/// Factor decoding precondition chain; any miss means the plain-integer
/// fallback.
fn decode_factor<E: Engine + ?Sized>(engine: &E, expr: Handle) -> Result<Option<Factor>> {
	if !engine.is_categorical(expr)? {
		return Ok(None);
	}
	let Some(levels) = engine.attribute(expr, LEVELS_ATTR)? else {
		return Ok(None);
	};
	if engine.type_code(levels)? != sexp::STRSXP {
		return Ok(None);
	}
	let Some(labels) = engine.string_array(levels)? else {
		return Ok(None);
	};
	let codes = engine.int_array(expr)?.unwrap_or_default();
	Ok(Some(Factor::new(codes, labels)))
}

/// Side lookup of an integer-typed `dim` attribute for real vectors,
/// shaped as the single-node list the matrix accessor reads.
fn dim_attribute<E: Engine + ?Sized>(engine: &E, expr: Handle) -> Result<Option<Rexp>> {
	let Some(dim) = engine.attribute(expr, DIM_ATTR)? else {
		return Ok(None);
	};
	let code = engine.type_code(dim)?;
	if code != sexp::INTSXP {
		return Ok(None);
	}
	let Some(dims) = engine.int_array(dim)? else {
		return Ok(None);
	};
	let head = Rexp { content: Content::IntArray(dims), attr: None, handle: dim, type_code: code };
	let tag = Rexp::new(Content::Symbol(DIM_ATTR.to_owned()));
	Ok(Some(Rexp::new(Content::List(Pair::new(head, Some(tag))))))
}

/// Walk a dotted-pair chain front to back, scheduling head and tag decodes
/// and recording node shape for assembly.
///
/// The chain continues only through tails whose own native type is the
/// dotted-pair code; any other tail leaves the rest absent.
fn collect_chain<E: Engine + ?Sized>(
	engine: &E,
	expr: Handle,
	code: i32,
	steps: &mut Vec<Step>,
) -> Result<()> {
	let mut nodes = Vec::new();
	let mut pending = Vec::new();
	let mut node = expr;
	let mut node_code = code;
	loop {
		let head = engine.pair_head(node)?;
		let tag = engine.pair_tag(node)?;
		pending.push(Step::Expand(head));
		if let Some(tag) = tag {
			pending.push(Step::Expand(tag));
		}
		nodes.push(ChainNode { expr: node, code: node_code, has_tag: tag.is_some() });

		let next = match engine.pair_tail(node)? {
			Some(tail) => {
				let tail_code = engine.type_code(tail)?;
				(tail_code == sexp::LISTSXP).then_some((tail, tail_code))
			}
			None => None,
		};
		let Some((tail, tail_code)) = next else {
			break;
		};
		node = tail;
		node_code = tail_code;
	}

	steps.push(Step::BuildChain { nodes });
	// Reversed so the front node's head decodes first.
	while let Some(step) = pending.pop() {
		steps.push(step);
	}
	Ok(())
}

/// Assemble a collected chain back to front from the decoded heads and tags
/// sitting on the output stack.
fn build_chain(nodes: Vec<ChainNode>, out: &mut Vec<Rexp>) {
	let mut rest: Option<Rexp> = None;
	for node in nodes.iter().rev() {
		// Outputs sit head-then-tag per node, so the tag pops first.
		let tag = if node.has_tag { out.pop() } else { None };
		let head = out.pop().unwrap_or_default();
		let pair = Pair::from_parts(head, tag, rest.take());
		rest = Some(Rexp {
			content: Content::List(pair),
			attr: None,
			handle: node.expr,
			type_code: node.code,
		});
	}
	out.push(rest.unwrap_or_default());
}
