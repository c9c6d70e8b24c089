use crate::rexp::Result;

/// Non-owning reference to an expression inside the engine's memory.
///
/// The engine owns the underlying object and its lifetime; this crate only
/// quotes the handle back when issuing primitive fetches. Handle 0 is the
/// null reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub u64);

impl Handle {
	/// The null reference.
	pub const NULL: Handle = Handle(0);

	/// Whether this is the null reference.
	pub fn is_null(self) -> bool {
		self.0 == 0
	}
}

impl std::fmt::Display for Handle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{:016x}", self.0)
	}
}

/// Primitive fetch operations the decoder consumes from the engine.
///
/// Implementations marshal each call to the native session. Any operation may
/// fail for an invalid or stale handle, and the decoder propagates such
/// failures unchanged. `Ok(None)` from the optional fetches means the
/// requested data is absent, which is a normal branch rather than a failure.
pub trait Engine {
	/// Native classification code of a handle.
	fn type_code(&self, expr: Handle) -> Result<i32>;

	/// Whether the handle is tagged as a categorical (factor) value.
	fn is_categorical(&self, expr: Handle) -> Result<bool>;

	/// Handle of a named attribute, if the attribute exists.
	fn attribute(&self, expr: Handle, name: &str) -> Result<Option<Handle>>;

	/// String payload of a string-typed handle.
	fn string_array(&self, expr: Handle) -> Result<Option<Vec<String>>>;

	/// Integer payload of an integer-typed handle.
	fn int_array(&self, expr: Handle) -> Result<Option<Vec<i32>>>;

	/// Real payload of a real-typed handle.
	fn double_array(&self, expr: Handle) -> Result<Option<Vec<f64>>>;

	/// Printable name of a symbol-typed handle.
	fn symbol_name(&self, expr: Handle) -> Result<Option<String>>;

	/// Head of a dotted-pair node.
	fn pair_head(&self, expr: Handle) -> Result<Handle>;

	/// Tail of a dotted-pair node, if present.
	fn pair_tail(&self, expr: Handle) -> Result<Option<Handle>>;

	/// Tag of a dotted-pair node, if present.
	fn pair_tag(&self, expr: Handle) -> Result<Option<Handle>>;

	/// Ordered child handles of a generic vector.
	fn vector_children(&self, expr: Handle) -> Result<Vec<Handle>>;
}

#[cfg(test)]
mod tests {
	use super::Handle;

	#[test]
	fn null_handle() {
		assert!(Handle::NULL.is_null());
		assert!(!Handle(1).is_null());
	}

	#[test]
	fn hex_display() {
		assert_eq!(Handle(0x2a).to_string(), "0x000000000000002a");
	}
}
