use thiserror::Error;

use crate::rexp::Handle;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RexError>;

/// Errors surfaced by engine primitives while fetching expression data.
///
/// The decoder never constructs these itself: structural ambiguity (unknown
/// type codes, malformed factor or matrix metadata) resolves to fallback
/// content instead. These variants exist so [`Engine`](crate::rexp::Engine)
/// implementations share one failure vocabulary, and the decoder forwards
/// them unchanged.
#[derive(Debug, Error)]
pub enum RexError {
	/// Engine rejected a handle as invalid or stale.
	#[error("invalid expression handle {handle}")]
	InvalidHandle {
		/// Handle the engine refused.
		handle: Handle,
	},
	/// Engine session is gone or was never established.
	#[error("engine session unavailable: {reason}")]
	SessionUnavailable {
		/// Engine-provided explanation.
		reason: String,
	},
	/// A primitive fetch failed for an otherwise valid handle.
	#[error("fetch failed for handle {handle}: {detail}")]
	FetchFailed {
		/// Handle being fetched.
		handle: Handle,
		/// Engine-provided failure detail.
		detail: String,
	},
}
