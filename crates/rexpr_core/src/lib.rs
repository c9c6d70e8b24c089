//! Public library API for decoding expressions held by an embedded R engine.

/// Expression decoding, value model, type registry, and engine interface.
pub mod rexp;
