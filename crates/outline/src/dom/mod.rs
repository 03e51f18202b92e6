// ABOUTME: Tree navigation layer over parsed HTML documents.
// ABOUTME: Re-exports the nil-safe Node cursor used by classification and extraction.

//! Tree navigation over parsed HTML documents.
//!
//! This module wraps the parser's tree in a nil-safe cursor, [`Node`]. The
//! classifier and extractor depend only on the cursor's capability set
//! (kind tests, attributes, children, siblings, parent, flattened text), so
//! swapping the backing parser means reimplementing this module alone.

mod node;

pub use node::Node;
