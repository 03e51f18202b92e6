// ABOUTME: Main library entry point for the trawl outline core.
// ABOUTME: Re-exports Node, Outline, StructureError, and the extracted Document types.

//! Structural outline classification and metadata extraction for parsed
//! HTML documents.
//!
//! Given an already-parsed document tree, this crate locates the canonical
//! page regions (head, body, navigation, main, sidebar, footer, and the
//! article blocks inside main) and harvests page metadata and navigation
//! links from them. It is the outline core of a crawling pipeline: fetching,
//! caching, robots handling, and raw byte-to-tree HTML parsing are other
//! crates' concerns.
//!
//! Classification fails fast on structural violations (missing or duplicate
//! head/body); extraction never fails, degrading to `None` or empty fields
//! when regions are absent.
//!
//! # Example
//!
//! ```
//! use scraper::Html;
//! use trawl_outline::{Node, Outline};
//!
//! let html = Html::parse_document(
//!     r#"<html><head><title>T</title><meta name="description" content="D"></head><body><nav id="nav"><a href="/x">X</a></nav><div id="main"><article>body</article></div></body></html>"#,
//! );
//!
//! let outline = Outline::build(Node::document(&html)).expect("well-formed page");
//! let document = outline.extract().expect("main region present");
//! assert_eq!(document.title.as_deref(), Some("T"));
//! assert_eq!(document.nav.len(), 1);
//! ```

pub mod classify;
pub mod document;
pub mod dom;
pub mod error;
mod extract;

pub use crate::classify::Outline;
pub use crate::document::{Anchor, Document, DocumentKind, LinkTarget};
pub use crate::dom::Node;
pub use crate::error::{Section, StructureError};
