// ABOUTME: Extracted result types: Document, Anchor, LinkTarget, DocumentKind.
// ABOUTME: Plain serde-friendly data produced by extraction, owning no tree references.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

/// Base used only to validate relative hrefs; never part of a returned value.
static RELATIVE_CHECK_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://relative.invalid/").unwrap());

/// Coarse document kind.
///
/// Present in the data model for a later pipeline stage; nothing in this
/// crate assigns anything but the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    #[default]
    Unknown,
    Article,
    BlogIndex,
    Faq,
}

/// A link target as written in markup: an absolute URL, or a relative
/// reference kept verbatim (a bare [`Url`] cannot represent one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkTarget {
    Absolute(Url),
    Relative(String),
}

impl LinkTarget {
    /// Parse an href value.
    ///
    /// Returns `None` when the value is neither a valid absolute URL nor a
    /// valid relative reference; nav extraction drops the whole anchor in
    /// that case.
    pub fn parse(raw: &str) -> Option<LinkTarget> {
        match Url::parse(raw) {
            Ok(url) => Some(LinkTarget::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                // joining against a throwaway base validates the reference
                RELATIVE_CHECK_BASE.join(raw).ok()?;
                Some(LinkTarget::Relative(raw.to_string()))
            }
            Err(_) => None,
        }
    }

    /// The target as written: the serialized URL or the raw reference.
    pub fn as_str(&self) -> &str {
        match self {
            LinkTarget::Absolute(url) => url.as_str(),
            LinkTarget::Relative(raw) => raw,
        }
    }

    /// Resolve the target against a base URL.
    pub fn resolve(&self, base: &Url) -> Option<Url> {
        match self {
            LinkTarget::Absolute(url) => Some(url.clone()),
            LinkTarget::Relative(raw) => base.join(raw).ok(),
        }
    }
}

/// A navigational link harvested from a nav region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// The anchor's `title` attribute, empty when not set.
    pub title: String,
    /// Flattened text content of the anchor.
    pub label: String,
    /// Parsed `href`, absent when the anchor carries no non-empty href.
    pub url: Option<LinkTarget>,
    /// The anchor's `rel` attribute, empty when not set.
    pub rel: String,
}

/// The metadata and navigation summary extracted from a classified document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Never assigned here; reserved for a later classification stage.
    pub kind: DocumentKind,
    /// Also a pass-through slot; the extractor reads no language markup.
    pub language: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    /// Navigation anchors, in traversal-discovery order.
    pub nav: Vec<Anchor>,
}

impl Document {
    /// True when extraction produced no metadata and no navigation links.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.author.is_none()
            && self.nav.is_empty()
    }
}
