//! Layered attribute storage shared by every mapping node.
//!
//! Each attribute key holds up to three values, one per [`Layer`]. Reads
//! resolve to the highest populated layer, so values written by the user
//! always win over values supplied by conventions, which in turn win over
//! defaults synthesized by the builders.

mod store;
mod value;

use std::fmt;

pub use store::AttributeStore;
pub use value::AttributeValue;

/// Provenance of an attribute value.
///
/// Variants are ordered by precedence: later variants override earlier ones.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Layer {
    /// Values synthesized by builders when nothing else was supplied.
    Default,
    /// Values supplied by the convention pass.
    Convention,
    /// Values set directly through the fluent API.
    Explicit,
}

impl Layer {
    /// Lower-case label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Convention => "convention",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed set of attribute keys belonging to one kind of mapping node.
///
/// Emission walks [`Attribute::ALL`] so the order in which keys are declared
/// is the order in which they appear in the document.
pub trait Attribute: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    /// Every key of this kind in emission order.
    const ALL: &'static [Self];

    /// Name of the XML attribute this key is written as.
    fn xml_name(self) -> &'static str;
}
