//! Turns a resolved mapping tree into a [`Document`].
//!
//! Emission validates the tree as it goes. Every problem found is collected
//! and the whole set is returned at once, so a mapping with three unmapped
//! identities reports all three.

mod emitter;

use crate::document::Document;
use crate::error::MappingResult;
use crate::model::HibernateMapping;
use crate::visit::Visit;

use self::emitter::Emitter;

/// Namespace of the emitted mapping schema.
pub const MAPPING_NAMESPACE: &str = "urn:nhibernate-mapping-2.2";

/// Options controlling the shape of emitted documents.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmitOptions {
    /// Collapse a lone column carrying only a name into a `column`
    /// attribute on its owner.
    pub column_shorthand: bool,
    /// Spaces per nesting level when the document is rendered as XML.
    pub indent_width: usize,
}

impl EmitOptions {
    /// Default options: column shorthand enabled, two-space indentation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            column_shorthand: true,
            indent_width: 2,
        }
    }

    /// Enable or disable column shorthand.
    #[must_use]
    pub const fn with_column_shorthand(mut self, enabled: bool) -> Self {
        self.column_shorthand = enabled;
        self
    }

    /// Indent rendered XML by `width` spaces per level.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit `mapping` as a document.
///
/// # Errors
///
/// Returns every validation failure found in the tree, aggregated when
/// there is more than one: classes without an identity, members without
/// columns, unnamed columns, collections without contents, hierarchies
/// without a discriminator, and sibling subclasses sharing a
/// discriminator value.
///
/// # Examples
///
/// ```
/// use fluent_mapping::emit::{EmitOptions, emit};
/// use fluent_mapping::model::{ClassMapping, HibernateMapping, IdMapping};
///
/// let mut class = ClassMapping::new("Record");
/// class.id = Some(IdMapping::new("Id"));
/// let mut mapping = HibernateMapping::new();
/// mapping.classes.push(class);
///
/// let document = emit(&mapping, &EmitOptions::default()).expect("valid mapping");
/// let id = document.select("hibernate-mapping/class/id").expect("id element");
/// assert_eq!(id.attribute("column"), Some("Id"));
/// ```
pub fn emit(mapping: &HibernateMapping, options: &EmitOptions) -> MappingResult<Document> {
    let mut emitter = Emitter::new(*options);
    emitter.visit_mapping(mapping);
    emitter.finish()
}

#[cfg(test)]
mod tests;
