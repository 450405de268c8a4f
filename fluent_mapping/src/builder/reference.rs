//! Builder for many-to-one references.

use crate::attributes::{AttributeStore, AttributeValue};
use crate::model::{ColumnAttr, ReferenceAttr, ReferenceMapping};

use super::columns::{ColumnSpec, Negation};
use super::options::{Access, Cascade, Fetch, NotFound};

/// Fluent configuration of a reference to another entity.
#[derive(Clone, Debug)]
pub struct ReferencePart {
    name: String,
    target: &'static str,
    attributes: AttributeStore<ReferenceAttr>,
    columns: ColumnSpec,
    negation: Negation,
}

impl ReferencePart {
    pub(crate) fn new(name: &str, target: &'static str) -> Self {
        Self {
            name: name.to_owned(),
            target,
            attributes: AttributeStore::new(),
            columns: ColumnSpec::default(),
            negation: Negation::default(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Add a foreign key column.
    pub fn column(&mut self, name: &str) -> &mut Self {
        self.columns.push(name);
        self
    }

    /// Set an arbitrary attribute on the foreign key columns.
    pub fn column_attribute(
        &mut self,
        attribute: ColumnAttr,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        self.columns.set(attribute, value);
        self
    }

    /// Invert the next boolean call.
    pub const fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Allow the reference to be empty; `not().nullable()` requires it.
    pub fn nullable(&mut self) -> &mut Self {
        let not_null = self.negation.apply(false);
        self.attributes.set(ReferenceAttr::NotNull, not_null);
        self
    }

    /// Enforce a one-to-one relationship through a unique foreign key.
    pub fn unique(&mut self) -> &mut Self {
        let unique = self.negation.apply(true);
        self.attributes.set(ReferenceAttr::Unique, unique);
        self
    }

    /// Exclude the reference from inserts and updates.
    pub fn read_only(&mut self) -> &mut Self {
        let writable = self.negation.apply(false);
        self.attributes.set(ReferenceAttr::Insert, writable);
        self.attributes.set(ReferenceAttr::Update, writable);
        self
    }

    /// Load the target lazily.
    pub fn lazy_load(&mut self) -> &mut Self {
        let lazy = self.negation.apply(true);
        self.attributes.set(ReferenceAttr::Lazy, lazy);
        self
    }

    /// Cascade style.
    pub fn cascade(&mut self, cascade: Cascade) -> &mut Self {
        self.attributes.set(ReferenceAttr::Cascade, cascade);
        self
    }

    /// Fetch strategy.
    pub fn fetch(&mut self, fetch: Fetch) -> &mut Self {
        self.attributes.set(ReferenceAttr::Fetch, fetch);
        self
    }

    /// Name of the foreign key constraint.
    pub fn foreign_key(&mut self, name: &str) -> &mut Self {
        self.attributes.set(ReferenceAttr::ForeignKey, name);
        self
    }

    /// Access strategy.
    pub fn access(&mut self, access: Access) -> &mut Self {
        self.attributes.set(ReferenceAttr::Access, access);
        self
    }

    /// Behaviour when the referenced row is missing.
    pub fn not_found(&mut self, not_found: NotFound) -> &mut Self {
        self.attributes.set(ReferenceAttr::NotFound, not_found);
        self
    }

    /// Join on a property of the target other than its identifier.
    pub fn property_ref(&mut self, property: &str) -> &mut Self {
        self.attributes.set(ReferenceAttr::PropertyRef, property);
        self
    }

    /// Override the referenced class name.
    pub fn class_name(&mut self, class: &str) -> &mut Self {
        self.attributes.set(ReferenceAttr::Class, class);
        self
    }

    pub(crate) fn resolve(self) -> ReferenceMapping {
        let mut reference = ReferenceMapping::new(self.name, self.target);
        self.attributes.copy_to(&mut reference.attributes);
        let implicit = format!("{}_id", reference.name);
        reference.columns = self.columns.resolve(Some(&implicit));
        reference
    }
}
