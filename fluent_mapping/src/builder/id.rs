//! Builder for identity mappings.

use crate::attributes::{AttributeStore, AttributeValue};
use crate::model::{ColumnAttr, IdAttr, IdMapping};

use super::columns::ColumnSpec;
use super::options::{Access, IdGenerator};

/// Fluent configuration of a class identifier.
#[derive(Clone, Debug)]
pub struct IdPart {
    name: String,
    value_type: String,
    attributes: AttributeStore<IdAttr>,
    columns: ColumnSpec,
    generator: Option<IdGenerator>,
}

impl IdPart {
    pub(crate) fn new(name: &str, value_type: &str) -> Self {
        Self {
            name: name.to_owned(),
            value_type: value_type.to_owned(),
            attributes: AttributeStore::new(),
            columns: ColumnSpec::default(),
            generator: None,
        }
    }

    /// Add an identifier column.
    pub fn column(&mut self, name: &str) -> &mut Self {
        self.columns.push(name);
        self
    }

    /// Column length.
    pub fn length(&mut self, length: u32) -> &mut Self {
        self.columns.set(ColumnAttr::Length, length);
        self
    }

    /// Set an arbitrary attribute on the identifier columns.
    pub fn column_attribute(
        &mut self,
        attribute: ColumnAttr,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        self.columns.set(attribute, value);
        self
    }

    /// Generator strategy.
    pub fn generated_by(&mut self, generator: IdGenerator) -> &mut Self {
        self.generator = Some(generator);
        self
    }

    /// Mapping type of the identifier.
    pub fn custom_type(&mut self, type_name: &str) -> &mut Self {
        self.attributes.set(IdAttr::Type, type_name);
        self
    }

    /// Access strategy.
    pub fn access(&mut self, access: Access) -> &mut Self {
        self.attributes.set(IdAttr::Access, access);
        self
    }

    /// Identifier value marking an entity as not yet saved.
    pub fn unsaved_value(&mut self, value: &str) -> &mut Self {
        self.attributes.set(IdAttr::UnsavedValue, value);
        self
    }

    pub(crate) fn resolve(self) -> IdMapping {
        let generator = self
            .generator
            .unwrap_or_else(|| IdGenerator::for_value_type(&self.value_type));
        let columns = self.columns.resolve(Some(&self.name));
        IdMapping {
            name: self.name,
            value_type: Some(self.value_type),
            attributes: self.attributes,
            columns,
            generator: Some(generator.to_mapping()),
        }
    }
}
