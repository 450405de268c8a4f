//! Builder for scalar properties.

use std::any::type_name;

use crate::attributes::{AttributeStore, AttributeValue};
use crate::model::{ColumnAttr, PropertyAttr, PropertyMapping};

use super::columns::{ColumnSpec, Negation};
use super::options::Access;

/// Fluent configuration of one scalar property.
///
/// Obtained from `map` on a class or subclass map. Each call records an
/// explicit value; calls may be chained in any order. `not()` inverts the
/// next boolean call only.
#[derive(Clone, Debug)]
pub struct PropertyPart {
    name: String,
    value_type: Option<String>,
    attributes: AttributeStore<PropertyAttr>,
    columns: ColumnSpec,
    negation: Negation,
}

impl PropertyPart {
    pub(crate) fn new(name: &str, value_type: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            value_type: value_type.map(str::to_owned),
            attributes: AttributeStore::new(),
            columns: ColumnSpec::default(),
            negation: Negation::default(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Add a column. Calling this more than once maps the property onto
    /// several columns in call order.
    pub fn column(&mut self, name: &str) -> &mut Self {
        self.columns.push(name);
        self
    }

    /// Add several columns in order.
    pub fn columns<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for name in names {
            self.columns.push(name);
        }
        self
    }

    /// Invert the next boolean call.
    pub const fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Allow nulls in the property's columns; `not().nullable()` forbids them.
    pub fn nullable(&mut self) -> &mut Self {
        let not_null = self.negation.apply(false);
        self.columns.set(ColumnAttr::NotNull, not_null);
        self
    }

    /// Put a unique constraint on the property's columns.
    pub fn unique(&mut self) -> &mut Self {
        let unique = self.negation.apply(true);
        self.columns.set(ColumnAttr::Unique, unique);
        self
    }

    /// Column length.
    pub fn length(&mut self, length: u32) -> &mut Self {
        self.columns.set(ColumnAttr::Length, length);
        self
    }

    /// Numeric precision of the column.
    pub fn precision(&mut self, precision: u32) -> &mut Self {
        self.columns.set(ColumnAttr::Precision, precision);
        self
    }

    /// Numeric scale of the column.
    pub fn scale(&mut self, scale: u32) -> &mut Self {
        self.columns.set(ColumnAttr::Scale, scale);
        self
    }

    /// Database index the columns belong to.
    pub fn index(&mut self, name: &str) -> &mut Self {
        self.columns.set(ColumnAttr::Index, name);
        self
    }

    /// Check constraint on the column.
    pub fn check(&mut self, expression: &str) -> &mut Self {
        self.columns.set(ColumnAttr::Check, expression);
        self
    }

    /// Database default for the column.
    pub fn default_value(&mut self, expression: &str) -> &mut Self {
        self.columns.set(ColumnAttr::Default, expression);
        self
    }

    /// SQL type used when generating schema.
    pub fn custom_sql_type(&mut self, sql_type: &str) -> &mut Self {
        self.columns.set(ColumnAttr::SqlType, sql_type);
        self
    }

    /// Set an arbitrary attribute on every column of the property.
    pub fn column_attribute(
        &mut self,
        attribute: ColumnAttr,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        self.columns.set(attribute, value);
        self
    }

    /// Multi-column unique constraint the property takes part in.
    pub fn unique_key(&mut self, name: &str) -> &mut Self {
        self.attributes.set(PropertyAttr::UniqueKey, name);
        self
    }

    /// Mapping type of the property.
    pub fn custom_type(&mut self, type_name: &str) -> &mut Self {
        self.attributes.set(PropertyAttr::Type, type_name);
        self
    }

    /// Mapping type named after the Rust type `T`.
    pub fn custom_type_of<T: ?Sized>(&mut self) -> &mut Self {
        self.attributes.set(PropertyAttr::Type, type_name::<T>());
        self
    }

    /// Compute the property from a SQL expression instead of a column.
    pub fn formula(&mut self, expression: &str) -> &mut Self {
        self.attributes.set(PropertyAttr::Formula, expression);
        self
    }

    /// Access strategy.
    pub fn access(&mut self, access: Access) -> &mut Self {
        self.attributes.set(PropertyAttr::Access, access);
        self
    }

    /// Exclude the property from inserts and updates; `not().read_only()`
    /// includes it in both.
    pub fn read_only(&mut self) -> &mut Self {
        let writable = self.negation.apply(false);
        self.attributes.set(PropertyAttr::Insert, writable);
        self.attributes.set(PropertyAttr::Update, writable);
        self
    }

    /// Include the property in inserts.
    pub fn insert(&mut self) -> &mut Self {
        let insert = self.negation.apply(true);
        self.attributes.set(PropertyAttr::Insert, insert);
        self
    }

    /// Include the property in updates.
    pub fn update(&mut self) -> &mut Self {
        let update = self.negation.apply(true);
        self.attributes.set(PropertyAttr::Update, update);
        self
    }

    /// Load the property lazily.
    pub fn lazy_load(&mut self) -> &mut Self {
        let lazy = self.negation.apply(true);
        self.attributes.set(PropertyAttr::Lazy, lazy);
        self
    }

    /// Include the property in optimistic lock checks.
    pub fn optimistic_lock(&mut self) -> &mut Self {
        let lock = self.negation.apply(true);
        self.attributes.set(PropertyAttr::OptimisticLock, lock);
        self
    }

    /// Set an arbitrary property attribute.
    pub fn attribute(&mut self, attribute: PropertyAttr, value: impl Into<AttributeValue>) -> &mut Self {
        self.attributes.set(attribute, value);
        self
    }

    /// Finalise into a mapping node.
    ///
    /// Without explicit columns the property gets one implicit column named
    /// after itself, unless it is computed from a formula.
    pub(crate) fn resolve(self) -> PropertyMapping {
        let implicit = (!self.attributes.is_set(PropertyAttr::Formula)).then_some(self.name.as_str());
        let columns = self.columns.resolve(implicit);
        PropertyMapping {
            name: self.name,
            value_type: self.value_type,
            attributes: self.attributes,
            columns,
        }
    }
}
