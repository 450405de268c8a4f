//! Identity, discriminator, property, column, and reference nodes.

use crate::attributes::AttributeStore;

use super::{ColumnAttr, DiscriminatorAttr, IdAttr, PropertyAttr, ReferenceAttr};

/// A physical column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColumnMapping {
    /// Column attributes, including its name.
    pub attributes: AttributeStore<ColumnAttr>,
}

impl ColumnMapping {
    /// A column whose name was given explicitly.
    #[must_use]
    pub fn named(name: &str) -> Self {
        let mut attributes = AttributeStore::new();
        attributes.set(ColumnAttr::Name, name);
        Self { attributes }
    }

    /// A column whose name is only a default and may be renamed by conventions.
    #[must_use]
    pub fn implicit(name: &str) -> Self {
        let mut attributes = AttributeStore::new();
        attributes.set_default(ColumnAttr::Name, name);
        Self { attributes }
    }

    /// Resolved column name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes.text(ColumnAttr::Name)
    }
}

/// Identifier generator strategy with its parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratorMapping {
    /// Generator class such as `identity` or `hilo`.
    pub class: String,
    /// Generator parameters in declaration order.
    pub params: Vec<(String, String)>,
}

impl GeneratorMapping {
    /// A generator without parameters.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }
}

/// Identity mapping of a class.
#[derive(Clone, Debug, PartialEq)]
pub struct IdMapping {
    /// Identifier property name.
    pub name: String,
    /// Value type of the identifier, as reported by the builder.
    pub value_type: Option<String>,
    /// Identity attributes.
    pub attributes: AttributeStore<IdAttr>,
    /// Identifier columns.
    pub columns: Vec<ColumnMapping>,
    /// Generator strategy; omitted from the document when absent.
    pub generator: Option<GeneratorMapping>,
}

impl IdMapping {
    /// Identity mapping with a single implicit column named after the property.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let property = name.into();
        let columns = vec![ColumnMapping::implicit(&property)];
        Self {
            name: property,
            value_type: None,
            attributes: AttributeStore::new(),
            columns,
            generator: None,
        }
    }
}

/// Discriminator of a class hierarchy.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiscriminatorMapping {
    /// Discriminator attributes, including its column.
    pub attributes: AttributeStore<DiscriminatorAttr>,
}

impl DiscriminatorMapping {
    /// Discriminator stored in `column`.
    #[must_use]
    pub fn on_column(column: &str) -> Self {
        let mut attributes = AttributeStore::new();
        attributes.set(DiscriminatorAttr::Column, column);
        Self { attributes }
    }

    /// Resolved discriminator column.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.attributes.text(DiscriminatorAttr::Column)
    }
}

/// A scalar property.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyMapping {
    /// Property name.
    pub name: String,
    /// Value type of the property, as reported by the builder.
    pub value_type: Option<String>,
    /// Property attributes.
    pub attributes: AttributeStore<PropertyAttr>,
    /// Columns in declaration order.
    pub columns: Vec<ColumnMapping>,
}

impl PropertyMapping {
    /// Property without columns.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: None,
            attributes: AttributeStore::new(),
            columns: Vec::new(),
        }
    }

    /// Find a column by resolved name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnMapping> {
        self.columns.iter().find(|column| column.name() == Some(name))
    }

    /// Whether the property is computed from a formula.
    #[must_use]
    pub fn is_formula(&self) -> bool {
        self.attributes.is_set(PropertyAttr::Formula)
    }
}

/// A many-to-one reference to another entity.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceMapping {
    /// Reference property name.
    pub name: String,
    /// Reference attributes; `class` defaults to the target entity.
    pub attributes: AttributeStore<ReferenceAttr>,
    /// Foreign key columns.
    pub columns: Vec<ColumnMapping>,
}

impl ReferenceMapping {
    /// Reference to `target` whose foreign key column defaults to `<name>_id`.
    #[must_use]
    pub fn new(name: impl Into<String>, target: &str) -> Self {
        let property = name.into();
        let mut attributes = AttributeStore::new();
        attributes.set_default(ReferenceAttr::Class, target);
        let columns = vec![ColumnMapping::implicit(&format!("{property}_id"))];
        Self {
            name: property,
            attributes,
            columns,
        }
    }

    /// Resolved target entity.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.attributes.text(ReferenceAttr::Class)
    }
}
