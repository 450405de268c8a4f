//! Root, class, and subclass nodes.

use crate::attributes::AttributeStore;

use super::{
    ClassAttr, CollectionMapping, DiscriminatorMapping, IdMapping, MappingAttr, PropertyMapping,
    ReferenceMapping, SubclassAttr,
};

/// Root of a compiled mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HibernateMapping {
    /// Configuration-wide attributes such as `default-cascade`.
    pub attributes: AttributeStore<MappingAttr>,
    /// Root classes in registration order.
    pub classes: Vec<ClassMapping>,
}

impl HibernateMapping {
    /// Create an empty root.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: AttributeStore::new(),
            classes: Vec::new(),
        }
    }

    /// Find a root class by name.
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&ClassMapping> {
        self.classes.iter().find(|class| class.name == name)
    }
}

/// Mapping of a root entity type onto a table.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassMapping {
    /// Entity type name.
    pub name: String,
    /// Class attributes.
    pub attributes: AttributeStore<ClassAttr>,
    /// Identity mapping; required at emission.
    pub id: Option<IdMapping>,
    /// Discriminator; required when `subclasses` is not empty.
    pub discriminator: Option<DiscriminatorMapping>,
    /// Scalar properties in registration order.
    pub properties: Vec<PropertyMapping>,
    /// Many-to-one references in registration order.
    pub references: Vec<ReferenceMapping>,
    /// Collections in registration order.
    pub collections: Vec<CollectionMapping>,
    /// Direct subclasses in registration order.
    pub subclasses: Vec<SubclassMapping>,
}

impl ClassMapping {
    /// Create a class whose table defaults to the type name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let type_name = name.into();
        let mut attributes = AttributeStore::new();
        attributes.set_default(ClassAttr::Table, type_name.as_str());
        Self {
            name: type_name,
            attributes,
            id: None,
            discriminator: None,
            properties: Vec::new(),
            references: Vec::new(),
            collections: Vec::new(),
            subclasses: Vec::new(),
        }
    }

    /// Find a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyMapping> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Find a reference by name.
    #[must_use]
    pub fn reference(&self, name: &str) -> Option<&ReferenceMapping> {
        self.references.iter().find(|reference| reference.name == name)
    }

    /// Find a collection by name.
    #[must_use]
    pub fn collection(&self, name: &str) -> Option<&CollectionMapping> {
        self.collections
            .iter()
            .find(|collection| collection.name == name)
    }

    /// Find a direct subclass by name.
    #[must_use]
    pub fn subclass(&self, name: &str) -> Option<&SubclassMapping> {
        self.subclasses.iter().find(|subclass| subclass.name == name)
    }
}

/// Mapping of a derived entity type sharing its root class's table.
#[derive(Clone, Debug, PartialEq)]
pub struct SubclassMapping {
    /// Entity type name.
    pub name: String,
    /// Subclass attributes.
    pub attributes: AttributeStore<SubclassAttr>,
    /// Properties declared by this level only.
    pub properties: Vec<PropertyMapping>,
    /// References declared by this level only.
    pub references: Vec<ReferenceMapping>,
    /// Collections declared by this level only.
    pub collections: Vec<CollectionMapping>,
    /// Nested subclasses.
    pub subclasses: Vec<Self>,
}

impl SubclassMapping {
    /// Create a subclass whose discriminator value defaults to the type name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let type_name = name.into();
        let mut attributes = AttributeStore::new();
        attributes.set_default(SubclassAttr::DiscriminatorValue, type_name.as_str());
        Self {
            name: type_name,
            attributes,
            properties: Vec::new(),
            references: Vec::new(),
            collections: Vec::new(),
            subclasses: Vec::new(),
        }
    }

    /// Find a property declared at this level.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyMapping> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// Find a direct subclass by name.
    #[must_use]
    pub fn subclass(&self, name: &str) -> Option<&Self> {
        self.subclasses.iter().find(|subclass| subclass.name == name)
    }

    /// Resolved discriminator value.
    #[must_use]
    pub fn discriminator_value(&self) -> Option<&str> {
        self.attributes.text(SubclassAttr::DiscriminatorValue)
    }
}
