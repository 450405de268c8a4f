//! Builder for subclasses.

use std::marker::PhantomData;

use crate::attributes::AttributeStore;
use crate::model::{SubclassAttr, SubclassMapping};

use super::columns::Negation;
use super::entity::Entity;
use super::members::Members;

/// Type-erased subclass configuration held by its parent.
#[derive(Clone, Debug)]
pub(crate) struct SubclassPart {
    name: &'static str,
    attributes: AttributeStore<SubclassAttr>,
    members: Members,
}

impl SubclassPart {
    pub(crate) const fn name(&self) -> &str {
        self.name
    }

    pub(crate) fn resolve(self) -> SubclassMapping {
        let mut subclass = SubclassMapping::new(self.name);
        self.attributes.copy_to(&mut subclass.attributes);
        let members = self.members.resolve();
        subclass.properties = members.properties;
        subclass.references = members.references;
        subclass.collections = members.collections;
        subclass.subclasses = members.subclasses;
        subclass
    }
}

/// Fluent configuration of subclass `C`.
///
/// Members declared here belong to `C` only. Nested subclasses are declared
/// with [`SubclassMap::subclass`] and keep their own members separate.
#[derive(Debug)]
pub struct SubclassMap<C: Entity> {
    part: SubclassPart,
    negation: Negation,
    entity: PhantomData<fn() -> C>,
}

impl<C: Entity> SubclassMap<C> {
    pub(crate) const fn new() -> Self {
        Self {
            part: SubclassPart {
                name: C::NAME,
                attributes: AttributeStore::new(),
                members: Members::new(C::NAME),
            },
            negation: Negation::new(),
            entity: PhantomData,
        }
    }

    pub(crate) fn into_part(self) -> SubclassPart {
        self.part
    }

    /// Discriminator value identifying rows of `C`.
    pub fn discriminator_value(&mut self, value: &str) -> &mut Self {
        self.part
            .attributes
            .set(SubclassAttr::DiscriminatorValue, value);
        self
    }

    /// Invert the next boolean call.
    pub const fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Load instances through proxies.
    pub fn lazy_load(&mut self) -> &mut Self {
        let lazy = self.negation.apply(true);
        self.part.attributes.set(SubclassAttr::Lazy, lazy);
        self
    }

    /// Only update changed columns.
    pub fn dynamic_update(&mut self) -> &mut Self {
        let dynamic = self.negation.apply(true);
        self.part.attributes.set(SubclassAttr::DynamicUpdate, dynamic);
        self
    }

    /// Only insert non-null columns.
    pub fn dynamic_insert(&mut self) -> &mut Self {
        let dynamic = self.negation.apply(true);
        self.part.attributes.set(SubclassAttr::DynamicInsert, dynamic);
        self
    }

    /// Mark `C` as abstract.
    pub fn abstract_class(&mut self) -> &mut Self {
        let is_abstract = self.negation.apply(true);
        self.part.attributes.set(SubclassAttr::Abstract, is_abstract);
        self
    }

    /// Declare a nested subclass of `C`.
    pub fn subclass<D: Entity>(&mut self, configure: impl FnOnce(&mut SubclassMap<D>)) -> &mut Self {
        let mut map = SubclassMap::<D>::new();
        configure(&mut map);
        self.part.members.subclass(map.into_part());
        self
    }

    /// Declare a nested subclass of `C` with an explicit discriminator value.
    pub fn subclass_with_value<D: Entity>(
        &mut self,
        value: &str,
        configure: impl FnOnce(&mut SubclassMap<D>),
    ) -> &mut Self {
        let mut map = SubclassMap::<D>::new();
        map.discriminator_value(value);
        configure(&mut map);
        self.part.members.subclass(map.into_part());
        self
    }

    super::member_builders!(C, part.members);
}
