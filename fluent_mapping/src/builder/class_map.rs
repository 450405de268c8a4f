//! Builder for root classes.

use std::marker::PhantomData;

use crate::attributes::AttributeStore;
use crate::model::{ClassAttr, ClassMapping, DiscriminatorAttr, DiscriminatorMapping};

use super::columns::Negation;
use super::discriminator::DiscriminatorPart;
use super::entity::{Entity, Property};
use super::id::IdPart;
use super::members::Members;
use super::options::IdGenerator;
use super::subclass::SubclassMap;

/// Fluent mapping of entity `E` onto a table.
///
/// # Examples
///
/// ```
/// use fluent_mapping::{ClassMap, Entity};
///
/// #[derive(Entity)]
/// struct Record {
///     id: i32,
///     name: String,
/// }
///
/// let mut map = ClassMap::<Record>::new();
/// map.id(|p| p.id);
/// map.map(|p| p.name).length(100);
/// let class = map.into_mapping();
/// assert_eq!(class.name, "Record");
/// assert_eq!(class.properties.len(), 1);
/// ```
#[derive(Debug)]
pub struct ClassMap<E: Entity> {
    attributes: AttributeStore<ClassAttr>,
    id: Option<IdPart>,
    discriminator: Option<AttributeStore<DiscriminatorAttr>>,
    members: Members,
    negation: Negation,
    entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Default for ClassMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> ClassMap<E> {
    /// Start an empty mapping of `E`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: AttributeStore::new(),
            id: None,
            discriminator: None,
            members: Members::new(E::NAME),
            negation: Negation::new(),
            entity: PhantomData,
        }
    }

    /// Table the class is stored in. Defaults to the type name.
    pub fn table(&mut self, name: &str) -> &mut Self {
        self.attributes.set(ClassAttr::Table, name);
        self
    }

    /// Schema of the table.
    pub fn schema(&mut self, name: &str) -> &mut Self {
        self.attributes.set(ClassAttr::Schema, name);
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
        self.attributes.set(ClassAttr::Lazy, lazy);
        self
    }

    /// Prevent updates to instances; `not().read_only()` allows them.
    pub fn read_only(&mut self) -> &mut Self {
        let mutable = self.negation.apply(false);
        self.attributes.set(ClassAttr::Mutable, mutable);
        self
    }

    /// Only update changed columns.
    pub fn dynamic_update(&mut self) -> &mut Self {
        let dynamic = self.negation.apply(true);
        self.attributes.set(ClassAttr::DynamicUpdate, dynamic);
        self
    }

    /// Only insert non-null columns.
    pub fn dynamic_insert(&mut self) -> &mut Self {
        let dynamic = self.negation.apply(true);
        self.attributes.set(ClassAttr::DynamicInsert, dynamic);
        self
    }

    /// Number of instances loaded per batch.
    pub fn batch_size(&mut self, size: u32) -> &mut Self {
        self.attributes.set(ClassAttr::BatchSize, size);
        self
    }

    /// SQL restriction applied when loading.
    pub fn where_clause(&mut self, clause: &str) -> &mut Self {
        self.attributes.set(ClassAttr::Where, clause);
        self
    }

    /// Optimistic locking mode such as `version` or `dirty`.
    pub fn optimistic_lock(&mut self, mode: &str) -> &mut Self {
        self.attributes.set(ClassAttr::OptimisticLock, mode);
        self
    }

    /// Discriminator value of the root class itself.
    pub fn discriminator_value(&mut self, value: &str) -> &mut Self {
        self.attributes.set(ClassAttr::DiscriminatorValue, value);
        self
    }

    /// Map the identifier. A second call replaces the first.
    pub fn id<T>(
        &mut self,
        select: impl FnOnce(E::Properties) -> Property<E, T>,
    ) -> &mut IdPart {
        let property = select(E::properties());
        self.id
            .insert(IdPart::new(property.name(), property.value_type()))
    }

    /// Map the identifier onto `column` using an identity generator.
    pub fn use_identity_for_key<T>(
        &mut self,
        select: impl FnOnce(E::Properties) -> Property<E, T>,
        column: &str,
    ) -> &mut IdPart {
        self.id(select)
            .column(column)
            .generated_by(IdGenerator::Identity)
    }

    /// Store subclasses in this table, told apart by `column`.
    pub fn discriminate_subclasses_on_column(&mut self, column: &str) -> DiscriminatorPart<'_> {
        let attributes = self.discriminator.get_or_insert_with(AttributeStore::new);
        attributes.set(DiscriminatorAttr::Column, column);
        DiscriminatorPart::new(attributes, &mut self.members)
    }

    /// Declare subclass `C` outside a discriminator call. The class still
    /// needs a discriminator before it can be emitted.
    pub fn subclass<C: Entity>(&mut self, configure: impl FnOnce(&mut SubclassMap<C>)) -> &mut Self {
        let mut map = SubclassMap::<C>::new();
        configure(&mut map);
        self.members.subclass(map.into_part());
        self
    }

    super::member_builders!(E, members);

    /// Resolve every pending member and produce the class node.
    #[must_use]
    pub fn into_mapping(self) -> ClassMapping {
        let mut class = ClassMapping::new(E::NAME);
        self.attributes.copy_to(&mut class.attributes);
        class.id = self.id.map(IdPart::resolve);
        class.discriminator = self
            .discriminator
            .map(|attributes| DiscriminatorMapping { attributes });
        let members = self.members.resolve();
        class.properties = members.properties;
        class.references = members.references;
        class.collections = members.collections;
        class.subclasses = members.subclasses;
        tracing::debug!(
            class = E::NAME,
            properties = class.properties.len(),
            collections = class.collections.len(),
            subclasses = class.subclasses.len(),
            "resolved class map"
        );
        class
    }
}

/// Anything a persistence model can turn into a class node.
pub trait ClassSource {
    /// Name of the mapped entity.
    fn entity_name(&self) -> &str;

    /// Produce the class node, resolving any deferred configuration.
    fn into_mapping(self: Box<Self>) -> ClassMapping;
}

impl<E: Entity> ClassSource for ClassMap<E> {
    fn entity_name(&self) -> &str {
        E::NAME
    }

    fn into_mapping(self: Box<Self>) -> ClassMapping {
        Self::into_mapping(*self)
    }
}

impl ClassSource for ClassMapping {
    fn entity_name(&self) -> &str {
        &self.name
    }

    fn into_mapping(self: Box<Self>) -> ClassMapping {
        *self
    }
}
