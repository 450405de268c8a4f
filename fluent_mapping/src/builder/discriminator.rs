//! Builder for class hierarchy discriminators.

use crate::attributes::AttributeStore;
use crate::model::DiscriminatorAttr;

use super::columns::Negation;
use super::entity::Entity;
use super::members::Members;
use super::subclass::SubclassMap;

/// Fluent configuration of a discriminator and the subclasses it selects.
///
/// Returned by `discriminate_subclasses_on_column`; it borrows the class map
/// it came from, so subclasses declared here land on that class.
#[derive(Debug)]
pub struct DiscriminatorPart<'a> {
    attributes: &'a mut AttributeStore<DiscriminatorAttr>,
    members: &'a mut Members,
    negation: Negation,
}

impl<'a> DiscriminatorPart<'a> {
    pub(crate) const fn new(
        attributes: &'a mut AttributeStore<DiscriminatorAttr>,
        members: &'a mut Members,
    ) -> Self {
        Self {
            attributes,
            members,
            negation: Negation::new(),
        }
    }

    /// Mapping type of the discriminator column.
    pub fn of_type(&mut self, type_name: &str) -> &mut Self {
        self.attributes.set(DiscriminatorAttr::Type, type_name);
        self
    }

    /// Length of the discriminator column.
    pub fn length(&mut self, length: u32) -> &mut Self {
        self.attributes.set(DiscriminatorAttr::Length, length);
        self
    }

    /// Invert the next boolean call.
    pub const fn not(&mut self) -> &mut Self {
        self.negation.toggle();
        self
    }

    /// Allow nulls in the discriminator column.
    pub fn nullable(&mut self) -> &mut Self {
        let not_null = self.negation.apply(false);
        self.attributes.set(DiscriminatorAttr::NotNull, not_null);
        self
    }

    /// Restrict loads of the root class to known discriminator values.
    pub fn always_select_with_value(&mut self) -> &mut Self {
        let force = self.negation.apply(true);
        self.attributes.set(DiscriminatorAttr::Force, force);
        self
    }

    /// Never write the discriminator column on insert.
    pub fn read_only(&mut self) -> &mut Self {
        let insert = self.negation.apply(false);
        self.attributes.set(DiscriminatorAttr::Insert, insert);
        self
    }

    /// Compute the discriminator from a SQL expression.
    pub fn formula(&mut self, expression: &str) -> &mut Self {
        self.attributes.set(DiscriminatorAttr::Formula, expression);
        self
    }

    /// Declare subclass `C`, discriminated by its type name.
    pub fn subclass<C: Entity>(&mut self, configure: impl FnOnce(&mut SubclassMap<C>)) -> &mut Self {
        let mut map = SubclassMap::<C>::new();
        configure(&mut map);
        self.members.subclass(map.into_part());
        self
    }

    /// Declare subclass `C` with an explicit discriminator value.
    pub fn subclass_with_value<C: Entity>(
        &mut self,
        value: &str,
        configure: impl FnOnce(&mut SubclassMap<C>),
    ) -> &mut Self {
        let mut map = SubclassMap::<C>::new();
        map.discriminator_value(value);
        configure(&mut map);
        self.members.subclass(map.into_part());
        self
    }
}
