//! Fluent builders that assemble the mapping model.
//!
//! A [`ClassMap`] collects member parts as the user configures them. Nothing
//! is turned into model nodes until the class is resolved, which lets later
//! calls refine or replace earlier ones.

mod class_map;
mod collection;
mod columns;
mod discriminator;
mod entity;
mod id;
mod members;
mod options;
mod property;
mod reference;
mod subclass;

pub use class_map::{ClassMap, ClassSource};
pub use collection::CollectionPart;
pub use discriminator::DiscriminatorPart;
pub use entity::{Collection, Entity, Property, Referenced};
pub use id::IdPart;
pub use options::{Access, Cascade, Fetch, IdGenerator, NotFound};
pub use property::PropertyPart;
pub use reference::ReferencePart;
pub use subclass::SubclassMap;

/// Expands to the member-declaring methods shared by class and subclass maps.
macro_rules! member_builders {
    ($entity:ident, $($members:ident).+) => {
        /// Map a scalar property. Its column defaults to the property name.
        pub fn map<T>(
            &mut self,
            select: impl FnOnce(<$entity as $crate::builder::Entity>::Properties)
                -> $crate::builder::Property<$entity, T>,
        ) -> &mut $crate::builder::PropertyPart {
            let property = select(<$entity as $crate::builder::Entity>::properties());
            self.$($members).+.property($crate::builder::PropertyPart::new(
                property.name(),
                Some(property.value_type()),
            ))
        }

        /// Map a many-to-one reference to the entity held by the field.
        pub fn references<T: $crate::builder::Referenced>(
            &mut self,
            select: impl FnOnce(<$entity as $crate::builder::Entity>::Properties)
                -> $crate::builder::Property<$entity, T>,
        ) -> &mut $crate::builder::ReferencePart {
            let property = select(<$entity as $crate::builder::Entity>::properties());
            self.$($members).+.reference($crate::builder::ReferencePart::new(
                property.name(),
                <T::Target as $crate::builder::Entity>::NAME,
            ))
        }

        /// Map a one-to-many collection, stored as a bag unless reshaped.
        pub fn has_many<T: $crate::builder::Collection>(
            &mut self,
            select: impl FnOnce(<$entity as $crate::builder::Entity>::Properties)
                -> $crate::builder::Property<$entity, T>,
        ) -> &mut $crate::builder::CollectionPart {
            let property = select(<$entity as $crate::builder::Entity>::properties());
            self.$($members).+.collection($crate::builder::CollectionPart::one_to_many(
                property.name(),
                <T::Item as $crate::builder::Entity>::NAME,
            ))
        }

        /// Map a many-to-many collection through a join table, stored as a
        /// bag unless reshaped.
        pub fn has_many_to_many<T: $crate::builder::Collection>(
            &mut self,
            select: impl FnOnce(<$entity as $crate::builder::Entity>::Properties)
                -> $crate::builder::Property<$entity, T>,
        ) -> &mut $crate::builder::CollectionPart {
            let property = select(<$entity as $crate::builder::Entity>::properties());
            self.$($members).+.collection($crate::builder::CollectionPart::many_to_many(
                property.name(),
                <T::Item as $crate::builder::Entity>::NAME,
            ))
        }
    };
}

pub(crate) use member_builders;
