//! Registry of conventions grouped by the node kind they target.

use std::fmt;

use crate::model::{
    ClassMapping, CollectionMapping, ColumnMapping, DiscriminatorMapping, HibernateMapping,
    IdMapping, IndexMapping, KeyMapping, ManyToManyMapping, MappingNode, OneToManyMapping,
    PropertyMapping, ReferenceMapping, SubclassMapping,
};

use super::Convention;

type List<N> = Vec<Box<dyn Convention<N>>>;

/// Ordered conventions for every kind of node.
///
/// Registration order is significant: for each attribute, the first
/// convention that supplies a value wins.
#[derive(Default)]
pub struct Conventions {
    mapping: List<HibernateMapping>,
    class: List<ClassMapping>,
    subclass: List<SubclassMapping>,
    id: List<IdMapping>,
    discriminator: List<DiscriminatorMapping>,
    property: List<PropertyMapping>,
    column: List<ColumnMapping>,
    reference: List<ReferenceMapping>,
    collection: List<CollectionMapping>,
    key: List<KeyMapping>,
    index: List<IndexMapping>,
    one_to_many: List<OneToManyMapping>,
    many_to_many: List<ManyToManyMapping>,
}

/// Node kinds conventions can target.
pub trait ConventionTarget: MappingNode + Sized + 'static {
    /// Conventions registered for this kind.
    fn registered(conventions: &Conventions) -> &[Box<dyn Convention<Self>>];

    /// Mutable list of conventions for this kind.
    fn registered_mut(conventions: &mut Conventions) -> &mut Vec<Box<dyn Convention<Self>>>;
}

macro_rules! convention_target {
    ($($node:ty => $field:ident),+ $(,)?) => {
        $(
            impl ConventionTarget for $node {
                fn registered(conventions: &Conventions) -> &[Box<dyn Convention<Self>>] {
                    &conventions.$field
                }

                fn registered_mut(
                    conventions: &mut Conventions,
                ) -> &mut Vec<Box<dyn Convention<Self>>> {
                    &mut conventions.$field
                }
            }
        )+

        impl Conventions {
            /// Total number of registered conventions.
            #[must_use]
            pub fn len(&self) -> usize {
                0 $(+ self.$field.len())+
            }
        }
    };
}

convention_target! {
    HibernateMapping => mapping,
    ClassMapping => class,
    SubclassMapping => subclass,
    IdMapping => id,
    DiscriminatorMapping => discriminator,
    PropertyMapping => property,
    ColumnMapping => column,
    ReferenceMapping => reference,
    CollectionMapping => collection,
    KeyMapping => key,
    IndexMapping => index,
    OneToManyMapping => one_to_many,
    ManyToManyMapping => many_to_many,
}

impl Conventions {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a convention after those already present.
    ///
    /// The target node kind is inferred from the convention's
    /// [`Convention`] implementation.
    pub fn add<N, C>(&mut self, convention: C) -> &mut Self
    where
        N: ConventionTarget,
        C: Convention<N> + 'static,
    {
        N::registered_mut(self).push(Box::new(convention));
        self
    }

    /// Whether no conventions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Conventions registered for node kind `N`, in registration order.
    #[must_use]
    pub fn for_kind<N: ConventionTarget>(&self) -> &[Box<dyn Convention<N>>] {
        N::registered(self)
    }
}

impl fmt::Debug for Conventions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conventions")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
