//! Convention pass: rules that fill in attributes the user left unset.
//!
//! A [`Convention`] targets one kind of node. For each attribute key that
//! has no explicit value, the pass asks the registered conventions in
//! registration order and writes the first value supplied into the
//! convention layer. Explicit values are never overwritten.
//!
//! Conventions live in a [`Conventions`] registry owned by a
//! [`PersistenceModel`](crate::PersistenceModel); there is no global state.

mod apply;
mod builtin;
mod registry;

use std::fmt;
use std::marker::PhantomData;

use crate::attributes::AttributeValue;
use crate::model::{MappingNode, NodeAttribute, NodeKind};

pub use apply::apply;
pub(crate) use apply::ConventionPass;
pub use builtin::{ColumnName, DefaultCascade, ForeignKeyColumn, NameCase, StringLength, TableName};
pub use registry::{ConventionTarget, Conventions};

/// Where in the tree a node sits while conventions run.
#[derive(Clone, Copy, Debug)]
pub struct ConventionContext<'a> {
    /// Class or subclass that declares the node.
    pub class: &'a str,
    /// Property, reference, or collection the node belongs to.
    pub member: Option<&'a str>,
    /// Kind of the node owning this one, such as a key owning a column.
    pub parent: Option<NodeKind>,
    /// Value type of the owning property or identifier, when known.
    pub value_type: Option<&'a str>,
    /// Entity at the other end of a reference or collection.
    pub target: Option<&'a str>,
    /// Subclass nesting depth; zero for a root class.
    pub depth: usize,
}

impl ConventionContext<'_> {
    /// Context for the root node.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            class: "",
            member: None,
            parent: None,
            value_type: None,
            target: None,
            depth: 0,
        }
    }
}

/// A rule supplying attribute values for nodes of type `N`.
///
/// # Examples
///
/// ```
/// use fluent_mapping::attributes::AttributeValue;
/// use fluent_mapping::conventions::{Convention, ConventionContext};
/// use fluent_mapping::model::{ClassAttr, ClassMapping};
///
/// struct LazyClasses;
///
/// impl Convention<ClassMapping> for LazyClasses {
///     fn supply(
///         &self,
///         _node: &ClassMapping,
///         attribute: ClassAttr,
///         _cx: &ConventionContext<'_>,
///     ) -> Option<AttributeValue> {
///         (attribute == ClassAttr::Lazy).then(|| true.into())
///     }
/// }
/// ```
pub trait Convention<N: MappingNode>: Send + Sync {
    /// Whether this convention applies to `node` at all.
    fn accepts(&self, node: &N, cx: &ConventionContext<'_>) -> bool {
        let _ = (node, cx);
        true
    }

    /// Value for `attribute`, or `None` to defer to later conventions.
    fn supply(
        &self,
        node: &N,
        attribute: N::Attr,
        cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue>;
}

/// Convention supplying one attribute from a closure.
pub struct AttributeConvention<A, F> {
    attribute: A,
    supply: F,
}

impl<A: fmt::Debug, F> fmt::Debug for AttributeConvention<A, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeConvention")
            .field("attribute", &self.attribute)
            .finish_non_exhaustive()
    }
}

impl<A, F> Convention<A::Node> for AttributeConvention<A, F>
where
    A: NodeAttribute,
    F: Fn(&A::Node, &ConventionContext<'_>) -> Option<AttributeValue> + Send + Sync,
{
    fn supply(
        &self,
        node: &A::Node,
        attribute: A,
        cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue> {
        if attribute == self.attribute {
            (self.supply)(node, cx)
        } else {
            None
        }
    }
}

/// Convention supplying `attribute` from `supply`.
///
/// # Examples
///
/// ```
/// use fluent_mapping::conventions::{self, Conventions};
/// use fluent_mapping::model::ColumnAttr;
///
/// let mut registry = Conventions::new();
/// registry.add(conventions::attribute(ColumnAttr::NotNull, |_column, _cx| {
///     Some(true.into())
/// }));
/// assert_eq!(registry.len(), 1);
/// ```
pub const fn attribute<A, F>(attribute: A, supply: F) -> AttributeConvention<A, F>
where
    A: NodeAttribute,
    F: Fn(&A::Node, &ConventionContext<'_>) -> Option<AttributeValue> + Send + Sync,
{
    AttributeConvention { attribute, supply }
}

/// Convention that only runs for nodes matching a predicate.
pub struct When<N, P, C> {
    predicate: P,
    convention: C,
    node: PhantomData<fn(&N)>,
}

impl<N, P, C: fmt::Debug> fmt::Debug for When<N, P, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("convention", &self.convention)
            .finish_non_exhaustive()
    }
}

impl<N, P, C> Convention<N> for When<N, P, C>
where
    N: MappingNode,
    P: Fn(&N, &ConventionContext<'_>) -> bool + Send + Sync,
    C: Convention<N>,
{
    fn accepts(&self, node: &N, cx: &ConventionContext<'_>) -> bool {
        (self.predicate)(node, cx) && self.convention.accepts(node, cx)
    }

    fn supply(
        &self,
        node: &N,
        attribute: N::Attr,
        cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue> {
        self.convention.supply(node, attribute, cx)
    }
}

/// Restrict `convention` to nodes for which `predicate` holds.
pub const fn when<N, P, C>(predicate: P, convention: C) -> When<N, P, C>
where
    N: MappingNode,
    P: Fn(&N, &ConventionContext<'_>) -> bool + Send + Sync,
    C: Convention<N>,
{
    When {
        predicate,
        convention,
        node: PhantomData,
    }
}

#[cfg(test)]
mod tests;
