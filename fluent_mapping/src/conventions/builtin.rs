//! Ready-made conventions for common naming and sizing rules.

use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

use crate::attributes::{AttributeValue, Layer};
use crate::builder::Cascade;
use crate::model::{
    ClassAttr, ClassMapping, ColumnAttr, ColumnMapping, HibernateMapping, MappingAttr, NodeKind,
};

use super::{Convention, ConventionContext};

/// Case transformation applied to generated names.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NameCase {
    /// Keep the name as written.
    #[default]
    AsIs,
    /// `order_line`
    SnakeCase,
    /// `ORDER_LINE`
    ShoutySnakeCase,
    /// `orderLine`
    LowerCamelCase,
    /// `OrderLine`
    UpperCamelCase,
}

impl NameCase {
    /// Transform `name`.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::AsIs => name.to_owned(),
            Self::SnakeCase => name.to_snake_case(),
            Self::ShoutySnakeCase => name.to_shouty_snake_case(),
            Self::LowerCamelCase => name.to_lower_camel_case(),
            Self::UpperCamelCase => name.to_upper_camel_case(),
        }
    }
}

/// Names class tables after the entity, with an optional prefix.
#[derive(Clone, Debug, Default)]
pub struct TableName {
    case: NameCase,
    prefix: String,
}

impl TableName {
    /// Table names in the given case.
    #[must_use]
    pub const fn new(case: NameCase) -> Self {
        Self {
            case,
            prefix: String::new(),
        }
    }

    /// Prepend `prefix` to every table name.
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        prefix.clone_into(&mut self.prefix);
        self
    }
}

impl Convention<ClassMapping> for TableName {
    fn supply(
        &self,
        node: &ClassMapping,
        attribute: ClassAttr,
        _cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue> {
        (attribute == ClassAttr::Table)
            .then(|| format!("{}{}", self.prefix, self.case.apply(&node.name)).into())
    }
}

/// Renames implicit columns. Columns named explicitly are left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnName {
    case: NameCase,
}

impl ColumnName {
    /// Column names in the given case.
    #[must_use]
    pub const fn new(case: NameCase) -> Self {
        Self { case }
    }
}

impl Convention<ColumnMapping> for ColumnName {
    fn accepts(&self, node: &ColumnMapping, _cx: &ConventionContext<'_>) -> bool {
        node.attributes.layer_of(ColumnAttr::Name) == Some(Layer::Default)
    }

    fn supply(
        &self,
        node: &ColumnMapping,
        attribute: ColumnAttr,
        _cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue> {
        if attribute != ColumnAttr::Name {
            return None;
        }
        let current = node.attributes.get_layer(ColumnAttr::Name, Layer::Default)?;
        Some(self.case.apply(&current.to_string()).into())
    }
}

/// Names implicit foreign key columns after the entity or member they
/// point at, followed by a suffix.
///
/// Collection keys use the owning class, many-to-many child columns use the
/// child class, and references use the reference name.
#[derive(Clone, Debug)]
pub struct ForeignKeyColumn {
    suffix: String,
    case: NameCase,
}

impl ForeignKeyColumn {
    /// Foreign key columns ending in `suffix`.
    #[must_use]
    pub fn suffix(suffix: &str) -> Self {
        Self {
            suffix: suffix.to_owned(),
            case: NameCase::AsIs,
        }
    }

    /// Apply `case` to the whole column name.
    #[must_use]
    pub const fn with_case(mut self, case: NameCase) -> Self {
        self.case = case;
        self
    }

    fn base<'a>(cx: &ConventionContext<'a>) -> Option<&'a str> {
        match cx.parent? {
            NodeKind::Key => Some(cx.class),
            NodeKind::ManyToMany => cx.target,
            NodeKind::Reference => cx.member,
            _ => None,
        }
    }
}

impl Convention<ColumnMapping> for ForeignKeyColumn {
    fn accepts(&self, node: &ColumnMapping, cx: &ConventionContext<'_>) -> bool {
        node.attributes.layer_of(ColumnAttr::Name) == Some(Layer::Default)
            && Self::base(cx).is_some()
    }

    fn supply(
        &self,
        _node: &ColumnMapping,
        attribute: ColumnAttr,
        cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue> {
        if attribute != ColumnAttr::Name {
            return None;
        }
        let base = Self::base(cx)?;
        Some(self.case.apply(&format!("{base}{}", self.suffix)).into())
    }
}

/// Gives the columns of text properties a length.
#[derive(Clone, Copy, Debug)]
pub struct StringLength(pub u32);

impl StringLength {
    fn is_text(value_type: &str) -> bool {
        let inner = value_type
            .strip_prefix("core::option::Option<")
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap_or(value_type);
        matches!(
            inner,
            "alloc::string::String" | "&str" | "alloc::borrow::Cow<str>"
        )
    }
}

impl Convention<ColumnMapping> for StringLength {
    fn accepts(&self, _node: &ColumnMapping, cx: &ConventionContext<'_>) -> bool {
        cx.parent == Some(NodeKind::Property) && cx.value_type.is_some_and(Self::is_text)
    }

    fn supply(
        &self,
        _node: &ColumnMapping,
        attribute: ColumnAttr,
        _cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue> {
        (attribute == ColumnAttr::Length).then_some(AttributeValue::from(self.0))
    }
}

/// Sets the mapping-wide default cascade.
#[derive(Clone, Copy, Debug)]
pub struct DefaultCascade(pub Cascade);

impl Convention<HibernateMapping> for DefaultCascade {
    fn supply(
        &self,
        _node: &HibernateMapping,
        attribute: MappingAttr,
        _cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue> {
        (attribute == MappingAttr::DefaultCascade).then(|| self.0.into())
    }
}
