//! Unit tests for convention registration and application.

use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};

use super::{
    ColumnName, Convention, ConventionContext, Conventions, DefaultCascade, ForeignKeyColumn,
    NameCase, StringLength, TableName, apply, attribute, when,
};
use crate::attributes::{AttributeValue, Layer};
use crate::builder::{Cascade, ClassMap};
use crate::model::{
    ClassAttr, ClassMapping, CollectionContents, ColumnAttr, ColumnMapping, HibernateMapping,
    MappingAttr, NodeKind,
};
use crate::Entity;

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct OrderLine {
    id: i32,
    description: String,
    quantity: u32,
    product: Option<Product>,
    tags: Vec<Product>,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Product {
    id: i32,
}

#[fixture]
fn mapping() -> HibernateMapping {
    let mut map = ClassMap::<OrderLine>::new();
    map.id(|p| p.id);
    map.map(|p| p.description);
    map.map(|p| p.quantity).column("qty");
    map.references(|p| p.product);
    map.has_many_to_many(|p| p.tags);
    let mut mapping = HibernateMapping::new();
    mapping.classes.push(map.into_mapping());
    mapping
}

fn class(mapping: &HibernateMapping) -> &ClassMapping {
    mapping.class("OrderLine").expect("class is registered")
}

fn first_column(columns: &[ColumnMapping]) -> Option<&str> {
    columns.first().and_then(ColumnMapping::name)
}

#[rstest]
fn table_name_convention_fills_the_convention_layer(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions.add(TableName::new(NameCase::SnakeCase).with_prefix("tbl_"));
    apply(&conventions, &mut mapping);

    let attributes = &class(&mapping).attributes;
    assert_eq!(attributes.text(ClassAttr::Table), Some("tbl_order_line"));
    assert_eq!(attributes.layer_of(ClassAttr::Table), Some(Layer::Convention));
}

#[rstest]
fn explicit_values_survive_conventions(mut mapping: HibernateMapping) {
    if let Some(class) = mapping.classes.first_mut() {
        class.attributes.set(ClassAttr::Table, "lines");
    }
    let mut conventions = Conventions::new();
    conventions.add(TableName::new(NameCase::SnakeCase));
    apply(&conventions, &mut mapping);
    assert_eq!(class(&mapping).attributes.text(ClassAttr::Table), Some("lines"));
}

#[rstest]
fn first_registered_convention_wins(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions
        .add(attribute(ClassAttr::BatchSize, |_class, _cx| Some(10_u32.into())))
        .add(attribute(ClassAttr::BatchSize, |_class, _cx| Some(20_u32.into())));
    apply(&conventions, &mut mapping);
    assert_eq!(
        class(&mapping).attributes.number(ClassAttr::BatchSize),
        Some(10)
    );
}

#[rstest]
fn declining_conventions_defer_to_later_ones(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions
        .add(attribute(ClassAttr::BatchSize, |_class, _cx| None))
        .add(attribute(ClassAttr::BatchSize, |_class, _cx| Some(20_u32.into())));
    apply(&conventions, &mut mapping);
    assert_eq!(
        class(&mapping).attributes.number(ClassAttr::BatchSize),
        Some(20)
    );
}

#[rstest]
fn column_name_only_touches_implicit_columns(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions.add(ColumnName::new(NameCase::ShoutySnakeCase));
    apply(&conventions, &mut mapping);

    let class = class(&mapping);
    let description = class.property("description").expect("mapped");
    assert_eq!(first_column(&description.columns), Some("DESCRIPTION"));
    let quantity = class.property("quantity").expect("mapped");
    assert_eq!(first_column(&quantity.columns), Some("qty"));
}

#[rstest]
fn foreign_key_columns_follow_their_owner(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions.add(ForeignKeyColumn::suffix("Id"));
    apply(&conventions, &mut mapping);

    let class = class(&mapping);
    let product = class.reference("product").expect("mapped");
    assert_eq!(first_column(&product.columns), Some("productId"));

    let tags = class.collection("tags").expect("mapped");
    assert_eq!(first_column(&tags.key.columns), Some("OrderLineId"));
    let Some(CollectionContents::ManyToMany(contents)) = &tags.contents else {
        panic!("expected many-to-many contents");
    };
    assert_eq!(first_column(&contents.columns), Some("ProductId"));

    let description = class.property("description").expect("mapped");
    assert_eq!(first_column(&description.columns), Some("description"));
}

#[rstest]
fn string_length_targets_text_properties(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions.add(StringLength(255));
    apply(&conventions, &mut mapping);

    let class = class(&mapping);
    let length = |name: &str| {
        class
            .property(name)
            .and_then(|p| p.columns.first())
            .and_then(|c| c.attributes.number(ColumnAttr::Length))
    };
    assert_eq!(length("description"), Some(255));
    assert_eq!(length("quantity"), None);
}

#[rstest]
fn root_conventions_apply_to_the_mapping(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions.add(DefaultCascade(Cascade::SaveUpdate));
    apply(&conventions, &mut mapping);
    assert_eq!(
        mapping.attributes.text(MappingAttr::DefaultCascade),
        Some("save-update")
    );
}

#[rstest]
fn predicates_limit_where_conventions_run(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions.add(when(
        |_column: &ColumnMapping, cx: &ConventionContext<'_>| cx.member == Some("quantity"),
        attribute(ColumnAttr::NotNull, |_column, _cx| Some(true.into())),
    ));
    apply(&conventions, &mut mapping);

    let class = class(&mapping);
    let not_null = |name: &str| {
        class
            .property(name)
            .and_then(|p| p.columns.first())
            .and_then(|c| c.attributes.flag(ColumnAttr::NotNull))
    };
    assert_eq!(not_null("quantity"), Some(true));
    assert_eq!(not_null("description"), None);
}

struct Recorder(Arc<Mutex<Vec<(NodeKind, Option<NodeKind>, Option<String>)>>>);

impl Convention<ColumnMapping> for Recorder {
    fn accepts(&self, _node: &ColumnMapping, cx: &ConventionContext<'_>) -> bool {
        if let Ok(mut seen) = self.0.lock() {
            seen.push((NodeKind::Column, cx.parent, cx.member.map(str::to_owned)));
        }
        false
    }

    fn supply(
        &self,
        _node: &ColumnMapping,
        _attribute: ColumnAttr,
        _cx: &ConventionContext<'_>,
    ) -> Option<AttributeValue> {
        None
    }
}

#[rstest]
fn context_reports_the_owner_of_each_column(mut mapping: HibernateMapping) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut conventions = Conventions::new();
    conventions.add(Recorder(Arc::clone(&seen)));
    apply(&conventions, &mut mapping);

    let recorded = seen.lock().expect("recorder lock");
    let parents: Vec<_> = recorded
        .iter()
        .map(|(_, parent, member)| (*parent, member.as_deref()))
        .collect();
    assert_eq!(
        parents,
        [
            (Some(NodeKind::Id), Some("id")),
            (Some(NodeKind::Property), Some("description")),
            (Some(NodeKind::Property), Some("quantity")),
            (Some(NodeKind::Reference), Some("product")),
            (Some(NodeKind::Key), Some("tags")),
            (Some(NodeKind::ManyToMany), Some("tags")),
        ]
    );
}

#[rstest]
fn applying_twice_is_stable(mut mapping: HibernateMapping) {
    let mut conventions = Conventions::new();
    conventions
        .add(ColumnName::new(NameCase::SnakeCase))
        .add(StringLength(100))
        .add(TableName::new(NameCase::SnakeCase));
    apply(&conventions, &mut mapping);
    let once = mapping.clone();
    apply(&conventions, &mut mapping);
    assert_eq!(once, mapping);
}
