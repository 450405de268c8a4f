//! Integration tests for conventions registered on a persistence model.

use fluent_mapping::builder::Cascade;
use fluent_mapping::conventions::{
    self, ConventionContext, DefaultCascade, ForeignKeyColumn, NameCase, StringLength, TableName,
};
use fluent_mapping::model::{
    ClassAttr, ClassMapping, CollectionAttr, ColumnAttr, ColumnMapping, PropertyAttr,
    PropertyMapping, ReferenceAttr,
};
use fluent_mapping::{ClassMap, Entity, MappingError, PersistenceModel};
use test_helpers::MappingTester;
use rstest::rstest;

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct OrderLine {
    #[entity(name = "Id")]
    id: i32,
    #[entity(name = "Description")]
    description: String,
    #[entity(name = "Quantity")]
    quantity: u32,
    #[entity(name = "Product")]
    product: Option<Product>,
    #[entity(name = "Discounts")]
    discounts: Vec<Discount>,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Product {
    #[entity(name = "Id")]
    id: i32,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Discount {
    #[entity(name = "Id")]
    id: i32,
}

fn order_line(map: &mut ClassMap<OrderLine>) {
    map.id(|p| p.id);
    map.map(|p| p.description);
    map.map(|p| p.quantity);
    map.references(|p| p.product);
    map.has_many(|p| p.discounts);
}

#[rstest]
fn builtin_conventions_fill_in_names() {
    let mut tester = MappingTester::for_model(|model| {
        model
            .add_convention(TableName::new(NameCase::SnakeCase))
            .add_convention(ForeignKeyColumn::suffix("_id").with_case(NameCase::SnakeCase))
            .add_convention(StringLength(250))
            .add_convention(DefaultCascade(Cascade::All));
        let mut map = ClassMap::<OrderLine>::new();
        order_line(&mut map);
        model.add(map);
    });
    tester.root_element().has_attribute("default-cascade", "all");
    tester.element("class").has_attribute("table", "order_line");
    tester
        .element("class/many-to-one[@name='Product']")
        .has_attribute("column", "product_id");
    tester
        .element("class/bag/key")
        .has_attribute("column", "order_line_id");
    tester
        .element("class/property[@name='Description']/column")
        .has_attribute("length", "250");
    tester
        .element("class/property[@name='Quantity']")
        .has_attribute("column", "Quantity");
}

#[rstest]
fn explicit_configuration_beats_conventions() {
    MappingTester::for_model(|model| {
        model.add_convention(TableName::new(NameCase::ShoutySnakeCase));
        model.add_convention(conventions::attribute(
            ReferenceAttr::Lazy,
            |_reference, _cx| Some(true.into()),
        ));
        let mut map = ClassMap::<OrderLine>::new();
        order_line(&mut map);
        map.table("lines");
        map.references(|p| p.product).not().lazy_load();
        model.add(map);
    })
    .element("class")
    .has_attribute("table", "lines")
    .element("class/many-to-one")
    .has_attribute("lazy", "false");
}

#[rstest]
fn first_registered_convention_wins() {
    MappingTester::for_model(|model| {
        model
            .add_convention(conventions::attribute(
                CollectionAttr::BatchSize,
                |_collection, _cx| Some(50_u32.into()),
            ))
            .add_convention(conventions::attribute(
                CollectionAttr::BatchSize,
                |_collection, _cx| Some(5_u32.into()),
            ));
        let mut map = ClassMap::<OrderLine>::new();
        order_line(&mut map);
        model.add(map);
    })
    .element("class/bag")
    .has_attribute("batch-size", "50");
}

#[rstest]
fn predicates_see_the_owning_member() {
    MappingTester::for_model(|model| {
        model.add_convention(conventions::when(
            |_column: &ColumnMapping, cx: &ConventionContext<'_>| cx.member == Some("Quantity"),
            conventions::attribute(ColumnAttr::Check, |_column, _cx| {
                Some("Quantity > 0".into())
            }),
        ));
        let mut map = ClassMap::<OrderLine>::new();
        order_line(&mut map);
        model.add(map);
    })
    .element("class/property[@name='Quantity']/column")
    .has_attribute("check", "Quantity > 0")
    .element("class/property[@name='Description']")
    .has_attribute("column", "Description");
}

#[rstest]
fn class_conventions_can_read_the_node() {
    MappingTester::for_model(|model| {
        model.add_convention(conventions::attribute(
            ClassAttr::BatchSize,
            |class: &ClassMapping, _cx| {
                let size = u32::try_from(class.properties.len()).unwrap_or(u32::MAX);
                Some(size.into())
            },
        ));
        let mut map = ClassMap::<OrderLine>::new();
        order_line(&mut map);
        model.add(map);
    })
    .element("class")
    .has_attribute("batch-size", "2");
}

#[rstest]
fn formula_supplied_by_a_convention_conflicts_with_columns() {
    let mut model = PersistenceModel::new();
    model.add_convention(conventions::when(
        |property: &PropertyMapping, _cx: &ConventionContext<'_>| {
            property.name == "Quantity"
        },
        conventions::attribute(PropertyAttr::Formula, |_property, _cx| {
            Some("(select 1)".into())
        }),
    ));
    let mut map = ClassMap::<OrderLine>::new();
    order_line(&mut map);
    model.add(map);

    let err = model.compile().expect_err("formula and implicit column");
    assert!(matches!(
        err,
        MappingError::FormulaWithColumns { ref owner, ref member }
            if owner == "OrderLine" && member == "Quantity"
    ));
}
