//! Tests for document emission and validation.

use rstest::rstest;

use super::{EmitOptions, MAPPING_NAMESPACE, emit};
use crate::builder::{ClassMap, IdGenerator};
use crate::document::Document;
use crate::error::MappingError;
use crate::model::{
    ClassMapping, CollectionKind, CollectionMapping, ColumnMapping, HibernateMapping, IdMapping,
    MappingAttr, PropertyMapping,
};
use crate::Entity;

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Record {
    id: i32,
    name: String,
    age: i32,
    owner: Option<Owner>,
    notes: Vec<Note>,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Owner {
    id: i32,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Note {
    id: i32,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Shape {
    id: i32,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Circle {
    radius: f64,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Square {
    side: f64,
}

fn emit_classes(
    classes: impl IntoIterator<Item = ClassMapping>,
) -> Result<Document, MappingError> {
    let mut mapping = HibernateMapping::new();
    mapping.classes.extend(classes);
    emit(&mapping, &EmitOptions::default())
}

fn record() -> ClassMap<Record> {
    let mut map = ClassMap::<Record>::new();
    map.id(|p| p.id);
    map
}

#[rstest]
fn root_carries_namespace_then_attributes() {
    let mut mapping = HibernateMapping::new();
    mapping.attributes.set(MappingAttr::DefaultLazy, false);
    mapping.attributes.set(MappingAttr::Schema, "dbo");
    let document = emit(&mapping, &EmitOptions::default()).expect("empty mapping emits");
    let names: Vec<_> = document.root().attributes().map(|a| a.name()).collect();
    assert_eq!(names, ["xmlns", "schema", "default-lazy"]);
    assert_eq!(document.root().attribute("xmlns"), Some(MAPPING_NAMESPACE));
    assert_eq!(document.root().attribute("default-lazy"), Some("false"));
}

#[rstest]
fn class_elements_follow_document_order() {
    let mut map = record();
    map.has_many(|p| p.notes);
    map.references(|p| p.owner);
    map.map(|p| p.name);
    let document = emit_classes([map.into_mapping()]).expect("valid mapping");
    let class = document.select("hibernate-mapping/class").expect("class");
    let order: Vec<_> = class.children().iter().map(|c| c.name()).collect();
    assert_eq!(order, ["id", "property", "many-to-one", "bag"]);
    assert_eq!(class.attribute("name"), Some("Record"));
    assert_eq!(class.attribute("table"), Some("Record"));
}

#[rstest]
fn lone_named_column_becomes_an_attribute() {
    let mut map = record();
    map.map(|p| p.name);
    let document = emit_classes([map.into_mapping()]).expect("valid mapping");
    let property = document
        .select("hibernate-mapping/class/property[@name='name']")
        .expect("property");
    assert_eq!(property.attribute("column"), Some("name"));
    assert!(property.children().is_empty());
}

#[rstest]
fn column_details_force_nested_columns() {
    let mut map = record();
    map.map(|p| p.name).column("full_name").length(100);
    let document = emit_classes([map.into_mapping()]).expect("valid mapping");
    let property = document
        .select("hibernate-mapping/class/property[@name='name']")
        .expect("property");
    assert!(!property.has_attribute("column"));
    let column = property.select("column").expect("nested column");
    let attributes: Vec<_> = column.attributes().map(|a| (a.name(), a.value())).collect();
    assert_eq!(attributes, [("name", "full_name"), ("length", "100")]);
}

#[rstest]
#[case(true, 0)]
#[case(false, 1)]
fn shorthand_can_be_disabled(#[case] shorthand: bool, #[case] nested: usize) {
    let mut map = record();
    map.map(|p| p.age);
    let mut mapping = HibernateMapping::new();
    mapping.classes.push(map.into_mapping());
    let options = EmitOptions::new().with_column_shorthand(shorthand);
    let document = emit(&mapping, &options).expect("valid mapping");
    assert_eq!(
        document
            .select_all("hibernate-mapping/class/property/column")
            .len(),
        nested
    );
}

#[rstest]
fn generator_params_are_nested() {
    let mut map = ClassMap::<Record>::new();
    map.id(|p| p.id)
        .generated_by(IdGenerator::Sequence("record_seq".to_owned()));
    let document = emit_classes([map.into_mapping()]).expect("valid mapping");
    let generator = document
        .select("hibernate-mapping/class/id/generator")
        .expect("generator");
    assert_eq!(generator.attribute("class"), Some("sequence"));
    let param = generator.select("param[@name='sequence']").expect("param");
    assert_eq!(param.text(), Some("record_seq"));
}

#[rstest]
fn collections_nest_key_and_contents() {
    let mut map = record();
    map.has_many(|p| p.notes).as_list();
    let document = emit_classes([map.into_mapping()]).expect("valid mapping");
    let list = document.select("hibernate-mapping/class/list").expect("list");
    let order: Vec<_> = list.children().iter().map(|c| c.name()).collect();
    assert_eq!(order, ["key", "index", "one-to-many"]);
    assert_eq!(
        list.select("key").and_then(|k| k.attribute("column")),
        Some("Record_id")
    );
    assert_eq!(
        list.select("one-to-many").and_then(|c| c.attribute("class")),
        Some("Note")
    );
}

#[rstest]
fn subclasses_nest_with_discriminator_values() {
    let mut map = ClassMap::<Shape>::new();
    map.id(|p| p.id);
    map.discriminate_subclasses_on_column("kind")
        .subclass::<Circle>(|circle| {
            circle.map(|p| p.radius);
        })
        .subclass_with_value::<Square>("SQ", |square| {
            square.map(|p| p.side);
        });
    let document = emit_classes([map.into_mapping()]).expect("valid mapping");
    let discriminator = document
        .select("hibernate-mapping/class/discriminator")
        .expect("discriminator");
    assert_eq!(discriminator.attribute("column"), Some("kind"));
    let circle = document
        .select("hibernate-mapping/class/subclass[@name='Circle']")
        .expect("circle");
    assert_eq!(circle.attribute("discriminator-value"), Some("Circle"));
    assert!(circle.select("property[@name='radius']").is_some());
    let square = document
        .select("hibernate-mapping/class/subclass[@name='Square']")
        .expect("square");
    assert_eq!(square.attribute("discriminator-value"), Some("SQ"));
}

#[rstest]
fn sibling_collision_names_both_subclasses() {
    let mut map = ClassMap::<Shape>::new();
    map.id(|p| p.id);
    map.discriminate_subclasses_on_column("kind")
        .subclass_with_value::<Circle>("X", |_| {})
        .subclass_with_value::<Square>("X", |_| {});
    let err = emit_classes([map.into_mapping()]).expect_err("collision");
    let MappingError::DiscriminatorCollision {
        column,
        value,
        first,
        second,
    } = &err
    else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(
        (column.as_str(), value.as_str(), first.as_str(), second.as_str()),
        ("kind", "X", "Circle", "Square")
    );
}

#[rstest]
fn subclasses_need_a_discriminator() {
    let mut map = ClassMap::<Shape>::new();
    map.id(|p| p.id);
    map.subclass::<Circle>(|_| {});
    let err = emit_classes([map.into_mapping()]).expect_err("no discriminator");
    assert!(matches!(err, MappingError::MissingDiscriminator { ref class } if class == "Shape"));
}

#[rstest]
fn every_problem_is_reported() {
    let mut broken = ClassMapping::new("Broken");
    broken.properties.push(PropertyMapping::new("Empty"));
    let mut unnamed = PropertyMapping::new("Unnamed");
    unnamed.columns.push(ColumnMapping::default());
    broken.properties.push(unnamed);
    broken
        .collections
        .push(CollectionMapping::new("Items", CollectionKind::Bag));

    let mut fine = ClassMapping::new("Fine");
    fine.id = Some(IdMapping::new("Id"));

    let err = emit_classes([broken, fine]).expect_err("invalid mapping");
    let kinds: Vec<_> = err
        .iter()
        .map(|e| match e {
            MappingError::MissingIdentity { .. } => "identity",
            MappingError::MissingColumns { .. } => "columns",
            MappingError::UnnamedColumn { .. } => "unnamed",
            MappingError::MissingContents { .. } => "contents",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, ["identity", "columns", "unnamed", "contents", "columns"]);
}

#[rstest]
fn formula_properties_need_no_columns() {
    let mut map = record();
    map.map(|p| p.age).formula("year(now()) - birth_year");
    let document = emit_classes([map.into_mapping()]).expect("valid mapping");
    let property = document
        .select("hibernate-mapping/class/property[@name='age']")
        .expect("property");
    assert_eq!(property.attribute("formula"), Some("year(now()) - birth_year"));
    assert!(!property.has_attribute("column"));
}

#[rstest]
fn formula_properties_reject_columns() {
    let mut map = record();
    map.map(|p| p.age).formula("year(now())").column("age_col");
    let err = emit_classes([map.into_mapping()]).expect_err("formula with a column");
    assert!(matches!(
        err,
        MappingError::FormulaWithColumns { ref owner, ref member }
            if owner == "Record" && member == "age"
    ));
}

#[rstest]
fn indent_width_is_carried_by_the_document() {
    let mapping = HibernateMapping::new();
    let document =
        emit(&mapping, &EmitOptions::new().with_indent_width(4)).expect("empty mapping emits");
    assert_eq!(document.indent_width(), 4);
}
