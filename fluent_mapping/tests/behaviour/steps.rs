//! Step definitions for mapping compilation scenarios.

use anyhow::{Result, anyhow, ensure};
use fluent_mapping::{ClassMap, Document, Entity, MappingError, PersistenceModel};
use test_helpers::text::unquote;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, then, when};

#[derive(Debug, Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
pub struct Record {
    id: i32,
    #[entity(name = "Name")]
    name: String,
    #[entity(name = "Age")]
    age: i32,
    #[entity(name = "Notes")]
    notes: Vec<Note>,
}

#[derive(Debug, Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
pub struct Note {
    id: i32,
}

#[derive(Debug, Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
pub struct Shape {
    id: i32,
    #[entity(name = "Colour")]
    colour: String,
}

#[derive(Debug, Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
pub struct Polygon {
    #[entity(name = "Sides")]
    sides: u32,
}

#[derive(Debug, Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
pub struct Circle {
    #[entity(name = "Radius")]
    radius: f64,
}

#[derive(Debug, Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
pub struct Square {
    #[entity(name = "Side")]
    side: f64,
}

/// Scenario state shared between mapping steps.
#[derive(Debug, Default, ScenarioState)]
pub struct MappingContext {
    pub record: Slot<ClassMap<Record>>,
    pub shape: Slot<ClassMap<Shape>>,
    pub result: Slot<Result<Document, MappingError>>,
}

/// Provides a clean context for each scenario.
#[fixture]
pub fn mapping_context() -> MappingContext {
    MappingContext::default()
}

fn update_record(
    context: &MappingContext,
    configure: impl FnOnce(&mut ClassMap<Record>) -> Result<()>,
) -> Result<()> {
    let mut map = context
        .record
        .take()
        .ok_or_else(|| anyhow!("no Record class map was started"))?;
    configure(&mut map)?;
    context.record.set(map);
    Ok(())
}

fn update_shape(
    context: &MappingContext,
    configure: impl FnOnce(&mut ClassMap<Shape>),
) -> Result<()> {
    let mut map = context
        .shape
        .take()
        .ok_or_else(|| anyhow!("no Shape class map was started"))?;
    configure(&mut map);
    context.shape.set(map);
    Ok(())
}

fn document(context: &MappingContext) -> Result<Document> {
    context
        .result
        .take()
        .ok_or_else(|| anyhow!("the model was not compiled"))?
        .map_err(|err| anyhow!("compilation failed: {err}"))
}

#[given("a class map for Record")]
fn record_map(mapping_context: &MappingContext) {
    let mut map = ClassMap::<Record>::new();
    map.id(|p| p.id);
    mapping_context.record.set(map);
}

#[given("a class map for Shape discriminated on {column}")]
fn shape_map(mapping_context: &MappingContext, column: String) {
    let mut map = ClassMap::<Shape>::new();
    map.id(|p| p.id);
    map.map(|p| p.colour);
    map.discriminate_subclasses_on_column(unquote(&column));
    mapping_context.shape.set(map);
}

#[given("the property {name} is mapped")]
fn map_property(mapping_context: &MappingContext, name: String) -> Result<()> {
    update_record(mapping_context, |map| {
        match unquote(&name) {
            "Name" => map.map(|p| p.name),
            "Age" => map.map(|p| p.age),
            other => return Err(anyhow!("Record has no property {other}")),
        };
        Ok(())
    })
}

#[given("the property {name} is mapped as not nullable")]
fn map_required_property(mapping_context: &MappingContext, name: String) -> Result<()> {
    update_record(mapping_context, |map| {
        let part = match unquote(&name) {
            "Name" => map.map(|p| p.name),
            "Age" => map.map(|p| p.age),
            other => return Err(anyhow!("Record has no property {other}")),
        };
        part.not().nullable();
        Ok(())
    })
}

#[given("the collection Notes is mapped as a bag and then reshaped as a set")]
fn reshape_notes(mapping_context: &MappingContext) -> Result<()> {
    update_record(mapping_context, |map| {
        map.has_many(|p| p.notes).as_bag().inverse().as_set();
        Ok(())
    })
}

#[given("the subclasses Circle and Square both claim the value {value}")]
fn colliding_subclasses(mapping_context: &MappingContext, value: String) -> Result<()> {
    let claimed = unquote(&value).to_owned();
    update_shape(mapping_context, |map| {
        map.discriminate_subclasses_on_column("kind")
            .subclass_with_value::<Circle>(&claimed, |circle| {
                circle.map(|p| p.radius);
            })
            .subclass_with_value::<Square>(&claimed, |square| {
                square.map(|p| p.side);
            });
    })
}

#[given("the subclass Polygon contains the subclass Square")]
fn nested_subclasses(mapping_context: &MappingContext) -> Result<()> {
    update_shape(mapping_context, |map| {
        map.discriminate_subclasses_on_column("kind")
            .subclass::<Polygon>(|polygon| {
                polygon.map(|p| p.sides);
                polygon.subclass::<Square>(|square| {
                    square.map(|p| p.side);
                });
            });
    })
}

#[when("the persistence model is compiled")]
fn compile(mapping_context: &MappingContext) {
    let mut model = PersistenceModel::new();
    if let Some(record) = mapping_context.record.take() {
        model.add(record);
    }
    if let Some(shape) = mapping_context.shape.take() {
        model.add(shape);
    }
    mapping_context.result.set(model.compile());
}

#[then("the property {name} has the column attribute {column}")]
fn property_column_attribute(
    mapping_context: &MappingContext,
    name: String,
    column: String,
) -> Result<()> {
    let document = document(mapping_context)?;
    let path = format!("hibernate-mapping/class/property[@name='{}']", unquote(&name));
    let property = document
        .select(&path)
        .ok_or_else(|| anyhow!("no property at {path}"))?;
    ensure!(
        property.attribute("column") == Some(unquote(&column)),
        "unexpected property element: {property:?}"
    );
    ensure!(property.children().is_empty(), "column should not be nested");
    mapping_context.result.set(Ok(document));
    Ok(())
}

#[then("the property {name} has a nested column {column} that is not nullable")]
fn property_required_column(
    mapping_context: &MappingContext,
    name: String,
    column: String,
) -> Result<()> {
    let document = document(mapping_context)?;
    let path = format!(
        "hibernate-mapping/class/property[@name='{}']/column",
        unquote(&name)
    );
    let columns = document.select_all(&path);
    ensure!(columns.len() == 1, "expected one column at {path}");
    let nested = columns
        .first()
        .ok_or_else(|| anyhow!("no column at {path}"))?;
    ensure!(nested.attribute("name") == Some(unquote(&column)));
    ensure!(nested.attribute("not-null") == Some("true"));
    Ok(())
}

#[then("the collection Notes is emitted as a {shape}")]
fn collection_shape(mapping_context: &MappingContext, shape: String) -> Result<()> {
    let document = document(mapping_context)?;
    let path = format!("hibernate-mapping/class/{}[@name='Notes']", unquote(&shape));
    ensure!(document.select(&path).is_some(), "no collection at {path}");
    mapping_context.result.set(Ok(document));
    Ok(())
}

#[then("no bag is emitted")]
fn no_bag(mapping_context: &MappingContext) -> Result<()> {
    let document = document(mapping_context)?;
    ensure!(
        document.select_all("hibernate-mapping/class/bag").is_empty(),
        "unexpected bag in\n{}",
        document.to_xml()
    );
    Ok(())
}

#[then("compilation fails naming {first} and {second}")]
fn compilation_fails(
    mapping_context: &MappingContext,
    first: String,
    second: String,
) -> Result<()> {
    let result = mapping_context
        .result
        .take()
        .ok_or_else(|| anyhow!("the model was not compiled"))?;
    let Err(err) = result else {
        return Err(anyhow!("compilation unexpectedly succeeded"));
    };
    let MappingError::DiscriminatorCollision {
        first: claimed_first,
        second: claimed_second,
        ..
    } = &err
    else {
        return Err(anyhow!("unexpected error: {err}"));
    };
    ensure!(claimed_first == unquote(&first));
    ensure!(claimed_second == unquote(&second));
    let message = err.to_string();
    ensure!(message.contains(unquote(&first)) && message.contains(unquote(&second)));
    Ok(())
}

#[then("the subclass {child} is nested inside {parent}")]
fn nested_inside(mapping_context: &MappingContext, child: String, parent: String) -> Result<()> {
    let document = document(mapping_context)?;
    let path = format!(
        "hibernate-mapping/class/subclass[@name='{}']/subclass[@name='{}']",
        unquote(&parent),
        unquote(&child)
    );
    let nested = document
        .select(&path)
        .ok_or_else(|| anyhow!("no subclass at {path}"))?;
    ensure!(nested.attribute("discriminator-value") == Some(unquote(&child)));
    mapping_context.result.set(Ok(document));
    Ok(())
}

#[then("every level of the hierarchy keeps its own property")]
fn level_properties(mapping_context: &MappingContext) -> Result<()> {
    let document = document(mapping_context)?;
    let levels = [
        ("hibernate-mapping/class", "Colour"),
        ("hibernate-mapping/class/subclass", "Sides"),
        ("hibernate-mapping/class/subclass/subclass", "Side"),
    ];
    for (level, property) in levels {
        let element = document
            .select(level)
            .ok_or_else(|| anyhow!("missing level {level}"))?;
        let names: Vec<_> = element
            .children_named("property")
            .filter_map(|p| p.attribute("name"))
            .collect();
        ensure!(names == [property], "{level} has properties {names:?}");
    }
    Ok(())
}
