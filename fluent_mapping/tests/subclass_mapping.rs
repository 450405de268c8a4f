//! Integration tests for subclass hierarchies and discriminators.

use fluent_mapping::model::SubclassAttr;
use fluent_mapping::{ClassMap, Entity, MappingError, PersistenceModel};
use test_helpers::MappingTester;
use rstest::rstest;

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Vehicle {
    #[entity(name = "Id")]
    id: i32,
    #[entity(name = "Wheels")]
    wheels: u8,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Car {
    #[entity(name = "Doors")]
    doors: u8,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct SportsCar {
    #[entity(name = "TopSpeed")]
    top_speed: u16,
}

#[derive(Entity)]
#[expect(dead_code, reason = "entities are mapped, never constructed")]
struct Truck {
    #[entity(name = "Payload")]
    payload: u32,
}

fn vehicle(configure: impl FnOnce(&mut ClassMap<Vehicle>)) -> ClassMap<Vehicle> {
    let mut map = ClassMap::<Vehicle>::new();
    map.id(|p| p.id);
    map.map(|p| p.wheels);
    configure(&mut map);
    map
}

#[rstest]
fn three_levels_nest_with_their_own_properties() {
    let mut tester = MappingTester::for_model(|model| {
        model.add(vehicle(|map| {
            map.discriminate_subclasses_on_column("type")
                .subclass::<Car>(|car| {
                    car.map(|p| p.doors);
                    car.subclass::<SportsCar>(|sports| {
                        sports.map(|p| p.top_speed);
                    });
                });
        }));
    });
    tester
        .element("class/discriminator")
        .has_attribute("column", "type")
        .should_be_in_parent_at_position(1);
    tester
        .element("class/subclass[@name='Car']")
        .has_attribute("discriminator-value", "Car")
        .has_this_many_child_nodes(2);
    tester
        .element("class/subclass/property")
        .has_attribute("name", "Doors");
    tester
        .element("class/subclass/subclass[@name='SportsCar']/property")
        .has_attribute("name", "TopSpeed");
    tester
        .element("class/subclass/subclass/property[@name='Doors']")
        .doesnt_exist();
}

#[rstest]
fn subclass_options_are_emitted() {
    MappingTester::for_model(|model| {
        model.add(vehicle(|map| {
            map.discriminate_subclasses_on_column("type")
                .of_type("String")
                .length(20)
                .subclass_with_value::<Truck>("T", |truck| {
                    truck.abstract_class().not().lazy_load();
                    truck.map(|p| p.payload);
                });
        }));
    })
    .element("class/subclass[@name='Truck']")
    .has_attribute("discriminator-value", "T")
    .has_attribute("abstract", "true")
    .has_attribute("lazy", "false")
    .element("class/discriminator")
    .has_attribute("type", "String")
    .has_attribute("length", "20");
}

#[rstest]
fn explicit_values_replace_the_type_name() {
    let mut model = PersistenceModel::new();
    model.add(vehicle(|map| {
        map.discriminate_subclasses_on_column("type")
            .subclass::<Car>(|car| {
                car.discriminator_value("C");
            });
    }));
    model.apply_conventions();
    let class = model.mapping().class("Vehicle").expect("resolved");
    let car = class.subclass("Car").expect("subclass");
    assert_eq!(car.discriminator_value(), Some("C"));
    assert!(car.attributes.is_explicit(SubclassAttr::DiscriminatorValue));
}

#[rstest]
fn nested_collisions_are_reported() {
    let mut model = PersistenceModel::new();
    model.add(vehicle(|map| {
        map.discriminate_subclasses_on_column("type")
            .subclass::<Car>(|car| {
                car.subclass_with_value::<SportsCar>("X", |_| {})
                    .subclass_with_value::<Truck>("X", |_| {});
            });
    }));
    let err = model.compile().expect_err("collision");
    assert_eq!(
        err.to_string(),
        "discriminator value 'X' on column 'type' is claimed by both 'SportsCar' and 'Truck'"
    );
}

#[rstest]
fn values_may_repeat_across_levels() {
    MappingTester::for_model(|model| {
        model.add(vehicle(|map| {
            map.discriminate_subclasses_on_column("type")
                .subclass_with_value::<Car>("X", |car| {
                    car.subclass_with_value::<SportsCar>("X", |_| {});
                });
        }));
    })
    .element("class/subclass/subclass")
    .has_attribute("discriminator-value", "X");
}

#[rstest]
fn subclasses_without_a_discriminator_fail() {
    let mut model = PersistenceModel::new();
    model.add(vehicle(|map| {
        map.subclass::<Car>(|_| {});
    }));
    let err = model.compile().expect_err("no discriminator");
    assert!(
        matches!(err, MappingError::MissingDiscriminator { ref class } if class == "Vehicle"),
        "unexpected error: {err}"
    );
}

#[rstest]
fn redeclaring_a_subclass_replaces_it() {
    MappingTester::for_model(|model| {
        model.add(vehicle(|map| {
            map.discriminate_subclasses_on_column("type")
                .subclass::<Car>(|car| {
                    car.map(|p| p.doors);
                })
                .subclass_with_value::<Car>("C", |_| {});
        }));
    })
    .element("class/subclass[@name='Car']")
    .has_attribute("discriminator-value", "C")
    .has_this_many_child_nodes(0);
}
