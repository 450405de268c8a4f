//! Compile strongly typed entity mappings into `hibernate-mapping`
//! documents.
//!
//! Entities derive [`Entity`] to get typed property handles. A [`ClassMap`]
//! describes how one entity is stored: its identifier, properties,
//! references, collections, and subclasses. A [`PersistenceModel`] collects
//! class maps, runs [conventions](conventions) over them, and emits a
//! [`Document`].
//!
//! Every attribute in the mapping tree is resolved from three layers, in
//! decreasing precedence: values set explicitly through the builders, values
//! supplied by conventions, and built-in defaults.
//!
//! ```
//! use fluent_mapping::{ClassMap, Entity, PersistenceModel};
//!
//! #[derive(Entity)]
//! struct Record {
//!     id: i32,
//!     #[entity(name = "Name")]
//!     name: String,
//!     #[entity(name = "Age")]
//!     age: i32,
//! }
//!
//! let mut record = ClassMap::<Record>::new();
//! record.id(|p| p.id);
//! record.map(|p| p.name);
//! record.map(|p| p.age).not().nullable();
//!
//! let mut model = PersistenceModel::new();
//! model.add(record);
//! let document = model.compile().expect("mapping is valid");
//! let age = document
//!     .select("hibernate-mapping/class/property[@name='Age']/column")
//!     .expect("age column");
//! assert_eq!(age.attribute("not-null"), Some("true"));
//! ```

extern crate self as fluent_mapping;

pub mod attributes;
pub mod builder;
pub mod conventions;
pub mod document;
pub mod emit;
mod error;
pub mod model;
pub mod output;
pub mod persistence;
pub mod settings;
pub mod visit;

pub use attributes::{Attribute, AttributeStore, AttributeValue, Layer};
pub use builder::{ClassMap, Collection, Entity, Property, Referenced};
pub use document::{Document, Element};
pub use error::{AggregatedErrors, MappingError, MappingResult};
pub use fluent_mapping_macros::Entity;
pub use output::{DirectorySink, MappingSink};
pub use persistence::PersistenceModel;
pub use settings::MappingSettings;
