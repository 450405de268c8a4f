//! Test helpers shared across the workspace.
//!
//! [`MappingTester`] compiles a class map and asserts on the emitted
//! document with element paths. [`text`] normalizes placeholders captured by
//! behaviour steps.

mod tester;
pub mod text;

pub use tester::MappingTester;
