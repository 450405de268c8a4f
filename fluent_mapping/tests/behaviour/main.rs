//! Behavioural tests for mapping compilation using `rstest-bdd`.
//!
//! Step implementations live in [`steps`]; the scenarios below bind the
//! feature file to the shared fixture.

mod steps;

use rstest_bdd_macros::scenarios;
use steps::{MappingContext, mapping_context};

scenarios!(
    "tests/features/mapping.feature",
    fixtures = [mapping_context: MappingContext]
);
