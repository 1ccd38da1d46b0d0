//! Section schema table and rule hooks

pub mod rules;
pub mod table;

pub use rules::{ItemRule, SectionRule};
pub use table::{
    ArrayFieldRule, ItemShape, SectionKind, SectionSchema, SPECIAL_SEQUENCE_NAMES,
};
