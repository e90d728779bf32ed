//! Parsing of the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod inspect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};
pub(crate) use inspect_struct::InspectStruct;
