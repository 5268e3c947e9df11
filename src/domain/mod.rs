//! Domain layer: value objects and entities with no I/O of their own.

pub mod entities;
pub mod value_objects;
