//! Application layer: the install and run workflows.

pub mod use_cases;
