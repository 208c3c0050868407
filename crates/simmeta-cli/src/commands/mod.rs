//! Command implementations

pub mod incident_field;
pub mod merge;
pub mod render;
